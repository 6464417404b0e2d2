use clap::Parser;
use engine::{Engine, LevelingConfig};

use crate::{
    cli::{CalcCommand, Cli, Command, RecommendCommand},
    error::Result,
    store::ProfileStore,
};

mod cli;
mod error;
mod settings;
mod store;
mod ui;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = settings::load(&cli)?;

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "finquest={level},engine={level}",
            level = settings.app.level
        ))
        .init();

    run(cli, settings)
}

fn run(cli: Cli, settings: settings::Settings) -> Result<()> {
    let store = ProfileStore::new(&settings.profile.path);
    let snapshot = store.load()?;
    let mut engine = Engine::builder()
        .config(LevelingConfig {
            max_level: settings.leveling.max_level,
        })
        .snapshot(snapshot)
        .build()?;

    match cli.command {
        Command::Status => ui::print_status(&engine, cli.json)?,
        Command::Badges => ui::print_badges(&engine, cli.json)?,
        Command::Challenges => ui::print_challenges(&engine, cli.json)?,
        Command::AddXp(args) => {
            let award = engine.add_xp(args.amount, &args.reason)?;
            persist(&store, &engine);
            ui::print_award(&award, cli.json)?;
        }
        Command::UnlockBadge(args) => {
            let unlock = engine.unlock_badge(&args.id)?;
            persist(&store, &engine);
            if !unlock.newly_unlocked {
                println!("{} is already unlocked", unlock.badge.title);
            } else if let Some(award) = &unlock.award {
                ui::print_award(award, cli.json)?;
            }
        }
        Command::Challenge(args) => {
            let update = engine.update_challenge_progress(&args.id, args.progress)?;
            // The engine op grants nothing; the reward follows exactly once,
            // on the completing update.
            let award = if update.completed_now {
                let reason = format!("completed challenge {}", update.challenge.title);
                Some(engine.add_xp(update.challenge.xp, &reason)?)
            } else {
                None
            };
            persist(&store, &engine);

            if !cli.json {
                println!(
                    "{}: {}/{}",
                    update.challenge.title, update.challenge.progress, update.challenge.target
                );
            }
            if let Some(award) = &award {
                ui::print_award(award, cli.json)?;
            }
        }
        Command::Lesson(args) => {
            let outcome = engine.complete_lesson(&args.course, &args.lesson)?;
            persist(&store, &engine);
            match &outcome.award {
                Some(award) => {
                    ui::print_award(award, cli.json)?;
                    if outcome.course_completed && !cli.json {
                        println!("Course {} completed!", args.course);
                    }
                }
                None => println!("Lesson {} was already completed", args.lesson),
            }
        }
        Command::History(args) => print_history(&engine, args.csv.as_deref(), cli.json)?,
        Command::Calc(args) => {
            let value = match args.command {
                CalcCommand::CompoundInterest {
                    principal,
                    rate,
                    compounds_per_year,
                    years,
                } => engine::calculators::compound_interest(
                    principal,
                    rate,
                    compounds_per_year,
                    years,
                )?,
                CalcCommand::Sip {
                    monthly_payment,
                    rate,
                    years,
                } => engine::calculators::sip_future_value(monthly_payment, rate, years)?,
            };
            println!("{value:.2}");
        }
        Command::Recommend(args) => recommend(&args.command, cli.json)?,
    }

    Ok(())
}

/// Best-effort persistence: the engine stays correct in memory even when
/// the store is unavailable.
fn persist(store: &ProfileStore, engine: &Engine) {
    if let Err(err) = store.save(&engine.snapshot()) {
        tracing::error!(path = store.path(), "failed to persist profile: {err}");
    }
}

fn print_history(engine: &Engine, csv_path: Option<&str>, json: bool) -> Result<()> {
    if let Some(path) = csv_path {
        let mut writer = csv::Writer::from_path(path)?;
        for entry in engine.history().entries() {
            writer.serialize(ui::history_view(entry))?;
        }
        writer.flush()?;
        println!("Wrote {} entries to {path}", engine.history().len());
        return Ok(());
    }

    if json {
        let response = api_types::history::HistoryResponse {
            entries: engine.history().entries().iter().map(ui::history_view).collect(),
        };
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    for entry in engine.history().entries() {
        println!(
            "{} +{} {} (total {})",
            entry.awarded_at.format("%Y-%m-%d %H:%M"),
            entry.amount,
            entry.reason,
            entry.total_after
        );
    }
    Ok(())
}

fn recommend(command: &RecommendCommand, json: bool) -> Result<()> {
    match command {
        RecommendCommand::Show { file } => {
            let payload = std::fs::read_to_string(file)?;
            let response: api_types::recommendation::RecommendationsResponse =
                serde_json::from_str(&payload)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&response)?);
                return Ok(());
            }
            for rec in &response.recommendations {
                println!(
                    "{}: {:.2} -> {:.2} ({})",
                    rec.category, rec.current_allocation, rec.recommended, rec.reason
                );
            }
        }
        RecommendCommand::Accept { category } => print_action(
            category,
            api_types::recommendation::RecommendationVerdict::Accept,
        )?,
        RecommendCommand::Reject { category } => print_action(
            category,
            api_types::recommendation::RecommendationVerdict::Reject,
        )?,
    }
    Ok(())
}

/// Emit the action payload the external ML service expects.
fn print_action(
    category: &str,
    action: api_types::recommendation::RecommendationVerdict,
) -> Result<()> {
    let action = api_types::recommendation::RecommendationAction {
        category: category.to_string(),
        action,
    };
    println!("{}", serde_json::to_string(&action)?);
    Ok(())
}
