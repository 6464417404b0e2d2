use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "finquest")]
#[command(about = "Personal-finance gamification: levels, badges, challenges, lessons")]
pub struct Cli {
    /// Optional config file path (TOML).
    #[arg(long)]
    pub config: Option<String>,

    /// Profile snapshot path (also read from `FINQUEST_PROFILE_PATH`).
    #[arg(long, env = "FINQUEST_PROFILE_PATH")]
    pub profile: Option<String>,

    /// Log level override (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Emit machine-readable JSON instead of text.
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the current level and progress at a glance.
    Status,
    /// Grant XP for a user action.
    AddXp(AddXpArgs),
    /// List the badge catalog with unlock state.
    Badges,
    /// Unlock a badge and grant its reward.
    UnlockBadge(UnlockBadgeArgs),
    /// List the challenge catalog with progress.
    Challenges,
    /// Update a challenge's progress; grants the reward on completion.
    Challenge(ChallengeArgs),
    /// Complete a literacy lesson.
    Lesson(LessonArgs),
    /// Show the XP ledger, optionally exporting it to CSV.
    History(HistoryArgs),
    /// Financial calculators.
    Calc(CalcArgs),
    /// Review budget recommendations from the external ML service.
    Recommend(RecommendArgs),
}

#[derive(Args, Debug)]
pub struct AddXpArgs {
    /// XP amount, must be > 0.
    pub amount: i64,

    /// Attribution recorded in the history ledger.
    #[arg(long, default_value = "manual grant")]
    pub reason: String,
}

#[derive(Args, Debug)]
pub struct UnlockBadgeArgs {
    /// Badge id from the catalog (e.g. `first-transaction`).
    pub id: String,
}

#[derive(Args, Debug)]
pub struct ChallengeArgs {
    /// Challenge id from the catalog (e.g. `save-500`).
    pub id: String,

    /// New progress value, must be >= 0. Overshoot is allowed.
    pub progress: i64,
}

#[derive(Args, Debug)]
pub struct LessonArgs {
    /// Course id (e.g. `budgeting-basics`).
    pub course: String,

    /// Lesson id within the course.
    pub lesson: String,
}

#[derive(Args, Debug)]
pub struct HistoryArgs {
    /// Write the ledger to a CSV file instead of printing it.
    #[arg(long)]
    pub csv: Option<String>,
}

#[derive(Args, Debug)]
pub struct CalcArgs {
    #[command(subcommand)]
    pub command: CalcCommand,
}

#[derive(Subcommand, Debug)]
pub enum CalcCommand {
    /// Future value of a principal under compound interest.
    CompoundInterest {
        principal: f64,
        /// Annual rate as a percentage (e.g. 5.0).
        rate: f64,
        /// Compounding periods per year.
        #[arg(long, default_value_t = 12)]
        compounds_per_year: u32,
        years: f64,
    },
    /// Future value of a monthly SIP.
    Sip {
        monthly_payment: f64,
        /// Annual rate as a percentage (e.g. 12.0).
        rate: f64,
        years: f64,
    },
}

#[derive(Args, Debug)]
pub struct RecommendArgs {
    #[command(subcommand)]
    pub command: RecommendCommand,
}

#[derive(Subcommand, Debug)]
pub enum RecommendCommand {
    /// Print recommendations from a service response file.
    Show {
        /// Path to a JSON `RecommendationsResponse` payload.
        #[arg(long)]
        file: String,
    },
    /// Emit an accept action payload for a category.
    Accept { category: String },
    /// Emit a reject action payload for a category.
    Reject { category: String },
}
