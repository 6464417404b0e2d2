//! Closed-form financial calculators.
//!
//! These back the calculator screens of clients: plain formula evaluation
//! with input validation, no iteration and no state.

use crate::{ResultEngine, error::EngineError};

/// Future value of a principal under compound interest:
/// `P * (1 + r/n)^(n*t)`.
///
/// `annual_rate_pct` is a percentage (e.g. `5.0` for 5%).
pub fn compound_interest(
    principal: f64,
    annual_rate_pct: f64,
    compounds_per_year: u32,
    years: f64,
) -> ResultEngine<f64> {
    if !principal.is_finite() || principal < 0.0 {
        return Err(EngineError::InvalidAmount(
            "principal must be a non-negative number".to_string(),
        ));
    }
    if !annual_rate_pct.is_finite() || annual_rate_pct < 0.0 {
        return Err(EngineError::InvalidAmount(
            "rate must be a non-negative percentage".to_string(),
        ));
    }
    if compounds_per_year == 0 {
        return Err(EngineError::InvalidAmount(
            "compounding frequency must be > 0".to_string(),
        ));
    }
    if !years.is_finite() || years < 0.0 {
        return Err(EngineError::InvalidAmount(
            "years must be a non-negative number".to_string(),
        ));
    }

    let rate = annual_rate_pct / 100.0;
    let periods = f64::from(compounds_per_year) * years;
    Ok(principal * (1.0 + rate / f64::from(compounds_per_year)).powf(periods))
}

/// Future value of a monthly SIP (systematic investment plan):
/// `P * ((1 + i)^n - 1) / i * (1 + i)` with `i` the monthly rate and `n`
/// the number of monthly installments.
///
/// At zero rate the formula degenerates to `P * n`.
pub fn sip_future_value(
    monthly_payment: f64,
    annual_rate_pct: f64,
    years: f64,
) -> ResultEngine<f64> {
    if !monthly_payment.is_finite() || monthly_payment < 0.0 {
        return Err(EngineError::InvalidAmount(
            "monthly payment must be a non-negative number".to_string(),
        ));
    }
    if !annual_rate_pct.is_finite() || annual_rate_pct < 0.0 {
        return Err(EngineError::InvalidAmount(
            "rate must be a non-negative percentage".to_string(),
        ));
    }
    if !years.is_finite() || years < 0.0 {
        return Err(EngineError::InvalidAmount(
            "years must be a non-negative number".to_string(),
        ));
    }

    let months = (years * 12.0).round();
    let monthly_rate = annual_rate_pct / 100.0 / 12.0;
    if monthly_rate == 0.0 {
        return Ok(monthly_payment * months);
    }

    let growth = (1.0 + monthly_rate).powf(months);
    Ok(monthly_payment * (growth - 1.0) / monthly_rate * (1.0 + monthly_rate))
}
