//! Field checks shared by every calculator. Each returns the value on success so
//! calls read as bindings: `let years = positive("years", years)?;`.

use crate::error::CalculatorError;
use configuration::DEFAULT_MAX_YEARS;

pub fn non_negative(field: &str, value: f64) -> Result<f64, CalculatorError> {
    if !value.is_finite() {
        return Err(CalculatorError::invalid(field, "must be a finite number"));
    }
    if value < 0.0 {
        return Err(CalculatorError::invalid(field, "must not be negative"));
    }
    Ok(value)
}

pub fn positive(field: &str, value: f64) -> Result<f64, CalculatorError> {
    let value = non_negative(field, value)?;
    if value == 0.0 {
        return Err(CalculatorError::invalid(field, "must be greater than zero"));
    }
    Ok(value)
}

/// Rejects tenures above the configured cap before any loop runs.
pub fn within_cap(field: &str, years: f64, max_years: f64) -> Result<f64, CalculatorError> {
    if years > max_years {
        return Err(CalculatorError::invalid(
            field,
            format!("must not exceed {max_years} years"),
        ));
    }
    Ok(years)
}

/// Number of whole years plotted for a tenure; the yearly series runs `0..=whole_years`.
pub fn whole_years(field: &str, years: f64) -> Result<u32, CalculatorError> {
    let years = bounded_tenure(field, years)?;
    Ok(years.floor() as u32)
}

/// A tenure in years as a whole number of monthly periods (at least one).
pub fn tenure_months(field: &str, years: f64) -> Result<u32, CalculatorError> {
    let months = (bounded_tenure(field, years)? * 12.0).round();
    if months < 1.0 {
        return Err(CalculatorError::invalid(field, "must cover at least one month"));
    }
    Ok(months as u32)
}

/// Every tenure that drives a loop or a series stays under the built-in ceiling, so
/// the calculators are bounded even when called without an engine.
fn bounded_tenure(field: &str, years: f64) -> Result<f64, CalculatorError> {
    let years = non_negative(field, years)?;
    if years > DEFAULT_MAX_YEARS {
        return Err(CalculatorError::invalid(
            field,
            format!("must not exceed {DEFAULT_MAX_YEARS} years"),
        ));
    }
    Ok(years)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_not_positive() {
        assert!(positive("principal", 0.0).is_err());
        assert_eq!(non_negative("rate", 0.0).unwrap(), 0.0);
    }

    #[test]
    fn nan_and_negative_are_rejected() {
        assert!(non_negative("rate", f64::NAN).is_err());
        assert!(non_negative("rate", -0.5).is_err());
    }

    #[test]
    fn tenure_rounds_to_months() {
        assert_eq!(tenure_months("years", 2.5).unwrap(), 30);
        assert_eq!(tenure_months("years", 1.0 / 12.0).unwrap(), 1);
        assert!(tenure_months("years", 0.01).is_err());
    }

    #[test]
    fn tenures_above_the_ceiling_are_rejected() {
        assert_eq!(whole_years("years", 2.9).unwrap(), 2);
        assert_eq!(whole_years("years", DEFAULT_MAX_YEARS).unwrap(), 500);
        assert!(whole_years("years", 1e12).is_err());
        assert!(tenure_months("years", DEFAULT_MAX_YEARS + 0.5).is_err());
        assert!(tenure_months("years", f64::INFINITY).is_err());
    }

    #[test]
    fn cap_applies_strictly_above() {
        assert!(within_cap("years", 500.0, 500.0).is_ok());
        assert!(within_cap("years", 500.5, 500.0).is_err());
    }
}
