use crate::error::CoreError;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Converts a computed amount into a published money value with two decimal places.
///
/// Rounds half away from zero, the way amounts are shown to a person. Callers keep
/// accumulating in `f64` and only round here, when a value leaves a calculation.
pub fn round_money(value: f64) -> Result<Decimal, CoreError> {
    round_to(value, 2)
}

/// Rounds to whole currency units.
pub fn round_whole(value: f64) -> Result<Decimal, CoreError> {
    round_to(value, 0)
}

/// Rounds a per-period rate (a plain fraction) for publication.
pub fn round_rate(value: f64) -> Result<Decimal, CoreError> {
    round_to(value, 6)
}

fn round_to(value: f64, dp: u32) -> Result<Decimal, CoreError> {
    if !value.is_finite() {
        return Err(CoreError::NonRepresentable(value));
    }
    let decimal = Decimal::from_f64(value).ok_or(CoreError::NonRepresentable(value))?;
    let rounded = decimal.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    // A tiny negative residue must not print as "-0.00".
    if rounded.is_zero() {
        return Ok(Decimal::ZERO);
    }
    Ok(rounded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn rounds_to_two_places() {
        assert_eq!(round_money(22196.401_36).unwrap(), dec!(22196.40));
        assert_eq!(round_money(55839.477_5).unwrap(), dec!(55839.48));
    }

    #[test]
    fn negative_residue_becomes_plain_zero() {
        let zero = round_money(-0.000_000_1).unwrap();
        assert!(zero.is_zero());
        assert!(!zero.is_sign_negative());
    }

    #[test]
    fn whole_units() {
        assert_eq!(round_whole(21589.249_972).unwrap(), dec!(21589));
    }

    #[test]
    fn rejects_non_finite() {
        assert!(round_money(f64::NAN).is_err());
        assert!(round_money(f64::INFINITY).is_err());
    }
}
