use crate::Calculator;
use crate::error::CalculatorError;
use crate::validate::{non_negative, positive, within_cap};
use configuration::{DEFAULT_RETIREMENT_FALLBACK_MONTHLY_RATE, EngineSettings};
use core_types::{
    CalculatorId, CalculatorInput, CalculatorResult, FieldSpec, SeriesPoint, SummaryItem,
    round_money, round_rate,
};

pub const FIELDS: &[FieldSpec] = &[
    FieldSpec::new("current_age", "Current Age"),
    FieldSpec::new("retirement_age", "Retirement Age"),
    FieldSpec::new("desired_monthly_income", "Desired Monthly Income at Retirement"),
    FieldSpec::new("annual_return_percent", "Expected Annual Return (%) during retirement"),
    FieldSpec::with_default("years_in_retirement", "Estimated Years in Retirement", 20.0),
];

/// Chart labels of the illustrative corpus ramp.
const RAMP_LABELS: [u32; 5] = [0, 5, 10, 15, 20];

/// [`retirement_corpus_with_fallback`] using the default fallback rate.
pub fn retirement_corpus(
    current_age: f64,
    retirement_age: f64,
    desired_monthly_income: f64,
    annual_return_percent: f64,
    years_in_retirement: f64,
) -> Result<CalculatorResult, CalculatorError> {
    retirement_corpus_with_fallback(
        current_age,
        retirement_age,
        desired_monthly_income,
        annual_return_percent,
        years_in_retirement,
        DEFAULT_RETIREMENT_FALLBACK_MONTHLY_RATE,
    )
}

/// Corpus needed at retirement to fund a monthly withdrawal for the given number of
/// years: the present value of that annuity, `income * (1 - (1 + r)^-n) / r`.
///
/// A zero expected return is treated as "not given" and `fallback_monthly_rate` is used
/// instead; the rate actually applied is published as `assumed_monthly_rate`.
///
/// The chart is a five-step linear ramp up to the corpus. It illustrates the target and
/// does not model how the corpus accumulates.
pub fn retirement_corpus_with_fallback(
    current_age: f64,
    retirement_age: f64,
    desired_monthly_income: f64,
    annual_return_percent: f64,
    years_in_retirement: f64,
    fallback_monthly_rate: f64,
) -> Result<CalculatorResult, CalculatorError> {
    let current_age = non_negative("current_age", current_age)?;
    let retirement_age = positive("retirement_age", retirement_age)?;
    let income = positive("desired_monthly_income", desired_monthly_income)?;
    let annual_return = non_negative("annual_return_percent", annual_return_percent)?;
    let years = non_negative("years_in_retirement", years_in_retirement)?;
    if retirement_age <= current_age {
        return Err(CalculatorError::invalid(
            "retirement_age",
            "must be greater than current_age",
        ));
    }

    let mut monthly_rate = annual_return / 100.0 / 12.0;
    if monthly_rate == 0.0 {
        tracing::warn!(
            fallback_monthly_rate,
            "No expected return given, assuming the fallback monthly rate"
        );
        monthly_rate = fallback_monthly_rate;
    }

    let months = years * 12.0;
    let corpus = income * (1.0 - (1.0 + monthly_rate).powf(-months)) / monthly_rate;
    tracing::debug!(monthly_rate, months, corpus, "Retirement corpus estimated");

    let mut result = CalculatorResult::new(CalculatorId::Retirement, "Corpus Build (demo)");
    result.summary.push(SummaryItem::currency(
        "corpus",
        "Estimated Retirement Corpus",
        round_money(corpus)?,
    ));
    result
        .summary
        .push(SummaryItem::currency("monthly_withdrawal", "Monthly Withdrawal", round_money(income)?));
    result.summary.push(SummaryItem::rate(
        "assumed_monthly_rate",
        "Assumed Monthly Return",
        round_rate(monthly_rate)?,
    ));

    let steps = RAMP_LABELS.len() as f64;
    for (i, label) in RAMP_LABELS.iter().enumerate() {
        let value = corpus * (i as f64 + 1.0) / steps;
        result.series.push(SeriesPoint::year(*label, round_money(value)?));
    }
    Ok(result)
}

#[derive(Debug, Clone)]
pub struct RetirementCorpus {
    max_years: f64,
    fallback_monthly_rate: f64,
}

impl RetirementCorpus {
    pub fn new(settings: &EngineSettings) -> Self {
        Self {
            max_years: settings.max_years,
            fallback_monthly_rate: settings.retirement_fallback_monthly_rate,
        }
    }
}

impl Calculator for RetirementCorpus {
    fn id(&self) -> CalculatorId {
        CalculatorId::Retirement
    }

    fn fields(&self) -> &'static [FieldSpec] {
        FIELDS
    }

    fn calculate(&self, input: &CalculatorInput) -> Result<CalculatorResult, CalculatorError> {
        let years = within_cap(
            "years_in_retirement",
            input.get("years_in_retirement"),
            self.max_years,
        )?;
        retirement_corpus_with_fallback(
            input.get("current_age"),
            input.get("retirement_age"),
            input.get("desired_monthly_income"),
            input.get("annual_return_percent"),
            years,
            self.fallback_monthly_rate,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn corpus_of(result: &CalculatorResult) -> Decimal {
        result.summary_value("corpus").unwrap()
    }

    #[test]
    fn present_value_of_the_withdrawals() {
        // 50,000 a month for 20 years at 6% a year (0.5% a month).
        let result = retirement_corpus(30.0, 60.0, 50_000.0, 6.0, 20.0).unwrap();
        let expected = 50_000.0 * (1.0 - 1.005_f64.powf(-240.0)) / 0.005;
        assert!((corpus_of(&result) - round_money(expected).unwrap()).abs() < dec!(0.01));
        assert_eq!(result.summary_value("assumed_monthly_rate"), Some(dec!(0.005)));
    }

    #[test]
    fn zero_return_uses_the_fallback_rate() {
        let explicit = retirement_corpus(30.0, 60.0, 50_000.0, 6.0, 20.0).unwrap();
        let fallback = retirement_corpus(30.0, 60.0, 50_000.0, 0.0, 20.0).unwrap();
        assert!((corpus_of(&explicit) - corpus_of(&fallback)).abs() <= dec!(0.01));
    }

    #[test]
    fn configured_fallback_is_honoured() {
        let result =
            retirement_corpus_with_fallback(30.0, 60.0, 10_000.0, 0.0, 10.0, 0.004).unwrap();
        assert_eq!(result.summary_value("assumed_monthly_rate"), Some(dec!(0.004)));
    }

    #[test]
    fn ramp_has_five_points_ending_at_the_corpus() {
        let result = retirement_corpus(25.0, 55.0, 40_000.0, 8.0, 25.0).unwrap();
        let labels: Vec<String> = result.series.iter().map(|p| p.label.to_string()).collect();
        assert_eq!(labels, ["0", "5", "10", "15", "20"]);
        let last = result.last_value().unwrap();
        assert!((last - corpus_of(&result)).abs() <= dec!(0.01));
    }

    #[test]
    fn retirement_must_come_after_current_age() {
        assert!(retirement_corpus(60.0, 60.0, 50_000.0, 6.0, 20.0).is_err());
        assert!(retirement_corpus(30.0, 0.0, 50_000.0, 6.0, 20.0).is_err());
        assert!(retirement_corpus(30.0, 60.0, 0.0, 6.0, 20.0).is_err());
    }

    #[test]
    fn no_years_in_retirement_needs_no_corpus() {
        let result = retirement_corpus(30.0, 60.0, 50_000.0, 6.0, 0.0).unwrap();
        assert_eq!(corpus_of(&result), dec!(0));
    }
}
