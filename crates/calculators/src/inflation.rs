use crate::Calculator;
use crate::error::CalculatorError;
use crate::validate::{non_negative, positive, whole_years, within_cap};
use configuration::EngineSettings;
use core_types::{
    CalculatorId, CalculatorInput, CalculatorResult, FieldSpec, SeriesPoint, SummaryItem,
    round_money,
};

pub const FIELDS: &[FieldSpec] = &[
    FieldSpec::new("present_amount", "Today's Amount"),
    FieldSpec::new("annual_inflation_percent", "Annual Inflation Rate (%)"),
    FieldSpec::new("years", "Years"),
];

/// What today's amount will be worth in today's money after `years` of inflation:
/// `amount / (1 + r)^years`.
pub fn inflation_impact(
    present_amount: f64,
    annual_inflation_percent: f64,
    years: f64,
) -> Result<CalculatorResult, CalculatorError> {
    let amount = positive("present_amount", present_amount)?;
    let rate = non_negative("annual_inflation_percent", annual_inflation_percent)? / 100.0;
    let years = positive("years", years)?;
    let last_year = whole_years("years", years)?;

    let value_at = |t: f64| amount / (1.0 + rate).powf(t);

    let mut result = CalculatorResult::new(CalculatorId::Inflation, "Inflation Impact");
    result.summary.push(SummaryItem::currency(
        "future_purchasing_power",
        "Equivalent Purchasing Power Today",
        round_money(value_at(years))?,
    ));
    for year in 0..=last_year {
        result.series.push(SeriesPoint::year(year, round_money(value_at(year as f64))?));
    }
    Ok(result)
}

#[derive(Debug, Clone)]
pub struct InflationImpact {
    max_years: f64,
}

impl InflationImpact {
    pub fn new(settings: &EngineSettings) -> Self {
        Self { max_years: settings.max_years }
    }
}

impl Calculator for InflationImpact {
    fn id(&self) -> CalculatorId {
        CalculatorId::Inflation
    }

    fn fields(&self) -> &'static [FieldSpec] {
        FIELDS
    }

    fn calculate(&self, input: &CalculatorInput) -> Result<CalculatorResult, CalculatorError> {
        let years = within_cap("years", input.get("years"), self.max_years)?;
        inflation_impact(
            input.get("present_amount"),
            input.get("annual_inflation_percent"),
            years,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn six_percent_for_ten_years() {
        let result = inflation_impact(100_000.0, 6.0, 10.0).unwrap();
        assert_eq!(result.summary_value("future_purchasing_power"), Some(dec!(55839.48)));
        assert_eq!(result.series.len(), 11);
        assert_eq!(result.series[0].value, dec!(100000));
    }

    #[test]
    fn series_only_decreases() {
        let result = inflation_impact(10_000.0, 4.0, 15.0).unwrap();
        assert!(result.series.windows(2).all(|w| w[1].value < w[0].value));
    }

    #[test]
    fn requires_amount_and_years() {
        assert!(inflation_impact(0.0, 6.0, 10.0).is_err());
        assert!(inflation_impact(100.0, 6.0, 0.0).is_err());
    }
}
