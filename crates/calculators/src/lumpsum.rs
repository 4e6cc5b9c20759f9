use crate::Calculator;
use crate::error::CalculatorError;
use crate::validate::{non_negative, positive, whole_years, within_cap};
use configuration::EngineSettings;
use core_types::{
    CalculatorId, CalculatorInput, CalculatorResult, FieldSpec, SeriesPoint, SummaryItem,
    round_money,
};

pub const FIELDS: &[FieldSpec] = &[
    FieldSpec::new("amount", "Investment Amount"),
    FieldSpec::new("annual_rate_percent", "Annual Return (%)"),
    FieldSpec::new("years", "Years"),
];

/// One-time investment compounded annually: `FV = amount * (1 + r)^years`.
pub fn lumpsum(
    amount: f64,
    annual_rate_percent: f64,
    years: f64,
) -> Result<CalculatorResult, CalculatorError> {
    let amount = positive("amount", amount)?;
    let rate = non_negative("annual_rate_percent", annual_rate_percent)? / 100.0;
    let years = positive("years", years)?;
    let last_year = whole_years("years", years)?;

    let value_at = |t: f64| amount * (1.0 + rate).powf(t);

    let mut result = CalculatorResult::new(CalculatorId::Lumpsum, "Lump Sum Growth");
    result
        .summary
        .push(SummaryItem::currency("future_value", "Future Value", round_money(value_at(years))?));
    for year in 0..=last_year {
        result.series.push(SeriesPoint::year(year, round_money(value_at(year as f64))?));
    }
    Ok(result)
}

#[derive(Debug, Clone)]
pub struct LumpSum {
    max_years: f64,
}

impl LumpSum {
    pub fn new(settings: &EngineSettings) -> Self {
        Self { max_years: settings.max_years }
    }
}

impl Calculator for LumpSum {
    fn id(&self) -> CalculatorId {
        CalculatorId::Lumpsum
    }

    fn fields(&self) -> &'static [FieldSpec] {
        FIELDS
    }

    fn calculate(&self, input: &CalculatorInput) -> Result<CalculatorResult, CalculatorError> {
        let years = within_cap("years", input.get("years"), self.max_years)?;
        lumpsum(input.get("amount"), input.get("annual_rate_percent"), years)
    }
}
