use crate::Calculator;
use crate::error::CalculatorError;
use crate::validate::{non_negative, positive, whole_years, within_cap};
use configuration::EngineSettings;
use core_types::{
    CalculatorId, CalculatorInput, CalculatorResult, FieldSpec, SeriesPoint, SummaryItem,
    round_money, round_whole,
};

pub const FIELDS: &[FieldSpec] = &[
    FieldSpec::new("principal", "Principal"),
    FieldSpec::new("annual_rate_percent", "Annual Rate (%)"),
    FieldSpec::new("years", "Years"),
    // Annually unless the caller picks another frequency.
    FieldSpec::with_default("compounds_per_year", "Compounds per year", 1.0),
];

/// Future value of a principal compounded `compounds_per_year` times a year.
///
/// `FV = P * (1 + r/n)^(n*t)`, with a yearly series of the same formula at each whole year.
pub fn compound(
    principal: f64,
    annual_rate_percent: f64,
    years: f64,
    compounds_per_year: f64,
) -> Result<CalculatorResult, CalculatorError> {
    let principal = positive("principal", principal)?;
    let rate = non_negative("annual_rate_percent", annual_rate_percent)? / 100.0;
    let years = positive("years", years)?;
    let last_year = whole_years("years", years)?;
    let n = positive("compounds_per_year", compounds_per_year)?;

    let value_at = |t: f64| principal * (1.0 + rate / n).powf(n * t);
    let future_value = value_at(years);
    tracing::debug!(principal, rate, years, n, future_value, "Compound interest calculated");

    let mut result = CalculatorResult::new(CalculatorId::Compound, "Compound Growth");
    result
        .summary
        .push(SummaryItem::currency("future_value", "Future Value", round_money(future_value)?));
    for year in 0..=last_year {
        result.series.push(SeriesPoint::year(year, round_money(value_at(year as f64))?));
    }
    Ok(result)
}

/// The chart shown before any calculator is picked: 10,000 growing at 8% a year for
/// ten years, in whole units.
pub fn demo_growth() -> Result<CalculatorResult, CalculatorError> {
    const PRINCIPAL: f64 = 10_000.0;
    const RATE: f64 = 0.08;
    const YEARS: u32 = 10;

    let mut result = CalculatorResult::new(CalculatorId::Compound, "Demo Growth (8% p.a.)");
    for year in 0..=YEARS {
        let value = PRINCIPAL * (1.0 + RATE).powi(year as i32);
        result.series.push(SeriesPoint::year(year, round_whole(value)?));
    }
    if let Some(last) = result.last_value() {
        result.summary.push(SummaryItem::currency("future_value", "Future Value", last));
    }
    Ok(result)
}

/// Sample chart for the compound calculator: 10,000 at 8% compounded monthly for ten
/// years, headlined by its final value.
pub fn compound_demo() -> Result<CalculatorResult, CalculatorError> {
    let mut result = compound(10_000.0, 8.0, 10.0, 12.0)?;
    result.series_name = "Compound (demo)".to_string();
    Ok(result)
}

#[derive(Debug, Clone)]
pub struct CompoundInterest {
    max_years: f64,
}

impl CompoundInterest {
    pub fn new(settings: &EngineSettings) -> Self {
        Self { max_years: settings.max_years }
    }
}

impl Calculator for CompoundInterest {
    fn id(&self) -> CalculatorId {
        CalculatorId::Compound
    }

    fn fields(&self) -> &'static [FieldSpec] {
        FIELDS
    }

    fn calculate(&self, input: &CalculatorInput) -> Result<CalculatorResult, CalculatorError> {
        let years = within_cap("years", input.get("years"), self.max_years)?;
        compound(
            input.get("principal"),
            input.get("annual_rate_percent"),
            years,
            input.get("compounds_per_year"),
        )
    }

    fn default_chart(&self) -> Result<Option<CalculatorResult>, CalculatorError> {
        compound_demo().map(Some)
    }
}
