use crate::Calculator;
use crate::error::CalculatorError;
use crate::validate::{non_negative, positive, tenure_months, within_cap};
use configuration::EngineSettings;
use core_types::{
    CalculatorId, CalculatorInput, CalculatorResult, FieldSpec, SeriesPoint, SummaryItem,
    round_money,
};

pub const FIELDS: &[FieldSpec] = &[
    FieldSpec::new("monthly_amount", "Monthly SIP Amount"),
    FieldSpec::new("annual_rate_percent", "Expected Annual Return (%)"),
    FieldSpec::new("years", "Investment Tenure (years)"),
];

/// Future value of a fixed monthly contribution.
///
/// Simulated month by month with the deposit made at the start of each month, before
/// that month's growth (annuity-due): `balance = (balance + amount) * (1 + r/12)`.
/// The series holds the balance at the end of every completed year.
pub fn sip(
    monthly_amount: f64,
    annual_rate_percent: f64,
    years: f64,
) -> Result<CalculatorResult, CalculatorError> {
    let monthly_amount = positive("monthly_amount", monthly_amount)?;
    let rate_per_month = non_negative("annual_rate_percent", annual_rate_percent)? / 100.0 / 12.0;
    let months = tenure_months("years", positive("years", years)?)?;

    let mut result = CalculatorResult::new(CalculatorId::Sip, "SIP Growth");
    let mut balance = 0.0_f64;
    for month in 1..=months {
        balance = (balance + monthly_amount) * (1.0 + rate_per_month);
        if month % 12 == 0 {
            result.series.push(SeriesPoint::year(month / 12, round_money(balance)?));
        }
    }

    let invested = monthly_amount * f64::from(months);
    tracing::debug!(months, balance, invested, "SIP simulated");

    result.summary.push(SummaryItem::currency("future_value", "Future Value", round_money(balance)?));
    result
        .summary
        .push(SummaryItem::currency("total_invested", "Total Invested", round_money(invested)?));
    result.summary.push(SummaryItem::currency(
        "estimated_returns",
        "Estimated Returns",
        round_money(balance - invested)?,
    ));
    Ok(result)
}

#[derive(Debug, Clone)]
pub struct Sip {
    max_years: f64,
}

impl Sip {
    pub fn new(settings: &EngineSettings) -> Self {
        Self { max_years: settings.max_years }
    }
}

impl Calculator for Sip {
    fn id(&self) -> CalculatorId {
        CalculatorId::Sip
    }

    fn fields(&self) -> &'static [FieldSpec] {
        FIELDS
    }

    fn calculate(&self, input: &CalculatorInput) -> Result<CalculatorResult, CalculatorError> {
        let years = within_cap("years", input.get("years"), self.max_years)?;
        sip(input.get("monthly_amount"), input.get("annual_rate_percent"), years)
    }
}
