//! Equated monthly installments and the repayment schedule behind them.
//!
//! [`emi`] and [`amortization`] both walk the same month-by-month schedule built by
//! [`LoanTerms::schedule`], so the balance curve of the EMI chart and the rows of the
//! full schedule cannot drift apart.

use crate::Calculator;
use crate::error::CalculatorError;
use crate::validate::{non_negative, positive, tenure_months, within_cap};
use configuration::EngineSettings;
use core_types::{
    AmortizationRow, CalculatorId, CalculatorInput, CalculatorResult, FieldSpec, SeriesPoint,
    SummaryItem, round_money,
};
use rust_decimal::Decimal;

pub const FIELDS: &[FieldSpec] = &[
    FieldSpec::new("principal", "Loan Amount"),
    FieldSpec::new("annual_rate_percent", "Annual Interest Rate (%)"),
    FieldSpec::new("years", "Tenure (years)"),
];

/// A validated loan: principal, monthly rate, number of months and the resulting EMI.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoanTerms {
    pub principal: f64,
    pub monthly_rate: f64,
    pub months: u32,
    pub installment: f64,
}

impl LoanTerms {
    pub fn new(
        principal: f64,
        annual_rate_percent: f64,
        years: f64,
    ) -> Result<Self, CalculatorError> {
        let principal = positive("principal", principal)?;
        let monthly_rate = non_negative("annual_rate_percent", annual_rate_percent)? / 12.0 / 100.0;
        let months = tenure_months("years", positive("years", years)?)?;

        Ok(Self {
            principal,
            monthly_rate,
            months,
            installment: monthly_installment(principal, monthly_rate, months),
        })
    }

    pub fn total_payment(&self) -> f64 {
        self.installment * f64::from(self.months)
    }

    pub fn total_interest(&self) -> f64 {
        self.total_payment() - self.principal
    }

    /// Every month from 1 to `months`.
    ///
    /// The running balance stays unrounded; each published component is rounded on
    /// its own and the balance is floored at zero to absorb drift in the last month.
    pub fn schedule(&self) -> Result<Vec<AmortizationRow>, CalculatorError> {
        let mut rows = Vec::with_capacity(self.months as usize);
        let mut balance = self.principal;

        for period in 1..=self.months {
            let interest = balance * self.monthly_rate;
            let principal = self.installment - interest;
            balance -= principal;

            rows.push(AmortizationRow {
                period,
                principal_portion: round_money(principal)?,
                interest_portion: round_money(interest)?,
                remaining_balance: round_money(balance.max(0.0))?,
            });
        }

        Ok(rows)
    }
}

/// `P * r * (1 + r)^n / ((1 + r)^n - 1)`, or a straight `P / n` when the rate is zero
/// (the annuity formula divides by zero there).
pub fn monthly_installment(principal: f64, monthly_rate: f64, months: u32) -> f64 {
    let n = f64::from(months);
    if monthly_rate == 0.0 {
        return principal / n;
    }
    let factor = (1.0 + monthly_rate).powf(n);
    principal * monthly_rate * factor / (factor - 1.0)
}

/// The full month-by-month repayment schedule for a loan.
pub fn amortization_schedule(
    principal: f64,
    annual_rate_percent: f64,
    years: f64,
) -> Result<Vec<AmortizationRow>, CalculatorError> {
    LoanTerms::new(principal, annual_rate_percent, years)?.schedule()
}

/// Outstanding balance at the end of each year, read from the schedule rows.
fn yearly_balance(rows: &[AmortizationRow]) -> Vec<SeriesPoint> {
    rows.iter()
        .filter(|row| row.period % 12 == 0)
        .map(|row| SeriesPoint::year(row.period / 12, row.remaining_balance))
        .collect()
}

/// Monthly EMI with total payment and interest, charted as the outstanding balance.
pub fn emi(
    principal: f64,
    annual_rate_percent: f64,
    years: f64,
) -> Result<CalculatorResult, CalculatorError> {
    let terms = LoanTerms::new(principal, annual_rate_percent, years)?;
    let rows = terms.schedule()?;
    tracing::debug!(?terms, "EMI calculated");

    let mut result = CalculatorResult::new(CalculatorId::Emi, "Outstanding Balance");
    result
        .summary
        .push(SummaryItem::currency("monthly_emi", "Monthly EMI", round_money(terms.installment)?));
    result.summary.push(SummaryItem::currency(
        "total_payment",
        "Total Payment",
        round_money(terms.total_payment())?,
    ));
    result.summary.push(SummaryItem::currency(
        "total_interest",
        "Total Interest",
        round_money(terms.total_interest())?,
    ));
    result.series = yearly_balance(&rows);
    Ok(result)
}

/// The detailed schedule view: EMI, the rows themselves and the yearly balance chart.
pub fn amortization(
    principal: f64,
    annual_rate_percent: f64,
    years: f64,
) -> Result<CalculatorResult, CalculatorError> {
    let terms = LoanTerms::new(principal, annual_rate_percent, years)?;
    let rows = terms.schedule()?;
    let final_balance = rows.last().map(|row| row.remaining_balance).unwrap_or(Decimal::ZERO);

    let mut result = CalculatorResult::new(CalculatorId::Amort, "Outstanding");
    result
        .summary
        .push(SummaryItem::currency("monthly_emi", "Monthly EMI", round_money(terms.installment)?));
    result.summary.push(SummaryItem::currency(
        "total_interest",
        "Total Interest",
        round_money(terms.total_interest())?,
    ));
    result
        .summary
        .push(SummaryItem::currency("final_balance", "Final Balance", final_balance));
    result.series = yearly_balance(&rows);
    result.schedule = rows;
    Ok(result)
}

fn terms_from(input: &CalculatorInput, max_years: f64) -> Result<(f64, f64, f64), CalculatorError> {
    let years = within_cap("years", input.get("years"), max_years)?;
    Ok((input.get("principal"), input.get("annual_rate_percent"), years))
}

#[derive(Debug, Clone)]
pub struct Emi {
    max_years: f64,
}

impl Emi {
    pub fn new(settings: &EngineSettings) -> Self {
        Self { max_years: settings.max_years }
    }
}

impl Calculator for Emi {
    fn id(&self) -> CalculatorId {
        CalculatorId::Emi
    }

    fn fields(&self) -> &'static [FieldSpec] {
        FIELDS
    }

    fn calculate(&self, input: &CalculatorInput) -> Result<CalculatorResult, CalculatorError> {
        let (principal, rate, years) = terms_from(input, self.max_years)?;
        emi(principal, rate, years)
    }
}

#[derive(Debug, Clone)]
pub struct Amortization {
    max_years: f64,
}

impl Amortization {
    pub fn new(settings: &EngineSettings) -> Self {
        Self { max_years: settings.max_years }
    }
}

impl Calculator for Amortization {
    fn id(&self) -> CalculatorId {
        CalculatorId::Amort
    }

    fn fields(&self) -> &'static [FieldSpec] {
        FIELDS
    }

    fn calculate(&self, input: &CalculatorInput) -> Result<CalculatorResult, CalculatorError> {
        let (principal, rate, years) = terms_from(input, self.max_years)?;
        amortization(principal, rate, years)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn standard_installment() {
        // 1,00,000 at 12% over one year.
        let terms = LoanTerms::new(100_000.0, 12.0, 1.0).unwrap();
        assert!((terms.installment - 8884.88).abs() < 0.01, "got {}", terms.installment);
        assert_eq!(terms.months, 12);
    }

    #[test]
    fn zero_rate_divides_evenly() {
        let result = emi(100_000.0, 0.0, 5.0).unwrap();
        assert_eq!(result.summary_value("monthly_emi"), Some(dec!(1666.67)));
        assert_eq!(result.summary_value("total_interest"), Some(dec!(0)));
        assert_eq!(result.last_value(), Some(dec!(0)));
    }

    #[test]
    fn schedule_has_one_row_per_month() {
        let rows = amortization_schedule(50_000.0, 9.0, 2.0).unwrap();
        assert_eq!(rows.len(), 24);
        assert!(rows.windows(2).all(|w| w[0].period + 1 == w[1].period));
        assert_eq!(rows[0].period, 1);
        // First month's interest: 50,000 * 0.0075.
        assert_eq!(rows[0].interest_portion, dec!(375.00));
    }

    #[test]
    fn balances_never_go_negative() {
        let rows = amortization_schedule(123_456.78, 17.5, 7.0).unwrap();
        assert!(rows.iter().all(|row| !row.remaining_balance.is_sign_negative()));
    }

    #[test]
    fn emi_chart_is_sampled_from_the_schedule() {
        let result = emi(250_000.0, 8.5, 3.0).unwrap();
        let rows = amortization_schedule(250_000.0, 8.5, 3.0).unwrap();
        let expected: Vec<_> = [12usize, 24, 36].iter().map(|m| rows[m - 1].remaining_balance).collect();
        let actual: Vec<_> = result.series.iter().map(|p| p.value).collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn amortization_publishes_rows_and_summary() {
        let result = amortization(100_000.0, 10.0, 1.0).unwrap();
        assert_eq!(result.schedule.len(), 12);
        assert_eq!(result.series.len(), 1);
        assert_eq!(result.summary_value("final_balance"), Some(dec!(0)));
        assert_eq!(result.series_name, "Outstanding");
    }

    #[test]
    fn missing_tenure_is_invalid() {
        assert!(matches!(
            emi(100_000.0, 10.0, 0.0),
            Err(CalculatorError::InvalidInput { .. })
        ));
        assert!(amortization_schedule(0.0, 10.0, 5.0).is_err());
    }

    #[test]
    fn absurd_tenure_is_rejected_before_scheduling() {
        assert!(matches!(
            amortization_schedule(1_000.0, 5.0, 1.0e9),
            Err(CalculatorError::InvalidInput { .. })
        ));
        assert!(emi(1_000.0, 0.0, 1.0e9).is_err());
    }
}
