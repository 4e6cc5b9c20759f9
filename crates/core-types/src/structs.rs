use crate::enums::{CalculatorId, Unit};
use crate::error::CoreError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Named numeric inputs for a single calculator invocation.
///
/// A field that was never supplied reads as `0.0`; the calculators' own validation
/// then decides whether that zero is acceptable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CalculatorInput {
    fields: BTreeMap<String, f64>,
}

impl CalculatorInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter, handy for tests and programmatic callers.
    pub fn with(mut self, field: &str, value: f64) -> Self {
        self.set(field, value);
        self
    }

    pub fn set(&mut self, field: &str, value: f64) {
        self.fields.insert(field.to_string(), value);
    }

    pub fn get(&self, field: &str) -> f64 {
        self.fields.get(field).copied().unwrap_or(0.0)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Parses `name=value` pairs as typed on a command line or form.
    ///
    /// An empty or non-numeric value coerces to `0.0`. A pair without `=` or with an
    /// empty name is rejected, since there is no field to assign it to.
    pub fn from_pairs<I, S>(pairs: I) -> Result<Self, CoreError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut input = Self::new();
        for pair in pairs {
            let pair = pair.as_ref();
            let (name, raw) = pair.split_once('=').ok_or_else(|| {
                CoreError::InvalidInput(pair.to_string(), "expected name=value".to_string())
            })?;
            let name = name.trim();
            if name.is_empty() {
                return Err(CoreError::InvalidInput(
                    pair.to_string(),
                    "field name is empty".to_string(),
                ));
            }
            input.set(name, number_or_zero(raw));
        }
        Ok(input)
    }
}

fn number_or_zero(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => 0.0,
    }
}

/// Describes one input a calculator reads.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    /// Used by the engine when the caller did not supply the field at all.
    pub default: Option<f64>,
}

impl FieldSpec {
    pub const fn new(name: &'static str, label: &'static str) -> Self {
        Self { name, label, default: None }
    }

    pub const fn with_default(name: &'static str, label: &'static str, default: f64) -> Self {
        Self { name, label, default: Some(default) }
    }
}

/// One headline number of a result (e.g. "Future Value").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryItem {
    pub key: String,
    pub label: String,
    pub value: Decimal,
    pub unit: Unit,
}

impl SummaryItem {
    pub fn currency(key: &str, label: &str, value: Decimal) -> Self {
        Self { key: key.to_string(), label: label.to_string(), value, unit: Unit::Currency }
    }

    pub fn rate(key: &str, label: &str, value: Decimal) -> Self {
        Self { key: key.to_string(), label: label.to_string(), value, unit: Unit::Rate }
    }
}

/// The x-axis label of a chart point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SeriesLabel {
    Year(u32),
    Category(String),
}

impl fmt::Display for SeriesLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeriesLabel::Year(y) => write!(f, "{y}"),
            SeriesLabel::Category(name) => f.write_str(name),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub label: SeriesLabel,
    pub value: Decimal,
}

impl SeriesPoint {
    pub fn year(year: u32, value: Decimal) -> Self {
        Self { label: SeriesLabel::Year(year), value }
    }

    pub fn category(name: &str, value: Decimal) -> Self {
        Self { label: SeriesLabel::Category(name.to_string()), value }
    }
}

/// One month of a loan repayment schedule. Each component is rounded on its own.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AmortizationRow {
    /// 1-based month number.
    pub period: u32,
    pub principal_portion: Decimal,
    pub interest_portion: Decimal,
    /// Never negative.
    pub remaining_balance: Decimal,
}

/// The complete output of one calculator run.
///
/// An invalid-input run is represented by an empty result rather than an error,
/// so callers branch on [`CalculatorResult::is_valid`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorResult {
    pub calculator: CalculatorId,
    pub summary: Vec<SummaryItem>,
    /// Legend for the chart series, e.g. "Compound Growth".
    pub series_name: String,
    pub series: Vec<SeriesPoint>,
    /// Only populated by the amortization calculator.
    pub schedule: Vec<AmortizationRow>,
}

impl CalculatorResult {
    pub fn new(calculator: CalculatorId, series_name: &str) -> Self {
        Self {
            calculator,
            summary: Vec::new(),
            series_name: series_name.to_string(),
            series: Vec::new(),
            schedule: Vec::new(),
        }
    }

    /// The "no result" outcome for inputs that failed validation.
    pub fn invalid(calculator: CalculatorId) -> Self {
        Self::new(calculator, "Value")
    }

    pub fn is_valid(&self) -> bool {
        !self.summary.is_empty()
    }

    pub fn summary_value(&self, key: &str) -> Option<Decimal> {
        self.summary.iter().find(|item| item.key == key).map(|item| item.value)
    }

    pub fn last_value(&self) -> Option<Decimal> {
        self.series.last().map(|p| p.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn missing_fields_read_as_zero() {
        let input = CalculatorInput::new().with("principal", 1000.0);
        assert_eq!(input.get("principal"), 1000.0);
        assert_eq!(input.get("years"), 0.0);
        assert!(!input.contains("years"));
    }

    #[test]
    fn pairs_coerce_bad_numbers_to_zero() {
        let input =
            CalculatorInput::from_pairs(["principal=10000", "years=", "rate=abc", " n = 12 "])
                .unwrap();
        assert_eq!(input.get("principal"), 10000.0);
        assert_eq!(input.get("years"), 0.0);
        assert!(input.contains("years"));
        assert_eq!(input.get("rate"), 0.0);
        assert_eq!(input.get("n"), 12.0);
    }

    #[test]
    fn pairs_without_a_name_are_rejected() {
        assert!(CalculatorInput::from_pairs(["principal"]).is_err());
        assert!(CalculatorInput::from_pairs(["=5"]).is_err());
    }

    #[test]
    fn invalid_result_is_empty() {
        let result = CalculatorResult::invalid(CalculatorId::Compound);
        assert!(!result.is_valid());
        assert!(result.series.is_empty());
        assert!(result.schedule.is_empty());
        assert_eq!(result.summary_value("future_value"), None);
    }

    #[test]
    fn labels_display_as_plain_text() {
        assert_eq!(SeriesPoint::year(5, dec!(1)).label.to_string(), "5");
        assert_eq!(SeriesPoint::category("Net Worth", dec!(1)).label.to_string(), "Net Worth");
    }
}
