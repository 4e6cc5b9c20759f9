use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifies one of the calculators the engine knows how to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalculatorId {
    Compound,
    Sip,
    Lumpsum,
    Retirement,
    Inflation,
    Emi,
    Amort,
    Networth,
}

impl CalculatorId {
    /// Every calculator, in catalog order (grouped by category).
    pub fn all() -> &'static [CalculatorId] {
        &[
            CalculatorId::Compound,
            CalculatorId::Sip,
            CalculatorId::Lumpsum,
            CalculatorId::Retirement,
            CalculatorId::Inflation,
            CalculatorId::Emi,
            CalculatorId::Amort,
            CalculatorId::Networth,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CalculatorId::Compound => "compound",
            CalculatorId::Sip => "sip",
            CalculatorId::Lumpsum => "lumpsum",
            CalculatorId::Retirement => "retirement",
            CalculatorId::Inflation => "inflation",
            CalculatorId::Emi => "emi",
            CalculatorId::Amort => "amort",
            CalculatorId::Networth => "networth",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            CalculatorId::Compound => "Compound Interest Calculator",
            CalculatorId::Sip => "SIP Calculator",
            CalculatorId::Lumpsum => "Lump Sum Investment Calculator",
            CalculatorId::Retirement => "Retirement Corpus Calculator",
            CalculatorId::Inflation => "Inflation Impact Calculator",
            CalculatorId::Emi => "EMI Calculator",
            CalculatorId::Amort => "Loan Repayment Schedule (Amortization)",
            CalculatorId::Networth => "Net Worth Tracker",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            CalculatorId::Compound => "Future value for principal compounded annually or by frequency.",
            CalculatorId::Sip => "Monthly SIP contributions growing at expected annual return.",
            CalculatorId::Lumpsum => "One-time investment future value.",
            CalculatorId::Retirement => {
                "Estimate corpus required at retirement given desired monthly income."
            }
            CalculatorId::Inflation => "See how inflation reduces future purchasing power.",
            CalculatorId::Emi => "Calculate monthly EMI for loans.",
            CalculatorId::Amort => "Detailed payment schedule (monthly principal & interest).",
            CalculatorId::Networth => "Quick assets minus liabilities snapshot.",
        }
    }

    pub fn category(&self) -> Category {
        match self {
            CalculatorId::Compound
            | CalculatorId::Sip
            | CalculatorId::Lumpsum
            | CalculatorId::Retirement
            | CalculatorId::Inflation => Category::Investment,
            CalculatorId::Emi | CalculatorId::Amort => Category::Loan,
            CalculatorId::Networth => Category::Personal,
        }
    }
}

impl fmt::Display for CalculatorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CalculatorId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        CalculatorId::all()
            .iter()
            .copied()
            .find(|id| id.as_str() == wanted)
            .ok_or_else(|| CoreError::UnknownCalculator(s.to_string()))
    }
}

/// The sidebar grouping a calculator belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Investment,
    Loan,
    Personal,
}

impl Category {
    pub fn all() -> &'static [Category] {
        &[Category::Investment, Category::Loan, Category::Personal]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Category::Investment => "Investment & Wealth",
            Category::Loan => "Loan & Credit",
            Category::Personal => "Personal Finance",
        }
    }

    /// The calculators in this category, in catalog order.
    pub fn calculators(&self) -> Vec<CalculatorId> {
        CalculatorId::all()
            .iter()
            .copied()
            .filter(|id| id.category() == *self)
            .collect()
    }
}

/// How a summary value should be presented by a renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Unit {
    Currency,
    /// A plain fraction per period, e.g. 0.005 for half a percent a month.
    Rate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_parse_case_insensitively() {
        assert_eq!("EMI".parse::<CalculatorId>().unwrap(), CalculatorId::Emi);
        assert_eq!(" amort ".parse::<CalculatorId>().unwrap(), CalculatorId::Amort);
        assert!(matches!(
            "mortgage".parse::<CalculatorId>(),
            Err(CoreError::UnknownCalculator(_))
        ));
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for id in CalculatorId::all() {
            assert_eq!(id.to_string().parse::<CalculatorId>().unwrap(), *id);
        }
    }

    #[test]
    fn categories_partition_the_catalog() {
        let total: usize = Category::all().iter().map(|c| c.calculators().len()).sum();
        assert_eq!(total, CalculatorId::all().len());
        assert_eq!(
            Category::Loan.calculators(),
            vec![CalculatorId::Emi, CalculatorId::Amort]
        );
    }
}
