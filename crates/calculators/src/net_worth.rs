use crate::Calculator;
use crate::error::CalculatorError;
use crate::validate::non_negative;
use core_types::{
    CalculatorId, CalculatorInput, CalculatorResult, FieldSpec, SeriesPoint, SummaryItem,
    round_money,
};

pub const FIELDS: &[FieldSpec] = &[
    FieldSpec::new("total_assets", "Assets (total)"),
    FieldSpec::new("total_liabilities", "Liabilities (total)"),
];

/// Assets minus liabilities. The only calculator whose headline value may be negative.
///
/// Charted as two bars: liabilities and the resulting net worth.
pub fn net_worth(
    total_assets: f64,
    total_liabilities: f64,
) -> Result<CalculatorResult, CalculatorError> {
    let assets = non_negative("total_assets", total_assets)?;
    let liabilities = non_negative("total_liabilities", total_liabilities)?;
    let net = round_money(assets - liabilities)?;
    let liabilities = round_money(liabilities)?;

    let mut result = CalculatorResult::new(CalculatorId::Networth, "Net Worth Snapshot");
    result.summary.push(SummaryItem::currency("net_worth", "Net Worth", net));
    result
        .summary
        .push(SummaryItem::currency("total_assets", "Total Assets", round_money(assets)?));
    result
        .summary
        .push(SummaryItem::currency("total_liabilities", "Total Liabilities", liabilities));
    result.series.push(SeriesPoint::category("Liabilities", liabilities));
    result.series.push(SeriesPoint::category("Net Worth", net));
    Ok(result)
}

/// Needs no engine settings: there is no tenure to cap.
#[derive(Debug, Clone, Default)]
pub struct NetWorth;

impl NetWorth {
    pub fn new() -> Self {
        Self
    }
}

impl Calculator for NetWorth {
    fn id(&self) -> CalculatorId {
        CalculatorId::Networth
    }

    fn fields(&self) -> &'static [FieldSpec] {
        FIELDS
    }

    fn calculate(&self, input: &CalculatorInput) -> Result<CalculatorResult, CalculatorError> {
        net_worth(input.get("total_assets"), input.get("total_liabilities"))
    }
}
