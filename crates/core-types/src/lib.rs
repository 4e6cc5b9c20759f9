pub mod enums;
pub mod error;
pub mod money;
pub mod structs;

// Re-export the core types to provide a clean public API.
pub use enums::{CalculatorId, Category, Unit};
pub use error::CoreError;
pub use money::{round_money, round_rate, round_whole};
pub use structs::{
    AmortizationRow, CalculatorInput, CalculatorResult, FieldSpec, SeriesLabel, SeriesPoint,
    SummaryItem,
};
