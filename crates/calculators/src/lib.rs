//! # Calculators
//!
//! The arithmetic behind every calculator: growth of money, loan repayment, retirement
//! and inflation. Nothing here knows about rendering, charts or files.
//!
//! Each module exposes a pure function with typed arguments (e.g. [`compound::compound`])
//! and a small struct implementing [`Calculator`], which reads the same arguments out
//! of a [`CalculatorInput`] and applies the configured tenure cap. The
//! [`create_calculator`] factory builds those structs from an id.
//!
//! Arithmetic runs in `f64`; values are rounded to money only when they are placed
//! into a result, so rounding never compounds across loop iterations.

pub mod compound;
pub mod error;
pub mod factory;
pub mod inflation;
pub mod loan;
pub mod lumpsum;
pub mod net_worth;
pub mod retirement;
pub mod sip;
pub mod validate;

pub use compound::{CompoundInterest, compound, compound_demo, demo_growth};
pub use error::CalculatorError;
pub use factory::create_calculator;
pub use inflation::{InflationImpact, inflation_impact};
pub use loan::{Amortization, Emi, LoanTerms, amortization, amortization_schedule, emi};
pub use lumpsum::{LumpSum, lumpsum};
pub use net_worth::{NetWorth, net_worth};
pub use retirement::{RetirementCorpus, retirement_corpus, retirement_corpus_with_fallback};
pub use sip::{Sip, sip};

use core_types::{CalculatorId, CalculatorInput, CalculatorResult, FieldSpec};

/// The interface the engine uses to run any calculator without knowing which one it is.
pub trait Calculator: Send + Sync {
    fn id(&self) -> CalculatorId;

    /// The input fields this calculator reads, in form order.
    fn fields(&self) -> &'static [FieldSpec];

    /// Runs the calculation.
    ///
    /// # Returns
    ///
    /// * `Ok(CalculatorResult)` - a populated result.
    /// * `Err(CalculatorError::InvalidInput)` - a required field failed its constraint.
    /// * `Err(CalculatorError::Calculation)` - the arithmetic produced a non-finite value.
    fn calculate(&self, input: &CalculatorInput) -> Result<CalculatorResult, CalculatorError>;

    /// A sample chart to show once the calculator is selected, before it has been run.
    fn default_chart(&self) -> Result<Option<CalculatorResult>, CalculatorError> {
        Ok(None)
    }
}
