use core_types::CalculatorId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Calculator '{0}' is not registered in the engine.")]
    CalculatorNotFound(CalculatorId),

    #[error("Calculator '{id}' failed: {source}")]
    Calculation {
        id: CalculatorId,
        #[source]
        source: calculators::CalculatorError,
    },
}
