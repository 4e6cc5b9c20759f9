//! # Calculation Engine
//!
//! The mapping from calculator id to calculator, and the one place callers go through
//! to run any of them.
//!
//! ## Behaviour
//!
//! - **Defaults:** fields a calculator declares with a default (e.g. compounding
//!   frequency) are filled in when the caller did not supply them. Anything else that
//!   is missing reads as zero.
//! - **Invalid input is not an error:** when a calculator rejects its input the engine
//!   returns [`CalculatorResult::invalid`], an empty result the caller can recognise
//!   with `is_valid()` and answer with a prompt. Only arithmetic failures surface as
//!   [`EngineError`].
//! - **Sample charts:** [`CalculationEngine::demo`] is the chart shown before anything
//!   is selected; [`CalculationEngine::default_chart`] is the one a calculator shows
//!   once selected (only compound interest has one).
//! - **Stateless:** every call builds its result from scratch. The engine can be shared
//!   freely between threads.

use calculators::{Calculator, CalculatorError, create_calculator, demo_growth};
use configuration::EngineSettings;
use core_types::{CalculatorId, CalculatorInput, CalculatorResult, Category, FieldSpec};
use std::collections::BTreeMap;

pub mod error;

pub use error::EngineError;

/// One calculator as listed in the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogEntry {
    pub id: CalculatorId,
    pub name: &'static str,
    pub description: &'static str,
}

/// A category heading with the calculators under it.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogSection {
    pub category: Category,
    pub entries: Vec<CatalogEntry>,
}

pub struct CalculationEngine {
    calculators: BTreeMap<CalculatorId, Box<dyn Calculator>>,
}

impl CalculationEngine {
    /// Builds every known calculator with the given settings.
    pub fn new(settings: &EngineSettings) -> Self {
        let calculators = CalculatorId::all()
            .iter()
            .map(|id| (*id, create_calculator(*id, settings)))
            .collect();
        Self { calculators }
    }

    /// The calculator selected when the caller has not picked one: the first available
    /// in catalog order.
    pub fn default_calculator(&self) -> Option<CalculatorId> {
        CalculatorId::all().iter().copied().find(|id| self.calculators.contains_key(id))
    }

    /// The available calculators grouped by category, in catalog order.
    pub fn catalog(&self) -> Vec<CatalogSection> {
        Category::all()
            .iter()
            .map(|category| CatalogSection {
                category: *category,
                entries: category
                    .calculators()
                    .into_iter()
                    .filter(|id| self.calculators.contains_key(id))
                    .map(|id| CatalogEntry { id, name: id.name(), description: id.description() })
                    .collect(),
            })
            .filter(|section| !section.entries.is_empty())
            .collect()
    }

    pub fn fields(&self, id: CalculatorId) -> Result<&'static [FieldSpec], EngineError> {
        Ok(self.calculator(id)?.fields())
    }

    /// Runs calculator `id` over `input`.
    ///
    /// # Returns
    ///
    /// * `Ok(result)` with `result.is_valid()` - the calculation succeeded.
    /// * `Ok(result)` with `!result.is_valid()` - the input was rejected.
    /// * `Err(EngineError)` - the calculator is unknown or its arithmetic failed.
    pub fn calculate(
        &self,
        id: CalculatorId,
        input: &CalculatorInput,
    ) -> Result<CalculatorResult, EngineError> {
        let calculator = self.calculator(id)?;
        let input = with_defaults(calculator.fields(), input);

        match calculator.calculate(&input) {
            Ok(result) => {
                tracing::debug!(
                    %id,
                    summary = result.summary.len(),
                    points = result.series.len(),
                    "Calculation complete"
                );
                Ok(result)
            }
            Err(CalculatorError::InvalidInput { field, reason }) => {
                tracing::warn!(%id, %field, %reason, "Input rejected, returning an empty result");
                Ok(CalculatorResult::invalid(id))
            }
            Err(source) => {
                tracing::error!(%id, error = %source, "Calculation failed");
                Err(EngineError::Calculation { id, source })
            }
        }
    }

    /// The illustrative growth chart shown before a calculator is chosen.
    pub fn demo(&self) -> Result<CalculatorResult, EngineError> {
        demo_growth().map_err(|source| EngineError::Calculation { id: CalculatorId::Compound, source })
    }

    /// The sample chart a calculator shows once selected, if it has one.
    pub fn default_chart(&self, id: CalculatorId) -> Result<Option<CalculatorResult>, EngineError> {
        self.calculator(id)?
            .default_chart()
            .map_err(|source| EngineError::Calculation { id, source })
    }

    fn calculator(&self, id: CalculatorId) -> Result<&dyn Calculator, EngineError> {
        self.calculators
            .get(&id)
            .map(|calculator| calculator.as_ref())
            .ok_or(EngineError::CalculatorNotFound(id))
    }
}

impl Default for CalculationEngine {
    fn default() -> Self {
        Self::new(&EngineSettings::default())
    }
}

/// Copies `input`, adding declared defaults for fields the caller left out.
fn with_defaults(fields: &[FieldSpec], input: &CalculatorInput) -> CalculatorInput {
    let mut filled = input.clone();
    for field in fields {
        if let Some(default) = field.default {
            if !filled.contains(field.name) {
                filled.set(field.name, default);
            }
        }
    }
    filled
}
