use crate::Calculator;
use crate::compound::CompoundInterest;
use crate::inflation::InflationImpact;
use crate::loan::{Amortization, Emi};
use crate::lumpsum::LumpSum;
use crate::net_worth::NetWorth;
use crate::retirement::RetirementCorpus;
use crate::sip::Sip;
use configuration::EngineSettings;
use core_types::CalculatorId;

/// Creates the calculator for `id`, parameterised by the engine settings.
pub fn create_calculator(id: CalculatorId, settings: &EngineSettings) -> Box<dyn Calculator> {
    // The compiler errors here if a new CalculatorId is added but not handled.
    match id {
        CalculatorId::Compound => Box::new(CompoundInterest::new(settings)),
        CalculatorId::Sip => Box::new(Sip::new(settings)),
        CalculatorId::Lumpsum => Box::new(LumpSum::new(settings)),
        CalculatorId::Retirement => Box::new(RetirementCorpus::new(settings)),
        CalculatorId::Inflation => Box::new(InflationImpact::new(settings)),
        CalculatorId::Emi => Box::new(Emi::new(settings)),
        CalculatorId::Amort => Box::new(Amortization::new(settings)),
        CalculatorId::Networth => Box::new(NetWorth::new()),
    }
}
