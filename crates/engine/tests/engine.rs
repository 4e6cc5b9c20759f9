use configuration::EngineSettings;
use core_types::{CalculatorId, CalculatorInput, Category, SeriesLabel};
use engine::CalculationEngine;
use rust_decimal_macros::dec;

fn engine() -> CalculationEngine {
    CalculationEngine::default()
}

#[test]
fn invalid_input_yields_an_empty_result() {
    let input = CalculatorInput::new()
        .with("principal", 0.0)
        .with("annual_rate_percent", 8.0)
        .with("years", 5.0)
        .with("compounds_per_year", 12.0);
    let result = engine().calculate(CalculatorId::Compound, &input).unwrap();
    assert!(!result.is_valid());
    assert!(result.series.is_empty());
    assert_eq!(result.summary_value("future_value"), None);
}

#[test]
fn missing_frequency_defaults_to_annual() {
    let input = CalculatorInput::new()
        .with("principal", 50_000.0)
        .with("annual_rate_percent", 10.0)
        .with("years", 5.0);
    let compound = engine().calculate(CalculatorId::Compound, &input).unwrap();
    let lump = CalculatorInput::new()
        .with("amount", 50_000.0)
        .with("annual_rate_percent", 10.0)
        .with("years", 5.0);
    let lumpsum = engine().calculate(CalculatorId::Lumpsum, &lump).unwrap();
    assert_eq!(compound.summary_value("future_value"), lumpsum.summary_value("future_value"));
}

#[test]
fn explicit_zero_frequency_is_not_replaced_by_the_default() {
    let input = CalculatorInput::new()
        .with("principal", 50_000.0)
        .with("years", 5.0)
        .with("compounds_per_year", 0.0);
    assert!(!engine().calculate(CalculatorId::Compound, &input).unwrap().is_valid());
}

#[test]
fn retirement_defaults_to_twenty_years() {
    let base = CalculatorInput::new()
        .with("current_age", 30.0)
        .with("retirement_age", 60.0)
        .with("desired_monthly_income", 50_000.0)
        .with("annual_return_percent", 6.0);
    let implied = engine().calculate(CalculatorId::Retirement, &base).unwrap();
    let explicit = engine()
        .calculate(CalculatorId::Retirement, &base.clone().with("years_in_retirement", 20.0))
        .unwrap();
    assert!(implied.is_valid());
    assert_eq!(implied.summary_value("corpus"), explicit.summary_value("corpus"));
}

#[test]
fn configured_fallback_rate_reaches_the_retirement_calculator() {
    let settings = EngineSettings { retirement_fallback_monthly_rate: 0.003, ..Default::default() };
    let input = CalculatorInput::new()
        .with("current_age", 40.0)
        .with("retirement_age", 65.0)
        .with("desired_monthly_income", 30_000.0);
    let result = CalculationEngine::new(&settings)
        .calculate(CalculatorId::Retirement, &input)
        .unwrap();
    assert_eq!(result.summary_value("assumed_monthly_rate"), Some(dec!(0.003)));
}

#[test]
fn tenure_cap_turns_into_an_empty_result() {
    let settings = EngineSettings { max_years: 40.0, ..Default::default() };
    let input = CalculatorInput::new()
        .with("principal", 1_000_000.0)
        .with("annual_rate_percent", 9.0)
        .with("years", 41.0);
    let result = CalculationEngine::new(&settings).calculate(CalculatorId::Emi, &input).unwrap();
    assert!(!result.is_valid());
}

#[test]
fn net_worth_accepts_an_empty_form() {
    let result = engine().calculate(CalculatorId::Networth, &CalculatorInput::new()).unwrap();
    assert!(result.is_valid());
    assert_eq!(result.series[1].label, SeriesLabel::Category("Net Worth".to_string()));
}

#[test]
fn amortization_carries_its_schedule() {
    let input = CalculatorInput::from_pairs(["principal=500000", "annual_rate_percent=9", "years=2"])
        .unwrap();
    let result = engine().calculate(CalculatorId::Amort, &input).unwrap();
    assert_eq!(result.schedule.len(), 24);
    assert_eq!(result.series.len(), 2);
}

#[test]
fn catalog_lists_every_calculator_once_in_order() {
    let catalog = engine().catalog();
    let categories: Vec<Category> = catalog.iter().map(|s| s.category).collect();
    assert_eq!(categories, [Category::Investment, Category::Loan, Category::Personal]);

    let ids: Vec<CalculatorId> =
        catalog.iter().flat_map(|s| s.entries.iter().map(|e| e.id)).collect();
    assert_eq!(ids, CalculatorId::all());
    assert_eq!(engine().default_calculator(), Some(CalculatorId::Compound));
}

#[test]
fn fields_are_exposed_per_calculator() {
    let fields = engine().fields(CalculatorId::Sip).unwrap();
    let names: Vec<&str> = fields.iter().map(|f| f.name).collect();
    assert_eq!(names, ["monthly_amount", "annual_rate_percent", "years"]);
}

#[test]
fn demo_chart_is_always_available() {
    let demo = engine().demo().unwrap();
    assert_eq!(demo.series_name, "Demo Growth (8% p.a.)");
    assert_eq!(demo.series.len(), 11);
}

#[test]
fn compound_has_a_default_chart_and_others_do_not() {
    let engine = engine();
    let chart = engine.default_chart(CalculatorId::Compound).unwrap().unwrap();
    assert_eq!(chart.series_name, "Compound (demo)");
    assert_eq!(chart.last_value(), Some(dec!(22196.40)));

    for id in CalculatorId::all().iter().filter(|id| **id != CalculatorId::Compound) {
        assert!(engine.default_chart(*id).unwrap().is_none(), "{id}");
    }
}
