use anyhow::Context;
use clap::{Parser, Subcommand};
use comfy_table::{CellAlignment, Table};
use configuration::{Config, LogFormat};
use core_types::{AmortizationRow, CalculatorId, CalculatorInput, CalculatorResult, Unit};
use engine::CalculationEngine;
use rust_decimal::Decimal;
use std::path::{Path, PathBuf};

/// The main entry point for the fincalc command-line tool.
fn main() -> anyhow::Result<()> {
    // FINCALC__* overrides may live in a .env file; its absence is fine.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = configuration::load_config_from(&cli.config)
        .with_context(|| format!("loading configuration from {}", cli.config.display()))?;
    if let Some(format) = cli.log_format {
        config.logging.format = format;
    }
    let _log_guard = configuration::init_tracing(&config.logging)?;
    tracing::debug!(config = %cli.config.display(), "Configuration loaded");

    let engine = CalculationEngine::new(&config.engine);

    match cli.command {
        Commands::List => handle_list(&engine),
        Commands::Fields(args) => handle_fields(&engine, args.id),
        Commands::Calc(args) => handle_calc(&engine, &config, args),
        Commands::Demo(args) => handle_demo(&engine, &config, args),
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Financial calculators: compound interest, SIP, lump sum, EMI, amortization,
/// retirement corpus, inflation impact and net worth.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file; missing files fall back to defaults.
    #[arg(long, global = true, default_value = "config.toml")]
    config: PathBuf,

    /// Overrides the configured console log format.
    #[arg(long, global = true, value_enum)]
    log_format: Option<LogFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the available calculators by category.
    List,
    /// Show the input fields of a calculator.
    Fields(FieldsArgs),
    /// Run a calculator.
    Calc(CalcArgs),
    /// Show the demo growth chart, or the sample chart of one calculator.
    Demo(DemoArgs),
}

#[derive(Parser)]
struct FieldsArgs {
    /// Calculator id (see `list`).
    id: CalculatorId,
}

#[derive(Parser)]
struct CalcArgs {
    /// Calculator id (see `list`).
    id: CalculatorId,

    /// An input as name=value; repeat for each field. Missing or non-numeric values count as 0.
    #[arg(short = 'f', long = "field")]
    fields: Vec<String>,

    /// Export the chart series as CSV, to PATH or the configured file name.
    #[arg(long, value_name = "PATH", num_args = 0..=1)]
    csv: Option<Option<PathBuf>>,
}

#[derive(Parser)]
struct DemoArgs {
    /// Calculator whose sample chart to show; without it, the general growth demo.
    id: Option<CalculatorId>,

    /// Export the chart series as CSV, to PATH or the configured file name.
    #[arg(long, value_name = "PATH", num_args = 0..=1)]
    csv: Option<Option<PathBuf>>,
}

// ==============================================================================
// Command Handlers
// ==============================================================================

fn handle_list(engine: &CalculationEngine) -> anyhow::Result<()> {
    for section in engine.catalog() {
        println!("{}", section.category.name());
        let mut table = Table::new();
        table.set_header(vec!["Id", "Calculator", "Description"]);
        for entry in section.entries {
            table.add_row(vec![entry.id.to_string(), entry.name.to_string(), entry.description.to_string()]);
        }
        println!("{table}\n");
    }
    Ok(())
}

fn handle_fields(engine: &CalculationEngine, id: CalculatorId) -> anyhow::Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Field", "Label", "Default"]);
    for field in engine.fields(id)? {
        let default = field.default.map(|d| d.to_string()).unwrap_or_default();
        table.add_row(vec![field.name.to_string(), field.label.to_string(), default]);
    }
    println!("{}\n{table}", id.name());
    Ok(())
}

fn handle_calc(engine: &CalculationEngine, config: &Config, args: CalcArgs) -> anyhow::Result<()> {
    let input = CalculatorInput::from_pairs(&args.fields)?;
    let result = engine.calculate(args.id, &input)?;

    if !result.is_valid() {
        println!("Enter valid inputs for {}", args.id.name());
        let names: Vec<&str> = engine.fields(args.id)?.iter().map(|f| f.name).collect();
        println!("Fields: {}", names.join(", "));
        return Ok(());
    }

    println!("{}\n{}\n", args.id.name(), args.id.description());
    print_result(&result);
    if let Some(path) = args.csv {
        export(config, path.as_deref(), &result)?;
    }
    Ok(())
}

fn handle_demo(engine: &CalculationEngine, config: &Config, args: DemoArgs) -> anyhow::Result<()> {
    let result = match args.id {
        Some(id) => match engine.default_chart(id)? {
            Some(chart) => {
                println!("{}\n{}\n", id.name(), id.description());
                chart
            }
            None => {
                println!("{} has no sample chart; run it with `calc {id}`", id.name());
                return Ok(());
            }
        },
        None => {
            println!("Growth Demo\nSelect a calculator to see inputs, outputs & charts\n");
            engine.demo()?
        }
    };
    print_result(&result);
    if let Some(path) = args.csv {
        export(config, path.as_deref(), &result)?;
    }
    Ok(())
}

// ==============================================================================
// Rendering
// ==============================================================================

fn print_result(result: &CalculatorResult) {
    let mut summary = Table::new();
    summary.set_header(vec!["Result", "Value"]);
    for item in &result.summary {
        summary.add_row(vec![item.label.clone(), format_value(item.value, item.unit)]);
    }
    right_align(&mut summary, 1);
    println!("{summary}\n");

    if !result.series.is_empty() {
        let mut series = Table::new();
        series.set_header(vec![axis_label(result.calculator), result.series_name.clone()]);
        for point in &result.series {
            series.add_row(vec![point.label.to_string(), format!("{:.2}", point.value)]);
        }
        right_align(&mut series, 1);
        println!("{series}\n");
    }

    if !result.schedule.is_empty() {
        println!("{}", schedule_table(&result.schedule));
    }
}

fn schedule_table(rows: &[AmortizationRow]) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["M", "Principal", "Interest", "Balance"]);
    for row in rows {
        table.add_row(vec![
            row.period.to_string(),
            format!("{:.2}", row.principal_portion),
            format!("{:.2}", row.interest_portion),
            format!("{:.2}", row.remaining_balance),
        ]);
    }
    for column in 1..=3 {
        right_align(&mut table, column);
    }
    table
}

fn right_align(table: &mut Table, column: usize) {
    if let Some(column) = table.column_mut(column) {
        column.set_cell_alignment(CellAlignment::Right);
    }
}

fn axis_label(id: CalculatorId) -> String {
    match id {
        CalculatorId::Networth => "Item".to_string(),
        _ => "Years".to_string(),
    }
}

fn format_value(value: Decimal, unit: Unit) -> String {
    match unit {
        Unit::Currency => format!("{value:.2}"),
        Unit::Rate => format!("{}%", (value * Decimal::ONE_HUNDRED).normalize()),
    }
}

fn export(config: &Config, path: Option<&Path>, result: &CalculatorResult) -> anyhow::Result<()> {
    let path = path.unwrap_or_else(|| Path::new(&config.export.file_name));
    exporter::export_series(path, &result.series)
        .with_context(|| format!("exporting chart data to {}", path.display()))?;
    println!("Chart data written to {}", path.display());
    Ok(())
}
