use clap::Parser;
use std::path::Path;
use tracing_subscriber::EnvFilter;

use bakery_cost_rs::cli::{Cli, Command};
use bakery_cost_rs::error::{CostError, Result};
use bakery_cost_rs::interface::{
    display_breakdown, display_parameters, display_prices, from_display_price, parse_decimal,
    prompt_ingredient, prompt_price, resolve_ingredient_name, write_breakdown_csv,
};
use bakery_cost_rs::models::ParameterKey;
use bakery_cost_rs::state::{load_session, save_session, CostStateManager};

fn main() {
    init_logging();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

const DEFAULT_LOG_FILTER: &str = "bakery_cost_rs=warn";

/// Log to stderr. `RUST_LOG` replaces the default warn level when set.
fn init_logging() {
    let directives = std::env::var("RUST_LOG").ok();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(directives.as_deref()))
        .with_writer(std::io::stderr)
        .init();
}

fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .filter(|d| !d.trim().is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Quote { json } => cmd_quote(&cli.file, json),
        Command::Prices => cmd_prices(&cli.file),
        Command::SetPrice { ingredient, price } => cmd_set_price(&cli.file, ingredient, price),
        Command::SetParam { key, value } => cmd_set_param(&cli.file, &key, &value),
        Command::Reset { prices, params } => cmd_reset(&cli.file, prices, params),
        Command::Export { output } => cmd_export(&cli.file, &output),
    }
}

/// Build the state from defaults plus whatever the session file holds.
fn load_state(path: &Path) -> Result<CostStateManager> {
    let mut manager = CostStateManager::with_defaults();

    if !path.exists() {
        return Ok(manager);
    }

    let snapshot = load_session(path)?;
    let report = manager.restore(&snapshot);
    for reason in &report.rejected {
        eprintln!("Ignored saved value: {}", reason);
    }

    Ok(manager)
}

fn save_state(path: &Path, manager: &CostStateManager) -> Result<()> {
    save_session(path, &manager.snapshot())?;
    println!("Session saved to {}.", path.display());
    Ok(())
}

/// Compute and display the breakdown.
fn cmd_quote(file_path: &str, json: bool) -> Result<()> {
    let manager = load_state(Path::new(file_path))?;
    let breakdown = manager.evaluate();

    if json {
        println!("{}", serde_json::to_string_pretty(&breakdown)?);
    } else {
        display_breakdown(&breakdown, manager.parameters());
    }

    if !breakdown.is_configuration_valid() {
        eprintln!("The configuration is invalid; the price shown is not usable.");
    }

    Ok(())
}

/// Show prices and parameters.
fn cmd_prices(file_path: &str) -> Result<()> {
    let manager = load_state(Path::new(file_path))?;
    display_prices(manager.ingredients());
    display_parameters(manager.parameters());
    Ok(())
}

/// Edit one ingredient price, prompting for whatever was not given.
fn cmd_set_price(
    file_path: &str,
    ingredient: Option<String>,
    price: Option<String>,
) -> Result<()> {
    let path = Path::new(file_path);
    let mut manager = load_state(path)?;

    let name = match ingredient {
        Some(input) => resolve_ingredient_name(manager.ingredients(), &input)?,
        None => prompt_ingredient(manager.ingredients())?,
    };
    let Some(name) = name else {
        println!("No ingredient selected.");
        return Ok(());
    };

    let selected = manager
        .ingredient(&name)
        .cloned()
        .ok_or_else(|| CostError::IngredientNotFound(name.clone()))?;

    let canonical = match price {
        Some(text) => from_display_price(selected.unit, parse_decimal(&text)?),
        None => prompt_price(&selected)?,
    };

    manager.set_unit_price(&selected.name, canonical)?;
    save_state(path, &manager)?;

    display_breakdown(&manager.evaluate(), manager.parameters());
    Ok(())
}

/// Set one parameter by name.
fn cmd_set_param(file_path: &str, key: &str, value: &str) -> Result<()> {
    let path = Path::new(file_path);
    let mut manager = load_state(path)?;

    let key = ParameterKey::parse(key)?;
    let value = parse_decimal(value)?;
    manager.set_parameter(key, value)?;
    save_state(path, &manager)?;

    display_breakdown(&manager.evaluate(), manager.parameters());
    Ok(())
}

/// Restore default prices and/or parameters.
fn cmd_reset(file_path: &str, prices: bool, params: bool) -> Result<()> {
    if !prices && !params {
        println!("Please specify at least one reset option:");
        println!("  --prices  Restore default ingredient prices");
        println!("  --params  Restore default parameters");
        return Ok(());
    }

    let path = Path::new(file_path);
    let mut manager = load_state(path)?;

    if prices {
        manager.reset_prices();
        println!("Restored default prices.");
    }

    if params {
        manager.reset_parameters();
        println!("Restored default parameters.");
    }

    save_state(path, &manager)
}

/// Export the current breakdown as CSV.
fn cmd_export(file_path: &str, output: &str) -> Result<()> {
    let manager = load_state(Path::new(file_path))?;
    let breakdown = manager.evaluate();

    write_breakdown_csv(&breakdown, Path::new(output))?;
    println!("Wrote {} lines to {}.", breakdown.lines.len(), output);
    Ok(())
}
