use clap::{Parser, Subcommand};

/// Bakery batch costing: scale the base recipe, price it, suggest a sale price.
#[derive(Parser, Debug)]
#[command(name = "bakery_cost")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the session JSON file (saved prices and parameters).
    #[arg(short, long, default_value = "bakery_state.json")]
    pub file: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compute and show the cost breakdown and suggested price.
    Quote {
        /// Print the breakdown as JSON instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// List ingredient prices and current parameters.
    Prices,

    /// Change the price of one ingredient (entered per kg, per litre or per item).
    SetPrice {
        /// Ingredient name; prompted when omitted.
        #[arg(short, long)]
        ingredient: Option<String>,

        /// New price in the display unit; prompted when omitted.
        #[arg(short, long)]
        price: Option<String>,
    },

    /// Change one parameter, e.g. `set-param margin_pct 35`.
    SetParam {
        /// Parameter name (unit_weight, unit_count, loss_pct, margin_pct, ...).
        key: String,

        /// New value. A decimal comma is accepted.
        value: String,
    },

    /// Restore defaults.
    Reset {
        /// Restore default ingredient prices.
        #[arg(long)]
        prices: bool,

        /// Restore default parameters.
        #[arg(long)]
        params: bool,
    },

    /// Write the cost breakdown to a CSV file.
    Export {
        /// Output CSV path.
        #[arg(short, long, default_value = "breakdown.csv")]
        output: String,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Quote { json: false }
    }
}
