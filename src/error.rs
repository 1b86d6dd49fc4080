use thiserror::Error;

#[derive(Debug, Error)]
pub enum CostError {
    #[error("Ingredient not found: {0}")]
    IngredientNotFound(String),

    #[error("Unknown parameter: {name}{}", suggestion_hint(.suggestion))]
    UnknownParameter {
        name: String,
        suggestion: Option<String>,
    },

    #[error("Invalid price for {name}: {value} (must be a positive number)")]
    InvalidPrice { name: String, value: f64 },

    #[error("Invalid value for {name}: {value} (must be a non-negative number)")]
    InvalidParameter { name: String, value: f64 },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

fn suggestion_hint(suggestion: &Option<String>) -> String {
    suggestion
        .as_ref()
        .map(|s| format!(" (did you mean '{}'?)", s))
        .unwrap_or_default()
}

pub type Result<T> = std::result::Result<T, CostError>;
