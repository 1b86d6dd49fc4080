pub mod cli;
pub mod engine;
pub mod error;
pub mod interface;
pub mod models;
pub mod state;

pub use engine::evaluate;
pub use error::{CostError, Result};
pub use models::{CostBreakdown, Ingredient, MeasureUnit, RecipeParameters};
