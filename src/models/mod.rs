pub mod breakdown;
pub mod ingredient;
pub mod parameters;

pub use breakdown::{ConfigIssue, CostBreakdown, DerivedLine};
pub use ingredient::{Ingredient, MeasureUnit};
pub use parameters::{ParameterKey, RecipeParameters};
