pub mod constants;
pub mod numeric;
pub mod pricing;
pub mod projection;
pub mod scale;

pub use constants::*;
pub use pricing::{aggregate, pre_tax_price};
pub use projection::{project, project_line};
pub use scale::{base_total_mass, resolve, resolve_scale, ScaleResolution};

use tracing::debug_span;

use crate::models::{CostBreakdown, Ingredient, RecipeParameters};

/// Evaluate one snapshot: resolve the scale, project the ingredients, aggregate costs.
///
/// Never fails. Misconfigurations are zeroed and listed in `issues`.
pub fn evaluate(ingredients: &[Ingredient], params: &RecipeParameters) -> CostBreakdown {
    let _span = debug_span!("evaluate", ingredients = ingredients.len()).entered();

    let resolution = resolve(
        ingredients,
        params.unit_weight_g,
        params.unit_count,
        params.loss_pct,
    );
    let lines = project(ingredients, resolution.scale);
    let mut breakdown = aggregate(&lines, params, resolution.scale);

    breakdown.issues.splice(0..0, resolution.issues);

    breakdown
}
