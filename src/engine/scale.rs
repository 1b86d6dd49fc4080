use tracing::{debug, warn};

use crate::engine::numeric::{finite_or_zero, remaining_fraction, safe_div};
use crate::models::{ConfigIssue, Ingredient};

/// Outcome of scale resolution with the masses it was derived from.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaleResolution {
    pub scale: f64,
    pub base_total_mass: f64,
    pub desired_total_mass: f64,
    /// Every reason the scale was forced to 0.
    pub issues: Vec<ConfigIssue>,
}

/// Total mass of the unscaled recipe in grams.
pub fn base_total_mass(ingredients: &[Ingredient]) -> f64 {
    ingredients.iter().map(Ingredient::base_mass).sum()
}

/// Resolve the loss-adjusted scale factor and report why it is 0 when it is.
///
/// Formula: (desired_mass / base_mass) / (1 - loss_pct / 100)
pub fn resolve(
    ingredients: &[Ingredient],
    unit_weight: f64,
    unit_count: f64,
    loss_pct: f64,
) -> ScaleResolution {
    let base_total_mass = finite_or_zero(base_total_mass(ingredients));
    let desired_total_mass = finite_or_zero(unit_weight * unit_count);

    let mut issues = Vec::new();

    if base_total_mass <= 0.0 {
        warn!(base_total_mass, "base recipe has no mass");
        issues.push(ConfigIssue::DegenerateRecipe);
    }

    let yield_fraction = remaining_fraction(loss_pct);
    if yield_fraction.is_nan() || yield_fraction <= 0.0 {
        warn!(loss_pct, "loss percentage leaves no usable output");
        issues.push(ConfigIssue::InvalidLoss { loss_pct });
    }

    let scale = if issues.is_empty() {
        safe_div(safe_div(desired_total_mass, base_total_mass), yield_fraction)
    } else {
        0.0
    };
    debug!(base_total_mass, desired_total_mass, loss_pct, scale, "resolved scale");

    ScaleResolution {
        scale,
        base_total_mass,
        desired_total_mass,
        issues,
    }
}

/// Scale factor only. Returns 0 for a massless recipe or loss >= 100%.
pub fn resolve_scale(
    ingredients: &[Ingredient],
    unit_weight: f64,
    unit_count: f64,
    loss_pct: f64,
) -> f64 {
    resolve(ingredients, unit_weight, unit_count, loss_pct).scale
}
