use tracing::{debug, warn};

use crate::engine::constants::{LITERS_PER_CUBIC_METER, MINUTES_PER_HOUR};
use crate::engine::numeric::{percent_of, remaining_fraction, safe_div};
use crate::models::{ConfigIssue, CostBreakdown, DerivedLine, RecipeParameters};

/// Collects non-finite substitutions while the breakdown is assembled.
struct Guard {
    issues: Vec<ConfigIssue>,
}

impl Guard {
    fn check(&mut self, field: &'static str, value: f64) -> f64 {
        if value.is_finite() {
            value
        } else {
            warn!(field, value, "non-finite value replaced with 0");
            self.issues.push(ConfigIssue::NonFiniteValue { field });
            0.0
        }
    }
}

/// Margin-on-revenue price: the margin is a share of the pre-tax price.
///
/// Returns 0 when `margin_pct >= 100`.
pub fn pre_tax_price(unit_cost: f64, margin_pct: f64) -> f64 {
    safe_div(unit_cost, remaining_fraction(margin_pct))
}

/// Sum line costs with utilities, labor and packaging, then derive prices.
///
/// Energy and water follow the scale; labor is a fixed cost per session.
pub fn aggregate(lines: &[DerivedLine], params: &RecipeParameters, scale: f64) -> CostBreakdown {
    let mut guard = Guard { issues: Vec::new() };
    let units = params.unit_count.max(0.0);

    let material_cost = guard.check("material_cost", lines.iter().map(|l| l.cost).sum());
    let energy_cost = guard.check(
        "energy_cost",
        params.energy_kwh_per_batch * params.energy_price_per_kwh * scale,
    );
    let water_cost = guard.check(
        "water_cost",
        params.water_liters_per_batch * (params.water_price_per_m3 / LITERS_PER_CUBIC_METER)
            * scale,
    );
    let labor_cost = guard.check(
        "labor_cost",
        (params.labor_minutes / MINUTES_PER_HOUR) * params.labor_hourly_rate,
    );
    let packaging_cost = guard.check("packaging_cost", params.packaging_per_unit * units);

    let variable_subtotal = guard.check(
        "variable_subtotal",
        material_cost + energy_cost + water_cost + labor_cost + packaging_cost,
    );
    let overhead_amount = guard.check(
        "overhead_amount",
        percent_of(variable_subtotal, params.overhead_pct),
    );
    let total_cost = guard.check("total_cost", variable_subtotal + overhead_amount);
    let unit_cost = safe_div(total_cost, units);

    let margin_fraction = remaining_fraction(params.margin_pct);
    if margin_fraction.is_nan() || margin_fraction <= 0.0 {
        warn!(margin_pct = params.margin_pct, "margin leaves no sale price");
        guard.issues.push(ConfigIssue::InvalidMargin {
            margin_pct: params.margin_pct,
        });
    }
    let pre_tax_price = pre_tax_price(unit_cost, params.margin_pct);
    let tax_inclusive_price = guard.check(
        "tax_inclusive_price",
        pre_tax_price * (1.0 + params.vat_pct / 100.0),
    );

    // No price, no margin.
    let unit_margin = if pre_tax_price > 0.0 {
        pre_tax_price - unit_cost
    } else {
        0.0
    };
    let total_margin = guard.check("total_margin", unit_margin * units);

    debug!(
        material_cost,
        total_cost, unit_cost, pre_tax_price, tax_inclusive_price, "aggregated costs"
    );

    CostBreakdown {
        scale,
        lines: lines.to_vec(),
        material_cost,
        energy_cost,
        water_cost,
        labor_cost,
        packaging_cost,
        variable_subtotal,
        overhead_amount,
        total_cost,
        unit_cost,
        pre_tax_price,
        tax_inclusive_price,
        unit_margin,
        total_margin,
        issues: guard.issues,
    }
}
