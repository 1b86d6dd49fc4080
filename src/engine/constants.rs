use crate::models::{Ingredient, MeasureUnit};

// ─────────────────────────────────────────────────────────────────────────────
// Default production parameters
// ─────────────────────────────────────────────────────────────────────────────

/// Target mass of one cookie, in grams.
pub const DEFAULT_UNIT_WEIGHT_G: f64 = 100.0;

/// Cookies per batch.
pub const DEFAULT_UNIT_COUNT: f64 = 12.0;

/// Material lost to trimming, sticking and evaporation.
pub const DEFAULT_LOSS_PCT: f64 = 3.0;

/// Oven energy for one base batch.
pub const DEFAULT_ENERGY_KWH_PER_BATCH: f64 = 1.5;
pub const DEFAULT_ENERGY_PRICE_PER_KWH: f64 = 0.35;

/// Water for one base batch (washing, dough).
pub const DEFAULT_WATER_LITERS_PER_BATCH: f64 = 5.0;
pub const DEFAULT_WATER_PRICE_PER_M3: f64 = 4.5;

/// One production session.
pub const DEFAULT_LABOR_MINUTES: f64 = 60.0;
pub const DEFAULT_LABOR_HOURLY_RATE: f64 = 15.0;

pub const DEFAULT_PACKAGING_PER_UNIT: f64 = 0.15;
pub const DEFAULT_OVERHEAD_PCT: f64 = 10.0;
pub const DEFAULT_MARGIN_PCT: f64 = 40.0;
pub const DEFAULT_VAT_PCT: f64 = 7.0;

// ─────────────────────────────────────────────────────────────────────────────
// Unit conversions
// ─────────────────────────────────────────────────────────────────────────────

pub const MINUTES_PER_HOUR: f64 = 60.0;
pub const LITERS_PER_CUBIC_METER: f64 = 1000.0;

/// Average mass of one egg without shell.
pub const EGG_GRAMS: f64 = 50.0;

// ─────────────────────────────────────────────────────────────────────────────
// Reference recipe (436 g of dough)
// ─────────────────────────────────────────────────────────────────────────────

/// The fixed base recipe with its default canonical prices.
///
/// Prices are per gram, per millilitre or per item.
pub fn reference_recipe() -> Vec<Ingredient> {
    vec![
        Ingredient::new("Flour", MeasureUnit::Mass, 1.0, 150.0, 0.0012),
        Ingredient::new("Butter", MeasureUnit::Mass, 1.0, 100.0, 0.0099),
        Ingredient::new("Sugar", MeasureUnit::Mass, 1.0, 75.0, 0.0015),
        Ingredient::new("Egg", MeasureUnit::Count, EGG_GRAMS, 1.0, 0.30),
        Ingredient::new("Chocolate", MeasureUnit::Mass, 1.0, 45.0, 0.0149),
        Ingredient::new("Milk", MeasureUnit::Volume, 1.0, 10.0, 0.0011),
        Ingredient::new("Baking soda", MeasureUnit::Mass, 1.0, 3.0, 0.012),
        Ingredient::new("Salt", MeasureUnit::Mass, 1.0, 3.0, 0.0008),
    ]
}
