use serde::{Deserialize, Serialize};

/// How an ingredient is measured in the recipe and how its price is entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeasureUnit {
    /// Grams.
    Mass,
    /// Millilitres.
    Volume,
    /// Whole items (eggs, bars). Needs an average item mass.
    Count,
}

impl MeasureUnit {
    /// Short symbol for the canonical unit.
    pub fn symbol(&self) -> &'static str {
        match self {
            MeasureUnit::Mass => "g",
            MeasureUnit::Volume => "ml",
            MeasureUnit::Count => "pc",
        }
    }
}

/// One component of the base recipe.
///
/// `unit_price` is always the canonical price per one `unit`
/// (per gram, per millilitre or per item).
#[derive(Debug, Clone)]
pub struct Ingredient {
    pub name: String,
    pub unit: MeasureUnit,
    pub grams_per_unit: f64,
    pub base_quantity: f64,
    pub unit_price: f64,
}

impl Ingredient {
    pub fn new(
        name: &str,
        unit: MeasureUnit,
        grams_per_unit: f64,
        base_quantity: f64,
        unit_price: f64,
    ) -> Self {
        Self {
            name: name.to_string(),
            unit,
            grams_per_unit,
            base_quantity,
            unit_price,
        }
    }

    /// Mass contributed to the unscaled recipe.
    #[inline]
    pub fn base_mass(&self) -> f64 {
        self.base_quantity * self.grams_per_unit
    }

    /// Non-negative quantity and price, strictly positive item mass.
    pub fn is_valid(&self) -> bool {
        self.unit_price.is_finite()
            && self.unit_price >= 0.0
            && self.base_quantity.is_finite()
            && self.base_quantity >= 0.0
            && self.grams_per_unit.is_finite()
            && self.grams_per_unit > 0.0
    }

    /// Canonical key for lookups (lowercase name).
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }
}

impl PartialEq for Ingredient {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Ingredient {}
