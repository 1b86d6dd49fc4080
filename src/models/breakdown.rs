use serde::Serialize;

use crate::models::MeasureUnit;

/// One ingredient's computed state for a given scale.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DerivedLine {
    pub name: String,
    pub unit: MeasureUnit,
    /// Quantity in the ingredient's own unit.
    pub needed_quantity: f64,
    pub needed_mass_g: f64,
    pub cost: f64,
}

/// A configuration problem detected during evaluation.
///
/// The affected values are zeroed; the issue tells the caller why.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ConfigIssue {
    /// Base recipe has no mass, nothing can be scaled.
    DegenerateRecipe,
    /// Loss at or above 100% leaves no usable output.
    InvalidLoss { loss_pct: f64 },
    /// Margin at or above 100% of the sale price has no price.
    InvalidMargin { margin_pct: f64 },
    /// A computed field was not finite and was replaced by zero.
    NonFiniteValue { field: &'static str },
}

impl ConfigIssue {
    /// True for issues the user must fix before the price can be trusted.
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            ConfigIssue::InvalidLoss { .. } | ConfigIssue::InvalidMargin { .. }
        )
    }
}

impl std::fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigIssue::DegenerateRecipe => {
                write!(f, "base recipe has no mass; ingredient costs are zero")
            }
            ConfigIssue::InvalidLoss { loss_pct } => {
                write!(f, "loss of {}% must be below 100%; batch scale forced to 0", loss_pct)
            }
            ConfigIssue::InvalidMargin { margin_pct } => {
                write!(f, "margin of {}% must be below 100%; sale price forced to 0", margin_pct)
            }
            ConfigIssue::NonFiniteValue { field } => {
                write!(f, "{} was not a finite number and was set to 0", field)
            }
        }
    }
}

/// Full result of one evaluation. Determined entirely by (ingredients, parameters).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostBreakdown {
    /// Loss-adjusted scale factor applied to the base recipe.
    pub scale: f64,
    pub lines: Vec<DerivedLine>,
    pub material_cost: f64,
    pub energy_cost: f64,
    pub water_cost: f64,
    pub labor_cost: f64,
    pub packaging_cost: f64,
    pub variable_subtotal: f64,
    pub overhead_amount: f64,
    pub total_cost: f64,
    pub unit_cost: f64,
    pub pre_tax_price: f64,
    pub tax_inclusive_price: f64,
    pub unit_margin: f64,
    pub total_margin: f64,
    pub issues: Vec<ConfigIssue>,
}

impl CostBreakdown {
    /// Summary fields as (name, value) pairs in display order.
    pub fn summary(&self) -> [(&'static str, f64); 14] {
        [
            ("scale", self.scale),
            ("material_cost", self.material_cost),
            ("energy_cost", self.energy_cost),
            ("water_cost", self.water_cost),
            ("labor_cost", self.labor_cost),
            ("packaging_cost", self.packaging_cost),
            ("variable_subtotal", self.variable_subtotal),
            ("overhead_amount", self.overhead_amount),
            ("total_cost", self.total_cost),
            ("unit_cost", self.unit_cost),
            ("pre_tax_price", self.pre_tax_price),
            ("tax_inclusive_price", self.tax_inclusive_price),
            ("unit_margin", self.unit_margin),
            ("total_margin", self.total_margin),
        ]
    }

    /// Every numeric field, including per-line values.
    pub fn all_values(&self) -> Vec<f64> {
        let mut values: Vec<f64> = self.summary().iter().map(|(_, v)| *v).collect();
        for line in &self.lines {
            values.extend([line.needed_quantity, line.needed_mass_g, line.cost]);
        }
        values
    }

    /// True when no loss or margin misconfiguration was detected.
    pub fn is_configuration_valid(&self) -> bool {
        !self.issues.iter().any(ConfigIssue::is_configuration_error)
    }

    /// Total mass of ingredients needed for the batch.
    pub fn total_mass_g(&self) -> f64 {
        self.lines.iter().map(|l| l.needed_mass_g).sum()
    }
}
