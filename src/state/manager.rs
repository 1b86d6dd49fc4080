use tracing::{info, warn};

use crate::engine::{self, constants::reference_recipe};
use crate::error::{CostError, Result};
use crate::models::{CostBreakdown, Ingredient, ParameterKey, RecipeParameters};
use crate::state::persistence::SessionSnapshot;

/// Result of applying a saved session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RestoreReport {
    /// Number of values applied.
    pub applied: usize,
    /// Entries that were skipped, with the reason.
    pub rejected: Vec<String>,
}

/// Owns the recipe and parameters and re-evaluates on demand.
///
/// The ingredient set is fixed; only unit prices change, one at a time.
pub struct CostStateManager {
    ingredients: Vec<Ingredient>,
    params: RecipeParameters,
}

impl CostStateManager {
    /// Create a manager from an ingredient list and parameters.
    pub fn new(ingredients: Vec<Ingredient>, params: RecipeParameters) -> Self {
        Self {
            ingredients,
            params,
        }
    }

    /// Reference recipe with default prices and parameters.
    pub fn with_defaults() -> Self {
        Self::new(reference_recipe(), RecipeParameters::default())
    }

    /// Get an ingredient by name (case-insensitive).
    pub fn ingredient(&self, name: &str) -> Option<&Ingredient> {
        let key = name.to_lowercase();
        self.ingredients.iter().find(|i| i.key() == key)
    }

    pub fn ingredients(&self) -> &[Ingredient] {
        &self.ingredients
    }

    pub fn parameters(&self) -> &RecipeParameters {
        &self.params
    }

    /// Set the canonical unit price of one ingredient.
    ///
    /// The price must be finite and strictly positive.
    pub fn set_unit_price(&mut self, name: &str, price: f64) -> Result<()> {
        if !(price.is_finite() && price > 0.0) {
            return Err(CostError::InvalidPrice {
                name: name.to_string(),
                value: price,
            });
        }

        let key = name.to_lowercase();
        let ingredient = self
            .ingredients
            .iter_mut()
            .find(|i| i.key() == key)
            .ok_or_else(|| CostError::IngredientNotFound(name.to_string()))?;

        ingredient.unit_price = price;
        info!(ingredient = %ingredient.name, price, "unit price updated");
        Ok(())
    }

    /// Set one parameter. The value must be finite and non-negative.
    pub fn set_parameter(&mut self, key: ParameterKey, value: f64) -> Result<()> {
        self.params.set(key, value)?;
        info!(parameter = %key, value, "parameter updated");
        Ok(())
    }

    /// Restore every unit price from the reference recipe.
    pub fn reset_prices(&mut self) {
        let defaults = reference_recipe();
        for ingredient in self.ingredients.iter_mut() {
            if let Some(default) = defaults.iter().find(|d| d.key() == ingredient.key()) {
                ingredient.unit_price = default.unit_price;
            }
        }
    }

    pub fn reset_parameters(&mut self) {
        self.params = RecipeParameters::default();
    }

    /// Evaluate the current snapshot.
    pub fn evaluate(&self) -> CostBreakdown {
        engine::evaluate(&self.ingredients, &self.params)
    }

    /// Capture prices and parameters for saving.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            prices: self
                .ingredients
                .iter()
                .map(|i| (i.name.clone(), i.unit_price))
                .collect(),
            parameters: self
                .params
                .entries()
                .into_iter()
                .map(|(name, value)| (name.to_string(), value))
                .collect(),
        }
    }

    /// Apply a saved session with the same checks as live edits.
    ///
    /// Invalid or unknown entries are skipped and reported; current values stay.
    pub fn restore(&mut self, snapshot: &SessionSnapshot) -> RestoreReport {
        let mut report = RestoreReport::default();

        for (name, &price) in &snapshot.prices {
            match self.set_unit_price(name, price) {
                Ok(()) => report.applied += 1,
                Err(e) => {
                    warn!(ingredient = %name, error = %e, "rejected saved price");
                    report.rejected.push(e.to_string());
                }
            }
        }

        for (name, &value) in &snapshot.parameters {
            let result = ParameterKey::parse(name).and_then(|key| self.set_parameter(key, value));
            match result {
                Ok(()) => report.applied += 1,
                Err(e) => {
                    warn!(parameter = %name, error = %e, "rejected saved parameter");
                    report.rejected.push(e.to_string());
                }
            }
        }

        report
    }
}

impl Default for CostStateManager {
    fn default() -> Self {
        Self::with_defaults()
    }
}
