use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::error::{CostError, Result};
use crate::interface::units::{display_unit_label, from_display_price, to_display_price};
use crate::models::Ingredient;

/// Parse a user-entered non-negative decimal.
///
/// Accepts `,` as the decimal separator. When both `,` and `.` appear, the
/// last one is the decimal separator and the other is dropped as grouping.
pub fn parse_decimal(input: &str) -> Result<f64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(CostError::InvalidInput("Empty number".to_string()));
    }

    let normalized = match (trimmed.rfind(','), trimmed.rfind('.')) {
        (Some(comma), Some(dot)) if comma > dot => trimmed.replace('.', "").replace(',', "."),
        (Some(_), Some(_)) => trimmed.replace(',', ""),
        (Some(_), None) => trimmed.replace(',', "."),
        _ => trimmed.to_string(),
    };

    let value: f64 = normalized
        .parse()
        .map_err(|_| CostError::InvalidInput(format!("Invalid number: {}", trimmed)))?;

    if !value.is_finite() {
        return Err(CostError::InvalidInput(format!("Invalid number: {}", trimmed)));
    }
    if value < 0.0 {
        return Err(CostError::InvalidInput(format!(
            "Negative values are not allowed: {}",
            trimmed
        )));
    }

    // "-0" passes the sign check above.
    Ok(value.abs())
}

/// Find an ingredient by exact (case-insensitive) name, else by fuzzy score.
///
/// Returns candidates best-first; an exact match is returned alone.
pub fn match_ingredients<'a>(ingredients: &'a [Ingredient], input: &str) -> Vec<&'a Ingredient> {
    let needle = input.trim().to_lowercase();

    if let Some(exact) = ingredients.iter().find(|i| i.key() == needle) {
        return vec![exact];
    }

    let mut candidates: Vec<(&Ingredient, f64)> = ingredients
        .iter()
        .map(|i| (i, jaro_winkler(&i.key(), &needle)))
        .filter(|(_, score)| *score > 0.7)
        .collect();

    candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    candidates.into_iter().map(|(i, _)| i).collect()
}

/// Prompt for an ingredient, with fuzzy matching on typed names.
pub fn prompt_ingredient(ingredients: &[Ingredient]) -> Result<Option<String>> {
    let input: String = Input::new()
        .with_prompt("Which ingredient? (Enter to pick from list)")
        .allow_empty(true)
        .interact_text()?;

    if input.trim().is_empty() {
        let names: Vec<&str> = ingredients.iter().map(|i| i.name.as_str()).collect();
        let selection = Select::new()
            .with_prompt("Select an ingredient")
            .items(&names)
            .default(0)
            .interact()?;
        return Ok(Some(names[selection].to_string()));
    }

    resolve_ingredient_name(ingredients, &input)
}

/// Turn a typed name into an ingredient name, asking when it is ambiguous.
pub fn resolve_ingredient_name(ingredients: &[Ingredient], input: &str) -> Result<Option<String>> {
    let candidates = match_ingredients(ingredients, input);

    match candidates.as_slice() {
        [] => {
            println!("No matching ingredient found for '{}'", input.trim());
            Ok(None)
        }
        [only] if only.key() == input.trim().to_lowercase() => Ok(Some(only.name.clone())),
        [only] => {
            let confirm = Confirm::new()
                .with_prompt(format!("Did you mean '{}'?", only.name))
                .default(true)
                .interact()?;
            Ok(confirm.then(|| only.name.clone()))
        }
        many => {
            let mut options: Vec<String> = many.iter().take(5).map(|i| i.name.clone()).collect();
            let shown = options.len();
            options.push("None of these".to_string());

            let selection = Select::new()
                .with_prompt("Which did you mean?")
                .items(&options)
                .default(0)
                .interact()?;

            Ok((selection < shown).then(|| options[selection].clone()))
        }
    }
}

/// Prompt for a new price in the ingredient's display unit.
///
/// Returns the canonical price. Enter keeps the stored price.
pub fn prompt_price(ingredient: &Ingredient) -> Result<f64> {
    let current = to_display_price(ingredient.unit, ingredient.unit_price);
    let input: String = Input::new()
        .with_prompt(format!(
            "New price for {} per {} (current {:.2}, Enter to keep)",
            ingredient.name,
            display_unit_label(ingredient.unit),
            current
        ))
        .allow_empty(true)
        .interact_text()?;

    price_from_input(ingredient, &input)
}

/// Canonical price for typed display-unit input; blank input keeps the stored price.
pub fn price_from_input(ingredient: &Ingredient, input: &str) -> Result<f64> {
    if input.trim().is_empty() {
        return Ok(ingredient.unit_price);
    }
    let display_price = parse_decimal(input)?;
    Ok(from_display_price(ingredient.unit, display_price))
}
