use crate::interface::units::{display_unit_label, to_display_price};
use crate::models::{CostBreakdown, Ingredient, RecipeParameters};

/// Round to whole cents for display. Never fed back into calculations.
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Format a money amount with two decimals.
pub fn format_money(value: f64) -> String {
    format!("{:.2}", round_to_cents(value))
}

fn print_row(label: &str, value: f64) {
    println!("{:<22}{:>10}", label, format_money(value));
}

/// Display a cost breakdown as a line table and a summary.
pub fn display_breakdown(breakdown: &CostBreakdown, params: &RecipeParameters) {
    println!();
    println!(
        "=== Batch: {} units x {} g (scale {:.4}) ===",
        params.unit_count, params.unit_weight_g, breakdown.scale
    );
    println!();

    let name_width = breakdown
        .lines
        .iter()
        .map(|l| l.name.len())
        .max()
        .unwrap_or(10);

    for line in &breakdown.lines {
        println!(
            "  {:<width$}  {:>9.1} {:<2}  {:>8.1} g  {:>8}",
            line.name,
            line.needed_quantity,
            line.unit.symbol(),
            line.needed_mass_g,
            format_money(line.cost),
            width = name_width
        );
    }

    println!();
    println!("--- Costs ---");
    print_row("Material:", breakdown.material_cost);
    print_row("Energy:", breakdown.energy_cost);
    print_row("Water:", breakdown.water_cost);
    print_row("Labor:", breakdown.labor_cost);
    print_row("Packaging:", breakdown.packaging_cost);
    print_row("Variable subtotal:", breakdown.variable_subtotal);
    print_row(
        &format!("Overhead ({}%):", params.overhead_pct),
        breakdown.overhead_amount,
    );
    print_row("Total cost:", breakdown.total_cost);
    println!();
    println!("--- Per unit ---");
    print_row("Unit cost:", breakdown.unit_cost);
    print_row("Price (net):", breakdown.pre_tax_price);
    print_row(
        &format!("Price (+{}% VAT):", params.vat_pct),
        breakdown.tax_inclusive_price,
    );
    print_row("Unit margin:", breakdown.unit_margin);
    print_row("Total margin:", breakdown.total_margin);

    if !breakdown.issues.is_empty() {
        println!();
        let heading = if breakdown.is_configuration_valid() {
            "--- Notes ---"
        } else {
            "--- Configuration errors ---"
        };
        println!("{}", heading);
        for issue in &breakdown.issues {
            println!("  ! {}", issue);
        }
    }
    println!();
}

/// Display ingredient prices in their display units.
pub fn display_prices(ingredients: &[Ingredient]) {
    if ingredients.is_empty() {
        println!("Prices: (none)");
        return;
    }

    println!();
    println!("=== Prices ({} ingredients) ===", ingredients.len());
    println!();

    let name_width = ingredients.iter().map(|i| i.name.len()).max().unwrap_or(10);
    for ingredient in ingredients {
        println!(
            "  {:<width$}  {:>8} / {:<4}  (recipe: {} {})",
            ingredient.name,
            format_money(to_display_price(ingredient.unit, ingredient.unit_price)),
            display_unit_label(ingredient.unit),
            ingredient.base_quantity,
            ingredient.unit.symbol(),
            width = name_width
        );
    }

    println!();
}

/// Display the current parameter values.
pub fn display_parameters(params: &RecipeParameters) {
    println!();
    println!("=== Parameters ===");
    for (name, value) in params.entries() {
        println!("  {:<14} {}", name, value);
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to_cents() {
        assert_eq!(round_to_cents(6.532866), 6.53);
        assert_eq!(round_to_cents(2.005001), 2.01);
        assert_eq!(round_to_cents(0.0), 0.0);
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(3.802083), "3.80");
        assert_eq!(format_money(15.0), "15.00");
    }
}
