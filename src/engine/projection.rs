use crate::engine::numeric::finite_or_zero;
use crate::models::{DerivedLine, Ingredient};

/// Scale one ingredient and price it with its canonical unit price.
pub fn project_line(ingredient: &Ingredient, scale: f64) -> DerivedLine {
    let needed_quantity = finite_or_zero(ingredient.base_quantity * scale);
    DerivedLine {
        name: ingredient.name.clone(),
        unit: ingredient.unit,
        needed_quantity,
        needed_mass_g: finite_or_zero(needed_quantity * ingredient.grams_per_unit),
        cost: finite_or_zero(needed_quantity * ingredient.unit_price),
    }
}

/// Project every ingredient, preserving input order. No rounding is applied.
pub fn project(ingredients: &[Ingredient], scale: f64) -> Vec<DerivedLine> {
    ingredients
        .iter()
        .map(|ingredient| project_line(ingredient, scale))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MeasureUnit;

    #[test]
    fn test_count_unit_converts_to_mass() {
        let egg = Ingredient::new("Egg", MeasureUnit::Count, 50.0, 2.0, 0.30);
        let line = project_line(&egg, 1.5);
        assert!((line.needed_quantity - 3.0).abs() < 1e-12);
        assert!((line.needed_mass_g - 150.0).abs() < 1e-12);
        assert!((line.cost - 0.9).abs() < 1e-12);
        assert_eq!(line.unit, MeasureUnit::Count);
    }

    #[test]
    fn test_order_is_preserved() {
        let ingredients = vec![
            Ingredient::new("Sugar", MeasureUnit::Mass, 1.0, 75.0, 0.0015),
            Ingredient::new("Milk", MeasureUnit::Volume, 1.0, 10.0, 0.0011),
            Ingredient::new("Butter", MeasureUnit::Mass, 1.0, 100.0, 0.0099),
        ];
        let names: Vec<String> = project(&ingredients, 2.0)
            .into_iter()
            .map(|l| l.name)
            .collect();
        assert_eq!(names, ["Sugar", "Milk", "Butter"]);
    }

    #[test]
    fn test_zero_scale_zeroes_everything() {
        let flour = Ingredient::new("Flour", MeasureUnit::Mass, 1.0, 150.0, 0.0012);
        let line = project_line(&flour, 0.0);
        assert_eq!(line.needed_quantity, 0.0);
        assert_eq!(line.needed_mass_g, 0.0);
        assert_eq!(line.cost, 0.0);
    }

    #[test]
    fn test_values_are_not_rounded() {
        let salt = Ingredient::new("Salt", MeasureUnit::Mass, 1.0, 3.0, 0.0008);
        let line = project_line(&salt, 1.0 / 3.0);
        assert!((line.cost - 0.0008).abs() < 1e-15);
    }
}
