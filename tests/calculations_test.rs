#[macro_use]
extern crate assert_float_eq;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use bakery_cost_rs::engine::{
    aggregate, evaluate, project, reference_recipe, resolve_scale, DEFAULT_LOSS_PCT,
};
use bakery_cost_rs::models::{ConfigIssue, Ingredient, MeasureUnit, RecipeParameters};

const TOL: f64 = 1e-9;

fn cents(value: f64) -> i64 {
    (value * 100.0).round() as i64
}

/// Random but valid parameters with margin and loss below 100%.
fn random_params(rng: &mut StdRng) -> RecipeParameters {
    RecipeParameters {
        unit_weight_g: rng.gen_range(10.0..500.0),
        unit_count: rng.gen_range(1.0..200.0_f64).round(),
        loss_pct: rng.gen_range(0.0..50.0),
        energy_kwh_per_batch: rng.gen_range(0.0..5.0),
        energy_price_per_kwh: rng.gen_range(0.0..1.0),
        water_liters_per_batch: rng.gen_range(0.0..20.0),
        water_price_per_m3: rng.gen_range(0.0..10.0),
        labor_minutes: rng.gen_range(0.0..240.0),
        labor_hourly_rate: rng.gen_range(0.0..40.0),
        packaging_per_unit: rng.gen_range(0.0..1.0),
        overhead_pct: rng.gen_range(0.0..50.0),
        margin_pct: rng.gen_range(0.0..90.0),
        vat_pct: rng.gen_range(0.0..25.0),
    }
}

#[test]
fn test_reference_scenario_scale() {
    let params = RecipeParameters::default();
    let scale = resolve_scale(
        &reference_recipe(),
        params.unit_weight_g,
        params.unit_count,
        params.loss_pct,
    );

    assert_eq!(DEFAULT_LOSS_PCT, 3.0);
    assert_float_absolute_eq!(scale, (1200.0 / 436.0) / 0.97, TOL);
    assert_float_absolute_eq!(scale, 2.83742, 1e-5);
}

#[test]
fn test_reference_scenario_costs_to_the_cent() {
    let b = evaluate(&reference_recipe(), &RecipeParameters::default());

    assert_eq!(cents(b.material_cost), 653);
    assert_eq!(cents(b.energy_cost), 149);
    assert_eq!(cents(b.water_cost), 6);
    assert_eq!(cents(b.labor_cost), 1500);
    assert_eq!(cents(b.packaging_cost), 180);
    assert_eq!(cents(b.variable_subtotal), 2489);
    assert_eq!(cents(b.overhead_amount), 249);
    assert_eq!(cents(b.total_cost), 2737);
    assert_eq!(cents(b.unit_cost), 228);
    assert_eq!(cents(b.pre_tax_price), 380);
    assert_eq!(cents(b.tax_inclusive_price), 407);
    assert!(b.issues.is_empty());
}

#[test]
fn test_material_is_sum_of_lines() {
    let b = evaluate(&reference_recipe(), &RecipeParameters::default());
    let by_line: f64 = reference_recipe()
        .iter()
        .map(|i| i.base_quantity * i.unit_price * b.scale)
        .sum();
    assert_float_absolute_eq!(b.material_cost, by_line, TOL);
    assert_float_absolute_eq!(b.total_mass_g(), 436.0 * b.scale, TOL);
}

#[test]
fn test_proportionality_in_unit_count() {
    let mut rng = StdRng::seed_from_u64(7);
    let recipe = reference_recipe();

    for _ in 0..50 {
        let base = random_params(&mut rng);
        let k: f64 = rng.gen_range(0.1..10.0);
        let scaled = RecipeParameters {
            unit_count: base.unit_count * k,
            ..base.clone()
        };

        let a = evaluate(&recipe, &base);
        let b = evaluate(&recipe, &scaled);

        assert_float_relative_eq!(b.material_cost, a.material_cost * k, 1e-9);
        assert_float_absolute_eq!(b.energy_cost, a.energy_cost * k, 1e-9);
        assert_float_absolute_eq!(b.water_cost, a.water_cost * k, 1e-9);
        assert_float_absolute_eq!(b.packaging_cost, a.packaging_cost * k, 1e-9);
        assert_eq!(b.labor_cost, a.labor_cost);
    }
}

#[test]
fn test_zero_units_boundary() {
    let params = RecipeParameters {
        unit_count: 0.0,
        ..Default::default()
    };
    let b = evaluate(&reference_recipe(), &params);

    assert_eq!(b.scale, 0.0);
    assert_eq!(b.unit_cost, 0.0);
    assert_eq!(b.packaging_cost, 0.0);
    assert_eq!(b.total_margin, 0.0);
    assert!(b.all_values().iter().all(|v| v.is_finite()));
}

#[test]
fn test_degenerate_recipe_leaves_only_labor() {
    let params = RecipeParameters {
        packaging_per_unit: 0.0,
        ..Default::default()
    };
    let zeroed: Vec<Ingredient> = reference_recipe()
        .into_iter()
        .map(|mut i| {
            i.base_quantity = 0.0;
            i
        })
        .collect();

    for recipe in [Vec::new(), zeroed] {
        let b = evaluate(&recipe, &params);
        assert_eq!(b.scale, 0.0);
        assert_eq!(b.material_cost, 0.0);
        assert_eq!(b.energy_cost, 0.0);
        assert_eq!(b.water_cost, 0.0);
        assert_float_absolute_eq!(
            b.total_cost,
            b.labor_cost * (1.0 + params.overhead_pct / 100.0),
            TOL
        );
        assert_eq!(b.issues.first(), Some(&ConfigIssue::DegenerateRecipe));
        assert!(b.is_configuration_valid());
    }
}

#[test]
fn test_margin_identity() {
    let mut rng = StdRng::seed_from_u64(11);
    let recipe = reference_recipe();

    for _ in 0..50 {
        let params = random_params(&mut rng);
        let b = evaluate(&recipe, &params);

        assert_float_relative_eq!(
            b.pre_tax_price * (1.0 - params.margin_pct / 100.0),
            b.unit_cost,
            1e-9
        );
        if b.pre_tax_price > 0.0 {
            assert_float_absolute_eq!(
                b.unit_margin / b.pre_tax_price * 100.0,
                params.margin_pct,
                1e-7
            );
        }
    }
}

#[test]
fn test_tax_round_trip() {
    let mut rng = StdRng::seed_from_u64(23);
    let recipe = reference_recipe();

    for _ in 0..50 {
        let params = random_params(&mut rng);
        let b = evaluate(&recipe, &params);
        assert_float_relative_eq!(
            b.tax_inclusive_price / (1.0 + params.vat_pct / 100.0),
            b.pre_tax_price,
            1e-12
        );
    }
}

#[test]
fn test_non_negative_for_valid_inputs() {
    let mut rng = StdRng::seed_from_u64(42);
    let recipe = reference_recipe();

    for _ in 0..100 {
        let mut params = random_params(&mut rng);
        params.unit_count = rng.gen_range(0.0..3.0_f64).floor();
        let b = evaluate(&recipe, &params);
        for value in b.all_values() {
            assert!(value.is_finite() && value >= 0.0, "bad value {} in {:?}", value, b);
        }
    }
}

#[test]
fn test_invalid_loss_is_flagged_not_fatal() {
    let params = RecipeParameters {
        loss_pct: 100.0,
        ..Default::default()
    };
    let b = evaluate(&reference_recipe(), &params);

    assert_eq!(b.scale, 0.0);
    assert_eq!(b.material_cost, 0.0);
    assert!(b.labor_cost > 0.0);
    assert!(b.issues.contains(&ConfigIssue::InvalidLoss { loss_pct: 100.0 }));
    assert!(!b.is_configuration_valid());
    assert!(b.all_values().iter().all(|v| v.is_finite() && *v >= 0.0));
}

#[test]
fn test_bad_loss_on_empty_recipe_is_still_an_error() {
    let params = RecipeParameters {
        loss_pct: 150.0,
        ..Default::default()
    };
    let b = evaluate(&[], &params);

    assert_eq!(b.scale, 0.0);
    assert_eq!(b.issues[0], ConfigIssue::DegenerateRecipe);
    assert!(b.issues.contains(&ConfigIssue::InvalidLoss { loss_pct: 150.0 }));
    assert!(!b.is_configuration_valid());
}

#[test]
fn test_invalid_margin_is_flagged_not_fatal() {
    let params = RecipeParameters {
        margin_pct: 100.0,
        ..Default::default()
    };
    let b = evaluate(&reference_recipe(), &params);

    assert!(b.unit_cost > 0.0);
    assert_eq!(b.pre_tax_price, 0.0);
    assert_eq!(b.tax_inclusive_price, 0.0);
    assert_eq!(b.unit_margin, 0.0);
    assert_eq!(b.total_margin, 0.0);
    assert!(!b.is_configuration_valid());
}

#[test]
fn test_pipeline_stages_compose() {
    let recipe = vec![
        Ingredient::new("Flour", MeasureUnit::Mass, 1.0, 200.0, 0.001),
        Ingredient::new("Egg", MeasureUnit::Count, 50.0, 4.0, 0.25),
    ];
    let params = RecipeParameters {
        unit_weight_g: 50.0,
        unit_count: 16.0,
        loss_pct: 0.0,
        ..Default::default()
    };

    let scale = resolve_scale(&recipe, params.unit_weight_g, params.unit_count, params.loss_pct);
    assert_float_absolute_eq!(scale, 2.0, TOL);

    let lines = project(&recipe, scale);
    assert_float_absolute_eq!(lines[1].needed_quantity, 8.0, TOL);
    assert_float_absolute_eq!(lines[1].needed_mass_g, 400.0, TOL);

    let staged = aggregate(&lines, &params, scale);
    assert_eq!(staged, evaluate(&recipe, &params));
}
