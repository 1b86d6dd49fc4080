use crate::models::MeasureUnit;

/// Canonical units per display unit: prices are edited per kg, per litre or per item.
pub fn display_factor(unit: MeasureUnit) -> f64 {
    match unit {
        MeasureUnit::Mass => 1000.0,
        MeasureUnit::Volume => 1000.0,
        MeasureUnit::Count => 1.0,
    }
}

/// Label of the unit a price is shown in.
pub fn display_unit_label(unit: MeasureUnit) -> &'static str {
    match unit {
        MeasureUnit::Mass => "kg",
        MeasureUnit::Volume => "l",
        MeasureUnit::Count => "item",
    }
}

/// Canonical price (per g / ml / item) to the price shown to the user.
pub fn to_display_price(unit: MeasureUnit, canonical_price: f64) -> f64 {
    canonical_price * display_factor(unit)
}

/// Price entered by the user back to the canonical stored price.
pub fn from_display_price(unit: MeasureUnit, display_price: f64) -> f64 {
    display_price / display_factor(unit)
}
