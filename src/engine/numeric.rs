/// Replace NaN and infinities with 0.
#[inline]
pub fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}

/// Division that yields 0 for a non-positive or non-finite denominator.
#[inline]
pub fn safe_div(numerator: f64, denominator: f64) -> f64 {
    if denominator.is_finite() && denominator > 0.0 {
        finite_or_zero(numerator / denominator)
    } else {
        0.0
    }
}

/// `pct` percent of `value`.
#[inline]
pub fn percent_of(value: f64, pct: f64) -> f64 {
    value * pct / 100.0
}

/// What remains after removing `pct` percent: `1 - pct/100`.
#[inline]
pub fn remaining_fraction(pct: f64) -> f64 {
    1.0 - pct / 100.0
}
