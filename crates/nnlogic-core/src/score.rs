//! Helpers for unit-interval scores.
//!
//! Every score in the calculus lives in [0.0, 1.0]. Formulas clamp rather
//! than fail; results that escape the interval before clamping are a bug
//! and trip a debug assertion.

/// Clamp a value to [0.0, 1.0].
#[inline]
pub fn clamp_unit(value: f64) -> f64 {
    value.clamp(0.0, 1.0)
}

/// Float rounding allowed before a score counts as out of range.
const ROUNDING_SLACK: f64 = 1e-9;

/// Assert (debug builds only) that `value` is a valid unit score, up to
/// rounding. NaN fails.
#[inline]
pub(crate) fn debug_check_unit(name: &str, value: f64) {
    debug_assert!(
        value >= -ROUNDING_SLACK && value <= 1.0 + ROUNDING_SLACK,
        "{name} out of range [0,1]: {value}"
    );
}

/// Assert, then clamp. Use for formulas that are specified to stay in
/// range and only need clamping to absorb float rounding.
#[inline]
pub fn unit(name: &str, value: f64) -> f64 {
    debug_check_unit(name, value);
    clamp_unit(value)
}
