//! Fixed-place rounding for published metrics.
//!
//! Exact ties round to the even neighbour, so `0.03125` becomes `0.0312`
//! at four places and `3.125` becomes `3.12` at two.

/// Round to 2 decimal places.
pub(crate) fn round2(v: f64) -> f64 {
    (v * 100.0).round_ties_even() / 100.0
}

/// Round to 4 decimal places.
pub(crate) fn round4(v: f64) -> f64 {
    (v * 10_000.0).round_ties_even() / 10_000.0
}
