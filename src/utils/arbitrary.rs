//! Helper functions for using `quickcheck`'s `Arbitrary` trait

use quickcheck::Arbitrary;

#[must_use]
pub fn finite_float(gen: &mut quickcheck::Gen) -> f64 {
    let raw = f64::arbitrary(gen);
    if raw.is_infinite() || raw.is_nan() {
        0.0
    } else {
        raw
    }
}

/// A finite float in `(-limit, limit)`.
/// quickcheck likes to hand out `f64::MAX` and friends, which overflow any sum.
#[must_use]
pub fn bounded_float(gen: &mut quickcheck::Gen, limit: f64) -> f64 {
    let float = finite_float(gen);
    if float.abs() < limit {
        float
    } else {
        float % limit
    }
}

#[must_use]
pub fn non_negative_float(gen: &mut quickcheck::Gen, limit: f64) -> f64 {
    bounded_float(gen, limit).abs()
}
