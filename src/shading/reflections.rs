//! Deterministic reflection sequences.
//!
//! The shading model only reads reflections by index. Callers usually feed
//! it the output of their own seeded generator; this module provides a
//! generator-free alternative based on the radical inverse, which gives a
//! well spread, reproducible sequence in `[0, 1)`.

/// Reflections a full-size gem can consume: 12 sides × 5 levels × 5 stops.
pub const DEFAULT_REFLECTION_COUNT: usize = 12 * 5 * 5;

/// Radical inverse of `n` in `base`: the digits of `n` mirrored about the
/// radix point.
///
/// # Example
///
/// ```
/// use gemcut::shading::radical_inverse;
///
/// // In base 2: 3 -> 0.11 (binary) = 0.75
/// assert!((radical_inverse(3, 2) - 0.75).abs() < 1e-10);
/// ```
pub fn radical_inverse(n: u32, base: u32) -> f64 {
    let mut n = n;
    let mut result = 0.0;
    let mut fraction = 1.0 / base as f64;

    while n > 0 {
        let digit = n % base;
        result += digit as f64 * fraction;
        n /= base;
        fraction /= base as f64;
    }

    result
}

/// `count` values of the Halton sequence in `base`, starting at index 1.
///
/// Index 0 is skipped so the sequence does not open with an exact zero.
/// Bases below 2 are treated as 2.
pub fn halton_reflections(count: usize, base: u32) -> Vec<f64> {
    let base = base.max(2);
    (1..=count as u32).map(|i| radical_inverse(i, base)).collect()
}
