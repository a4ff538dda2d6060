//! Random helpers used by the spawner and effects.

use rand::seq::SliceRandom;
use rand::Rng;

/// Uniform float in `[min, max)`. Returns `min` for an empty or non-finite range.
pub fn random_range(rng: &mut impl Rng, min: f32, max: f32) -> f32 {
    if !(max > min) || !min.is_finite() || !max.is_finite() {
        return min;
    }
    rng.gen_range(min..max)
}

/// Uniform integer in `[min, max]`.
pub fn random_int(rng: &mut impl Rng, min: i32, max: i32) -> i32 {
    if max <= min {
        return min;
    }
    rng.gen_range(min..=max)
}

/// Uniform pick from a slice; `None` when it is empty.
pub fn pick<'a, T>(rng: &mut impl Rng, items: &'a [T]) -> Option<&'a T> {
    items.choose(rng)
}

/// Uniform letter in `A..=Z`.
pub fn random_letter(rng: &mut impl Rng) -> char {
    char::from(b'A' + rng.gen_range(0..26u8))
}
