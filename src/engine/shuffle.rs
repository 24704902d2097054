//! Shuffle primitive — repeated Fisher–Yates passes at a chosen intensity.

use super::rng::RandomSource;
use super::types::Intensity;

/// Shuffle `items` with `intensity.passes()` independent Fisher–Yates passes,
/// drawing indices from `source`.
///
/// Returns a new vector holding the same elements in permuted order; the
/// input is never mutated. Empty and single-element sequences come back as
/// equivalent copies.
pub fn shuffle<T: Clone>(
    items: &[T],
    intensity: Intensity,
    source: &mut dyn RandomSource,
) -> Vec<T> {
    let mut out: Vec<T> = items.to_vec();
    if out.len() < 2 {
        return out;
    }
    for _ in 0..intensity.passes() {
        for i in (1..out.len()).rev() {
            let j = source.pick(i + 1);
            out.swap(i, j);
        }
    }
    out
}
