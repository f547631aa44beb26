// Deduplicator: collapse near-duplicate vertices produced by different
// constraint combinations that converge on the same geometric point.

use std::collections::HashSet;

use super::DEDUP_DECIMALS;

/// Rounding-based equality key: each coordinate independently rounded to
/// [`DEDUP_DECIMALS`] decimal digits. Every stage that needs approximate
/// vertex equality goes through this one function.
pub(crate) fn rounded_key(point: &[f64]) -> Vec<i64> {
    let scale = 10f64.powi(DEDUP_DECIMALS);
    point.iter().map(|&x| (x * scale).round() as i64).collect()
}

/// Keep the first occurrence per rounding key, preserving insertion order.
/// Which member of a duplicate group survives is arbitrary; all of them are
/// the same vertex up to numerical noise.
pub(crate) fn dedup_vertices(points: Vec<Vec<f64>>) -> Vec<Vec<f64>> {
    let mut seen = HashSet::new();
    points
        .into_iter()
        .filter(|point| seen.insert(rounded_key(point)))
        .collect()
}
