//! Filter and sort helpers for presentation layers.
//!
//! The rendering side of a search UI lives outside this library, but it
//! needs two operations on a result's datasets: narrowing by domain (and
//! a relevance floor) and reordering by a display key. Both return new
//! vectors; the cached `SearchResult` is never mutated.

use std::cmp::Ordering;

use crate::types::dataset::{Dataset, Domain};

/// Sort key for displaying datasets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Highest relevance first
    Relevance,

    /// Name ascending, case-insensitive
    Name,

    /// Domain ascending, case-insensitive
    Domain,
}

/// Keep datasets matching `domain` (all domains when `None`) with a
/// relevance score of at least `min_relevance`.
///
/// A floor of 0.0 keeps everything.
pub fn filter_datasets(
    datasets: &[Dataset],
    domain: Option<Domain>,
    min_relevance: f32,
) -> Vec<Dataset> {
    datasets
        .iter()
        .filter(|d| domain.map_or(true, |wanted| d.domain == wanted))
        .filter(|d| d.relevance_score >= min_relevance)
        .cloned()
        .collect()
}

/// Return the datasets reordered by `key`.
///
/// The sort is stable, so records that compare equal keep the relevance
/// order they arrived in.
pub fn sort_datasets(datasets: &[Dataset], key: SortKey) -> Vec<Dataset> {
    let mut sorted = datasets.to_vec();
    match key {
        SortKey::Relevance => sorted.sort_by(|a, b| {
            b.relevance_score
                .partial_cmp(&a.relevance_score)
                .unwrap_or(Ordering::Equal)
        }),
        SortKey::Name => sorted.sort_by(|a, b| {
            a.name
                .to_lowercase()
                .cmp(&b.name.to_lowercase())
        }),
        SortKey::Domain => sorted.sort_by(|a, b| {
            a.domain
                .as_str()
                .to_lowercase()
                .cmp(&b.domain.as_str().to_lowercase())
        }),
    }
    sorted
}
