//! Best record per concept pair.
//!
//! A path search usually yields several outcomes for many (start, end)
//! pairs at once. [`best_per_pair`] groups them and reduces each group
//! independently. Groups may be reduced in parallel (feature `parallel`);
//! the fold inside each group always runs left to right.

use std::collections::HashMap;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::selector::MetricSelector;
use crate::metric::MetricRecord;

/// Configuration for [`best_per_pair`].
///
/// # Examples
///
/// ```
/// use u_pathrank::selection::BatchConfig;
///
/// let config = BatchConfig::default().with_parallel(false);
/// assert!(!config.parallel);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BatchConfig {
    /// Whether to reduce groups in parallel using rayon.
    ///
    /// Ignored unless the crate is built with the `parallel` feature.
    pub parallel: bool,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self { parallel: true }
    }
}

impl BatchConfig {
    /// Enables or disables parallel group reduction.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

/// Returns the best record for every distinct `(start, end)` pair.
///
/// Pairs appear in the order of their first occurrence in `records`.
/// Within a pair, records are folded in input order, so ties resolve to
/// the earliest record exactly as [`MetricSelector::select_best`] would.
pub fn best_per_pair<'a>(
    selector: &MetricSelector,
    records: &'a [MetricRecord],
    config: &BatchConfig,
) -> Vec<&'a MetricRecord> {
    let groups = group_by_pair(records);
    tracing::debug!(
        records = records.len(),
        pairs = groups.len(),
        "reducing path metrics per pair"
    );

    reduce_groups(selector, &groups, config.parallel)
}

/// Records sharing one `(start, end)` pair, in input order.
struct PairGroup<'a> {
    first: &'a MetricRecord,
    rest: Vec<&'a MetricRecord>,
}

impl<'a> PairGroup<'a> {
    fn reduce(&self, selector: &MetricSelector) -> &'a MetricRecord {
        selector.fold_from(self.first, self.rest.iter().copied())
    }
}

/// Groups records by endpoint pair, preserving first-seen order.
fn group_by_pair(records: &[MetricRecord]) -> Vec<PairGroup<'_>> {
    let mut index: HashMap<(&str, &str), usize> = HashMap::new();
    let mut groups: Vec<PairGroup<'_>> = Vec::new();

    for r in records {
        match index.get(&(r.start(), r.end())) {
            Some(&slot) => groups[slot].rest.push(r),
            None => {
                index.insert((r.start(), r.end()), groups.len());
                groups.push(PairGroup {
                    first: r,
                    rest: Vec::new(),
                });
            }
        }
    }
    groups
}

#[cfg(feature = "parallel")]
fn reduce_groups<'a>(
    selector: &MetricSelector,
    groups: &[PairGroup<'a>],
    parallel: bool,
) -> Vec<&'a MetricRecord> {
    if parallel {
        groups.par_iter().map(|g| g.reduce(selector)).collect()
    } else {
        groups.iter().map(|g| g.reduce(selector)).collect()
    }
}

#[cfg(not(feature = "parallel"))]
fn reduce_groups<'a>(
    selector: &MetricSelector,
    groups: &[PairGroup<'a>],
    _parallel: bool,
) -> Vec<&'a MetricRecord> {
    groups.iter().map(|g| g.reduce(selector)).collect()
}
