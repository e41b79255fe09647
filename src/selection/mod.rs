//! Multi-criteria selection of path-search outcomes.
//!
//! Given two [`MetricRecord`]s for the same concept pair, decides which is
//! the stronger evidence of a conceptual connection. The decision is a
//! fixed lexicographic cascade:
//!
//! 1. **Existence**: any found path beats none (two empty results keep `a`)
//! 2. **Depth**: lower wins
//! 3. **Path count**: higher wins
//! 4. **Uniqueness**: higher `unique_count` wins
//! 5. **Symmetry ratio**: higher wins
//! 6. **Fallback**: `a`
//!
//! Every comparison is strict; equal keys always fall through to the next
//! rule. Rules are objects implementing [`SelectionRule`] and are applied by
//! [`MetricSelector`] with short-circuit iteration.
//!
//! The free functions [`preferred`] and [`select_best`] use a shared
//! instance of the standard cascade.

mod batch;
mod rules;
mod selector;
mod types;

use std::sync::OnceLock;

pub use batch::{best_per_pair, BatchConfig};
pub use rules::{Depth, Existence, PathCount, Symmetry, Uniqueness};
pub use selector::{Decision, MetricSelector};
pub use types::{Choice, SelectionRule};

use crate::error::PathRankResult;
use crate::metric::MetricRecord;

fn standard() -> &'static MetricSelector {
    static STANDARD: OnceLock<MetricSelector> = OnceLock::new();
    STANDARD.get_or_init(MetricSelector::standard)
}

/// Returns the better of `a` and `b` under the standard cascade.
///
/// ```
/// use u_pathrank::metric::MetricRecord;
/// use u_pathrank::selection::preferred;
///
/// let none = MetricRecord::new("dead", "sad");
/// let some = MetricRecord::new("dead", "sad").with_path_counts(5, 1).with_depth(3);
///
/// assert!(std::ptr::eq(preferred(&none, &some), &some));
/// ```
pub fn preferred<'a>(a: &'a MetricRecord, b: &'a MetricRecord) -> &'a MetricRecord {
    standard().preferred(a, b)
}

/// Left-folds `records` with [`preferred`] under the standard cascade.
///
/// # Errors
/// Returns [`PathRankError::EmptyInput`](crate::PathRankError::EmptyInput)
/// if `records` is empty.
pub fn select_best<'a, I>(records: I) -> PathRankResult<&'a MetricRecord>
where
    I: IntoIterator<Item = &'a MetricRecord>,
{
    standard().select_best(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PathRankError;

    #[test]
    fn test_free_functions_use_standard_cascade() {
        let a = MetricRecord::new("s", "e").with_path_counts(3, 0).with_depth(2);
        let b = MetricRecord::new("s", "e").with_path_counts(7, 0).with_depth(2);
        assert!(std::ptr::eq(preferred(&a, &b), &b));

        let records = vec![a.clone(), b.clone()];
        assert_eq!(select_best(&records).unwrap(), &b);
    }

    #[test]
    fn test_free_select_best_empty() {
        let records: [MetricRecord; 0] = [];
        assert!(matches!(select_best(&records), Err(PathRankError::EmptyInput)));
    }
}
