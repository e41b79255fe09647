//! The standard path-metric rules.
//!
//! Applied in declaration order by [`MetricSelector::standard`]:
//!
//! | # | Rule           | Key                 | Preference |
//! |---|----------------|---------------------|------------|
//! | 1 | [`Existence`]  | `path_count > 0`    | any paths beat none |
//! | 2 | [`Depth`]      | `depth`             | lower      |
//! | 3 | [`PathCount`]  | `path_count`        | higher     |
//! | 4 | [`Uniqueness`] | `unique_count`      | higher     |
//! | 5 | [`Symmetry`]   | `symmetry_ratio`    | higher     |
//!
//! [`MetricSelector::standard`]: super::MetricSelector::standard

use super::types::{prefer_higher, prefer_lower, Choice, SelectionRule};
use crate::metric::MetricRecord;

/// Any found path beats none.
///
/// Unlike the other rules this one also decides the all-empty case: when
/// neither record has paths, the first is returned so that depth and
/// uniqueness (meaningless without paths) are never consulted.
#[derive(Debug, Clone, Copy, Default)]
pub struct Existence;

impl SelectionRule for Existence {
    fn name(&self) -> &str {
        "Existence"
    }

    fn compare(&self, a: &MetricRecord, b: &MetricRecord) -> Option<Choice> {
        match (a.has_paths(), b.has_paths()) {
            (false, false) => Some(Choice::First),
            (false, true) => Some(Choice::Second),
            (true, false) => Some(Choice::First),
            (true, true) => None,
        }
    }
}

/// Shallower search results indicate a more direct connection.
#[derive(Debug, Clone, Copy, Default)]
pub struct Depth;

impl SelectionRule for Depth {
    fn name(&self) -> &str {
        "Depth"
    }

    fn compare(&self, a: &MetricRecord, b: &MetricRecord) -> Option<Choice> {
        prefer_lower(a.depth(), b.depth())
    }
}

/// More corroborating paths at the same depth.
#[derive(Debug, Clone, Copy, Default)]
pub struct PathCount;

impl SelectionRule for PathCount {
    fn name(&self) -> &str {
        "PathCount"
    }

    fn compare(&self, a: &MetricRecord, b: &MetricRecord) -> Option<Choice> {
        prefer_higher(a.path_count(), b.path_count())
    }
}

/// More distinct intermediate concepts.
#[derive(Debug, Clone, Copy, Default)]
pub struct Uniqueness;

impl SelectionRule for Uniqueness {
    fn name(&self) -> &str {
        "Uniqueness"
    }

    fn compare(&self, a: &MetricRecord, b: &MetricRecord) -> Option<Choice> {
        prefer_higher(a.unique_count(), b.unique_count())
    }
}

/// Larger share of symmetric paths.
#[derive(Debug, Clone, Copy, Default)]
pub struct Symmetry;

impl SelectionRule for Symmetry {
    fn name(&self) -> &str {
        "Symmetry"
    }

    fn compare(&self, a: &MetricRecord, b: &MetricRecord) -> Option<Choice> {
        prefer_higher(a.symmetry_ratio(), b.symmetry_ratio())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn found(paths: u32, sym: u32, depth: u32, unique: u32) -> MetricRecord {
        MetricRecord::new("s", "e")
            .with_path_counts(paths, sym)
            .with_depth(depth)
            .with_unique_count(unique)
    }

    #[test]
    fn test_existence_both_empty_decides_first() {
        let a = MetricRecord::new("s", "x");
        let b = MetricRecord::new("s", "y");
        assert_eq!(Existence.compare(&a, &b), Some(Choice::First));
    }

    #[test]
    fn test_existence_one_empty() {
        let empty = MetricRecord::new("s", "x");
        let some = found(5, 0, 3, 1);
        assert_eq!(Existence.compare(&empty, &some), Some(Choice::Second));
        assert_eq!(Existence.compare(&some, &empty), Some(Choice::First));
    }

    #[test]
    fn test_existence_both_found_passes() {
        assert_eq!(Existence.compare(&found(1, 0, 1, 1), &found(9, 9, 9, 9)), None);
    }

    #[test]
    fn test_depth_lower_wins() {
        assert_eq!(
            Depth.compare(&found(1, 0, 2, 0), &found(100, 0, 3, 0)),
            Some(Choice::First)
        );
        assert_eq!(Depth.compare(&found(1, 0, 2, 0), &found(1, 0, 2, 0)), None);
    }

    #[test]
    fn test_path_count_higher_wins() {
        assert_eq!(
            PathCount.compare(&found(3, 0, 2, 0), &found(7, 0, 2, 0)),
            Some(Choice::Second)
        );
    }

    #[test]
    fn test_uniqueness_higher_wins() {
        assert_eq!(
            Uniqueness.compare(&found(3, 0, 2, 2), &found(3, 0, 2, 5)),
            Some(Choice::Second)
        );
    }

    #[test]
    fn test_symmetry_higher_wins() {
        assert_eq!(
            Symmetry.compare(&found(10, 2, 2, 2), &found(10, 6, 2, 2)),
            Some(Choice::Second)
        );
        assert_eq!(Symmetry.compare(&found(10, 6, 2, 2), &found(5, 3, 2, 2)), None);
    }

    #[test]
    fn test_rule_names() {
        assert_eq!(Existence.name(), "Existence");
        assert_eq!(Depth.name(), "Depth");
        assert_eq!(PathCount.name(), "PathCount");
        assert_eq!(Uniqueness.name(), "Uniqueness");
        assert_eq!(Symmetry.name(), "Symmetry");
    }
}
