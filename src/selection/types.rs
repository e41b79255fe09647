//! Core trait for selection rules.

use crate::metric::MetricRecord;

/// Which side of a pairwise comparison is preferred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    /// The first argument (`a`).
    First,
    /// The second argument (`b`).
    Second,
}

impl Choice {
    /// Returns the record this choice refers to.
    pub fn pick<'a, T>(self, a: &'a T, b: &'a T) -> &'a T {
        match self {
            Choice::First => a,
            Choice::Second => b,
        }
    }
}

/// One step of a lexicographic tie-break cascade.
///
/// A rule looks at a pair of records and either decides it, returning the
/// preferred side, or returns `None` to pass the pair on to the next rule.
/// Comparisons are strict: equal keys must return `None`.
///
/// # Examples
///
/// ```
/// use u_pathrank::metric::MetricRecord;
/// use u_pathrank::selection::{Choice, SelectionRule};
///
/// // Prefer pairs that end on a shorter seed word.
/// struct ShorterSeed;
///
/// impl SelectionRule for ShorterSeed {
///     fn name(&self) -> &str { "ShorterSeed" }
///     fn compare(&self, a: &MetricRecord, b: &MetricRecord) -> Option<Choice> {
///         let (la, lb) = (a.end().len(), b.end().len());
///         if la < lb {
///             Some(Choice::First)
///         } else if lb < la {
///             Some(Choice::Second)
///         } else {
///             None
///         }
///     }
/// }
/// ```
pub trait SelectionRule: Send + Sync {
    /// Returns the name of this rule.
    fn name(&self) -> &str;

    /// Decides between `a` and `b`, or returns `None` on a tie.
    fn compare(&self, a: &MetricRecord, b: &MetricRecord) -> Option<Choice>;
}

/// Prefers the strictly smaller key. Ties and incomparable keys yield `None`.
pub(crate) fn prefer_lower<K: PartialOrd>(a: K, b: K) -> Option<Choice> {
    if a < b {
        Some(Choice::First)
    } else if b < a {
        Some(Choice::Second)
    } else {
        None
    }
}

/// Prefers the strictly larger key. Ties and incomparable keys yield `None`.
pub(crate) fn prefer_higher<K: PartialOrd>(a: K, b: K) -> Option<Choice> {
    if a > b {
        Some(Choice::First)
    } else if b > a {
        Some(Choice::Second)
    } else {
        None
    }
}
