//! Rule cascade engine.

use std::fmt;

use super::rules::{Depth, Existence, PathCount, Symmetry, Uniqueness};
use super::types::{Choice, SelectionRule};
use crate::error::{PathRankError, PathRankResult};
use crate::metric::MetricRecord;

/// Outcome of a pairwise comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision<'s> {
    /// The preferred side.
    pub choice: Choice,

    /// Name of the rule that decided, or `None` when every rule tied and
    /// the first argument was kept.
    pub rule: Option<&'s str>,
}

/// Picks the better of two path-search outcomes by an ordered rule list.
///
/// Rules are consulted in order; the first one that distinguishes the pair
/// decides. If all rules tie, the first argument wins. There is no scoring
/// or weighting: the policy is a pure lexicographic cascade.
///
/// # Ordering caveat
///
/// Because different rules may decide different pairs, the cascade is not
/// guaranteed to be transitive over arbitrary inputs. [`select_best`]
/// therefore folds strictly left to right, and its result may depend on
/// input order when the inputs are genuinely ambiguous.
///
/// # Examples
///
/// ```
/// use u_pathrank::metric::MetricRecord;
/// use u_pathrank::selection::MetricSelector;
///
/// let selector = MetricSelector::standard();
///
/// let shallow = MetricRecord::new("blue", "sad").with_path_counts(1, 0).with_depth(2);
/// let deep = MetricRecord::new("blue", "sad").with_path_counts(100, 0).with_depth(3);
///
/// assert!(std::ptr::eq(selector.preferred(&shallow, &deep), &shallow));
/// ```
///
/// [`select_best`]: MetricSelector::select_best
pub struct MetricSelector {
    rules: Vec<Box<dyn SelectionRule>>,
}

impl MetricSelector {
    /// Creates a selector with no rules. Every pair ties and `a` is kept.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Creates the standard cascade: existence, depth, path count,
    /// uniqueness, symmetry ratio.
    pub fn standard() -> Self {
        Self::new()
            .with_rule(Existence)
            .with_rule(Depth)
            .with_rule(PathCount)
            .with_rule(Uniqueness)
            .with_rule(Symmetry)
    }

    /// Appends a rule after those already present.
    pub fn with_rule<R: SelectionRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Returns the number of rules in this selector.
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Returns the names of all rules in order.
    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Compares `a` and `b` and reports which rule decided.
    pub fn decide(&self, a: &MetricRecord, b: &MetricRecord) -> Decision<'_> {
        self.rules
            .iter()
            .find_map(|rule| {
                rule.compare(a, b).map(|choice| Decision {
                    choice,
                    rule: Some(rule.name()),
                })
            })
            .unwrap_or(Decision {
                choice: Choice::First,
                rule: None,
            })
    }

    /// Returns whichever of `a` and `b` is the better outcome.
    ///
    /// The returned reference is one of the two arguments, so callers may
    /// rely on pointer identity (e.g. a full tie returns `a` itself).
    pub fn preferred<'a>(&self, a: &'a MetricRecord, b: &'a MetricRecord) -> &'a MetricRecord {
        let decision = self.decide(a, b);
        tracing::trace!(
            rule = decision.rule.unwrap_or("fallback"),
            choice = ?decision.choice,
            "{} vs {}",
            a,
            b
        );
        decision.choice.pick(a, b)
    }

    /// Reduces `records` to the best one by a left fold of [`preferred`].
    ///
    /// `result = records[0]`, then `result = preferred(result, r)` for each
    /// following record, in order. No record is modified.
    ///
    /// # Errors
    /// Returns [`PathRankError::EmptyInput`] if `records` is empty.
    ///
    /// [`preferred`]: Self::preferred
    pub fn select_best<'a, I>(&self, records: I) -> PathRankResult<&'a MetricRecord>
    where
        I: IntoIterator<Item = &'a MetricRecord>,
    {
        let mut iter = records.into_iter();
        let first = iter.next().ok_or(PathRankError::EmptyInput)?;
        Ok(self.fold_from(first, iter))
    }

    /// Left-folds `rest` into `first` with [`preferred`](Self::preferred).
    pub(crate) fn fold_from<'a, I>(&self, first: &'a MetricRecord, rest: I) -> &'a MetricRecord
    where
        I: IntoIterator<Item = &'a MetricRecord>,
    {
        let mut considered = 1usize;
        let best = rest.into_iter().fold(first, |best, r| {
            considered += 1;
            self.preferred(best, r)
        });

        tracing::debug!(considered, best = %best, "selected best path metric");
        best
    }
}

impl Default for MetricSelector {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Debug for MetricSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MetricSelector")
            .field("rules", &self.rule_names())
            .finish()
    }
}
