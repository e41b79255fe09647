//! The [`MetricRecord`] value type.

use std::fmt;

/// Outcome of one path search between two concept nodes.
///
/// Counts are supplied by the path enumerator. The symmetry ratio is
/// derived from them by [`set_path_counts`](MetricRecord::set_path_counts)
/// and is never set directly.
///
/// `depth` and `unique_count` carry no meaning when `path_count == 0`.
///
/// # Examples
///
/// ```
/// use u_pathrank::metric::MetricRecord;
///
/// let record = MetricRecord::new("lovely", "happy")
///     .with_path_counts(10, 3)
///     .with_depth(2)
///     .with_unique_count(7);
///
/// assert_eq!(record.path_count(), 10);
/// assert!((record.symmetry_ratio() - 0.3).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "RawRecord", from = "RawRecord")
)]
pub struct MetricRecord {
    start: String,
    end: String,
    concept: String,
    path_count: u32,
    symmetric_path_count: u32,
    depth: u32,
    unique_count: u32,
    symmetry_ratio: f32,
}

/// Wire form of [`MetricRecord`].
///
/// The ratio is written for readers but ignored on input; it is always
/// re-derived from the two path counts.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct RawRecord {
    start: String,
    end: String,
    #[serde(default)]
    concept: String,
    #[serde(default)]
    path_count: u32,
    #[serde(default)]
    symmetric_path_count: u32,
    #[serde(default)]
    depth: u32,
    #[serde(default)]
    unique_count: u32,
    #[serde(default, skip_deserializing)]
    symmetry_ratio: f32,
}

#[cfg(feature = "serde")]
impl From<RawRecord> for MetricRecord {
    fn from(raw: RawRecord) -> Self {
        MetricRecord::with_concept(raw.start, raw.end, raw.concept)
            .with_path_counts(raw.path_count, raw.symmetric_path_count)
            .with_depth(raw.depth)
            .with_unique_count(raw.unique_count)
    }
}

#[cfg(feature = "serde")]
impl From<MetricRecord> for RawRecord {
    fn from(r: MetricRecord) -> Self {
        RawRecord {
            start: r.start,
            end: r.end,
            concept: r.concept,
            path_count: r.path_count,
            symmetric_path_count: r.symmetric_path_count,
            depth: r.depth,
            unique_count: r.unique_count,
            symmetry_ratio: r.symmetry_ratio,
        }
    }
}

impl MetricRecord {
    /// Creates an empty record for the `start` → `end` pair.
    ///
    /// All counts start at zero and the concept label is empty.
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self::with_concept(start, end, "")
    }

    /// Creates an empty record carrying a concept label.
    pub fn with_concept(
        start: impl Into<String>,
        end: impl Into<String>,
        concept: impl Into<String>,
    ) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
            concept: concept.into(),
            path_count: 0,
            symmetric_path_count: 0,
            depth: 0,
            unique_count: 0,
            symmetry_ratio: 0.0,
        }
    }

    /// Sets the number of paths found and derives the symmetry ratio.
    ///
    /// The ratio is `symmetric_path_count / path_count`, or `0.0` when no
    /// path was found. Counts are taken as given: a symmetric count larger
    /// than the path count is kept (yielding a ratio above 1.0) and only
    /// reported as a warning.
    pub fn set_path_counts(&mut self, path_count: u32, symmetric_path_count: u32) {
        if symmetric_path_count > path_count {
            tracing::warn!(
                start = %self.start,
                end = %self.end,
                path_count,
                symmetric_path_count,
                "symmetric path count exceeds total path count"
            );
        }

        self.path_count = path_count;
        self.symmetric_path_count = symmetric_path_count;
        self.symmetry_ratio = if path_count == 0 {
            0.0
        } else {
            symmetric_path_count as f32 / path_count as f32
        };
    }

    /// Builder form of [`set_path_counts`](Self::set_path_counts).
    pub fn with_path_counts(mut self, path_count: u32, symmetric_path_count: u32) -> Self {
        self.set_path_counts(path_count, symmetric_path_count);
        self
    }

    /// Sets the depth at which the search found its paths.
    pub fn set_depth(&mut self, depth: u32) {
        self.depth = depth;
    }

    /// Builder form of [`set_depth`](Self::set_depth).
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    /// Sets the number of distinct intermediate nodes across all paths.
    pub fn set_unique_count(&mut self, unique_count: u32) {
        self.unique_count = unique_count;
    }

    /// Builder form of [`set_unique_count`](Self::set_unique_count).
    pub fn with_unique_count(mut self, unique_count: u32) -> Self {
        self.unique_count = unique_count;
        self
    }

    /// Source concept node.
    pub fn start(&self) -> &str {
        &self.start
    }

    /// Target concept node.
    pub fn end(&self) -> &str {
        &self.end
    }

    /// Concept label under evaluation (empty when unset).
    pub fn concept(&self) -> &str {
        &self.concept
    }

    pub fn path_count(&self) -> u32 {
        self.path_count
    }

    /// Symmetric path count as supplied to
    /// [`set_path_counts`](Self::set_path_counts).
    pub fn symmetric_path_count(&self) -> u32 {
        self.symmetric_path_count
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    pub fn unique_count(&self) -> u32 {
        self.unique_count
    }

    /// Fraction of found paths that are symmetric.
    pub fn symmetry_ratio(&self) -> f32 {
        self.symmetry_ratio
    }

    /// Returns a copy of this record carrying a different concept label.
    pub fn relabelled(&self, concept: impl Into<String>) -> Self {
        Self {
            concept: concept.into(),
            ..self.clone()
        }
    }

    /// Returns `true` if at least one path was found.
    pub fn has_paths(&self) -> bool {
        self.path_count > 0
    }
}

impl fmt::Display for MetricRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "concept={} start={} end={} paths={} depth={} unique={} symmetry={:.4}",
            self.concept,
            self.start,
            self.end,
            self.path_count,
            self.depth,
            self.unique_count,
            self.symmetry_ratio
        )
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;
    use crate::selection::preferred;

    #[test]
    fn test_round_trip_keeps_counts_and_ratio() {
        let r = MetricRecord::with_concept("lovely", "happy", "positive")
            .with_path_counts(10, 3)
            .with_depth(2)
            .with_unique_count(7);

        let json = serde_json::to_string(&r).unwrap();
        assert!(json.contains("\"symmetric_path_count\":3"));

        let back: MetricRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, r);
    }

    #[test]
    fn test_incoming_ratio_is_rederived() {
        let empty: MetricRecord = serde_json::from_str(
            r#"{"start":"a","end":"b","path_count":0,"symmetric_path_count":0,"symmetry_ratio":0.9}"#,
        )
        .unwrap();
        assert_eq!(empty.symmetry_ratio(), 0.0);

        let inflated: MetricRecord = serde_json::from_str(
            r#"{"start":"a","end":"b","path_count":10,"symmetric_path_count":5,
                "depth":2,"unique_count":3,"symmetry_ratio":0.95}"#,
        )
        .unwrap();
        assert!((inflated.symmetry_ratio() - 0.5).abs() < 1e-6);

        let honest = MetricRecord::new("a", "b")
            .with_path_counts(10, 9)
            .with_depth(2)
            .with_unique_count(3);
        assert!(std::ptr::eq(preferred(&inflated, &honest), &honest));
    }
}
