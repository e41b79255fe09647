//! Response decoding configuration.

/// Filter applied to decoded records.
///
/// The defaults keep only pairs with at least one path of non-zero length.
/// Pairs reported with paths of length zero are artefacts of the service
/// (e.g. a word linked to itself) and are dropped.
///
/// # Examples
///
/// ```
/// use u_pathrank::response::ResponseConfig;
///
/// let config = ResponseConfig::default();
/// assert_eq!(config.min_path_count, 1);
/// assert_eq!(config.min_depth, 1);
///
/// // Keep every pair, including those with no paths.
/// let all = ResponseConfig::keep_all();
/// assert_eq!(all.min_path_count, 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResponseConfig {
    /// Pairs with fewer paths are dropped.
    pub min_path_count: u32,

    /// Pairs whose reported path length is below this are dropped.
    pub min_depth: u32,
}

impl Default for ResponseConfig {
    fn default() -> Self {
        Self {
            min_path_count: 1,
            min_depth: 1,
        }
    }
}

impl ResponseConfig {
    /// A filter that keeps every decoded pair.
    pub fn keep_all() -> Self {
        Self {
            min_path_count: 0,
            min_depth: 0,
        }
    }

    /// Sets the minimum path count.
    pub fn with_min_path_count(mut self, n: u32) -> Self {
        self.min_path_count = n;
        self
    }

    /// Sets the minimum path length.
    pub fn with_min_depth(mut self, depth: u32) -> Self {
        self.min_depth = depth;
        self
    }

    pub(crate) fn accepts(&self, path_count: u32, depth: u32) -> bool {
        path_count >= self.min_path_count && depth >= self.min_depth
    }
}
