//! Summary/path entry decoding.

use serde::Deserialize;

use super::config::ResponseConfig;
use crate::error::{PathRankError, PathRankResult};
use crate::metric::MetricRecord;

#[derive(Debug, Deserialize)]
struct Entry {
    fields: Fields,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Fields {
    Summary(Summary),
    Path(PathFields),
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Summary {
    count: u32,
    start_word: String,
    end_word: String,
    unique: u32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PathFields {
    is_symmetric: bool,
    path_length: u32,
}

/// Decodes a path-service response into one record per concept pair.
///
/// For each pair, the symmetric count is the number of its paths flagged
/// `isSymmetric`, and the depth is the reported `pathLength` (the service
/// reports the same length for every path of a pair; the last one is used).
/// Pairs rejected by `config` are skipped. Record order follows the
/// response.
///
/// # Errors
/// - [`PathRankError::Json`] if `body` is not an array of `{"fields": ...}`
///   entries of either shape.
/// - [`PathRankError::MalformedResponse`] if a path entry appears where a
///   pair summary is expected, or a summary announces more paths than
///   follow it.
///
/// # Examples
///
/// ```
/// use u_pathrank::response::{parse_response, ResponseConfig};
///
/// let body = r#"[
///     {"fields": {"count": 1, "startWord": "deep", "endWord": "sad", "unique": 2}},
///     {"fields": {"isSymmetric": true, "pathLength": 2, "csvPath": "deep,low,sad"}}
/// ]"#;
///
/// let records = parse_response(body, &ResponseConfig::default()).unwrap();
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].end(), "sad");
/// assert_eq!(records[0].depth(), 2);
/// ```
pub fn parse_response(body: &str, config: &ResponseConfig) -> PathRankResult<Vec<MetricRecord>> {
    let entries: Vec<Entry> = serde_json::from_str(body)?;

    let mut records = Vec::new();
    let mut dropped = 0usize;
    let mut iter = entries.into_iter().enumerate();

    while let Some((pos, entry)) = iter.next() {
        let summary = match entry.fields {
            Fields::Summary(s) => s,
            Fields::Path(_) => {
                return Err(PathRankError::MalformedResponse(format!(
                    "entry {pos}: expected a pair summary, found a path"
                )));
            }
        };

        let mut symmetric = 0u32;
        let mut depth = 0u32;
        for found in 0..summary.count {
            match iter.next() {
                Some((_, Entry { fields: Fields::Path(p) })) => {
                    if p.is_symmetric {
                        symmetric += 1;
                    }
                    depth = p.path_length;
                }
                Some((at, Entry { fields: Fields::Summary(_) })) => {
                    return Err(PathRankError::MalformedResponse(format!(
                        "entry {at}: expected path {} of {} for {} -> {}, found a pair summary",
                        found + 1,
                        summary.count,
                        summary.start_word,
                        summary.end_word
                    )));
                }
                None => {
                    return Err(PathRankError::MalformedResponse(format!(
                        "response ends after {found} of {} paths for {} -> {}",
                        summary.count, summary.start_word, summary.end_word
                    )));
                }
            }
        }

        let record = MetricRecord::new(summary.start_word, summary.end_word)
            .with_path_counts(summary.count, symmetric)
            .with_depth(depth)
            .with_unique_count(summary.unique);

        if config.accepts(record.path_count(), record.depth()) {
            records.push(record);
        } else {
            tracing::trace!(%record, "dropping path metric");
            dropped += 1;
        }
    }

    tracing::debug!(kept = records.len(), dropped, "decoded path response");
    Ok(records)
}
