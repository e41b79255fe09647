//! Token → concept labelling.

use std::collections::{HashMap, HashSet};

use super::map::ConceptMap;
use crate::error::PathRankResult;
use crate::metric::MetricRecord;
use crate::selection::MetricSelector;

/// Result of labelling a token.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConceptMatch {
    /// The token that was labelled.
    pub token: String,
    /// Concept the token was mapped to.
    pub concept: String,
    /// Seed word of that concept reached by the best path search.
    pub seed: String,
    /// Path length to the seed.
    pub depth: u32,
}

/// A token paired with the concept it resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TokenLabel {
    /// The token as given, before any word-map rewrite.
    pub token: String,
    pub concept: String,
}

/// Labels tokens with concepts from their path-search outcomes.
///
/// Besides one-shot [`label`](Self::label), the labeler remembers what it
/// learned: tokens resolved to a concept are cached, and tokens whose search
/// found nothing are ignored afterwards. Neither triggers another lookup.
/// An optional word map rewrites tokens (e.g. `hau'ted` → `haunted`) before
/// the cache is consulted.
///
/// # Examples
///
/// ```
/// use u_pathrank::concepts::{ConceptLabeler, ConceptMap};
/// use u_pathrank::metric::MetricRecord;
///
/// let map = ConceptMap::parse("positive = {happy}; negative = {sad}").unwrap();
/// let labeler = ConceptLabeler::new(map);
///
/// let outcomes = vec![
///     MetricRecord::new("gloomy", "happy").with_path_counts(2, 0).with_depth(4),
///     MetricRecord::new("gloomy", "sad").with_path_counts(1, 0).with_depth(2),
/// ];
///
/// let m = labeler.label("gloomy", &outcomes).unwrap();
/// assert_eq!(m.concept, "negative");
/// assert_eq!(m.seed, "sad");
/// assert_eq!(m.depth, 2);
/// ```
#[derive(Debug)]
pub struct ConceptLabeler {
    concepts: ConceptMap,
    selector: MetricSelector,
    /// Token rewrites applied before lookup.
    word_map: HashMap<String, String>,
    /// Remapped token → concept.
    known: HashMap<String, String>,
    /// Remapped tokens known to have no concept.
    no_concept: HashSet<String>,
}

impl ConceptLabeler {
    /// Creates a labeler using the standard selection cascade.
    pub fn new(concepts: ConceptMap) -> Self {
        Self::with_selector(concepts, MetricSelector::standard())
    }

    /// Creates a labeler with a custom selector.
    pub fn with_selector(concepts: ConceptMap, selector: MetricSelector) -> Self {
        Self {
            concepts,
            selector,
            word_map: HashMap::new(),
            known: HashMap::new(),
            no_concept: HashSet::new(),
        }
    }

    /// Adds token rewrites applied before every cache check and lookup.
    pub fn with_word_map<I, K, V>(mut self, rewrites: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.word_map
            .extend(rewrites.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// The concept table.
    pub fn concepts(&self) -> &ConceptMap {
        &self.concepts
    }

    /// The seeds to search paths to, in declaration order.
    pub fn targets(&self) -> &[String] {
        self.concepts.seeds()
    }

    /// Picks the best outcome among `records` and maps its end seed to a
    /// concept.
    ///
    /// Returns `None` when there is nothing to choose from, when the best
    /// outcome found no path, or when its seed is not in the table.
    pub fn label(&self, token: &str, records: &[MetricRecord]) -> Option<ConceptMatch> {
        let best = match self.selector.select_best(records) {
            Ok(best) if best.has_paths() => best,
            _ => {
                tracing::debug!(token, "no concept found");
                return None;
            }
        };

        let Some(concept) = self.concepts.concept_for(best.end()) else {
            tracing::warn!(token, seed = best.end(), "best seed is not in the concept table");
            return None;
        };

        tracing::debug!(
            token,
            seed = best.end(),
            concept,
            depth = best.depth(),
            "token mapped to concept"
        );

        Some(ConceptMatch {
            token: token.to_string(),
            concept: concept.to_string(),
            seed: best.end().to_string(),
            depth: best.depth(),
        })
    }

    /// Applies the word map to `token`.
    pub fn remap<'a>(&'a self, token: &'a str) -> &'a str {
        self.word_map.get(token).map_or(token, String::as_str)
    }

    /// Records that `token` maps to `concept`, e.g. from a saved cache.
    pub fn remember(&mut self, token: &str, concept: &str) {
        let word = self.remap(token).to_string();
        self.no_concept.remove(&word);
        self.known.insert(word, concept.to_string());
    }

    /// Records that `token` has no concept.
    pub fn ignore(&mut self, token: &str) {
        let word = self.remap(token).to_string();
        self.known.remove(&word);
        self.no_concept.insert(word);
    }

    /// Returns the cached concept of `token`, if it has been resolved.
    pub fn cached_concept(&self, token: &str) -> Option<&str> {
        self.known.get(self.remap(token)).map(String::as_str)
    }

    /// Whether `token` is known to have no concept.
    pub fn is_ignored(&self, token: &str) -> bool {
        self.no_concept.contains(self.remap(token))
    }

    /// Learned `(token, concept)` pairs, in no particular order.
    pub fn learned(&self) -> impl Iterator<Item = (&str, &str)> {
        self.known.iter().map(|(t, c)| (t.as_str(), c.as_str()))
    }

    /// Resolves one token to a concept, consulting the cache first.
    ///
    /// On a cache miss `lookup` is called with the remapped token and the
    /// target seeds, and the outcome is remembered either way.
    ///
    /// # Errors
    /// Propagates the error returned by `lookup`. Nothing is cached for the
    /// failed token.
    pub fn resolve<F>(&mut self, token: &str, mut lookup: F) -> PathRankResult<Option<String>>
    where
        F: FnMut(&str, &[String]) -> PathRankResult<Vec<MetricRecord>>,
    {
        let word = self.remap(token).to_string();
        if let Some(concept) = self.known.get(&word) {
            tracing::trace!(token, concept = concept.as_str(), "concept cache hit");
            return Ok(Some(concept.clone()));
        }
        if self.no_concept.contains(&word) {
            tracing::trace!(token, "token has no concept");
            return Ok(None);
        }

        let records = lookup(word.as_str(), self.concepts.seeds())?;
        match self.label(&word, &records) {
            Some(m) => {
                self.known.insert(word, m.concept.clone());
                Ok(Some(m.concept))
            }
            None => {
                self.no_concept.insert(word);
                Ok(None)
            }
        }
    }

    /// Resolves every token, returning labels for those with a concept.
    ///
    /// Output keeps input order and the original (un-remapped) tokens.
    /// Tokens without a concept are skipped.
    ///
    /// # Errors
    /// Stops at the first `lookup` error and returns it. Concepts learned
    /// before the failure stay cached.
    pub fn label_all<I, S, F>(&mut self, tokens: I, mut lookup: F) -> PathRankResult<Vec<TokenLabel>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        F: FnMut(&str, &[String]) -> PathRankResult<Vec<MetricRecord>>,
    {
        let mut labels = Vec::new();
        let mut seen = 0usize;
        for token in tokens {
            let token = token.as_ref();
            seen += 1;
            if let Some(concept) = self.resolve(token, &mut lookup)? {
                labels.push(TokenLabel {
                    token: token.to_string(),
                    concept,
                });
            }
        }

        tracing::debug!(
            tokens = seen,
            labelled = labels.len(),
            known = self.known.len(),
            ignored = self.no_concept.len(),
            "labelled tokens"
        );
        Ok(labels)
    }

    /// Returns the best record relabelled with its concept.
    ///
    /// Same selection as [`label`](Self::label), but keeps the full metric.
    pub fn annotate(&self, records: &[MetricRecord]) -> Option<MetricRecord> {
        let best = self.selector.select_best(records).ok()?;
        if !best.has_paths() {
            return None;
        }
        let concept = self.concepts.concept_for(best.end())?;
        Some(best.relabelled(concept))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labeler() -> ConceptLabeler {
        ConceptLabeler::new(
            ConceptMap::parse("positive = {happy, glad}; negative = {sad}").unwrap(),
        )
    }

    fn outcome(end: &str, paths: u32, depth: u32) -> MetricRecord {
        MetricRecord::new("token", end)
            .with_path_counts(paths, 0)
            .with_depth(depth)
    }

    #[test]
    fn test_label_picks_shallowest_seed() {
        let records = vec![outcome("happy", 4, 3), outcome("sad", 1, 2), outcome("glad", 9, 3)];
        let m = labeler().label("token", &records).unwrap();

        assert_eq!(m.token, "token");
        assert_eq!(m.concept, "negative");
        assert_eq!(m.seed, "sad");
        assert_eq!(m.depth, 2);
    }

    #[test]
    fn test_label_no_records() {
        assert!(labeler().label("token", &[]).is_none());
    }

    #[test]
    fn test_label_no_paths() {
        let records = vec![outcome("happy", 0, 0), outcome("sad", 0, 0)];
        assert!(labeler().label("token", &records).is_none());
    }

    #[test]
    fn test_label_unknown_seed() {
        let records = vec![outcome("furious", 3, 1)];
        assert!(labeler().label("token", &records).is_none());
    }

    #[test]
    fn test_targets_follow_table() {
        assert_eq!(labeler().targets(), ["happy", "glad", "sad"]);
    }

    #[test]
    fn test_annotate_sets_concept() {
        let records = vec![
            MetricRecord::new("token", "glad")
                .with_path_counts(5, 2)
                .with_depth(2)
                .with_unique_count(4),
            outcome("sad", 1, 3),
        ];

        let annotated = labeler().annotate(&records).unwrap();
        assert_eq!(annotated.concept(), "positive");
        assert_eq!(annotated.end(), "glad");
        assert_eq!(annotated.path_count(), 5);
        assert_eq!(annotated.unique_count(), 4);
        assert!((annotated.symmetry_ratio() - 0.4).abs() < 1e-6);
    }

    // ---- Cached labelling ----

    /// Outcomes for a few known words; anything else finds no path.
    fn search(word: &str, targets: &[String]) -> PathRankResult<Vec<MetricRecord>> {
        let (end, depth) = match word {
            "gloomy" => ("sad", 2),
            "cheery" => ("glad", 1),
            "haunted" => ("sad", 3),
            _ => return Ok(targets.iter().map(|t| MetricRecord::new(word, t)).collect()),
        };
        Ok(vec![MetricRecord::new(word, end)
            .with_path_counts(1, 0)
            .with_depth(depth)])
    }

    fn label(token: &str, concept: &str) -> TokenLabel {
        TokenLabel {
            token: token.to_string(),
            concept: concept.to_string(),
        }
    }

    #[test]
    fn test_label_all_looks_up_each_word_once() {
        let mut labeler = labeler();
        let mut calls = Vec::new();

        let labels = labeler
            .label_all(["gloomy", "table", "gloomy", "table", "cheery"], |w, t| {
                calls.push(w.to_string());
                search(w, t)
            })
            .unwrap();

        assert_eq!(calls, ["gloomy", "table", "cheery"]);
        assert_eq!(
            labels,
            vec![
                label("gloomy", "negative"),
                label("gloomy", "negative"),
                label("cheery", "positive"),
            ]
        );
        assert_eq!(labeler.cached_concept("gloomy"), Some("negative"));
        assert!(labeler.is_ignored("table"));
    }

    #[test]
    fn test_cached_and_ignored_tokens_skip_lookup() {
        let mut labeler = labeler();
        labeler.remember("bright", "positive");
        labeler.ignore("chair");

        let labels = labeler
            .label_all(["bright", "chair"], |w, _| -> PathRankResult<Vec<MetricRecord>> {
                panic!("unexpected lookup for {w}")
            })
            .unwrap();

        assert_eq!(labels, vec![label("bright", "positive")]);
    }

    #[test]
    fn test_word_map_rewrites_before_lookup() {
        let mut labeler = labeler().with_word_map([("hau'ted", "haunted")]);
        let mut calls = Vec::new();

        let labels = labeler
            .label_all(["hau'ted", "haunted"], |w, t| {
                calls.push(w.to_string());
                search(w, t)
            })
            .unwrap();

        assert_eq!(calls, ["haunted"]);
        assert_eq!(
            labels,
            vec![label("hau'ted", "negative"), label("haunted", "negative")]
        );
        assert_eq!(labeler.cached_concept("hau'ted"), Some("negative"));
    }

    #[test]
    fn test_lookup_error_keeps_earlier_results() {
        let mut labeler = labeler();

        let err = labeler
            .label_all(["gloomy", "broken", "cheery"], |w, t| {
                if w == "broken" {
                    Err(crate::PathRankError::MalformedResponse("service down".into()))
                } else {
                    search(w, t)
                }
            })
            .unwrap_err();

        assert!(matches!(err, crate::PathRankError::MalformedResponse(_)));
        assert_eq!(labeler.cached_concept("gloomy"), Some("negative"));
        assert_eq!(labeler.cached_concept("broken"), None);
        assert!(!labeler.is_ignored("broken"));
        assert_eq!(labeler.cached_concept("cheery"), None);
    }

    #[test]
    fn test_remember_overrides_ignore() {
        let mut labeler = labeler();
        labeler.ignore("moody");
        labeler.remember("moody", "negative");

        assert!(!labeler.is_ignored("moody"));
        assert_eq!(
            labeler.learned().collect::<Vec<_>>(),
            vec![("moody", "negative")]
        );
    }

    #[test]
    fn test_custom_selector_is_used() {
        // An empty selector keeps the first record whatever its metrics.
        let labeler = ConceptLabeler::with_selector(
            ConceptMap::parse("positive = {happy}; negative = {sad}").unwrap(),
            MetricSelector::new(),
        );
        let records = vec![outcome("happy", 1, 5), outcome("sad", 9, 1)];
        assert_eq!(labeler.label("token", &records).unwrap().concept, "positive");
    }
}
