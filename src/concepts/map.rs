//! Concept/seed table.

use std::collections::HashMap;

use crate::error::{PathRankError, PathRankResult};

/// Bidirectional mapping between concepts and their seed words.
///
/// # Examples
///
/// ```
/// use u_pathrank::concepts::ConceptMap;
///
/// let map = ConceptMap::parse("positive = {good, happy}; negative = {bad}").unwrap();
///
/// assert_eq!(map.concept_for("happy"), Some("positive"));
/// assert_eq!(map.seeds(), ["good", "happy", "bad"]);
/// assert_eq!(map.seeds_for("negative"), Some(&["bad".to_string()][..]));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConceptMap {
    /// Concepts in declaration order with their seeds.
    concepts: Vec<(String, Vec<String>)>,
    /// Seed → concept. A seed declared twice maps to its last concept.
    by_seed: HashMap<String, String>,
    /// Distinct seeds in first-declaration order.
    seeds: Vec<String>,
}

impl ConceptMap {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a `concept = {seed, seed, ...}; concept = {...}` table.
    ///
    /// Braces are optional and whitespace is trimmed. Empty segments and
    /// empty seed names are skipped.
    ///
    /// # Errors
    /// Returns [`PathRankError::ConceptTable`] if a segment has no `=` or an
    /// empty concept name.
    pub fn parse(table: &str) -> PathRankResult<Self> {
        let mut map = Self::new();

        for segment in table.split(';').map(str::trim).filter(|s| !s.is_empty()) {
            let (concept, seeds) = segment.split_once('=').ok_or_else(|| {
                PathRankError::ConceptTable(format!("missing '=' in \"{segment}\""))
            })?;

            let concept = concept.trim();
            if concept.is_empty() {
                return Err(PathRankError::ConceptTable(format!(
                    "empty concept name in \"{segment}\""
                )));
            }

            let seeds = seeds
                .split(',')
                .map(|s| s.trim().trim_matches(|c: char| c == '{' || c == '}').trim())
                .filter(|s| !s.is_empty());
            map.insert(concept, seeds);
        }

        Ok(map)
    }

    /// Adds seeds to `concept`, creating it if needed.
    ///
    /// A seed already declared under another concept moves to `concept`:
    /// it is removed from the earlier concept's seed list.
    pub fn insert<I, S>(&mut self, concept: &str, seeds: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let slot = match self.concepts.iter().position(|(c, _)| c == concept) {
            Some(i) => i,
            None => {
                self.concepts.push((concept.to_string(), Vec::new()));
                self.concepts.len() - 1
            }
        };

        for seed in seeds {
            let seed: String = seed.into();
            match self.by_seed.insert(seed.clone(), concept.to_string()) {
                None => self.seeds.push(seed.clone()),
                Some(previous) if previous != concept => {
                    if let Some((_, list)) = self.concepts.iter_mut().find(|(c, _)| *c == previous) {
                        list.retain(|s| *s != seed);
                    }
                }
                Some(_) => {}
            }
            if !self.concepts[slot].1.contains(&seed) {
                self.concepts[slot].1.push(seed);
            }
        }
    }

    /// Returns the concept a seed belongs to.
    pub fn concept_for(&self, seed: &str) -> Option<&str> {
        self.by_seed.get(seed).map(String::as_str)
    }

    /// Returns the seeds declared for `concept`.
    pub fn seeds_for(&self, concept: &str) -> Option<&[String]> {
        self.concepts
            .iter()
            .find(|(c, _)| c == concept)
            .map(|(_, seeds)| seeds.as_slice())
    }

    /// All distinct seeds in declaration order; the target list for a path
    /// search.
    pub fn seeds(&self) -> &[String] {
        &self.seeds
    }

    /// Concept names in declaration order.
    pub fn concepts(&self) -> impl Iterator<Item = &str> {
        self.concepts.iter().map(|(c, _)| c.as_str())
    }

    pub fn len(&self) -> usize {
        self.concepts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.concepts.is_empty()
    }
}
