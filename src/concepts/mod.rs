//! Concept/seed tables and token labelling.
//!
//! A sentiment pipeline describes each concept by a handful of seed words:
//!
//! ```text
//! positive = {good, happy, joyful}; negative = {bad, sad, hateful}
//! ```
//!
//! A token is labelled by searching paths from the token to every seed,
//! picking the best outcome with a [`MetricSelector`](crate::selection::MetricSelector),
//! and mapping the winning seed back to its concept.

mod labeler;
mod map;

pub use labeler::{ConceptLabeler, ConceptMatch, TokenLabel};
pub use map::ConceptMap;
