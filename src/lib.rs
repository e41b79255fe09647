//! Path-metric records and deterministic multi-criteria selection.
//!
//! Summarises the outcome of a path search between two concept nodes of a
//! semantic graph and ranks competing outcomes:
//!
//! - **Metric records** ([`metric`]): path count, depth, distinct
//!   intermediate nodes and the derived symmetry ratio for one
//!   (start, end) pair.
//! - **Selection** ([`selection`]): a fixed lexicographic rule cascade that
//!   picks the better of two records, a left fold over many, and per-pair
//!   reduction of mixed batches.
//! - **Response decoding** ([`response`], feature `json`): turns the path
//!   service's summary/path JSON into records.
//! - **Concept labelling** ([`concepts`]): concept/seed tables and mapping a
//!   token's best path outcome back to a concept, caching what each token
//!   resolved to.
//!
//! # Architecture
//!
//! The crate neither enumerates paths nor touches graph storage. The path
//! enumerator is an external collaborator that supplies the raw counts;
//! everything here is pure and free of shared mutable state, so selection
//! can run concurrently across independent concept pairs.

pub mod concepts;
mod error;
pub mod metric;
#[cfg(feature = "json")]
pub mod response;
pub mod selection;

pub use error::{PathRankError, PathRankResult};
