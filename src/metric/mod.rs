//! Path-search outcome records.
//!
//! A [`MetricRecord`] summarises what the external path enumerator found
//! between a start and an end concept: how many paths, at which depth, how
//! many distinct intermediate nodes, and which fraction of the paths were
//! symmetric.
//!
//! The enumerator creates the record with its endpoints, then completes it
//! with counts. After that the record is read-only and safe to share across
//! threads.

mod record;

pub use record::MetricRecord;
