//! Path-service response decoding.
//!
//! The path service answers a sources/sinks query with a flat JSON array.
//! Each concept pair contributes one summary entry followed by one entry
//! per path found:
//!
//! ```text
//! [
//!   {"fields": {"count": 2, "startWord": "lovely", "endWord": "happy", "unique": 5}},
//!   {"fields": {"isSymmetric": true,  "pathLength": 3, "csvPath": "lovely,nice,happy"}},
//!   {"fields": {"isSymmetric": false, "pathLength": 3, "csvPath": "lovely,kind,happy"}},
//!   ...
//! ]
//! ```
//!
//! [`parse_response`] folds each summary and its paths into one
//! [`MetricRecord`](crate::metric::MetricRecord).

mod config;
mod decode;

pub use config::ResponseConfig;
pub use decode::parse_response;
