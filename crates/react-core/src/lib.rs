//! react-core: feature-trend evaluation and ReACT selection.
//!
//! Given a table of monthly collaboration-network metrics and a target
//! month, the extractor finds the tracked features whose recent trend is
//! flat or falling and returns the reference ReACTs (recommendations)
//! tagged with any of them, most important first.
//!
//! # Pipeline
//!
//! 1. [`trend::evaluate`]: sum each tracked feature over months
//!    `n-2 ..= n` and keep the features whose sum does not exceed their
//!    all-time mean.
//! 2. [`select::select`]: keep entries whose `Features` tags intersect
//!    the triggered set, sorted by `Importance` descending.
//! 3. [`extractor::ReactExtractor`]: run per month or for every month and
//!    write the result as JSON.

pub mod config;
pub mod entry;
pub mod error;
pub mod extractor;
pub mod features;
pub mod select;
pub mod table;
pub mod trend;

pub use config::*;
pub use entry::*;
pub use error::*;
pub use extractor::*;
pub use features::*;
pub use select::*;
pub use table::*;
pub use trend::*;
