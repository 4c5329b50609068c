//! Error types.
//!
//! Neither enum ever reaches the visitor: layout misses mean "not in view"
//! and config problems fall back to defaults. They exist so callers can log
//! what went wrong.

use thiserror::Error;

use crate::tracker::SectionId;

/// Failure to read a section's boundaries from the rendered page.
#[derive(Debug, Error, PartialEq)]
pub enum LayoutError {
    /// No window or no document (detached page, non-browser host).
    #[error("no document attached to the window")]
    NoDocument,

    /// The section's anchor element is not in the DOM.
    #[error("section `#{0}` is not rendered")]
    MissingSection(SectionId),
}

/// Invalid embedded configuration block.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config block is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid log level directive: {0}")]
    LogFilter(#[from] tracing_subscriber::filter::ParseError),

    #[error("probe line must be a finite, non-negative pixel offset (got {0})")]
    ProbeLine(f64),
}
