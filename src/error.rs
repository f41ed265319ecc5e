//! Error types for accessor lookups.

use thiserror::Error;

/// Error when an accessor type tag is not in the component table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown accessor type: {tag:?}")]
pub struct UnknownAccessorType {
    /// The tag that was looked up.
    pub tag: String,
}

impl UnknownAccessorType {
    /// Create a new error for the given tag.
    pub fn new(tag: impl Into<String>) -> Self {
        Self { tag: tag.into() }
    }
}
