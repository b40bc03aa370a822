use thiserror::Error;

/// Errors produced by collection operations.
///
/// Only [`collect_entries`](crate::collect_entries()) can fail: traversal and
/// the other derived operations either succeed or pass their input through
/// untouched.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum IterError {
    /// The transform returned something that is neither `false` nor a
    /// two-element `[key, value]` pair.
    #[error("invalid transform result: expected [key, value] pair or false, got {0}")]
    InvalidTransformResult(String),

    /// The pair's key cannot be used as a mapping key.
    #[error("invalid entry key: expected string, number, or bool, got {0}")]
    InvalidEntryKey(String),
}
