//! Engine error types

use thiserror::Error;

/// Errors surfaced by the engine.
///
/// Every engine operation is total over its documented input domain except
/// catalog lookups by id; invalid quantities clamp and missing removals are
/// no-ops rather than errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("Unknown food reference: {0}")]
    InvalidReference(i64),
}

/// Result type for engine operations
pub type EngineResult<T> = Result<T, EngineError>;
