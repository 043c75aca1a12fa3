//! Domain models for the petcare system.

mod notification;
mod pet;
mod records;

pub use notification::*;
pub use pet::*;
pub use records::*;

use thiserror::Error;

/// Record validation errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RecordError {
    #[error("Invalid record {id}: {reason}")]
    InvalidRecord { id: String, reason: String },
}

pub type RecordResult<T> = Result<T, RecordError>;

fn invalid(id: &str, reason: impl Into<String>) -> RecordError {
    RecordError::InvalidRecord {
        id: id.to_string(),
        reason: reason.into(),
    }
}
