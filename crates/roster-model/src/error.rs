use thiserror::Error;

use crate::RecordId;

/// Errors raised by record collection checks.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// Two records in one collection share an id.
    #[error("duplicate record id: {0}")]
    DuplicateId(RecordId),
}

pub type Result<T> = std::result::Result<T, ModelError>;
