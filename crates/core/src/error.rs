//! Defines the error types for all synchronous engine operations.

use texloom_style::RegistryError;
use thiserror::Error;

/// Malformed input to a generator or registry. The offending call leaves the
/// buffer untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Table row {row} has {actual} cell(s) but {expected} column(s) were declared")]
    RowWidth {
        row: usize,
        expected: usize,
        actual: usize,
    },
    #[error("A table needs at least one column")]
    NoColumns,
    #[error("List has {len} items but labels only run from a to z ({max})")]
    TooManyItems { len: usize, max: usize },
    #[error("Revision index {index} is out of range for a history of {len}")]
    RevisionIndex { index: usize, len: usize },
    #[error("Watermark text '{text}' contains the TeX special character '{found}'")]
    WatermarkText { text: String, found: char },
    #[error(transparent)]
    Registry(RegistryError),
}

/// The main error enum for engine operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
    #[error("Lookup error: {0}")]
    Lookup(RegistryError),
}

impl EngineError {
    pub fn is_validation(&self) -> bool {
        matches!(self, EngineError::Validation(_))
    }

    pub fn is_lookup(&self) -> bool {
        matches!(self, EngineError::Lookup(_))
    }
}

impl From<RegistryError> for EngineError {
    fn from(e: RegistryError) -> Self {
        if e.is_lookup() {
            EngineError::Lookup(e)
        } else {
            EngineError::Validation(ValidationError::Registry(e))
        }
    }
}
