use crate::registry::RegistryKind;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Unknown {kind} '{name}'")]
    Unknown { kind: RegistryKind, name: String },

    #[error("Invalid {kind} name '{name}': {reason}")]
    InvalidName {
        kind: RegistryKind,
        name: String,
        reason: &'static str,
    },

    #[error("Invalid value for {kind} '{name}': {reason}")]
    InvalidValue {
        kind: RegistryKind,
        name: String,
        reason: String,
    },

    #[error("Macro '{name}' declares {arity} parameters; TeX allows at most 9")]
    TooManyParameters { name: String, arity: u8 },

    #[error("Macro '{name}' takes {expected} argument(s), got {actual}")]
    Arity {
        name: String,
        expected: u8,
        actual: usize,
    },
}

impl RegistryError {
    /// True for misses, as opposed to malformed registrations or calls.
    pub fn is_lookup(&self) -> bool {
        matches!(self, RegistryError::Unknown { .. })
    }
}
