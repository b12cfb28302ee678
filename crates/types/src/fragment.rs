//! Newtype wrappers for assembled source text.
//!
//! A [`Fragment`] is opaque to the engine apart from its position in the
//! document buffer, so it is a cheap-to-clone immutable string.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// One immutable unit of compiler source text.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fragment(Arc<str>);

impl Fragment {
    /// Creates a new fragment from anything string-like.
    pub fn new(text: impl Into<Arc<str>>) -> Self {
        Self(text.into())
    }

    /// The empty fragment. Conditional pushes insert this instead of skipping.
    pub fn empty() -> Self {
        Self(Arc::from(""))
    }

    /// Coerces any displayable value into a fragment.
    pub fn display(value: impl fmt::Display) -> Self {
        Self(value.to_string().into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl Default for Fragment {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<String> for Fragment {
    fn from(s: String) -> Self {
        Self(s.into())
    }
}

impl From<&str> for Fragment {
    fn from(s: &str) -> Self {
        Self(s.into())
    }
}

impl From<&String> for Fragment {
    fn from(s: &String) -> Self {
        Self(s.as_str().into())
    }
}

impl From<Arc<str>> for Fragment {
    fn from(s: Arc<str>) -> Self {
        Self(s)
    }
}

impl AsRef<str> for Fragment {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Fragment {
    fn eq(&self, other: &str) -> bool {
        &*self.0 == other
    }
}

impl PartialEq<&str> for Fragment {
    fn eq(&self, other: &&str) -> bool {
        &*self.0 == *other
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A `tabularx` column type, e.g. `Y`, `Z`, `g`, `l` or `p{3cm}`.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnSpec(Arc<str>);

impl ColumnSpec {
    pub fn new(spec: impl Into<Arc<str>>) -> Self {
        Self(spec.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ColumnSpec {
    fn from(s: &str) -> Self {
        Self(s.into())
    }
}

impl From<String> for ColumnSpec {
    fn from(s: String) -> Self {
        Self(s.into())
    }
}

impl AsRef<str> for ColumnSpec {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ColumnSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
