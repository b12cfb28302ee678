use crate::error::RegistryError;
use std::collections::BTreeMap;
use std::fmt;
use texloom_types::Fragment;

/// Which registry an entry or error belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegistryKind {
    Colour,
    Style,
    Macro,
    Counter,
}

impl fmt::Display for RegistryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RegistryKind::Colour => "colour",
            RegistryKind::Style => "style",
            RegistryKind::Macro => "macro",
            RegistryKind::Counter => "counter",
        })
    }
}

/// An entry that can live in a [`Registry`].
pub trait RegistryEntry {
    const KIND: RegistryKind;

    fn name(&self) -> &str;

    /// The source text that declares this entry to the compiler.
    fn definition(&self) -> Fragment;
}

/// A named-entry store. Re-adding a name replaces the previous entry.
#[derive(Debug, Clone)]
pub struct Registry<E> {
    entries: BTreeMap<String, E>,
}

impl<E> Default for Registry<E> {
    fn default() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }
}

impl<E: RegistryEntry> Registry<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `entry` and returns its definition fragment.
    pub fn add(&mut self, entry: E) -> Fragment {
        let definition = entry.definition();
        let name = entry.name().to_string();
        if self.entries.insert(name.clone(), entry).is_some() {
            log::debug!("Replacing {} '{}'", E::KIND, name);
        } else {
            log::trace!("Registered {} '{}'", E::KIND, name);
        }
        definition
    }

    pub fn get(&self, name: &str) -> Result<&E, RegistryError> {
        self.entries.get(name).ok_or_else(|| RegistryError::Unknown {
            kind: E::KIND,
            name: name.to_string(),
        })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Registered names in lexical order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

/// Control-sequence names must be letters only, or TeX splits them.
pub fn validate_control_word(kind: RegistryKind, name: &str) -> Result<(), RegistryError> {
    if name.is_empty() {
        return Err(RegistryError::InvalidName {
            kind,
            name: name.to_string(),
            reason: "name is empty",
        });
    }
    if !name.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(RegistryError::InvalidName {
            kind,
            name: name.to_string(),
            reason: "only ASCII letters are allowed",
        });
    }
    Ok(())
}
