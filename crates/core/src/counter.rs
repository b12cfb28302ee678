use std::collections::BTreeMap;
use texloom_style::{RegistryError, RegistryKind, validate_control_word};
use texloom_types::Fragment;

/// Counter stepped by enumerated paragraphs.
pub const ENUM_COUNTER: &str = "enumcount";
/// Counter stepped by enumerated article headings.
pub const ENUM_HEAD_COUNTER: &str = "enumheadcount";

/// Named monotonic counters, mirrored on the engine side.
///
/// The compiler owns the real values; the engine only tracks how often each
/// counter was stepped and renders references such as `\theenumcount`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CounterSet {
    counters: BTreeMap<String, u32>,
}

impl CounterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares `name` starting at zero. Returns the `\newcounter` fragment the
    /// first time, and `None` if the counter already exists.
    pub fn declare(&mut self, name: &str) -> Result<Option<Fragment>, RegistryError> {
        validate_control_word(RegistryKind::Counter, name)?;
        if self.counters.contains_key(name) {
            return Ok(None);
        }
        self.counters.insert(name.to_string(), 0);
        Ok(Some(Fragment::from(format!("\\newcounter{{{}}}", name))))
    }

    /// Advances `name` and returns the matching `\stepcounter` fragment.
    pub fn step(&mut self, name: &str) -> Result<Fragment, RegistryError> {
        let value = self
            .counters
            .get_mut(name)
            .ok_or_else(|| RegistryError::Unknown {
                kind: RegistryKind::Counter,
                name: name.to_string(),
            })?;
        *value += 1;
        Ok(Fragment::from(format!("\\stepcounter{{{}}}", name)))
    }

    /// The compiler-side reference to the current value, e.g. `\theenumcount`.
    pub fn reference(&self, name: &str) -> Result<Fragment, RegistryError> {
        if !self.counters.contains_key(name) {
            return Err(RegistryError::Unknown {
                kind: RegistryKind::Counter,
                name: name.to_string(),
            });
        }
        Ok(Fragment::from(format!("\\the{}", name)))
    }

    /// How many times `name` has been stepped since it was declared.
    pub fn value(&self, name: &str) -> Option<u32> {
        self.counters.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.counters.contains_key(name)
    }

    pub fn clear(&mut self) {
        self.counters.clear();
    }
}
