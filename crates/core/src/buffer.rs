//! The ordered, three-partition document buffer.

use itertools::Itertools;
use texloom_types::Fragment;

/// The logical segments of a document, in render order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Partition {
    /// Compiler directives and package declarations.
    System,
    /// Reusable command, colour, style and counter definitions.
    Macros,
    /// User-driven content.
    Body,
}

/// Fragments partitioned into `system`, `macros` and `body`.
///
/// Rendering always emits `system ++ macros ++ body`. Within a partition the
/// insertion order is the only ordering; nothing is ever sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentBuffer {
    system: Vec<Fragment>,
    macros: Vec<Fragment>,
    body: Vec<Fragment>,
}

impl DocumentBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, partition: Partition, fragment: Fragment) {
        log::trace!("{:?} <- {:?}", partition, fragment.as_str());
        self.partition_mut(partition).push(fragment);
    }

    /// Removes the most recent fragment of `partition`.
    pub fn remove_last(&mut self, partition: Partition) -> Option<Fragment> {
        self.partition_mut(partition).pop()
    }

    pub fn fragments(&self, partition: Partition) -> &[Fragment] {
        match partition {
            Partition::System => &self.system,
            Partition::Macros => &self.macros,
            Partition::Body => &self.body,
        }
    }

    pub fn len(&self, partition: Partition) -> usize {
        self.fragments(partition).len()
    }

    pub fn total_len(&self) -> usize {
        self.system.len() + self.macros.len() + self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total_len() == 0
    }

    /// All fragments in render order.
    pub fn iter(&self) -> impl Iterator<Item = &Fragment> {
        self.system.iter().chain(&self.macros).chain(&self.body)
    }

    /// Joins every fragment, in render order, with newlines.
    pub fn render(&self) -> String {
        self.iter().map(Fragment::as_str).join("\n")
    }

    pub fn clear(&mut self) {
        self.system.clear();
        self.macros.clear();
        self.body.clear();
    }

    fn partition_mut(&mut self, partition: Partition) -> &mut Vec<Fragment> {
        match partition {
            Partition::System => &mut self.system,
            Partition::Macros => &mut self.macros,
            Partition::Body => &mut self.body,
        }
    }
}
