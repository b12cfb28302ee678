use crate::{colours, styles};
use serde::{Deserialize, Serialize};

/// Options recognised by the revision styler.
///
/// Colour flags each prepend their colour switch (in the order `new`, `old`,
/// `eq`, `neq`); `cl` cleans the text; the decoration flags wrap it in the
/// order `st`, `bf`, `it`, `ul`, nesting outward.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleFlags {
    pub new: bool,
    pub old: bool,
    pub eq: bool,
    pub neq: bool,
    pub cl: bool,
    pub st: bool,
    pub bf: bool,
    pub it: bool,
    pub ul: bool,
}

impl StyleFlags {
    /// Colour names selected by these flags, in application order.
    pub fn colours(&self) -> impl Iterator<Item = &'static str> {
        [
            (self.new, colours::NEW),
            (self.old, colours::OLD),
            (self.eq, colours::EQ),
            (self.neq, colours::NEQ),
        ]
        .into_iter()
        .filter_map(|(set, name)| set.then_some(name))
    }

    /// Style names selected by these flags, innermost first.
    pub fn decorations(&self) -> impl Iterator<Item = &'static str> {
        [
            (self.st, styles::STRIKEOUT),
            (self.bf, styles::BOLD),
            (self.it, styles::ITALIC),
            (self.ul, styles::UNDERLINE),
        ]
        .into_iter()
        .filter_map(|(set, name)| set.then_some(name))
    }
}
