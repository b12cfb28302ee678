//! Named-entry registries for colours, text styles and macros.
//!
//! Every registry works the same way: adding an entry yields the definition
//! fragment that makes the name usable in compiled source, and looking up a
//! missing name is an error rather than an empty string.

pub mod entries;
pub mod error;
pub mod flags;
pub mod registry;

pub use entries::{ColourEntry, MacroEntry, StyleEntry};
pub use error::RegistryError;
pub use flags::StyleFlags;
pub use registry::{Registry, RegistryEntry, RegistryKind, validate_control_word};

pub type ColourRegistry = Registry<ColourEntry>;
pub type StyleRegistry = Registry<StyleEntry>;
pub type MacroRegistry = Registry<MacroEntry>;

/// Names of the built-in colours installed at engine initialisation.
pub mod colours {
    /// Body text; appended after every revision span to reset the colour.
    pub const TEXT: &str = "text";
    pub const NEW: &str = "new";
    pub const OLD: &str = "old";
    pub const EQ: &str = "eq";
    pub const NEQ: &str = "neq";
}

/// Names of the built-in text styles installed at engine initialisation.
pub mod styles {
    pub const BOLD: &str = "bf";
    pub const ITALIC: &str = "it";
    pub const UNDERLINE: &str = "ul";
    pub const STRIKEOUT: &str = "st";
}
