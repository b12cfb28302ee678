//! # texloom-core
//!
//! Platform-agnostic LaTeX document assembly.
//!
//! This crate provides everything up to, but not including, compilation:
//! - **escape**: the text cleaner and conditional put helpers
//! - **buffer**: the three-partition document buffer
//! - **counter**: named counters used by enumerated constructs
//! - **templates**: fragment generators for tables, lists, headings and more
//! - **revision**: change-tracking span styling on top of the registries
//! - **engine**: the per-document [`Engine`] tying it all together
//!
//! ## Design Principle
//!
//! This crate has **no platform dependencies**: no filesystem access, no
//! child processes and no async runtime. Compilation is provided by
//! implementors of `texloom_traits::Compiler` in the outer crate.

// Re-export foundation crates
pub use texloom_style as style;
pub use texloom_types as types;

pub mod buffer;
pub mod counter;
pub mod engine;
pub mod error;
pub mod escape;
pub mod options;
mod preamble;
pub mod revision;
pub mod templates;

pub use buffer::{DocumentBuffer, Partition};
pub use counter::CounterSet;
pub use engine::{Engine, RenderState};
pub use error::{EngineError, ValidationError};
pub use escape::{clean, clean_opt, cput_if, cput_if_else, put_if, put_if_else};
pub use options::{ColourOverride, DocumentOptions, Package, Watermark};
pub use revision::{Comparison, RevisionPreset, RevisionStyler, compare};

pub use texloom_style::{RegistryError, RegistryKind, StyleFlags};
pub use texloom_types::{BinaryFormat, ColourModel, ColumnSpec, Fragment, OutputFormat};
