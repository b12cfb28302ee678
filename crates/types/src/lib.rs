//! # texloom-types
//!
//! Foundation value types shared by every texloom crate:
//!
//! - [`Fragment`]: one immutable unit of assembled LaTeX source
//! - [`ColumnSpec`]: a `tabularx` column type used by the table generator
//! - [`Colour`] / [`ColourModel`]: colour values as understood by `xcolor`
//! - [`OutputFormat`] / [`BinaryFormat`]: render targets and their content types

pub mod colour;
pub mod format;
pub mod fragment;

pub use colour::{Colour, ColourModel, ColourParseError};
pub use format::{BinaryFormat, OutputFormat, UnknownFormat};
pub use fragment::{ColumnSpec, Fragment};
