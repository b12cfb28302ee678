//! # texloom
//!
//! Assembles LaTeX documents from structured calls and renders them to
//! source text, PDF or DVI.
//!
//! The assembly engine lives in `texloom-core` and is re-exported here. This
//! crate adds the async render path and a child-process compiler.

pub mod error;
pub mod pipeline;

pub use error::PipelineError;
#[cfg(feature = "native")]
pub use pipeline::LatexCompiler;
pub use pipeline::{Artifact, CompilerConfig, Document, Pipeline, PipelineBuilder, PipelineConfig};

pub use texloom_core::{
    BinaryFormat, ColourModel, ColourOverride, Comparison, DocumentOptions, Engine, EngineError,
    Fragment, OutputFormat, Package, Partition, RenderState, RevisionPreset, StyleFlags,
    ValidationError, Watermark, clean, compare,
};
pub use texloom_traits::{ByteStream, CompileError, Compiler, InMemoryCompiler};

