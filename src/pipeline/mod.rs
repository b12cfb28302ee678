//! Document pipelines and the async render path.
//!
//! - [`PipelineBuilder`]: fluent builder, optionally fed from a JSON config file
//! - [`Pipeline`]: hands out [`Document`] sessions sharing one compiler
//! - [`Document`]: an [`Engine`](texloom_core::Engine) plus the render operations
//! - [`LatexCompiler`]: runs the configured TeX engine as a child process
//!
//! # Example
//!
//! ```ignore
//! use texloom::{OutputFormat, PipelineBuilder};
//!
//! let pipeline = PipelineBuilder::new().with_export(true).build()?;
//! let mut doc = pipeline.new_document()?;
//! doc.begin();
//! doc.section("Terms");
//! doc.end();
//!
//! let pdf = doc.render(OutputFormat::Pdf).await?;
//! ```

mod artifact;
mod builder;
#[cfg(feature = "native")]
mod compiler;
pub mod config;
mod renderer;

pub use artifact::Artifact;
pub use builder::PipelineBuilder;
#[cfg(feature = "native")]
pub use compiler::LatexCompiler;
pub use config::{CompilerConfig, PipelineConfig};
pub use renderer::{Document, Pipeline};
