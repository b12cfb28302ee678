// src/error.rs
use texloom_core::EngineError;
use texloom_traits::CompileError;
use thiserror::Error;

/// A comprehensive error type for assembling and rendering documents.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// Malformed generator input or a registry miss.
    #[error("Engine error: {0}")]
    Engine(#[from] EngineError),

    /// The external compiler failed. The document is untouched and the render
    /// may be retried.
    #[error("Compilation failed: {0}")]
    Compilation(#[from] CompileError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration is invalid: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl PipelineError {
    /// Compiler diagnostics, when the failure came from a compiler run.
    pub fn diagnostics(&self) -> Option<&str> {
        match self {
            PipelineError::Compilation(e) => e.diagnostics(),
            _ => None,
        }
    }
}
