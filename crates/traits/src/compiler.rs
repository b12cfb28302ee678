//! Compiler trait for abstracting the external typesetting toolchain.
//!
//! The engine only ever hands the compiler ordered source text and a format
//! selector; everything about the toolchain itself lives behind this trait.

use std::collections::HashMap;
use std::fmt::Debug;
use std::future::Future;
use std::io::Cursor;
use std::pin::Pin;
use std::sync::RwLock;
use std::time::Duration;
use texloom_types::BinaryFormat;
use thiserror::Error;
use tokio::io::AsyncRead;

/// A live stream of compiled output bytes.
pub type ByteStream = Pin<Box<dyn AsyncRead + Send>>;

/// Error type for compiler invocations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompileError {
    #[error("Failed to start compiler '{program}': {message}")]
    Spawn { program: String, message: String },

    #[error("Compiler exited with {status}:\n{diagnostics}")]
    Failed { status: String, diagnostics: String },

    #[error("Compiler did not finish within {0:?}")]
    Timeout(Duration),

    #[error("Compiler reported success but produced no {0} output")]
    MissingArtifact(BinaryFormat),

    #[error("I/O error: {0}")]
    Io(String),
}

impl CompileError {
    /// Whatever the compiler printed, when it ran far enough to print anything.
    pub fn diagnostics(&self) -> Option<&str> {
        match self {
            CompileError::Failed { diagnostics, .. } => Some(diagnostics),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CompileError {
    fn from(err: std::io::Error) -> Self {
        CompileError::Io(err.to_string())
    }
}

/// Turns assembled source text into a binary artifact.
///
/// # Implementations
///
/// - `LatexCompiler` (in the `texloom` crate): runs a TeX engine as a child process
/// - [`InMemoryCompiler`]: returns canned output, for tests and dry runs
pub trait Compiler: Send + Sync + Debug {
    fn compile(
        &self,
        source: String,
        format: BinaryFormat,
    ) -> impl Future<Output = Result<ByteStream, CompileError>> + Send;

    /// Returns a human-readable name for this compiler (for logging/debugging).
    fn name(&self) -> &'static str;
}

/// A compiler that answers from pre-populated responses and records every
/// source text it receives.
#[derive(Debug, Default)]
pub struct InMemoryCompiler {
    responses: RwLock<HashMap<BinaryFormat, Result<Vec<u8>, CompileError>>>,
    received: RwLock<Vec<(BinaryFormat, String)>>,
}

impl InMemoryCompiler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `format` requests with `bytes`.
    pub fn respond(self, format: BinaryFormat, bytes: impl Into<Vec<u8>>) -> Self {
        if let Ok(mut responses) = self.responses.write() {
            responses.insert(format, Ok(bytes.into()));
        }
        self
    }

    /// Fail `format` requests with the given diagnostics.
    pub fn fail(self, format: BinaryFormat, diagnostics: impl Into<String>) -> Self {
        if let Ok(mut responses) = self.responses.write() {
            responses.insert(
                format,
                Err(CompileError::Failed {
                    status: "exit status: 1".to_string(),
                    diagnostics: diagnostics.into(),
                }),
            );
        }
        self
    }

    /// Every `(format, source)` pair compiled so far, oldest first.
    pub fn received(&self) -> Vec<(BinaryFormat, String)> {
        self.received.read().map(|r| r.clone()).unwrap_or_default()
    }
}

impl Compiler for InMemoryCompiler {
    fn compile(
        &self,
        source: String,
        format: BinaryFormat,
    ) -> impl Future<Output = Result<ByteStream, CompileError>> + Send {
        let outcome = self
            .responses
            .read()
            .map_err(|_| CompileError::Io("response table lock poisoned".to_string()))
            .and_then(|responses| {
                responses
                    .get(&format)
                    .cloned()
                    .unwrap_or(Err(CompileError::MissingArtifact(format)))
            });

        if let Ok(mut received) = self.received.write() {
            received.push((format, source));
        }

        async move {
            let bytes = outcome?;
            log::trace!("InMemoryCompiler returning {} bytes of {}", bytes.len(), format);
            Ok(Box::pin(Cursor::new(bytes)) as ByteStream)
        }
    }

    fn name(&self) -> &'static str {
        "InMemoryCompiler"
    }
}
