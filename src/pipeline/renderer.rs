//! Document sessions and the async render path.

use super::artifact::Artifact;
use crate::error::PipelineError;
use std::ops::{Deref, DerefMut};
use std::sync::Arc;
use texloom_core::{DocumentOptions, Engine, RenderState};
use texloom_traits::{ByteStream, Compiler};
use texloom_types::{BinaryFormat, OutputFormat};
use tokio::io::AsyncReadExt;

const READ_CHUNK_SIZE: usize = 8 * 1024;

/// A configured pipeline. Hands out independent document sessions that share
/// one compiler.
#[derive(Debug)]
pub struct Pipeline<C: Compiler> {
    options: DocumentOptions,
    compiler: Arc<C>,
}

impl<C: Compiler> Pipeline<C> {
    pub fn new(options: DocumentOptions, compiler: C) -> Self {
        Self {
            options,
            compiler: Arc::new(compiler),
        }
    }

    pub fn options(&self) -> &DocumentOptions {
        &self.options
    }

    pub fn compiler(&self) -> &C {
        &self.compiler
    }

    /// Starts a fresh document with the pipeline's options.
    pub fn new_document(&self) -> Result<Document<C>, PipelineError> {
        let engine = Engine::new(self.options.clone())?;
        Ok(Document {
            engine,
            compiler: Arc::clone(&self.compiler),
        })
    }
}

/// One document being assembled. Derefs to its [`Engine`] for pushes,
/// generators and registrations.
#[derive(Debug)]
pub struct Document<C: Compiler> {
    engine: Engine,
    compiler: Arc<C>,
}

impl<C: Compiler> Document<C> {
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut Engine {
        &mut self.engine
    }

    pub fn state(&self) -> RenderState {
        self.engine.state()
    }

    /// Compiles a snapshot of the document and returns the artifact stream.
    ///
    /// A failed compilation leaves the document as it was; call again to
    /// retry. Dropping the returned future abandons the compiler run and
    /// marks the render [`RenderState::Failed`].
    pub async fn to_binary(&mut self, format: BinaryFormat) -> Result<ByteStream, PipelineError> {
        let source = self.engine.start_render();
        log::info!(
            "Compiling {} bytes of source to {} with '{}'",
            source.len(),
            format,
            self.compiler.name()
        );

        let mut render = InFlight::new(&mut self.engine);
        match self.compiler.compile(source, format).await {
            Ok(stream) => {
                render.finish(true);
                Ok(stream)
            }
            Err(e) => {
                log::warn!("Compilation to {} failed: {}", format, e);
                render.finish(false);
                Err(e.into())
            }
        }
    }

    /// Compiles to PDF and reads the whole stream into memory.
    pub async fn to_base64_binary(&mut self) -> Result<Artifact, PipelineError> {
        self.materialize(BinaryFormat::Pdf).await
    }

    /// Renders any output format into memory. Source text never touches the
    /// compiler.
    pub async fn render(&mut self, format: OutputFormat) -> Result<Artifact, PipelineError> {
        match format.binary() {
            Some(binary) => self.materialize(binary).await,
            None => Ok(Artifact::new(
                OutputFormat::Source,
                self.engine.to_source_text().into_bytes(),
            )),
        }
    }

    async fn materialize(&mut self, format: BinaryFormat) -> Result<Artifact, PipelineError> {
        let mut stream = self.to_binary(format).await?;
        let mut bytes = Vec::new();
        let mut chunk = vec![0u8; READ_CHUNK_SIZE];
        loop {
            let n = stream.read(&mut chunk).await?;
            if n == 0 {
                break;
            }
            log::trace!("Read {} byte chunk of {} output", n, format);
            bytes.extend_from_slice(&chunk[..n]);
        }
        log::info!("Materialised {} bytes of {} output", bytes.len(), format);
        Ok(Artifact::new(format.into(), bytes))
    }
}

/// Settles the render state of an engine whose compilation is in flight.
/// Dropped unsettled, the render counts as failed.
struct InFlight<'a> {
    engine: &'a mut Engine,
    settled: bool,
}

impl<'a> InFlight<'a> {
    fn new(engine: &'a mut Engine) -> Self {
        Self {
            engine,
            settled: false,
        }
    }

    fn finish(&mut self, success: bool) {
        self.engine.complete_render(success);
        self.settled = true;
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if !self.settled {
            log::debug!("Render abandoned before the compiler finished");
            self.engine.complete_render(false);
        }
    }
}

impl<C: Compiler> Deref for Document<C> {
    type Target = Engine;

    fn deref(&self) -> &Engine {
        &self.engine
    }
}

impl<C: Compiler> DerefMut for Document<C> {
    fn deref_mut(&mut self) -> &mut Engine {
        &mut self.engine
    }
}
