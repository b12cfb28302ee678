// src/pipeline/builder.rs
use super::config::PipelineConfig;
use super::renderer::Pipeline;
use crate::error::PipelineError;
use std::fs;
use std::io;
use std::path::Path;
use std::time::Duration;
use texloom_core::{ColourOverride, DocumentOptions, Engine, Watermark};
use texloom_traits::Compiler;

#[cfg(feature = "native")]
use super::compiler::LatexCompiler;

/// A builder for creating a [`Pipeline`].
#[derive(Debug, Clone, Default)]
pub struct PipelineBuilder {
    config: PipelineConfig,
}

impl PipelineBuilder {
    /// Creates a new `PipelineBuilder` with default document and compiler settings.
    pub fn new() -> Self {
        Default::default()
    }

    /// Replaces the whole configuration with one loaded from a JSON file.
    pub fn with_config_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self, PipelineError> {
        let path_ref = path.as_ref();
        let source = fs::read_to_string(path_ref).map_err(|e| {
            PipelineError::Io(io::Error::new(
                e.kind(),
                format!("Failed to read config from '{}': {}", path_ref.display(), e),
            ))
        })?;
        self.config = serde_json::from_str(&source)?;
        Ok(self)
    }

    pub fn with_config(mut self, config: PipelineConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_document_options(mut self, options: DocumentOptions) -> Self {
        self.config.document = options;
        self
    }

    /// Final documents drop the draft watermark.
    pub fn with_export(mut self, export: bool) -> Self {
        self.config.document.export = export;
        self
    }

    pub fn with_graphics_path(mut self, path: impl Into<String>) -> Self {
        self.config.document.graphics_path = Some(path.into());
        self
    }

    pub fn with_colour(mut self, colour: ColourOverride) -> Self {
        self.config.document.colours.push(colour);
        self
    }

    pub fn with_watermark(mut self, watermark: Watermark) -> Self {
        self.config.document.watermark = Some(watermark);
        self
    }

    /// Selects the TeX engine executable, e.g. `lualatex`.
    pub fn with_compiler_program(mut self, program: impl Into<String>) -> Self {
        self.config.compiler.program = program.into();
        self
    }

    pub fn with_compiler_arg(mut self, arg: impl Into<String>) -> Self {
        self.config.compiler.args.push(arg.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.config.compiler.timeout_secs = timeout.as_secs().max(1);
        self
    }

    pub fn with_job_name(mut self, job_name: impl Into<String>) -> Self {
        self.config.compiler.job_name = job_name.into();
        self
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Consumes the builder and creates a pipeline that runs the configured
    /// TeX engine.
    #[cfg(feature = "native")]
    pub fn build(self) -> Result<Pipeline<LatexCompiler>, PipelineError> {
        self.validate_compiler()?;
        let compiler = LatexCompiler::new(self.config.compiler.clone());
        self.build_with_compiler(compiler)
    }

    /// Consumes the builder and creates a pipeline around `compiler`. The
    /// compiler section of the configuration is ignored.
    pub fn build_with_compiler<C: Compiler>(self, compiler: C) -> Result<Pipeline<C>, PipelineError> {
        // Surfaces bad colour overrides here rather than on the first document.
        Engine::new(self.config.document.clone())?;
        log::debug!("Building pipeline with compiler '{}'", compiler.name());
        Ok(Pipeline::new(self.config.document, compiler))
    }

    #[cfg(feature = "native")]
    fn validate_compiler(&self) -> Result<(), PipelineError> {
        let compiler = &self.config.compiler;
        if compiler.program.trim().is_empty() {
            return Err(PipelineError::Config("No compiler program configured.".to_string()));
        }
        if compiler.timeout_secs == 0 {
            return Err(PipelineError::Config("Compiler timeout must be at least one second.".to_string()));
        }
        if compiler.job_name.is_empty()
            || !compiler
                .job_name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(PipelineError::Config(format!(
                "Job name '{}' must be non-empty and use only letters, digits, '-' or '_'.",
                compiler.job_name
            )));
        }
        Ok(())
    }
}
