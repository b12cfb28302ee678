//! Runs a TeX engine as a child process.
//!
//! Each compilation gets a private temporary directory holding the source,
//! log and artifact. The returned stream reads the artifact straight from
//! disk and owns the directory, so it is removed once the stream is dropped.

use super::config::CompilerConfig;
use std::future::Future;
use std::io;
use std::pin::Pin;
use std::process::Stdio;
use std::task::{Context, Poll};
use tempfile::TempDir;
use texloom_traits::{ByteStream, CompileError, Compiler};
use texloom_types::BinaryFormat;
use tokio::fs::File;
use tokio::io::{AsyncRead, ReadBuf};
use tokio::process::Command;

/// How much of an unremarkable log to keep when no error lines are found.
const LOG_TAIL_LINES: usize = 40;

/// A [`Compiler`] backed by `pdflatex` (or any engine with the same flags).
#[derive(Debug, Clone, Default)]
pub struct LatexCompiler {
    config: CompilerConfig,
}

impl LatexCompiler {
    pub fn new(config: CompilerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CompilerConfig {
        &self.config
    }

    fn command(&self, dir: &TempDir, format: BinaryFormat) -> Command {
        let mut cmd = Command::new(&self.config.program);
        cmd.current_dir(dir.path())
            .arg("-interaction=batchmode")
            .arg("-halt-on-error")
            .arg(format!("-output-format={}", format.as_str()))
            .arg(format!("-jobname={}", self.config.job_name))
            .args(&self.config.args)
            .arg(format!("{}.tex", self.config.job_name))
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        cmd
    }
}

impl Compiler for LatexCompiler {
    fn compile(
        &self,
        source: String,
        format: BinaryFormat,
    ) -> impl Future<Output = Result<ByteStream, CompileError>> + Send {
        let this = self.clone();
        async move {
            let dir = tempfile::tempdir()?;
            let job = &this.config.job_name;
            tokio::fs::write(dir.path().join(format!("{}.tex", job)), source).await?;

            log::debug!(
                "Running {} in {} for {} output",
                this.config.program,
                dir.path().display(),
                format
            );
            let child = this.command(&dir, format).spawn().map_err(|e| CompileError::Spawn {
                program: this.config.program.clone(),
                message: e.to_string(),
            })?;

            let timeout = this.config.timeout();
            let output = tokio::time::timeout(timeout, child.wait_with_output())
                .await
                .map_err(|_| CompileError::Timeout(timeout))??;

            if !output.status.success() {
                // TeX wraps log lines by bytes, splitting multibyte characters
                let log = match tokio::fs::read(dir.path().join(format!("{}.log", job))).await {
                    Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
                    Err(_) => {
                        let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
                        text.push_str(&String::from_utf8_lossy(&output.stderr));
                        text
                    }
                };
                return Err(CompileError::Failed {
                    status: output.status.to_string(),
                    diagnostics: diagnostics_from_log(&log),
                });
            }

            let artifact = dir.path().join(format!("{}.{}", job, format.extension()));
            let file = File::open(&artifact)
                .await
                .map_err(|_| CompileError::MissingArtifact(format))?;
            Ok(Box::pin(ArtifactStream { file, _dir: dir }) as ByteStream)
        }
    }

    fn name(&self) -> &'static str {
        "latex"
    }
}

/// Reads the compiled artifact and keeps its working directory alive.
struct ArtifactStream {
    file: File,
    _dir: TempDir,
}

impl AsyncRead for ArtifactStream {
    fn poll_read(
        mut self: Pin<&mut Self>,
        cx: &mut Context<'_>,
        buf: &mut ReadBuf<'_>,
    ) -> Poll<io::Result<()>> {
        Pin::new(&mut self.file).poll_read(cx, buf)
    }
}

/// Pulls the `!` error lines, each with the line that follows it, out of a
/// TeX log. Falls back to the tail of the log when there are none.
pub(crate) fn diagnostics_from_log(log: &str) -> String {
    let lines: Vec<&str> = log.lines().collect();
    let mut picked = Vec::new();
    for (i, line) in lines.iter().enumerate() {
        if line.starts_with('!') {
            picked.push(*line);
            if let Some(next) = lines.get(i + 1) {
                picked.push(*next);
            }
        }
    }
    if picked.is_empty() {
        let start = lines.len().saturating_sub(LOG_TAIL_LINES);
        picked.extend_from_slice(&lines[start..]);
    }
    picked.join("\n")
}
