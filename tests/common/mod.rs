pub mod fixtures;
pub mod source_assertions;

use std::collections::VecDeque;
use std::future::Future;
use std::io::Cursor;
use std::sync::Mutex;
use texloom::{
    BinaryFormat, ByteStream, CompileError, Compiler, Document, DocumentOptions, Pipeline,
    PipelineBuilder,
};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A scripted compiler: answers each call with the next queued outcome and
/// falls back to a fixed PDF once the queue is empty.
#[derive(Debug, Default)]
pub struct MockCompiler {
    outcomes: Mutex<VecDeque<Result<Vec<u8>, CompileError>>>,
    calls: Mutex<Vec<(BinaryFormat, String)>>,
    stall: bool,
}

pub const MOCK_PDF: &[u8] = b"%PDF-1.5\n%mock\n";

impl MockCompiler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues `count` failures carrying `diagnostics`.
    pub fn failing(self, count: usize, diagnostics: &str) -> Self {
        if let Ok(mut outcomes) = self.outcomes.lock() {
            for _ in 0..count {
                outcomes.push_back(Err(CompileError::Failed {
                    status: "exit status: 1".to_string(),
                    diagnostics: diagnostics.to_string(),
                }));
            }
        }
        self
    }

    pub fn then_bytes(self, bytes: &[u8]) -> Self {
        if let Ok(mut outcomes) = self.outcomes.lock() {
            outcomes.push_back(Ok(bytes.to_vec()));
        }
        self
    }

    /// Never answers, like a compiler stuck on a hung run.
    pub fn stalling(mut self) -> Self {
        self.stall = true;
        self
    }

    pub fn calls(&self) -> Vec<(BinaryFormat, String)> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

impl Compiler for MockCompiler {
    fn compile(
        &self,
        source: String,
        format: BinaryFormat,
    ) -> impl Future<Output = Result<ByteStream, CompileError>> + Send {
        let outcome = self
            .outcomes
            .lock()
            .ok()
            .and_then(|mut outcomes| outcomes.pop_front())
            .unwrap_or_else(|| Ok(MOCK_PDF.to_vec()));
        if let Ok(mut calls) = self.calls.lock() {
            calls.push((format, source));
        }
        let stall = self.stall;
        async move {
            if stall {
                std::future::pending::<()>().await;
            }
            let bytes = outcome?;
            Ok(Box::pin(Cursor::new(bytes)) as ByteStream)
        }
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}

pub fn mock_pipeline(options: DocumentOptions, compiler: MockCompiler) -> Pipeline<MockCompiler> {
    PipelineBuilder::new()
        .with_document_options(options)
        .build_with_compiler(compiler)
        .expect("default options always build")
}

pub fn mock_document(compiler: MockCompiler) -> (Pipeline<MockCompiler>, Document<MockCompiler>) {
    let pipeline = mock_pipeline(DocumentOptions::default(), compiler);
    let doc = pipeline.new_document().expect("default options always initialise");
    (pipeline, doc)
}

pub fn block_on<F: Future>(future: F) -> Result<F::Output, std::io::Error> {
    Ok(tokio::runtime::Runtime::new()?.block_on(future))
}
