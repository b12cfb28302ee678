mod common;

use common::fixtures::basic_section;
use common::{MOCK_PDF, MockCompiler, TestResult, block_on, init_logger, mock_document};
use texloom::{BinaryFormat, OutputFormat, PipelineError, RenderState};
use std::time::Duration;
use tokio::io::AsyncReadExt;

#[test]
fn test_to_binary_streams_compiler_output() -> TestResult {
    init_logger();
    let (pipeline, mut doc) = mock_document(MockCompiler::new());
    doc.begin();
    basic_section(&mut doc)?;
    doc.end();

    let bytes = block_on(async {
        let mut stream = doc.to_binary(BinaryFormat::Pdf).await?;
        let mut bytes = Vec::new();
        stream.read_to_end(&mut bytes).await?;
        Ok::<_, PipelineError>(bytes)
    })??;

    assert_eq!(bytes, MOCK_PDF);
    assert_eq!(doc.state(), RenderState::Rendered);

    let calls = pipeline.compiler().calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, BinaryFormat::Pdf);
    assert_eq!(calls[0].1, doc.to_source_text());
    Ok(())
}

#[test]
fn test_base64_binary_is_fully_materialised() -> TestResult {
    let (_pipeline, mut doc) = mock_document(MockCompiler::new());
    let artifact = block_on(doc.to_base64_binary())??;

    assert_eq!(artifact.format, OutputFormat::Pdf);
    assert_eq!(artifact.content_type(), "application/pdf");
    assert_eq!(artifact.bytes, MOCK_PDF);
    assert_eq!(artifact.to_base64(), "JVBERi0xLjUKJW1vY2sK");
    Ok(())
}

#[test]
fn test_large_artifacts_are_read_in_chunks() -> TestResult {
    let big: Vec<u8> = (0..50_000u32).map(|i| (i % 251) as u8).collect();
    let (_pipeline, mut doc) = mock_document(MockCompiler::new().then_bytes(&big));
    let artifact = block_on(doc.render(OutputFormat::Pdf))??;
    assert_eq!(artifact.bytes, big);
    Ok(())
}

#[test]
fn test_dvi_requests_reach_the_compiler() -> TestResult {
    let (pipeline, mut doc) = mock_document(MockCompiler::new().then_bytes(b"dvi bytes"));
    let artifact = block_on(doc.render(OutputFormat::Dvi))??;

    assert_eq!(artifact.content_type(), "application/dvi");
    assert_eq!(pipeline.compiler().calls()[0].0, BinaryFormat::Dvi);
    Ok(())
}

#[test]
fn test_source_render_never_calls_the_compiler() -> TestResult {
    let (pipeline, mut doc) = mock_document(MockCompiler::new());
    doc.section("Only text");
    let artifact = block_on(doc.render(OutputFormat::Source))??;

    assert_eq!(artifact.content_type(), "text/plain");
    assert_eq!(String::from_utf8(artifact.bytes)?, doc.to_source_text());
    assert!(pipeline.compiler().calls().is_empty());
    Ok(())
}

#[test]
fn test_compile_failure_carries_diagnostics_and_can_be_retried() -> TestResult {
    init_logger();
    let compiler = MockCompiler::new().failing(1, "! Undefined control sequence.\nl.7 \\foo");
    let (pipeline, mut doc) = mock_document(compiler);
    doc.begin();
    doc.push("\\foo");
    doc.end();
    let before = doc.to_source_text();

    let err = block_on(doc.to_base64_binary())?.unwrap_err();
    assert!(matches!(err, PipelineError::Compilation(_)));
    assert!(err.diagnostics().unwrap_or_default().contains("Undefined control sequence"));
    assert_eq!(doc.state(), RenderState::Failed);
    assert_eq!(doc.to_source_text(), before);

    let artifact = block_on(doc.to_base64_binary())??;
    assert_eq!(artifact.bytes, MOCK_PDF);
    assert_eq!(doc.state(), RenderState::Rendered);

    let calls = pipeline.compiler().calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0].1, calls[1].1);
    Ok(())
}

#[tokio::test]
async fn test_pushes_after_a_render_show_up_in_the_next_one() -> TestResult {
    let (pipeline, mut doc) = mock_document(MockCompiler::new());
    doc.plain("first");
    doc.render(OutputFormat::Pdf).await?;
    doc.plain("second");
    doc.render(OutputFormat::Pdf).await?;

    let calls = pipeline.compiler().calls();
    assert!(!calls[0].1.contains("second"));
    assert!(calls[1].1.ends_with("\\noindent second\n"));
    Ok(())
}

#[tokio::test]
async fn test_abandoned_render_is_marked_failed() -> TestResult {
    let (pipeline, mut doc) = mock_document(MockCompiler::new().stalling());
    doc.plain("never compiled");

    let outcome = tokio::time::timeout(Duration::from_millis(20), doc.to_binary(BinaryFormat::Pdf)).await;
    assert!(outcome.is_err());
    assert_eq!(doc.state(), RenderState::Failed);
    assert_eq!(pipeline.compiler().calls().len(), 1);

    doc.plain("still editable");
    assert!(doc.to_source_text().ends_with("\\noindent still editable\n"));
    Ok(())
}
