mod common;

use common::fixtures::*;
use common::source_assertions::positions;
use common::{MockCompiler, TestResult, init_logger, mock_document, mock_pipeline};
use texloom::{
    ColourModel, ColourOverride, DocumentOptions, Fragment, Package, Partition, ValidationError,
    Watermark,
};

#[test]
fn test_document_renders_preamble_then_body() -> TestResult {
    init_logger();
    let (_pipeline, mut doc) = mock_document(MockCompiler::new());
    doc.begin();
    doc.section("Title");
    doc.end();

    let source = doc.to_source_text();
    assert_in_order!(
        source,
        "\\batchmode",
        "\\documentclass{article}",
        "\\newcommand{\\lst}",
        "\\definecolor{text}{HTML}{000000}",
        "\\begin{document}",
        "\\section*{Title}",
        "\\end{document}"
    );
    Ok(())
}

#[test]
fn test_source_text_is_stable_across_renders() -> TestResult {
    init_logger();
    let (_pipeline, mut doc) = mock_document(MockCompiler::new());
    doc.begin();
    basic_section(&mut doc)?;
    doc.end();

    let first = doc.to_source_text();
    let second = doc.to_source_text();
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn test_source_text_joins_partitions_with_newlines() -> TestResult {
    let (_pipeline, mut doc) = mock_document(MockCompiler::new());
    doc.push("first");
    doc.push("second");

    let buffer = doc.buffer();
    let expected: Vec<&str> = buffer
        .fragments(Partition::System)
        .iter()
        .chain(buffer.fragments(Partition::Macros))
        .chain(buffer.fragments(Partition::Body))
        .map(Fragment::as_str)
        .collect();
    assert_eq!(doc.to_source_text(), expected.join("\n"));
    assert!(doc.to_source_text().ends_with("first\nsecond"));
    Ok(())
}

#[test]
fn test_table_width_mismatch_leaves_buffer_unchanged() -> TestResult {
    let (_pipeline, mut doc) = mock_document(MockCompiler::new());
    let (columns, mut rows) = price_table();
    rows.push(vec!["Orphan"]);
    let before = doc.buffer().total_len();

    let err = doc.table(&columns, &rows).unwrap_err();
    assert_eq!(
        err,
        ValidationError::RowWidth {
            row: 3,
            expected: 3,
            actual: 1
        }
        .into()
    );
    assert_eq!(doc.buffer().total_len(), before);
    Ok(())
}

#[test]
fn test_table_rules_and_header_marker() -> TestResult {
    let (_pipeline, mut doc) = mock_document(MockCompiler::new());
    let (columns, rows) = price_table();
    doc.table(&columns, &rows)?;

    let source = doc.to_source_text();
    assert_in_order!(
        source,
        "\\begin{tabularx}{\\textwidth}{|  Y |  Z |  Z | }",
        "Item & Qty & Price\\\\",
        "\\endhead",
        "Widget & 2 & 10\\\\",
        "Gadget & 1 & 25\\\\",
        "\\end{tabularx}\n\\flushleft"
    );
    assert_eq!(source.matches("\\endhead").count(), 1);
    Ok(())
}

#[test]
fn test_list_of_twenty_six_items_uses_every_letter() -> TestResult {
    let (_pipeline, mut doc) = mock_document(MockCompiler::new());
    doc.list(&letters(26))?;

    let source = doc.to_source_text();
    assert_in_order!(source, "{(a)}{item 1}", "{(m)}{item 13}", "{(z)}{item 26}", "\\stoplst");
    Ok(())
}

#[test]
fn test_list_end_marker_is_found_after_the_items() -> TestResult {
    let (_pipeline, mut doc) = mock_document(MockCompiler::new());
    doc.list(&letters(2))?;

    let source = doc.to_source_text();
    let found = positions(&source, &["{(b)}{item 2}", "\\stoplst"]);
    assert!(source.find("\\stoplst") < Some(found[0]));
    assert!(found[1] > found[0]);
    Ok(())
}

#[test]
fn test_list_of_twenty_seven_items_is_rejected() -> TestResult {
    let (_pipeline, mut doc) = mock_document(MockCompiler::new());
    let err = doc.list(&letters(27)).unwrap_err();
    assert!(err.is_validation());
    assert_eq!(doc.buffer().len(Partition::Body), 0);
    Ok(())
}

#[test]
fn test_pop_returns_fragments_in_reverse() -> TestResult {
    let (_pipeline, mut doc) = mock_document(MockCompiler::new());
    doc.push("a");
    doc.cpush("b_c");
    assert_eq!(doc.pop(), Some(Fragment::from("b_c")));
    assert_eq!(doc.pop(), Some(Fragment::from("a")));
    assert_eq!(doc.pop(), None);
    Ok(())
}

#[test]
fn test_lookup_errors_for_unregistered_names() -> TestResult {
    let (_pipeline, mut doc) = mock_document(MockCompiler::new());
    assert!(doc.colour("purple").unwrap_err().is_lookup());
    assert!(doc.style("smallcaps", "x").unwrap_err().is_lookup());
    assert!(doc.macro_call("signature", &["x"]).unwrap_err().is_lookup());
    assert!(doc.step_counter("clause").unwrap_err().is_lookup());

    doc.add_colour("purple", "#800080", ColourModel::Html)?;
    assert_eq!(doc.colour("purple")?, "\\color{purple}");
    Ok(())
}

#[test]
fn test_registered_macros_are_defined_before_use() -> TestResult {
    let (_pipeline, mut doc) = mock_document(MockCompiler::new());
    doc.add_macro("signature", 1, "\\vspace{2em}\\rule{6cm}{0.4pt}\\\\#1")?;
    doc.begin();
    let call = doc.macro_call("signature", &["Jane Roe"])?;
    doc.push(call);
    doc.end();

    assert_in_order!(
        doc.to_source_text(),
        "\\def\\signature#1{",
        "\\begin{document}",
        "\\signature{Jane Roe}"
    );
    Ok(())
}

#[test]
fn test_options_shape_the_system_preamble() -> TestResult {
    let options = DocumentOptions::default()
        .with_document_class("report")
        .with_class_option("11pt")
        .with_graphics_path("/srv/images")
        .with_package(Package::new("hyperref"))
        .with_watermark(Watermark::new("DRAFT").with_scale(3.0));
    let pipeline = mock_pipeline(options, MockCompiler::new());
    let doc = pipeline.new_document()?;

    assert_in_order!(
        doc.to_source_text(),
        "\\documentclass[11pt]{report}",
        "\\usepackage{hyperref}",
        "\\graphicspath{{/srv/images/}}",
        "\\newcolumntype{Z}",
        "\\SetWatermarkText{DRAFT}",
        "\\SetWatermarkScale{3}"
    );
    Ok(())
}

#[test]
fn test_exported_documents_have_no_watermark() -> TestResult {
    let options = DocumentOptions::default()
        .with_export(true)
        .with_watermark(Watermark::new("DRAFT"));
    let pipeline = mock_pipeline(options, MockCompiler::new());
    let doc = pipeline.new_document()?;
    assert_source_lacks!(doc.to_source_text(), "draftwatermark");
    Ok(())
}

#[test]
fn test_colour_overrides_win_over_defaults() -> TestResult {
    let options = DocumentOptions::default()
        .with_colour(ColourOverride::new("new", "#00FF00", ColourModel::Html));
    let pipeline = mock_pipeline(options, MockCompiler::new());
    let doc = pipeline.new_document()?;

    assert_in_order!(
        doc.to_source_text(),
        "\\definecolor{new}{HTML}{0000AA}",
        "\\definecolor{new}{HTML}{00FF00}"
    );
    assert_eq!(doc.colours().get("new")?.value(), "00FF00");
    Ok(())
}

#[test]
fn test_documents_from_one_pipeline_are_independent() -> TestResult {
    let pipeline = mock_pipeline(DocumentOptions::default(), MockCompiler::new());
    let mut first = pipeline.new_document()?;
    let second = pipeline.new_document()?;

    first.enum_heading("One")?;
    first.add_style("sc", "\\textsc{", "}")?;

    assert_eq!(second.buffer().len(Partition::Body), 0);
    assert!(second.style("sc", "x").is_err());
    assert_eq!(second.counters().value("enumheadcount"), Some(0));
    Ok(())
}

#[test]
fn test_reinit_discards_previous_document() -> TestResult {
    let (_pipeline, mut doc) = mock_document(MockCompiler::new());
    doc.begin();
    doc.section("Old");
    doc.end();
    doc.reset()?;

    assert_source_lacks!(doc.to_source_text(), "\\section*{Old}");
    assert_eq!(doc.buffer().len(Partition::Body), 0);
    Ok(())
}
