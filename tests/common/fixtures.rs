use texloom::{Compiler, Document, EngineError};

/// One of every construct, in the order a short agreement would use them.
pub fn basic_section<C: Compiler>(doc: &mut Document<C>) -> Result<(), EngineError> {
    doc.float_right_heading("floatRightHeading");
    doc.br();
    doc.float_left_heading("floatLeftHeading");
    doc.br();
    doc.subsection("subsection");
    doc.br();
    doc.enum_paragraph("enum", "enumerated paragraph (labelled)")?;
    doc.br();
    doc.definition("definition", "definition");
    doc.br();
    doc.plain("plain");
    doc.indent("indent");
    doc.bf("bf");
    doc.ul("ul");
    doc.par("par", "par");
    doc.enum_heading("enumHeading")?;
    Ok(())
}

pub fn letters(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("item {}", i + 1)).collect()
}

pub fn price_table() -> (Vec<&'static str>, Vec<Vec<&'static str>>) {
    (
        vec!["Y", "Z", "Z"],
        vec![
            vec!["Item", "Qty", "Price"],
            vec!["Widget", "2", "10"],
            vec!["Gadget", "1", "25"],
        ],
    )
}
