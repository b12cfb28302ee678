use clap::{Parser, ValueEnum};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use texloom::{Document, LatexCompiler, OutputFormat, PipelineBuilder, PipelineError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// LaTeX source text
    Tex,
    Pdf,
    Dvi,
    /// PDF, base64 encoded
    Base64,
}

/// Renders a sample document covering every construct the engine generates.
#[derive(Parser, Debug)]
#[command(name = "texloom", version, about)]
struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Tex)]
    format: Format,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// JSON pipeline configuration
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Mark the document as final (no draft watermark)
    #[arg(long)]
    export: bool,
}

fn main() -> Result<(), PipelineError> {
    env_logger::init();
    let cli = Cli::parse();

    let mut builder = PipelineBuilder::new();
    if let Some(path) = &cli.config {
        builder = builder.with_config_file(path)?;
    }
    if cli.export {
        builder = builder.with_export(true);
    }
    let pipeline = builder.build()?;

    let mut doc = pipeline.new_document()?;
    doc.begin();
    sample_section(&mut doc)?;
    doc.end();

    let runtime = tokio::runtime::Runtime::new()?;
    let bytes = runtime.block_on(render(&mut doc, cli.format))?;

    match &cli.output {
        Some(path) => {
            fs::write(path, &bytes)?;
            log::info!("Wrote {} bytes to {}", bytes.len(), path.display());
        }
        None => io::stdout().write_all(&bytes)?,
    }
    Ok(())
}

async fn render(doc: &mut Document<LatexCompiler>, format: Format) -> Result<Vec<u8>, PipelineError> {
    let bytes = match format {
        Format::Tex => doc.render(OutputFormat::Source).await?.into_bytes(),
        Format::Pdf => doc.render(OutputFormat::Pdf).await?.into_bytes(),
        Format::Dvi => doc.render(OutputFormat::Dvi).await?.into_bytes(),
        Format::Base64 => doc.to_base64_binary().await?.to_base64().into_bytes(),
    };
    Ok(bytes)
}

fn sample_section(doc: &mut Document<LatexCompiler>) -> Result<(), PipelineError> {
    doc.float_right_heading("floatRightHeading");
    doc.br();
    doc.float_left_heading("floatLeftHeading");
    doc.br();
    doc.subsection("subsection");
    doc.br();
    doc.enum_paragraph("enum", "enumerated paragraph (labelled)")?;
    doc.br();
    doc.enum_paragraph("", "enumerated paragraph (unlabelled)")?;
    doc.br();
    doc.definition("definition", "definition");
    doc.br();
    doc.plain("plain");
    doc.br();
    doc.indent("indent");
    doc.br();
    doc.bf("bf");
    doc.br();
    doc.ul("ul");
    doc.br();
    doc.par("par", "par");
    doc.br();
    doc.enum_heading("enumHeading")?;
    doc.table(
        &["Y", "Z"],
        &[["Clause", "Status"], ["Scope", "Agreed"], ["Term", "Pending"]],
    )?;
    doc.list(&["first item", "second item", "third item"])?;
    Ok(())
}
