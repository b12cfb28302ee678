use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown output format: {0}")]
pub struct UnknownFormat(pub String);

/// A format the external compiler can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BinaryFormat {
    #[default]
    Pdf,
    Dvi,
}

impl BinaryFormat {
    /// The selector handed to the compiler (`-output-format=...`).
    pub fn as_str(&self) -> &'static str {
        match self {
            BinaryFormat::Pdf => "pdf",
            BinaryFormat::Dvi => "dvi",
        }
    }

    pub fn extension(&self) -> &'static str {
        self.as_str()
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            BinaryFormat::Pdf => "application/pdf",
            BinaryFormat::Dvi => "application/dvi",
        }
    }
}

impl fmt::Display for BinaryFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BinaryFormat {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pdf" => Ok(BinaryFormat::Pdf),
            "dvi" => Ok(BinaryFormat::Dvi),
            _ => Err(UnknownFormat(s.to_string())),
        }
    }
}

/// Every render target: raw source text or a compiled binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Source,
    Pdf,
    Dvi,
}

impl OutputFormat {
    pub fn content_type(&self) -> &'static str {
        match self {
            OutputFormat::Source => "text/plain",
            OutputFormat::Pdf => BinaryFormat::Pdf.content_type(),
            OutputFormat::Dvi => BinaryFormat::Dvi.content_type(),
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Source => "tex",
            OutputFormat::Pdf => "pdf",
            OutputFormat::Dvi => "dvi",
        }
    }

    /// `None` for the source format, which never reaches the compiler.
    pub fn binary(&self) -> Option<BinaryFormat> {
        match self {
            OutputFormat::Source => None,
            OutputFormat::Pdf => Some(BinaryFormat::Pdf),
            OutputFormat::Dvi => Some(BinaryFormat::Dvi),
        }
    }
}

impl From<BinaryFormat> for OutputFormat {
    fn from(format: BinaryFormat) -> Self {
        match format {
            BinaryFormat::Pdf => OutputFormat::Pdf,
            BinaryFormat::Dvi => OutputFormat::Dvi,
        }
    }
}

impl FromStr for OutputFormat {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "tex" | "ltx" | "latex" | "source" => Ok(OutputFormat::Source),
            "pdf" => Ok(OutputFormat::Pdf),
            "dvi" => Ok(OutputFormat::Dvi),
            _ => Err(UnknownFormat(s.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}
