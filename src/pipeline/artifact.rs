use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use texloom_types::OutputFormat;

/// A fully materialised render result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub format: OutputFormat,
    pub bytes: Vec<u8>,
}

impl Artifact {
    pub fn new(format: OutputFormat, bytes: Vec<u8>) -> Self {
        Self { format, bytes }
    }

    pub fn content_type(&self) -> &'static str {
        self.format.content_type()
    }

    pub fn to_base64(&self) -> String {
        STANDARD.encode(&self.bytes)
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}
