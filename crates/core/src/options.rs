//! Per-document configuration applied by `Engine::init`.

use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use texloom_types::{ColourModel, Fragment};

/// A package loaded with `\usepackage[options]{name}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Package {
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
}

impl Package {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            options: Vec::new(),
        }
    }

    pub fn with_option(mut self, option: impl Into<String>) -> Self {
        self.options.push(option.into());
        self
    }

    pub fn to_fragment(&self) -> Fragment {
        if self.options.is_empty() {
            Fragment::from(format!("\\usepackage{{{}}}", self.name))
        } else {
            Fragment::from(format!(
                "\\usepackage[{}]{{{}}}",
                self.options.join(","),
                self.name
            ))
        }
    }
}

/// A colour registered at init, after the built-in ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColourOverride {
    pub name: String,
    #[serde(alias = "val")]
    pub value: String,
    #[serde(default, alias = "type")]
    pub model: ColourModel,
}

impl ColourOverride {
    pub fn new(name: impl Into<String>, value: impl Into<String>, model: ColourModel) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            model,
        }
    }
}

/// A diagonal background stamp for draft (non-export) documents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Watermark {
    pub text: String,
    #[serde(default = "default_watermark_scale")]
    pub scale: f32,
}

fn default_watermark_scale() -> f32 {
    1.0
}

impl Watermark {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            scale: default_watermark_scale(),
        }
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    /// The text lands in the preamble verbatim, so it may not carry any
    /// character TeX treats specially.
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self.text.chars().find(|c| WATERMARK_SPECIALS.contains(c)) {
            Some(found) => Err(ValidationError::WatermarkText {
                text: self.text.clone(),
                found,
            }),
            None => Ok(()),
        }
    }
}

const WATERMARK_SPECIALS: [char; 10] = ['\\', '{', '}', '#', '$', '%', '&', '_', '^', '~'];

/// Everything `init` needs to lay down a fresh document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DocumentOptions {
    /// Final (exported) documents never carry the draft watermark.
    pub export: bool,
    /// Directory handed to `\graphicspath`.
    pub graphics_path: Option<String>,
    /// Extra colours, applied after the defaults so they can replace them.
    pub colours: Vec<ColourOverride>,
    /// Fragments the body starts with.
    pub body: Vec<Fragment>,
    pub document_class: String,
    pub class_options: Vec<String>,
    pub packages: Vec<Package>,
    pub watermark: Option<Watermark>,
}

impl Default for DocumentOptions {
    fn default() -> Self {
        Self {
            export: false,
            graphics_path: None,
            colours: Vec::new(),
            body: Vec::new(),
            document_class: "article".to_string(),
            class_options: Vec::new(),
            packages: default_packages(),
            watermark: None,
        }
    }
}

impl DocumentOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_export(mut self, export: bool) -> Self {
        self.export = export;
        self
    }

    pub fn with_graphics_path(mut self, path: impl Into<String>) -> Self {
        self.graphics_path = Some(path.into());
        self
    }

    pub fn with_colour(mut self, colour: ColourOverride) -> Self {
        self.colours.push(colour);
        self
    }

    pub fn with_body(mut self, body: Vec<Fragment>) -> Self {
        self.body = body;
        self
    }

    pub fn with_document_class(mut self, class: impl Into<String>) -> Self {
        self.document_class = class.into();
        self
    }

    pub fn with_class_option(mut self, option: impl Into<String>) -> Self {
        self.class_options.push(option.into());
        self
    }

    pub fn with_package(mut self, package: Package) -> Self {
        self.packages.push(package);
        self
    }

    pub fn with_watermark(mut self, watermark: Watermark) -> Self {
        self.watermark = Some(watermark);
        self
    }
}

/// The packages the generators and default macros rely on.
pub fn default_packages() -> Vec<Package> {
    vec![
        Package::new("babel").with_option("english"),
        Package::new("color"),
        Package::new("colortbl"),
        Package::new("geometry")
            .with_option("letterpaper")
            .with_option("margin=1in"),
        Package::new("marginnote"),
        Package::new("parskip"),
        Package::new("multicol"),
        Package::new("tabularx"),
        Package::new("ltablex"),
        Package::new("booktabs"),
        Package::new("ragged2e"),
        Package::new("ifmtarg"),
        Package::new("etoolbox"),
        Package::new("graphicx"),
        Package::new("xcolor"),
        Package::new("soul"),
        Package::new("ifthen"),
    ]
}
