use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColourParseError {
    #[error("Invalid hex colour '{value}': {reason}")]
    InvalidHex { value: String, reason: String },
    #[error("Unknown colour model: {0}")]
    UnknownModel(String),
}

/// The colour model argument of `\definecolor`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ColourModel {
    /// Six hex digits, e.g. `0000AA`.
    #[default]
    #[serde(rename = "HTML", alias = "html")]
    Html,
    /// Integer RGB components `0..=255`.
    #[serde(rename = "RGB")]
    Rgb,
    /// Fractional RGB components `0..=1`.
    #[serde(rename = "rgb")]
    RgbFraction,
    #[serde(rename = "cmyk")]
    Cmyk,
    #[serde(rename = "gray")]
    Gray,
}

impl ColourModel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColourModel::Html => "HTML",
            ColourModel::Rgb => "RGB",
            ColourModel::RgbFraction => "rgb",
            ColourModel::Cmyk => "cmyk",
            ColourModel::Gray => "gray",
        }
    }
}

impl fmt::Display for ColourModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColourModel {
    type Err = ColourParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "HTML" | "html" => Ok(ColourModel::Html),
            "RGB" => Ok(ColourModel::Rgb),
            "rgb" => Ok(ColourModel::RgbFraction),
            "cmyk" | "CMYK" => Ok(ColourModel::Cmyk),
            "gray" | "grey" => Ok(ColourModel::Gray),
            other => Err(ColourParseError::UnknownModel(other.to_string())),
        }
    }
}

/// An sRGB colour, used to normalise `HTML` colour values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a hex colour string (`#RGB`, `#RRGGBB`, or the same without `#`).
    pub fn parse_hex(s: &str) -> Result<Colour, ColourParseError> {
        let trimmed = s.trim();
        let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);
        let invalid = |reason: String| ColourParseError::InvalidHex {
            value: s.to_string(),
            reason,
        };

        if !hex.is_ascii() {
            return Err(invalid("non-ASCII characters".to_string()));
        }
        if let Some(c) = hex.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(invalid(format!("'{}' is not a hex digit", c)));
        }

        match hex.len() {
            3 => {
                // #RGB expands each digit
                let r = u8::from_str_radix(&hex[0..1].repeat(2), 16)
                    .map_err(|e| invalid(format!("red component: {}", e)))?;
                let g = u8::from_str_radix(&hex[1..2].repeat(2), 16)
                    .map_err(|e| invalid(format!("green component: {}", e)))?;
                let b = u8::from_str_radix(&hex[2..3].repeat(2), 16)
                    .map_err(|e| invalid(format!("blue component: {}", e)))?;
                Ok(Colour { r, g, b })
            }
            6 => {
                let r = u8::from_str_radix(&hex[0..2], 16)
                    .map_err(|e| invalid(format!("red component: {}", e)))?;
                let g = u8::from_str_radix(&hex[2..4], 16)
                    .map_err(|e| invalid(format!("green component: {}", e)))?;
                let b = u8::from_str_radix(&hex[4..6], 16)
                    .map_err(|e| invalid(format!("blue component: {}", e)))?;
                Ok(Colour { r, g, b })
            }
            n => Err(invalid(format!("expected 3 or 6 hex digits, got {}", n))),
        }
    }

    /// The `HTML` model value `xcolor` expects: six upper-case digits, no `#`.
    pub fn to_html(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Colour {
    type Err = ColourParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Colour::parse_hex(s)
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.to_html())
    }
}
