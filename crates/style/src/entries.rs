//! The three concrete registry entries.

use crate::error::RegistryError;
use crate::registry::{RegistryEntry, RegistryKind, validate_control_word};
use texloom_types::{Colour, ColourModel, Fragment};

/// Characters that would break out of a `\definecolor{...}` argument.
const FORBIDDEN_IN_COLOUR_NAME: &[char] = &['{', '}', '\\', '%', '#', '$', '&', '^', '_', '~', ',', '!'];

/// A named colour declared with `\definecolor` and selected with `\color`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColourEntry {
    name: String,
    value: String,
    model: ColourModel,
}

impl ColourEntry {
    /// `HTML` values are normalised to six upper-case hex digits; other models
    /// are passed through verbatim.
    pub fn new(
        name: impl Into<String>,
        value: impl AsRef<str>,
        model: ColourModel,
    ) -> Result<Self, RegistryError> {
        let name = name.into();
        if name.is_empty() || name.chars().any(|c| c.is_whitespace() || FORBIDDEN_IN_COLOUR_NAME.contains(&c)) {
            return Err(RegistryError::InvalidName {
                kind: RegistryKind::Colour,
                name,
                reason: "colour names must be non-empty and free of TeX special characters",
            });
        }

        let value = match model {
            ColourModel::Html => Colour::parse_hex(value.as_ref())
                .map_err(|e| RegistryError::InvalidValue {
                    kind: RegistryKind::Colour,
                    name: name.clone(),
                    reason: e.to_string(),
                })?
                .to_html(),
            _ => value.as_ref().trim().to_string(),
        };

        Ok(Self { name, value, model })
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn model(&self) -> ColourModel {
        self.model
    }

    /// Switches the current colour to this one.
    pub fn render(&self) -> Fragment {
        Fragment::from(format!("\\color{{{}}}", self.name))
    }
}

impl RegistryEntry for ColourEntry {
    const KIND: RegistryKind = RegistryKind::Colour;

    fn name(&self) -> &str {
        &self.name
    }

    fn definition(&self) -> Fragment {
        Fragment::from(format!(
            "\\definecolor{{{}}}{{{}}}{{{}}}",
            self.name, self.model, self.value
        ))
    }
}

/// A one-argument text style, defined as `\style<name>` wrapping its argument
/// in a prefix and suffix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleEntry {
    name: String,
    prefix: String,
    suffix: String,
}

impl StyleEntry {
    pub fn new(
        name: impl Into<String>,
        prefix: impl Into<String>,
        suffix: impl Into<String>,
    ) -> Result<Self, RegistryError> {
        let name = name.into();
        validate_control_word(RegistryKind::Style, &name)?;
        Ok(Self {
            name,
            prefix: prefix.into(),
            suffix: suffix.into(),
        })
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// The control sequence the definition introduces, e.g. `\stylebf`.
    pub fn command(&self) -> String {
        format!("\\style{}", self.name)
    }

    pub fn render(&self, text: &str) -> Fragment {
        Fragment::from(format!("{}{{{}}}", self.command(), text))
    }
}

impl RegistryEntry for StyleEntry {
    const KIND: RegistryKind = RegistryKind::Style;

    fn name(&self) -> &str {
        &self.name
    }

    fn definition(&self) -> Fragment {
        Fragment::from(format!(
            "\\def{}#1{{{}#1{}}}",
            self.command(),
            self.prefix,
            self.suffix
        ))
    }
}

/// A reusable command taking up to nine brace-delimited arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MacroEntry {
    name: String,
    arity: u8,
    body: String,
}

impl MacroEntry {
    pub fn new(name: impl Into<String>, arity: u8, body: impl Into<String>) -> Result<Self, RegistryError> {
        let name = name.into();
        validate_control_word(RegistryKind::Macro, &name)?;
        if arity > 9 {
            return Err(RegistryError::TooManyParameters { name, arity });
        }
        Ok(Self {
            name,
            arity,
            body: body.into(),
        })
    }

    pub fn arity(&self) -> u8 {
        self.arity
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    /// Invokes the macro. A zero-arity call renders as `\name{}` so that any
    /// following text is not swallowed as part of the control word.
    pub fn call<S: AsRef<str>>(&self, args: &[S]) -> Result<Fragment, RegistryError> {
        if args.len() != usize::from(self.arity) {
            return Err(RegistryError::Arity {
                name: self.name.clone(),
                expected: self.arity,
                actual: args.len(),
            });
        }
        if args.is_empty() {
            return Ok(Fragment::from(format!("\\{}{{}}", self.name)));
        }
        let mut out = format!("\\{}", self.name);
        for arg in args {
            out.push('{');
            out.push_str(arg.as_ref());
            out.push('}');
        }
        Ok(Fragment::from(out))
    }
}

impl RegistryEntry for MacroEntry {
    const KIND: RegistryKind = RegistryKind::Macro;

    fn name(&self) -> &str {
        &self.name
    }

    fn definition(&self) -> Fragment {
        let params: String = (1..=self.arity).map(|i| format!("#{}", i)).collect();
        Fragment::from(format!("\\def\\{}{}{{{}}}", self.name, params, self.body))
    }
}
