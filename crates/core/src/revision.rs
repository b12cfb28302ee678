//! Change-tracking span styling.
//!
//! A revision history is a slice of text versions. Presets pick one or two
//! versions out of it and wrap them in the colour and decoration styles that
//! mark text as added, removed, unchanged or modified.

use crate::error::{EngineError, ValidationError};
use crate::escape::clean;
use std::fmt;
use std::str::FromStr;
use texloom_style::{ColourRegistry, StyleFlags, StyleRegistry, colours};
use texloom_types::Fragment;

/// How two versions of a value relate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Comparison {
    /// Both sides are identical.
    Eq,
    /// Only the second side has content.
    One,
    /// Only the first side has content.
    Two,
    /// Both sides have content and differ.
    Neq,
}

impl Comparison {
    pub fn as_str(&self) -> &'static str {
        match self {
            Comparison::Eq => "eq",
            Comparison::One => "one",
            Comparison::Two => "two",
            Comparison::Neq => "neq",
        }
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifies a pair of values. Equality is checked before emptiness, so two
/// empty strings compare as [`Comparison::Eq`].
pub fn compare(a: &str, b: &str) -> Comparison {
    if a == b {
        Comparison::Eq
    } else if a.is_empty() {
        Comparison::One
    } else if b.is_empty() {
        Comparison::Two
    } else {
        Comparison::Neq
    }
}

/// A named styling preset over a revision history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RevisionPreset {
    New,
    Old,
    Eq,
    Neq,
    NewClean,
    OldClean,
    EqClean,
    NeqClean,
}

impl RevisionPreset {
    pub const ALL: [RevisionPreset; 8] = [
        RevisionPreset::New,
        RevisionPreset::Old,
        RevisionPreset::Eq,
        RevisionPreset::Neq,
        RevisionPreset::NewClean,
        RevisionPreset::OldClean,
        RevisionPreset::EqClean,
        RevisionPreset::NeqClean,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RevisionPreset::New => "new",
            RevisionPreset::Old => "old",
            RevisionPreset::Eq => "eq",
            RevisionPreset::Neq => "neq",
            RevisionPreset::NewClean => "newClean",
            RevisionPreset::OldClean => "oldClean",
            RevisionPreset::EqClean => "eqClean",
            RevisionPreset::NeqClean => "neqClean",
        }
    }

    /// Whether this preset styles two versions rather than one.
    pub fn is_paired(&self) -> bool {
        matches!(self, RevisionPreset::Neq | RevisionPreset::NeqClean)
    }

    fn flags(&self) -> StyleFlags {
        let clean = matches!(
            self,
            RevisionPreset::NewClean | RevisionPreset::OldClean | RevisionPreset::EqClean
        );
        match self {
            RevisionPreset::New | RevisionPreset::NewClean => StyleFlags {
                new: true,
                ul: true,
                cl: clean,
                ..Default::default()
            },
            RevisionPreset::Old | RevisionPreset::OldClean => StyleFlags {
                old: true,
                st: true,
                cl: clean,
                ..Default::default()
            },
            RevisionPreset::Eq | RevisionPreset::EqClean => StyleFlags {
                eq: true,
                cl: clean,
                ..Default::default()
            },
            // The current side of a modification is always cleaned.
            RevisionPreset::Neq | RevisionPreset::NeqClean => StyleFlags {
                new: true,
                ul: true,
                cl: true,
                ..Default::default()
            },
        }
    }

    fn prior_flags(&self) -> StyleFlags {
        StyleFlags {
            old: true,
            st: true,
            cl: *self == RevisionPreset::NeqClean,
            ..Default::default()
        }
    }
}

impl fmt::Display for RevisionPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown revision preset '{0}'")]
pub struct UnknownPreset(pub String);

impl FromStr for RevisionPreset {
    type Err = UnknownPreset;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RevisionPreset::ALL
            .into_iter()
            .find(|preset| preset.as_str() == s)
            .ok_or_else(|| UnknownPreset(s.to_string()))
    }
}

/// Styles spans of text with the colours and styles of a live document.
#[derive(Debug, Clone, Copy)]
pub struct RevisionStyler<'a> {
    colours: &'a ColourRegistry,
    styles: &'a StyleRegistry,
}

impl<'a> RevisionStyler<'a> {
    pub fn new(colours: &'a ColourRegistry, styles: &'a StyleRegistry) -> Self {
        Self { colours, styles }
    }

    /// Wraps `text` according to `flags`, then switches back to the body
    /// text colour.
    pub fn style(&self, text: &str, flags: StyleFlags) -> Result<Fragment, EngineError> {
        let mut out = String::new();
        for name in flags.colours() {
            out.push_str(self.colours.get(name)?.render().as_str());
        }

        let mut span = if flags.cl { clean(text) } else { text.to_string() };
        for name in flags.decorations() {
            span = self.styles.get(name)?.render(&span).as_str().to_string();
        }
        out.push_str(&span);
        out.push_str(self.colours.get(colours::TEXT)?.render().as_str());

        Ok(Fragment::from(out))
    }

    /// Applies `preset` to `history[n]`. Paired presets also style the prior
    /// version `history[m]` and place it first; `m` defaults to zero.
    pub fn style_as<S: AsRef<str>>(
        &self,
        preset: RevisionPreset,
        history: &[S],
        n: usize,
        m: Option<usize>,
    ) -> Result<Fragment, EngineError> {
        let current = version(history, n)?;
        if !preset.is_paired() {
            return self.style(current, preset.flags());
        }

        let prior = version(history, m.unwrap_or(0))?;
        let mut out = self.style(prior, preset.prior_flags())?.as_str().to_string();
        out.push_str(self.style(current, preset.flags())?.as_str());
        Ok(Fragment::from(out))
    }
}

fn version<S: AsRef<str>>(history: &[S], index: usize) -> Result<&str, ValidationError> {
    history
        .get(index)
        .map(AsRef::as_ref)
        .ok_or(ValidationError::RevisionIndex {
            index,
            len: history.len(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use texloom_style::{ColourEntry, StyleEntry};
    use texloom_types::ColourModel;

    fn registries() -> (ColourRegistry, StyleRegistry) {
        let mut colours = ColourRegistry::new();
        for name in ["text", "new", "old", "eq", "neq"] {
            colours.add(ColourEntry::new(name, "#000000", ColourModel::Html).unwrap());
        }
        let mut styles = StyleRegistry::new();
        for name in ["bf", "it", "ul", "st"] {
            styles.add(StyleEntry::new(name, "<", ">").unwrap());
        }
        (colours, styles)
    }

    #[test]
    fn compare_covers_all_outcomes() {
        assert_eq!(compare("x", "x"), Comparison::Eq);
        assert_eq!(compare("x", ""), Comparison::Two);
        assert_eq!(compare("", "y"), Comparison::One);
        assert_eq!(compare("x", "y"), Comparison::Neq);
        assert_eq!(compare("", ""), Comparison::Eq);
    }

    #[test]
    fn presets_parse_from_camel_case() {
        assert_eq!("neqClean".parse::<RevisionPreset>().unwrap(), RevisionPreset::NeqClean);
        assert_eq!("eq".parse::<RevisionPreset>().unwrap(), RevisionPreset::Eq);
        assert!("NeqClean".parse::<RevisionPreset>().is_err());
        for preset in RevisionPreset::ALL {
            assert_eq!(preset.to_string().parse::<RevisionPreset>().unwrap(), preset);
        }
    }

    #[test]
    fn style_orders_colours_then_nested_decorations() {
        let (colours, styles) = registries();
        let styler = RevisionStyler::new(&colours, &styles);
        let flags = StyleFlags {
            new: true,
            neq: true,
            st: true,
            ul: true,
            ..Default::default()
        };
        assert_eq!(
            styler.style("t", flags).unwrap(),
            "\\color{new}\\color{neq}\\styleul{\\stylest{t}}\\color{text}"
        );
    }

    #[test]
    fn cleaning_happens_before_decoration() {
        let (colours, styles) = registries();
        let styler = RevisionStyler::new(&colours, &styles);
        let flags = StyleFlags {
            cl: true,
            bf: true,
            ..Default::default()
        };
        assert_eq!(
            styler.style("\\x^", flags).unwrap(),
            "\\stylebf{xtextasciicircum{}}\\color{text}"
        );
    }

    #[test]
    fn neq_styles_prior_then_current() {
        let (colours, styles) = registries();
        let styler = RevisionStyler::new(&colours, &styles);
        let out = styler
            .style_as(RevisionPreset::Neq, &["NEW", "OLD"], 0, Some(1))
            .unwrap();
        assert_eq!(
            out,
            "\\color{old}\\stylest{OLD}\\color{text}\\color{new}\\styleul{NEW}\\color{text}"
        );
    }

    #[test]
    fn out_of_range_index_is_a_validation_error() {
        let (colours, styles) = registries();
        let styler = RevisionStyler::new(&colours, &styles);
        let err = styler
            .style_as(RevisionPreset::Old, &["only"], 3, None)
            .unwrap_err();
        assert_eq!(
            err,
            EngineError::Validation(ValidationError::RevisionIndex { index: 3, len: 1 })
        );
    }

    #[test]
    fn missing_colour_is_a_lookup_error() {
        let (_, styles) = registries();
        let colours = ColourRegistry::new();
        let styler = RevisionStyler::new(&colours, &styles);
        let err = styler.style_as(RevisionPreset::Eq, &["same"], 0, None).unwrap_err();
        assert!(err.is_lookup());
    }
}
