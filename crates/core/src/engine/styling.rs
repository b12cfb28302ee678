use super::Engine;
use crate::error::EngineError;
use crate::revision::{RevisionPreset, RevisionStyler};
use texloom_style::StyleFlags;
use texloom_types::Fragment;

impl Engine {
    /// A styler bound to this document's colours and styles.
    pub fn styler(&self) -> RevisionStyler<'_> {
        RevisionStyler::new(&self.colours, &self.styles)
    }

    /// Styles `text` with `flags`. Nothing is appended.
    pub fn style_text(&self, text: &str, flags: StyleFlags) -> Result<Fragment, EngineError> {
        self.styler().style(text, flags)
    }

    /// Styles `history[n]` (and `history[m]` for paired presets) with
    /// `preset`. Nothing is appended.
    pub fn put_rev<S: AsRef<str>>(
        &self,
        history: &[S],
        preset: RevisionPreset,
        n: usize,
        m: Option<usize>,
    ) -> Result<Fragment, EngineError> {
        self.styler().style_as(preset, history, n, m)
    }
}
