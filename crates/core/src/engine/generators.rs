//! Engine wrappers that append generated constructs to the body.
//!
//! Input is validated before anything is appended, so a failed call leaves
//! the buffer exactly as it was.

use super::Engine;
use crate::buffer::Partition;
use crate::counter::{ENUM_COUNTER, ENUM_HEAD_COUNTER};
use crate::error::EngineError;
use crate::templates::{self, FloatSide};
use texloom_types::Fragment;

impl Engine {
    fn append_body(&mut self, fragment: Fragment) {
        self.buffer.append(Partition::Body, fragment);
    }

    /// Appends a table. Column specs are `tabularx` column types such as the
    /// preamble's `Y` (ragged right) and `Z` (centred).
    pub fn table<C, R, S>(&mut self, columns: &[C], rows: &[R]) -> Result<(), EngineError>
    where
        C: AsRef<str>,
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        let fragment = templates::table(columns, rows)?;
        self.append_body(fragment);
        Ok(())
    }

    pub fn list<S: AsRef<str>>(&mut self, items: &[S]) -> Result<(), EngineError> {
        let fragment = templates::list(items)?;
        self.append_body(fragment);
        Ok(())
    }

    pub fn section(&mut self, heading: &str) {
        self.append_body(templates::section(heading));
    }

    pub fn subsection(&mut self, heading: &str) {
        self.append_body(templates::subsection(heading));
    }

    pub fn definition(&mut self, term: &str, body: &str) {
        self.append_body(templates::definition(term, body));
    }

    /// Line break.
    pub fn br(&mut self) {
        self.append_body(templates::line_break());
    }

    /// New page.
    pub fn np(&mut self) {
        self.append_body(templates::page_break());
    }

    pub fn plain(&mut self, text: &str) {
        self.append_body(templates::plain(text));
    }

    pub fn indent(&mut self, text: &str) {
        self.append_body(templates::indent(text));
    }

    pub fn bf(&mut self, text: &str) {
        self.append_body(templates::bold(text));
    }

    pub fn ul(&mut self, text: &str) {
        self.append_body(templates::underline(text));
    }

    pub fn par(&mut self, label: &str, text: &str) {
        self.append_body(templates::paragraph(label, text));
    }

    /// Steps `enumcount` and appends a paragraph numbered in the margin.
    pub fn enum_paragraph(&mut self, label: &str, text: &str) -> Result<(), EngineError> {
        let number = self.counters.reference(ENUM_COUNTER)?;
        let step = self.counters.step(ENUM_COUNTER)?;
        self.append_body(templates::enum_paragraph(&step, &number, label, text));
        Ok(())
    }

    /// Steps `enumheadcount` and appends an `ARTICLE N - title` heading.
    pub fn enum_heading(&mut self, title: &str) -> Result<(), EngineError> {
        let number = self.counters.reference(ENUM_HEAD_COUNTER)?;
        let step = self.counters.step(ENUM_HEAD_COUNTER)?;
        self.append_body(templates::enum_heading(&step, &number, title));
        Ok(())
    }

    pub fn float_right_heading(&mut self, text: &str) {
        self.append_body(templates::float_heading(FloatSide::Right, text));
    }

    pub fn float_left_heading(&mut self, text: &str) {
        self.append_body(templates::float_heading(FloatSide::Left, text));
    }
}
