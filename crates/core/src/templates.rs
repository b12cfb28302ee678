//! Fragment generators for structured content.
//!
//! Every function here is pure: it composes source text from its input and
//! leaves appending (and counter stepping) to the [`Engine`](crate::Engine).
//! None of them escape their input; clean raw text before passing it in.

use crate::error::ValidationError;
use itertools::Itertools;
use texloom_types::Fragment;

/// Labels run from `a` to `z`.
pub const MAX_LIST_ITEMS: usize = 26;

/// A bordered `tabularx` grid spanning the text width.
///
/// Every row must have exactly one cell per column. A rule precedes each row
/// and follows the last one; the header marker follows the first row only.
pub fn table<C, R, S>(columns: &[C], rows: &[R]) -> Result<Fragment, ValidationError>
where
    C: AsRef<str>,
    R: AsRef<[S]>,
    S: AsRef<str>,
{
    if columns.is_empty() {
        return Err(ValidationError::NoColumns);
    }
    if let Some((row, cells)) = rows
        .iter()
        .map(AsRef::as_ref)
        .enumerate()
        .find(|(_, cells)| cells.len() != columns.len())
    {
        return Err(ValidationError::RowWidth {
            row,
            expected: columns.len(),
            actual: cells.len(),
        });
    }

    let mut col_types = String::from("| ");
    for column in columns {
        col_types.push(' ');
        col_types.push_str(column.as_ref());
        col_types.push_str(" | ");
    }

    let mut entries = String::new();
    for (i, cells) in rows.iter().map(AsRef::as_ref).enumerate() {
        entries.push_str("\\bottomrule\n");
        entries.push_str(&cells.iter().map(AsRef::as_ref).join(" & "));
        entries.push_str("\\\\");
        entries.push_str("\n\\toprule\n");
        if i == 0 {
            entries.push_str("\\endhead\n");
        }
    }

    Ok(Fragment::from(format!(
        "\\begin{{tabularx}}{{\\textwidth}}{{{}}}\n{}\n\\end{{tabularx}}\n\\flushleft",
        col_types, entries
    )))
}

/// A hanging list labelled `(a)`, `(b)`, ... built on the `\lst` macro.
pub fn list<S: AsRef<str>>(items: &[S]) -> Result<Fragment, ValidationError> {
    if items.len() > MAX_LIST_ITEMS {
        return Err(ValidationError::TooManyItems {
            len: items.len(),
            max: MAX_LIST_ITEMS,
        });
    }
    let mut out = String::from("\\lst\n");
    for (label, item) in ('a'..='z').zip(items) {
        out.push_str(&format!("{{({})}}{{{}}}\n", label, item.as_ref()));
    }
    out.push_str("\\stoplst");
    Ok(Fragment::from(out))
}

pub fn section(heading: &str) -> Fragment {
    Fragment::from(format!("\n\\section*{{{}}}\n", heading))
}

pub fn subsection(heading: &str) -> Fragment {
    Fragment::from(format!("\n\\subsection*{{{}}}\n", heading))
}

pub fn definition(term: &str, body: &str) -> Fragment {
    Fragment::from(format!("\\paragraph{{\"{}\"}}{{{}}}\n", term, body))
}

pub fn line_break() -> Fragment {
    Fragment::from("\\ \\linebreak\n")
}

pub fn page_break() -> Fragment {
    Fragment::from("\\pagebreak\n")
}

pub fn plain(text: &str) -> Fragment {
    Fragment::from(format!("\\noindent {}\n", text))
}

pub fn indent(text: &str) -> Fragment {
    Fragment::from(format!("\\indent {}\n", text))
}

pub fn bold(text: &str) -> Fragment {
    Fragment::from(format!("\\textbf{{{}}}\n", text))
}

pub fn underline(text: &str) -> Fragment {
    Fragment::from(format!("\\underline{{{}}}\n", text))
}

pub fn paragraph(label: &str, text: &str) -> Fragment {
    Fragment::from(format!("\\paragraph{{{}}}{{{}}}\n", label, text))
}

/// A paragraph numbered in the left margin. `step` advances the counter that
/// `number` references.
pub fn enum_paragraph(step: &Fragment, number: &Fragment, label: &str, text: &str) -> Fragment {
    Fragment::from(format!(
        "{}\n\\reversemarginpar\\marginnote{{\\textbf{{{} .}}}}[0.9cm]\\paragraph{{{}}}\\nonfrenchspacing {}\n",
        step, number, label, text
    ))
}

/// An `ARTICLE N - title` heading numbered by the referenced counter.
pub fn enum_heading(step: &Fragment, number: &Fragment, title: &str) -> Fragment {
    Fragment::from(format!(
        "{}\n\\subsubsection*{{\\bf ARTICLE {}\\ -\\ {}}}\n",
        step, number, title
    ))
}

/// Which side of the line a floating heading hugs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FloatSide {
    Left,
    Right,
}

/// A fixed-width bold box pushed to one side, followed by a line break.
pub fn float_heading(side: FloatSide, text: &str) -> Fragment {
    let (before, after) = match side {
        FloatSide::Right => ("\\hfill", "\\ "),
        FloatSide::Left => ("", "\\hfill\\ "),
    };
    Fragment::from(format!(
        "{}\\begin{{minipage}}{{\\dimexpr\\textwidth-8cm}}\n\
         \\parfillskip0pt\n\\parindent0pt\n\\fontdimen3\\font.25in\n\
         \\frenchspacing\n\\bf {}\n\\end{{minipage}}{}\
         \\linebreak \\ \\linebreak\\nonfrenchspacing\n",
        before, text, after
    ))
}

pub fn begin_document() -> Fragment {
    Fragment::from("\\begin{document}")
}

pub fn end_document() -> Fragment {
    Fragment::from("\\end{document}")
}
