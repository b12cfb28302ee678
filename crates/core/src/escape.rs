//! Text cleaning and conditional put helpers.
//!
//! [`clean`] runs an ordered substitution pass and then strips every
//! backslash, including the ones the pass itself introduced. A backslash
//! never survives cleaning, so cleaned text cannot open a control sequence.
//! Cleaning is not guaranteed to be idempotent: clean raw text exactly once.

/// Ordered substitutions applied before backslashes are stripped.
const SUBSTITUTIONS: [(char, &str); 9] = [
    ('^', "\\textasciicircum{}"),
    ('~', "\\textasciitilde{}"),
    ('{', "\\{"),
    ('}', "\\}"),
    ('_', "\\_"),
    ('%', "\\%"),
    ('$', "\\$"),
    ('&', "\\&"),
    ('#', "\\#"),
];

/// Cleans raw text for verbatim placement in generated source.
pub fn clean(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    let mut out = text.to_string();
    for (from, to) in SUBSTITUTIONS {
        if out.contains(from) {
            out = out.replace(from, to);
        }
    }
    out.retain(|c| c != '\\');
    out
}

/// [`clean`] for optional input; `None` cleans to the empty string.
pub fn clean_opt(text: Option<&str>) -> String {
    text.map(clean).unwrap_or_default()
}

pub fn put_if(condition: bool, text: &str) -> String {
    if condition { text.to_string() } else { String::new() }
}

pub fn put_if_else(condition: bool, when_true: &str, when_false: &str) -> String {
    let chosen = if condition { when_true } else { when_false };
    chosen.to_string()
}

pub fn cput_if(condition: bool, text: &str) -> String {
    if condition { clean(text) } else { String::new() }
}

pub fn cput_if_else(condition: bool, when_true: &str, when_false: &str) -> String {
    clean(if condition { when_true } else { when_false })
}
