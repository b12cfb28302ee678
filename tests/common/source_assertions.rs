/// Byte offset of each needle in `haystack`, searching for every needle only
/// after the end of the previous match. Panics with the full text when one is
/// missing.
pub fn positions(haystack: &str, needles: &[&str]) -> Vec<usize> {
    let mut from = 0;
    needles
        .iter()
        .map(|needle| {
            let at = haystack[from..]
                .find(needle)
                .map(|offset| from + offset)
                .unwrap_or_else(|| {
                    panic!(
                        "source should contain '{}' after offset {}, but was:\n{}",
                        needle, from, haystack
                    )
                });
            from = at + needle.len();
            at
        })
        .collect()
}

/// Assert that source text contains each needle, in the given order
#[macro_export]
macro_rules! assert_in_order {
    ($source:expr, $($needle:expr),+ $(,)?) => {
        let found = $crate::common::source_assertions::positions(&$source, &[$($needle),+]);
        assert!(
            found.windows(2).all(|w| w[0] < w[1]),
            "expected {:?} in order, found at offsets {:?}",
            [$($needle),+],
            found
        );
    };
}

/// Assert that source text does NOT contain a needle
#[macro_export]
macro_rules! assert_source_lacks {
    ($source:expr, $needle:expr) => {
        assert!(
            !$source.contains($needle),
            "source should NOT contain '{}', but it was found in:\n{}",
            $needle,
            $source
        );
    };
}
