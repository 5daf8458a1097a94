//! Windows path backslash normalization.
//!
//! Values destined for path fields on backslash-separator platforms need
//! every unescaped backslash doubled so downstream quoting survives. A
//! backslash that is already part of a doubled pair is treated as escaped
//! and passed through untouched.
//!
//! All normalization is purely string-based; no filesystem access.

/// Double every unescaped backslash in `path`.
///
/// The scan walks left to right and consumes backslash runs pairwise: each
/// adjacent pair is treated as already escaped and emitted unchanged, and a
/// leftover unpaired backslash is doubled. A run of three backslashes thus
/// becomes four. Strings without backslashes are returned unchanged, and
/// strings containing only doubled pairs are a fixed point.
///
/// Total over all inputs, including a trailing unpaired backslash (doubled).
pub fn normalize_backslashes(path: &str) -> String {
    if !path.contains('\\') {
        return path.to_owned();
    }

    let mut normalized = String::with_capacity(path.len() * 2);
    let mut chars = path.chars().peekable();
    // Set when the previous character was emitted as the escape half of a
    // pair, so the next backslash passes through un-doubled.
    let mut previous_was_escape = false;

    while let Some(c) = chars.next() {
        if c != '\\' {
            normalized.push(c);
            previous_was_escape = false;
        } else if previous_was_escape {
            normalized.push('\\');
            previous_was_escape = false;
        } else if chars.peek() == Some(&'\\') {
            // First half of a pre-escaped pair
            normalized.push('\\');
            previous_was_escape = true;
        } else {
            // Lone backslash
            normalized.push_str("\\\\");
            previous_was_escape = false;
        }
    }

    normalized
}
