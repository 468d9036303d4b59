//! Input clean-up shared by both matchers.

/// Rewrite raw input into a single-space separated token stream.
///
/// Commas become spaces, whitespace runs collapse into one space and the
/// result is trimmed. Returns `None` when nothing is left.
pub fn normalize(data: &str) -> Option<String> {
    let normalized = data
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    if normalized.is_empty() {
        None
    } else {
        Some(normalized)
    }
}

/// Drop every delimiter the decimal notation has no use for.
///
/// Only ASCII alphanumerics, spaces, `.` and `-` survive. The result is
/// normalized again, so a stripped mark between two spaces does not leave a
/// double space behind.
pub fn strip_delimiters(normalized: &str) -> Option<String> {
    let stripped: String = normalized
        .chars()
        .filter(|&c| c.is_ascii_alphanumeric() || matches!(c, ' ' | '.' | '-'))
        .collect();
    normalize(&stripped)
}
