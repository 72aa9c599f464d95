//! Shared utility functions

use unicode_width::UnicodeWidthChar;

/// Fit a string into at most `max_cols` terminal columns.
///
/// Returns the string unchanged when it already fits. Otherwise truncates on
/// a character boundary and appends a single `…` so the cut is visible. Wide
/// characters (CJK etc.) count as two columns, matching how the terminal
/// renders them.
pub fn fit_to_width(s: &str, max_cols: usize) -> String {
    if max_cols == 0 {
        return String::new();
    }
    let total: usize = s.chars().map(|c| c.width().unwrap_or(0)).sum();
    if total <= max_cols {
        return s.to_string();
    }

    // Leave one column for the ellipsis.
    let budget = max_cols - 1;
    let mut used = 0;
    let mut out = String::new();
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_shorter_than_max() {
        assert_eq!(fit_to_width("hello", 10), "hello");
    }

    #[test]
    fn test_fit_exact_width_is_unchanged() {
        assert_eq!(fit_to_width("hello", 5), "hello");
    }

    #[test]
    fn test_fit_truncates_with_ellipsis() {
        assert_eq!(fit_to_width("hello world", 5), "hell…");
    }

    #[test]
    fn test_fit_counts_wide_characters_as_two_columns() {
        // Each character renders two columns wide, so three of them need six.
        assert_eq!(fit_to_width("日本語", 6), "日本語");
        assert_eq!(fit_to_width("日本語", 5), "日本…");
        // Budget of four columns only has room for one wide char plus the mark.
        assert_eq!(fit_to_width("日本語", 4), "日…");
    }

    #[test]
    fn test_fit_empty_string() {
        assert_eq!(fit_to_width("", 5), "");
    }

    #[test]
    fn test_fit_to_zero_columns() {
        assert_eq!(fit_to_width("hello", 0), "");
    }
}
