// Keyword-based boilerplate line filter.

use crate::line::Line;

/// Keep only the lines that contain none of `keywords` as a substring.
///
/// Matching is case-sensitive with no normalization, and a line is either
/// kept whole or dropped whole. Relative order is preserved.
pub fn filter_lines<S: AsRef<str>>(lines: Vec<Line>, keywords: &[S]) -> Vec<Line> {
    if keywords.is_empty() {
        return lines;
    }
    lines
        .into_iter()
        .filter(|line| !is_boilerplate(line, keywords))
        .collect()
}

/// Returns `true` if any keyword occurs in the line's text.
pub fn is_boilerplate<S: AsRef<str>>(line: &Line, keywords: &[S]) -> bool {
    keywords
        .iter()
        .map(|kw| kw.as_ref())
        .any(|kw| !kw.is_empty() && line.contains(kw))
}
