/// One unit of extracted text, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct Line {
    /// Whitespace-normalized, trimmed text. Never empty.
    pub text: String,
    /// Tag name of the block element the text came from (e.g. "p", "li", "div").
    pub tag: String,
}

impl Line {
    /// Create a line from raw text, returning `None` when nothing remains
    /// after whitespace normalization.
    pub fn new(text: &str, tag: &str) -> Option<Self> {
        let text = collapse_whitespace(text);
        if text.is_empty() {
            None
        } else {
            Some(Self {
                text,
                tag: tag.to_string(),
            })
        }
    }

    /// Returns `true` if `keyword` occurs anywhere in the text (case-sensitive).
    pub fn contains(&self, keyword: &str) -> bool {
        self.text.contains(keyword)
    }
}

/// Collapse every whitespace run (including no-break spaces and newlines)
/// to a single space and trim both ends.
pub(crate) fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
