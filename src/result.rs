use crate::filename::docx_filename;
use crate::line::Line;
use crate::locale::Locale;

/// Title plus filtered lines from one extraction run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct ExtractionResult {
    pub title: String,
    pub lines: Vec<Line>,
    pub locale: Locale,
}

impl ExtractionResult {
    pub fn new(title: String, lines: Vec<Line>, locale: Locale) -> Self {
        Self {
            title,
            lines,
            locale,
        }
    }

    /// Lines joined with `\n` and trimmed, or the locale placeholder when
    /// nothing survived.
    pub fn body_text(&self) -> String {
        let joined = self
            .lines
            .iter()
            .map(|l| l.text.as_str())
            .collect::<Vec<_>>()
            .join("\n");
        let trimmed = joined.trim();
        if trimmed.is_empty() {
            self.locale.empty_placeholder().to_string()
        } else {
            trimmed.to_string()
        }
    }

    /// The editable full text: title marker line followed by the body.
    pub fn full_text(&self) -> String {
        format!(
            "{}{}\n{}",
            self.locale.title_marker(),
            self.title,
            self.body_text()
        )
    }

    pub fn filename(&self) -> String {
        docx_filename(&self.title, self.locale)
    }
}

/// A user-edited full text, split back into title and body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditedText {
    /// Title from a leading marker line, if the text has one.
    pub title: Option<String>,
    pub body: String,
}

impl EditedText {
    /// Split `text` on its first line when that line carries the locale's
    /// title marker. Otherwise the whole text is body.
    pub fn parse(text: &str, locale: Locale) -> Self {
        let text = text.trim_start_matches('\u{feff}');
        let (first, rest) = match text.split_once('\n') {
            Some((first, rest)) => (first, rest),
            None => (text, ""),
        };
        // The marker may have lost its trailing space in editing.
        let marker = locale.title_marker().trim_end();
        match first.trim_end_matches('\r').strip_prefix(marker) {
            Some(title) => Self {
                title: Some(title.trim().to_string()),
                body: rest.to_string(),
            },
            None => Self {
                title: None,
                body: text.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn result(lines: &[&str], locale: Locale) -> ExtractionResult {
        ExtractionResult::new(
            "Post".to_string(),
            lines.iter().filter_map(|t| Line::new(t, "p")).collect(),
            locale,
        )
    }

    #[test]
    fn test_body_text_joins_lines() {
        let r = result(&["one", "two"], Locale::English);
        assert_eq!(r.body_text(), "one\ntwo");
    }

    #[test]
    fn test_body_text_placeholder() {
        assert_eq!(
            result(&[], Locale::Japanese).body_text(),
            "（本文が抽出できませんでした）"
        );
        assert_eq!(
            result(&[], Locale::English).body_text(),
            "(content could not be extracted)"
        );
    }

    #[test]
    fn test_full_text_has_marker() {
        let r = result(&["body"], Locale::Japanese);
        assert_eq!(r.full_text(), "【タイトル】Post\nbody");
        let r = result(&["body"], Locale::English);
        assert_eq!(r.full_text(), "[Title] Post\nbody");
    }

    #[test]
    fn test_edited_round_trip() {
        let r = result(&["a", "b"], Locale::Japanese);
        let edited = EditedText::parse(&r.full_text(), Locale::Japanese);
        assert_eq!(edited.title.as_deref(), Some("Post"));
        assert_eq!(edited.body, "a\nb");
    }

    #[test]
    fn test_edited_without_marker() {
        let edited = EditedText::parse("just text\nmore", Locale::English);
        assert_eq!(edited.title, None);
        assert_eq!(edited.body, "just text\nmore");
    }

    #[test]
    fn test_edited_user_changed_title() {
        let edited = EditedText::parse("[Title] New name\r\nbody", Locale::English);
        assert_eq!(edited.title.as_deref(), Some("New name"));
        assert_eq!(edited.body, "body");
    }

    #[test]
    fn test_edited_marker_without_trailing_space() {
        let edited = EditedText::parse("[Title]Foo\nbody", Locale::English);
        assert_eq!(edited.title.as_deref(), Some("Foo"));
        assert_eq!(edited.body, "body");

        let edited = EditedText::parse("[Title]\nbody", Locale::English);
        assert_eq!(edited.title.as_deref(), Some(""));
        assert_eq!(edited.body, "body");
    }
}
