use std::sync::LazyLock;

use regex::Regex;

use crate::locale::Locale;

/// Characters that are not allowed in file names on common platforms.
static FORBIDDEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#"[\\/:*?"<>|]"#).unwrap());

/// Strip `\ / : * ? " < > |` from `title` and trim the result; fall back to
/// the locale's default stem when nothing is left.
pub fn sanitize_filename(title: &str, locale: Locale) -> String {
    let stripped = FORBIDDEN.replace_all(title, "");
    let stripped = stripped.trim();
    if stripped.is_empty() {
        locale.filename_fallback().to_string()
    } else {
        stripped.to_string()
    }
}

/// File name for the downloadable document: `{sanitized title}.docx`.
pub fn docx_filename(title: &str, locale: Locale) -> String {
    format!("{}.docx", sanitize_filename(title, locale))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_forbidden_characters() {
        assert_eq!(sanitize_filename("A/B:C", Locale::English), "ABC");
        assert_eq!(
            sanitize_filename(r#"a\b*c?d"e<f>g|h"#, Locale::English),
            "abcdefgh"
        );
    }

    #[test]
    fn test_empty_result_falls_back() {
        assert_eq!(sanitize_filename("???", Locale::English), "article");
        assert_eq!(sanitize_filename("???", Locale::Japanese), "記事");
        assert_eq!(sanitize_filename("", Locale::Japanese), "記事");
        assert_eq!(sanitize_filename(" / ", Locale::English), "article");
    }

    #[test]
    fn test_keeps_unicode() {
        assert_eq!(
            sanitize_filename("ブログ：記事/第1回", Locale::Japanese),
            "ブログ：記事第1回"
        );
    }

    #[test]
    fn test_docx_filename() {
        assert_eq!(docx_filename("Hello: World", Locale::English), "Hello World.docx");
        assert_eq!(docx_filename("|", Locale::Japanese), "記事.docx");
    }
}
