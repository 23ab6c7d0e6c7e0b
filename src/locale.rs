use std::fmt;
use std::str::FromStr;

use crate::error::BlogdocError;

/// Target-site locale. Selects the default exclude keywords and the
/// fallback literals used when extraction comes up empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    #[default]
    Japanese,
    English,
}

impl Locale {
    /// Title used when the document declares none.
    pub fn title_fallback(self) -> &'static str {
        match self {
            Locale::Japanese => "タイトル不明",
            Locale::English => "Title unknown",
        }
    }

    /// Body text used when every line was filtered or trimmed away.
    pub fn empty_placeholder(self) -> &'static str {
        match self {
            Locale::Japanese => "（本文が抽出できませんでした）",
            Locale::English => "(content could not be extracted)",
        }
    }

    /// File stem used when the sanitized title is empty.
    pub fn filename_fallback(self) -> &'static str {
        match self {
            Locale::Japanese => "記事",
            Locale::English => "article",
        }
    }

    /// Prefix of the title line in the editable full text.
    pub fn title_marker(self) -> &'static str {
        match self {
            Locale::Japanese => "【タイトル】",
            Locale::English => "[Title] ",
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Locale::Japanese => "ja",
            Locale::English => "en",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = BlogdocError;

    /// Accepts the short code or the language name, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ja" | "jp" | "japanese" => Ok(Locale::Japanese),
            "en" | "english" => Ok(Locale::English),
            _ => Err(BlogdocError::UnknownLocale(s.to_string())),
        }
    }
}
