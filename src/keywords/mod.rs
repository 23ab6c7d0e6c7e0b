//! Embedded default exclude-keyword lists, one per locale.

use std::sync::LazyLock;

use crate::locale::Locale;

/// All embedded keyword lists: (locale, file_contents).
const KEYWORD_LISTS: &[(Locale, &str)] = &[
    (Locale::Japanese, include_str!("Japanese.txt")),
    (Locale::English, include_str!("English.txt")),
];

static JAPANESE: LazyLock<Vec<String>> = LazyLock::new(|| parse_keywords(KEYWORD_LISTS[0].1));
static ENGLISH: LazyLock<Vec<String>> = LazyLock::new(|| parse_keywords(KEYWORD_LISTS[1].1));

/// Parse a keyword file: one literal per line, blank lines skipped.
///
/// Keywords are matched case-sensitively, so no case folding happens here.
/// Order and duplicates follow the file, minus repeats.
fn parse_keywords(contents: &str) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for line in contents.lines().map(str::trim).filter(|l| !l.is_empty()) {
        if !out.iter().any(|k| k == line) {
            out.push(line.to_string());
        }
    }
    out
}

/// Return the cached default keyword list for `locale`.
pub fn get_keywords(locale: Locale) -> &'static [String] {
    match locale {
        Locale::Japanese => &JAPANESE,
        Locale::English => &ENGLISH,
    }
}

/// Return the locales that ship a keyword list.
pub fn available_locales() -> Vec<Locale> {
    KEYWORD_LISTS.iter().map(|(locale, _)| *locale).collect()
}
