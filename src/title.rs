use std::sync::LazyLock;

use scraper::{Html, Selector};

use crate::locale::Locale;

static TITLE: LazyLock<Selector> = LazyLock::new(|| Selector::parse("title").unwrap());

/// Return the document's `<title>` text, trimmed, or the locale fallback
/// when the element is missing or blank. Never returns an empty string.
///
/// Must run on the raw parse: [`crate::preprocess::clean`] drops `<head>`.
pub fn resolve_title(doc: &Html, locale: Locale) -> String {
    doc.select(&TITLE)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .filter(|title| !title.is_empty())
        .unwrap_or_else(|| locale.title_fallback().to_string())
}
