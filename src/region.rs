// Content region selection.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use crate::error::BlogdocError;

static ARTICLE: LazyLock<Selector> = LazyLock::new(|| Selector::parse("article").unwrap());
static MAIN: LazyLock<Selector> = LazyLock::new(|| Selector::parse("main").unwrap());
static BODY: LazyLock<Selector> = LazyLock::new(|| Selector::parse("body").unwrap());
static PARAGRAPH: LazyLock<Selector> = LazyLock::new(|| Selector::parse("p").unwrap());

/// Extraction profile: which cleanup strategy runs before the keyword filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Profile {
    /// Keyword line filter only. Falls back to every `<p>` when the page
    /// has no `<article>` or `<main>`.
    #[default]
    KeywordFilter,
    /// Remove structural boilerplate (author boxes, related lists, landmarks)
    /// from the region first, then apply the keyword filter. Falls back to
    /// `<body>`.
    StructuralCleanup,
}

impl Profile {
    pub fn name(self) -> &'static str {
        match self {
            Profile::KeywordFilter => "keyword-filter",
            Profile::StructuralCleanup => "structural-cleanup",
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Profile {
    type Err = BlogdocError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "keyword-filter" | "keyword" => Ok(Profile::KeywordFilter),
            "structural-cleanup" | "structural" => Ok(Profile::StructuralCleanup),
            _ => Err(BlogdocError::UnknownProfile(s.to_string())),
        }
    }
}

/// Which selector produced the region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionKind {
    Article,
    Main,
    Body,
    /// Synthetic region: all `<p>` elements of the document.
    Paragraphs,
}

/// The subtree (or, for [`RegionKind::Paragraphs`], the element list) that
/// body text is extracted from.
#[derive(Debug, Clone)]
pub struct ContentRegion<'a> {
    pub kind: RegionKind,
    pub elements: Vec<ElementRef<'a>>,
}

impl<'a> ContentRegion<'a> {
    fn single(kind: RegionKind, element: ElementRef<'a>) -> Self {
        Self {
            kind,
            elements: vec![element],
        }
    }
}

/// Choose the content region. First match wins: `<article>`, `<main>`,
/// then the profile's fallback.
pub fn select_region(doc: &Html, profile: Profile) -> ContentRegion<'_> {
    if let Some(article) = doc.select(&ARTICLE).next() {
        return ContentRegion::single(RegionKind::Article, article);
    }
    if let Some(main) = doc.select(&MAIN).next() {
        return ContentRegion::single(RegionKind::Main, main);
    }
    match profile {
        Profile::KeywordFilter => ContentRegion {
            kind: RegionKind::Paragraphs,
            elements: doc.select(&PARAGRAPH).collect(),
        },
        Profile::StructuralCleanup => {
            let body = doc.select(&BODY).next().unwrap_or_else(|| doc.root_element());
            ContentRegion::single(RegionKind::Body, body)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kind_of(html: &str, profile: Profile) -> RegionKind {
        let doc = Html::parse_document(html);
        select_region(&doc, profile).kind
    }

    #[test]
    fn test_article_wins_over_main() {
        let html = "<html><body><main><article><p>x</p></article></main></body></html>";
        assert_eq!(kind_of(html, Profile::KeywordFilter), RegionKind::Article);
        assert_eq!(kind_of(html, Profile::StructuralCleanup), RegionKind::Article);
    }

    #[test]
    fn test_first_article_is_chosen() {
        let html = "<html><body><article id=\"a\"><p>one</p></article>\
                    <article id=\"b\"><p>two</p></article></body></html>";
        let doc = Html::parse_document(html);
        let region = select_region(&doc, Profile::KeywordFilter);
        assert_eq!(region.elements.len(), 1);
        assert_eq!(region.elements[0].value().attr("id"), Some("a"));
    }

    #[test]
    fn test_main_when_no_article() {
        let html = "<html><body><main><p>x</p></main></body></html>";
        assert_eq!(kind_of(html, Profile::KeywordFilter), RegionKind::Main);
    }

    #[test]
    fn test_fallback_depends_on_profile() {
        let html = "<html><body><div><p>a</p></div><p>b</p></body></html>";
        assert_eq!(kind_of(html, Profile::KeywordFilter), RegionKind::Paragraphs);
        assert_eq!(kind_of(html, Profile::StructuralCleanup), RegionKind::Body);

        let doc = Html::parse_document(html);
        let region = select_region(&doc, Profile::KeywordFilter);
        assert_eq!(region.elements.len(), 2);
    }

    #[test]
    fn test_profile_parse() {
        assert_eq!("structural".parse::<Profile>().unwrap(), Profile::StructuralCleanup);
        assert_eq!(
            "Keyword_Filter".parse::<Profile>().unwrap(),
            Profile::KeywordFilter
        );
        assert!("fuzzy".parse::<Profile>().is_err());
    }
}
