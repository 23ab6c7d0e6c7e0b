//! Blog article body extraction and `.docx` export.
//!
//! `blogdoc` picks the main content region of an HTML page, drops
//! boilerplate by structural selectors and exclude keywords, applies
//! user-chosen head/tail trims and packages the result as a Word document.
//!
//! # Quick start
//!
//! ```rust
//! use blogdoc::{extract, Config, Locale};
//!
//! let html = "<html><head><title>Post</title></head>\
//!             <body><article><p>Hello.</p><p>Related articles</p></article></body></html>";
//! let result = extract(html, &Config::new(Locale::English));
//! assert_eq!(result.title, "Post");
//! assert_eq!(result.body_text(), "Hello.");
//! ```

pub mod docx;
mod error;
#[cfg(feature = "fetch")]
pub mod fetch;
mod filename;
mod filter;
pub mod keywords;
mod line;
mod line_maker;
mod locale;
mod preprocess;
mod region;
mod result;
#[cfg(feature = "server")]
pub mod server;
mod title;
mod trim;

pub use error::{BlogdocError, DocumentBuildError, FetchError};
pub use filename::{docx_filename, sanitize_filename};
pub use filter::{filter_lines, is_boilerplate};
pub use line::Line;
pub use line_maker::ExtractionMode;
pub use locale::Locale;
pub use preprocess::BOILERPLATE_SELECTORS;
pub use region::{Profile, RegionKind};
pub use result::{EditedText, ExtractionResult};
pub use title::resolve_title;
pub use trim::trim_lines;

use std::fs;
use std::path::{Path, PathBuf};

use scraper::Html;

/// Per-run extraction parameters.
///
/// Defaults: Japanese locale with its keyword list, keyword-filter profile,
/// no head/tail cut.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct Config {
    pub head_cut: usize,
    pub tail_cut: usize,
    pub exclude_keywords: Vec<String>,
    pub profile: Profile,
    pub locale: Locale,
}

impl Default for Config {
    fn default() -> Self {
        Self::new(Locale::default())
    }
}

impl Config {
    /// Config for `locale`, seeded with its default exclude keywords.
    pub fn new(locale: Locale) -> Self {
        Self {
            head_cut: 0,
            tail_cut: 0,
            exclude_keywords: keywords::get_keywords(locale).to_vec(),
            profile: Profile::default(),
            locale,
        }
    }

    pub fn with_head_cut(mut self, n: usize) -> Self {
        self.head_cut = n;
        self
    }
    pub fn with_tail_cut(mut self, n: usize) -> Self {
        self.tail_cut = n;
        self
    }
    pub fn with_profile(mut self, profile: Profile) -> Self {
        self.profile = profile;
        self
    }
    /// Replace the exclude keyword list.
    pub fn with_exclude_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_keywords = keywords.into_iter().map(Into::into).collect();
        self
    }
    /// Append to the exclude keyword list.
    pub fn with_extra_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_keywords
            .extend(keywords.into_iter().map(Into::into));
        self
    }
}

/// Extract the title and body lines of an HTML document.
///
/// Never fails: a page with no recognizable content yields an empty line
/// list, which [`ExtractionResult::body_text`] renders as a placeholder.
pub fn extract(html: &str, config: &Config) -> ExtractionResult {
    let raw = Html::parse_document(html);
    extract_document(&raw, config)
}

/// [`extract`] on an already parsed document. `doc` is not modified.
pub fn extract_document(doc: &Html, config: &Config) -> ExtractionResult {
    let title = title::resolve_title(doc, config.locale);
    let cleaned = preprocess::clean(doc);
    let region = region::select_region(&cleaned, config.profile);

    let lines = line_maker::extract_lines(&region, config.profile);
    #[cfg(feature = "tracing")]
    tracing::debug!(region = ?region.kind, profile = %config.profile, lines = lines.len(), "extracted");

    let lines = filter::filter_lines(lines, config.exclude_keywords.as_slice());
    #[cfg(feature = "tracing")]
    tracing::debug!(lines = lines.len(), "after keyword filter");

    let lines = trim::trim_lines(lines, config.head_cut, config.tail_cut);
    #[cfg(feature = "tracing")]
    tracing::debug!(lines = lines.len(), head = config.head_cut, tail = config.tail_cut, "after trim");

    ExtractionResult::new(title, lines, config.locale)
}

/// A finished document ready to hand out for download.
#[derive(Debug, Clone)]
pub struct Download {
    pub filename: String,
    pub mime: &'static str,
    pub bytes: Vec<u8>,
}

impl Download {
    /// Build the document straight from an extraction result.
    pub fn from_result(result: &ExtractionResult) -> Result<Self, DocumentBuildError> {
        Self::build(&result.title, &result.body_text(), result.locale)
    }

    /// Build the document from a user-edited full text. A leading title
    /// marker line overrides `title`.
    pub fn from_edited(
        title: &str,
        edited: &str,
        locale: Locale,
    ) -> Result<Self, DocumentBuildError> {
        let parsed = EditedText::parse(edited, locale);
        let title = parsed
            .title
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| title.to_string());
        Self::build(&title, &parsed.body, locale)
    }

    /// Write the document to `target`. A directory target gets
    /// [`Download::filename`] inside it; missing parent directories are
    /// created. Returns the path written.
    pub fn write_to(&self, target: &Path) -> std::io::Result<PathBuf> {
        let path = if target.is_dir() {
            target.join(&self.filename)
        } else {
            target.to_path_buf()
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, &self.bytes)?;
        Ok(path)
    }

    fn build(title: &str, body: &str, locale: Locale) -> Result<Self, DocumentBuildError> {
        Ok(Self {
            filename: docx_filename(title, locale),
            mime: docx::DOCX_MIME,
            bytes: docx::build(title, body)?,
        })
    }
}

/// Fetch `url` and extract it. Any failure aborts the whole run.
#[cfg(feature = "fetch")]
pub fn fetch_and_extract(
    fetcher: &dyn fetch::Fetch,
    url: &str,
    config: &Config,
) -> Result<ExtractionResult, BlogdocError> {
    let html = fetcher.fetch(url)?;
    Ok(extract(&html, config))
}

/// One full run: fetch, extract, build the document.
#[cfg(feature = "fetch")]
pub fn convert(
    fetcher: &dyn fetch::Fetch,
    url: &str,
    config: &Config,
) -> Result<Download, BlogdocError> {
    let result = fetch_and_extract(fetcher, url, config)?;
    Ok(Download::from_result(&result)?)
}
