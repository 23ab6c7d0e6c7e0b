//! HTTP service: `POST /extract` returns the `.docx` for a URL.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Json, State},
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::fetch::Fetch;
use crate::{convert, BlogdocError, Config, Download, Locale, Profile};

/// Largest head/tail cut accepted from a client.
pub const MAX_CUT: usize = 100;

/// Request payload for the extraction endpoint.
#[derive(Debug, Deserialize)]
pub struct ExtractRequest {
    pub url: String,
    #[serde(default)]
    pub head_cut: usize,
    #[serde(default)]
    pub tail_cut: usize,
    /// Defaults to `structural-cleanup`.
    pub profile: Option<String>,
    /// Defaults to `ja`.
    pub locale: Option<String>,
}

impl ExtractRequest {
    fn to_config(&self) -> Result<Config, AppError> {
        let locale = match &self.locale {
            Some(s) => s.parse::<Locale>()?,
            None => Locale::default(),
        };
        let profile = match &self.profile {
            Some(s) => s.parse::<Profile>()?,
            None => Profile::StructuralCleanup,
        };
        if self.head_cut > MAX_CUT || self.tail_cut > MAX_CUT {
            return Err(AppError::BadRequest(format!(
                "head_cut and tail_cut must be at most {MAX_CUT}"
            )));
        }
        Ok(Config::new(locale)
            .with_profile(profile)
            .with_head_cut(self.head_cut)
            .with_tail_cut(self.tail_cut))
    }
}

/// Standard error response body.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug)]
pub enum AppError {
    Blogdoc(BlogdocError),
    BadRequest(String),
    /// The blocking worker panicked or was cancelled.
    Worker(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let error = match self {
            AppError::Blogdoc(e) => e.to_string(),
            AppError::BadRequest(msg) | AppError::Worker(msg) => msg,
        };
        tracing::warn!(%error, "extraction request failed");
        (StatusCode::BAD_REQUEST, Json(ErrorResponse { error })).into_response()
    }
}

impl From<BlogdocError> for AppError {
    fn from(err: BlogdocError) -> Self {
        AppError::Blogdoc(err)
    }
}

impl From<JsonRejection> for AppError {
    fn from(err: JsonRejection) -> Self {
        AppError::BadRequest(err.body_text())
    }
}

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub fetcher: Arc<dyn Fetch>,
}

impl AppState {
    pub fn new(fetcher: Arc<dyn Fetch>) -> Self {
        Self { fetcher }
    }
}

/// Build the application router.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/extract", post(extract_handler))
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Fetch, extract and return the document as an attachment.
pub async fn extract_handler(
    State(state): State<AppState>,
    payload: Result<Json<ExtractRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(request) = payload?;
    let config = request.to_config()?;
    tracing::info!(url = %request.url, profile = %config.profile, "extract request");

    let fetcher = Arc::clone(&state.fetcher);
    let url = request.url;
    let download = tokio::task::spawn_blocking(move || convert(fetcher.as_ref(), &url, &config))
        .await
        .map_err(|e| AppError::Worker(e.to_string()))??;

    Ok(download_response(download))
}

fn download_response(download: Download) -> Response {
    let disposition = content_disposition(&download.filename);
    let mut response = (
        StatusCode::OK,
        [(header::CONTENT_TYPE, HeaderValue::from_static(download.mime))],
        download.bytes,
    )
        .into_response();
    if let Ok(value) = HeaderValue::from_str(&disposition) {
        response
            .headers_mut()
            .insert(header::CONTENT_DISPOSITION, value);
    }
    response
}

/// `attachment` disposition with an ASCII fallback name and the UTF-8 name
/// in `filename*` (RFC 6266).
fn content_disposition(filename: &str) -> String {
    let ascii: String = filename
        .chars()
        .filter(|c| c.is_ascii_graphic() || *c == ' ')
        .filter(|c| *c != '"' && *c != '\\' && *c != ';')
        .collect();
    let stem = ascii.strip_suffix(".docx").unwrap_or(&ascii).trim();
    let ascii = if stem.is_empty() {
        "article.docx".to_string()
    } else {
        format!("{stem}.docx")
    };
    format!(
        "attachment; filename=\"{ascii}\"; filename*=UTF-8''{}",
        urlencoding::encode(filename)
    )
}

/// Health check endpoint.
pub async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": "blogdoc",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_disposition_encodes_utf8_name() {
        let value = content_disposition("a b/記.docx");
        assert!(value.ends_with("filename*=UTF-8''a%20b%2F%E8%A8%98.docx"));
    }

    #[test]
    fn test_content_disposition_ascii_fallback() {
        let value = content_disposition("記事.docx");
        assert!(value.starts_with("attachment; filename=\"article.docx\""));
        assert!(value.ends_with("filename*=UTF-8''%E8%A8%98%E4%BA%8B.docx"));

        let value = content_disposition("My Post.docx");
        assert!(value.starts_with("attachment; filename=\"My Post.docx\""));
    }

    #[test]
    fn test_request_defaults() {
        let request: ExtractRequest =
            serde_json::from_str(r#"{"url": "https://example.com"}"#).unwrap();
        let config = request.to_config().unwrap();
        assert_eq!(config.profile, Profile::StructuralCleanup);
        assert_eq!(config.locale, Locale::Japanese);
        assert_eq!((config.head_cut, config.tail_cut), (0, 0));
    }

    #[test]
    fn test_request_rejects_large_cut() {
        let request: ExtractRequest =
            serde_json::from_str(r#"{"url": "https://example.com", "head_cut": 101}"#).unwrap();
        assert!(matches!(request.to_config(), Err(AppError::BadRequest(_))));
    }

    #[test]
    fn test_request_rejects_unknown_locale() {
        let request: ExtractRequest =
            serde_json::from_str(r#"{"url": "https://example.com", "locale": "xx"}"#).unwrap();
        assert!(matches!(
            request.to_config(),
            Err(AppError::Blogdoc(BlogdocError::UnknownLocale(_)))
        ));
    }
}
