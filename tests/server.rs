// Service endpoint tests with an in-memory fetcher.
#![cfg(feature = "server")]

use std::collections::HashMap;
use std::io::{Cursor, Read};
use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use blogdoc::fetch::Fetch;
use blogdoc::server::{app, AppState};
use blogdoc::FetchError;
use serde_json::json;
use tower::ServiceExt;

struct StubFetcher {
    pages: HashMap<String, String>,
}

impl Fetch for StubFetcher {
    fn fetch(&self, url: &str) -> Result<String, FetchError> {
        self.pages.get(url).cloned().ok_or_else(|| FetchError::Status {
            url: url.to_string(),
            status: 404,
        })
    }
}

const PAGE: &str = "<html><head><title>Autumn: Kyoto</title></head><body>\
                    <article>\
                    <p>First paragraph.</p>\
                    <div class=\"author\"><p>About me</p></div>\
                    <p>Second paragraph.</p>\
                    <p>Third paragraph.</p>\
                    </article></body></html>";

fn test_app() -> Router {
    let mut pages = HashMap::new();
    pages.insert("https://blog.example/post".to_string(), PAGE.to_string());
    app(AppState::new(Arc::new(StubFetcher { pages })))
}

fn post_json(body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .uri("/extract")
        .method("POST")
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap()
}

fn document_xml(bytes: &[u8]) -> String {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
    let mut xml = String::new();
    archive
        .by_name("word/document.xml")
        .unwrap()
        .read_to_string(&mut xml)
        .unwrap();
    xml
}

#[tokio::test]
async fn test_health_check() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/health")
                .method("GET")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["status"], "ok");
    assert_eq!(json["service"], "blogdoc");
    assert!(json["version"].is_string());
}

#[tokio::test]
async fn test_extract_returns_docx() {
    let response = test_app()
        .oneshot(post_json(json!({ "url": "https://blog.example/post" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let headers = response.headers();
    assert_eq!(
        headers.get("content-type").and_then(|v| v.to_str().ok()),
        Some("application/vnd.openxmlformats-officedocument.wordprocessingml.document")
    );
    let disposition = headers
        .get("content-disposition")
        .and_then(|v| v.to_str().ok())
        .unwrap()
        .to_string();
    assert!(disposition.starts_with("attachment; filename=\"Autumn Kyoto.docx\""));

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let xml = document_xml(&body);
    assert!(xml.contains("Autumn: Kyoto"));
    assert!(xml.contains("First paragraph."));
    assert!(xml.contains("Third paragraph."));
    // structural-cleanup is the service default: the author box is gone
    assert!(!xml.contains("About me"));
}

#[tokio::test]
async fn test_extract_applies_cuts() {
    let response = test_app()
        .oneshot(post_json(json!({
            "url": "https://blog.example/post",
            "head_cut": 1,
            "tail_cut": 1,
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let xml = document_xml(&body);
    assert!(!xml.contains("First paragraph."));
    assert!(xml.contains("Second paragraph."));
    assert!(!xml.contains("Third paragraph."));
}

#[tokio::test]
async fn test_fetch_failure_is_json_400() {
    let response = test_app()
        .oneshot(post_json(json!({ "url": "https://blog.example/missing" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert!(json["error"].as_str().unwrap().contains("404"));
}

#[tokio::test]
async fn test_malformed_body_is_json_400() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/extract")
                .method("POST")
                .header("content-type", "application/json")
                .body(Body::from("{\"nope\": true}"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert!(json["error"].is_string());
}

#[tokio::test]
async fn test_unknown_profile_is_json_400() {
    let response = test_app()
        .oneshot(post_json(json!({
            "url": "https://blog.example/post",
            "profile": "magic",
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["error"], "unknown profile: magic");
}
