use thiserror::Error;

/// Failure to retrieve raw markup for a URL.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },
    #[error("request to {url} timed out after {seconds}s")]
    Timeout { url: String, seconds: u64 },
    #[error("{url} returned HTTP status {status}")]
    Status { url: String, status: u16 },
    #[error("network error fetching {url}: {reason}")]
    Network { url: String, reason: String },
    #[error("could not build HTTP client: {0}")]
    Client(String),
}

/// Failure while serializing the output document.
#[derive(Debug, Error)]
pub enum DocumentBuildError {
    #[error("zip error: {0}")]
    Zip(#[from] zip::result::ZipError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum BlogdocError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Build(#[from] DocumentBuildError),
    #[error("unknown locale: {0}")]
    UnknownLocale(String),
    #[error("unknown profile: {0}")]
    UnknownProfile(String),
}
