use thiserror::Error;

/// Failure of one fetch attempt against the listings service.
///
/// Never surfaced to observers directly; the coordinator collapses any of
/// these into `Status::Error` and logs the detail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("invalid endpoint url: {0}")]
    InvalidUrl(String),
    #[error("http status {0}")]
    HttpStatus(u16),
    #[error("request timed out")]
    Timeout,
    #[error("network error: {0}")]
    Network(String),
    #[error("malformed listings payload: {0}")]
    Decode(String),
}
