use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CacheError {
    /// Cached payload could not be encoded or decoded.
    #[error("cache payload: {0}")]
    Codec(#[from] serde_json::Error),
    /// The backing store failed or is unreachable.
    #[error("cache backend unavailable: {0}")]
    Backend(String),
}
