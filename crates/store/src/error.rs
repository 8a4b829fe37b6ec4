//! Error taxonomy for the store boundary.

/// Errors from the store boundary.
///
/// An absent row is never an error: single-row fetches report it as
/// `Ok(None)`. Everything here is surfaced to the caller unmodified --
/// no retries, no swallowing.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The store returned a non-2xx status code (auth failure,
    /// constraint violation, malformed request).
    #[error("store API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// A row could not be decoded into the expected shape.
    #[error("failed to decode store row: {0}")]
    Decode(#[from] serde_json::Error),

    /// A fetch the caller expected to match at most one row matched
    /// several.
    #[error("single-row fetch from {resource} matched {count} rows")]
    MultipleRows { resource: String, count: usize },

    /// An insert with `return=representation` came back empty.
    #[error("insert into {resource} returned no representation")]
    EmptyRepresentation { resource: String },

    /// Required configuration is missing or malformed. Callers should
    /// treat this as fatal at process start.
    #[error("store configuration error: {0}")]
    Config(String),
}

/// Convenience alias used throughout the workspace.
pub type StoreResult<T> = Result<T, StoreError>;
