//! Error types for catalog operations.

use thiserror::Error;

/// Errors that can occur while talking to the ISS catalog.
///
/// These never escape the suggestion operations: `run_search` and
/// `run_bulk_load` log the error and treat the page as empty, so callers
/// observe a failed fetch as "no results".
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The request could not be sent or the response body could not be
    /// read. Covers timeouts.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The catalog answered with a non-success HTTP status.
    #[error("catalog returned HTTP {status}")]
    Status {
        /// The status code returned by the catalog
        status: reqwest::StatusCode,
    },

    /// The response body was not the expected JSON shape.
    #[error("failed to decode catalog response: {0}")]
    Decode(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_display() {
        let error = CatalogError::Status {
            status: reqwest::StatusCode::SERVICE_UNAVAILABLE,
        };
        assert_eq!(
            format!("{}", error),
            "catalog returned HTTP 503 Service Unavailable"
        );
    }

    #[test]
    fn test_decode_error_display() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let error = CatalogError::Decode(json_err);
        assert!(format!("{}", error).starts_with("failed to decode catalog response"));
    }
}
