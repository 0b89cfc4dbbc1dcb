//! Error types for Smartsheet API calls.

use thiserror::Error;

/// Errors returned by [`crate::SmartsheetClient`].
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ClientError {
    /// Transport failure, timeout, or an undecodable response body.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The access token could not be used as an HTTP header value.
    #[error("API token contains characters not allowed in an HTTP header")]
    InvalidToken,

    /// The API answered with a non-success status.
    #[error("Smartsheet API error ({status}){}: {message}", code_suffix(.code))]
    Api {
        /// HTTP status code.
        status: u16,
        /// Smartsheet `errorCode`, when the body carried one.
        code: Option<i64>,
        /// Smartsheet `message`, or the raw body.
        message: String,
    },

    /// The API rejected the request with `429 Too Many Requests`.
    #[error("Smartsheet API rate limit exceeded, retry after {retry_after_secs} seconds")]
    RateLimited {
        /// Seconds suggested by the `Retry-After` header.
        retry_after_secs: u64,
    },
}

impl ClientError {
    /// HTTP status of the failed call, when the server answered at all.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::RateLimited { .. } => Some(429),
            Self::Network(err) => err.status().map(|s| s.as_u16()),
            Self::InvalidToken => None,
        }
    }
}

fn code_suffix(code: &Option<i64>) -> String {
    code.map(|c| format!(" code {c}")).unwrap_or_default()
}

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_display_includes_code_when_present() {
        let err = ClientError::Api {
            status: 404,
            code: Some(1006),
            message: "Not Found".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Smartsheet API error (404) code 1006: Not Found"
        );

        let err = ClientError::Api {
            status: 502,
            code: None,
            message: "Bad Gateway".to_string(),
        };
        assert_eq!(err.to_string(), "Smartsheet API error (502): Bad Gateway");
    }

    #[test]
    fn status_reports_http_code() {
        assert_eq!(ClientError::RateLimited { retry_after_secs: 5 }.status(), Some(429));
        assert_eq!(ClientError::InvalidToken.status(), None);
    }
}
