//! Client error types.

use thiserror::Error;

/// Errors from calls against the backend API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Non-2xx response. `message` is the backend's `{"error": ...}` text
    /// when the body had that shape, otherwise the raw body.
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// Transport failure, including a body that failed to decode.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl ApiError {
    pub fn http(status: u16, message: impl Into<String>) -> Self {
        ApiError::Http {
            status,
            message: message.into(),
        }
    }

    /// The HTTP status code, when the server answered at all.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            ApiError::Network(_) => None,
        }
    }

    /// True for 401/403, the signal to drop the session and show the login
    /// page again.
    pub fn is_auth(&self) -> bool {
        matches!(self.status_code(), Some(401) | Some(403))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_display() {
        let err = ApiError::http(404, "Produk tidak ditemukan");
        assert_eq!(err.to_string(), "HTTP 404: Produk tidak ditemukan");
        assert_eq!(err.status_code(), Some(404));
        assert!(!err.is_auth());
    }

    #[test]
    fn test_is_auth() {
        assert!(ApiError::http(401, "token kadaluarsa").is_auth());
        assert!(ApiError::http(403, "akses ditolak").is_auth());
        assert!(!ApiError::http(500, "boom").is_auth());
    }
}
