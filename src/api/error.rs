use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur when talking to the gateway API.
#[derive(Error, Debug)]
pub enum GatewayApiError {
    /// Invalid request parameters (HTTP 400)
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Invalid or missing auth token (HTTP 401)
    #[error("Unauthorized - authentication failed")]
    Unauthorized,

    /// Forbidden - permission denied (HTTP 403)
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Resource could not be resolved, either because the server returned
    /// 404 or because a name/ID reference matched zero or multiple entities.
    #[error("{0}")]
    NotFound(String),

    /// Server error from the gateway (HTTP 5xx)
    #[error("Server error ({0}): {1}")]
    ServerError(StatusCode, String),

    /// Network or connection error
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Unexpected response shape (missing envelope key, wrong type)
    #[error("Unexpected response from gateway: {0}")]
    UnexpectedResponse(String),

    /// Unknown or unexpected status code
    #[error("Unknown error ({0}): {1}")]
    Unknown(StatusCode, String),
}

impl GatewayApiError {
    /// Classify a non-success HTTP status and response body into an error.
    pub fn from_status(status: StatusCode, body: String) -> Self {
        match status {
            StatusCode::BAD_REQUEST => GatewayApiError::InvalidRequest(body),
            StatusCode::UNAUTHORIZED => GatewayApiError::Unauthorized,
            StatusCode::FORBIDDEN => GatewayApiError::Forbidden(body),
            StatusCode::NOT_FOUND => GatewayApiError::NotFound(format!(
                "Resource not found{}",
                if body.is_empty() {
                    String::new()
                } else {
                    format!(": {body}")
                }
            )),
            s if s.is_server_error() => GatewayApiError::ServerError(status, body),
            _ => GatewayApiError::Unknown(status, body),
        }
    }

    /// Returns true if this is a NotFound condition (404 or failed lookup).
    pub fn is_not_found(&self) -> bool {
        matches!(self, GatewayApiError::NotFound(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_not_found_status() {
        let err = GatewayApiError::from_status(StatusCode::NOT_FOUND, String::new());
        assert!(err.is_not_found());
    }

    #[test]
    fn classifies_server_errors() {
        for code in [500u16, 502, 503, 504] {
            let status = StatusCode::from_u16(code).unwrap();
            let err = GatewayApiError::from_status(status, "boom".to_string());
            assert!(matches!(err, GatewayApiError::ServerError(_, _)));
        }
    }

    #[test]
    fn classifies_auth_failures() {
        let err = GatewayApiError::from_status(StatusCode::UNAUTHORIZED, String::new());
        assert!(matches!(err, GatewayApiError::Unauthorized));
    }
}
