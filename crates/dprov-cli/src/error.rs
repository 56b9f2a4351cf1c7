use thiserror::Error;

/// Login failure. The only fatal error after configuration: no
/// reconciliation step runs without a session.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("login request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("login rejected (HTTP {status}): {body}")]
    Rejected {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("malformed login response: no data.access_token in body")]
    MalformedResponse,
}

/// Failure of a schema API call. Never propagated past the
/// reconciler; it becomes a recorded outcome instead.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
}

impl ApiError {
    /// 400-class response. Used to reclassify a duplicate permission
    /// grant as already-present.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Status { status, .. } if status.is_client_error())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_error_classification() {
        let conflict = ApiError::Status {
            status: reqwest::StatusCode::BAD_REQUEST,
            body: String::new(),
        };
        assert!(conflict.is_client_error());

        let server = ApiError::Status {
            status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
            body: String::new(),
        };
        assert!(!server.is_client_error());
    }

    #[test]
    fn status_error_carries_body() {
        let err = ApiError::Status {
            status: reqwest::StatusCode::FORBIDDEN,
            body: "{\"errors\":[]}".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("403"));
        assert!(msg.contains("errors"));
    }
}
