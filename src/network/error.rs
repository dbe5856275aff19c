use reqwest::StatusCode;
use thiserror::Error;

/// Bubble shown when the backend answers with a non-2xx status.
pub const SERVER_ERROR_NOTICE: &str = "Sorry, server returned an error.";
/// Bubble shown when a 2xx response is not JSON.
pub const UNEXPECTED_RESPONSE_NOTICE: &str = "Unexpected server response.";
/// Bubble shown when the request never completes or the payload is unusable.
pub const PROCESSING_ERROR_NOTICE: &str = "Sorry, there was an error processing your message.";

/// Everything that can go wrong talking to the sentiment backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Non-2xx status. The body is kept for logging only.
    #[error("server returned {status}")]
    Status { status: StatusCode, body: String },

    /// 2xx response whose content-type is not JSON.
    #[error("expected JSON but got content-type `{content_type}`")]
    UnexpectedContentType { content_type: String, body: String },

    /// The request did not complete.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// JSON body without a field the client needs.
    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// Fixed, user-facing text for a failed send.
    pub fn user_notice(&self) -> &'static str {
        match self {
            ApiError::Status { .. } => SERVER_ERROR_NOTICE,
            ApiError::UnexpectedContentType { .. } => UNEXPECTED_RESPONSE_NOTICE,
            ApiError::Transport(_) | ApiError::Decode(_) => PROCESSING_ERROR_NOTICE,
        }
    }

    /// Response body captured for diagnostics, if any.
    pub fn body(&self) -> Option<&str> {
        match self {
            ApiError::Status { body, .. } | ApiError::UnexpectedContentType { body, .. } => {
                Some(body)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notices_follow_error_class() {
        let status = ApiError::Status {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: "<html>boom</html>".into(),
        };
        assert_eq!(status.user_notice(), SERVER_ERROR_NOTICE);
        assert_eq!(status.body(), Some("<html>boom</html>"));

        let content_type = ApiError::UnexpectedContentType {
            content_type: "text/html".into(),
            body: "hello".into(),
        };
        assert_eq!(content_type.user_notice(), UNEXPECTED_RESPONSE_NOTICE);

        let decode: ApiError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert_eq!(decode.user_notice(), PROCESSING_ERROR_NOTICE);
        assert!(decode.body().is_none());
    }
}
