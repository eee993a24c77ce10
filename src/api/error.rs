use super::types::{ApiErrorData, ErrorCode};
use thiserror::Error;

/// Transport-level failures of the REST client. These never reach the form:
/// [`ClientError::into_api_error`] folds them into the API error payload.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid base url: {0}")]
    BaseUrl(#[from] url::ParseError),
    #[error("failed to build http client: {0}")]
    Build(String),
    #[error("request timed out")]
    Timeout,
    #[error("unable to reach the server: {0}")]
    Network(String),
    #[error("failed to decode response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ClientError::Timeout
        } else if err.is_decode() || err.is_body() {
            ClientError::Decode(err.to_string())
        } else {
            ClientError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Decode(err.to_string())
    }
}

impl ClientError {
    /// User-facing error payload for this failure.
    #[must_use]
    pub fn into_api_error(self) -> ApiErrorData {
        match self {
            ClientError::Timeout => ApiErrorData::new(
                "Request Timeout",
                ErrorCode::RequestTimeout,
                "Request timed out. Please try again.",
            ),
            ClientError::Decode(_) => ApiErrorData::new(
                "Bad Gateway",
                ErrorCode::BadGateway,
                "The server sent an unexpected response. Please try again.",
            ),
            ClientError::BaseUrl(_) | ClientError::Build(_) | ClientError::Network(_) => {
                ApiErrorData::new(
                    "Service Outage",
                    ErrorCode::ServiceOutage,
                    "Unable to reach the server. Please try again.",
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_maps_to_request_timeout() {
        let error = ClientError::Timeout.into_api_error();
        assert_eq!(error.code, ErrorCode::RequestTimeout);
        assert!(!error.message.is_empty());
    }

    #[test]
    fn network_failure_maps_to_service_outage() {
        let error = ClientError::Network("connection refused".to_string()).into_api_error();
        assert_eq!(error.code, ErrorCode::ServiceOutage);
        assert!(!error.message.contains("connection refused"));
    }
}
