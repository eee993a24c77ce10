//! Response envelope shared by every HobbyHall REST endpoint.
//!
//! The API answers `{ "success": bool, "data": T }` on success and
//! `{ "success": false, "error": { "type", "code", "message" } }` on failure.
//! [`ApiResponse`] is the typed form callers match on.

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::fmt;

/// Error codes the HobbyHall API documents. Unknown codes are kept verbatim.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "u16", into = "u16")]
pub enum ErrorCode {
    BadRequest,
    Unauthorized,
    Forbidden,
    NotFound,
    MethodNotAllowed,
    RequestTimeout,
    TooManyRequests,
    InternalServerError,
    BadGateway,
    ServiceOutage,
    Other(u16),
}

impl ErrorCode {
    #[must_use]
    pub const fn as_u16(self) -> u16 {
        match self {
            ErrorCode::BadRequest => 400,
            ErrorCode::Unauthorized => 401,
            ErrorCode::Forbidden => 403,
            ErrorCode::NotFound => 404,
            ErrorCode::MethodNotAllowed => 405,
            ErrorCode::RequestTimeout => 408,
            ErrorCode::TooManyRequests => 429,
            ErrorCode::InternalServerError => 500,
            ErrorCode::BadGateway => 502,
            ErrorCode::ServiceOutage => 503,
            ErrorCode::Other(code) => code,
        }
    }
}

impl From<u16> for ErrorCode {
    fn from(code: u16) -> Self {
        match code {
            400 => ErrorCode::BadRequest,
            401 => ErrorCode::Unauthorized,
            403 => ErrorCode::Forbidden,
            404 => ErrorCode::NotFound,
            405 => ErrorCode::MethodNotAllowed,
            408 => ErrorCode::RequestTimeout,
            429 => ErrorCode::TooManyRequests,
            500 => ErrorCode::InternalServerError,
            502 => ErrorCode::BadGateway,
            503 => ErrorCode::ServiceOutage,
            other => ErrorCode::Other(other),
        }
    }
}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> Self {
        code.as_u16()
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.as_u16())
    }
}

/// Data on an error reported by the API, or synthesized locally.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorData {
    #[serde(rename = "type")]
    pub kind: String,
    pub code: ErrorCode,
    pub message: String,
}

impl ApiErrorData {
    pub fn new(kind: impl Into<String>, code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for ApiErrorData {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{} ({}): {}", self.kind, self.code, self.message)
    }
}

/// Tagged outcome of an API call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ApiResponse<T> {
    Success(T),
    Failure(ApiErrorData),
}

impl<T> ApiResponse<T> {
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, ApiResponse::Success(_))
    }

    /// Converts into a `Result`, keeping the error payload.
    ///
    /// # Errors
    /// Returns the error payload when the call failed.
    pub fn into_result(self) -> Result<T, ApiErrorData> {
        match self {
            ApiResponse::Success(data) => Ok(data),
            ApiResponse::Failure(error) => Err(error),
        }
    }

    pub fn map<U>(self, op: impl FnOnce(T) -> U) -> ApiResponse<U> {
        match self {
            ApiResponse::Success(data) => ApiResponse::Success(op(data)),
            ApiResponse::Failure(error) => ApiResponse::Failure(error),
        }
    }
}

/// Raw envelope as it appears on the wire.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Envelope<T> {
    pub success: bool,
    #[serde(default)]
    pub success_notification_message: Option<String>,
    pub data: Option<T>,
    pub error: Option<ApiErrorData>,
}

impl<T: DeserializeOwned> Envelope<T> {
    /// Resolves the envelope into a tagged response. A successful envelope
    /// without `data` is accepted for payload types that deserialize from
    /// `null`, such as `()`.
    pub(crate) fn into_response(
        self,
        fallback: impl FnOnce() -> ApiErrorData,
    ) -> Result<ApiResponse<T>, serde_json::Error> {
        if self.success {
            let data = match self.data {
                Some(data) => data,
                None => serde_json::from_value(serde_json::Value::Null)?,
            };
            Ok(ApiResponse::Success(data))
        } else {
            Ok(ApiResponse::Failure(self.error.unwrap_or_else(fallback)))
        }
    }
}
