//! JSON client for the HobbyHall REST API with a fixed timeout and bearer
//! authorization. Every call resolves to an [`ApiResponse`]: HTTP errors are
//! decoded from the error envelope and transport failures are folded into the
//! same payload, so callers only ever branch on success or failure.
//!
//! Tokens are attached from the client config and are never logged.

mod error;
mod types;

pub use error::ClientError;
pub use types::{ApiErrorData, ApiResponse, ErrorCode};

use crate::APP_USER_AGENT;
use reqwest::{header::AUTHORIZATION, Client, Method, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::{de::DeserializeOwned, Serialize};
use std::{fmt, sync::Arc, time::Duration};
use tracing::{debug, info_span, warn, Instrument};
use types::Envelope;
use ulid::Ulid;
use url::Url;

/// Default request timeout applied to every call.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
/// Header carrying the per-request correlation id.
pub const REQUEST_ID_HEADER: &str = "X-Request-Id";
/// Maximum number of error body characters surfaced to the UI.
const MAX_ERROR_CHARS: usize = 200;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl From<HttpMethod> for Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Put => Method::PUT,
            HttpMethod::Delete => Method::DELETE,
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        };
        formatter.write_str(name)
    }
}

/// Which bearer token a request is sent with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TokenScope {
    #[default]
    Application,
    Management,
}

#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub base_url: Url,
    pub access_token: SecretString,
    pub management_token: SecretString,
    pub timeout: Duration,
}

impl ClientConfig {
    /// # Errors
    /// Returns an error if `base_url` is not an absolute URL.
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        Ok(Self {
            base_url: Url::parse(base_url.trim())?,
            access_token: SecretString::default(),
            management_token: SecretString::default(),
            timeout: DEFAULT_TIMEOUT,
        })
    }

    #[must_use]
    pub fn with_access_token(mut self, token: SecretString) -> Self {
        self.access_token = token;
        self
    }

    #[must_use]
    pub fn with_management_token(mut self, token: SecretString) -> Self {
        self.management_token = token;
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[derive(Clone, Debug)]
pub struct RestClient {
    http: Client,
    config: Arc<ClientConfig>,
}

impl RestClient {
    /// # Errors
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        debug!(base_url = %config.base_url, timeout = ?config.timeout, "rest client configured");
        let http = Client::builder()
            .user_agent(APP_USER_AGENT)
            .timeout(config.timeout)
            .build()
            .map_err(|err| ClientError::Build(err.to_string()))?;

        Ok(Self {
            http,
            config: Arc::new(config),
        })
    }

    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Joins `path` onto the configured base URL, keeping any base path prefix.
    ///
    /// # Errors
    /// Returns an error if the joined URL is invalid.
    pub fn endpoint_url(&self, path: &str) -> Result<Url, ClientError> {
        Ok(Url::parse(&build_url_with_base(
            self.config.base_url.as_str(),
            path,
        ))?)
    }

    /// POSTs `body` with the application token.
    pub async fn post<B, T>(&self, path: &str, body: &B) -> ApiResponse<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.request(HttpMethod::Post, path, Some(body), TokenScope::Application)
            .await
    }

    /// GETs `path` with the application token.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResponse<T> {
        self.request::<(), T>(HttpMethod::Get, path, None, TokenScope::Application)
            .await
    }

    /// Sends a request and resolves it into a tagged response.
    pub async fn request<B, T>(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<&B>,
        scope: TokenScope,
    ) -> ApiResponse<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        match self.send(method, path, body, scope).await {
            Ok(response) => response,
            Err(err) => {
                warn!(%method, path, error = %err, "request failed");
                ApiResponse::Failure(err.into_api_error())
            }
        }
    }

    async fn send<B, T>(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<&B>,
        scope: TokenScope,
    ) -> Result<ApiResponse<T>, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.endpoint_url(path)?;
        let request_id = Ulid::new().to_string();

        let mut builder = self
            .http
            .request(method.into(), url.clone())
            .header(REQUEST_ID_HEADER, &request_id);

        let token = match scope {
            TokenScope::Application => &self.config.access_token,
            TokenScope::Management => &self.config.management_token,
        };
        if !token.expose_secret().is_empty() {
            builder = builder.header(AUTHORIZATION, format!("Bearer {}", token.expose_secret()));
        }

        if let Some(body) = body {
            builder = builder.json(body);
        }

        let span = info_span!(
            "hobbyhall.request",
            http.method = %method,
            url = %url,
            request_id = %request_id
        );
        let response = builder.send().instrument(span).await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        debug!(%status, request_id = %request_id, "response received");

        decode_envelope(status, &bytes)
    }
}

/// Builds a URL from an explicit base URL and the provided path.
fn build_url_with_base(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

/// Decodes a response body into a tagged response. Non-2xx bodies that are not
/// an error envelope become a failure built from the status line.
fn decode_envelope<T: DeserializeOwned>(
    status: StatusCode,
    body: &[u8],
) -> Result<ApiResponse<T>, ClientError> {
    match serde_json::from_slice::<Envelope<T>>(body) {
        Ok(envelope) => {
            if let Some(message) = &envelope.success_notification_message {
                debug!(notification = %message, "success notification");
            }
            Ok(envelope.into_response(|| error_from_status(status, b""))?)
        }
        Err(err) if status.is_success() => Err(ClientError::Decode(err.to_string())),
        Err(_) => Ok(ApiResponse::Failure(error_from_status(status, body))),
    }
}

fn error_from_status(status: StatusCode, body: &[u8]) -> ApiErrorData {
    ApiErrorData::new(
        status.canonical_reason().unwrap_or("Error"),
        ErrorCode::from(status.as_u16()),
        sanitize_body(&String::from_utf8_lossy(body)),
    )
}

/// Sanitizes HTTP error bodies for user-facing messages by trimming and truncating.
fn sanitize_body(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "Request failed.".to_string()
    } else {
        trimmed.chars().take(MAX_ERROR_CHARS).collect()
    }
}
