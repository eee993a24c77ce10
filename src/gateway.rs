//! Authentication gateway used by the sign-in form. The trait is the seam the
//! form depends on; [`RestGateway`] is the production implementation over the
//! HobbyHall REST API. Implementations must never log passwords, cookies or
//! reset nonces.

use crate::{
    api::{ApiResponse, RestClient},
    models::{
        CreateUserData, CreateUserParams, ForgotPasswordParams, LoginData, LoginParams,
        ResetPasswordParams,
    },
};
use secrecy::{ExposeSecret, SecretString};
use serde::de::IgnoredAny;
use std::future::Future;
use tracing::{debug, instrument};

pub const LOGIN_PATH: &str = "/login";
pub const USERS_PATH: &str = "/users";
pub const FORGOT_PASSWORD_PATH: &str = "/login/forgot-password";
pub const RESET_PASSWORD_PATH: &str = "/login/reset";

/// Account operations the sign-in form needs. Each call is single-shot and
/// resolves to a tagged result; none of them retry.
pub trait AuthGateway: Send + Sync {
    /// Logs in with email and password. `Some(true)` asks the server not to
    /// persist a login cookie; `None` leaves the field out of the request.
    fn login(
        &self,
        email: String,
        password: SecretString,
        suppress_cookie: Option<bool>,
    ) -> impl Future<Output = ApiResponse<LoginData>> + Send;

    fn create_account(
        &self,
        user_name: String,
        email: String,
        password: SecretString,
    ) -> impl Future<Output = ApiResponse<CreateUserData>> + Send;

    /// Requests a password reset email.
    fn forgot_password(&self, email: String) -> impl Future<Output = ApiResponse<()>> + Send;

    /// Completes a password reset with the nonce from the reset email.
    fn reset_password(
        &self,
        nonce: String,
        password: SecretString,
    ) -> impl Future<Output = ApiResponse<()>> + Send;
}

#[derive(Clone, Debug)]
pub struct RestGateway {
    client: RestClient,
}

impl RestGateway {
    #[must_use]
    pub fn new(client: RestClient) -> Self {
        Self { client }
    }
}

impl AuthGateway for RestGateway {
    #[instrument(name = "gateway.login", skip_all, fields(suppress_cookie = ?suppress_cookie))]
    async fn login(
        &self,
        email: String,
        password: SecretString,
        suppress_cookie: Option<bool>,
    ) -> ApiResponse<LoginData> {
        let params = LoginParams {
            email: Some(email),
            pw: Some(password.expose_secret().to_string()),
            cookie: None,
            suppress_saving_cookie: suppress_cookie,
        };
        let response = self.client.post(LOGIN_PATH, &params).await;
        debug!(success = response.is_success(), "login settled");
        response
    }

    #[instrument(name = "gateway.create_account", skip_all)]
    async fn create_account(
        &self,
        user_name: String,
        email: String,
        password: SecretString,
    ) -> ApiResponse<CreateUserData> {
        let params = CreateUserParams {
            user_name,
            email,
            password: password.expose_secret().to_string(),
        };
        let response = self.client.post(USERS_PATH, &params).await;
        debug!(success = response.is_success(), "create account settled");
        response
    }

    #[instrument(name = "gateway.forgot_password", skip_all)]
    async fn forgot_password(&self, email: String) -> ApiResponse<()> {
        let params = ForgotPasswordParams { email };
        self.client
            .post::<_, IgnoredAny>(FORGOT_PASSWORD_PATH, &params)
            .await
            .map(|_| ())
    }

    #[instrument(name = "gateway.reset_password", skip_all)]
    async fn reset_password(&self, nonce: String, password: SecretString) -> ApiResponse<()> {
        let params = ResetPasswordParams {
            nonce,
            pw: password.expose_secret().to_string(),
        };
        self.client
            .post::<_, IgnoredAny>(RESET_PASSWORD_PATH, &params)
            .await
            .map(|_| ())
    }
}
