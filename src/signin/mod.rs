//! Sign-in, sign-up and password-reset form controller.
//!
//! The controller owns the form state inside a `watch` channel: mutators
//! update it in place and every subscriber sees the new snapshot, from which
//! the presentation layer reads the derived flags on [`FormState`].
//!
//! ## Submit
//!
//! `submit` dispatches on the current mode to one gateway call. Only one call
//! is ever in flight: a submit while a request is outstanding, or after a
//! terminal outcome (signed up, logged in, reset requested), does nothing.
//! Results are applied when the call settles even if the mode has changed in
//! the meantime. The call runs on its own task, so dropping the `submit`
//! future does not cancel it, and there is no retry.
//!
//! Sign-in failures are replaced by a generic message so the form never
//! reveals whether the email or the password was wrong. Sign-up and reset
//! failures are shown as the gateway reported them.

pub mod navigation;
mod state;

pub use navigation::{MemoryHistory, Navigator, PathName};
pub use state::{FormMode, FormState};

use crate::{
    api::{ApiErrorData, ApiResponse, ErrorCode},
    gateway::AuthGateway,
};
use secrecy::SecretString;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, info, warn};

pub const INVALID_LOGIN_MESSAGE: &str =
    "Invalid login. Please confirm your email and password are correct.";
pub const MISSING_RESET_EMAIL_MESSAGE: &str =
    "Please provide your email to request a password reset.";

pub struct SignInController<G, N> {
    state: Arc<watch::Sender<FormState>>,
    gateway: Arc<G>,
    navigator: N,
}

impl<G, N: Clone> Clone for SignInController<G, N> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            gateway: Arc::clone(&self.gateway),
            navigator: self.navigator.clone(),
        }
    }
}

impl<G, N> SignInController<G, N>
where
    G: AuthGateway + 'static,
    N: Navigator,
{
    /// Creates the controller with the mode taken from the navigator's
    /// current path.
    pub fn new(gateway: G, navigator: N) -> Self {
        let mode = FormMode::from_path(&navigator.current_path());
        debug!(mode = mode.label(), "sign-in form created");
        let (state, _) = watch::channel(FormState::new(mode));

        Self {
            state: Arc::new(state),
            gateway: Arc::new(gateway),
            navigator,
        }
    }

    /// Receiver that observes every state change.
    pub fn subscribe(&self) -> watch::Receiver<FormState> {
        self.state.subscribe()
    }

    /// Current state.
    pub fn snapshot(&self) -> FormState {
        self.state.borrow().clone()
    }

    pub fn mode(&self) -> FormMode {
        self.state.borrow().mode
    }

    pub fn set_user_name(&self, value: impl Into<String>) {
        let value = value.into();
        self.state.send_modify(|state| state.user_name = value);
    }

    pub fn set_email(&self, value: impl Into<String>) {
        let value = value.into();
        self.state.send_modify(|state| state.email = value);
    }

    pub fn set_password(&self, value: SecretString) {
        self.state.send_modify(|state| state.password = value);
    }

    /// Input fields report whether any of them currently shows an error.
    pub fn set_field_error_state(&self, has_error: bool) {
        self.state
            .send_if_modified(|state| replace_if_changed(&mut state.has_field_error, has_error));
    }

    pub fn toggle_remember_me(&self) {
        self.state
            .send_modify(|state| state.remember_me = !state.remember_me);
    }

    pub fn set_error(&self, error: Option<ApiErrorData>) {
        self.state.send_modify(|state| state.error = error);
    }

    /// Flips between sign-up and sign-in. From the reset screen this lands on
    /// sign-up; it never enters reset mode.
    pub fn toggle_sign_up_mode(&self) {
        let next = match self.mode() {
            FormMode::SignUp => FormMode::SignIn,
            FormMode::SignIn | FormMode::ResetPassword => FormMode::SignUp,
        };
        self.switch_mode(next);
    }

    pub fn start_reset_password_flow(&self) {
        self.switch_mode(FormMode::ResetPassword);
    }

    fn switch_mode(&self, mode: FormMode) {
        self.navigator.push_path(mode.path());
        self.state.send_modify(|state| state.mode = mode);
        debug!(mode = mode.label(), "form mode switched");
    }

    /// Submits the form for the current mode. See the module docs for the
    /// in-flight and terminal no-op rules.
    ///
    /// The request runs on its own task, so dropping this future does not
    /// cancel it: the result is still applied and the in-flight flag cleared.
    pub async fn submit(&self) {
        let started = self.state.send_if_modified(|state| {
            if state.request_in_progress || state.is_finished() {
                return false;
            }
            state.request_in_progress = true;
            true
        });
        if !started {
            debug!("submit ignored: request in progress or form finished");
            return;
        }

        let submission = Submission {
            state: Arc::clone(&self.state),
            gateway: Arc::clone(&self.gateway),
        };
        let form = self.snapshot();
        let task = tokio::spawn(async move { submission.run(form).await });

        if let Err(err) = task.await {
            warn!(error = %err, "submit task did not complete");
            self.state
                .send_modify(|state| state.request_in_progress = false);
        }
    }
}

/// One submission, detached from the controller handle that started it.
struct Submission<G> {
    state: Arc<watch::Sender<FormState>>,
    gateway: Arc<G>,
}

impl<G: AuthGateway + 'static> Submission<G> {
    async fn run(self, form: FormState) {
        match form.mode {
            FormMode::SignIn => self.sign_in(form).await,
            FormMode::SignUp => self.sign_up(form).await,
            FormMode::ResetPassword => self.reset_password(form).await,
        }
    }

    async fn sign_in(&self, form: FormState) {
        info!(remember_me = form.remember_me, "signing in");
        let response = self
            .gateway
            .login(form.email, form.password, Some(!form.remember_me))
            .await;

        self.state.send_modify(|state| {
            match response {
                ApiResponse::Success(_) => {
                    state.error = None;
                    state.login_successful = true;
                }
                ApiResponse::Failure(error) => {
                    warn!(code = %error.code, "sign in rejected");
                    state.error = Some(ApiErrorData {
                        message: INVALID_LOGIN_MESSAGE.to_string(),
                        ..error
                    });
                }
            }
            state.request_in_progress = false;
        });
    }

    async fn sign_up(&self, form: FormState) {
        info!("creating account");
        let response = self
            .gateway
            .create_account(form.user_name, form.email.clone(), form.password.clone())
            .await;

        if response.is_success() {
            self.spawn_follow_up_login(form.email, form.password);
        }

        self.state.send_modify(|state| {
            match response {
                ApiResponse::Success(_) => {
                    state.error = None;
                    state.signed_up = true;
                }
                ApiResponse::Failure(error) => {
                    warn!(code = %error.code, "sign up rejected");
                    state.error = Some(error);
                }
            }
            state.request_in_progress = false;
        });
    }

    /// Logs the new account in without waiting and without a cookie
    /// preference. The outcome is only logged and never changes the form state.
    fn spawn_follow_up_login(&self, email: String, password: SecretString) {
        let gateway = Arc::clone(&self.gateway);
        tokio::spawn(async move {
            match gateway.login(email, password, None).await {
                ApiResponse::Success(_) => debug!("follow-up login after sign up succeeded"),
                ApiResponse::Failure(error) => {
                    debug!(code = %error.code, "follow-up login after sign up failed");
                }
            }
        });
    }

    async fn reset_password(&self, form: FormState) {
        if form.email.is_empty() {
            self.state.send_modify(|state| {
                state.error = Some(ApiErrorData::new(
                    "Constraint violation",
                    ErrorCode::BadRequest,
                    MISSING_RESET_EMAIL_MESSAGE,
                ));
                state.request_in_progress = false;
            });
            return;
        }

        info!("requesting password reset");
        self.state.send_modify(|state| state.error = None);
        let response = self.gateway.forgot_password(form.email).await;

        self.state.send_modify(|state| {
            match response {
                ApiResponse::Success(()) => state.reset_requested = true,
                ApiResponse::Failure(error) => {
                    warn!(code = %error.code, "password reset rejected");
                    state.error = Some(error);
                }
            }
            state.request_in_progress = false;
        });
    }
}

fn replace_if_changed(slot: &mut bool, value: bool) -> bool {
    if *slot == value {
        false
    } else {
        *slot = value;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CreateUserData, LoginData};
    use anyhow::{anyhow, Result};
    use std::sync::Mutex;
    use std::time::Duration;
    use tokio::sync::Notify;
    use tokio::time::timeout;

    #[derive(Clone, Debug, PartialEq, Eq)]
    enum Call {
        Login { email: String, suppress_cookie: Option<bool> },
        CreateAccount { user_name: String, email: String },
        ForgotPassword { email: String },
        ResetPassword,
    }

    struct ScriptedGateway {
        login: ApiResponse<LoginData>,
        create_account: ApiResponse<CreateUserData>,
        forgot_password: ApiResponse<()>,
        calls: Arc<Mutex<Vec<Call>>>,
        login_seen: Arc<Notify>,
        gate: Option<Arc<Notify>>,
    }

    impl ScriptedGateway {
        fn new() -> Self {
            Self {
                login: ApiResponse::Success(login_data()),
                create_account: ApiResponse::Success(CreateUserData {
                    uid: 7,
                    cookie: None,
                }),
                forgot_password: ApiResponse::Success(()),
                calls: Arc::new(Mutex::new(Vec::new())),
                login_seen: Arc::new(Notify::new()),
                gate: None,
            }
        }

        fn record(&self, call: Call) {
            if let Ok(mut calls) = self.calls.lock() {
                calls.push(call);
            }
        }

        async fn wait_gate(&self) {
            if let Some(gate) = &self.gate {
                gate.notified().await;
            }
        }
    }

    impl AuthGateway for ScriptedGateway {
        async fn login(
            &self,
            email: String,
            _password: SecretString,
            suppress_cookie: Option<bool>,
        ) -> ApiResponse<LoginData> {
            self.record(Call::Login {
                email,
                suppress_cookie,
            });
            self.login_seen.notify_one();
            self.wait_gate().await;
            self.login.clone()
        }

        async fn create_account(
            &self,
            user_name: String,
            email: String,
            _password: SecretString,
        ) -> ApiResponse<CreateUserData> {
            self.record(Call::CreateAccount { user_name, email });
            self.wait_gate().await;
            self.create_account.clone()
        }

        async fn forgot_password(&self, email: String) -> ApiResponse<()> {
            self.record(Call::ForgotPassword { email });
            self.wait_gate().await;
            self.forgot_password.clone()
        }

        async fn reset_password(&self, _nonce: String, _password: SecretString) -> ApiResponse<()> {
            self.record(Call::ResetPassword);
            ApiResponse::Success(())
        }
    }

    fn login_data() -> LoginData {
        LoginData {
            response: Some(200),
            uid: 7,
            email: "a@b.com".to_string(),
            cookie: "cookie".to_string(),
            first_login: 0,
            nonce: "nonce".to_string(),
        }
    }

    fn calls(log: &Arc<Mutex<Vec<Call>>>) -> Vec<Call> {
        log.lock().map(|calls| calls.clone()).unwrap_or_default()
    }

    fn controller(
        gateway: ScriptedGateway,
        path: &str,
    ) -> (SignInController<ScriptedGateway, MemoryHistory>, MemoryHistory) {
        let history = MemoryHistory::new(path);
        (SignInController::new(gateway, history.clone()), history)
    }

    fn fill(controller: &SignInController<ScriptedGateway, MemoryHistory>) {
        controller.set_user_name("Bo");
        controller.set_email("a@b.com");
        controller.set_password(SecretString::from("longpass1".to_string()));
    }

    #[test]
    fn mode_comes_from_path() {
        let (sign_in, _) = controller(ScriptedGateway::new(), "/sign-in");
        assert_eq!(sign_in.mode(), FormMode::SignIn);
        let (reset, _) = controller(ScriptedGateway::new(), "/forgot");
        assert_eq!(reset.mode(), FormMode::ResetPassword);
        let (other, _) = controller(ScriptedGateway::new(), "/somewhere");
        assert_eq!(other.mode(), FormMode::SignUp);
    }

    #[test]
    fn toggle_sign_up_mode_never_enters_reset() {
        let (controller, history) = controller(ScriptedGateway::new(), "/sign-up");
        controller.toggle_sign_up_mode();
        assert_eq!(controller.mode(), FormMode::SignIn);
        controller.toggle_sign_up_mode();
        assert_eq!(controller.mode(), FormMode::SignUp);

        controller.start_reset_password_flow();
        assert_eq!(controller.mode(), FormMode::ResetPassword);
        controller.toggle_sign_up_mode();
        assert_eq!(controller.mode(), FormMode::SignUp);

        assert_eq!(
            history.entries(),
            vec!["/sign-up", "/sign-in", "/sign-up", "/forgot", "/sign-up"]
        );
    }

    #[test]
    fn mutators_update_snapshot_and_notify() {
        let (controller, _) = controller(ScriptedGateway::new(), "/sign-in");
        let mut receiver = controller.subscribe();
        receiver.borrow_and_update();

        controller.set_email("a@b.com");
        assert!(receiver.has_changed().unwrap_or(false));
        receiver.borrow_and_update();

        controller.toggle_remember_me();
        assert!(!controller.snapshot().remember_me());

        controller.set_field_error_state(true);
        assert!(controller.snapshot().disable_submit());
        receiver.borrow_and_update();
        controller.set_field_error_state(true);
        assert!(!receiver.has_changed().unwrap_or(true));
    }

    #[tokio::test]
    async fn sign_in_success_sets_login_successful() {
        let gateway = ScriptedGateway::new();
        let log = Arc::clone(&gateway.calls);
        let (controller, _) = controller(gateway, "/sign-in");
        controller.set_email("a@b.com");
        controller.set_password(SecretString::from("longpass1".to_string()));

        controller.submit().await;

        let state = controller.snapshot();
        assert!(state.login_successful());
        assert!(state.error().is_none());
        assert!(!state.request_in_progress());
        assert_eq!(state.redirect(), Some(PathName::Home));
        assert_eq!(
            calls(&log),
            vec![Call::Login {
                email: "a@b.com".to_string(),
                suppress_cookie: Some(false)
            }]
        );
    }

    #[tokio::test]
    async fn sign_in_without_remember_me_suppresses_cookie() {
        let gateway = ScriptedGateway::new();
        let log = Arc::clone(&gateway.calls);
        let (controller, _) = controller(gateway, "/sign-in");
        fill(&controller);
        controller.toggle_remember_me();

        controller.submit().await;

        assert_eq!(
            calls(&log),
            vec![Call::Login {
                email: "a@b.com".to_string(),
                suppress_cookie: Some(true)
            }]
        );
    }

    #[tokio::test]
    async fn sign_in_failure_hides_gateway_message() {
        let mut gateway = ScriptedGateway::new();
        gateway.login = ApiResponse::Failure(ApiErrorData::new(
            "Unauthorized",
            ErrorCode::Unauthorized,
            "no such user",
        ));
        let (controller, _) = controller(gateway, "/sign-in");
        fill(&controller);

        controller.submit().await;

        let state = controller.snapshot();
        let error = state.error().cloned();
        assert_eq!(
            error,
            Some(ApiErrorData::new(
                "Unauthorized",
                ErrorCode::Unauthorized,
                INVALID_LOGIN_MESSAGE
            ))
        );
        assert!(!state.login_successful());
        assert!(!state.request_in_progress());
        assert!(state.show_error_notification());
    }

    #[tokio::test]
    async fn failed_sign_in_can_be_resubmitted() {
        let mut gateway = ScriptedGateway::new();
        gateway.login = ApiResponse::Failure(ApiErrorData::new(
            "Unauthorized",
            ErrorCode::Unauthorized,
            "bad password",
        ));
        let log = Arc::clone(&gateway.calls);
        let (controller, _) = controller(gateway, "/sign-in");
        fill(&controller);

        controller.submit().await;
        controller.submit().await;

        assert_eq!(calls(&log).len(), 2);
    }

    #[tokio::test]
    async fn sign_up_success_fires_follow_up_login() -> Result<()> {
        let gateway = ScriptedGateway::new();
        let log = Arc::clone(&gateway.calls);
        let login_seen = Arc::clone(&gateway.login_seen);
        let (controller, _) = controller(gateway, "/sign-up");
        fill(&controller);

        controller.submit().await;

        let state = controller.snapshot();
        assert!(state.signed_up());
        assert!(state.error().is_none());
        assert!(!state.request_in_progress());
        assert_eq!(state.redirect(), Some(PathName::Onboarding));

        timeout(Duration::from_secs(5), login_seen.notified())
            .await
            .map_err(|_| anyhow!("follow-up login was not attempted"))?;
        assert_eq!(
            calls(&log),
            vec![
                Call::CreateAccount {
                    user_name: "Bo".to_string(),
                    email: "a@b.com".to_string()
                },
                Call::Login {
                    email: "a@b.com".to_string(),
                    suppress_cookie: None
                }
            ]
        );
        Ok(())
    }

    #[tokio::test]
    async fn follow_up_login_failure_does_not_affect_sign_up() -> Result<()> {
        let mut gateway = ScriptedGateway::new();
        gateway.login = ApiResponse::Failure(ApiErrorData::new(
            "Internal Server Error",
            ErrorCode::InternalServerError,
            "boom",
        ));
        let login_seen = Arc::clone(&gateway.login_seen);
        let (controller, _) = controller(gateway, "/sign-up");
        fill(&controller);

        controller.submit().await;
        timeout(Duration::from_secs(5), login_seen.notified())
            .await
            .map_err(|_| anyhow!("follow-up login was not attempted"))?;
        tokio::task::yield_now().await;

        let state = controller.snapshot();
        assert!(state.signed_up());
        assert!(state.error().is_none());
        Ok(())
    }

    #[tokio::test]
    async fn sign_up_failure_keeps_gateway_error() {
        let mut gateway = ScriptedGateway::new();
        gateway.create_account = ApiResponse::Failure(ApiErrorData::new(
            "Constraint violation",
            ErrorCode::BadRequest,
            "email taken",
        ));
        let log = Arc::clone(&gateway.calls);
        let (controller, _) = controller(gateway, "/sign-up");
        fill(&controller);

        controller.submit().await;

        let state = controller.snapshot();
        assert_eq!(state.error_message(), Some("email taken"));
        assert_eq!(state.error().map(|e| e.code), Some(ErrorCode::BadRequest));
        assert!(!state.signed_up());
        assert!(!state.request_in_progress());
        assert_eq!(calls(&log).len(), 1);
    }

    #[tokio::test]
    async fn reset_without_email_never_calls_gateway() {
        let gateway = ScriptedGateway::new();
        let log = Arc::clone(&gateway.calls);
        let (controller, _) = controller(gateway, "/forgot");

        controller.submit().await;

        let state = controller.snapshot();
        assert_eq!(state.error_message(), Some(MISSING_RESET_EMAIL_MESSAGE));
        assert_eq!(state.error().map(|e| e.code), Some(ErrorCode::BadRequest));
        assert!(!state.reset_requested());
        assert!(!state.request_in_progress());
        assert!(calls(&log).is_empty());
    }

    #[tokio::test]
    async fn reset_success_overrides_heading() {
        let gateway = ScriptedGateway::new();
        let log = Arc::clone(&gateway.calls);
        let (controller, _) = controller(gateway, "/forgot");
        controller.set_error(Some(ApiErrorData::new("x", ErrorCode::BadRequest, "old")));
        controller.set_email("a@b.com");

        controller.submit().await;

        let state = controller.snapshot();
        assert!(state.reset_requested());
        assert!(state.error().is_none());
        assert_eq!(state.heading_text(), "Check your email!");
        assert_eq!(state.redirect(), None);
        assert_eq!(
            calls(&log),
            vec![Call::ForgotPassword {
                email: "a@b.com".to_string()
            }]
        );
    }

    #[tokio::test]
    async fn reset_failure_keeps_gateway_error() {
        let mut gateway = ScriptedGateway::new();
        gateway.forgot_password = ApiResponse::Failure(ApiErrorData::new(
            "Too Many Requests",
            ErrorCode::TooManyRequests,
            "slow down",
        ));
        let (controller, _) = controller(gateway, "/forgot");
        controller.set_email("a@b.com");

        controller.submit().await;

        let state = controller.snapshot();
        assert_eq!(state.error_message(), Some("slow down"));
        assert!(!state.reset_requested());
    }

    #[tokio::test]
    async fn request_in_progress_clears_on_failure() -> Result<()> {
        let gate = Arc::new(Notify::new());
        let mut gateway = ScriptedGateway::new();
        gateway.gate = Some(Arc::clone(&gate));
        gateway.login = ApiResponse::Failure(ApiErrorData::new(
            "Unauthorized",
            ErrorCode::Unauthorized,
            "nope",
        ));
        let (controller, _) = controller(gateway, "/sign-in");
        fill(&controller);
        assert!(!controller.snapshot().request_in_progress());

        let in_flight = {
            let controller = controller.clone();
            tokio::spawn(async move { controller.submit().await })
        };
        let mut receiver = controller.subscribe();
        timeout(
            Duration::from_secs(5),
            receiver.wait_for(FormState::request_in_progress),
        )
        .await??;

        gate.notify_one();
        timeout(Duration::from_secs(5), in_flight).await??;

        let state = controller.snapshot();
        assert!(!state.request_in_progress());
        assert_eq!(state.error_message(), Some(INVALID_LOGIN_MESSAGE));
        Ok(())
    }

    #[tokio::test]
    async fn dropped_submit_still_settles() -> Result<()> {
        let gate = Arc::new(Notify::new());
        let mut gateway = ScriptedGateway::new();
        gateway.gate = Some(Arc::clone(&gate));
        gateway.login = ApiResponse::Failure(ApiErrorData::new(
            "Unauthorized",
            ErrorCode::Unauthorized,
            "nope",
        ));
        let log = Arc::clone(&gateway.calls);
        let login_seen = Arc::clone(&gateway.login_seen);
        let (controller, _) = controller(gateway, "/sign-in");
        fill(&controller);

        // The caller gives up while the login is still held at the gate.
        assert!(timeout(Duration::from_millis(50), controller.submit())
            .await
            .is_err());
        timeout(Duration::from_secs(5), login_seen.notified()).await?;
        assert!(controller.snapshot().request_in_progress());

        gate.notify_one();
        let mut receiver = controller.subscribe();
        timeout(
            Duration::from_secs(5),
            receiver.wait_for(|state| !state.request_in_progress()),
        )
        .await??;
        assert_eq!(
            controller.snapshot().error_message(),
            Some(INVALID_LOGIN_MESSAGE)
        );

        gate.notify_one();
        timeout(Duration::from_secs(5), controller.submit()).await?;
        assert_eq!(calls(&log).len(), 2);
        assert!(!controller.snapshot().request_in_progress());
        Ok(())
    }

    #[tokio::test]
    async fn submit_while_in_flight_is_ignored() -> Result<()> {
        let gate = Arc::new(Notify::new());
        let mut gateway = ScriptedGateway::new();
        gateway.gate = Some(Arc::clone(&gate));
        let log = Arc::clone(&gateway.calls);
        let (controller, _) = controller(gateway, "/sign-in");
        fill(&controller);

        let in_flight = {
            let controller = controller.clone();
            tokio::spawn(async move { controller.submit().await })
        };
        let mut receiver = controller.subscribe();
        timeout(
            Duration::from_secs(5),
            receiver.wait_for(FormState::request_in_progress),
        )
        .await??;

        controller.submit().await;
        assert!(controller.snapshot().request_in_progress());

        gate.notify_one();
        timeout(Duration::from_secs(5), in_flight).await??;

        assert_eq!(calls(&log).len(), 1);
        assert!(controller.snapshot().login_successful());
        assert!(!controller.snapshot().request_in_progress());
        Ok(())
    }

    #[tokio::test]
    async fn result_applies_after_mode_switch() -> Result<()> {
        let gate = Arc::new(Notify::new());
        let mut gateway = ScriptedGateway::new();
        gateway.gate = Some(Arc::clone(&gate));
        let (controller, _) = controller(gateway, "/sign-in");
        fill(&controller);

        let in_flight = {
            let controller = controller.clone();
            tokio::spawn(async move { controller.submit().await })
        };
        let mut receiver = controller.subscribe();
        timeout(
            Duration::from_secs(5),
            receiver.wait_for(FormState::request_in_progress),
        )
        .await??;

        controller.toggle_sign_up_mode();
        gate.notify_one();
        timeout(Duration::from_secs(5), in_flight).await??;

        let state = controller.snapshot();
        assert_eq!(state.mode(), FormMode::SignUp);
        assert!(state.login_successful());
        Ok(())
    }

    #[tokio::test]
    async fn finished_form_ignores_submit() {
        let gateway = ScriptedGateway::new();
        let log = Arc::clone(&gateway.calls);
        let (controller, _) = controller(gateway, "/sign-in");
        fill(&controller);

        controller.submit().await;
        controller.toggle_sign_up_mode();
        controller.submit().await;

        let state = controller.snapshot();
        assert!(state.login_successful());
        assert!(!state.signed_up());
        assert_eq!(calls(&log).len(), 1);
    }
}
