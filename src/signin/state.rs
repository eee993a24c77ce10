//! Form state and its derived projections. Every projection is a pure function
//! of [`FormState`], recomputed on read.

use super::navigation::PathName;
use crate::api::ApiErrorData;
use secrecy::{ExposeSecret, SecretString};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FormMode {
    #[default]
    SignUp,
    SignIn,
    ResetPassword,
}

impl FormMode {
    /// Mode for a navigation path. Unrouted paths open the sign-up form.
    #[must_use]
    pub fn from_path(path: &str) -> Self {
        match PathName::parse(path) {
            Some(PathName::SignIn) => FormMode::SignIn,
            Some(PathName::ResetPassword) => FormMode::ResetPassword,
            _ => FormMode::SignUp,
        }
    }

    #[must_use]
    pub const fn path(self) -> PathName {
        match self {
            FormMode::SignUp => PathName::SignUp,
            FormMode::SignIn => PathName::SignIn,
            FormMode::ResetPassword => PathName::ResetPassword,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            FormMode::SignUp => "Sign Up",
            FormMode::SignIn => "Sign In",
            FormMode::ResetPassword => "Reset Password",
        }
    }
}

#[derive(Clone, Debug)]
pub struct FormState {
    pub(crate) mode: FormMode,
    pub(crate) user_name: String,
    pub(crate) email: String,
    pub(crate) password: SecretString,
    pub(crate) remember_me: bool,
    pub(crate) has_field_error: bool,
    pub(crate) error: Option<ApiErrorData>,
    pub(crate) request_in_progress: bool,
    pub(crate) signed_up: bool,
    pub(crate) login_successful: bool,
    pub(crate) reset_requested: bool,
}

impl FormState {
    #[must_use]
    pub fn new(mode: FormMode) -> Self {
        Self {
            mode,
            user_name: String::new(),
            email: String::new(),
            password: SecretString::default(),
            remember_me: true,
            has_field_error: false,
            error: None,
            request_in_progress: false,
            signed_up: false,
            login_successful: false,
            reset_requested: false,
        }
    }

    #[must_use]
    pub fn mode(&self) -> FormMode {
        self.mode
    }

    #[must_use]
    pub fn user_name(&self) -> &str {
        &self.user_name
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn password_is_empty(&self) -> bool {
        self.password.expose_secret().is_empty()
    }

    #[must_use]
    pub fn remember_me(&self) -> bool {
        self.remember_me
    }

    #[must_use]
    pub fn has_field_error(&self) -> bool {
        self.has_field_error
    }

    #[must_use]
    pub fn error(&self) -> Option<&ApiErrorData> {
        self.error.as_ref()
    }

    #[must_use]
    pub fn request_in_progress(&self) -> bool {
        self.request_in_progress
    }

    #[must_use]
    pub fn signed_up(&self) -> bool {
        self.signed_up
    }

    #[must_use]
    pub fn login_successful(&self) -> bool {
        self.login_successful
    }

    #[must_use]
    pub fn reset_requested(&self) -> bool {
        self.reset_requested
    }

    /// True once any terminal flag is set; the form accepts no more submits.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.signed_up || self.login_successful || self.reset_requested
    }

    #[must_use]
    pub fn heading_text(&self) -> &'static str {
        if self.reset_requested {
            return "Check your email!";
        }
        match self.mode {
            FormMode::SignUp => "Sign up ",
            FormMode::SignIn => "Sign in",
            FormMode::ResetPassword => "Forgot your Password?",
        }
    }

    #[must_use]
    pub fn description_text(&self) -> &'static str {
        if self.reset_requested {
            return "You should receive an email in the next few minutes that will allow you to reset your password.";
        }
        match self.mode {
            FormMode::SignUp => "Get to hobbying!",
            FormMode::SignIn => {
                "Welcome back! Please enter your email address and password to enter your homebase"
            }
            FormMode::ResetPassword => {
                "Enter your email address to reset your password. You may need to check your spam folder or unblock manage@hobbyhall.net."
            }
        }
    }

    #[must_use]
    pub fn submit_button_text(&self) -> &'static str {
        match self.mode {
            FormMode::SignUp => "Sign Up",
            FormMode::SignIn => "Login",
            FormMode::ResetPassword => "Submit",
        }
    }

    #[must_use]
    pub fn show_name_inputs(&self) -> bool {
        self.mode == FormMode::SignUp
    }

    #[must_use]
    pub fn show_password_input(&self) -> bool {
        self.mode != FormMode::ResetPassword
    }

    /// Remember Me and the Reset Password link only show when signing in.
    #[must_use]
    pub fn show_remember_me_and_password(&self) -> bool {
        self.mode == FormMode::SignIn
    }

    #[must_use]
    pub fn sign_up_mode(&self) -> bool {
        self.mode == FormMode::SignUp
    }

    /// Field errors always disable submit; otherwise only the fields the
    /// current mode needs are checked, and only for emptiness.
    #[must_use]
    pub fn disable_submit(&self) -> bool {
        self.has_field_error
            || match self.mode {
                FormMode::SignUp => self.user_name.is_empty() || self.invalid_sign_in(),
                FormMode::SignIn => self.invalid_sign_in(),
                FormMode::ResetPassword => self.invalid_reset(),
            }
    }

    fn invalid_sign_in(&self) -> bool {
        self.password_is_empty() || self.invalid_reset()
    }

    fn invalid_reset(&self) -> bool {
        self.email.is_empty()
    }

    #[must_use]
    pub fn show_error_notification(&self) -> bool {
        self.error
            .as_ref()
            .is_some_and(|error| !error.message.is_empty())
    }

    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        self.error.as_ref().map(|error| error.message.as_str())
    }

    /// Where the presentation layer should navigate after a terminal outcome.
    #[must_use]
    pub fn redirect(&self) -> Option<PathName> {
        if self.signed_up {
            Some(PathName::Onboarding)
        } else if self.login_successful {
            Some(PathName::Home)
        } else {
            None
        }
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new(FormMode::default())
    }
}
