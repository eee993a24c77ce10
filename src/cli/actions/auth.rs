//! Headless form actions: each fills the sign-in form from CLI arguments, runs
//! the fields through the input validators, submits and prints the outcome.

use crate::{
    cli::globals::GlobalArgs,
    gateway::AuthGateway,
    input::{self, FieldInput, InputKind},
    signin::{FormMode, FormState, MemoryHistory, SignInController},
};
use anyhow::{bail, Result};
use secrecy::{ExposeSecret, SecretString};
use std::borrow::Cow;
use tracing::{debug, info};

#[derive(Debug)]
pub struct SignInArgs {
    pub globals: GlobalArgs,
    pub email: String,
    pub password: SecretString,
    pub remember_me: bool,
}

#[derive(Debug)]
pub struct SignUpArgs {
    pub globals: GlobalArgs,
    pub user_name: String,
    pub email: String,
    pub password: SecretString,
}

#[derive(Debug)]
pub struct ForgotArgs {
    pub globals: GlobalArgs,
    pub email: String,
}

#[derive(Debug)]
pub struct ResetArgs {
    pub globals: GlobalArgs,
    pub nonce: SecretString,
    pub password: SecretString,
}

struct Form {
    user_name: Option<String>,
    email: String,
    password: Option<SecretString>,
    remember_me: bool,
}

fn blurred(kind: InputKind, value: &str) -> FieldInput {
    let mut field = FieldInput::new(kind);
    field.set_value(value);
    field.blur();
    field
}

/// Drives a controller through one submission and returns the settled state.
async fn submit_form<G>(gateway: G, mode: FormMode, form: Form) -> Result<FormState>
where
    G: AuthGateway + 'static,
{
    let controller = SignInController::new(gateway, MemoryHistory::new(mode.path().as_str()));

    let mut fields = vec![blurred(InputKind::Email, &form.email)];
    if let Some(user_name) = form.user_name {
        fields.push(blurred(InputKind::Text, &user_name));
        controller.set_user_name(user_name);
    }
    controller.set_email(form.email);

    let mut errors: Vec<String> = fields
        .iter()
        .filter(|field| field.show_error())
        .filter_map(|field| field.subtext_text().map(Cow::into_owned))
        .collect();
    if let Some(password) = form.password {
        if let Some(error) = input::validation_error(InputKind::Password, password.expose_secret())
        {
            errors.push(error.to_string());
        }
        controller.set_password(password);
    }
    if !form.remember_me {
        controller.toggle_remember_me();
    }
    controller.set_field_error_state(input::any_error(&fields) || !errors.is_empty());

    if controller.snapshot().disable_submit() {
        let message = errors
            .into_iter()
            .next()
            .unwrap_or_else(|| "missing required fields".to_string());
        bail!("{message}");
    }

    debug!(mode = mode.label(), "submitting form");
    controller.submit().await;

    let state = controller.snapshot();
    if let Some(error) = state.error() {
        bail!("{} ({})", error.message, error.code);
    }
    Ok(state)
}

fn report(state: &FormState) {
    match state.redirect() {
        Some(path) => {
            info!(redirect = %path, "{} complete", state.mode().label());
            println!("{}: continue at {path}", state.mode().label());
        }
        None => {
            println!("{}", state.heading_text().trim_end());
            println!("{}", state.description_text());
        }
    }
}

/// # Errors
/// Returns an error if validation fails or the login is rejected
pub async fn sign_in(args: SignInArgs) -> Result<()> {
    let gateway = args.globals.gateway()?;
    let state = submit_form(
        gateway,
        FormMode::SignIn,
        Form {
            user_name: None,
            email: args.email,
            password: Some(args.password),
            remember_me: args.remember_me,
        },
    )
    .await?;
    report(&state);
    Ok(())
}

/// # Errors
/// Returns an error if validation fails or the account cannot be created
pub async fn sign_up(args: SignUpArgs) -> Result<()> {
    let gateway = args.globals.gateway()?;
    let state = submit_form(
        gateway,
        FormMode::SignUp,
        Form {
            user_name: Some(args.user_name),
            email: args.email,
            password: Some(args.password),
            remember_me: true,
        },
    )
    .await?;
    report(&state);
    Ok(())
}

/// # Errors
/// Returns an error if the email is invalid or the reset request is rejected
pub async fn forgot(args: ForgotArgs) -> Result<()> {
    let gateway = args.globals.gateway()?;
    let state = submit_form(
        gateway,
        FormMode::ResetPassword,
        Form {
            user_name: None,
            email: args.email,
            password: None,
            remember_me: true,
        },
    )
    .await?;
    report(&state);
    Ok(())
}

/// Completes a password reset with the nonce from the reset email.
///
/// # Errors
/// Returns an error if the new password is too short or the API rejects the reset
pub async fn reset(args: ResetArgs) -> Result<()> {
    if let Some(error) = input::validation_error(InputKind::Password, args.password.expose_secret())
    {
        bail!("{error}");
    }

    let gateway = args.globals.gateway()?;
    let response = gateway
        .reset_password(args.nonce.expose_secret().to_string(), args.password)
        .await;

    match response.into_result() {
        Ok(()) => {
            println!("Password updated. Sign in with your new password.");
            Ok(())
        }
        Err(error) => bail!("{} ({})", error.message, error.code),
    }
}
