//! Maps validated CLI matches to the action the binary executes.

use crate::cli::actions::{
    auth::{ForgotArgs, ResetArgs, SignInArgs, SignUpArgs},
    Action,
};
use crate::cli::commands::{
    auth::{
        ARG_EMAIL, ARG_NONCE, ARG_NO_REMEMBER_ME, ARG_PASSWORD, ARG_USER_NAME, CMD_FORGOT,
        CMD_RESET, CMD_SIGN_IN, CMD_SIGN_UP,
    },
    ARG_ACCESS_TOKEN, ARG_API_URL, ARG_MANAGEMENT_TOKEN, ARG_TIMEOUT,
};
use crate::cli::globals::GlobalArgs;
use anyhow::{bail, Context, Result};
use clap::ArgMatches;
use secrecy::SecretString;
use std::time::Duration;

fn required(matches: &ArgMatches, id: &str) -> Result<String> {
    matches
        .get_one::<String>(id)
        .cloned()
        .with_context(|| format!("missing required argument: --{id}"))
}

fn secret(matches: &ArgMatches, id: &str) -> Option<SecretString> {
    matches
        .get_one::<String>(id)
        .map(|value| SecretString::from(value.clone()))
}

fn globals(matches: &ArgMatches) -> Result<GlobalArgs> {
    let mut globals = GlobalArgs::new(required(matches, ARG_API_URL)?);
    if let Some(token) = secret(matches, ARG_ACCESS_TOKEN) {
        globals.access_token = token;
    }
    if let Some(token) = secret(matches, ARG_MANAGEMENT_TOKEN) {
        globals.management_token = token;
    }
    if let Some(seconds) = matches.get_one::<u64>(ARG_TIMEOUT) {
        globals.timeout = Duration::from_secs(*seconds);
    }
    Ok(globals)
}

/// Map validated CLI matches to an auth action.
///
/// # Errors
/// Returns an error if required arguments or the subcommand are missing.
pub fn handler(matches: &ArgMatches) -> Result<Action> {
    let globals = globals(matches)?;
    let password = |sub: &ArgMatches| {
        secret(sub, ARG_PASSWORD).with_context(|| format!("missing required argument: --{ARG_PASSWORD}"))
    };

    let action = match matches.subcommand() {
        Some((CMD_SIGN_IN, sub)) => Action::SignIn(SignInArgs {
            globals,
            email: required(sub, ARG_EMAIL)?,
            password: password(sub)?,
            remember_me: !sub.get_flag(ARG_NO_REMEMBER_ME),
        }),
        Some((CMD_SIGN_UP, sub)) => Action::SignUp(SignUpArgs {
            globals,
            user_name: required(sub, ARG_USER_NAME)?,
            email: required(sub, ARG_EMAIL)?,
            password: password(sub)?,
        }),
        Some((CMD_FORGOT, sub)) => Action::Forgot(ForgotArgs {
            globals,
            email: required(sub, ARG_EMAIL)?,
        }),
        Some((CMD_RESET, sub)) => Action::Reset(ResetArgs {
            globals,
            nonce: secret(sub, ARG_NONCE)
                .with_context(|| format!("missing required argument: --{ARG_NONCE}"))?,
            password: password(sub)?,
        }),
        Some((other, _)) => bail!("unknown command: {other}"),
        None => bail!("missing command"),
    };

    Ok(action)
}
