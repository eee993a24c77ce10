use clap::{Arg, ArgAction, Command};

pub const CMD_SIGN_IN: &str = "sign-in";
pub const CMD_SIGN_UP: &str = "sign-up";
pub const CMD_FORGOT: &str = "forgot";
pub const CMD_RESET: &str = "reset";

pub const ARG_EMAIL: &str = "email";
pub const ARG_PASSWORD: &str = "password";
pub const ARG_USER_NAME: &str = "user-name";
pub const ARG_NO_REMEMBER_ME: &str = "no-remember-me";
pub const ARG_NONCE: &str = "nonce";

fn email_arg() -> Arg {
    Arg::new(ARG_EMAIL)
        .short('e')
        .long(ARG_EMAIL)
        .help("Account email address")
        .env("HOBBYHALL_EMAIL")
        .required(true)
}

fn password_arg() -> Arg {
    Arg::new(ARG_PASSWORD)
        .short('p')
        .long(ARG_PASSWORD)
        .help("Account password, at least 8 characters")
        .env("HOBBYHALL_PASSWORD")
        .hide_env_values(true)
        .required(true)
}

#[must_use]
pub fn with_args(command: Command) -> Command {
    command
        .subcommand(
            Command::new(CMD_SIGN_IN)
                .about("Sign in with email and password")
                .arg(email_arg())
                .arg(password_arg())
                .arg(
                    Arg::new(ARG_NO_REMEMBER_ME)
                        .long(ARG_NO_REMEMBER_ME)
                        .help("Ask the server not to keep a login cookie")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new(CMD_SIGN_UP)
                .about("Create a new account")
                .arg(
                    Arg::new(ARG_USER_NAME)
                        .short('n')
                        .long(ARG_USER_NAME)
                        .help("Display name for the new account")
                        .env("HOBBYHALL_USER_NAME")
                        .required(true),
                )
                .arg(email_arg())
                .arg(password_arg()),
        )
        .subcommand(
            Command::new(CMD_FORGOT)
                .about("Request a password reset email")
                .arg(email_arg()),
        )
        .subcommand(
            Command::new(CMD_RESET)
                .about("Set a new password with the nonce from a reset email")
                .arg(
                    Arg::new(ARG_NONCE)
                        .long(ARG_NONCE)
                        .help("Nonce from the password reset email")
                        .env("HOBBYHALL_RESET_NONCE")
                        .hide_env_values(true)
                        .required(true),
                )
                .arg(password_arg()),
        )
}
