pub mod auth;

use clap::{
    builder::styling::{AnsiColor, Effects, Styles},
    Arg, ArgAction, ColorChoice, Command,
};

pub const ARG_API_URL: &str = "api-url";
pub const ARG_ACCESS_TOKEN: &str = "access-token";
pub const ARG_MANAGEMENT_TOKEN: &str = "management-token";
pub const ARG_TIMEOUT: &str = "timeout";
pub const ARG_VERBOSITY: &str = "verbosity";

/// Level names accepted by `HOBBYHALL_LOG_LEVEL`, indexed by verbosity count.
const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];
const MAX_VERBOSITY: u8 = 5;

/// Parses a log level given by name or as a verbosity count.
fn parse_log_level(level: &str) -> Result<u8, String> {
    if let Ok(count) = level.parse::<u8>() {
        return if count <= MAX_VERBOSITY {
            Ok(count)
        } else {
            Err(format!("verbosity must be at most {MAX_VERBOSITY}"))
        };
    }
    LOG_LEVELS
        .iter()
        .position(|name| name.eq_ignore_ascii_case(level))
        .and_then(|index| u8::try_from(index).ok())
        .ok_or_else(|| format!("unknown log level {level:?}, expected one of {LOG_LEVELS:?}"))
}

#[must_use]
pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    let long_version: &'static str = Box::leak(
        format!("{} - {}", env!("CARGO_PKG_VERSION"), crate::GIT_COMMIT_HASH).into_boxed_str(),
    );

    let command = Command::new("hobbyhall")
        .about("HobbyHall sign-in, sign-up and password reset")
        .version(env!("CARGO_PKG_VERSION"))
        .long_version(long_version)
        .color(ColorChoice::Auto)
        .styles(styles)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new(ARG_API_URL)
                .short('u')
                .long(ARG_API_URL)
                .help("HobbyHall REST API base URL, example: https://api.hobbyhall.net/v1")
                .env("HOBBYHALL_API_URL")
                .required(true),
        )
        .arg(
            Arg::new(ARG_ACCESS_TOKEN)
                .long(ARG_ACCESS_TOKEN)
                .help("Application access token sent as a bearer token")
                .env("HOBBYHALL_ACCESS_TOKEN")
                .hide_env_values(true),
        )
        .arg(
            Arg::new(ARG_MANAGEMENT_TOKEN)
                .long(ARG_MANAGEMENT_TOKEN)
                .help("Management token for management-scoped requests")
                .env("HOBBYHALL_MANAGEMENT_TOKEN")
                .hide_env_values(true),
        )
        .arg(
            Arg::new(ARG_TIMEOUT)
                .short('t')
                .long(ARG_TIMEOUT)
                .help("Request timeout in seconds")
                .env("HOBBYHALL_TIMEOUT")
                .default_value("30")
                .value_parser(clap::value_parser!(u64).range(1..)),
        )
        .arg(
            Arg::new(ARG_VERBOSITY)
                .short('v')
                .long("verbose")
                .help("Log more: -v warn, -vv info, -vvv debug, -vvvv trace (default: errors only)")
                .env("HOBBYHALL_LOG_LEVEL")
                .global(true)
                .action(ArgAction::Count)
                .value_parser(parse_log_level),
        );

    auth::with_args(command)
}
