//! # HobbyHall (sign-in client)
//!
//! `hobbyhall` is the client side of HobbyHall account access: the sign-in,
//! sign-up and password-reset form, the authentication gateway it talks to and
//! the REST client underneath.
//!
//! ## Form State Controller
//!
//! [`signin::SignInController`] owns every mutable field of the form and derives
//! the visibility, validation and copy flags a presentation layer renders. The
//! mode (`Sign Up`, `Sign In`, `Reset Password`) is taken from the current
//! navigation path when the controller is created and changes only through the
//! explicit mode-switch actions.
//!
//! ## Authentication Gateway
//!
//! [`gateway::AuthGateway`] is the seam between the form and the network. Every
//! call resolves to a tagged [`api::ApiResponse`]; transport failures are folded
//! into the same error payload the API returns, so nothing surfaces to the
//! presentation layer as an unhandled error.
//!
//! Passwords travel as `SecretString` until the moment they are serialized into
//! a request body and must never be logged.

pub mod api;
pub mod cli;
pub mod gateway;
pub mod input;
pub mod models;
pub mod signin;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

pub const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);
