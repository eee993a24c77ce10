//! Request and response payloads for the HobbyHall account endpoints. Request
//! types carry plaintext passwords only for the duration of a call and redact
//! them from `Debug` output.

mod login;
mod user;

pub use login::{ForgotPasswordParams, LoginData, LoginParams, ResetPasswordParams};
pub use user::{CreateUserData, CreateUserParams};
