pub mod auth;

use crate::cli::telemetry;
use anyhow::Result;

#[derive(Debug)]
pub enum Action {
    SignIn(auth::SignInArgs),
    SignUp(auth::SignUpArgs),
    Forgot(auth::ForgotArgs),
    Reset(auth::ResetArgs),
}

impl Action {
    /// Execute the action
    ///
    /// # Errors
    ///
    /// Returns an error if the form cannot be submitted or the API rejects it
    pub async fn execute(self) -> Result<()> {
        let result = match self {
            Self::SignIn(args) => auth::sign_in(args).await,
            Self::SignUp(args) => auth::sign_up(args).await,
            Self::Forgot(args) => auth::forgot(args).await,
            Self::Reset(args) => auth::reset(args).await,
        };

        telemetry::shutdown_tracer();

        result
    }
}
