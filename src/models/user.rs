use serde::{Deserialize, Serialize};
use std::fmt;

/// Body of `POST /users`.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserParams {
    pub user_name: String,
    pub email: String,
    pub password: String,
}

impl fmt::Debug for CreateUserParams {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("CreateUserParams")
            .field("user_name", &self.user_name)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Data returned by `POST /users`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateUserData {
    pub uid: u64,
    #[serde(default)]
    pub cookie: Option<String>,
}
