use serde::{Deserialize, Serialize};
use std::fmt;

/// Body of `POST /login`.
#[derive(Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LoginParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pw: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cookie: Option<String>,
    /// True when the server should not persist a login cookie.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suppress_saving_cookie: Option<bool>,
}

impl fmt::Debug for LoginParams {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("LoginParams")
            .field("email", &self.email)
            .field("pw", &self.pw.as_ref().map(|_| "[REDACTED]"))
            .field("cookie", &self.cookie.as_ref().map(|_| "[REDACTED]"))
            .field("suppress_saving_cookie", &self.suppress_saving_cookie)
            .finish()
    }
}

/// Data returned by `POST /login`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LoginData {
    #[serde(default)]
    pub response: Option<i64>,
    pub uid: u64,
    pub email: String,
    #[serde(default)]
    pub cookie: String,
    /// Nonzero on the user's first login.
    #[serde(default)]
    pub first_login: i64,
    #[serde(default)]
    pub nonce: String,
}

impl LoginData {
    #[must_use]
    pub fn is_first_login(&self) -> bool {
        self.first_login > 0
    }
}

/// Body of `POST /login/forgot-password`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ForgotPasswordParams {
    pub email: String,
}

/// Body of `POST /login/reset`, completing a reset with the emailed nonce.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResetPasswordParams {
    pub nonce: String,
    pub pw: String,
}

impl fmt::Debug for ResetPasswordParams {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("ResetPasswordParams")
            .field("nonce", &"[REDACTED]")
            .field("pw", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn login_params_skip_absent_fields() -> Result<(), serde_json::Error> {
        let params = LoginParams {
            email: Some("a@b.com".to_string()),
            pw: Some("longpass1".to_string()),
            suppress_saving_cookie: Some(true),
            ..LoginParams::default()
        };
        assert_eq!(
            serde_json::to_value(&params)?,
            json!({ "email": "a@b.com", "pw": "longpass1", "suppressSavingCookie": true })
        );
        Ok(())
    }

    #[test]
    fn login_params_debug_hides_password() {
        let params = LoginParams {
            pw: Some("longpass1".to_string()),
            ..LoginParams::default()
        };
        assert!(!format!("{params:?}").contains("longpass1"));
    }

    #[test]
    fn login_data_reads_first_login() -> Result<(), serde_json::Error> {
        let data: LoginData = serde_json::from_value(json!({
            "response": 200,
            "uid": 12,
            "email": "a@b.com",
            "cookie": "c00kie",
            "firstLogin": 1,
            "nonce": "n"
        }))?;
        assert_eq!(data.uid, 12);
        assert!(data.is_first_login());
        Ok(())
    }
}
