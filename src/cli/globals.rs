use crate::api::{ClientConfig, RestClient};
use crate::gateway::RestGateway;
use anyhow::{Context, Result};
use secrecy::SecretString;
use std::time::Duration;

#[derive(Clone)]
pub struct GlobalArgs {
    pub api_url: String,
    pub access_token: SecretString,
    pub management_token: SecretString,
    pub timeout: Duration,
}

impl GlobalArgs {
    #[must_use]
    pub fn new(api_url: String) -> Self {
        Self {
            api_url,
            access_token: SecretString::default(),
            management_token: SecretString::default(),
            timeout: crate::api::DEFAULT_TIMEOUT,
        }
    }

    /// Builds the REST gateway every auth action talks to.
    ///
    /// # Errors
    /// Returns an error if the API URL is invalid or the HTTP client cannot be built.
    pub fn gateway(&self) -> Result<RestGateway> {
        let config = ClientConfig::new(&self.api_url)
            .with_context(|| format!("invalid HOBBYHALL_API_URL: {}", self.api_url))?
            .with_access_token(self.access_token.clone())
            .with_management_token(self.management_token.clone())
            .with_timeout(self.timeout);
        let client = RestClient::new(config).context("failed to build HTTP client")?;
        Ok(RestGateway::new(client))
    }
}

impl std::fmt::Debug for GlobalArgs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GlobalArgs")
            .field("api_url", &self.api_url)
            .field("access_token", &"***")
            .field("management_token", &"***")
            .field("timeout", &self.timeout)
            .finish()
    }
}
