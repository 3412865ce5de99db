use async_trait::async_trait;
use oauthsig_core::{Context, Error, ProvideCredential, Result};
use std::sync::Arc;

use crate::config::Config;
use crate::credential::Credential;

/// ConfigCredentialProvider will load credential from config.
///
/// Returns `None` if the config carries no consumer key and no consumer secret.
/// A partially filled config is an error, the provider never fills a missing
/// value with an empty one.
#[derive(Debug)]
pub struct ConfigCredentialProvider {
    config: Arc<Config>,
}

impl ConfigCredentialProvider {
    /// Create a new loader via config.
    pub fn new(config: Arc<Config>) -> Self {
        Self { config }
    }
}

fn required<'a>(value: &'a Option<String>, name: &str) -> Result<&'a str> {
    value
        .as_deref()
        .ok_or_else(|| Error::config_invalid(format!("{name} is required in config")))
}

#[async_trait]
impl ProvideCredential for ConfigCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, _: &Context) -> Result<Option<Self::Credential>> {
        let config = self.config.as_ref();
        if config.consumer_key.is_none() && config.consumer_secret.is_none() {
            return Ok(None);
        }

        Ok(Some(Credential::new(
            required(&config.consumer_key, "consumer_key")?,
            required(&config.consumer_secret, "consumer_secret")?,
            required(&config.access_token, "access_token")?,
            required(&config.access_token_secret, "access_token_secret")?,
        )))
    }
}
