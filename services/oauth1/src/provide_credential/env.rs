use crate::{constants::*, Credential};
use async_trait::async_trait;
use oauthsig_core::{Context, Error, ProvideCredential, Result};

/// EnvCredentialProvider loads OAuth 1.0a credentials from environment variables.
///
/// This provider looks for the following environment variables:
/// - `OAUTHSIG_CONSUMER_KEY`: The consumer key
/// - `OAUTHSIG_CONSUMER_SECRET`: The consumer secret
/// - `OAUTHSIG_ACCESS_TOKEN`: The access token
/// - `OAUTHSIG_ACCESS_TOKEN_SECRET`: The access token secret
///
/// Nothing set means nothing to provide. Once the consumer pair is present, the
/// token pair must be present too; set them to empty to sign without a token.
#[derive(Debug, Default)]
pub struct EnvCredentialProvider;

impl EnvCredentialProvider {
    /// Create a new EnvCredentialProvider.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ProvideCredential for EnvCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        let envs = ctx.env_vars();

        let (consumer_key, consumer_secret) = match (
            envs.get(OAUTHSIG_CONSUMER_KEY),
            envs.get(OAUTHSIG_CONSUMER_SECRET),
        ) {
            (None, None) => return Ok(None),
            (Some(ck), Some(cs)) => (ck, cs),
            (Some(_), None) => {
                return Err(Error::config_invalid(format!(
                    "{OAUTHSIG_CONSUMER_SECRET} must be set along with {OAUTHSIG_CONSUMER_KEY}"
                )))
            }
            (None, Some(_)) => {
                return Err(Error::config_invalid(format!(
                    "{OAUTHSIG_CONSUMER_KEY} must be set along with {OAUTHSIG_CONSUMER_SECRET}"
                )))
            }
        };

        let access_token = envs.get(OAUTHSIG_ACCESS_TOKEN).ok_or_else(|| {
            Error::config_invalid(format!("{OAUTHSIG_ACCESS_TOKEN} must be set"))
        })?;
        let access_token_secret = envs.get(OAUTHSIG_ACCESS_TOKEN_SECRET).ok_or_else(|| {
            Error::config_invalid(format!("{OAUTHSIG_ACCESS_TOKEN_SECRET} must be set"))
        })?;

        Ok(Some(Credential::new(
            consumer_key,
            consumer_secret,
            access_token,
            access_token_secret,
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oauthsig_core::{ErrorKind, StaticEnv};
    use std::collections::HashMap;

    fn ctx_with(envs: &[(&str, &str)]) -> Context {
        Context::new().with_env(StaticEnv {
            envs: envs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect::<HashMap<_, _>>(),
        })
    }

    #[tokio::test]
    async fn test_env_credential_provider() -> anyhow::Result<()> {
        let ctx = ctx_with(&[
            (OAUTHSIG_CONSUMER_KEY, "ck"),
            (OAUTHSIG_CONSUMER_SECRET, "cs"),
            (OAUTHSIG_ACCESS_TOKEN, "at"),
            (OAUTHSIG_ACCESS_TOKEN_SECRET, "ats"),
        ]);

        let cred = EnvCredentialProvider::new()
            .provide_credential(&ctx)
            .await?
            .expect("credential must be loaded");
        assert_eq!(cred, Credential::new("ck", "cs", "at", "ats"));
        Ok(())
    }

    #[tokio::test]
    async fn test_env_credential_provider_explicit_empty_token() -> anyhow::Result<()> {
        let ctx = ctx_with(&[
            (OAUTHSIG_CONSUMER_KEY, "ck"),
            (OAUTHSIG_CONSUMER_SECRET, "cs"),
            (OAUTHSIG_ACCESS_TOKEN, ""),
            (OAUTHSIG_ACCESS_TOKEN_SECRET, ""),
        ]);

        let cred = EnvCredentialProvider::new()
            .provide_credential(&ctx)
            .await?
            .expect("credential must be loaded");
        assert_eq!(cred.access_token, "");
        assert_eq!(cred.access_token_secret, "");
        Ok(())
    }

    #[tokio::test]
    async fn test_env_credential_provider_missing_credentials() -> anyhow::Result<()> {
        let cred = EnvCredentialProvider::new()
            .provide_credential(&Context::new())
            .await?;
        assert!(cred.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn test_env_credential_provider_partial_credentials() {
        let cases = [
            vec![(OAUTHSIG_CONSUMER_KEY, "ck")],
            vec![(OAUTHSIG_CONSUMER_SECRET, "cs")],
            vec![
                (OAUTHSIG_CONSUMER_KEY, "ck"),
                (OAUTHSIG_CONSUMER_SECRET, "cs"),
                (OAUTHSIG_ACCESS_TOKEN, "at"),
            ],
        ];

        for envs in cases {
            let err = EnvCredentialProvider::new()
                .provide_credential(&ctx_with(&envs))
                .await
                .expect_err("partial credential must be rejected");
            assert_eq!(err.kind(), ErrorKind::ConfigInvalid, "envs: {envs:?}");
        }
    }
}
