use std::fmt::{Debug, Formatter};

use oauthsig_core::{utils::Redact, Error, Result, SigningCredential};

/// Credential for OAuth 1.0a signing.
///
/// The credential is bound to one client for its whole lifetime and never
/// mutated. `access_token` and `access_token_secret` may be empty when the
/// caller sets them so explicitly, for example when signing without a user token.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    /// Consumer key of the application.
    pub consumer_key: String,
    /// Consumer secret of the application.
    pub consumer_secret: String,
    /// Access token granted to the application.
    pub access_token: String,
    /// Access token secret granted to the application.
    pub access_token_secret: String,
}

impl Credential {
    /// Create a new credential.
    pub fn new(
        consumer_key: impl Into<String>,
        consumer_secret: impl Into<String>,
        access_token: impl Into<String>,
        access_token_secret: impl Into<String>,
    ) -> Self {
        Self {
            consumer_key: consumer_key.into(),
            consumer_secret: consumer_secret.into(),
            access_token: access_token.into(),
            access_token_secret: access_token_secret.into(),
        }
    }

    /// Check that the consumer part of this credential can be used for signing.
    pub(crate) fn check(&self) -> Result<()> {
        if self.consumer_key.is_empty() {
            return Err(Error::credential_invalid("consumer key must not be empty"));
        }
        if self.consumer_secret.is_empty() {
            return Err(Error::credential_invalid(
                "consumer secret must not be empty",
            ));
        }
        Ok(())
    }
}

impl Debug for Credential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("consumer_key", &Redact::from(&self.consumer_key))
            .field("consumer_secret", &Redact::from(&self.consumer_secret))
            .field("access_token", &Redact::from(&self.access_token))
            .field("access_token_secret", &Redact::from(&self.access_token_secret))
            .finish()
    }
}

impl SigningCredential for Credential {
    fn is_valid(&self) -> bool {
        self.check().is_ok()
    }
}
