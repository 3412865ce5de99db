//! OAuth 1.0a support with convenience APIs.

// Re-export all OAuth 1.0a signing types
pub use oauthsig_oauth1::*;

use crate::{Context, Signer};

/// Default OAuth 1.0a Signer type.
pub type DefaultSigner = Signer<Credential>;

/// Create a default OAuth 1.0a signer.
///
/// This function creates a signer with:
/// - The given context
/// - Default credential provider (config first, then env vars)
/// - Request signer taking the current time and random nonces
///
/// # Example
///
/// ```no_run
/// # async fn example() -> oauthsig::Result<()> {
/// use http::Method;
/// use oauthsig::oauth1::{default_signer, Config};
/// use oauthsig::SigningRequest;
///
/// let ctx = oauthsig::default_context();
/// let config = Config::new().from_env(&ctx);
/// let host = config.host.clone().unwrap_or_default();
/// let signer = default_signer(ctx, config);
///
/// let mut req = SigningRequest::new(Method::GET, &host, "/photos", [("file", "vacation.jpg")])?;
/// signer.sign(&mut req).await?;
/// # Ok(())
/// # }
/// ```
pub fn default_signer(ctx: Context, config: Config) -> DefaultSigner {
    Signer::new(
        ctx,
        DefaultCredentialProvider::new(config.into()),
        RequestSigner::new(),
    )
}
