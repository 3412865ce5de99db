//! OAuth 1.0a request signer, HMAC-SHA1 variant.
//!
//! ```no_run
//! use oauthsig_core::{Context, OsEnv, Signer, SigningRequest};
//! use oauthsig_oauth1::{Config, DefaultCredentialProvider, RequestSigner};
//! use http::Method;
//!
//! # async fn example() -> oauthsig_core::Result<()> {
//! let ctx = Context::new().with_env(OsEnv);
//! let config = Config::new().from_env(&ctx);
//! let host = config.host.clone().unwrap_or_default();
//!
//! let signer = Signer::new(
//!     ctx,
//!     DefaultCredentialProvider::new(config.into()),
//!     RequestSigner::new(),
//! );
//!
//! let mut req = SigningRequest::new(Method::GET, &host, "/api/photo/list", [("size", 10i64)])?;
//! signer.sign(&mut req).await?;
//! # Ok(())
//! # }
//! ```

mod constants;
pub use constants::OAUTH_ENCODE_SET;

mod encode;
pub use encode::percent_encode;

mod nonce;
pub use nonce::{GenerateNonce, RandomNonce, StaticNonce};

mod config;
pub use config::Config;

mod credential;
pub use credential::Credential;

mod sign_request;
pub use sign_request::{
    authorization, canonical_params, normalize_params, normalized_param_string, sign,
    signature_base_string, signing_key, RequestSigner, SigningContext,
};

mod provide_credential;
pub use provide_credential::*;
