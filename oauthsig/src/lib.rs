//! Signing OAuth 1.0a requests without effort.
//!
//! ```no_run
//! use oauthsig::oauth1::Config;
//! use oauthsig::Client;
//!
//! # async fn example() -> oauthsig::Result<()> {
//! let ctx = oauthsig::default_context();
//! let config = Config::new().from_env(&ctx);
//!
//! let client = Client::new(ctx, config)?;
//! let body = client
//!     .post("/api/photo/update", [("title", "Hello World!")])
//!     .await?;
//! println!("{body}");
//! # Ok(())
//! # }
//! ```
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub use oauthsig_core::*;

#[cfg(feature = "default-context")]
mod context;
#[cfg(feature = "default-context")]
pub use context::default_context;

mod client;
pub use client::Client;

pub mod oauth1;
