//! OAuth 1.0a HMAC-SHA1 request signer.
use std::collections::BTreeMap;
use std::mem;
use std::sync::Arc;

use async_trait::async_trait;
use http::header::AUTHORIZATION;
use http::HeaderValue;
use http::Method;
use log::debug;
use oauthsig_core::hash::base64_hmac_sha1;
use oauthsig_core::time::{now, unix_timestamp, DateTime};
use oauthsig_core::{Context, Error, Result, SignRequest, SigningRequest};

use crate::constants::*;
use crate::credential::Credential;
use crate::encode::percent_encode;
use crate::nonce::{GenerateNonce, RandomNonce};

/// SigningContext holds the per request values of a signature.
///
/// A new context must be built for every signed request and thrown away after.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SigningContext {
    /// Unix timestamp in seconds.
    pub timestamp: i64,
    /// Random alphanumeric nonce.
    pub nonce: String,
}

impl SigningContext {
    /// Create a signing context from known values.
    pub fn new(timestamp: i64, nonce: impl Into<String>) -> Self {
        Self {
            timestamp,
            nonce: nonce.into(),
        }
    }
}

/// RequestSigner that implements OAuth 1.0a HMAC-SHA1 authorization.
///
/// - [RFC 5849: The OAuth 1.0 Protocol](https://datatracker.ietf.org/doc/html/rfc5849)
#[derive(Debug, Clone)]
pub struct RequestSigner {
    time: Option<DateTime>,
    nonce: Arc<dyn GenerateNonce>,
}

impl Default for RequestSigner {
    fn default() -> Self {
        Self::new()
    }
}

impl RequestSigner {
    /// Create a signer that takes the current time and random nonces.
    pub fn new() -> Self {
        Self {
            time: None,
            nonce: Arc::new(RandomNonce::default()),
        }
    }

    /// Specify the signing time.
    ///
    /// # Note
    ///
    /// We should always take current time to sign requests.
    /// Only use this function for testing.
    pub fn with_time(mut self, time: DateTime) -> Self {
        self.time = Some(time);
        self
    }

    /// Replace the nonce generator.
    pub fn with_nonce(mut self, nonce: impl GenerateNonce) -> Self {
        self.nonce = Arc::new(nonce);
        self
    }

    /// Build a fresh signing context from the clock and the nonce generator.
    pub fn signing_context(&self) -> Result<SigningContext> {
        let time = self.time.unwrap_or_else(now);
        let nonce = self.nonce.generate_nonce()?;

        Ok(SigningContext::new(unix_timestamp(time), nonce))
    }
}

#[async_trait]
impl SignRequest for RequestSigner {
    type Credential = Credential;

    async fn sign_request(
        &self,
        _ctx: &Context,
        req: &mut SigningRequest,
        credential: Option<&Self::Credential>,
    ) -> Result<()> {
        let cred = credential.ok_or_else(|| Error::credential_invalid("missing credential"))?;
        cred.check()?;

        let signing = self.signing_context()?;

        // The transport sends exactly what we sign.
        req.params = canonical_params(mem::take(&mut req.params));

        let value = authorization(
            cred,
            &signing,
            &req.method,
            &req.host(),
            &req.base_url(),
            &req.params,
        );

        let mut value: HeaderValue = value.parse()?;
        value.set_sensitive(true);
        req.headers.insert(AUTHORIZATION, value);

        Ok(())
    }
}

/// De-duplicate params (last write wins), drop protocol params and sort them by key.
///
/// Keys are compared byte by byte, which is what `String`'s `Ord` does. Protocol
/// params are always overwritten while signing, so a caller supplied one would
/// never match the signature.
pub fn canonical_params(params: Vec<(String, String)>) -> Vec<(String, String)> {
    params
        .into_iter()
        .filter(|(k, _)| !OAUTH_PARAMS.contains(&k.as_str()))
        .collect::<BTreeMap<String, String>>()
        .into_iter()
        .collect()
}

/// Merge the protocol params into the request params and sort them.
///
/// Protocol params overwrite request params with the same key.
pub fn normalize_params(
    params: &[(String, String)],
    cred: &Credential,
    signing: &SigningContext,
) -> Vec<(String, String)> {
    let mut merged: BTreeMap<String, String> = params.iter().cloned().collect();

    merged.insert(OAUTH_CONSUMER_KEY.to_string(), cred.consumer_key.clone());
    merged.insert(OAUTH_TOKEN.to_string(), cred.access_token.clone());
    merged.insert(OAUTH_SIGNATURE_METHOD.to_string(), HMAC_SHA1.to_string());
    merged.insert(OAUTH_TIMESTAMP.to_string(), signing.timestamp.to_string());
    merged.insert(OAUTH_NONCE.to_string(), signing.nonce.clone());
    merged.insert(OAUTH_VERSION.to_string(), VERSION_1_0.to_string());

    merged.into_iter().collect()
}

/// Encode every key and value, then join them as `k=v&k=v` in the given order.
pub fn normalized_param_string(params: &[(String, String)]) -> String {
    SigningRequest::params_to_string(params, percent_encode)
}

/// Construct signature base string
///
/// ## Format
///
/// ```text
/// UPPERCASE(METHOD) + "&" +
/// percent_encode(base_url) + "&" +
/// percent_encode(normalized_param_string)
/// ```
///
/// `base_url` must not carry a query, all params live in `normalized`.
pub fn signature_base_string(method: &Method, base_url: &str, normalized: &str) -> String {
    let mut s = String::with_capacity(base_url.len() + normalized.len() * 2 + 16);
    s.push_str(&method.as_str().to_ascii_uppercase());
    s.push('&');
    s.push_str(&percent_encode(base_url));
    s.push('&');
    s.push_str(&percent_encode(normalized));

    s
}

/// Derive the HMAC key: `percent_encode(consumer_secret) & percent_encode(token_secret)`.
///
/// The `&` is always present, an empty token secret yields a trailing `&`.
pub fn signing_key(cred: &Credential) -> String {
    format!(
        "{}&{}",
        percent_encode(&cred.consumer_secret),
        percent_encode(&cred.access_token_secret)
    )
}

/// Base64 encoded HMAC-SHA1 of the signature base string.
pub fn sign(base_string: &str, key: &str) -> String {
    base64_hmac_sha1(key.as_bytes(), base_string.as_bytes())
}

/// Compute the `Authorization` header value.
///
/// This is a pure function of its input: the same credential, signing context
/// and request always give the same header.
pub fn authorization(
    cred: &Credential,
    signing: &SigningContext,
    method: &Method,
    realm: &str,
    base_url: &str,
    params: &[(String, String)],
) -> String {
    let normalized = normalize_params(params, cred, signing);
    let base_string =
        signature_base_string(method, base_url, &normalized_param_string(&normalized));
    debug!(
        "signature base string ({} params): {}",
        normalized.len(),
        &base_string
    );

    let signature = sign(&base_string, &signing_key(cred));

    format!(
        "OAuth realm=\"{realm}\", \
         {OAUTH_CONSUMER_KEY}=\"{}\", \
         {OAUTH_TOKEN}=\"{}\", \
         {OAUTH_SIGNATURE_METHOD}=\"{HMAC_SHA1}\", \
         {OAUTH_SIGNATURE}=\"{}\", \
         {OAUTH_TIMESTAMP}=\"{}\", \
         {OAUTH_NONCE}=\"{}\", \
         {OAUTH_VERSION}=\"{VERSION_1_0}\"",
        percent_encode(&cred.consumer_key),
        percent_encode(&cred.access_token),
        percent_encode(&signature),
        signing.timestamp,
        percent_encode(&signing.nonce),
    )
}
