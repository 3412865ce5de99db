use percent_encoding::AsciiSet;
use percent_encoding::NON_ALPHANUMERIC;

// Env values used by oauthsig.
pub const OAUTHSIG_HOST: &str = "OAUTHSIG_HOST";
pub const OAUTHSIG_CONSUMER_KEY: &str = "OAUTHSIG_CONSUMER_KEY";
pub const OAUTHSIG_CONSUMER_SECRET: &str = "OAUTHSIG_CONSUMER_SECRET";
pub const OAUTHSIG_ACCESS_TOKEN: &str = "OAUTHSIG_ACCESS_TOKEN";
pub const OAUTHSIG_ACCESS_TOKEN_SECRET: &str = "OAUTHSIG_ACCESS_TOKEN_SECRET";

// Protocol parameters.
pub const OAUTH_CONSUMER_KEY: &str = "oauth_consumer_key";
pub const OAUTH_TOKEN: &str = "oauth_token";
pub const OAUTH_SIGNATURE_METHOD: &str = "oauth_signature_method";
pub const OAUTH_SIGNATURE: &str = "oauth_signature";
pub const OAUTH_TIMESTAMP: &str = "oauth_timestamp";
pub const OAUTH_NONCE: &str = "oauth_nonce";
pub const OAUTH_VERSION: &str = "oauth_version";

/// Protocol params, they travel in the `Authorization` header only.
pub const OAUTH_PARAMS: [&str; 6] = [
    OAUTH_CONSUMER_KEY,
    OAUTH_TOKEN,
    OAUTH_SIGNATURE_METHOD,
    OAUTH_TIMESTAMP,
    OAUTH_NONCE,
    OAUTH_VERSION,
];

pub const HMAC_SHA1: &str = "HMAC-SHA1";
pub const VERSION_1_0: &str = "1.0";

pub const NONCE_LENGTH: usize = 16;
pub const NONCE_ALPHABET: &[u8; 62] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// AsciiSet for [OAuth 1.0a percent encoding](https://datatracker.ietf.org/doc/html/rfc5849#section-3.6)
///
/// - Encode every byte except the unreserved characters: 'A'-'Z', 'a'-'z', '0'-'9', '-', '.', '_', and '~'.
pub static OAUTH_ENCODE_SET: AsciiSet = NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');
