use percent_encoding::utf8_percent_encode;

use crate::constants::OAUTH_ENCODE_SET;

/// Percent encode input the way OAuth 1.0a requires.
///
/// Unreserved characters (`A-Z a-z 0-9 - . _ ~`) are kept, every other byte of
/// the utf-8 form becomes `%XX` with uppercase hex. Space is `%20`, never `+`.
pub fn percent_encode(input: &str) -> String {
    utf8_percent_encode(input, &OAUTH_ENCODE_SET).to_string()
}
