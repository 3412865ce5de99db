use std::fmt::Debug;

use oauthsig_core::{Error, Result};
use rand::rngs::OsRng;
use rand::RngCore;

use crate::constants::{NONCE_ALPHABET, NONCE_LENGTH};

/// GenerateNonce produces the `oauth_nonce` of a signing call.
///
/// Implementations must hand out a fresh value for every call. A timestamp and
/// nonce pair that repeats is what the server rejects as a replay.
pub trait GenerateNonce: Debug + Send + Sync + 'static {
    /// Generate a new nonce.
    fn generate_nonce(&self) -> Result<String>;
}

/// RandomNonce draws alphanumeric nonces from the OS randomness source.
#[derive(Debug, Clone, Copy)]
pub struct RandomNonce {
    len: usize,
}

impl Default for RandomNonce {
    fn default() -> Self {
        Self { len: NONCE_LENGTH }
    }
}

impl RandomNonce {
    /// Create a generator that yields nonces of `len` characters.
    pub fn new(len: usize) -> Self {
        Self { len }
    }
}

impl GenerateNonce for RandomNonce {
    fn generate_nonce(&self) -> Result<String> {
        // Bytes at or above this bound are rejected so that `b % 62` stays uniform.
        const BOUND: usize = NONCE_ALPHABET.len() * (256 / NONCE_ALPHABET.len());

        let mut nonce = String::with_capacity(self.len);
        let mut buf = [0u8; 32];

        while nonce.len() < self.len {
            OsRng.try_fill_bytes(&mut buf).map_err(|e| {
                Error::unexpected("randomness source unavailable for nonce").with_source(e)
            })?;

            for b in buf.iter().map(|b| *b as usize).filter(|b| *b < BOUND) {
                if nonce.len() == self.len {
                    break;
                }
                nonce.push(NONCE_ALPHABET[b % NONCE_ALPHABET.len()] as char);
            }
        }

        Ok(nonce)
    }
}

/// StaticNonce always returns the same nonce.
///
/// # Note
///
/// Reusing a nonce defeats replay protection. Only use this for testing.
#[derive(Debug, Clone)]
pub struct StaticNonce(String);

impl StaticNonce {
    /// Create a generator that always yields `nonce`.
    pub fn new(nonce: impl Into<String>) -> Self {
        Self(nonce.into())
    }
}

impl GenerateNonce for StaticNonce {
    fn generate_nonce(&self) -> Result<String> {
        Ok(self.0.clone())
    }
}
