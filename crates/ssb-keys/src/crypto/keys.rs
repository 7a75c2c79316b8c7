//! Ed25519 key pair generation.
//!
//! Key pairs back the feed identity: the public key IS the identity,
//! the private key proves ownership of the feed.

use ed25519_dalek::{SigningKey, VerifyingKey};
use zeroize::Zeroize;

use crate::error::{KeysError, Result};

/// Length in bytes of an Ed25519 seed, secret key, and public key.
pub const KEY_LENGTH: usize = 32;

/// An Ed25519 key pair.
///
/// The signing key is zeroized on drop to prevent private key leakage.
pub struct Ed25519KeyPair {
    signing_key: SigningKey,
    verifying_key: VerifyingKey,
}

impl Ed25519KeyPair {
    /// Generate a new key pair from the operating system's random source.
    pub fn generate() -> Self {
        let signing_key = SigningKey::generate(&mut rand::thread_rng());
        let verifying_key = signing_key.verifying_key();
        Self {
            signing_key,
            verifying_key,
        }
    }

    /// Derive a key pair deterministically from a 32-byte seed.
    ///
    /// The same seed always yields the same key pair, on every platform.
    ///
    /// # Errors
    ///
    /// Returns `KeysError::InvalidSeed` if `seed` is not exactly 32 bytes.
    pub fn from_seed(seed: &[u8]) -> Result<Self> {
        let bytes: [u8; KEY_LENGTH] = seed
            .try_into()
            .map_err(|_| KeysError::InvalidSeed(seed.len()))?;
        let signing_key = SigningKey::from_bytes(&bytes);
        let verifying_key = signing_key.verifying_key();
        Ok(Self {
            signing_key,
            verifying_key,
        })
    }

    /// Return the signing key bytes. Caller must zeroize after use.
    pub fn signing_key_bytes(&self) -> [u8; KEY_LENGTH] {
        self.signing_key.to_bytes()
    }

    /// Return the verifying key bytes.
    pub fn verifying_key_bytes(&self) -> [u8; KEY_LENGTH] {
        self.verifying_key.to_bytes()
    }
}

impl Drop for Ed25519KeyPair {
    fn drop(&mut self) {
        // SigningKey stores bytes internally; zeroize via conversion
        let mut bytes = self.signing_key.to_bytes();
        bytes.zeroize();
    }
}
