//! Keys — the root cryptographic identity of a feed.
//!
//! A feed's identity is an Ed25519 key pair. The public key IS the identity:
//! the feed id is `@<base64(public)>.<scheme>`, where the `@` sentinel marks
//! a public identifier and the suffix names the signature scheme. The private
//! key proves ownership of the feed.
//!
//! The canonical JSON encoding is a wire contract shared with other
//! implementations of the protocol; key names, field order, and the tagged
//! string forms must not change.

use std::fmt;

use serde::{Deserialize, Serialize};
use zeroize::Zeroize;

use crate::crypto::keys::Ed25519KeyPair;
use crate::error::{KeysError, Result};
use crate::tagged;

/// Signature scheme label embedded in every encoded key and identifier.
///
/// Construction is closed over the known variants; decoding is permissive
/// (see [`Keys::from_canonical_json`]) so files written by newer
/// implementations remain readable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EncryptionScheme {
    #[default]
    Ed25519,
}

impl EncryptionScheme {
    /// Return the stable string representation used in tags and ids.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ed25519 => "ed25519",
        }
    }
}

impl fmt::Display for EncryptionScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An Ed25519 feed identity: scheme, key pair, and derived id.
///
/// Two `Keys` built from the same seed are byte-for-byte identical in every
/// encoded field. Equality is by value over `(scheme, private, public)`.
/// The private key is zeroized when the underlying key pair drops.
pub struct Keys {
    scheme: EncryptionScheme,
    key_pair: Ed25519KeyPair,
}

/// Canonical JSON shape. Field order follows declaration order and is part
/// of the wire contract: curve, private, public, id.
#[derive(Serialize)]
struct KeysJson {
    curve: String,
    private: String,
    public: String,
    id: String,
}

/// Lenient decode counterpart of [`KeysJson`].
///
/// Only `private` is load-bearing; `public` and `id` are re-derived and
/// `curve` is informational, so all but `private` may be absent.
#[derive(Deserialize)]
struct KeysJsonIn {
    #[serde(default)]
    curve: Option<String>,
    #[serde(default)]
    private: Option<String>,
}

impl Keys {
    /// Generate a fresh identity from the operating system's random source.
    pub fn generate() -> Self {
        Self {
            scheme: EncryptionScheme::Ed25519,
            key_pair: Ed25519KeyPair::generate(),
        }
    }

    /// Derive an identity deterministically from a 32-byte seed.
    ///
    /// # Errors
    ///
    /// Returns `KeysError::InvalidSeed` if `seed` is not exactly 32 bytes.
    pub fn from_seed(seed: &[u8]) -> Result<Self> {
        Ok(Self {
            scheme: EncryptionScheme::Ed25519,
            key_pair: Ed25519KeyPair::from_seed(seed)?,
        })
    }

    /// Return the signature scheme of this identity.
    pub fn scheme(&self) -> EncryptionScheme {
        self.scheme
    }

    /// Return the private key bytes. Caller must zeroize after use.
    pub fn private_key_bytes(&self) -> [u8; 32] {
        self.key_pair.signing_key_bytes()
    }

    /// Return the public key bytes.
    pub fn public_key_bytes(&self) -> [u8; 32] {
        self.key_pair.verifying_key_bytes()
    }

    /// Return the private key as a tagged value, `<base64>.<scheme>`.
    pub fn private_key_string(&self) -> String {
        let mut bytes = self.private_key_bytes();
        let encoded = tagged::encode(&bytes, self.scheme.as_str());
        bytes.zeroize();
        encoded
    }

    /// Return the public key as a tagged value, `<base64>.<scheme>`.
    pub fn public_key_string(&self) -> String {
        tagged::encode(&self.public_key_bytes(), self.scheme.as_str())
    }

    /// Return the feed id, `@<base64(public)>.<scheme>`.
    pub fn id(&self) -> String {
        format!("@{}", self.public_key_string())
    }

    /// Encode this identity as canonical JSON.
    ///
    /// The output is a pretty-printed object with exactly the fields
    /// `curve`, `private`, `public`, `id`, in that order:
    ///
    /// ```json
    /// {
    ///   "curve": "ed25519",
    ///   "private": "<base64>.ed25519",
    ///   "public": "<base64>.ed25519",
    ///   "id": "@<base64>.ed25519"
    /// }
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `KeysError::Decode` if JSON serialization fails, which for
    /// this fixed shape does not happen in practice.
    pub fn to_canonical_json(&self) -> Result<String> {
        let json = KeysJson {
            curve: self.scheme.as_str().to_string(),
            private: self.private_key_string(),
            public: self.public_key_string(),
            id: self.id(),
        };
        serde_json::to_string_pretty(&json).map_err(|e| KeysError::Decode(e.to_string()))
    }

    /// Decode an identity from its canonical JSON encoding.
    ///
    /// Only the `private` field is trusted: the private key bytes are
    /// recovered from it (first-dot tagged split, then base64) and the
    /// public key and id are re-derived, so stale or tampered `public`/`id`
    /// fields in the input cannot produce an inconsistent identity.
    ///
    /// The `curve` field is read but unrecognized values do not fail the
    /// decode; the scheme is fixed at ed25519. This keeps files written by
    /// newer implementations readable.
    ///
    /// # Errors
    ///
    /// Returns `KeysError::Decode` if the text is not a JSON object, the
    /// `private` field is missing, its payload is not valid base64, or the
    /// recovered bytes are not a valid 32-byte private key.
    pub fn from_canonical_json(text: &str) -> Result<Self> {
        let json: KeysJsonIn = serde_json::from_str(text)
            .map_err(|e| KeysError::Decode(format!("invalid JSON: {e}")))?;

        if let Some(curve) = &json.curve {
            if curve != EncryptionScheme::Ed25519.as_str() {
                log::debug!("ignoring unrecognized curve {curve:?}, decoding as ed25519");
            }
        }

        let private = json
            .private
            .ok_or_else(|| KeysError::Decode("missing \"private\" field".to_string()))?;
        let (payload, _tag) = tagged::decode(&private);
        let mut bytes =
            base64::Engine::decode(&base64::engine::general_purpose::STANDARD, payload)
                .map_err(|e| KeysError::Decode(format!("invalid base64 in \"private\": {e}")))?;

        let result = Self::from_seed(&bytes).map_err(|e| match e {
            KeysError::InvalidSeed(n) => {
                KeysError::Decode(format!("private key must be 32 bytes, got {n}"))
            }
            other => other,
        });
        bytes.zeroize();
        result
    }
}

impl PartialEq for Keys {
    fn eq(&self, other: &Self) -> bool {
        self.scheme == other.scheme
            && self.private_key_bytes() == other.private_key_bytes()
            && self.public_key_bytes() == other.public_key_bytes()
    }
}

impl Eq for Keys {}

impl fmt::Debug for Keys {
    /// Private key material is redacted.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Keys")
            .field("curve", &self.scheme)
            .field("public", &self.public_key_string())
            .field("id", &self.id())
            .finish_non_exhaustive()
    }
}
