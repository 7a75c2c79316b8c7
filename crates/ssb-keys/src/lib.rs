//! ssb-keys — Secure Scuttlebutt identity keys.
//!
//! Manages the long-lived cryptographic identity of a feed: Ed25519 keypair
//! generation (random or seed-deterministic), the canonical tagged string
//! and JSON encodings shared with other implementations of the protocol,
//! and load-or-create persistence of the comment-wrapped secret file at
//! `~/.ssb/secret`.
//!
//! ```no_run
//! use ssb_keys::{load_or_create, Keys};
//!
//! # fn main() -> ssb_keys::Result<()> {
//! // Load the feed identity, creating ~/.ssb/secret on first use.
//! let keys = load_or_create(None)?;
//! println!("your public name is {}", keys.id());
//!
//! // Deterministic identity from a 32-byte seed.
//! let seeded = Keys::from_seed(&[7u8; 32])?;
//! assert_eq!(seeded, Keys::from_seed(&[7u8; 32])?);
//! # Ok(())
//! # }
//! ```

pub mod crypto;
pub mod error;
pub mod identity;
pub mod storage;
pub mod tagged;

// Re-export primary types
pub use crypto::hash::{hash, HashEncoding};
pub use error::{KeysError, Result};
pub use identity::{EncryptionScheme, Keys};
pub use storage::{create, default_secret_path, load, load_or_create};
pub use tagged::extract_tag;
