//! Feed identity — the Ed25519 keypair plus its canonical encoding.

pub mod keys;

pub use keys::{EncryptionScheme, Keys};
