//! Cryptographic primitives for ssb-keys.
//!
//! This module provides:
//! - Ed25519 key generation (random or seed-deterministic)
//! - Tagged SHA-256 content hashing

pub mod hash;
pub mod keys;
