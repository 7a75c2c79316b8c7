//! Storage layer for the secret file.
//!
//! A feed's identity persists as a single comment-wrapped text file,
//! `~/.ssb/secret` by default:
//!
//! ```text
//! # WARNING: Never show this to anyone.
//! # ... warning banner ...
//! {
//!   "curve": "ed25519",
//!   "private": "<base64>.ed25519",
//!   "public": "<base64>.ed25519",
//!   "id": "@<base64>.ed25519"
//! }
//! #
//! #   "@<base64>.ed25519"
//! ```
//!
//! The file is written once on first use and only ever read afterwards.

pub mod secret_file;

pub use secret_file::{create, default_secret_path, load, load_or_create};
