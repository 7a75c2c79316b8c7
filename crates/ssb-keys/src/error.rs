//! Error types for ssb-keys.
//!
//! All errors are strongly typed and propagated without panicking.
//! Private key material is never included in error messages.

/// Keys error types covering all operations.
#[derive(Debug, thiserror::Error)]
pub enum KeysError {
    #[error("Invalid seed: expected 32 bytes, got {0}")]
    InvalidSeed(usize),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Corrupt secret file: {0}")]
    CorruptSecretFile(String),

    #[error("Could not determine home directory")]
    NoHomeDir,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience Result alias.
pub type Result<T> = std::result::Result<T, KeysError>;
