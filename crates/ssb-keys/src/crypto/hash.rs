//! Tagged SHA-256 content hashing.
//!
//! Used for content addressing of protocol messages: the digest is rendered
//! as a tagged value, `<base64(digest)>.sha256`. The base64 payload is the
//! raw 32-byte digest, matching the reference protocol implementation
//! (`createHash('sha256').update(data, enc).digest('base64')`).

use sha2::{Digest, Sha256};

use crate::tagged;

/// Byte encoding applied to string input before hashing.
///
/// Two implementations only interoperate when they hash the same bytes, so
/// the encoding must match the one used by the peer producing the hash.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HashEncoding {
    /// UTF-8 (the protocol default).
    #[default]
    Utf8,
    /// UTF-16 little-endian, no byte order mark.
    Utf16Le,
}

/// Compute the tagged SHA-256 hash of `data` under the given encoding.
///
/// Returns `<base64(digest)>.sha256`.
pub fn hash(data: &str, encoding: HashEncoding) -> String {
    let digest = match encoding {
        HashEncoding::Utf8 => Sha256::digest(data.as_bytes()),
        HashEncoding::Utf16Le => {
            let bytes: Vec<u8> = data.encode_utf16().flat_map(u16::to_le_bytes).collect();
            Sha256::digest(&bytes)
        }
    };
    tagged::encode(&digest, "sha256")
}
