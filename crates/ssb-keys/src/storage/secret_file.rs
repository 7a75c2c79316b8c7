//! Secret file persistence — load-or-create semantics over a single path.
//!
//! The secret file is shared with other implementations of the protocol, so
//! both the comment-wrapped layout on write and the lenient extraction on
//! read are fixed contracts.
//!
//! # Concurrency
//!
//! Writes are plain `std::fs::write` with no cross-process locking and no
//! atomic rename. A loader racing a creator on the same path can observe a
//! partially written file. This is an accepted limitation of the format;
//! callers that need cross-process coordination must provide it themselves.

use std::path::{Path, PathBuf};

use crate::error::{KeysError, Result};
use crate::identity::Keys;

/// Warning banner written above the JSON body of every secret file.
const SECRET_FILE_HEADER: &str = "\
# WARNING: Never show this to anyone.
# WARNING: Never edit it or use it on multiple devices at once.
#
# This is your SECRET, it gives you magical powers. With your secret you can
# sign your messages so that your friends can verify that the messages came
# from you. If anyone learns your secret, they can use it to impersonate you.
#
# If you use this secret on more than one device you will create a fork and
# your friends will stop replicating your content.
#
";

/// Return the default secret file path, `~/.ssb/secret`.
///
/// # Errors
///
/// Returns `KeysError::NoHomeDir` when the home directory cannot be
/// determined from the environment.
pub fn default_secret_path() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or(KeysError::NoHomeDir)?;
    Ok(home.join(".ssb").join("secret"))
}

/// Load the identity stored at `path`, or create one there if the file does
/// not exist. `None` resolves to [`default_secret_path`].
///
/// # Errors
///
/// Propagates the errors of [`load`] and [`create`], plus
/// `KeysError::NoHomeDir` when no path is given and the home directory is
/// unknown.
pub fn load_or_create(path: Option<&Path>) -> Result<Keys> {
    let resolved = match path {
        Some(p) => p.to_path_buf(),
        None => default_secret_path()?,
    };
    if resolved.exists() {
        load(&resolved)
    } else {
        create(&resolved)
    }
}

/// Load an identity from the secret file at `path`.
///
/// The JSON body is located by a brace-depth scan that skips string
/// literals, so surrounding comment lines and any nesting inside the object
/// are handled; everything outside the object is ignored.
///
/// # Errors
///
/// Returns `KeysError::Io` if the file cannot be read, and
/// `KeysError::CorruptSecretFile` if it contains no JSON object or the
/// object does not decode to a valid identity.
pub fn load(path: &Path) -> Result<Keys> {
    let content = std::fs::read_to_string(path)?;
    let json = extract_json(&content).ok_or_else(|| {
        KeysError::CorruptSecretFile(format!("no JSON object found in {}", path.display()))
    })?;
    let keys = Keys::from_canonical_json(json).map_err(|e| match e {
        KeysError::Decode(msg) => KeysError::CorruptSecretFile(msg),
        other => other,
    })?;
    log::debug!("loaded identity {} from {}", keys.id(), path.display());
    Ok(keys)
}

/// Generate a fresh identity and write it to a new secret file at `path`,
/// creating parent directories as needed.
///
/// The write is best-effort: on failure a warning is logged and the
/// in-memory identity is still returned, favoring a usable identity over
/// durability. Callers that need durability must verify persistence
/// themselves.
pub fn create(path: &Path) -> Result<Keys> {
    let keys = Keys::generate();
    match write_secret_file(&keys, path) {
        Ok(()) => log::debug!("created identity {} at {}", keys.id(), path.display()),
        Err(e) => log::warn!(
            "failed to write secret file {}: {e}; identity exists in memory only",
            path.display()
        ),
    }
    Ok(keys)
}

/// Render the comment-wrapped secret file content for `keys`.
fn render_secret_file(keys: &Keys) -> Result<String> {
    let json = keys.to_canonical_json()?;
    Ok(format!(
        "{SECRET_FILE_HEADER}{json}\n\
         #\n\
         # The only part of this file that's safe to share is your public name:\n\
         #\n\
         #   \"{}\"\n",
        keys.id()
    ))
}

fn write_secret_file(keys: &Keys, path: &Path) -> Result<()> {
    let content = render_secret_file(keys)?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    Ok(())
}

/// Return the first complete JSON object embedded in `content`.
///
/// Scans from the first `{` and tracks brace depth, ignoring braces inside
/// string literals (including escaped quotes), until the matching `}`.
/// Returns `None` when no balanced object exists.
fn extract_json(content: &str) -> Option<&str> {
    let start = content.find('{')?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (i, b) in content.bytes().enumerate().skip(start) {
        if in_string {
            if escaped {
                escaped = false;
            } else if b == b'\\' {
                escaped = true;
            } else if b == b'"' {
                in_string = false;
            }
            continue;
        }
        match b {
            b'"' => in_string = true,
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    // braces and quotes are ASCII, so i + 1 is a char boundary
                    return Some(&content[start..=i]);
                }
            }
            _ => {}
        }
    }
    None
}
