//! Tagged value convention — `<base64-payload>.<tag>`.
//!
//! Every encoded private key, public key, and identifier in the protocol is a
//! base64 payload suffixed with the label of the scheme that produced it,
//! e.g. `gaQw6z….ed25519`. Identifiers additionally carry a leading `@`
//! sentinel, which this module treats as opaque payload text.

/// Encode `payload` as base64 and append `.` plus `tag`.
///
/// No escaping is needed: `.` cannot appear in standard base64 output, so the
/// payload half of the result is always dot-free.
pub fn encode(payload: &[u8], tag: &str) -> String {
    let b64 = base64::Engine::encode(&base64::engine::general_purpose::STANDARD, payload);
    format!("{b64}.{tag}")
}

/// Split a tagged value at the **first** `.` into `(payload_base64, tag)`.
///
/// Anything after the first dot, further dots included, belongs to the tag.
/// A value with no dot is all payload and the tag is empty. The payload half
/// is returned still base64-encoded; decoding it is the caller's job.
pub fn decode(value: &str) -> (&str, &str) {
    match value.split_once('.') {
        Some((payload, tag)) => (payload, tag),
        None => (value, ""),
    }
}

/// Return everything strictly after the **last** `.` in `value`.
///
/// This is deliberately the last-dot variant, distinct from [`decode`]'s
/// first-dot split: callers hand in full identifiers (`@<payload>.<tag>`)
/// and want the scheme suffix regardless of dots embedded earlier. A value
/// with no dot is returned whole.
pub fn extract_tag(value: &str) -> &str {
    match value.rfind('.') {
        Some(idx) => &value[idx + 1..],
        None => value,
    }
}
