//! Content-derived widget identity.
//!
//! Every widget (and every form, via its submit button) is identified by a
//! deterministic digest of its kind tag, its marshalled payload, and an
//! optional user-supplied key. Two widgets with identical content produce
//! identical ids; a `key` is the caller's tool for telling them apart.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::error::{WeftError, WeftResult};

/// Number of digest characters kept in a widget id.
///
/// 20 base64 characters give 120 bits of the SHA-256 output, far beyond
/// what id collisions within a single app could plausibly reach.
const DIGEST_LEN: usize = 20;

/// Computes the identity of a widget from its kind tag, payload, and key.
///
/// The digest covers all three inputs, so widgets of different kinds, with
/// different payload content, or with different keys never share an id.
/// When a key is supplied it is additionally appended in clear, which keeps
/// user-keyed ids recognizable in wire payloads and error messages.
///
/// # Errors
///
/// Returns [`WeftError::Serialization`] if the payload cannot be
/// JSON-serialized.
pub fn widget_id(kind: &str, descriptor: &impl Serialize, key: Option<&str>) -> WeftResult<String> {
    let payload = serde_json::to_vec(descriptor)
        .map_err(|err| WeftError::Serialization(err.to_string()))?;

    // NUL separators keep the concatenated input unambiguous: neither the
    // kind tag nor JSON output can contain a raw NUL byte.
    let mut hasher = Sha256::new();
    hasher.update(kind.as_bytes());
    hasher.update([0u8]);
    hasher.update(&payload);
    hasher.update([0u8]);
    if let Some(key) = key {
        hasher.update(key.as_bytes());
    }

    let mut digest = URL_SAFE_NO_PAD.encode(hasher.finalize());
    digest.truncate(DIGEST_LEN);

    Ok(match key {
        Some(key) => format!("{kind}-{digest}-{key}"),
        None => format!("{kind}-{digest}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Payload {
        label: String,
        default: bool,
    }

    fn payload(label: &str) -> Payload {
        Payload {
            label: label.to_string(),
            default: false,
        }
    }

    #[test]
    fn test_widget_id_is_deterministic() {
        let a = widget_id("checkbox", &payload("agree"), None).unwrap();
        let b = widget_id("checkbox", &payload("agree"), None).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_widget_id_varies_by_content() {
        let a = widget_id("checkbox", &payload("agree"), None).unwrap();
        let b = widget_id("checkbox", &payload("decline"), None).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_widget_id_varies_by_kind() {
        let a = widget_id("checkbox", &payload("agree"), None).unwrap();
        let b = widget_id("button", &payload("agree"), None).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_widget_id_varies_by_key() {
        let a = widget_id("checkbox", &payload("agree"), Some("foo")).unwrap();
        let b = widget_id("checkbox", &payload("agree"), Some("bar")).unwrap();
        let c = widget_id("checkbox", &payload("agree"), None).unwrap();
        assert_ne!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_widget_id_embeds_user_key() {
        let id = widget_id("button", &payload("Submit"), Some("foo")).unwrap();
        assert!(id.ends_with("-foo"));
        assert!(id.starts_with("button-"));
    }
}
