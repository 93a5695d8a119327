//! Cursor token encoding
//!
//! Token format: base64url (no padding) of a compact JSON object
//! `{"f": <field>, "v": <sort value>, "id": <document id>}`.

use super::types::CursorPosition;
use crate::sort::{SortField, SortKey, SortValue};
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct Token {
    f: SortField,
    v: SortValue,
    id: String,
}

/// Encode a position as an opaque, URL-safe token
pub fn encode_position(position: &CursorPosition) -> String {
    let token = Token {
        f: position.field,
        v: position.key.value.clone(),
        id: position.key.id.clone(),
    };
    // Serializing a struct of plain strings and enums cannot fail
    let json = serde_json::to_vec(&token).unwrap_or_default();
    URL_SAFE_NO_PAD.encode(json)
}

/// Decode a token produced by [`encode_position`]
///
/// Returns `None` when the token is not an encoded position or when the
/// encoded value does not fit the encoded field.
pub fn decode_position(token: &str) -> Option<CursorPosition> {
    let bytes = URL_SAFE_NO_PAD.decode(token).ok()?;
    let token: Token = serde_json::from_slice(&bytes).ok()?;

    if !token.f.accepts(&token.v) {
        return None;
    }

    Some(CursorPosition::new(token.f, SortKey::new(token.v, token.id)))
}
