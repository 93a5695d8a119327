//! Tests for cursor module

use super::*;
use crate::sort::{SortField, SortKey, SortValue};
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use chrono::{TimeZone, Utc};

fn title_position(title: &str, id: &str) -> CursorPosition {
    CursorPosition::new(
        SortField::Title,
        SortKey::new(SortValue::Text(title.to_string()), id),
    )
}

// ============================================================================
// Codec Tests
// ============================================================================

#[test]
fn test_encoded_token_is_url_safe() {
    let token = title_position("needs / escaping ? & =", "doc+1").encode();
    assert!(token
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
}

#[test]
fn test_decode_timestamp_position() {
    let created = Utc.with_ymd_and_hms(2024, 3, 15, 12, 30, 0).unwrap();
    let position = CursorPosition::new(
        SortField::CreatedAt,
        SortKey::new(SortValue::Timestamp(created), "doc9"),
    );

    let decoded = decode_position(&position.encode()).unwrap();
    assert_eq!(decoded.field, SortField::CreatedAt);
    assert_eq!(decoded.key.value, SortValue::Timestamp(created));
    assert_eq!(decoded.key.id, "doc9");
}

#[test]
fn test_decode_rejects_value_of_wrong_shape() {
    let forged = URL_SAFE_NO_PAD.encode(r#"{"f":"createdAt","v":{"text":"a"},"id":"x"}"#);
    assert!(decode_position(&forged).is_none());
}

#[test]
fn test_decode_rejects_unknown_keys() {
    let forged =
        URL_SAFE_NO_PAD.encode(r#"{"f":"title","v":{"text":"a"},"id":"x","extra":1}"#);
    assert!(decode_position(&forged).is_none());
}

#[test]
fn test_decode_rejects_garbage() {
    assert!(decode_position("b").is_none());
    assert!(decode_position("not a token!").is_none());
    assert!(decode_position(&URL_SAFE_NO_PAD.encode("[1,2,3]")).is_none());
}

// ============================================================================
// Cursor Parsing Tests
// ============================================================================

#[test]
fn test_parse_blank_is_none() {
    assert!(Cursor::parse("").is_none());
    assert!(Cursor::parse("   ").is_none());
}

#[test]
fn test_parse_encoded_position() {
    let position = title_position("b", "b");
    let cursor = Cursor::parse(&position.encode()).unwrap();
    assert_eq!(cursor, Cursor::Position(position));
    assert!(!cursor.is_document_id());
}

#[test]
fn test_parse_bare_document_id() {
    let cursor = Cursor::parse("Xk3b9QzP1aLm0o2RtYvW").unwrap();
    assert_eq!(cursor, Cursor::document("Xk3b9QzP1aLm0o2RtYvW"));
    assert!(cursor.is_document_id());
}

#[test]
fn test_token_round_trips_through_parse() {
    let cursors = [
        Cursor::from(title_position("some title", "id-1")),
        Cursor::document("plain-id"),
    ];
    for cursor in cursors {
        assert_eq!(Cursor::parse(&cursor.token()), Some(cursor.clone()));
        assert_eq!(cursor.to_string(), cursor.token());
    }
}
