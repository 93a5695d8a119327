//! Cursor types

use super::codec::{decode_position, encode_position};
use crate::sort::{SortField, SortKey};
use crate::types::Todo;
use std::fmt;

/// A resolved boundary: where a page starts or ends in an ordering by `field`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CursorPosition {
    /// Field the position was taken in
    pub field: SortField,
    /// Sort value and tie-break id of the boundary document
    pub key: SortKey,
}

impl CursorPosition {
    /// Create a position
    pub fn new(field: SortField, key: SortKey) -> Self {
        Self { field, key }
    }

    /// Position of `todo` in an ordering by `field`
    pub fn of(todo: &Todo, field: SortField) -> Self {
        Self::new(field, todo.sort_key(field))
    }

    /// Encode as an opaque token
    pub fn encode(&self) -> String {
        encode_position(self)
    }
}

/// A cursor as supplied by the caller
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Cursor {
    /// Encoded position issued by the engine
    Position(CursorPosition),
    /// Bare document identifier
    DocumentId(String),
}

impl Cursor {
    /// Parse a raw token
    ///
    /// Returns `None` for blank tokens. Tokens that decode to an encoded
    /// position become [`Cursor::Position`]; anything else is taken as a
    /// document identifier.
    pub fn parse(token: &str) -> Option<Self> {
        let token = token.trim();
        if token.is_empty() {
            return None;
        }

        Some(match decode_position(token) {
            Some(position) => Self::Position(position),
            None => Self::DocumentId(token.to_string()),
        })
    }

    /// Cursor pointing at a document by id
    pub fn document(id: impl Into<String>) -> Self {
        Self::DocumentId(id.into())
    }

    /// Check if this cursor needs a store lookup to resolve
    pub fn is_document_id(&self) -> bool {
        matches!(self, Self::DocumentId(_))
    }

    /// Token form, as it would be sent over the wire
    pub fn token(&self) -> String {
        match self {
            Self::Position(position) => position.encode(),
            Self::DocumentId(id) => id.clone(),
        }
    }
}

impl From<CursorPosition> for Cursor {
    fn from(position: CursorPosition) -> Self {
        Self::Position(position)
    }
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.token())
    }
}
