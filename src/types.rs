//! Common types used throughout todo-pager
//!
//! The `Todo` document and the payloads used to create and edit it.

use crate::sort::{SortField, SortKey, SortValue};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Type Aliases
// ============================================================================

/// Document identifier assigned by the store
pub type DocId = String;

// ============================================================================
// Todo Document
// ============================================================================

/// A todo document as stored in the `todos` collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    /// Document identifier
    pub id: DocId,
    /// Owning shop (tenant)
    #[serde(rename = "shopifyId")]
    pub shop_id: String,
    /// Todo title, also the target of the `search` filter
    pub title: String,
    /// Completion flag
    #[serde(default)]
    pub is_completed: bool,
    /// Server timestamp set on creation
    pub created_at: DateTime<Utc>,
    /// Server timestamp set on creation and every edit
    pub updated_at: DateTime<Utc>,
}

impl Todo {
    /// Value of the given sort field for this document
    pub fn sort_value(&self, field: SortField) -> SortValue {
        match field {
            SortField::CreatedAt => SortValue::Timestamp(self.created_at),
            SortField::UpdatedAt => SortValue::Timestamp(self.updated_at),
            SortField::Title => SortValue::Text(self.title.clone()),
            SortField::Id => SortValue::Text(self.id.clone()),
        }
    }

    /// Position of this document in an ordering by `field`, tie-broken by id
    pub fn sort_key(&self, field: SortField) -> SortKey {
        SortKey {
            value: self.sort_value(field),
            id: self.id.clone(),
        }
    }
}

/// Payload for creating a todo
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTodo {
    /// Todo title
    pub title: String,
    /// Initial completion flag
    #[serde(default)]
    pub is_completed: bool,
}

impl NewTodo {
    /// Create a payload with the given title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            is_completed: false,
        }
    }
}

impl From<&str> for NewTodo {
    fn from(title: &str) -> Self {
        Self::new(title)
    }
}

/// Partial update for an existing todo
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoPatch {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub is_completed: Option<bool>,
}

impl TodoPatch {
    /// Patch that only changes the title
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    /// Patch that only changes the completion flag
    pub fn completed(is_completed: bool) -> Self {
        Self {
            is_completed: Some(is_completed),
            ..Default::default()
        }
    }

    /// Check if the patch changes nothing
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.is_completed.is_none()
    }
}
