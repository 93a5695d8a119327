//! Sort types
//!
//! Defines sortable fields, directions and the comparison key.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Fields a todo listing can be ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    /// Creation timestamp (newest-first listings)
    #[default]
    CreatedAt,
    /// Last edit timestamp
    UpdatedAt,
    /// Todo title
    Title,
    /// Document identifier
    Id,
}

impl SortField {
    /// All sortable fields
    pub const ALL: [SortField; 4] = [
        SortField::CreatedAt,
        SortField::UpdatedAt,
        SortField::Title,
        SortField::Id,
    ];

    /// Wire name of the field
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CreatedAt => "createdAt",
            Self::UpdatedAt => "updatedAt",
            Self::Title => "title",
            Self::Id => "id",
        }
    }

    /// Resolve a field name in wire (`createdAt`) or snake (`created_at`) form
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "createdAt" | "created_at" => Some(Self::CreatedAt),
            "updatedAt" | "updated_at" => Some(Self::UpdatedAt),
            "title" => Some(Self::Title),
            "id" => Some(Self::Id),
            _ => None,
        }
    }

    /// Check whether a value has the shape this field produces
    pub fn accepts(&self, value: &SortValue) -> bool {
        match self {
            Self::CreatedAt | Self::UpdatedAt => matches!(value, SortValue::Timestamp(_)),
            Self::Title | Self::Id => matches!(value, SortValue::Text(_)),
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    /// The opposite direction
    #[must_use]
    pub fn reversed(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Apply this direction to a natural (ascending) ordering
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}

/// A concrete ordering over the collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortSpec {
    /// Primary sort field
    pub field: SortField,
    /// Direction of both the field and the id tie-break
    pub direction: SortDirection,
}

impl Default for SortSpec {
    /// Newest first
    fn default() -> Self {
        Self {
            field: SortField::CreatedAt,
            direction: SortDirection::Descending,
        }
    }
}

impl SortSpec {
    /// Create a sort spec
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// Ascending order by `field`
    pub fn ascending(field: SortField) -> Self {
        Self::new(field, SortDirection::Ascending)
    }

    /// Descending order by `field`
    pub fn descending(field: SortField) -> Self {
        Self::new(field, SortDirection::Descending)
    }

    /// Same field, opposite direction
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self::new(self.field, self.direction.reversed())
    }

    /// Compare two keys in this order
    pub fn compare(&self, a: &SortKey, b: &SortKey) -> Ordering {
        self.direction.apply(a.cmp(b))
    }
}

impl fmt::Display for SortSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.direction {
            SortDirection::Ascending => write!(f, "{}", self.field),
            SortDirection::Descending => write!(f, "-{}", self.field),
        }
    }
}

/// Value of a sort field on a document
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortValue {
    Timestamp(DateTime<Utc>),
    Text(String),
}

/// Position of a document in a total order
///
/// Ordered by `value`, then `id`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SortKey {
    pub value: SortValue,
    pub id: String,
}

impl SortKey {
    /// Create a sort key
    pub fn new(value: SortValue, id: impl Into<String>) -> Self {
        Self {
            value,
            id: id.into(),
        }
    }
}
