//! Storage types and traits

use crate::error::Result;
use crate::sort::{SortKey, SortSpec};
use crate::types::Todo;
use async_trait::async_trait;

/// Equality predicates applied before ordering
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    /// Owning shop (tenant)
    pub shop_id: Option<String>,
    /// Exact title match (the `search` option)
    pub title: Option<String>,
}

impl Filter {
    /// Create an empty filter (matches everything)
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter scoped to one shop
    pub fn for_shop(shop_id: impl Into<String>) -> Self {
        Self {
            shop_id: Some(shop_id.into()),
            title: None,
        }
    }

    /// Add an exact title predicate
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Check whether a document belongs to the filtered shop
    pub fn matches_shop(&self, todo: &Todo) -> bool {
        self.shop_id.as_ref().map_or(true, |shop| &todo.shop_id == shop)
    }

    /// Check whether a document satisfies every predicate
    pub fn matches(&self, todo: &Todo) -> bool {
        self.matches_shop(todo)
            && self.title.as_ref().map_or(true, |title| &todo.title == title)
    }
}

/// A bounded ordered scan over the collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanQuery {
    /// Predicates
    pub filter: Filter,
    /// Scan order (field, then id, same direction)
    pub sort: SortSpec,
    /// Exclusive lower bound in scan order
    pub start_after: Option<SortKey>,
    /// Maximum number of documents to return
    pub limit: usize,
}

impl ScanQuery {
    /// Create an unbounded-start scan
    pub fn new(filter: Filter, sort: SortSpec, limit: usize) -> Self {
        Self {
            filter,
            sort,
            start_after: None,
            limit,
        }
    }

    /// Resume strictly after `key` in scan order
    #[must_use]
    pub fn start_after(mut self, key: SortKey) -> Self {
        self.start_after = Some(key);
        self
    }

    /// Check whether a document lies past the start bound
    pub fn is_past_start(&self, todo: &Todo) -> bool {
        self.start_after.as_ref().map_or(true, |bound| {
            self.sort.compare(&todo.sort_key(self.sort.field), bound) == std::cmp::Ordering::Greater
        })
    }
}

/// Ordered-scan capability provided by the storage collaborator
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Return at most `query.limit` documents matching `query.filter`,
    /// ordered by `query.sort`, strictly after `query.start_after`
    async fn scan(&self, query: &ScanQuery) -> Result<Vec<Todo>>;

    /// Look up a single document by id
    async fn get(&self, id: &str) -> Result<Option<Todo>>;
}
