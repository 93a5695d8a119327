//! Pagination types
//!
//! Page requests, page results and the list-endpoint response envelope.

use crate::cursor::Cursor;
use crate::error::{Error, Result};
use crate::sort::SortSpec;
use crate::store::Filter;
use crate::types::Todo;
use serde::{Deserialize, Serialize};

/// Direction of travel from a cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageDirection {
    Forward,
    Backward,
}

/// A cursor together with the direction to move from it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageCursor {
    /// Items strictly after the cursor
    After(Cursor),
    /// Items strictly before the cursor
    Before(Cursor),
}

impl PageCursor {
    /// Build from the raw `before` / `after` options
    ///
    /// Blank tokens count as absent. Supplying both is an error.
    pub fn from_tokens(before: Option<&str>, after: Option<&str>) -> Result<Option<Self>> {
        let before = before.and_then(Cursor::parse);
        let after = after.and_then(Cursor::parse);

        match (before, after) {
            (Some(_), Some(_)) => Err(Error::ConflictingCursors),
            (Some(cursor), None) => Ok(Some(Self::Before(cursor))),
            (None, Some(cursor)) => Ok(Some(Self::After(cursor))),
            (None, None) => Ok(None),
        }
    }

    /// Direction of travel
    pub fn direction(&self) -> PageDirection {
        match self {
            Self::After(_) => PageDirection::Forward,
            Self::Before(_) => PageDirection::Backward,
        }
    }

    /// The underlying cursor
    pub fn cursor(&self) -> &Cursor {
        match self {
            Self::After(cursor) | Self::Before(cursor) => cursor,
        }
    }
}

/// A normalized page request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    /// Equality predicates
    pub filter: Filter,
    /// Ordering
    pub sort: SortSpec,
    /// Boundary to resume from, `None` for the first page
    pub cursor: Option<PageCursor>,
    /// Requested page size (clamped by the paginator)
    pub limit: usize,
}

impl PageRequest {
    /// First page of `filter` in `sort` order
    pub fn new(filter: Filter, sort: SortSpec, limit: usize) -> Self {
        Self {
            filter,
            sort,
            cursor: None,
            limit,
        }
    }

    /// Move forward from `cursor`
    #[must_use]
    pub fn after(mut self, cursor: Cursor) -> Self {
        self.cursor = Some(PageCursor::After(cursor));
        self
    }

    /// Move backward from `cursor`
    #[must_use]
    pub fn before(mut self, cursor: Cursor) -> Self {
        self.cursor = Some(PageCursor::Before(cursor));
        self
    }

    /// Direction of travel (forward for the first page)
    pub fn direction(&self) -> PageDirection {
        self.cursor
            .as_ref()
            .map_or(PageDirection::Forward, PageCursor::direction)
    }
}

/// One page of results, always in canonical forward order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// Documents on this page
    pub items: Vec<Todo>,
    /// At least one item follows the last item
    pub has_next: bool,
    /// At least one item precedes the first item
    pub has_previous: bool,
    /// Cursor positioned at the first item
    pub start_cursor: Option<String>,
    /// Cursor positioned at the last item
    pub end_cursor: Option<String>,
}

impl Page {
    /// Page with no items and no neighbours
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            has_next: false,
            has_previous: false,
            start_cursor: None,
            end_cursor: None,
        }
    }

    /// Number of items on the page
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the page has no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Navigation metadata
    pub fn page_info(&self) -> PageInfo {
        PageInfo {
            has_next: self.has_next,
            has_previous: self.has_previous,
            start_cursor: self.start_cursor.clone(),
            end_cursor: self.end_cursor.clone(),
        }
    }
}

/// Navigation metadata of a page, as sent to the UI
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub has_next: bool,
    #[serde(rename = "hasPre")]
    pub has_previous: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_cursor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_cursor: Option<String>,
}

/// Query options of the list endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    /// Sort token (`title`, `-createdAt`, ...)
    #[serde(default)]
    pub sort: Option<String>,
    /// Exact title to match
    #[serde(default)]
    pub search: Option<String>,
    /// Cursor to move backward from
    #[serde(default)]
    pub before: Option<String>,
    /// Cursor to move forward from
    #[serde(default)]
    pub after: Option<String>,
    /// Page size
    #[serde(default)]
    pub limit: Option<usize>,
    /// Total-count request; accepted but never computed
    #[serde(default)]
    pub has_count: Option<bool>,
}

/// Response body of the list endpoint
///
/// On success `data` holds the page and `pageInfo` its navigation flags. On
/// failure `data` is empty and `error` / `errorKind` describe the problem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListResponse {
    pub data: Vec<Todo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_info: Option<PageInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_kind: Option<String>,
}

impl ListResponse {
    /// Successful response
    pub fn success(page: Page) -> Self {
        let page_info = page.page_info();
        Self {
            data: page.items,
            page_info: Some(page_info),
            error: None,
            error_kind: None,
        }
    }

    /// Failed response with an empty result set
    pub fn failure(error: &Error) -> Self {
        Self {
            data: Vec::new(),
            page_info: None,
            error: Some(error.to_string()),
            error_kind: Some(error.kind().to_string()),
        }
    }

    /// Build from the outcome of a page fetch
    pub fn from_result(result: Result<Page>) -> Self {
        match result {
            Ok(page) => Self::success(page),
            Err(e) => Self::failure(&e),
        }
    }

    /// Check if this response carries an error
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

impl From<Page> for ListResponse {
    fn from(page: Page) -> Self {
        Self::success(page)
    }
}
