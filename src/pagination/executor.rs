//! Cursor pagination executor
//!
//! Turns a [`PageRequest`] into one bounded ordered scan and assembles the
//! resulting [`Page`]. The scan fetches one item more than the page size so
//! the existence of a further page is known without a count query.

use super::types::{ListQuery, Page, PageCursor, PageDirection, PageRequest};
use crate::config::PagerConfig;
use crate::cursor::{Cursor, CursorPosition};
use crate::error::{Error, Result};
use crate::sort::{normalize_sort, SortKey, SortSpec};
use crate::store::{DocumentStore, Filter, ScanQuery};
use crate::types::Todo;
use std::sync::Arc;
use tracing::{debug, warn};

/// Pagination engine over a [`DocumentStore`]
///
/// Holds no per-request state; clones share the same store.
#[derive(Clone)]
pub struct Paginator {
    store: Arc<dyn DocumentStore>,
    config: PagerConfig,
}

impl std::fmt::Debug for Paginator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Paginator")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Paginator {
    /// Create a paginator
    pub fn new(store: Arc<dyn DocumentStore>, config: PagerConfig) -> Self {
        Self { store, config }
    }

    /// Create a paginator with the default page-size limits
    pub fn with_defaults(store: Arc<dyn DocumentStore>) -> Self {
        Self::new(store, PagerConfig::default())
    }

    /// The page-size configuration
    pub fn config(&self) -> &PagerConfig {
        &self.config
    }

    /// Normalize list-endpoint options into a request scoped to one shop
    pub fn request_from_query(&self, shop_id: &str, query: &ListQuery) -> Result<PageRequest> {
        let sort = normalize_sort(query.sort.as_deref())?;

        let mut filter = Filter::for_shop(shop_id);
        if let Some(search) = query.search.as_deref().filter(|s| !s.trim().is_empty()) {
            filter = filter.with_title(search);
        }

        if query.has_count.unwrap_or(false) {
            debug!("Ignoring hasCount for shop {}: totals are not computed", shop_id);
        }

        Ok(PageRequest {
            filter,
            sort,
            cursor: PageCursor::from_tokens(query.before.as_deref(), query.after.as_deref())?,
            limit: self.config.clamp_limit(query.limit),
        })
    }

    /// List one page of a shop's todos from list-endpoint options
    pub async fn list(&self, shop_id: &str, query: &ListQuery) -> Result<Page> {
        let request = self.request_from_query(shop_id, query)?;
        self.fetch_page(&request).await
    }

    /// Fetch one page
    pub async fn fetch_page(&self, request: &PageRequest) -> Result<Page> {
        let limit = self.config.clamp_limit(Some(request.limit));
        let direction = request.direction();

        let bound = match &request.cursor {
            Some(page_cursor) => Some(self.resolve_cursor(page_cursor.cursor(), request).await?),
            None => None,
        };

        // Moving backward scans the reversed order away from the cursor
        let scan_sort = match direction {
            PageDirection::Forward => request.sort,
            PageDirection::Backward => request.sort.reversed(),
        };

        let mut query = ScanQuery::new(request.filter.clone(), scan_sort, limit.saturating_add(1));
        if let Some(key) = bound {
            query = query.start_after(key);
        }

        debug!(
            "Scanning todos: sort={}, direction={:?}, limit={}, bounded={}",
            request.sort,
            direction,
            limit,
            query.start_after.is_some()
        );

        let mut items = self.store.scan(&query).await.map_err(|e| {
            warn!("Todo scan failed: {}", e);
            e
        })?;

        let has_more = items.len() > limit;
        items.truncate(limit);

        let (has_next, has_previous) = match direction {
            PageDirection::Forward => (has_more, request.cursor.is_some()),
            PageDirection::Backward => {
                items.reverse();
                (true, has_more)
            }
        };

        Ok(assemble_page(items, request.sort, has_next, has_previous))
    }

    /// Resolve a cursor into the position it marks in the request's order
    ///
    /// Bare document ids are looked up and must belong to the requested shop.
    async fn resolve_cursor(&self, cursor: &Cursor, request: &PageRequest) -> Result<SortKey> {
        let sort = &request.sort;
        match cursor {
            Cursor::Position(position) => {
                if position.field != sort.field {
                    warn!(
                        "Cursor issued for sort field {} used with {}",
                        position.field, sort.field
                    );
                    return Err(Error::invalid_cursor(
                        cursor.token(),
                        format!(
                            "cursor was issued for sort field '{}', not '{}'",
                            position.field, sort.field
                        ),
                    ));
                }
                Ok(position.key.clone())
            }
            Cursor::DocumentId(id) => match self.store.get(id).await? {
                Some(todo) if request.filter.matches_shop(&todo) => Ok(todo.sort_key(sort.field)),
                _ => {
                    warn!("Cursor document {} no longer exists", id);
                    Err(Error::invalid_cursor(id.clone(), "document not found"))
                }
            },
        }
    }
}

fn assemble_page(items: Vec<Todo>, sort: SortSpec, has_next: bool, has_previous: bool) -> Page {
    let cursor_at = |todo: &Todo| CursorPosition::of(todo, sort.field).encode();

    Page {
        start_cursor: items.first().map(cursor_at),
        end_cursor: items.last().map(cursor_at),
        items,
        has_next,
        has_previous,
    }
}
