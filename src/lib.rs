//! # todo-pager
//!
//! Cursor-based pagination for a multi-tenant todo collection held in a
//! document store.
//!
//! ## Features
//!
//! - **Look-ahead paging**: one bounded scan of `limit + 1` documents per page,
//!   no total-count query
//! - **Both directions**: `after` and `before` cursors, output always in
//!   canonical forward order
//! - **Opaque cursors**: tokens carry the boundary position, bare document ids
//!   are still accepted
//! - **Pluggable storage**: any backend implementing [`store::DocumentStore`]
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use todo_pager::{ListQuery, MemoryStore, PagerConfig, Paginator, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let store = MemoryStore::new();
//!     store.add_todo("shop-1", "Buy milk".into()).await;
//!
//!     let paginator = Paginator::new(Arc::new(store), PagerConfig::default());
//!     let query = ListQuery { sort: Some("-title".into()), ..Default::default() };
//!     let page = paginator.list("shop-1", &query).await?;
//!
//!     for todo in &page.items {
//!         println!("{}", todo.title);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ListQuery ──► Paginator::request_from_query ──► PageRequest
//!                 (sort normalizer, cursor parse,     │
//!                  limit clamp, tenant filter)        ▼
//!                                  Paginator::fetch_page
//!                                   │ resolve cursor ──► DocumentStore::get
//!                                   │ scan limit + 1 ──► DocumentStore::scan
//!                                   ▼
//!                        Page { items, has_next, has_previous, cursors }
//!                                   │
//!                                   ▼
//!                   ListResponse { data, pageInfo | error }
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Todo document and common types
pub mod types;

/// Page-size configuration
pub mod config;

/// Sort token normalization and ordering
pub mod sort;

/// Opaque cursor tokens
pub mod cursor;

/// Storage seam and in-memory store
pub mod store;

/// Cursor pagination engine
pub mod pagination;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::PagerConfig;
pub use cursor::{Cursor, CursorPosition};
pub use error::{Error, Result};
pub use pagination::{ListQuery, ListResponse, Page, PageInfo, PageRequest, Paginator};
pub use sort::{normalize_sort, SortDirection, SortField, SortSpec};
pub use store::{DocumentStore, Filter, MemoryStore};
pub use types::{NewTodo, Todo, TodoPatch};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
