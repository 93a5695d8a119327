//! Pagination module
//!
//! Cursor-based, look-ahead pagination over the todo collection.
//!
//! # Overview
//!
//! A [`PageRequest`] (filter, sort, optional cursor, limit) is executed by the
//! [`Paginator`] as a single bounded scan of `limit + 1` documents. The extra
//! document tells whether another page exists in the direction of travel, so
//! no total count is ever needed. Pages produced from an `after` cursor always
//! have a previous page, pages produced from a `before` cursor always have a
//! next page, and the first page never has a previous one.
//!
//! Consistency is weak: writes between two page fetches may cause an item to
//! be skipped or repeated across the boundary.

mod executor;
mod types;

pub use executor::Paginator;
pub use types::{
    ListQuery, ListResponse, Page, PageCursor, PageDirection, PageInfo, PageRequest,
};
