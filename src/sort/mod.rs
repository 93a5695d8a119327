//! Sort module
//!
//! Maps caller-supplied sort tokens (`"title"`, `"-createdAt"`, ...) to a
//! concrete [`SortSpec`] and defines the total order used by the pagination
//! engine: the sort field first, then the document id as tie-break.

mod normalizer;
mod types;

pub use normalizer::normalize_sort;
pub use types::{SortDirection, SortField, SortKey, SortSpec, SortValue};
