//! Storage module
//!
//! The pagination engine only needs two capabilities from the document
//! store: an ordered, bounded scan and a point lookup by id. They are
//! expressed by the [`DocumentStore`] trait.
//!
//! # Overview
//!
//! - `DocumentStore` - async trait implemented by storage backends
//! - `ScanQuery` / `Filter` - description of a bounded ordered scan
//! - `MemoryStore` - in-process backend with the todo CRUD operations

mod memory;
mod types;

pub use memory::MemoryStore;
pub use types::{DocumentStore, Filter, ScanQuery};
