//! Cursor module
//!
//! Cursors are opaque tokens round-tripped by the caller between requests.
//! Tokens issued by the engine encode the boundary position (sort field,
//! sort value, document id) so resuming needs no read of the boundary
//! document. Bare document identifiers are also accepted and resolved
//! against the store.

mod codec;
mod types;

pub use codec::{decode_position, encode_position};
pub use types::{Cursor, CursorPosition};

#[cfg(test)]
mod tests;
