//! Sort token normalization

use super::types::{SortDirection, SortField, SortSpec};
use crate::error::{Error, Result};

/// Resolve a raw sort token into a [`SortSpec`]
///
/// A leading `-` selects descending order, a leading `+` (or none) selects
/// ascending. An absent or blank token yields the default, `createdAt`
/// descending.
pub fn normalize_sort(token: Option<&str>) -> Result<SortSpec> {
    let token = match token.map(str::trim) {
        None | Some("") => return Ok(SortSpec::default()),
        Some(token) => token,
    };

    let (direction, name) = if let Some(name) = token.strip_prefix('-') {
        (SortDirection::Descending, name)
    } else if let Some(name) = token.strip_prefix('+') {
        (SortDirection::Ascending, name)
    } else {
        (SortDirection::Ascending, token)
    };

    let field = SortField::from_name(name.trim()).ok_or_else(|| Error::invalid_sort_field(name))?;

    Ok(SortSpec::new(field, direction))
}

impl std::str::FromStr for SortSpec {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        normalize_sort(Some(s))
    }
}
