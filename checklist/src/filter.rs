//! Live query filtering.
//!
//! Filtering never touches an item's selected flag. It only decides which
//! items are visible and keeps them in their original order.

use std::borrow::Cow;

use crate::error::QueryReadError;
use crate::item::{Item, ItemRef};

/// The kind of edit that changed the query text.
///
/// All kinds are handled the same way; the kind is only reported in logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextChange {
    Insert,
    Remove,
    Replace,
}

/// Something the current query can be read from.
pub trait QuerySource {
    fn read_query(&self) -> Result<String, QueryReadError>;
}

impl QuerySource for str {
    fn read_query(&self) -> Result<String, QueryReadError> {
        Ok(self.to_string())
    }
}

impl QuerySource for String {
    fn read_query(&self) -> Result<String, QueryReadError> {
        Ok(self.clone())
    }
}

impl<S: QuerySource + ?Sized> QuerySource for &S {
    fn read_query(&self) -> Result<String, QueryReadError> {
        (**self).read_query()
    }
}

/// Case-insensitive substring test of `query` against `label`.
pub fn matches(label: &str, query: &str) -> bool {
    label.to_lowercase().contains(&query.to_lowercase())
}

/// Compute the visible items for `query`.
///
/// An empty query borrows `all` as is. Otherwise every item whose display
/// string contains the query, ignoring case, is returned in original order.
pub fn filter<'a, T: Item>(all: &'a [ItemRef<T>], query: &str) -> Cow<'a, [ItemRef<T>]> {
    if query.is_empty() {
        return Cow::Borrowed(all);
    }

    let needle = query.to_lowercase();
    let visible: Vec<_> = all
        .iter()
        .filter(|item| item.display_string().to_lowercase().contains(&needle))
        .cloned()
        .collect();

    log::debug!(
        "[filter] query {:?} matched {} of {} items",
        query,
        visible.len(),
        all.len()
    );

    Cow::Owned(visible)
}
