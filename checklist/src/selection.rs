//! Selection actions.
//!
//! Every action writes straight onto the shared items. There is no staging
//! area, so the host sees each change as soon as it happens and cancelling
//! a dialog does not undo anything.

use std::rc::Rc;

use crate::item::{Item, ItemRef};

/// One rendered checkbox: the item it shows and its live checked state.
#[derive(Debug)]
pub struct CheckRow<T> {
    pub item: ItemRef<T>,
    pub checked: bool,
}

impl<T> Clone for CheckRow<T> {
    fn clone(&self) -> Self {
        Self {
            item: Rc::clone(&self.item),
            checked: self.checked,
        }
    }
}

impl<T: Item> CheckRow<T> {
    /// Build a row reflecting the item's current flag.
    pub fn of(item: &ItemRef<T>) -> Self {
        Self {
            item: Rc::clone(item),
            checked: item.is_selected(),
        }
    }

    pub fn label(&self) -> String {
        self.item.display_string()
    }
}

/// Build one row per visible item.
pub fn rows_for<T: Item>(visible: &[ItemRef<T>]) -> Vec<CheckRow<T>> {
    visible.iter().map(CheckRow::of).collect()
}

/// Set a single item's flag.
pub fn toggle<T: Item>(item: &ItemRef<T>, selected: bool) {
    item.set_selected(selected);
}

/// Set the flag on every visible item. Hidden items are left alone.
pub fn select_all<T: Item>(visible: &[ItemRef<T>], selected: bool) {
    for item in visible {
        item.set_selected(selected);
    }
}

/// Write each rendered row's checked state onto its item and return the
/// full item list.
pub fn commit<T: Item>(rows: &[CheckRow<T>], all: &[ItemRef<T>]) -> Vec<ItemRef<T>> {
    for row in rows {
        row.item.set_selected(row.checked);
    }
    all.to_vec()
}
