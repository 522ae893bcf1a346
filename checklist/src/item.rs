//! Selectable items.
//!
//! An item is anything that can describe itself with a display string and
//! carries a selected flag. Items are shared between the host and the
//! checklist as [`ItemRef`]s, so a flag written by the checklist is visible
//! to the host immediately.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

/// Shared handle to an item.
///
/// Two handles refer to the same item only if [`same_item`] says so. Labels
/// are never used for identity.
pub type ItemRef<T> = Rc<T>;

/// Trait for items that can be shown in a searchable checklist.
///
/// The display string is used both for rendering and for filtering.
/// `set_selected` takes `&self` so the same item can be held by the host and
/// by the checklist at once; store the flag in a [`SelectedFlag`].
pub trait Item {
    /// Text shown next to the checkbox.
    fn display_string(&self) -> String;

    /// Whether the item is currently selected.
    fn is_selected(&self) -> bool;

    /// Set the selected flag.
    fn set_selected(&self, selected: bool);
}

/// Interior-mutable selected flag for [`Item`] implementors.
#[derive(Default, Clone, PartialEq, Eq)]
pub struct SelectedFlag(Cell<bool>);

impl SelectedFlag {
    pub fn new(selected: bool) -> Self {
        Self(Cell::new(selected))
    }

    pub fn get(&self) -> bool {
        self.0.get()
    }

    pub fn set(&self, selected: bool) {
        self.0.set(selected);
    }
}

impl fmt::Debug for SelectedFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

/// A plain label with a selected flag.
#[derive(Debug, Clone, Default)]
pub struct LabeledItem {
    label: String,
    selected: SelectedFlag,
}

impl LabeledItem {
    pub fn new(label: impl Into<String>, selected: bool) -> Self {
        Self {
            label: label.into(),
            selected: SelectedFlag::new(selected),
        }
    }

    /// Create a shared handle to a new item.
    pub fn shared(label: impl Into<String>, selected: bool) -> ItemRef<Self> {
        Rc::new(Self::new(label, selected))
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl Item for LabeledItem {
    fn display_string(&self) -> String {
        self.label.clone()
    }

    fn is_selected(&self) -> bool {
        self.selected.get()
    }

    fn set_selected(&self, selected: bool) {
        self.selected.set(selected);
    }
}

/// Check whether two handles point at the same item.
pub fn same_item<T>(a: &ItemRef<T>, b: &ItemRef<T>) -> bool {
    Rc::ptr_eq(a, b)
}

/// Position of `item` in `items`, by identity.
pub fn position_of<T>(items: &[ItemRef<T>], item: &ItemRef<T>) -> Option<usize> {
    items.iter().position(|candidate| same_item(candidate, item))
}
