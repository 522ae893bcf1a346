//! Searchable checklist.
//!
//! A list of checkboxes narrowed by a live text query, with select-all,
//! deselect-all and a confirm/cancel protocol for the host application.
//!
//! Selection flags live on the items themselves. Filtering only decides
//! which items are shown; select-all and deselect-all only touch the items
//! that are shown; confirming writes the rendered checkbox states back and
//! hands the full list to the host.

pub mod config;
pub mod control;
pub mod dialog;
pub mod error;
pub mod filter;
pub mod item;
pub mod scroll;
pub mod selection;
pub mod view;

pub use config::{ChecklistConfig, ChecklistStyle, DEFAULT_VISIBLE_ROW_COUNT, Rgb};
pub use control::{CloseListener, SearchableChecklist};
pub use dialog::{ChecklistDialog, DialogOutcome, DialogState, ResultCode};
pub use error::{ChecklistError, QueryReadError};
pub use filter::{QuerySource, TextChange, filter, matches};
pub use item::{Item, ItemRef, LabeledItem, SelectedFlag, position_of, same_item};
pub use scroll::{Viewport, snap_offset};
pub use selection::{CheckRow, commit, rows_for, select_all, toggle};
pub use view::{Button, ChecklistView, SEARCH_LABEL};
