//! The searchable checklist control.
//!
//! Holds the full item list, the visible subset for the current query, and
//! one rendered row per visible item. The presentation layer forwards its
//! gestures to the `*_changed` / `*_pressed` hooks and redraws from
//! [`SearchableChecklist::view`] afterwards.

use std::fmt;
use std::rc::Rc;

use crate::config::ChecklistConfig;
use crate::dialog::{DialogState, ResultCode};
use crate::error::ChecklistError;
use crate::filter::{QuerySource, TextChange, filter};
use crate::item::{Item, ItemRef, position_of, same_item};
use crate::scroll::Viewport;
use crate::selection::{self, CheckRow};
use crate::view::ChecklistView;

/// Callback fired once when the dialog closes.
pub type CloseListener = Box<dyn FnMut(ResultCode)>;

/// A filterable list of checkboxes with select-all and confirm/cancel.
pub struct SearchableChecklist<T: Item> {
    all_items: Vec<ItemRef<T>>,
    visible: Vec<ItemRef<T>>,
    rows: Vec<CheckRow<T>>,
    query: String,
    ok_pressed: bool,
    state: DialogState,
    listeners: Vec<CloseListener>,
    config: ChecklistConfig,
    viewport: Viewport,
    created: bool,
}

impl<T: Item> SearchableChecklist<T> {
    /// Create a checklist over `items`.
    ///
    /// The list itself is copied so the host cannot add or remove items while
    /// the dialog is open. The items are shared, not cloned.
    pub fn new(items: &[ItemRef<T>], config: ChecklistConfig) -> Result<Self, ChecklistError> {
        config.validate()?;
        let all_items = items.to_vec();
        Ok(Self {
            visible: all_items.clone(),
            all_items,
            rows: Vec::new(),
            query: String::new(),
            ok_pressed: false,
            state: DialogState::Open,
            listeners: Vec::new(),
            viewport: Viewport::new(config.visible_row_count),
            config,
            created: false,
        })
    }

    /// Register a listener for the close notification.
    ///
    /// At least one listener must be registered before
    /// [`create_control`](Self::create_control).
    pub fn on_close(&mut self, listener: impl FnMut(ResultCode) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Build the rows for the current visible set and return the view.
    ///
    /// Calling this again returns the existing view without rebuilding.
    pub fn create_control(&mut self) -> Result<ChecklistView<'_, T>, ChecklistError> {
        if self.listeners.is_empty() {
            return Err(ChecklistError::ListenerMissing);
        }
        if !self.created {
            self.rows = selection::rows_for(&self.visible);
            self.created = true;
            log::debug!("[checklist] control created with {} rows", self.rows.len());
        }
        Ok(self.view())
    }

    pub fn view(&self) -> ChecklistView<'_, T> {
        ChecklistView {
            title: &self.config.title,
            query: &self.query,
            rows: &self.rows,
            style: &self.config.style,
            viewport: self.viewport,
            state: self.state,
        }
    }

    // -------------------------------------------------------------------------
    // Presentation hooks
    // -------------------------------------------------------------------------

    /// The query text changed.
    ///
    /// If the text cannot be read, the failure is logged and the visible
    /// items stay as they were.
    pub fn text_changed<S: QuerySource + ?Sized>(
        &mut self,
        change: TextChange,
        source: &S,
    ) -> Result<(), ChecklistError> {
        self.ensure_open()?;
        let query = match source.read_query() {
            Ok(query) => query,
            Err(e) => {
                log::warn!("[checklist] could not read query after {:?}: {}", change, e);
                return Ok(());
            }
        };
        log::debug!("[checklist] {:?} -> query {:?}", change, query);
        self.query = query;
        self.refresh();
        self.viewport.reset();
        Ok(())
    }

    /// A checkbox was toggled.
    pub fn toggle_changed(&mut self, item: &ItemRef<T>, checked: bool) -> Result<(), ChecklistError> {
        self.ensure_open()?;
        if position_of(&self.all_items, item).is_none() {
            return Err(ChecklistError::UnknownItem);
        }
        selection::toggle(item, checked);
        for row in self.rows.iter_mut().filter(|row| same_item(&row.item, item)) {
            row.checked = checked;
        }
        log::debug!("[checklist] {:?} -> {}", item.display_string(), checked);
        Ok(())
    }

    /// Flip the checkbox in the rendered row at `index`.
    ///
    /// Returns the new checked state.
    pub fn toggle_row(&mut self, index: usize) -> Result<bool, ChecklistError> {
        self.ensure_open()?;
        let row = self.rows.get(index).ok_or(ChecklistError::RowOutOfRange {
            index,
            len: self.rows.len(),
        })?;
        let item = Rc::clone(&row.item);
        let checked = !row.checked;
        self.toggle_changed(&item, checked)?;
        Ok(checked)
    }

    /// Select or deselect every visible item, then refresh the rows.
    pub fn select_all_pressed(&mut self, selected: bool) -> Result<(), ChecklistError> {
        self.ensure_open()?;
        selection::select_all(&self.visible, selected);
        log::debug!(
            "[checklist] set {} visible items to {}",
            self.visible.len(),
            selected
        );
        self.refresh();
        Ok(())
    }

    /// Commit the rendered rows and close with [`ResultCode::Confirmed`].
    pub fn confirm_pressed(&mut self) -> Result<(), ChecklistError> {
        self.ensure_open()?;
        selection::commit(&self.rows, &self.all_items);
        self.ok_pressed = true;
        self.close(ResultCode::Confirmed);
        Ok(())
    }

    /// Close with [`ResultCode::Cancelled`].
    ///
    /// Toggles made while the dialog was open are not undone.
    pub fn cancel_pressed(&mut self) -> Result<(), ChecklistError> {
        self.ensure_open()?;
        self.close(ResultCode::Cancelled);
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    /// Whether the dialog was closed with OK.
    pub fn is_confirmed(&self) -> bool {
        self.ok_pressed
    }

    /// All items with their final flags. Only available once closed.
    pub fn all_items(&self) -> Result<&[ItemRef<T>], ChecklistError> {
        if self.state.is_closed() {
            Ok(&self.all_items)
        } else {
            Err(ChecklistError::StillOpen)
        }
    }

    pub fn visible_items(&self) -> &[ItemRef<T>] {
        &self.visible
    }

    pub fn rows(&self) -> &[CheckRow<T>] {
        &self.rows
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn state(&self) -> DialogState {
        self.state
    }

    pub fn config(&self) -> &ChecklistConfig {
        &self.config
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut Viewport {
        &mut self.viewport
    }

    // -------------------------------------------------------------------------
    // Internals
    // -------------------------------------------------------------------------

    fn ensure_open(&self) -> Result<(), ChecklistError> {
        if self.state.is_closed() {
            return Err(ChecklistError::Closed);
        }
        Ok(())
    }

    /// Recompute the visible items for the current query and rebuild rows.
    fn refresh(&mut self) {
        self.visible = filter(&self.all_items, &self.query).into_owned();
        self.rows = selection::rows_for(&self.visible);
        self.viewport.clamp(self.rows.len());
    }

    fn close(&mut self, code: ResultCode) {
        self.state = DialogState::from(code);
        log::debug!("[checklist] closed with {:?} ({})", code, code.code());
        let mut listeners = std::mem::take(&mut self.listeners);
        for listener in listeners.iter_mut() {
            listener(code);
        }
    }
}

impl<T: Item> fmt::Debug for SearchableChecklist<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchableChecklist")
            .field("items", &self.all_items.len())
            .field("visible", &self.visible.len())
            .field("query", &self.query)
            .field("ok_pressed", &self.ok_pressed)
            .field("state", &self.state)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
