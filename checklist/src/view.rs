//! Borrowed snapshot of a checklist for drawing.

use crate::config::ChecklistStyle;
use crate::dialog::DialogState;
use crate::item::Item;
use crate::scroll::Viewport;
use crate::selection::CheckRow;

/// Label shown in front of the search field.
pub const SEARCH_LABEL: &str = "Search:";

/// Buttons of the checklist dialog, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    SelectAll,
    DeselectAll,
    Ok,
    Cancel,
}

impl Button {
    pub const ALL: [Button; 4] = [
        Button::SelectAll,
        Button::DeselectAll,
        Button::Ok,
        Button::Cancel,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Button::SelectAll => "Select All",
            Button::DeselectAll => "Deselect All",
            Button::Ok => "OK",
            Button::Cancel => "Cancel",
        }
    }
}

/// Everything needed to draw the checklist at one point in time.
#[derive(Debug)]
pub struct ChecklistView<'a, T> {
    pub title: &'a str,
    pub query: &'a str,
    pub rows: &'a [CheckRow<T>],
    pub style: &'a ChecklistStyle,
    pub viewport: Viewport,
    pub state: DialogState,
}

impl<'a, T: Item> ChecklistView<'a, T> {
    /// Rows inside the viewport, with their index in [`rows`](Self::rows).
    pub fn visible_rows(&self) -> impl Iterator<Item = (usize, &'a CheckRow<T>)> + use<'a, T> {
        let rows: &'a [CheckRow<T>] = self.rows;
        let range = self.viewport.range(rows.len());
        let start = range.start;
        rows[range]
            .iter()
            .enumerate()
            .map(move |(offset, row)| (start + offset, row))
    }

    /// Height of the scroll region in rows.
    pub fn region_height(&self) -> usize {
        self.viewport.height(self.rows.len())
    }

    /// Text of a row, e.g. `[x] Gamma`.
    pub fn row_text(&self, row: &CheckRow<T>) -> String {
        format!("{} {}", self.style.glyph(row.checked), row.label())
    }
}
