//! Geometry of the dialog and the host screen.

use checklist::Button;

use crate::frame::Rect;

/// Widest the dialog box gets.
const DIALOG_MAX_WIDTH: u16 = 44;

/// Rows of the dialog that are not list rows: borders, search, gaps, buttons.
const DIALOG_CHROME_ROWS: u16 = 7;

const SEARCH_LABEL_WIDTH: u16 = 8;

/// What a click landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Search,
    /// Offset from the first row on screen.
    Row(usize),
    /// Position on the scrollbar track.
    Scrollbar(usize),
    Button(Button),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialogLayout {
    pub outer: Rect,
    pub search_label: Rect,
    pub search_field: Rect,
    pub list: Rect,
    pub scrollbar: Rect,
    pub buttons: [(Button, Rect); 4],
}

impl DialogLayout {
    /// Lay out the dialog centered in a `width` x `height` screen, with a
    /// scroll region of `region_height` rows.
    pub fn compute(width: u16, height: u16, region_height: usize) -> Self {
        // The list gives up rows first so the buttons stay on screen.
        let region = u16::try_from(region_height)
            .unwrap_or(u16::MAX)
            .min(height.saturating_sub(DIALOG_CHROME_ROWS));
        let outer_width = width.min(DIALOG_MAX_WIDTH);
        let outer_height = region.saturating_add(DIALOG_CHROME_ROWS).min(height);
        let outer = Rect::new(
            (width - outer_width) / 2,
            (height - outer_height) / 2,
            outer_width,
            outer_height,
        );

        let left = outer.x.saturating_add(2);
        let inner_width = outer_width.saturating_sub(4);

        let search_y = outer.y.saturating_add(1);
        let search_label = Rect::new(left, search_y, SEARCH_LABEL_WIDTH.min(inner_width), 1);
        let search_field = Rect::new(
            left.saturating_add(search_label.width),
            search_y,
            inner_width - search_label.width,
            1,
        );

        let list_y = outer.y.saturating_add(3);
        let list = Rect::new(left, list_y, inner_width.saturating_sub(1), region);
        let scrollbar = Rect::new(left.saturating_add(list.width), list_y, 1, region);

        let first_buttons_y = list_y.saturating_add(region).saturating_add(1);
        let half = inner_width.saturating_sub(1) / 2;
        let right_x = left.saturating_add(half + 1);
        let right_width = inner_width.saturating_sub(half + 1);
        let buttons = [
            (Button::SelectAll, Rect::new(left, first_buttons_y, half, 1)),
            (
                Button::DeselectAll,
                Rect::new(right_x, first_buttons_y, right_width, 1),
            ),
            (
                Button::Ok,
                Rect::new(left, first_buttons_y.saturating_add(1), half, 1),
            ),
            (
                Button::Cancel,
                Rect::new(right_x, first_buttons_y.saturating_add(1), right_width, 1),
            ),
        ];

        Self {
            outer,
            search_label,
            search_field,
            list,
            scrollbar,
            buttons,
        }
    }

    pub fn button(&self, button: Button) -> Rect {
        self.buttons
            .iter()
            .find(|(candidate, _)| *candidate == button)
            .map(|(_, rect)| *rect)
            .unwrap_or_default()
    }

    pub fn hit(&self, x: u16, y: u16) -> Option<Hit> {
        if self.search_field.contains(x, y) || self.search_label.contains(x, y) {
            return Some(Hit::Search);
        }
        if self.list.contains(x, y) {
            return Some(Hit::Row(usize::from(y - self.list.y)));
        }
        if self.scrollbar.contains(x, y) {
            return Some(Hit::Scrollbar(usize::from(y - self.scrollbar.y)));
        }
        self.buttons
            .iter()
            .find(|(_, rect)| rect.contains(x, y))
            .map(|(button, _)| Hit::Button(*button))
    }
}

/// Geometry of the host application's main screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostLayout {
    pub title: Rect,
    pub summary: Rect,
    pub button: Rect,
    pub hint: Rect,
}

impl HostLayout {
    pub fn compute(width: u16, height: u16) -> Self {
        let inner = width.saturating_sub(4);
        let summary_height = height.saturating_sub(8).max(1);
        let summary = Rect::new(2, 3, inner, summary_height);
        let button_y = summary.bottom() + 1;
        Self {
            title: Rect::new(2, 1, inner, 1),
            summary,
            button: Rect::new(2, button_y, inner, 1),
            hint: Rect::new(2, button_y + 2, inner, 1),
        }
    }
}
