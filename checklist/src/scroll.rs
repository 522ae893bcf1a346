//! Row-snapped scrolling for the checklist viewport.

use std::ops::Range;

/// Sub-row resolution used when mapping a scrollbar track position to rows.
const ROW_UNITS: usize = 16;

/// Snap `value` to a multiple of `item_height`.
///
/// A remainder of more than half an item rounds up, anything else rounds
/// down. A zero `item_height` leaves `value` unchanged.
pub fn snap_offset(value: usize, item_height: usize) -> usize {
    if item_height == 0 {
        return value;
    }
    let index = value / item_height;
    let offset = value % item_height;
    if offset > item_height / 2 {
        (index + 1) * item_height
    } else {
        index * item_height
    }
}

/// The window of rows currently shown by the scroll region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    visible_row_count: usize,
    first_row: usize,
}

impl Viewport {
    pub fn new(visible_row_count: usize) -> Self {
        Self {
            visible_row_count,
            first_row: 0,
        }
    }

    pub fn visible_row_count(&self) -> usize {
        self.visible_row_count
    }

    pub fn first_row(&self) -> usize {
        self.first_row
    }

    /// Number of rows the region occupies for `len` items.
    pub fn height(&self, len: usize) -> usize {
        self.visible_row_count.min(len)
    }

    /// Largest valid first row for `len` items.
    pub fn max_first_row(&self, len: usize) -> usize {
        len.saturating_sub(self.visible_row_count)
    }

    /// Indices of the rows that are on screen.
    pub fn range(&self, len: usize) -> Range<usize> {
        let start = self.first_row.min(len);
        start..(start + self.visible_row_count).min(len)
    }

    pub fn reset(&mut self) {
        self.first_row = 0;
    }

    pub fn clamp(&mut self, len: usize) {
        self.first_row = self.first_row.min(self.max_first_row(len));
    }

    /// Scroll just far enough for `row` to be on screen.
    pub fn ensure_visible(&mut self, row: usize, len: usize) {
        if row < self.first_row {
            self.first_row = row;
        } else if row >= self.first_row + self.visible_row_count {
            self.first_row = row + 1 - self.visible_row_count;
        }
        self.clamp(len);
    }

    pub fn scroll_by(&mut self, delta: isize, len: usize) {
        self.first_row = self.first_row.saturating_add_signed(delta);
        self.clamp(len);
    }

    /// Jump to the row matching a click at `position` on a scrollbar track
    /// of `track_len` cells, snapping to the nearest row boundary.
    pub fn jump_to_track(&mut self, position: usize, track_len: usize, len: usize) {
        let max = self.max_first_row(len);
        if track_len <= 1 || max == 0 {
            self.first_row = 0;
            return;
        }
        let position = position.min(track_len - 1);
        let value = position * max * ROW_UNITS / (track_len - 1);
        self.first_row = (snap_offset(value, ROW_UNITS) / ROW_UNITS).min(max);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snap_rounds_to_nearest_boundary() {
        assert_eq!(snap_offset(0, 20), 0);
        assert_eq!(snap_offset(9, 20), 0);
        assert_eq!(snap_offset(10, 20), 0);
        assert_eq!(snap_offset(11, 20), 20);
        assert_eq!(snap_offset(45, 20), 40);
        assert_eq!(snap_offset(51, 20), 60);
        assert_eq!(snap_offset(7, 0), 7);
    }

    #[test]
    fn test_ensure_visible_scrolls_minimally() {
        let mut viewport = Viewport::new(5);
        viewport.ensure_visible(7, 24);
        assert_eq!(viewport.first_row(), 3);
        assert_eq!(viewport.range(24), 3..8);

        viewport.ensure_visible(1, 24);
        assert_eq!(viewport.first_row(), 1);
    }

    #[test]
    fn test_short_lists_shrink_the_region() {
        let viewport = Viewport::new(5);
        assert_eq!(viewport.height(2), 2);
        assert_eq!(viewport.height(0), 0);
        assert_eq!(viewport.range(0), 0..0);
    }

    #[test]
    fn test_scroll_by_clamps() {
        let mut viewport = Viewport::new(5);
        viewport.scroll_by(100, 24);
        assert_eq!(viewport.first_row(), 19);
        viewport.scroll_by(-100, 24);
        assert_eq!(viewport.first_row(), 0);
    }

    #[test]
    fn test_jump_to_track_ends() {
        let mut viewport = Viewport::new(5);
        viewport.jump_to_track(4, 5, 24);
        assert_eq!(viewport.first_row(), 19);
        viewport.jump_to_track(0, 5, 24);
        assert_eq!(viewport.first_row(), 0);
        // Halfway lands on 9.5 rows, which snaps down.
        viewport.jump_to_track(2, 5, 24);
        assert_eq!(viewport.first_row(), 9);
    }
}
