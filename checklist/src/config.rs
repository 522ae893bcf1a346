//! Presentation configuration.
//!
//! The control never interprets these values itself; they are handed to
//! whatever draws the checklist.

use serde::{Deserialize, Serialize};

use crate::error::ChecklistError;

/// Rows shown by the scroll region unless configured otherwise.
pub const DEFAULT_VISIBLE_ROW_COUNT: usize = 5;

/// RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Visual style of the checklist.
///
/// Labels and buttons are drawn emphasized when `emphasize_labels` is set;
/// the search field and checkboxes are always plain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChecklistStyle {
    pub emphasize_labels: bool,
    pub checked_glyph: String,
    pub unchecked_glyph: String,
    pub accent: Rgb,
}

impl Default for ChecklistStyle {
    fn default() -> Self {
        Self {
            emphasize_labels: true,
            checked_glyph: "[x]".into(),
            unchecked_glyph: "[ ]".into(),
            accent: Rgb::new(130, 170, 255),
        }
    }
}

impl ChecklistStyle {
    pub fn glyph(&self, checked: bool) -> &str {
        if checked {
            &self.checked_glyph
        } else {
            &self.unchecked_glyph
        }
    }
}

/// Construction options for a checklist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChecklistConfig {
    pub title: String,
    pub visible_row_count: usize,
    pub style: ChecklistStyle,
}

impl Default for ChecklistConfig {
    fn default() -> Self {
        Self {
            title: "Select Items".into(),
            visible_row_count: DEFAULT_VISIBLE_ROW_COUNT,
            style: ChecklistStyle::default(),
        }
    }
}

impl ChecklistConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the dialog title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set how many rows the scroll region shows at most.
    pub fn visible_row_count(mut self, rows: usize) -> Self {
        self.visible_row_count = rows;
        self
    }

    pub fn style(mut self, style: ChecklistStyle) -> Self {
        self.style = style;
        self
    }

    pub(crate) fn validate(&self) -> Result<(), ChecklistError> {
        if self.visible_row_count == 0 {
            return Err(ChecklistError::InvalidRowCount);
        }
        Ok(())
    }
}
