//! Presentation shell for the checklist.
//!
//! Turns key presses and clicks into calls on the control's hooks and keeps
//! the bits of state that only matter for drawing: keyboard focus, the row
//! cursor and the search field.

use checklist::{Button, ChecklistError, Item, SearchableChecklist, TextChange};

use crate::event::{Input, Key, Modifiers};
use crate::layout::{DialogLayout, Hit};
use crate::search_field::SearchField;

/// Element with keyboard focus.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Focus {
    #[default]
    Search,
    List,
    Button(Button),
}

impl Focus {
    const RING: [Focus; 6] = [
        Focus::Search,
        Focus::List,
        Focus::Button(Button::SelectAll),
        Focus::Button(Button::DeselectAll),
        Focus::Button(Button::Ok),
        Focus::Button(Button::Cancel),
    ];

    fn position(self) -> usize {
        Self::RING.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::RING[(self.position() + 1) % Self::RING.len()]
    }

    pub fn prev(self) -> Self {
        Self::RING[(self.position() + Self::RING.len() - 1) % Self::RING.len()]
    }
}

#[derive(Debug, Default)]
pub struct ChecklistShell {
    search: SearchField,
    focus: Focus,
    cursor: usize,
}

impl ChecklistShell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(&self) -> &SearchField {
        &self.search
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Index of the row with the cursor.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Apply one input to the checklist.
    pub fn handle<T: Item>(
        &mut self,
        checklist: &mut SearchableChecklist<T>,
        input: Input,
        layout: &DialogLayout,
    ) -> Result<(), ChecklistError> {
        match input {
            Input::Key { key, modifiers } => self.on_key(checklist, key, modifiers),
            Input::Click { x, y } => match layout.hit(x, y) {
                Some(hit) => self.on_hit(checklist, hit, layout),
                None => Ok(()),
            },
            Input::Scroll { delta } => {
                let len = checklist.rows().len();
                checklist.viewport_mut().scroll_by(isize::from(delta), len);
                Ok(())
            }
            Input::Resize => Ok(()),
        }
    }

    fn on_key<T: Item>(
        &mut self,
        checklist: &mut SearchableChecklist<T>,
        key: Key,
        modifiers: Modifiers,
    ) -> Result<(), ChecklistError> {
        match key {
            Key::Escape => return checklist.cancel_pressed(),
            Key::Tab => {
                self.focus = self.focus.next();
                return Ok(());
            }
            Key::BackTab => {
                self.focus = self.focus.prev();
                return Ok(());
            }
            _ => {}
        }

        match self.focus {
            Focus::Search => self.on_search_key(checklist, key, modifiers),
            Focus::List => self.on_list_key(checklist, key, modifiers),
            Focus::Button(button) => match key {
                Key::Enter | Key::Char(' ') => self.press(checklist, button),
                _ => Ok(()),
            },
        }
    }

    fn on_search_key<T: Item>(
        &mut self,
        checklist: &mut SearchableChecklist<T>,
        key: Key,
        modifiers: Modifiers,
    ) -> Result<(), ChecklistError> {
        let change = match key {
            Key::Char('u') if modifiers.ctrl => self.search.replace(""),
            Key::Char(c) if modifiers.plain() => Some(self.search.insert_char(c)),
            Key::Backspace => self.search.delete_back(),
            Key::Delete => self.search.delete_forward(),
            Key::Left => {
                self.search.move_left();
                None
            }
            Key::Right => {
                self.search.move_right();
                None
            }
            Key::Home => {
                self.search.move_home();
                None
            }
            Key::End => {
                self.search.move_end();
                None
            }
            Key::Down | Key::Enter => {
                self.focus = Focus::List;
                None
            }
            _ => None,
        };
        match change {
            Some(change) => self.query_changed(checklist, change),
            None => Ok(()),
        }
    }

    fn on_list_key<T: Item>(
        &mut self,
        checklist: &mut SearchableChecklist<T>,
        key: Key,
        modifiers: Modifiers,
    ) -> Result<(), ChecklistError> {
        let len = checklist.rows().len();
        let page = checklist.viewport().visible_row_count();
        let last = len.saturating_sub(1);
        match key {
            Key::Char(' ') | Key::Enter => {
                if len > 0 {
                    checklist.toggle_row(self.cursor)?;
                }
                return Ok(());
            }
            Key::Up if self.cursor == 0 => {
                self.focus = Focus::Search;
                return Ok(());
            }
            Key::Up => self.cursor -= 1,
            Key::Down => self.cursor = (self.cursor + 1).min(last),
            Key::PageUp => self.cursor = self.cursor.saturating_sub(page),
            Key::PageDown => self.cursor = (self.cursor + page).min(last),
            Key::Home => self.cursor = 0,
            Key::End => self.cursor = last,
            // Typing in the list goes to the search field.
            Key::Char(c) if modifiers.plain() => {
                self.focus = Focus::Search;
                self.search.move_end();
                let change = self.search.insert_char(c);
                return self.query_changed(checklist, change);
            }
            _ => return Ok(()),
        }
        checklist.viewport_mut().ensure_visible(self.cursor, len);
        Ok(())
    }

    fn on_hit<T: Item>(
        &mut self,
        checklist: &mut SearchableChecklist<T>,
        hit: Hit,
        layout: &DialogLayout,
    ) -> Result<(), ChecklistError> {
        match hit {
            Hit::Search => {
                self.focus = Focus::Search;
                Ok(())
            }
            Hit::Row(offset) => {
                let index = checklist.viewport().first_row() + offset;
                if index >= checklist.rows().len() {
                    return Ok(());
                }
                self.focus = Focus::List;
                self.cursor = index;
                checklist.toggle_row(index).map(|_| ())
            }
            Hit::Scrollbar(position) => {
                let len = checklist.rows().len();
                let track = usize::from(layout.scrollbar.height);
                checklist.viewport_mut().jump_to_track(position, track, len);
                Ok(())
            }
            Hit::Button(button) => {
                self.focus = Focus::Button(button);
                self.press(checklist, button)
            }
        }
    }

    fn press<T: Item>(
        &mut self,
        checklist: &mut SearchableChecklist<T>,
        button: Button,
    ) -> Result<(), ChecklistError> {
        log::debug!("[shell] {} pressed", button.label());
        match button {
            Button::SelectAll => checklist.select_all_pressed(true),
            Button::DeselectAll => checklist.select_all_pressed(false),
            Button::Ok => checklist.confirm_pressed(),
            Button::Cancel => checklist.cancel_pressed(),
        }
    }

    fn query_changed<T: Item>(
        &mut self,
        checklist: &mut SearchableChecklist<T>,
        change: TextChange,
    ) -> Result<(), ChecklistError> {
        checklist.text_changed(change, &self.search)?;
        self.cursor = 0;
        Ok(())
    }
}
