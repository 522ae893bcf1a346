//! Drawing the host screen and the checklist dialog into a [`Frame`].

use checklist::{ChecklistView, Item, Rgb, SEARCH_LABEL};

use crate::frame::{Frame, Rect, SpanStyle, truncate, wrap};
use crate::layout::{DialogLayout, HostLayout};
use crate::shell::{ChecklistShell, Focus};

const HOST_TITLE: &str = "Searchable Check ComboBox Example";
const HOST_BUTTON: &str = "Select Greek Letters";
const HOST_HINT: &str = "Enter: select letters   q: quit";
const DIALOG_HINT: &str = "Tab: focus  Space: toggle  Esc: cancel";

const MUTED: Rgb = Rgb::new(140, 140, 150);

/// Draw the host's main screen.
pub fn render_host(summary: &str, layout: &HostLayout, frame: &mut Frame) {
    frame.text(
        layout.title.x,
        layout.title.y,
        HOST_TITLE,
        SpanStyle::plain().bold(true),
    );

    let lines = wrap(summary, usize::from(layout.summary.width));
    for (line, y) in lines
        .iter()
        .zip(layout.summary.y..layout.summary.bottom())
    {
        frame.text(layout.summary.x, y, line, SpanStyle::plain());
    }

    button(frame, layout.button, HOST_BUTTON, SpanStyle::plain().bold(true).reverse(true));
    frame.text(
        layout.hint.x,
        layout.hint.y,
        HOST_HINT,
        SpanStyle::plain().fg(MUTED),
    );
}

/// Draw the checklist dialog.
pub fn render_dialog<T: Item>(
    view: &ChecklistView<'_, T>,
    shell: &ChecklistShell,
    layout: &DialogLayout,
    frame: &mut Frame,
) {
    let emphasis = view.style.emphasize_labels;
    let accent = view.style.accent;

    border(frame, layout.outer, view.title, SpanStyle::plain().bold(emphasis).fg(accent));

    // Search row
    frame.text(
        layout.search_label.x,
        layout.search_label.y,
        SEARCH_LABEL,
        SpanStyle::plain().bold(emphasis),
    );
    let field = layout.search_field;
    let width = usize::from(field.width);
    let search = shell.search();
    let (start, column) = search.window(width);
    let shown = search.text().get(start..).unwrap_or_default();
    frame.text(field.x, field.y, &truncate(shown, width), SpanStyle::plain());
    if shell.focus() == Focus::Search && column < width {
        let under = search.under_cursor().unwrap_or(' ');
        frame.text(
            field.x + u16::try_from(column).unwrap_or(0),
            field.y,
            &under.to_string(),
            SpanStyle::plain().reverse(true),
        );
    }

    // Scroll region
    let list_focused = shell.focus() == Focus::List;
    let region = usize::from(layout.list.height);
    for (offset, (index, row)) in view.visible_rows().take(region).enumerate() {
        let y = layout.list.y + u16::try_from(offset).unwrap_or(0);
        let text = truncate(&view.row_text(row), usize::from(layout.list.width));
        let focused = list_focused && index == shell.cursor();
        frame.text(layout.list.x, y, &text, SpanStyle::plain().reverse(focused));
    }
    scrollbar(frame, layout.scrollbar, view, accent);

    for (button_kind, rect) in layout.buttons {
        let focused = shell.focus() == Focus::Button(button_kind);
        button(
            frame,
            rect,
            button_kind.label(),
            SpanStyle::plain().bold(emphasis).reverse(focused),
        );
    }

    // Key hint below the box when there is room.
    let hint_y = layout.outer.bottom();
    if hint_y < frame.height() {
        frame.text(
            layout.outer.x + 1,
            hint_y,
            DIALOG_HINT,
            SpanStyle::plain().fg(MUTED),
        );
    }
}

/// Box outline with a title in the top edge.
fn border(frame: &mut Frame, rect: Rect, title: &str, title_style: SpanStyle) {
    if rect.width < 2 || rect.height < 2 {
        return;
    }
    let inner = usize::from(rect.width - 2);
    let line_style = SpanStyle::plain().fg(MUTED);
    frame.text(rect.x, rect.y, &format!("┌{}┐", "─".repeat(inner)), line_style);
    for y in rect.y + 1..rect.bottom() - 1 {
        frame.text(rect.x, y, "│", line_style);
        frame.text(rect.right() - 1, y, "│", line_style);
    }
    frame.text(
        rect.x,
        rect.bottom() - 1,
        &format!("└{}┘", "─".repeat(inner)),
        line_style,
    );

    let title = truncate(&format!(" {} ", title), inner.saturating_sub(2));
    frame.text(rect.x + 2, rect.y, &title, title_style);
}

/// Centered `[ label ]` in `rect`.
fn button(frame: &mut Frame, rect: Rect, label: &str, style: SpanStyle) {
    let text = truncate(&format!("[ {} ]", label), usize::from(rect.width));
    let width = u16::try_from(text.chars().count()).unwrap_or(rect.width);
    let x = rect.x + rect.width.saturating_sub(width) / 2;
    frame.text(x, rect.y, &text, style);
}

/// Track with a thumb, shown only when the rows overflow the region.
fn scrollbar<T: Item>(frame: &mut Frame, rect: Rect, view: &ChecklistView<'_, T>, accent: Rgb) {
    let len = view.rows.len();
    let track = usize::from(rect.height);
    if track == 0 || len <= track {
        return;
    }
    let thumb_len = (track * track / len).max(1);
    let max_first = view.viewport.max_first_row(len).max(1);
    let thumb_top = view.viewport.first_row() * (track - thumb_len) / max_first;

    for offset in 0..track {
        let y = rect.y + u16::try_from(offset).unwrap_or(0);
        let on_thumb = offset >= thumb_top && offset < thumb_top + thumb_len;
        if on_thumb {
            frame.text(rect.x, y, "█", SpanStyle::plain().fg(accent));
        } else {
            frame.text(rect.x, y, "│", SpanStyle::plain().fg(MUTED).dim());
        }
    }
}

#[cfg(test)]
mod tests {
    use checklist::{
        Button, ChecklistConfig, ItemRef, LabeledItem, SearchableChecklist, TextChange,
    };

    use super::*;
    use crate::event::{Input, Key};

    fn letters(count: usize) -> Vec<ItemRef<LabeledItem>> {
        ["Alpha", "Beta", "Gamma", "Delta", "Epsilon", "Zeta", "Eta", "Theta"]
            .iter()
            .take(count)
            .map(|label| LabeledItem::shared(*label, *label == "Gamma"))
            .collect()
    }

    fn draw(checklist: &SearchableChecklist<LabeledItem>, shell: &ChecklistShell) -> (Frame, DialogLayout) {
        let view = checklist.view();
        let layout = DialogLayout::compute(80, 24, view.region_height());
        let mut frame = Frame::new(80, 24);
        render_dialog(&view, shell, &layout, &mut frame);
        (frame, layout)
    }

    fn open(items: &[ItemRef<LabeledItem>]) -> SearchableChecklist<LabeledItem> {
        let config = ChecklistConfig::new().title("Select Greek Letters");
        let mut checklist = SearchableChecklist::new(items, config).unwrap();
        checklist.on_close(|_| {});
        checklist.create_control().unwrap();
        checklist
    }

    #[test]
    fn test_dialog_shows_rows_and_buttons() {
        let items = letters(8);
        let checklist = open(&items);
        let shell = ChecklistShell::new();
        let (frame, layout) = draw(&checklist, &shell);

        assert!(frame.row_text(layout.outer.y).contains("Select Greek Letters"));
        assert!(frame.row_text(layout.search_label.y).contains("Search:"));
        assert!(frame.row_text(layout.list.y).contains("[ ] Alpha"));
        assert!(frame.row_text(layout.list.y + 2).contains("[x] Gamma"));
        assert!(!frame.row_text(layout.list.y + 4).contains("Zeta"));

        let buttons = frame.row_text(layout.button(Button::Ok).y);
        assert!(buttons.contains("[ OK ]"));
        assert!(buttons.contains("[ Cancel ]"));
    }

    #[test]
    fn test_short_list_has_no_scrollbar() {
        let items = letters(3);
        let checklist = open(&items);
        let (frame, layout) = draw(&checklist, &ChecklistShell::new());
        assert_eq!(layout.list.height, 3);
        assert!(!frame.spans().iter().any(|span| span.text == "█"));
    }

    #[test]
    fn test_no_match_draws_empty_region() {
        let items = letters(8);
        let mut checklist = open(&items);
        checklist.text_changed(TextChange::Insert, "zzz").unwrap();
        let (frame, layout) = draw(&checklist, &ChecklistShell::new());
        assert_eq!(layout.list.height, 0);
        assert!(!frame.spans().iter().any(|span| span.text.contains("[ ]")));
    }

    #[test]
    fn test_long_query_keeps_cursor_in_field() {
        let items = letters(8);
        let mut checklist = open(&items);
        let mut shell = ChecklistShell::new();
        let query = format!("{}Z", "a".repeat(40));
        for c in query.chars() {
            let (_, layout) = draw(&checklist, &shell);
            shell.handle(&mut checklist, Input::key(Key::Char(c)), &layout).unwrap();
        }

        let (frame, layout) = draw(&checklist, &shell);
        let field = layout.search_field;
        let cursor = frame
            .spans()
            .iter()
            .find(|span| span.y == field.y && span.style.reverse)
            .unwrap();
        assert_eq!(cursor.x, field.x + field.width - 1);
        let shown = format!("{}Z", "a".repeat(30));
        assert!(frame.row_text(field.y).contains(&shown));
    }

    #[test]
    fn test_wide_query_places_cursor_by_width() {
        let items = letters(8);
        let mut checklist = open(&items);
        let mut shell = ChecklistShell::new();
        for c in "日本".chars() {
            let (_, layout) = draw(&checklist, &shell);
            shell.handle(&mut checklist, Input::key(Key::Char(c)), &layout).unwrap();
        }

        let (frame, layout) = draw(&checklist, &shell);
        let field = layout.search_field;
        let cursor = frame
            .spans()
            .iter()
            .find(|span| span.y == field.y && span.style.reverse)
            .unwrap();
        assert_eq!(cursor.x, field.x + 4);
    }

    #[test]
    fn test_short_terminal_rows_stay_above_buttons() {
        let items = letters(8);
        let checklist = open(&items);
        let view = checklist.view();
        let layout = DialogLayout::compute(80, 10, view.region_height());
        let mut frame = Frame::new(80, 10);
        render_dialog(&view, &ChecklistShell::new(), &layout, &mut frame);

        assert_eq!(layout.list.height, 3);
        assert!(frame.row_text(layout.list.y + 2).contains("Gamma"));
        assert!(!frame.row_text(layout.list.y + 3).contains("Delta"));
        assert!(frame.row_text(layout.button(Button::Ok).y).contains("[ OK ]"));
    }

    #[test]
    fn test_host_screen() {
        let layout = HostLayout::compute(60, 20);
        let mut frame = Frame::new(60, 20);
        render_host("Gamma was selected.", &layout, &mut frame);
        assert!(frame.row_text(layout.summary.y).contains("Gamma was selected."));
        assert!(frame.row_text(layout.button.y).contains("[ Select Greek Letters ]"));
    }
}
