use std::cell::RefCell;
use std::rc::Rc;

use checklist::{
    ChecklistConfig, ChecklistError, Item, ItemRef, LabeledItem, QueryReadError, QuerySource,
    SearchableChecklist, TextChange, commit, rows_for, select_all, toggle,
};

fn items(labels: &[(&str, bool)]) -> Vec<ItemRef<LabeledItem>> {
    labels
        .iter()
        .map(|(label, selected)| LabeledItem::shared(*label, *selected))
        .collect()
}

fn flags(items: &[ItemRef<LabeledItem>]) -> Vec<bool> {
    items.iter().map(|item| item.is_selected()).collect()
}

fn open(all: &[ItemRef<LabeledItem>]) -> SearchableChecklist<LabeledItem> {
    let mut checklist = SearchableChecklist::new(all, ChecklistConfig::default()).unwrap();
    checklist.on_close(|_| {});
    checklist.create_control().unwrap();
    checklist
}

/// A query source whose buffer cannot be read.
struct BrokenSource;

impl QuerySource for BrokenSource {
    fn read_query(&self) -> Result<String, QueryReadError> {
        Err(QueryReadError::OutOfBounds { offset: 3, len: 1 })
    }
}

// ============================================================================
// Free functions
// ============================================================================

#[test]
fn test_toggle_is_visible_through_every_handle() {
    let all = items(&[("Alpha", false)]);
    let host_view = Rc::clone(&all[0]);
    toggle(&all[0], true);
    assert!(host_view.is_selected());
}

#[test]
fn test_select_all_only_touches_given_items() {
    let all = items(&[("Alpha", false), ("Beta", false), ("Gamma", false)]);
    let visible = vec![Rc::clone(&all[0]), Rc::clone(&all[2])];
    select_all(&visible, true);
    assert_eq!(flags(&all), vec![true, false, true]);
}

#[test]
fn test_commit_writes_rows_and_returns_everything() {
    let all = items(&[("Alpha", false), ("Beta", true), ("Gamma", false)]);
    let mut rows = rows_for(&all[1..]);
    rows[0].checked = false;
    rows[1].checked = true;

    let result = commit(&rows, &all);
    assert_eq!(result.len(), 3);
    assert_eq!(flags(&result), vec![false, false, true]);
}

// ============================================================================
// Control
// ============================================================================

#[test]
fn test_scoped_select_all() {
    let all = items(&[("Alpha", false), ("Beta", false), ("Gamma", false)]);
    let mut checklist = open(&all);

    checklist.text_changed(TextChange::Insert, "a").unwrap();
    checklist.text_changed(TextChange::Insert, "am").unwrap();
    assert_eq!(checklist.visible_items().len(), 1);
    checklist.select_all_pressed(true).unwrap();
    checklist.text_changed(TextChange::Remove, "").unwrap();

    assert_eq!(flags(&all), vec![false, false, true]);
    assert_eq!(checklist.visible_items().len(), 3);
}

#[test]
fn test_select_all_with_filter_matching_a() {
    let all = items(&[("Alpha", false), ("Beta", false), ("Gamma", false)]);
    let mut checklist = open(&all);

    checklist.text_changed(TextChange::Insert, "l").unwrap();
    checklist.select_all_pressed(true).unwrap();
    checklist.text_changed(TextChange::Replace, "mm").unwrap();
    checklist.select_all_pressed(true).unwrap();
    checklist.text_changed(TextChange::Remove, "").unwrap();

    assert_eq!(flags(&all), vec![true, false, true]);
}

#[test]
fn test_select_all_refreshes_rows() {
    let all = items(&[("Alpha", false), ("Beta", false)]);
    let mut checklist = open(&all);

    checklist.text_changed(TextChange::Insert, "be").unwrap();
    checklist.select_all_pressed(true).unwrap();
    let rows: Vec<bool> = checklist.rows().iter().map(|row| row.checked).collect();
    assert_eq!(rows, vec![true]);

    checklist.select_all_pressed(false).unwrap();
    assert!(!checklist.rows()[0].checked);
    assert_eq!(checklist.query(), "be");
}

#[test]
fn test_toggle_updates_row_and_item() {
    let all = items(&[("Alpha", false), ("Beta", false)]);
    let mut checklist = open(&all);

    assert!(checklist.toggle_row(1).unwrap());
    assert!(all[1].is_selected());
    assert!(checklist.rows()[1].checked);

    checklist.toggle_changed(&all[1], false).unwrap();
    assert!(!all[1].is_selected());
    assert!(!checklist.rows()[1].checked);
}

#[test]
fn test_toggle_unknown_item_is_rejected() {
    let all = items(&[("Alpha", false)]);
    let stranger = LabeledItem::shared("Alpha", false);
    let mut checklist = open(&all);
    assert_eq!(
        checklist.toggle_changed(&stranger, true),
        Err(ChecklistError::UnknownItem)
    );
    assert_eq!(
        checklist.toggle_row(5),
        Err(ChecklistError::RowOutOfRange { index: 5, len: 1 })
    );
}

#[test]
fn test_duplicate_labels_toggle_independently() {
    let all = items(&[("Pine 2x4", false), ("Pine 2x4", false)]);
    let mut checklist = open(&all);
    checklist.toggle_row(1).unwrap();
    assert_eq!(flags(&all), vec![false, true]);
}

#[test]
fn test_filter_rows_reflect_current_flags() {
    let all = items(&[("Alpha", false), ("Beta", true)]);
    let mut checklist = open(&all);
    checklist.text_changed(TextChange::Insert, "a").unwrap();
    let rows: Vec<(String, bool)> = checklist
        .rows()
        .iter()
        .map(|row| (row.label(), row.checked))
        .collect();
    assert_eq!(
        rows,
        vec![("Alpha".to_string(), false), ("Beta".to_string(), true)]
    );
}

#[test]
fn test_no_match_renders_no_rows() {
    let all = items(&[("Alpha", false)]);
    let mut checklist = open(&all);
    checklist
        .text_changed(TextChange::Insert, "zzz-no-match")
        .unwrap();
    assert!(checklist.rows().is_empty());
    assert_eq!(checklist.view().region_height(), 0);
    assert_eq!(checklist.view().visible_rows().count(), 0);
}

#[test]
fn test_unreadable_query_keeps_visible_set() {
    let all = items(&[("Alpha", false), ("Beta", false)]);
    let mut checklist = open(&all);
    checklist.text_changed(TextChange::Insert, "be").unwrap();

    assert_eq!(checklist.text_changed(TextChange::Insert, &BrokenSource), Ok(()));
    assert_eq!(checklist.query(), "be");
    assert_eq!(checklist.visible_items().len(), 1);
    assert_eq!(checklist.rows().len(), 1);
}

#[test]
fn test_text_changed_resets_scroll() {
    let labels: Vec<String> = (0..20).map(|i| format!("Item {i}")).collect();
    let all: Vec<_> = labels
        .iter()
        .map(|label| LabeledItem::shared(label.as_str(), false))
        .collect();
    let mut checklist = open(&all);
    checklist.viewport_mut().scroll_by(10, 20);
    assert_eq!(checklist.viewport().first_row(), 10);

    checklist.text_changed(TextChange::Insert, "1").unwrap();
    assert_eq!(checklist.viewport().first_row(), 0);
}

#[test]
fn test_close_listener_sees_every_close_kind() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    for confirm in [true, false] {
        let all = items(&[("Alpha", false)]);
        let mut checklist = SearchableChecklist::new(&all, ChecklistConfig::default()).unwrap();
        let sink = Rc::clone(&seen);
        checklist.on_close(move |code| sink.borrow_mut().push(code.code()));
        checklist.create_control().unwrap();
        if confirm {
            checklist.confirm_pressed().unwrap();
        } else {
            checklist.cancel_pressed().unwrap();
        }
    }
    assert_eq!(*seen.borrow(), vec![0, 4]);
}
