use crate::*;

use alloc::string::String;
use alloc::vec::Vec;
use sectionizer::{MemorySource, RowSource, SectionedSequence, SectionizerOptions};

fn fruit() -> MemorySource {
    MemorySource::from_keys(["Apple", "Avocado", "Banana", "Date", "Dragonfruit", "Durian"])
}

fn key_at(source: &MemorySource, real: usize) -> String {
    String::from(source.field_value_at(real, 0).unwrap_or(""))
}

fn find_key(source: &MemorySource, key: &String) -> Option<usize> {
    (0..source.count()).find(|&i| source.field_value_at(i, 0) == Some(key.as_str()))
}

#[test]
fn items_and_view_types_follow_sections() {
    let c = Controller::new(fruit(), SectionizerOptions::alphabetic(0));
    assert_eq!(c.count(), 9);
    assert!(c.uses_headers());
    assert!(!c.are_all_items_enabled());
    assert_eq!(c.view_type_count(2), 3);

    assert_eq!(
        c.item(0),
        Some(ListItem::Header {
            section: 0,
            label: 'A'
        })
    );
    assert_eq!(c.item(4), Some(ListItem::Row { real: 2 }));
    assert_eq!(c.item(9), None);

    assert_eq!(c.item_view_type(5, 2, |_| 0), Some(2));
    assert_eq!(c.item_view_type(6, 2, |real| real % 2), Some(1));
    assert_eq!(c.item_view_type(100, 2, |_| 0), None);

    assert!(!c.is_enabled(3));
    assert!(c.is_enabled(4));
    assert!(!c.is_enabled(9));

    // Resolving does not move the cursor.
    assert_eq!(c.sequence().position(), -1);
}

#[test]
fn empty_source_has_no_header_view_type() {
    let c = Controller::new(MemorySource::default(), SectionizerOptions::alphanumeric(0));
    assert!(!c.uses_headers());
    assert!(c.are_all_items_enabled());
    assert_eq!(c.view_type_count(1), 1);
    assert_eq!(c.item(0), None);
}

#[test]
fn rows_before_first_bucket_stay_selectable() {
    let c = Controller::new(
        MemorySource::from_keys(["1up", "3d", "Alpha"]),
        SectionizerOptions::alphabetic(0),
    );
    assert_eq!(c.count(), 4);
    assert_eq!(c.item(0), Some(ListItem::Row { real: 0 }));
    assert!(c.is_enabled(0));
    assert!(c.is_enabled(1));
    assert!(!c.is_enabled(2));
    assert_eq!(c.item(3), Some(ListItem::Row { real: 2 }));
}

#[test]
fn jump_to_label_moves_to_header() {
    let mut c = Controller::new(fruit(), SectionizerOptions::alphabetic(0));
    assert_eq!(c.jump_to_label('d'), Some(5));
    assert!(c.sequence().is_header());
    assert_eq!(c.sequence().field_value(0).as_deref(), Some("D"));

    assert_eq!(c.jump_to_label('C'), None);
    assert_eq!(c.sequence().position(), 5);

    assert_eq!(c.jump_to_section(1), Some(3));
    assert_eq!(c.jump_to_section(7), None);
}

#[test]
fn bind_moves_cursor_for_field_reads() {
    let mut c = Controller::new(fruit(), SectionizerOptions::alphabetic(0));
    assert_eq!(c.bind(7), Some(ListItem::Row { real: 4 }));
    assert_eq!(c.sequence().field_value(0).as_deref(), Some("Dragonfruit"));
    assert_eq!(c.bind(42), None);
    assert_eq!(c.sequence().position(), 7);
}

#[test]
fn source_changed_re_resolves_cursor() {
    let mut c = Controller::new(fruit(), SectionizerOptions::alphabetic(0));
    c.sequence_mut().move_to(8);

    c.sequence_mut()
        .source_mut()
        .retain(|row| !row[0].starts_with('D'));
    assert!(!c.source_changed());
    assert_eq!(c.count(), 5);
    assert_eq!(c.sequence().position(), 5);
    assert!(c.sequence().is_after_last());
}

#[test]
fn anchor_follows_record_across_insert() {
    let mut c = Controller::new(fruit(), SectionizerOptions::alphanumeric(0));
    c.bind(4); // Banana
    let anchor = c.capture_anchor(key_at).unwrap();
    assert_eq!(anchor.key, "Banana");
    assert!(!anchor.on_header);

    c.sequence_mut()
        .source_mut()
        .insert(0, alloc::vec!["42".into()]);
    c.sequence_mut()
        .source_mut()
        .insert(1, alloc::vec!["Aardvark".into()]);
    assert!(c.source_changed_anchored(Some(anchor), find_key));

    // '#', 42, 'A', Aardvark, Apple, Avocado, 'B', Banana
    assert_eq!(c.sequence().position(), 7);
    assert_eq!(c.sequence().field_value(0).as_deref(), Some("Banana"));
}

#[test]
fn anchor_on_header_returns_to_header() {
    let mut seq = SectionedSequence::new(fruit(), SectionizerOptions::alphabetic(0));
    seq.move_to(5); // header D
    let anchor = capture_anchor(&seq, key_at).unwrap();
    assert!(anchor.on_header);
    assert_eq!(anchor.key, "Date");

    seq.source_mut().remove(2); // Banana
    seq.rebuild();
    assert!(apply_anchor(&mut seq, &anchor, find_key));
    assert!(seq.is_header());
    assert_eq!(seq.header_label(), Some('D'));
    assert_eq!(seq.position(), 3);
}

#[test]
fn anchor_missing_record_is_not_applied() {
    let mut seq = SectionedSequence::new(fruit(), SectionizerOptions::alphabetic(0));
    seq.move_to(4);
    let anchor = capture_anchor(&seq, key_at).unwrap();
    seq.source_mut().remove(2);
    seq.rebuild();
    assert!(!apply_anchor(&mut seq, &anchor, find_key));

    seq.move_to(-1);
    assert!(capture_anchor(&seq, key_at).is_none());
}

#[test]
fn sticky_header_pins_section_of_first_visible_row() {
    let seq = SectionedSequence::new(fruit(), SectionizerOptions::alphabetic(0));
    assert_eq!(sticky_header_for(&seq, 0), Some(0));
    assert_eq!(sticky_header_for(&seq, 2), Some(0));
    assert_eq!(sticky_header_for(&seq, 4), Some(3));
    assert_eq!(sticky_header_for(&seq, 7), Some(5));
    assert_eq!(sticky_header_for(&seq, 9), None);

    let mut out = Vec::new();
    for_each_index_with_sticky_header(&seq, 6, 8, |i| out.push(i));
    assert_eq!(out, [5, 6, 7]);

    out.clear();
    for_each_index_with_sticky_header(&seq, 5, 100, |i| out.push(i));
    assert_eq!(out, [5, 6, 7, 8]);

    out.clear();
    for_each_index_with_sticky_header(&seq, 9, 12, |i| out.push(i));
    assert!(out.is_empty());

    out.clear();
    for_each_header_in_range(&seq, 1, 6, |i| out.push(i));
    assert_eq!(out, [3, 5]);
}

#[test]
fn example_sticky_headers_smoke() {
    let names: Vec<String> = (0..200u32)
        .map(|i| {
            let letter = (b'A' + (i % 26) as u8) as char;
            alloc::format!("{letter}{i:03}")
        })
        .collect();
    let mut source = MemorySource::from_keys(names);
    source.sort_by_column(0);
    let seq = SectionedSequence::new(source, SectionizerOptions::alphabetic(0));
    assert_eq!(seq.count(), 226);

    let mut out = Vec::new();
    for_each_index_with_sticky_header(&seq, 50, 60, |i| out.push(i));
    assert_eq!(out.len(), 11);
    assert!(out.windows(2).all(|w| w[0] < w[1]));
    let pinned = out[0];
    assert!(seq.index().sections().iter().any(|s| s.header_position == pinned));
}
