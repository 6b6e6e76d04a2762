// Copyright 2026 the Pedigree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the tree presentation state.
//!
//! These cover root loading, row flattening, the keyboard contract, and
//! selection brokering between the tree side and the detail-panel side.

use std::rc::Rc;

use pedigree_record::{AttributeFormatter, DogId, DogRecord, SexCode};
use pedigree_tree::AttributeKey;
use pedigree_view::{Key, PedigreeView, Row, ViewEvent};

fn dog(id: i64, name: &str) -> DogRecord {
    DogRecord {
        registered_name: Some(name.into()),
        ..DogRecord::new(DogId(id))
    }
}

/// Rex with both parents and one maternal grandsire.
fn family() -> DogRecord {
    let dam = DogRecord {
        sire: Some(Rc::new(dog(4, "Iceblink Juno"))),
        ..dog(3, "Snowdrift Maia")
    };
    DogRecord {
        sex: SexCode(1),
        color: Some("Gray & White".into()),
        coi: Some(0.125),
        photo_url: Some("https://example.net/rex_s.jpg".into()),
        sire: Some(Rc::new(dog(2, "Northwind Storm"))),
        dam: Some(Rc::new(dam)),
        ..dog(1, "Rex of Northwind")
    }
}

fn view_with_family() -> PedigreeView {
    let mut view = PedigreeView::new(AttributeFormatter::default());
    view.set_root(Some(&family()));
    view
}

fn names<'a>(rows: &'a [Row<'a>]) -> Vec<&'a str> {
    rows.iter().map(|row| row.name).collect()
}

#[test]
fn loading_a_root_selects_it() {
    let view = view_with_family();
    assert_eq!(view.selected_id(), Some(DogId(1)));
    assert_eq!(
        view.selected().and_then(|r| r.registered_name.as_deref()),
        Some("Rex of Northwind")
    );
    assert!(view.rows()[0].selected);
}

#[test]
fn clearing_the_root_clears_selection_and_rows() {
    let mut view = view_with_family();
    view.set_root(None);
    assert!(view.root().is_none());
    assert_eq!(view.selected(), None);
    assert!(view.rows().is_empty());
}

#[test]
fn rows_flatten_depth_first_dam_before_sire() {
    let view = view_with_family();
    let rows = view.rows();

    assert_eq!(
        names(&rows),
        [
            "Rex of Northwind",
            "Snowdrift Maia",
            "Iceblink Juno",
            "Northwind Storm",
        ]
    );
    let depths: Vec<_> = rows.iter().map(|row| row.depth).collect();
    assert_eq!(depths, [0, 1, 2, 1]);
    assert!(rows[0].has_ancestors);
    assert!(!rows[3].has_ancestors);
}

#[test]
fn collapsing_hides_the_ancestor_subtree() {
    let mut view = view_with_family();

    assert_eq!(view.toggle_ancestors(DogId(3)), Some(true));
    assert!(view.is_collapsed(DogId(3)));
    assert_eq!(
        names(&view.rows()),
        ["Rex of Northwind", "Snowdrift Maia", "Northwind Storm"]
    );

    // The collapsed node itself stays visible and advertises its toggle.
    let maia = view.rows()[1];
    assert!(maia.collapsed);
    assert!(maia.has_ancestors);

    assert_eq!(view.toggle_ancestors(DogId(3)), Some(false));
    assert_eq!(view.rows().len(), 4);
}

#[test]
fn focusing_a_node_propagates_the_full_record() {
    let mut view = view_with_family();

    let event = view.focus_node(DogId(3)).expect("selection should change");
    let ViewEvent::SelectionChanged(record) = event else {
        panic!("expected SelectionChanged, got {event:?}");
    };
    // The propagated record is the backend shape, including fields the
    // display attributes never carried.
    assert_eq!(record.id, DogId(3));
    assert_eq!(record.registered_name.as_deref(), Some("Snowdrift Maia"));
    assert!(record.sire.is_some());

    // Re-focusing the already selected node is a no-op.
    let revision = view.selection().revision();
    assert_eq!(view.focus_node(DogId(3)), None);
    assert_eq!(view.selection().revision(), revision);

    // Unknown ids are ignored.
    assert_eq!(view.focus_node(DogId(99)), None);
}

#[test]
fn selected_row_follows_focus() {
    let mut view = view_with_family();
    view.focus_node(DogId(4));

    let rows = view.rows();
    let selected: Vec<_> = rows.iter().filter(|row| row.selected).collect();
    assert_eq!(selected.len(), 1);
    assert_eq!(selected[0].id, DogId(4));
    assert_eq!(view.selected_id(), Some(DogId(4)));
}

#[test]
fn detail_panel_writes_are_matched_by_identity() {
    let mut view = view_with_family();

    // The detail panel hands back a record with the same identity but a
    // fresher value (say, after an edit elsewhere). Marking compares ids,
    // so the tree row still lights up.
    let edited = DogRecord {
        color: Some("Agouti".into()),
        ..dog(2, "Northwind Storm")
    };
    assert!(view.select_record(&edited));
    let rows = view.rows();
    let selected: Vec<_> = rows.iter().filter(|row| row.selected).collect();
    assert_eq!(selected.len(), 1);
    assert_eq!(selected[0].id, DogId(2));
}

#[test]
fn keyboard_toggles_and_requests_details() {
    let mut view = view_with_family();

    // Space on a node with ancestors: collapse, then expand.
    assert_eq!(view.handle_key(DogId(1), Key::ToggleAncestors), None);
    assert_eq!(view.rows().len(), 1);
    assert_eq!(view.handle_key(DogId(1), Key::ToggleAncestors), None);
    assert_eq!(view.rows().len(), 4);

    // Space on a leaf does nothing.
    assert_eq!(view.handle_key(DogId(4), Key::ToggleAncestors), None);
    assert_eq!(view.rows().len(), 4);

    // Enter asks the host to move focus to the detail view.
    assert_eq!(
        view.handle_key(DogId(3), Key::FocusDetails),
        Some(ViewEvent::DetailsRequested(DogId(3)))
    );
    // But not for nodes that are not in the tree.
    assert_eq!(view.handle_key(DogId(99), Key::FocusDetails), None);
}

#[test]
fn visible_attribute_adds_a_detail_line() {
    let mut view = view_with_family();
    assert!(view.rows()[0].detail.is_none());

    view.set_visible_attribute(Some(AttributeKey::Coi));
    assert_eq!(view.visible_attribute(), Some(AttributeKey::Coi));
    let rows = view.rows();
    assert_eq!(rows[0].detail, Some(("COI", "0.125")));
    // Nodes without the source value show the placeholder, not an error.
    assert_eq!(rows[1].detail, Some(("COI", "Unknown")));

    view.set_visible_attribute(None);
    assert!(view.rows()[0].detail.is_none());
}

#[test]
fn navigation_to_a_new_root_resets_state() {
    let mut view = view_with_family();
    view.focus_node(DogId(4));
    view.toggle_ancestors(DogId(3));

    let other = DogRecord {
        dam: Some(Rc::new(dog(11, "Aurora Belle"))),
        ..dog(10, "Kaltag Scout")
    };
    view.set_root(Some(&other));

    assert_eq!(view.selected_id(), Some(DogId(10)));
    assert_eq!(names(&view.rows()), ["Kaltag Scout", "Aurora Belle"]);
    assert!(!view.is_collapsed(DogId(3)));
}
