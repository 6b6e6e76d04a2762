// Copyright 2026 the Pedigree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tree presentation basics.
//!
//! Demonstrate driving the ancestry tree with keyboard actions and watching
//! the shared selection move between the tree and the detail panel.
//!
//! Run:
//! - `cargo run -p pedigree_demos --example pedigree_basics`

use pedigree_demos::sample_family;
use pedigree_record::{AttributeFormatter, DogId};
use pedigree_view::{Key, PedigreeView, ViewEvent};

fn print_rows(view: &PedigreeView) {
    for row in view.rows() {
        let marker = if row.selected { ">" } else { " " };
        let toggle = match (row.has_ancestors, row.collapsed) {
            (true, true) => " [show ancestors]",
            (true, false) => " [hide ancestors]",
            (false, _) => "",
        };
        println!("{marker} {}{}{toggle}", "  ".repeat(row.depth), row.name);
    }
}

fn main() {
    let rex = sample_family();

    let mut view = PedigreeView::new(AttributeFormatter::default());
    view.set_root(Some(&rex));

    println!("Loaded pedigree, selection starts at the root:");
    print_rows(&view);

    // Tab to the dam's node: focus reports the full record upward.
    if let Some(ViewEvent::SelectionChanged(record)) = view.focus_node(DogId(8)) {
        println!(
            "\nDetail panel now shows: {} (registration {})",
            record.registered_name.as_deref().unwrap_or("?"),
            record.registration_number.as_deref().unwrap_or("n/a"),
        );
    }

    // Space on the focused node hides her ancestors.
    view.handle_key(DogId(8), Key::ToggleAncestors);
    println!("\nAfter collapsing the dam's ancestors:");
    print_rows(&view);

    // Enter asks the host to move focus to the detail view.
    if let Some(ViewEvent::DetailsRequested(id)) = view.handle_key(DogId(8), Key::FocusDetails) {
        println!("\nHost: moving focus to the detail view for dog {id}");
    }

    // And the page can always return focus to the selected node.
    println!(
        "Focus anchor for \"return to tree\": dog {}",
        view.selected_id().expect("a root is loaded"),
    );
}
