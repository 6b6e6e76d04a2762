// Copyright 2026 the Pedigree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! From API payload to rendered rows.
//!
//! Deserialize a collaborator-API-shaped JSON pedigree, pick a visible
//! attribute, and print the flattened tree the way a host renderer would
//! consume it.
//!
//! Run:
//! - `cargo run -p pedigree_demos --example pedigree_json`

use pedigree_demos::SAMPLE_PAYLOAD;
use pedigree_record::{AttributeFormatter, DogRecord};
use pedigree_tree::AttributeKey;
use pedigree_view::PedigreeView;

fn main() -> Result<(), serde_json::Error> {
    let rex: DogRecord = serde_json::from_str(SAMPLE_PAYLOAD)?;

    let mut view = PedigreeView::new(AttributeFormatter::default());
    view.set_visible_attribute(Some(AttributeKey::DateOfBirth));
    view.set_root(Some(&rex));

    println!("Pedigree with birth dates:");
    for row in view.rows() {
        let indent = "  ".repeat(row.depth);
        match row.detail {
            Some((label, value)) => println!("{indent}{} ({label}: {value})", row.name),
            None => println!("{indent}{}", row.name),
        }
    }

    // Switch the visible attribute, as the side panel's radio group would.
    view.set_visible_attribute(Some(AttributeKey::Coi));
    println!("\nSame tree showing COI:");
    for row in view.rows() {
        let indent = "  ".repeat(row.depth);
        if let Some((label, value)) = row.detail {
            println!("{indent}{} ({label}: {value})", row.name);
        }
    }

    Ok(())
}
