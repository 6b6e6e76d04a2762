// Copyright 2026 the Pedigree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pedigree View: renderer-agnostic presentation state for an ancestry tree.
//!
//! [`PedigreeView`] owns the mapping from a root backend record to a
//! renderable tree and brokers selection changes between the tree and a
//! detail panel. It deliberately does **not** draw anything: hosts call
//! [`PedigreeView::rows`] to get a flattened, collapse-aware list of
//! [`Row`] values and render them with whatever widget stack they use.
//!
//! Responsibilities:
//!
//! - On a new root record, fully recompute the display tree via
//!   [`pedigree_tree::transform`]. Pedigree trees are read-mostly and small
//!   (bounded by generation depth), so there is no incremental diffing.
//! - Track per-node expand/collapse state in a sibling map keyed by
//!   [`DogId`], *outside* the display-tree data model, which stays a pure
//!   comparison-friendly value type.
//! - Translate node focus into selection updates: the focused node's full
//!   record is recovered with [`pedigree_tree::reverse_transform`] and
//!   written to the shared [`Selected`] slot; hosts receive
//!   [`ViewEvent::SelectionChanged`] to refresh the detail panel.
//! - Implement the keyboard contract ([`Key`]): one key toggles the focused
//!   node's ancestor subtree, one key asks the host to move focus to the
//!   detail view. Both are keyboard-only reachable by construction.
//! - Expose an explicit focus anchor ([`PedigreeView::selected_id`]) so the
//!   surrounding page can return focus to the selected node without any
//!   ambient page-global lookup.
//!
//! ## Minimal example
//!
//! ```rust
//! use pedigree_record::{AttributeFormatter, DogId, DogRecord};
//! use pedigree_tree::AttributeKey;
//! use pedigree_view::{Key, PedigreeView, ViewEvent};
//!
//! let dam = DogRecord {
//!     registered_name: Some("Snowdrift Maia".into()),
//!     ..DogRecord::new(DogId(8))
//! };
//! let rex = DogRecord {
//!     registered_name: Some("Rex of Northwind".into()),
//!     dam: Some(dam.into()),
//!     ..DogRecord::new(DogId(42))
//! };
//!
//! let mut view = PedigreeView::new(AttributeFormatter::default());
//! view.set_root(Some(&rex));
//!
//! // Initial load selects the root.
//! assert_eq!(view.selected_id(), Some(DogId(42)));
//! assert_eq!(view.rows().len(), 2);
//!
//! // Keyboard: collapse the root's ancestors, then expand them again.
//! assert_eq!(view.handle_key(DogId(42), Key::ToggleAncestors), None);
//! assert_eq!(view.rows().len(), 1);
//! assert_eq!(view.handle_key(DogId(42), Key::ToggleAncestors), None);
//!
//! // Focusing a node reports the full record upward.
//! match view.focus_node(DogId(8)) {
//!     Some(ViewEvent::SelectionChanged(record)) => {
//!         assert_eq!(record.registered_name.as_deref(), Some("Snowdrift Maia"));
//!     }
//!     other => panic!("expected a selection change, got {other:?}"),
//! }
//!
//! // Show an attribute line under every name.
//! view.set_visible_attribute(Some(AttributeKey::Coi));
//! assert!(view.rows()[0].detail.is_some());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod view;

pub use view::{Key, PedigreeView, Row, ViewEvent};
