// Copyright 2026 the Pedigree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pedigree Selection: the shared "currently focused record" slot.
//!
//! A viewer has exactly one selected record at a time, shared between the
//! ancestry tree (which marks the corresponding node) and the detail panel
//! (which renders the record's fields). [`Selected`] is that slot: a single
//! optional value plus a monotonically increasing **revision** counter that
//! bumps only when the value actually changes.
//!
//! Writers are all user-driven and strictly ordered by the UI's event
//! dispatch, so last-write-wins is the correct and only semantics; there is
//! no locking and no interior mutability. Readers that want a cheap "did
//! anything change?" check compare revisions instead of values.
//!
//! ## Minimal example
//!
//! ```rust
//! use pedigree_selection::Selected;
//!
//! // Using &str as a stand-in for an application record type.
//! let mut selected = Selected::new();
//!
//! // Initial load: select the root.
//! selected.set("Rex");
//! assert_eq!(selected.get(), Some(&"Rex"));
//! assert_eq!(selected.revision(), 1);
//!
//! // Re-selecting the same value is a no-op.
//! selected.set("Rex");
//! assert_eq!(selected.revision(), 1);
//!
//! // The tree reports a new focused record: last write wins.
//! selected.set("Maia");
//! assert_eq!(selected.get(), Some(&"Maia"));
//! assert_eq!(selected.revision(), 2);
//! ```
//!
//! The slot has no persistence; hosts reset it (via [`Selected::set`] with
//! the new root, or [`Selected::clear`]) on navigation.
//!
//! This crate is `no_std` and has no dependencies.

#![no_std]

/// A single revisioned selection slot.
///
/// `T` is typically a full record value. Equality is only required for no-op
/// detection; hosts that need identity comparison (rather than deep
/// equality) should compare keys they extract from the value, not the slot
/// contents.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selected<T> {
    value: Option<T>,
    revision: u64,
}

impl<T> Selected<T> {
    /// Creates an empty slot.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            value: None,
            revision: 0,
        }
    }

    /// Returns `true` if nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.value.is_none()
    }

    /// Returns the selected value, if any.
    #[must_use]
    pub fn get(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Returns the current revision counter.
    ///
    /// Monotonically increasing, local to this slot, bumped only when a
    /// mutation changes the contents. No-op writes leave it unchanged.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Empties the slot.
    pub fn clear(&mut self) {
        if self.value.is_some() {
            self.value = None;
            self.bump_revision();
        }
    }

    /// Replaces the contents unconditionally, returning the previous value.
    ///
    /// Always bumps the revision when a value was present or provided; use
    /// [`Selected::set`] when no-op detection is wanted.
    pub fn replace(&mut self, value: T) -> Option<T> {
        let previous = self.value.replace(value);
        self.bump_revision();
        previous
    }

    fn bump_revision(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

impl<T> Selected<T>
where
    T: PartialEq,
{
    /// Sets the selection, bumping the revision only on an actual change.
    ///
    /// Returns `true` if the contents changed.
    pub fn set(&mut self, value: T) -> bool {
        if self.value.as_ref() == Some(&value) {
            return false;
        }
        self.value = Some(value);
        self.bump_revision();
        true
    }

    /// Returns `true` if the slot currently holds `value`.
    #[must_use]
    pub fn is(&self, value: &T) -> bool {
        self.value.as_ref() == Some(value)
    }
}
