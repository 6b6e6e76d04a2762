// Copyright 2026 the Pedigree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The transform and its inverse.

use alloc::vec::Vec;

use pedigree_record::{AttributeFormatter, DogRecord};

use crate::node::{Attributes, DisplayNode};

/// Converts a backend record into a display-tree node.
///
/// `None` maps to `None`; that is the base case terminating the structural
/// recursion at missing ancestors. Children are the converted `dam` then
/// `sire`, in that order, skipping absent ancestors; a record with neither is
/// a leaf.
///
/// The returned node carries a clone of the input record. Cloning a
/// [`DogRecord`] is shallow with respect to its ancestor subtrees (they are
/// reference-counted), so repeated transforms of the same input yield
/// value-equal, independently owned trees whose nested ancestor records are
/// shared by design.
///
/// Pure: no side effects, the input is not mutated, and repeated calls over
/// the same input and formatter produce equal output.
#[must_use]
pub fn transform(record: Option<&DogRecord>, fmt: &AttributeFormatter) -> Option<DisplayNode> {
    let record = record?;

    let mut children = Vec::new();
    children.extend(transform(record.dam.as_deref(), fmt));
    children.extend(transform(record.sire.as_deref(), fmt));

    Some(DisplayNode {
        name: fmt.display_name(record),
        attributes: Attributes {
            sex: fmt.sex(record.sex),
            color: fmt.text(record.color.as_deref()),
            date_of_birth: fmt.date(record.date_of_birth.as_ref()),
            registration_number: fmt.text(record.registration_number.as_deref()),
            coi: fmt.coi(record.coi),
        },
        id: record.id,
        children,
        record: record.clone(),
    })
}

/// Recovers the original backend record from a display-tree node.
///
/// A pure projection of the record carried on the node; nothing is recomputed
/// from the lossy formatted attributes. `None` maps to `None`. This is the
/// only way to get back fields the attribute table never surfaces (for
/// example identifiers needed for navigation) after a tree widget has
/// stripped the node down to its own internal shape.
#[must_use]
pub fn reverse_transform(node: Option<&DisplayNode>) -> Option<&DogRecord> {
    node.map(DisplayNode::record)
}
