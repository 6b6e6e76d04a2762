// Copyright 2026 the Pedigree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pedigree Tree: the pedigree structure converter.
//!
//! This crate is the pure, bidirectional mapping between the backend record
//! shape ([`DogRecord`](pedigree_record::DogRecord), with nested `sire`/`dam`
//! references) and the display-tree node shape ([`DisplayNode`]) consumed by
//! tree presentation layers.
//!
//! The two operations are:
//!
//! - [`transform`]: structural recursion over the ancestry chart. An absent
//!   record maps to `None` (that is how recursion terminates at missing
//!   ancestors); a present record maps to a node carrying a display name, an
//!   [`Attributes`] table of *already formatted* values for the fixed
//!   [`AttributeKey`] set, the stable id, and the recursively converted
//!   children.
//! - [`reverse_transform`]: the way back. Tree widgets strip nodes down to
//!   their own internal shape during layout, so every [`DisplayNode`] carries
//!   the full original record verbatim; the reverse transform is a pure
//!   projection of that carried record, never a reconstruction from the lossy
//!   formatted attributes.
//!
//! Together they satisfy `reverse_transform(transform(r)) == r` by value for
//! every well-formed record, at any nesting depth, including fields the
//! attribute table never surfaces.
//!
//! ## Child order
//!
//! Children are emitted **dam before sire**, consistently, at every level.
//! Only present ancestors contribute children; a record with neither is a
//! leaf, the expected terminal case of an incomplete pedigree.
//!
//! ## Minimal example
//!
//! ```rust
//! use pedigree_record::{AttributeFormatter, DogId, DogRecord};
//! use pedigree_tree::{AttributeKey, reverse_transform, transform};
//!
//! let maia = DogRecord {
//!     registered_name: Some("Snowdrift Maia".into()),
//!     ..DogRecord::new(DogId(8))
//! };
//! let rex = DogRecord {
//!     registered_name: Some("Rex of Northwind".into()),
//!     dam: Some(maia.into()),
//!     ..DogRecord::new(DogId(42))
//! };
//!
//! let fmt = AttributeFormatter::default();
//! let node = transform(Some(&rex), &fmt).unwrap();
//! assert_eq!(node.name(), "Rex of Northwind");
//! assert_eq!(node.children().len(), 1);
//! assert_eq!(node.attributes().get(AttributeKey::Sex), "Unknown");
//!
//! // The full record survives the trip, not just the formatted attributes.
//! assert_eq!(reverse_transform(Some(&node)), Some(&rex));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod convert;
mod node;

pub use convert::{reverse_transform, transform};
pub use node::{AttributeKey, Attributes, DisplayNode};
