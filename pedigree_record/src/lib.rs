// Copyright 2026 the Pedigree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pedigree Record: the backend dog record model plus attribute formatting.
//!
//! This crate owns the record shape delivered by the collaborator API — a dog's
//! scalar attributes plus at most two optional nested ancestor references,
//! `sire` and `dam`, each itself a record. The nesting is a finite, acyclic
//! ancestry chart: each generation strictly precedes the next, and a missing
//! ancestor simply ends that branch. Consumers must not assume a maximum depth.
//!
//! It also owns *presentation formatting* for those attributes:
//! [`AttributeFormatter`] turns raw field values into display strings
//! (localized dates, sex labels, placeholder text for missing values). The
//! formatter is plain injectable data rather than baked-in policy; in
//! particular the sex code to label mapping is supplied by the host via
//! [`SexLabels`], because the code values are an upstream convention this
//! crate has no authority over.
//!
//! ## Minimal example
//!
//! ```rust
//! use pedigree_record::{AttributeFormatter, DogId, DogRecord, SexCode};
//!
//! let rex = DogRecord {
//!     registered_name: Some("Rex of Northwind".into()),
//!     sex: SexCode(1),
//!     coi: Some(0.125),
//!     ..DogRecord::new(DogId(42))
//! };
//!
//! let fmt = AttributeFormatter::default();
//! assert_eq!(fmt.display_name(&rex), "Rex of Northwind");
//! assert_eq!(fmt.sex(rex.sex), "Male");
//! assert_eq!(fmt.coi(rex.coi), "0.125");
//! // Missing scalars render as the placeholder, never as an error.
//! assert_eq!(fmt.date(rex.date_of_birth.as_ref()), "Unknown");
//! ```
//!
//! With the `serde` feature enabled, [`DogRecord`] deserializes straight from
//! the collaborator API's JSON payload (nested `sire`/`dam` objects, ISO-8601
//! naive datetimes).
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod format;
mod record;

pub use format::{AttributeFormatter, SexLabels};
pub use record::{DogId, DogRecord, SexCode};
