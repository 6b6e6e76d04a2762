// Copyright 2026 the Pedigree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The backend record shape: identity newtypes and [`DogRecord`].

use alloc::rc::Rc;
use alloc::string::String;

use chrono::NaiveDateTime;

/// Stable identity of a dog record.
///
/// Carried through every derived structure unchanged so reverse lookups (for
/// example navigation from a tree node back to a detail page) always have the
/// original key available.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct DogId(pub i64);

impl core::fmt::Display for DogId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Raw backend sex code.
///
/// The upstream convention uses `1` and `2`, but the code-to-label mapping is
/// deliberately *not* encoded here; hosts supply it via
/// [`SexLabels`](crate::SexLabels). Keeping the raw code in the data model
/// means a disagreement about labels never corrupts stored records.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct SexCode(pub i32);

/// A dog record as delivered by the collaborator API.
///
/// Scalar attributes plus the two optional nested ancestor references. The
/// ancestor links are reference-counted so cloning a record is shallow with
/// respect to the ancestry subtrees: the clone owns its scalar fields while
/// sharing `sire`/`dam` with the original. That is exactly the aliasing
/// contract the structure converter relies on when it carries the original
/// record through a display tree.
///
/// Invariant (upheld by the API, assumed here): the `sire`/`dam` nesting is a
/// finite, acyclic, depth-bounded tree. Recursion over it terminates on
/// `None`.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DogRecord {
    /// Stable identity.
    pub id: DogId,
    /// Upstream globally unique identifier, when the source assigned one.
    pub uuid: Option<String>,
    /// Registered (pedigree) name; the preferred display label.
    pub registered_name: Option<String>,
    /// Informal call name.
    pub call_name: Option<String>,
    /// Raw sex code; see [`SexCode`].
    pub sex: SexCode,
    /// Coat color.
    pub color: Option<String>,
    /// Date of birth as a naive datetime, matching the API wire shape.
    pub date_of_birth: Option<NaiveDateTime>,
    /// Registry number.
    pub registration_number: Option<String>,
    /// Coefficient of inbreeding, precomputed upstream and passed through
    /// unchanged.
    pub coi: Option<f64>,
    /// Photo URL, if any.
    pub photo_url: Option<String>,
    /// Hip evaluation result.
    pub hips: Option<String>,
    /// CHIC number.
    pub chic_num: Option<String>,
    /// Link to the dog's OFA page.
    pub ofa_link: Option<String>,
    /// Father, when known.
    pub sire: Option<Rc<DogRecord>>,
    /// Mother, when known.
    pub dam: Option<Rc<DogRecord>>,
}

impl DogRecord {
    /// Creates an empty record with the given identity.
    ///
    /// Useful with struct-update syntax when building records in hosts and
    /// tests:
    ///
    /// ```rust
    /// use pedigree_record::{DogId, DogRecord};
    ///
    /// let dog = DogRecord {
    ///     color: Some("Gray & White".into()),
    ///     ..DogRecord::new(DogId(7))
    /// };
    /// assert_eq!(dog.id, DogId(7));
    /// ```
    #[must_use]
    pub fn new(id: DogId) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    /// Returns `true` if neither ancestor is present.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.sire.is_none() && self.dam.is_none()
    }
}
