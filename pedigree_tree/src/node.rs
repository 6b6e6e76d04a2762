// Copyright 2026 the Pedigree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Display-tree node types.

use alloc::string::String;
use alloc::vec::Vec;

use pedigree_record::{DogId, DogRecord};

/// The fixed, enumerated set of attributes a node surfaces for display.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum AttributeKey {
    /// Sex, as a label resolved through the host-injected mapping.
    Sex,
    /// Coat color.
    Color,
    /// Date of birth, pre-formatted as a display string.
    DateOfBirth,
    /// Registry number.
    RegistrationNumber,
    /// Coefficient of inbreeding, passed through unchanged.
    Coi,
}

impl AttributeKey {
    /// All keys, in their canonical display order.
    pub const ALL: [Self; 5] = [
        Self::Sex,
        Self::Color,
        Self::DateOfBirth,
        Self::RegistrationNumber,
        Self::Coi,
    ];

    /// Stable wire key, matching the collaborator API field names.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Sex => "sex",
            Self::Color => "color",
            Self::DateOfBirth => "date_of_birth",
            Self::RegistrationNumber => "registration_number",
            Self::Coi => "coi",
        }
    }

    /// Default English display label. Hosts that localize render their own.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Sex => "Sex",
            Self::Color => "Color",
            Self::DateOfBirth => "Date of birth",
            Self::RegistrationNumber => "Registration no.",
            Self::Coi => "COI",
        }
    }
}

/// Already-formatted display values for the fixed attribute set.
///
/// These are presentation strings, lossy by construction (dates are rendered,
/// codes are translated). Recovering source data goes through
/// [`reverse_transform`](crate::reverse_transform), never through this table.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Attributes {
    pub(crate) sex: String,
    pub(crate) color: String,
    pub(crate) date_of_birth: String,
    pub(crate) registration_number: String,
    pub(crate) coi: String,
}

impl Attributes {
    /// Returns the formatted value for `key`.
    #[must_use]
    pub fn get(&self, key: AttributeKey) -> &str {
        match key {
            AttributeKey::Sex => &self.sex,
            AttributeKey::Color => &self.color,
            AttributeKey::DateOfBirth => &self.date_of_birth,
            AttributeKey::RegistrationNumber => &self.registration_number,
            AttributeKey::Coi => &self.coi,
        }
    }

    /// Iterates over all `(key, value)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (AttributeKey, &str)> {
        AttributeKey::ALL.into_iter().map(|key| (key, self.get(key)))
    }
}

/// One node of the display tree.
///
/// Nodes are only ever produced by [`transform`](crate::transform); there is
/// no public constructor. That makes the reverse transform total: every node
/// carries the record it was derived from, so "a node that was not produced
/// by the converter" is unrepresentable rather than a runtime failure mode.
#[derive(Clone, Debug, PartialEq)]
pub struct DisplayNode {
    pub(crate) name: String,
    pub(crate) attributes: Attributes,
    pub(crate) id: DogId,
    pub(crate) children: Vec<DisplayNode>,
    pub(crate) record: DogRecord,
}

impl DisplayNode {
    /// Display label, derived from the record's registered name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Formatted display attributes.
    #[must_use]
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// The original stable identity, carried through unchanged.
    #[must_use]
    pub fn id(&self) -> DogId {
        self.id
    }

    /// Converted ancestors, dam before sire; empty for a leaf.
    #[must_use]
    pub fn children(&self) -> &[DisplayNode] {
        &self.children
    }

    /// The original record, retained verbatim.
    ///
    /// Most callers want [`reverse_transform`](crate::reverse_transform),
    /// which composes with optional nodes.
    #[must_use]
    pub fn record(&self) -> &DogRecord {
        &self.record
    }
}
