// Copyright 2026 the Pedigree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Presentation formatting for record attributes.
//!
//! Formatting is deterministic: the same input value and the same formatter
//! configuration always produce the same string. Nothing here consults
//! process locale, environment, or clocks.

use alloc::borrow::Cow;
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use chrono::{Datelike, NaiveDateTime};

use crate::record::{DogRecord, SexCode};

/// Injectable mapping from raw [`SexCode`] values to display labels.
///
/// The upstream sources disagree on which code means which label, so the
/// mapping is host-supplied data. The [`Default`] follows the backend model's
/// own documentation (`1` male, `2` female) but hosts are free to replace it
/// wholesale, including for localization.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SexLabels {
    entries: Vec<(SexCode, Cow<'static, str>)>,
    unknown: Cow<'static, str>,
}

impl SexLabels {
    /// Creates an empty mapping with the given fallback label.
    #[must_use]
    pub fn new(unknown: impl Into<Cow<'static, str>>) -> Self {
        Self {
            entries: Vec::new(),
            unknown: unknown.into(),
        }
    }

    /// Adds or replaces the label for `code`.
    #[must_use]
    pub fn with(mut self, code: SexCode, label: impl Into<Cow<'static, str>>) -> Self {
        let label = label.into();
        if let Some(entry) = self.entries.iter_mut().find(|(c, _)| *c == code) {
            entry.1 = label;
        } else {
            self.entries.push((code, label));
        }
        self
    }

    /// Returns the label for `code`, or the fallback for unmapped codes.
    #[must_use]
    pub fn label(&self, code: SexCode) -> &str {
        self.entries
            .iter()
            .find(|(c, _)| *c == code)
            .map_or(&*self.unknown, |(_, label)| &**label)
    }
}

impl Default for SexLabels {
    fn default() -> Self {
        Self::new("Unknown")
            .with(SexCode(1), "Male")
            .with(SexCode(2), "Female")
    }
}

/// English long month names, indexed by `month0`.
const MONTHS_EN: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Turns raw record fields into display strings.
///
/// Missing values render as the `unknown` placeholder rather than erroring;
/// an incomplete pedigree is the normal case, not a failure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttributeFormatter {
    /// Sex code to label mapping.
    pub sex_labels: SexLabels,
    /// Month names used by [`AttributeFormatter::date`], indexed by `month0`.
    pub months: [Cow<'static, str>; 12],
    /// Placeholder for absent values.
    pub unknown: Cow<'static, str>,
}

impl Default for AttributeFormatter {
    fn default() -> Self {
        Self {
            sex_labels: SexLabels::default(),
            months: MONTHS_EN.map(Cow::Borrowed),
            unknown: Cow::Borrowed("Unknown"),
        }
    }
}

impl AttributeFormatter {
    /// Display label for a record: registered name, falling back to the call
    /// name, then the placeholder.
    #[must_use]
    pub fn display_name(&self, record: &DogRecord) -> String {
        record
            .registered_name
            .as_deref()
            .or(record.call_name.as_deref())
            .unwrap_or(&self.unknown)
            .into()
    }

    /// Label for a sex code, via the injected [`SexLabels`].
    #[must_use]
    pub fn sex(&self, code: SexCode) -> String {
        self.sex_labels.label(code).into()
    }

    /// Formats a date of birth as `"<day> <month name> <year>"`.
    ///
    /// The time-of-day component of the wire value is presentation noise and
    /// is dropped.
    #[must_use]
    pub fn date(&self, value: Option<&NaiveDateTime>) -> String {
        match value {
            Some(dt) => {
                let date = dt.date();
                let month = &self.months[date.month0() as usize];
                format!("{} {} {}", date.day(), month, date.year())
            }
            None => self.unknown.clone().into_owned(),
        }
    }

    /// Formats the coefficient of inbreeding, passed through unchanged.
    #[must_use]
    pub fn coi(&self, value: Option<f64>) -> String {
        match value {
            Some(coi) => format!("{coi}"),
            None => self.unknown.clone().into_owned(),
        }
    }

    /// Formats a plain text attribute, substituting the placeholder when
    /// absent.
    #[must_use]
    pub fn text(&self, value: Option<&str>) -> String {
        value.unwrap_or(&self.unknown).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn birthday() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2019, 5, 21)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    #[test]
    fn date_formatting_is_deterministic() {
        let fmt = AttributeFormatter::default();
        let dob = birthday();
        let first = fmt.date(Some(&dob));
        assert_eq!(first, "21 May 2019");
        // Repeated calls over the same input must agree.
        assert_eq!(fmt.date(Some(&dob)), first);
    }

    #[test]
    fn date_formatting_uses_injected_month_table() {
        let mut fmt = AttributeFormatter::default();
        fmt.months[4] = Cow::Borrowed("мая");
        assert_eq!(fmt.date(Some(&birthday())), "21 мая 2019");
    }

    #[test]
    fn missing_values_render_as_placeholder() {
        let fmt = AttributeFormatter::default();
        assert_eq!(fmt.date(None), "Unknown");
        assert_eq!(fmt.coi(None), "Unknown");
        assert_eq!(fmt.text(None), "Unknown");
    }

    #[test]
    fn sex_labels_are_injectable() {
        let labels = SexLabels::new("?")
            .with(SexCode(1), "Кобель")
            .with(SexCode(2), "Сука");
        assert_eq!(labels.label(SexCode(1)), "Кобель");
        assert_eq!(labels.label(SexCode(2)), "Сука");
        assert_eq!(labels.label(SexCode(9)), "?");
    }

    #[test]
    fn with_replaces_an_existing_mapping() {
        let labels = SexLabels::default().with(SexCode(1), "M");
        assert_eq!(labels.label(SexCode(1)), "M");
        assert_eq!(labels.label(SexCode(2)), "Female");
    }
}
