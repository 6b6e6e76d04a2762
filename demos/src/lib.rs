// Copyright 2026 the Pedigree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared fixtures for the pedigree demos.

use std::rc::Rc;

use chrono::NaiveDate;
use pedigree_record::{DogId, DogRecord, SexCode};

/// A pedigree payload shaped like the collaborator API's JSON response.
pub const SAMPLE_PAYLOAD: &str = r#"{
    "id": 42,
    "registered_name": "Rex of Northwind",
    "call_name": "Rex",
    "sex": 1,
    "color": "Gray & White",
    "date_of_birth": "2019-05-21T00:00:00",
    "registration_number": "SHR-104-2019",
    "coi": 0.125,
    "dam": {
        "id": 8,
        "registered_name": "Snowdrift Maia",
        "sex": 2,
        "color": "Black & White",
        "sire": {
            "id": 15,
            "registered_name": "Iceblink Juno",
            "sex": 1
        }
    },
    "sire": {
        "id": 7,
        "registered_name": "Northwind Storm",
        "sex": 1,
        "coi": 0.0625
    }
}"#;

/// Builds the same three-generation family in code.
pub fn sample_family() -> DogRecord {
    let juno = DogRecord {
        registered_name: Some("Iceblink Juno".into()),
        sex: SexCode(1),
        ..DogRecord::new(DogId(15))
    };
    let maia = DogRecord {
        registered_name: Some("Snowdrift Maia".into()),
        sex: SexCode(2),
        color: Some("Black & White".into()),
        sire: Some(Rc::new(juno)),
        ..DogRecord::new(DogId(8))
    };
    let storm = DogRecord {
        registered_name: Some("Northwind Storm".into()),
        sex: SexCode(1),
        coi: Some(0.0625),
        ..DogRecord::new(DogId(7))
    };
    DogRecord {
        registered_name: Some("Rex of Northwind".into()),
        call_name: Some("Rex".into()),
        sex: SexCode(1),
        color: Some("Gray & White".into()),
        date_of_birth: NaiveDate::from_ymd_opt(2019, 5, 21).map(|d| d.and_hms_opt(0, 0, 0).unwrap()),
        registration_number: Some("SHR-104-2019".into()),
        coi: Some(0.125),
        dam: Some(Rc::new(maia)),
        sire: Some(Rc::new(storm)),
        ..DogRecord::new(DogId(42))
    }
}
