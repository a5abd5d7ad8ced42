//! The department record as published by the upstream branch directory.
//!
//! Only `id`, `scheduleFl` and `scheduleJurL` matter to the simulator.  The
//! remaining fields are display data carried through untouched so a loaded
//! catalog can be re-serialised without loss.

use serde::{Deserialize, Serialize};

use tq_core::{DepartmentId, PersonType};

/// Latitude/longitude of a department.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Geo {
    pub latitude:  Option<f64>,
    pub longitude: Option<f64>,
}

/// Service flags of a department.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SpecialFeatures {
    pub prime:      bool,
    pub juridical:  bool,
    pub person:     bool,
    pub ramp:       bool,
    pub vip_office: bool,
    pub vip_zone:   bool,
}

/// One service location.  Immutable once loaded.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    pub id: DepartmentId,

    /// Schedule for physical persons (individuals).
    #[serde(rename = "scheduleFl", default)]
    pub schedule_fl: Option<String>,

    /// Schedule for juridical persons (legal entities).
    #[serde(rename = "scheduleJurL", default)]
    pub schedule_jur_l: Option<String>,

    #[serde(rename = "Biskvit_id", default)]
    pub biskvit_id: Option<i64>,

    #[serde(default)]
    pub address: Option<String>,

    #[serde(default)]
    pub city: Option<String>,

    #[serde(default)]
    pub short_name: Option<String>,

    #[serde(default)]
    pub coordinates: Option<Geo>,

    #[serde(default)]
    pub special: Option<SpecialFeatures>,
}

impl Department {
    /// A department with only the fields the simulator reads.
    pub fn new(id: i64, schedule_fl: &str, schedule_jur_l: &str) -> Self {
        Self {
            id:             DepartmentId(id),
            schedule_fl:    Some(schedule_fl.to_owned()),
            schedule_jur_l: Some(schedule_jur_l.to_owned()),
            biskvit_id:     None,
            address:        None,
            city:           None,
            short_name:     None,
            coordinates:    None,
            special:        None,
        }
    }

    /// The schedule string published for `person_type`.
    ///
    /// A missing schedule reads as the empty string, which no schedule
    /// grammar accepts.
    pub fn schedule(&self, person_type: PersonType) -> &str {
        let field = match person_type {
            PersonType::Physical  => &self.schedule_fl,
            PersonType::Juridical => &self.schedule_jur_l,
        };
        field.as_deref().unwrap_or("")
    }
}
