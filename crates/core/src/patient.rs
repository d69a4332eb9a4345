use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Care-episode status of a patient. The only legal transition is
/// Active -> Discharged.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PatientStatus {
    Active,
    Discharged,
}

/// Error for status strings that are neither `Active` nor `Discharged`.
/// Can only come from storage; the schema CHECK constraint should make
/// this unreachable in practice.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unrecognized patient status: {0}")]
pub struct StatusParseError(pub String);

impl PatientStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PatientStatus::Active => "Active",
            PatientStatus::Discharged => "Discharged",
        }
    }
}

impl fmt::Display for PatientStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PatientStatus {
    type Err = StatusParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Active" => Ok(PatientStatus::Active),
            "Discharged" => Ok(PatientStatus::Discharged),
            other => Err(StatusParseError(other.to_string())),
        }
    }
}

/// A patient row as stored and as serialized on the wire.
///
/// Every column except `mrn` and `status` is nullable: absent request
/// fields pass through to storage as NULL.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    pub mrn: String,
    pub name: Option<String>,
    pub age: Option<i32>,
    pub gender: Option<String>,
    pub diagnosis: Option<String>,
    pub admission_date: Option<NaiveDate>,
    pub discharge_date: Option<DateTime<Utc>>,
    pub status: PatientStatus,
    pub specialty: Option<String>,
    pub assigned_doctor: Option<String>,
}

/// Body of `POST /api/patients`.
///
/// There is deliberately no `status` field: a caller-supplied status is
/// ignored and the stored row is always Active.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPatient {
    pub mrn: Option<String>,
    pub name: Option<String>,
    pub age: Option<i32>,
    pub gender: Option<String>,
    pub diagnosis: Option<String>,
    pub admission_date: Option<NaiveDate>,
    pub specialty: Option<String>,
    pub assigned_doctor: Option<String>,
}

/// Body of `PUT /api/patients/{mrn}`. Status and dates are not editable.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientUpdate {
    pub name: Option<String>,
    pub age: Option<i32>,
    pub gender: Option<String>,
    pub diagnosis: Option<String>,
    pub specialty: Option<String>,
    pub assigned_doctor: Option<String>,
}

/// Body of `POST /api/patients/{mrn}/discharge`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DischargeRequest {
    pub discharge_notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn status_round_trips_through_strings() {
        for status in [PatientStatus::Active, PatientStatus::Discharged] {
            assert_eq!(status.as_str().parse::<PatientStatus>(), Ok(status));
        }
    }

    #[test]
    fn status_rejects_unknown_values() {
        assert_eq!(
            "Deceased".parse::<PatientStatus>(),
            Err(StatusParseError("Deceased".to_string()))
        );
        // Matching is case-sensitive, like the stored literals.
        assert!("active".parse::<PatientStatus>().is_err());
    }

    #[test]
    fn patient_serializes_camel_case() {
        let patient = Patient {
            mrn: "A1".to_string(),
            name: Some("Ada Nwosu".to_string()),
            age: Some(54),
            gender: Some("female".to_string()),
            diagnosis: Some("Pneumonia".to_string()),
            admission_date: "2024-03-01".parse().ok(),
            discharge_date: None,
            status: PatientStatus::Active,
            specialty: Some("Pulmonology".to_string()),
            assigned_doctor: Some("Dr. Okafor".to_string()),
        };

        let value = serde_json::to_value(&patient).unwrap();
        assert_eq!(value["mrn"], "A1");
        assert_eq!(value["admissionDate"], "2024-03-01");
        assert_eq!(value["assignedDoctor"], "Dr. Okafor");
        assert_eq!(value["status"], "Active");
        assert_eq!(value["dischargeDate"], serde_json::Value::Null);
    }

    #[test]
    fn new_patient_ignores_caller_status() {
        // A status field in the creation body is not part of the payload
        // type and deserialization drops it on the floor.
        let body = json!({
            "mrn": "B2",
            "name": "Sam Osei",
            "status": "Discharged"
        });

        let parsed: NewPatient = serde_json::from_value(body).unwrap();
        assert_eq!(parsed.mrn.as_deref(), Some("B2"));
        assert_eq!(parsed.age, None);
    }

    #[test]
    fn absent_fields_deserialize_to_none() {
        let parsed: NewPatient = serde_json::from_value(json!({"mrn": "C3"})).unwrap();
        assert!(parsed.name.is_none());
        assert!(parsed.admission_date.is_none());

        let update: PatientUpdate = serde_json::from_value(json!({})).unwrap();
        assert!(update.name.is_none());
    }

    #[test]
    fn discharge_request_uses_wire_field_name() {
        let parsed: DischargeRequest =
            serde_json::from_value(json!({"dischargeNotes": "stable"})).unwrap();
        assert_eq!(parsed.discharge_notes.as_deref(), Some("stable"));
    }
}
