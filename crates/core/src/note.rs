use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Author recorded on notes the service writes itself, such as the
/// audit note appended by a discharge.
pub const SYSTEM_AUTHOR: &str = "System";

/// A medical note attached to a patient.
///
/// The author column is surfaced as `user` in JSON, which is what the
/// wire contract calls it (`user` is a reserved word in PostgreSQL, so
/// the column itself is `author`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicalNote {
    pub id: i64,
    pub patient_mrn: String,
    pub date: Option<DateTime<Utc>>,
    pub note: Option<String>,
    #[serde(rename = "user")]
    pub author: Option<String>,
}

/// Body of `POST /api/notes`. The referenced patient must exist; the
/// foreign key enforces that, not application code.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewNote {
    pub patient_mrn: Option<String>,
    pub date: Option<DateTime<Utc>>,
    pub note: Option<String>,
    #[serde(rename = "user")]
    pub author: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn note_author_serializes_as_user() {
        let note = MedicalNote {
            id: 7,
            patient_mrn: "A1".to_string(),
            date: None,
            note: Some("Vitals stable overnight".to_string()),
            author: Some("Nurse Park".to_string()),
        };

        let value = serde_json::to_value(&note).unwrap();
        assert_eq!(value["user"], "Nurse Park");
        assert_eq!(value["patientMrn"], "A1");
        assert!(value.get("author").is_none());
    }

    #[test]
    fn new_note_reads_user_field() {
        let body = json!({
            "patientMrn": "A1",
            "date": "2024-03-02T09:30:00Z",
            "note": "Started antibiotics",
            "user": "Dr. Okafor"
        });

        let parsed: NewNote = serde_json::from_value(body).unwrap();
        assert_eq!(parsed.author.as_deref(), Some("Dr. Okafor"));
        assert_eq!(parsed.patient_mrn.as_deref(), Some("A1"));
        assert!(parsed.date.is_some());
    }

    #[test]
    fn new_note_fields_default_to_none() {
        let parsed: NewNote = serde_json::from_value(json!({})).unwrap();
        assert!(parsed.patient_mrn.is_none());
        assert!(parsed.note.is_none());
        assert!(parsed.author.is_none());
    }
}
