use deadpool_postgres::Pool;
use tokio_postgres::Row;

use ward_core::{MedicalNote, NewNote};

use crate::error::AppError;

/// Repository for medical-note reads and writes
#[derive(Clone)]
pub struct NoteRepository {
    pool: Pool,
}

fn note_from_row(row: &Row) -> Result<MedicalNote, AppError> {
    Ok(MedicalNote {
        id: row.try_get("id")?,
        patient_mrn: row.try_get("patient_mrn")?,
        date: row.try_get("date")?,
        note: row.try_get("note")?,
        author: row.try_get("author")?,
    })
}

impl NoteRepository {
    pub fn new(pool: Pool) -> Self {
        Self { pool }
    }

    /// All notes owned by one MRN, in storage order. Insertion order is
    /// the de facto result but nothing guarantees it.
    pub async fn list_for_patient(&self, mrn: &str) -> Result<Vec<MedicalNote>, AppError> {
        let client = self.pool.get().await?;
        let rows = client
            .query("SELECT * FROM medical_notes WHERE patient_mrn = $1", &[&mrn])
            .await?;
        rows.iter().map(note_from_row).collect()
    }

    /// Insert a note. The foreign key rejects MRNs with no patient row.
    pub async fn create(&self, note: &NewNote) -> Result<MedicalNote, AppError> {
        let client = self.pool.get().await?;
        let row = client
            .query_one(
                "INSERT INTO medical_notes (patient_mrn, date, note, author) \
                 VALUES ($1, $2, $3, $4) \
                 RETURNING *",
                &[&note.patient_mrn, &note.date, &note.note, &note.author],
            )
            .await?;
        note_from_row(&row)
    }
}
