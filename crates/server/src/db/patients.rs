use deadpool_postgres::Pool;
use tokio_postgres::Row;

use ward_core::{NewPatient, Patient, PatientUpdate, SYSTEM_AUTHOR};

use crate::error::AppError;

/// Repository for patient CRUD and the discharge transaction
#[derive(Clone)]
pub struct PatientRepository {
    pool: Pool,
}

fn patient_from_row(row: &Row) -> Result<Patient, AppError> {
    let status: String = row.try_get("status")?;
    let status = status
        .parse()
        .map_err(|err: ward_core::StatusParseError| AppError::Internal(err.to_string()))?;

    Ok(Patient {
        mrn: row.try_get("mrn")?,
        name: row.try_get("name")?,
        age: row.try_get("age")?,
        gender: row.try_get("gender")?,
        diagnosis: row.try_get("diagnosis")?,
        admission_date: row.try_get("admission_date")?,
        discharge_date: row.try_get("discharge_date")?,
        status,
        specialty: row.try_get("specialty")?,
        assigned_doctor: row.try_get("assigned_doctor")?,
    })
}

impl PatientRepository {
    pub fn new(pool: Pool) -> Self {
        Self { pool }
    }

    /// Every patient row, in storage order. No pagination.
    pub async fn list_all(&self) -> Result<Vec<Patient>, AppError> {
        let client = self.pool.get().await?;
        let rows = client.query("SELECT * FROM patients", &[]).await?;
        rows.iter().map(patient_from_row).collect()
    }

    /// Insert a new patient. The stored status is always Active; whatever
    /// the caller may have sent for it never reaches this statement.
    pub async fn create(&self, patient: &NewPatient) -> Result<Patient, AppError> {
        let client = self.pool.get().await?;
        let row = client
            .query_one(
                "INSERT INTO patients \
                 (mrn, name, age, gender, diagnosis, admission_date, status, specialty, assigned_doctor) \
                 VALUES ($1, $2, $3, $4, $5, $6, 'Active', $7, $8) \
                 RETURNING *",
                &[
                    &patient.mrn,
                    &patient.name,
                    &patient.age,
                    &patient.gender,
                    &patient.diagnosis,
                    &patient.admission_date,
                    &patient.specialty,
                    &patient.assigned_doctor,
                ],
            )
            .await?;
        patient_from_row(&row)
    }

    /// Update the editable fields of one patient. Status and the two dates
    /// are never touched here. Returns None when no row matched.
    pub async fn update(
        &self,
        mrn: &str,
        fields: &PatientUpdate,
    ) -> Result<Option<Patient>, AppError> {
        let client = self.pool.get().await?;
        let row = client
            .query_opt(
                "UPDATE patients \
                 SET name = $1, age = $2, gender = $3, diagnosis = $4, \
                     specialty = $5, assigned_doctor = $6 \
                 WHERE mrn = $7 \
                 RETURNING *",
                &[
                    &fields.name,
                    &fields.age,
                    &fields.gender,
                    &fields.diagnosis,
                    &fields.specialty,
                    &fields.assigned_doctor,
                    &mrn,
                ],
            )
            .await?;
        row.as_ref().map(patient_from_row).transpose()
    }

    /// Discharge a patient: flip status, stamp the discharge date, and
    /// append the system audit note — all in one transaction, so readers
    /// never observe one effect without the other.
    ///
    /// The `status = 'Active'` guard makes the transition one-way: a
    /// second discharge matches nothing and the transaction rolls back.
    /// Both timestamps come from now(), which is stable within the
    /// transaction, so the row and its note carry the same instant.
    pub async fn discharge(
        &self,
        mrn: &str,
        discharge_notes: &str,
    ) -> Result<Option<Patient>, AppError> {
        let mut client = self.pool.get().await?;
        let tx = client.transaction().await?;

        let row = tx
            .query_opt(
                "UPDATE patients \
                 SET status = 'Discharged', discharge_date = now() \
                 WHERE mrn = $1 AND status = 'Active' \
                 RETURNING *",
                &[&mrn],
            )
            .await?;

        let Some(row) = row else {
            tx.rollback().await?;
            return Ok(None);
        };

        tx.execute(
            "INSERT INTO medical_notes (patient_mrn, date, note, author) \
             VALUES ($1, now(), $2, $3)",
            &[
                &mrn,
                &format!("Discharge notes: {discharge_notes}"),
                &SYSTEM_AUTHOR,
            ],
        )
        .await?;

        tx.commit().await?;
        patient_from_row(&row).map(Some)
    }

    /// Unique specialty values currently present across all patients.
    /// NULL is not a specialty; order is unspecified.
    pub async fn distinct_specialties(&self) -> Result<Vec<String>, AppError> {
        let client = self.pool.get().await?;
        let rows = client
            .query(
                "SELECT DISTINCT specialty FROM patients WHERE specialty IS NOT NULL",
                &[],
            )
            .await?;
        rows.iter()
            .map(|row| row.try_get("specialty").map_err(AppError::from))
            .collect()
    }
}
