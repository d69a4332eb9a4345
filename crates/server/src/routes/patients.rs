//! Patient HTTP handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use deadpool_postgres::Pool;

use ward_core::{DischargeRequest, NewPatient, PatientUpdate};

use crate::db::PatientRepository;
use crate::error::AppError;

/// GET /api/patients - List the whole census
pub async fn list(State(pool): State<Pool>) -> Result<impl IntoResponse, AppError> {
    let repo = PatientRepository::new(pool);
    let patients = repo.list_all().await?;
    Ok(Json(patients))
}

/// POST /api/patients - Admit a new patient
pub async fn create(
    State(pool): State<Pool>,
    Json(body): Json<NewPatient>,
) -> Result<impl IntoResponse, AppError> {
    let repo = PatientRepository::new(pool);
    let patient = repo.create(&body).await?;
    Ok((StatusCode::CREATED, Json(patient)))
}

/// PUT /api/patients/{mrn} - Edit a patient's record fields
pub async fn update(
    State(pool): State<Pool>,
    Path(mrn): Path<String>,
    Json(body): Json<PatientUpdate>,
) -> Result<impl IntoResponse, AppError> {
    let repo = PatientRepository::new(pool);

    match repo.update(&mrn, &body).await? {
        Some(patient) => Ok(Json(patient)),
        None => Err(AppError::NotFound("Patient not found".to_string())),
    }
}

/// POST /api/patients/{mrn}/discharge - Close the care episode
///
/// Succeeds only for a currently Active patient; a missing or
/// already-discharged MRN is a 404, never a silent re-discharge.
pub async fn discharge(
    State(pool): State<Pool>,
    Path(mrn): Path<String>,
    Json(body): Json<DischargeRequest>,
) -> Result<impl IntoResponse, AppError> {
    let repo = PatientRepository::new(pool);
    let notes = body.discharge_notes.unwrap_or_default();

    match repo.discharge(&mrn, &notes).await? {
        Some(patient) => Ok(Json(patient)),
        None => Err(AppError::NotFound("Active patient not found".to_string())),
    }
}

/// GET /api/specialties - Distinct specialty values across the census
pub async fn specialties(State(pool): State<Pool>) -> Result<impl IntoResponse, AppError> {
    let repo = PatientRepository::new(pool);
    let specialties = repo.distinct_specialties().await?;
    Ok(Json(specialties))
}
