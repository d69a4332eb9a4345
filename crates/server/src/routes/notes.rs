//! Medical-note HTTP handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use deadpool_postgres::Pool;

use ward_core::NewNote;

use crate::db::NoteRepository;
use crate::error::AppError;

/// GET /api/patients/{mrn}/notes - All notes for one patient
pub async fn list_for_patient(
    State(pool): State<Pool>,
    Path(mrn): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let repo = NoteRepository::new(pool);
    let notes = repo.list_for_patient(&mrn).await?;
    Ok(Json(notes))
}

/// POST /api/notes - Attach a note to a patient
pub async fn create(
    State(pool): State<Pool>,
    Json(body): Json<NewNote>,
) -> Result<impl IntoResponse, AppError> {
    let repo = NoteRepository::new(pool);
    let note = repo.create(&body).await?;
    Ok((StatusCode::CREATED, Json(note)))
}
