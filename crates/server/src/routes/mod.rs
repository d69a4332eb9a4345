pub mod health;
mod notes;
mod patients;

use axum::{
    Router,
    routing::{get, post, put},
};
use deadpool_postgres::Pool;

/// Build the /api routes
pub fn api_routes() -> Router<Pool> {
    Router::new()
        .route("/patients", get(patients::list).post(patients::create))
        .route("/patients/{mrn}", put(patients::update))
        .route("/patients/{mrn}/notes", get(notes::list_for_patient))
        .route("/patients/{mrn}/discharge", post(patients::discharge))
        .route("/notes", post(notes::create))
        .route("/specialties", get(patients::specialties))
}
