mod notes;
mod patients;

pub use notes::NoteRepository;
pub use patients::PatientRepository;

use deadpool_postgres::{Config, Pool, Runtime};
use tokio_postgres::NoTls;

use crate::error::AppError;

/// The census schema, embedded so the test harness can bootstrap a fresh
/// database without reaching for files at runtime.
pub const SCHEMA: &str = include_str!("../../schema.sql");

/// Create a connection pool from a database URL
pub async fn create_pool(database_url: &str) -> Result<Pool, deadpool_postgres::CreatePoolError> {
    let mut cfg = Config::new();
    cfg.url = Some(database_url.to_string());
    cfg.create_pool(Some(Runtime::Tokio1), NoTls)
}

/// Apply `schema.sql` to the connected database.
pub async fn init_schema(pool: &Pool) -> Result<(), AppError> {
    let client = pool.get().await?;
    client.batch_execute(SCHEMA).await?;
    Ok(())
}
