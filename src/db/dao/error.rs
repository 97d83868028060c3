use sea_orm::{DbErr, SqlErr};
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum DaoLayerError {
    #[error("Database error: {0}")]
    Db(#[from] DbErr),
    #[error("{entity} not found (id={id})")]
    NotFound { entity: &'static str, id: Uuid },
    #[error("{message}")]
    Conflict { message: String },
}

pub type DaoResult<T> = Result<T, DaoLayerError>;

impl DaoLayerError {
    /// Turns a unique-key violation into `Conflict` with `message`.
    pub fn on_unique_violation(self, message: &str) -> Self {
        match self {
            DaoLayerError::Db(err) => match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(detail)) => {
                    tracing::debug!(%detail, "unique constraint violated");
                    DaoLayerError::Conflict {
                        message: message.to_string(),
                    }
                }
                _ => DaoLayerError::Db(err),
            },
            other => other,
        }
    }
}
