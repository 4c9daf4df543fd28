use thiserror::Error;

use models::errors::ModelError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0} not found")]
    NotFound(String),
    #[error("database error: {0}")]
    Db(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl From<ModelError> for ServiceError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::NotFound(what) => Self::NotFound(what),
            ModelError::Db(msg) => Self::Db(msg),
        }
    }
}
