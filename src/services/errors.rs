use thiserror::Error;

use crate::engine::QueryError;
use crate::repository::errors::RepositoryError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid query: {0}")]
    Query(#[from] QueryError),

    #[error("Repository error: {0}")]
    Repository(RepositoryError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(name) => ServiceError::NotFound(name),
            other => ServiceError::Repository(other),
        }
    }
}
