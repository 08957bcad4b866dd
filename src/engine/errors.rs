use thiserror::Error;

use crate::domain::types::TypeConstraintError;

/// Contract violations by the code that builds a query.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    #[error("invalid argument: page must be at least 1, got {0}")]
    InvalidPage(usize),

    #[error("invalid argument: page size must be at least 1, got {0}")]
    InvalidPageSize(usize),

    #[error("invalid argument: sort field cannot be empty")]
    EmptySortField,

    #[error("invalid argument: field `{field}` is not {capability} on screen `{screen}`")]
    UnsupportedField {
        screen: String,
        field: String,
        capability: &'static str,
    },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

pub type QueryResult<T> = Result<T, QueryError>;

impl From<TypeConstraintError> for QueryError {
    fn from(err: TypeConstraintError) -> Self {
        QueryError::InvalidArgument(err.to_string())
    }
}
