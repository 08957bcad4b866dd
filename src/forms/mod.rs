//! Form definitions backing the admin list screens.

use thiserror::Error;
use validator::ValidationErrors;

pub mod list;

/// Errors that can occur when processing form data.
#[derive(Debug, Error)]
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("malformed query string: {0}")]
    Malformed(String),

    #[error("invalid sort direction")]
    InvalidSortDirection,

    #[error("sort direction given without a sort field")]
    MissingSortField,

    #[error("filter fields and values do not pair up")]
    UnpairedFilter,
}
