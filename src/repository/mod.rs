//! Sources of raw collections for the list screens.
//!
//! The storefront API delivers every collection as a JSON array of objects.
//! Services only see the [`CollectionReader`] trait, so tests can swap the
//! source for an in-memory one or a mock.

use crate::domain::record::Record;
use crate::domain::types::TypeConstraintError;
use crate::repository::errors::RepositoryResult;

pub mod errors;
pub mod json;
pub mod memory;
#[cfg(feature = "test-mocks")]
pub mod mock;

pub use json::JsonDirRepository;
pub use memory::InMemoryRepository;

pub trait CollectionReader {
    /// Returns every record of `collection` in source order.
    fn list_records(&self, collection: &str) -> RepositoryResult<Vec<Record>>;
}

/// Accepts collection names made of ASCII letters, digits, `-` and `_`.
pub fn validate_collection_name(name: &str) -> Result<&str, TypeConstraintError> {
    if name.is_empty() {
        return Err(TypeConstraintError::EmptyString);
    }
    if name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        Ok(name)
    } else {
        Err(TypeConstraintError::InvalidValue(format!(
            "collection name `{name}`"
        )))
    }
}
