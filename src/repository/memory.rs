use std::collections::HashMap;

use crate::domain::record::Record;
use crate::repository::CollectionReader;
use crate::repository::errors::{RepositoryError, RepositoryResult};

/// Collections held in memory, keyed by name.
#[derive(Clone, Debug, Default)]
pub struct InMemoryRepository {
    collections: HashMap<String, Vec<Record>>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a collection.
    pub fn with_collection(mut self, name: impl Into<String>, records: Vec<Record>) -> Self {
        self.collections.insert(name.into(), records);
        self
    }
}

impl CollectionReader for InMemoryRepository {
    fn list_records(&self, collection: &str) -> RepositoryResult<Vec<Record>> {
        self.collections
            .get(collection)
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound(collection.to_string()))
    }
}
