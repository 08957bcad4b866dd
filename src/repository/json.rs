//! Collections stored as `<root>/<collection>.json` files.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::domain::record::Record;
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{CollectionReader, validate_collection_name};

/// Reads collections from JSON snapshots of the storefront API responses.
#[derive(Clone, Debug)]
pub struct JsonDirRepository {
    root: PathBuf,
}

impl JsonDirRepository {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn collection_path(&self, collection: &str) -> RepositoryResult<PathBuf> {
        let name = validate_collection_name(collection)?;
        Ok(self.root.join(format!("{name}.json")))
    }
}

impl CollectionReader for JsonDirRepository {
    fn list_records(&self, collection: &str) -> RepositoryResult<Vec<Record>> {
        let path = self.collection_path(collection)?;

        let file = File::open(&path).map_err(|err| match RepositoryError::from(err) {
            RepositoryError::NotFound(_) => RepositoryError::NotFound(collection.to_string()),
            other => other,
        })?;

        let records: Vec<Record> = serde_json::from_reader(BufReader::new(file))?;
        log::debug!(
            "Loaded {} records from {}",
            records.len(),
            path.display()
        );

        Ok(records)
    }
}
