//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::record::Record;
use crate::repository::CollectionReader;
use crate::repository::errors::RepositoryResult;

mock! {
    pub Repository {}

    impl CollectionReader for Repository {
        fn list_records(&self, collection: &str) -> RepositoryResult<Vec<Record>>;
    }
}
