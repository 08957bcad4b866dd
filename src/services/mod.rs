pub mod errors;
pub mod list;

pub use errors::{ServiceError, ServiceResult};
