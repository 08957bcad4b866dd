//! Domain values shared by the list engine, repositories and services.

pub mod page;
pub mod query;
pub mod record;
pub mod screen;
pub mod types;
pub mod value;
