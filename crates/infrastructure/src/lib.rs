//! Visitor Counter Infrastructure Layer
pub mod database;
pub mod repositories;

pub use database::{create_pool, SqliteSchemaManager, TableNames};
