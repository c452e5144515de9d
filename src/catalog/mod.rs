//! The creature catalog: SQLite-backed record store and the batch key
//! resolver that sits on top of it.

pub mod db;
pub mod models;
pub mod repository;
pub mod resolver;

pub use db::Database;
pub use models::Pokemon;
pub use resolver::{LookupError, Resolution};
