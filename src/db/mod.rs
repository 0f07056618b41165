//! Database module: models, payloads and schema for persistent storage.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows
//! - `payloads.rs`: deserialized create/update request bodies
//! - `schema.rs`: SQL DDL for initializing the database (SQLite-first)
//! - `sqlite.rs`: the `Storage` handle, one method per SQL statement

pub mod models;
pub mod payloads;
pub mod schema;
pub mod sqlite;

pub use schema::SQLITE_INIT;
pub use sqlite::{SqlitePool, Storage};
