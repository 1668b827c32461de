//! SQLite-backed data access for a single `items` table.
//!
//! # Intention
//!
//! - Own the `items` schema and expose create, read, update and delete over it.
//! - Bind every value as a statement parameter.
//! - Hand callers an explicitly constructed [`ItemsRepository`] instead of a
//!   process-wide connection.
//!
//! # Architectural Boundaries
//!
//! - Only SQLite/database code belongs here.
//! - One connection per repository; no pooling, migrations or transactions.

pub mod config;
pub mod error;
pub mod item;
pub mod logging;
pub mod render;
pub mod repository;
pub mod schema;
pub mod seed;

pub use config::StoreConfig;
pub use error::{Operation, RepositoryError, Result};
pub use item::Item;
pub use repository::{Items, ItemsRepository};
pub use seed::{seed_tasks, seeded_in_memory, SeededIds};
