//! Storage building blocks shared by the domain crates
//!
//! - [`repository::Repository`] - the storage-agnostic data-access contract
//! - [`repository::BaseRepository`] - that contract over any SeaORM entity (feature `postgres`)
//! - [`memory::InMemoryRepository`] - that contract over a process-local map
//! - [`postgres`] - connection pool configuration, connection and health checks
//!
//! # Features
//!
//! - `postgres` (default) - PostgreSQL support with SeaORM
//! - `config` - `core_config::FromEnv` for [`postgres::PostgresConfig`]
//!
//! # Example
//!
//! ```ignore
//! use database::postgres::{self, PostgresConfig};
//! use database::{BaseRepository, Repository};
//!
//! let db = postgres::connect_from_config(PostgresConfig::new(url)).await?;
//! let repo = BaseRepository::<my_entity::Entity>::new(db);
//! let rows = repo.get_all().await?;
//! ```

pub mod common;
pub mod memory;
pub mod repository;

#[cfg(feature = "postgres")]
pub mod postgres;

pub use common::{DatabaseError, DatabaseResult};
pub use memory::{InMemoryRepository, Matches};
pub use repository::{Identifiable, Repository};

#[cfg(feature = "postgres")]
pub use repository::BaseRepository;
