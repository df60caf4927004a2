//! Common utilities shared across all storage implementations

pub mod error;

pub use error::{DatabaseError, DatabaseResult};
