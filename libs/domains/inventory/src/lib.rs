//! Inventory Domain
//!
//! Catalog of stock items identified by a numeric id, with unique names.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │   Service   │  ← Name uniqueness, search composition
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← database::Repository<InventoryItem> (in-memory or PostgreSQL)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← InventoryItem, input DTOs, ItemPredicate
//! └─────────────┘
//! ```
//!
//! Name collisions are not errors: `add` and `update` return `Ok(None)` when the
//! name is already held by another item. The same `None` also stands for "not found"
//! from `get_by_id`, so callers interpret absence per operation.
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_inventory::{InMemoryInventoryItemRepository, InventoryItemService, pagination};
//!
//! # async fn example() -> domain_inventory::InventoryResult<()> {
//! let service = InventoryItemService::new(InMemoryInventoryItemRepository::new());
//!
//! let items = service.get_all().await?;
//! let page = pagination::paginate(items, 1, 50);
//! # Ok(())
//! # }
//! ```

pub mod entity;
pub mod error;
pub mod models;
pub mod pagination;
pub mod postgres;
pub mod predicate;
pub mod repository;
pub mod service;

pub use error::{InventoryError, InventoryResult};
pub use models::{InventoryItem, InventoryItemChanges, NewInventoryItem};
pub use pagination::{Page, PageRequest, paginate};
pub use postgres::PgInventoryItemRepository;
pub use predicate::ItemPredicate;
pub use repository::{InMemoryInventoryItemRepository, InventoryItemRepository};
pub use service::InventoryItemService;
