use database::{InMemoryRepository, Repository};

use crate::models::InventoryItem;
use crate::predicate::ItemPredicate;

/// Any store of inventory items searchable by [`ItemPredicate`]
pub trait InventoryItemRepository: Repository<InventoryItem, Predicate = ItemPredicate> {}

impl<R> InventoryItemRepository for R where R: Repository<InventoryItem, Predicate = ItemPredicate> {}

/// In-memory implementation (for development/testing)
pub type InMemoryInventoryItemRepository = InMemoryRepository<InventoryItem, ItemPredicate>;
