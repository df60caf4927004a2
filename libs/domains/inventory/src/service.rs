use std::sync::Arc;

use tracing::{info, instrument, warn};

use crate::error::InventoryResult;
use crate::models::InventoryItem;
use crate::predicate::ItemPredicate;
use crate::repository::InventoryItemRepository;

/// Business rules over an inventory store
///
/// Holds no item state between calls: each uniqueness check reads the store right
/// before the write it guards. The check and the write are not atomic, so two callers
/// adding the same name concurrently can both pass the check. The unique index on
/// `inventory_items.name` turns the loser into a persistence error on PostgreSQL.
pub struct InventoryItemService<R: InventoryItemRepository> {
    repository: Arc<R>,
}

impl<R: InventoryItemRepository> Clone for InventoryItemService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: InventoryItemRepository> InventoryItemService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Every item, in id order
    #[instrument(skip(self))]
    pub async fn get_all(&self) -> InventoryResult<Vec<InventoryItem>> {
        Ok(self.repository.get_all().await?)
    }

    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: i32) -> InventoryResult<Option<InventoryItem>> {
        Ok(self.repository.get_by_id(id).await?)
    }

    /// Store a new item, or `None` when its name is already taken
    #[instrument(skip(self, item), fields(name = %item.name))]
    pub async fn add(&self, item: InventoryItem) -> InventoryResult<Option<InventoryItem>> {
        let clashes = self
            .repository
            .search(ItemPredicate::name_equals(&item.name))
            .await?;

        if !clashes.is_empty() {
            warn!("Rejected new item: name already in use");
            return Ok(None);
        }

        let stored = self.repository.add(item).await?;
        info!(item_id = stored.id, "Created inventory item");
        Ok(Some(stored))
    }

    /// Overwrite an item, or `None` when another item already holds its name
    ///
    /// Keeping an item's own name is allowed. An id that no longer exists
    /// surfaces as [`crate::InventoryError::NotFound`].
    #[instrument(skip(self, item), fields(item_id = item.id, name = %item.name))]
    pub async fn update(&self, item: InventoryItem) -> InventoryResult<Option<InventoryItem>> {
        let clashes = self
            .repository
            .search(ItemPredicate::name_equals(&item.name).and(ItemPredicate::id_not_equals(item.id)))
            .await?;

        if !clashes.is_empty() {
            warn!("Rejected update: name held by another item");
            return Ok(None);
        }

        let stored = self.repository.update(item).await?;
        info!(item_id = stored.id, "Updated inventory item");
        Ok(Some(stored))
    }

    /// Hard-delete an item; `true` on success, failures propagate as errors
    #[instrument(skip(self, item), fields(item_id = item.id))]
    pub async fn remove(&self, item: InventoryItem) -> InventoryResult<bool> {
        let id = item.id;
        self.repository.remove(item).await?;
        info!(item_id = id, "Removed inventory item");
        Ok(true)
    }

    /// Look the item up first and remove it only if it exists
    #[instrument(skip(self))]
    pub async fn remove_by_id(&self, id: i32) -> InventoryResult<bool> {
        match self.repository.get_by_id(id).await? {
            Some(item) => self.remove(item).await,
            None => {
                warn!(item_id = id, "Nothing to remove");
                Ok(false)
            }
        }
    }

    /// Items whose name contains `fragment`
    #[instrument(skip(self))]
    pub async fn search(&self, fragment: &str) -> InventoryResult<Vec<InventoryItem>> {
        Ok(self
            .repository
            .search(ItemPredicate::name_contains(fragment))
            .await?)
    }
}
