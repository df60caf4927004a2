//! Process-local [`Repository`] implementation.
//!
//! Useful for development, tests and any caller that does not need durability.
//! Rows live in a `BTreeMap` keyed by id, so every read comes back in id order.

use std::collections::BTreeMap;
use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::common::{DatabaseError, DatabaseResult};
use crate::repository::{Identifiable, Repository};

/// Predicate evaluated against an in-memory entity
pub trait Matches<T> {
    fn matches(&self, entity: &T) -> bool;
}

#[derive(Debug)]
struct Table<T> {
    rows: BTreeMap<i32, T>,
    last_id: i32,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            last_id: 0,
        }
    }
}

/// In-memory repository; clones share the same rows
#[derive(Debug)]
pub struct InMemoryRepository<T, P> {
    table: Arc<RwLock<Table<T>>>,
    _predicate: PhantomData<fn(P)>,
}

impl<T, P> InMemoryRepository<T, P> {
    pub fn new() -> Self {
        Self {
            table: Arc::new(RwLock::new(Table::default())),
            _predicate: PhantomData,
        }
    }
}

impl<T, P> Default for InMemoryRepository<T, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, P> Clone for InMemoryRepository<T, P> {
    fn clone(&self) -> Self {
        Self {
            table: Arc::clone(&self.table),
            _predicate: PhantomData,
        }
    }
}

#[async_trait]
impl<T, P> Repository<T> for InMemoryRepository<T, P>
where
    T: Identifiable + Clone + Send + Sync + 'static,
    P: Matches<T> + Send + 'static,
{
    type Predicate = P;

    async fn get_all(&self) -> DatabaseResult<Vec<T>> {
        let table = self.table.read().await;
        Ok(table.rows.values().cloned().collect())
    }

    async fn get_by_id(&self, id: i32) -> DatabaseResult<Option<T>> {
        let table = self.table.read().await;
        Ok(table.rows.get(&id).cloned())
    }

    async fn add(&self, mut entity: T) -> DatabaseResult<T> {
        let mut table = self.table.write().await;

        let id = if entity.is_new() {
            table.last_id.checked_add(1).ok_or_else(|| {
                DatabaseError::ConstraintViolation("primary key sequence exhausted".to_string())
            })?
        } else {
            entity.id()
        };

        if id < 0 || table.rows.contains_key(&id) {
            return Err(DatabaseError::ConstraintViolation(format!(
                "primary key {id} is already taken or invalid"
            )));
        }

        entity.set_id(id);
        table.last_id = table.last_id.max(id);
        table.rows.insert(id, entity.clone());

        tracing::debug!(id, "Inserted in-memory row");
        Ok(entity)
    }

    async fn update(&self, entity: T) -> DatabaseResult<T> {
        let mut table = self.table.write().await;
        let id = entity.id();

        let slot = table.rows.get_mut(&id).ok_or(DatabaseError::NotFound(id))?;
        *slot = entity.clone();

        tracing::debug!(id, "Updated in-memory row");
        Ok(entity)
    }

    async fn remove(&self, entity: T) -> DatabaseResult<()> {
        let mut table = self.table.write().await;
        let id = entity.id();

        table
            .rows
            .remove(&id)
            .map(|_| tracing::debug!(id, "Deleted in-memory row"))
            .ok_or(DatabaseError::NotFound(id))
    }

    async fn search(&self, predicate: P) -> DatabaseResult<Vec<T>> {
        let table = self.table.read().await;
        Ok(table
            .rows
            .values()
            .filter(|row| predicate.matches(row))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Part {
        id: i32,
        label: String,
    }

    impl Identifiable for Part {
        fn id(&self) -> i32 {
            self.id
        }

        fn set_id(&mut self, id: i32) {
            self.id = id;
        }
    }

    struct LabelStartsWith(&'static str);

    impl Matches<Part> for LabelStartsWith {
        fn matches(&self, entity: &Part) -> bool {
            entity.label.starts_with(self.0)
        }
    }

    type PartRepository = InMemoryRepository<Part, LabelStartsWith>;

    fn part(label: &str) -> Part {
        Part {
            id: 0,
            label: label.to_string(),
        }
    }

    #[tokio::test]
    async fn test_add_assigns_sequential_ids() {
        let repo = PartRepository::new();

        let first = repo.add(part("bolt")).await.unwrap();
        let second = repo.add(part("nut")).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(repo.get_all().await.unwrap(), vec![first, second]);
    }

    #[tokio::test]
    async fn test_add_confirms_explicit_id() {
        let repo = PartRepository::new();

        let explicit = repo
            .add(Part {
                id: 10,
                label: "gear".to_string(),
            })
            .await
            .unwrap();
        let next = repo.add(part("axle")).await.unwrap();

        assert_eq!(explicit.id, 10);
        assert_eq!(next.id, 11);
    }

    #[tokio::test]
    async fn test_add_after_max_id_is_constraint_violation() {
        let repo = PartRepository::new();
        repo.add(Part {
            id: i32::MAX,
            label: "last".to_string(),
        })
        .await
        .unwrap();

        let result = repo.add(part("overflow")).await;

        assert!(matches!(
            result,
            Err(DatabaseError::ConstraintViolation(ref msg)) if msg.contains("exhausted")
        ));
        assert_eq!(repo.get_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_add_duplicate_id_is_constraint_violation() {
        let repo = PartRepository::new();
        let stored = repo.add(part("bolt")).await.unwrap();

        let result = repo.add(stored).await;

        assert!(matches!(result, Err(DatabaseError::ConstraintViolation(_))));
    }

    #[tokio::test]
    async fn test_update_overwrites_row() {
        let repo = PartRepository::new();
        let mut stored = repo.add(part("bolt")).await.unwrap();
        stored.label = "hex bolt".to_string();

        repo.update(stored.clone()).await.unwrap();

        assert_eq!(repo.get_by_id(stored.id).await.unwrap(), Some(stored));
    }

    #[tokio::test]
    async fn test_update_and_remove_missing_row_are_not_found() {
        let repo = PartRepository::new();
        let ghost = Part {
            id: 99,
            label: "ghost".to_string(),
        };

        let update = repo.update(ghost.clone()).await;
        let remove = repo.remove(ghost).await;

        assert!(matches!(update, Err(DatabaseError::NotFound(99))));
        assert!(matches!(remove, Err(DatabaseError::NotFound(99))));
    }

    #[tokio::test]
    async fn test_remove_is_hard_delete() {
        let repo = PartRepository::new();
        let stored = repo.add(part("bolt")).await.unwrap();

        repo.remove(stored.clone()).await.unwrap();

        assert!(repo.get_by_id(stored.id).await.unwrap().is_none());
        assert!(repo.get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_search_applies_predicate() {
        let repo = PartRepository::new();
        repo.add(part("bolt")).await.unwrap();
        repo.add(part("nut")).await.unwrap();
        repo.add(part("bolt-long")).await.unwrap();

        let found = repo.search(LabelStartsWith("bolt")).await.unwrap();

        let labels: Vec<_> = found.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, vec!["bolt", "bolt-long"]);
    }

    #[tokio::test]
    async fn test_clones_share_rows() {
        let repo = PartRepository::new();
        let other = repo.clone();

        repo.add(part("bolt")).await.unwrap();

        assert_eq!(other.get_all().await.unwrap().len(), 1);
    }
}
