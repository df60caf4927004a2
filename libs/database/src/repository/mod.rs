//! Storage-agnostic data-access contract.
//!
//! A [`Repository`] is parameterised by the entity it stores and names the predicate
//! type its `search` accepts. Each backend decides how predicates are evaluated:
//! [`BaseRepository`] pushes a SeaORM `Condition` into SQL, while
//! [`crate::memory::InMemoryRepository`] evaluates a [`crate::Matches`] value per row.
//!
//! A repository value owns the store handle it was built with. Dropping the repository
//! (and whatever service wraps it) releases that handle, on success and failure alike.

#[cfg(feature = "postgres")]
mod base;

#[cfg(feature = "postgres")]
pub use base::BaseRepository;

use async_trait::async_trait;

use crate::common::DatabaseResult;

/// Entities with a numeric identity assigned by the store.
///
/// An id of `0` marks an entity that has not been persisted yet.
pub trait Identifiable {
    fn id(&self) -> i32;

    fn set_id(&mut self, id: i32);

    fn is_new(&self) -> bool {
        self.id() == 0
    }
}

/// Generic data-access contract
#[async_trait]
pub trait Repository<T>: Send + Sync
where
    T: Send + Sync + 'static,
{
    /// Predicate accepted by [`Repository::search`]
    type Predicate: Send + 'static;

    /// Every persisted entity, ordered by identity
    async fn get_all(&self) -> DatabaseResult<Vec<T>>;

    /// The entity with `id`, or `None` when absent
    async fn get_by_id(&self, id: i32) -> DatabaseResult<Option<T>>;

    /// Persist a new entity and return it with its assigned id
    async fn add(&self, entity: T) -> DatabaseResult<T>;

    /// Overwrite the entity sharing `entity`'s id; `NotFound` when there is none
    async fn update(&self, entity: T) -> DatabaseResult<T>;

    /// Hard-delete the entity sharing `entity`'s id; `NotFound` when there is none
    async fn remove(&self, entity: T) -> DatabaseResult<()>;

    /// Every entity satisfying `predicate`, ordered by identity
    async fn search(&self, predicate: Self::Predicate) -> DatabaseResult<Vec<T>>;
}
