use std::marker::PhantomData;

use async_trait::async_trait;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, Condition, DatabaseConnection, DbErr, EntityName,
    EntityTrait, IntoActiveModel, Iterable, PrimaryKeyToColumn, PrimaryKeyTrait, QueryFilter,
    QueryOrder, Select,
};
use tracing::debug;

use super::{Identifiable, Repository};
use crate::common::{DatabaseError, DatabaseResult};

/// [`Repository`] over any SeaORM entity with an `i32` primary key.
///
/// Domain repositories wrap a `BaseRepository` and convert between the SeaORM model and
/// their domain type. Search predicates are SeaORM [`Condition`]s, evaluated by the
/// database as a `WHERE` clause.
///
/// The repository holds a [`DatabaseConnection`] pool handle. Every call checks a
/// connection out of the pool for the duration of its statement; the connection goes
/// back to the pool when the call's future completes or is dropped.
///
/// `add` inserts a non-zero id as given. PostgreSQL does not advance the `SERIAL`
/// sequence for such a row, so a later add with id `0` can be handed the same key and
/// fail on the primary key constraint. Only insert explicit ids into tables whose
/// sequence is managed separately.
pub struct BaseRepository<E: EntityTrait> {
    db: DatabaseConnection,
    _entity: PhantomData<E>,
}

impl<E: EntityTrait> BaseRepository<E> {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            _entity: PhantomData,
        }
    }

    fn table() -> &'static str {
        E::default().table_name()
    }

    fn ordered(select: Select<E>) -> Select<E> {
        E::PrimaryKey::iter().fold(select, |query, key| query.order_by_asc(key.into_column()))
    }
}

impl<E: EntityTrait> Clone for BaseRepository<E> {
    fn clone(&self) -> Self {
        Self::new(self.db.clone())
    }
}

#[async_trait]
impl<E> Repository<E::Model> for BaseRepository<E>
where
    E: EntityTrait + 'static,
    E::Model: Identifiable + IntoActiveModel<E::ActiveModel> + Send + Sync + 'static,
    E::ActiveModel: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send + 'static,
    <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<i32>,
{
    type Predicate = Condition;

    async fn get_all(&self) -> DatabaseResult<Vec<E::Model>> {
        let rows = Self::ordered(E::find()).all(&self.db).await?;
        debug!(table = Self::table(), count = rows.len(), "Fetched all rows");
        Ok(rows)
    }

    async fn get_by_id(&self, id: i32) -> DatabaseResult<Option<E::Model>> {
        Ok(E::find_by_id(id).one(&self.db).await?)
    }

    async fn add(&self, entity: E::Model) -> DatabaseResult<E::Model> {
        let is_new = entity.is_new();
        let mut active = entity.into_active_model().reset_all();

        // Let the database assign the key for rows that were never persisted.
        if is_new {
            for key in E::PrimaryKey::iter() {
                active.not_set(key.into_column());
            }
        }

        let stored = active.insert(&self.db).await?;
        debug!(table = Self::table(), id = stored.id(), "Inserted row");
        Ok(stored)
    }

    async fn update(&self, entity: E::Model) -> DatabaseResult<E::Model> {
        let id = entity.id();
        let active = entity.into_active_model().reset_all();

        match active.update(&self.db).await {
            Ok(stored) => {
                debug!(table = Self::table(), id, "Updated row");
                Ok(stored)
            }
            Err(DbErr::RecordNotUpdated) => Err(DatabaseError::NotFound(id)),
            Err(err) => Err(err.into()),
        }
    }

    async fn remove(&self, entity: E::Model) -> DatabaseResult<()> {
        let id = entity.id();
        let result = E::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected == 0 {
            return Err(DatabaseError::NotFound(id));
        }

        debug!(table = Self::table(), id, "Deleted row");
        Ok(())
    }

    async fn search(&self, predicate: Condition) -> DatabaseResult<Vec<E::Model>> {
        let rows = Self::ordered(E::find().filter(predicate))
            .all(&self.db)
            .await?;
        debug!(table = Self::table(), count = rows.len(), "Searched rows");
        Ok(rows)
    }
}
