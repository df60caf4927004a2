use async_trait::async_trait;
use database::{BaseRepository, DatabaseResult, Repository};
use sea_orm::sea_query::LikeExpr;
use sea_orm::{ColumnTrait, Condition, DatabaseConnection};

use crate::{entity, models::InventoryItem, predicate::ItemPredicate};

/// PostgreSQL-backed inventory store
///
/// Cloning is cheap: clones share the connection pool.
#[derive(Clone)]
pub struct PgInventoryItemRepository {
    base: BaseRepository<entity::Entity>,
}

impl PgInventoryItemRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }
}

/// Escape `LIKE` wildcards so a fragment only ever matches itself
fn like_fragment(fragment: &str) -> String {
    let mut escaped = String::with_capacity(fragment.len() + 2);
    escaped.push('%');
    for c in fragment.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}

fn into_condition(predicate: ItemPredicate) -> Condition {
    match predicate {
        ItemPredicate::NameEquals(name) => Condition::all().add(entity::Column::Name.eq(name)),
        ItemPredicate::NameContains(fragment) => Condition::all().add(
            entity::Column::Name.like(LikeExpr::new(like_fragment(&fragment)).escape('\\')),
        ),
        ItemPredicate::IdNotEquals(id) => Condition::all().add(entity::Column::Id.ne(id)),
        ItemPredicate::And(left, right) => Condition::all()
            .add(into_condition(*left))
            .add(into_condition(*right)),
    }
}

#[async_trait]
impl Repository<InventoryItem> for PgInventoryItemRepository {
    type Predicate = ItemPredicate;

    async fn get_all(&self) -> DatabaseResult<Vec<InventoryItem>> {
        let models = self.base.get_all().await?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn get_by_id(&self, id: i32) -> DatabaseResult<Option<InventoryItem>> {
        Ok(self.base.get_by_id(id).await?.map(Into::into))
    }

    async fn add(&self, item: InventoryItem) -> DatabaseResult<InventoryItem> {
        let model = self.base.add(item.into()).await?;
        tracing::info!(item_id = model.id, "Inserted inventory item");
        Ok(model.into())
    }

    async fn update(&self, item: InventoryItem) -> DatabaseResult<InventoryItem> {
        let model = self.base.update(item.into()).await?;
        tracing::info!(item_id = model.id, "Updated inventory item");
        Ok(model.into())
    }

    async fn remove(&self, item: InventoryItem) -> DatabaseResult<()> {
        let id = item.id;
        self.base.remove(item.into()).await?;
        tracing::info!(item_id = id, "Deleted inventory item");
        Ok(())
    }

    async fn search(&self, predicate: ItemPredicate) -> DatabaseResult<Vec<InventoryItem>> {
        let models = self.base.search(into_condition(predicate)).await?;
        Ok(models.into_iter().map(Into::into).collect())
    }
}
