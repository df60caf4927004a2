use database::Identifiable;
use sea_orm::entity::prelude::*;

use crate::models::InventoryItem;

/// SeaORM entity for the `inventory_items` table
///
/// The unique index on `name` backs up the service-level uniqueness check when two
/// writers race past it.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "inventory_items")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "String(StringLen::N(150))", unique)]
    pub name: String,
    #[sea_orm(column_type = "String(StringLen::N(350))", nullable)]
    pub description: Option<String>,
    pub price: f64,
    pub quantity: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Identifiable for Model {
    fn id(&self) -> i32 {
        self.id
    }

    fn set_id(&mut self, id: i32) {
        self.id = id;
    }
}

impl From<Model> for InventoryItem {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
            price: model.price,
            quantity: model.quantity,
        }
    }
}

impl From<InventoryItem> for Model {
    fn from(item: InventoryItem) -> Self {
        Self {
            id: item.id,
            name: item.name,
            description: item.description,
            price: item.price,
            quantity: item.quantity,
        }
    }
}
