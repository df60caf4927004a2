use database::Identifiable;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A stocked item
///
/// `id` is `0` until the store assigns one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: i32,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub price: f64,
    pub quantity: i32,
}

impl Identifiable for InventoryItem {
    fn id(&self) -> i32 {
        self.id
    }

    fn set_id(&mut self, id: i32) {
        self.id = id;
    }
}

/// DTO for creating a new item
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewInventoryItem {
    #[validate(length(min = 2, max = 150))]
    pub name: String,

    #[validate(length(max = 350))]
    pub description: Option<String>,

    #[validate(range(min = 0.0))]
    pub price: f64,

    #[validate(range(min = 0))]
    pub quantity: i32,
}

impl From<NewInventoryItem> for InventoryItem {
    fn from(input: NewInventoryItem) -> Self {
        Self {
            id: 0,
            name: input.name,
            description: input.description,
            price: input.price,
            quantity: input.quantity,
        }
    }
}

/// DTO for replacing an existing item's fields
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct InventoryItemChanges {
    #[validate(length(min = 2, max = 150))]
    pub name: String,

    #[validate(length(max = 350))]
    pub description: Option<String>,

    #[validate(range(min = 0.0))]
    pub price: f64,

    #[validate(range(min = 0))]
    pub quantity: i32,
}

impl InventoryItemChanges {
    /// The full replacement for item `id`
    pub fn into_item(self, id: i32) -> InventoryItem {
        InventoryItem {
            id,
            name: self.name,
            description: self.description,
            price: self.price,
            quantity: self.quantity,
        }
    }
}
