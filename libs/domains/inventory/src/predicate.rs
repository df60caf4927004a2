use database::Matches;

use crate::models::InventoryItem;

/// Storage-agnostic filter over item fields
///
/// The in-memory store evaluates it row by row; the PostgreSQL store translates it
/// into a `WHERE` clause. String comparisons are case-sensitive in both.
#[derive(Debug, Clone, PartialEq)]
pub enum ItemPredicate {
    NameEquals(String),
    NameContains(String),
    IdNotEquals(i32),
    And(Box<ItemPredicate>, Box<ItemPredicate>),
}

impl ItemPredicate {
    pub fn name_equals(name: impl Into<String>) -> Self {
        Self::NameEquals(name.into())
    }

    pub fn name_contains(fragment: impl Into<String>) -> Self {
        Self::NameContains(fragment.into())
    }

    pub fn id_not_equals(id: i32) -> Self {
        Self::IdNotEquals(id)
    }

    pub fn and(self, other: ItemPredicate) -> Self {
        Self::And(Box::new(self), Box::new(other))
    }
}

impl Matches<InventoryItem> for ItemPredicate {
    fn matches(&self, item: &InventoryItem) -> bool {
        match self {
            Self::NameEquals(name) => item.name == *name,
            Self::NameContains(fragment) => item.name.contains(fragment.as_str()),
            Self::IdNotEquals(id) => item.id != *id,
            Self::And(left, right) => left.matches(item) && right.matches(item),
        }
    }
}
