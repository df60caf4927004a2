//! One unit of work per CLI command, driven through the inventory service.

use domain_inventory::{
    InventoryError, InventoryItemChanges, InventoryItemRepository, InventoryItemService,
    NewInventoryItem, Page, PageRequest, paginate,
};
use eyre::{Result, eyre};
use serde::Serialize;
use serde_json::{Value, json};
use tracing::warn;
use validator::Validate;

use crate::cli::{Command, ItemArgs};

/// Run `command` and return its JSON output
///
/// `health` needs the raw connection and is handled by the caller.
pub async fn execute<R: InventoryItemRepository>(
    service: &InventoryItemService<R>,
    command: Command,
    default_page_size: usize,
) -> Result<Value> {
    match command {
        Command::List { page, page_size } => {
            let request = PageRequest::normalize(page, page_size, default_page_size);
            let page = paginate(service.get_all().await?, request.page, request.page_size);

            Ok(serde_json::to_value(PageOutput::new(&page))?)
        }

        Command::Get { id } => match service.get_by_id(id).await? {
            Some(item) => Ok(serde_json::to_value(item)?),
            None => {
                warn!(item_id = id, "Item not found");
                Err(InventoryError::NotFound(id).into())
            }
        },

        Command::Add(args) => {
            let input = new_item(args);
            input.validate().map_err(InventoryError::from)?;

            let name = input.name.clone();
            match service.add(input.into()).await? {
                Some(item) => Ok(serde_json::to_value(item)?),
                None => Err(eyre!("An item named '{name}' already exists")),
            }
        }

        Command::Update { id, item } => {
            let changes = item_changes(item);
            changes.validate().map_err(InventoryError::from)?;

            let name = changes.name.clone();
            match service.update(changes.into_item(id)).await? {
                Some(item) => Ok(serde_json::to_value(item)?),
                None => Err(eyre!("Another item is already named '{name}'")),
            }
        }

        Command::Remove { id } => {
            if service.remove_by_id(id).await? {
                Ok(json!({ "removed": id }))
            } else {
                Err(InventoryError::NotFound(id).into())
            }
        }

        Command::Search { fragment } => Ok(serde_json::to_value(service.search(&fragment).await?)?),

        Command::Health => Err(eyre!("health is not a catalog command")),
    }
}

/// A page plus its navigation flags
#[derive(Serialize)]
struct PageOutput<'a, T> {
    #[serde(flatten)]
    page: &'a Page<T>,
    total_pages: usize,
    has_previous_page: bool,
    has_next_page: bool,
}

impl<'a, T> PageOutput<'a, T> {
    fn new(page: &'a Page<T>) -> Self {
        Self {
            page,
            total_pages: page.total_pages(),
            has_previous_page: page.has_previous_page(),
            has_next_page: page.has_next_page(),
        }
    }
}

fn new_item(args: ItemArgs) -> NewInventoryItem {
    NewInventoryItem {
        name: args.name,
        description: args.description,
        price: args.price,
        quantity: args.quantity,
    }
}

fn item_changes(args: ItemArgs) -> InventoryItemChanges {
    InventoryItemChanges {
        name: args.name,
        description: args.description,
        price: args.price,
        quantity: args.quantity,
    }
}
