use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "inventory")]
#[command(about = "Manage the inventory catalog")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List items one page at a time
    List {
        #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
        page: i64,

        /// Falls back to INVENTORY_DEFAULT_PAGE_SIZE when missing or not positive
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        page_size: i64,
    },

    /// Show a single item
    Get { id: i32 },

    /// Add a new item; fails if the name is taken
    Add(ItemArgs),

    /// Replace an item's fields; fails if another item holds the name
    Update {
        id: i32,

        #[command(flatten)]
        item: ItemArgs,
    },

    /// Remove an item by id
    Remove { id: i32 },

    /// Find items whose name contains a fragment (case-sensitive)
    Search { fragment: String },

    /// Check database connectivity
    Health,
}

#[derive(Args, Debug, Clone)]
pub struct ItemArgs {
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub description: Option<String>,

    #[arg(long, allow_negative_numbers = true)]
    pub price: f64,

    #[arg(long, allow_negative_numbers = true)]
    pub quantity: i32,
}
