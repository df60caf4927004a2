//! Inventory CLI
//!
//! Each invocation is one unit of work against PostgreSQL: open the pool, run a single
//! command, close the pool.

use clap::Parser;
use core_config::tracing::{init_tracing, install_color_eyre};
use core_config::{Environment, FromEnv};
use database::postgres::{self, DatabaseConnection};
use domain_inventory::{InventoryItemService, PgInventoryItemRepository};
use eyre::{Result, eyre};
use serde_json::Value;
use tracing::info;

mod cli;
mod commands;
mod config;

use cli::{Cli, Command};
use config::InventoryConfig;

#[tokio::main]
async fn main() -> Result<()> {
    install_color_eyre();

    let environment = Environment::from_env();
    init_tracing(&environment);

    let cli = Cli::parse();
    let config = InventoryConfig::from_env()?;

    info!("Connecting to database...");
    let db = postgres::connect_from_config(config.database.clone()).await?;

    // Close the pool before reporting, whatever the command's outcome.
    let outcome = run(&db, cli.command, config.default_page_size).await;
    db.close().await?;

    println!("{}", serde_json::to_string_pretty(&outcome?)?);
    Ok(())
}

async fn run(db: &DatabaseConnection, command: Command, default_page_size: usize) -> Result<Value> {
    if let Command::Health = command {
        let status = postgres::check_health_detailed(db).await;
        if !status.healthy {
            return Err(eyre!(
                "Database unhealthy: {}",
                status.message.unwrap_or_default()
            ));
        }
        return Ok(serde_json::to_value(status)?);
    }

    let service = InventoryItemService::new(PgInventoryItemRepository::new(db.clone()));
    commands::execute(&service, command, default_page_size).await
}
