//! Configuration for the inventory CLI

use core_config::{ConfigError, FromEnv, env_parse};
use database::postgres::PostgresConfig;

#[derive(Debug, Clone)]
pub struct InventoryConfig {
    pub database: PostgresConfig,
    /// Page size used when `--page-size` is missing or not positive
    pub default_page_size: usize,
}

impl FromEnv for InventoryConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let default_page_size: usize = env_parse("INVENTORY_DEFAULT_PAGE_SIZE", "50")?;
        if default_page_size == 0 {
            return Err(ConfigError::ParseError {
                key: "INVENTORY_DEFAULT_PAGE_SIZE".to_string(),
                details: "must be at least 1".to_string(),
            });
        }

        Ok(Self {
            database: PostgresConfig::from_env()?,
            default_page_size,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        temp_env::with_vars(
            [
                ("DATABASE_URL", Some("postgresql://localhost/inventory")),
                ("INVENTORY_DEFAULT_PAGE_SIZE", None),
            ],
            || {
                let config = InventoryConfig::from_env().unwrap();
                assert_eq!(config.default_page_size, 50);
                assert_eq!(config.database.url(), "postgresql://localhost/inventory");
            },
        );
    }

    #[test]
    fn test_config_zero_page_size_rejected() {
        temp_env::with_vars(
            [
                ("DATABASE_URL", Some("postgresql://localhost/inventory")),
                ("INVENTORY_DEFAULT_PAGE_SIZE", Some("0")),
            ],
            || {
                let err = InventoryConfig::from_env().unwrap_err();
                assert!(err.to_string().contains("INVENTORY_DEFAULT_PAGE_SIZE"));
            },
        );
    }

    #[test]
    fn test_config_requires_database_url() {
        temp_env::with_var_unset("DATABASE_URL", || {
            assert!(InventoryConfig::from_env().is_err());
        });
    }
}
