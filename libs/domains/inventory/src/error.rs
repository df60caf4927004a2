use database::DatabaseError;
use thiserror::Error;
use validator::ValidationErrors;

#[derive(Debug, Error)]
pub enum InventoryError {
    #[error("Inventory item not found: {0}")]
    NotFound(i32),

    #[error("Invalid input: {0}")]
    Validation(String),

    /// Store unreachable, storage-level constraint violation or a query fault.
    /// Never retried at this layer.
    #[error("Persistence error: {0}")]
    Persistence(#[source] DatabaseError),
}

pub type InventoryResult<T> = Result<T, InventoryError>;

impl From<DatabaseError> for InventoryError {
    fn from(err: DatabaseError) -> Self {
        match err {
            DatabaseError::NotFound(id) => InventoryError::NotFound(id),
            other => InventoryError::Persistence(other),
        }
    }
}

impl From<ValidationErrors> for InventoryError {
    fn from(errors: ValidationErrors) -> Self {
        InventoryError::Validation(errors.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_keeps_its_id() {
        let err: InventoryError = DatabaseError::NotFound(12).into();
        assert!(matches!(err, InventoryError::NotFound(12)));
    }

    #[test]
    fn test_other_database_errors_are_persistence() {
        let err: InventoryError = DatabaseError::ConnectionFailed("refused".to_string()).into();
        assert!(matches!(
            err,
            InventoryError::Persistence(DatabaseError::ConnectionFailed(_))
        ));
        assert!(err.to_string().contains("refused"));
    }
}
