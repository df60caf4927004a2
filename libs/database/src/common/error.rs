/// Unified error type for every repository and connector in the workspace
///
/// Storage engines surface their own failures through a dedicated variant; the
/// remaining variants carry the semantic outcomes callers branch on.
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    /// PostgreSQL-specific errors (SeaORM)
    #[cfg(feature = "postgres")]
    #[error("PostgreSQL error: {0}")]
    Postgres(#[from] sea_orm::DbErr),

    /// No row exists for the given identity
    #[error("Record not found: {0}")]
    NotFound(i32),

    /// The write would break a store-level constraint
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    /// Connection could not be established
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Health check failed
    #[error("Health check failed: {0}")]
    HealthCheckFailed(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type alias for database operations
pub type DatabaseResult<T> = Result<T, DatabaseError>;
