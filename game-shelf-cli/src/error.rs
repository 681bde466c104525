use game_shelf_db::OperationError;
use game_shelf_db::schema::SchemaError;
use thiserror::Error;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// Opening or creating the database failed
    #[error("Database error: {0}")]
    Schema(#[from] SchemaError),

    /// A query or mutation failed
    #[error("{0}")]
    Operation(#[from] OperationError),
}
