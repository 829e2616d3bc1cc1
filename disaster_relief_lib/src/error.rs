//! Error types for the library layer.

/// Errors produced while loading declarations into the relational store.
///
/// Every variant is terminal for the current run; there is no retry and no
/// distinction between transient and permanent failures.
#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    /// The settings file could not be read.
    #[error("settings file error: {0}")]
    Io(#[from] std::io::Error),
    /// The settings file contents were malformed or missing required keys.
    #[error("settings file malformed: {0}")]
    Json(#[from] serde_json::Error),
    /// A connection, schema, or insert operation failed.
    #[error("database error: {0}")]
    Sql(#[from] sqlx::Error),
    /// A declaration date did not match the fixed ISO-8601 layout.
    #[error("declaration {id}: date parse error: {source}")]
    DateParse {
        id: String,
        #[source]
        source: chrono::ParseError,
    },
    /// A disaster number does not fit the table's integer column.
    #[error("declaration {id}: disaster number {value} out of range")]
    DisasterNumberRange { id: String, value: i64 },
}
