use serde::Serialize;
use thiserror::Error;

/// Main error type for the sqlpad library
#[derive(Error, Debug)]
pub enum SqlPadError {
    #[cfg(feature = "sqlite")]
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    /// Failure reported by a non-SQLite engine collaborator
    #[error("engine error: {0}")]
    Engine(String),
}

/// Type alias for Results using SqlPadError
pub type Result<T> = std::result::Result<T, SqlPadError>;

/// A tabular result set as reported by the SQL engine
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultTable {
    /// Column names in select order
    pub columns: Vec<String>,
    /// Row cells, one inner vector per row, in engine order.
    /// Serialized as `values`, the field name the rendering layer reads.
    #[serde(rename = "values")]
    pub rows: Vec<Vec<serde_json::Value>>,
}

/// What the engine reported for one successfully executed statement
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutionOutcome {
    /// Number of rows changed by the statement (0 for reads and DDL)
    pub changes: u64,
    /// Result set, or `None` when the statement produced no rows
    pub table: Option<ResultTable>,
}

/// Display-ready record describing the outcome of one statement.
///
/// Serializes with a lowercase `type` tag so a rendering layer can dispatch
/// on the kind without knowing the Rust enum.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ResultRecord {
    /// CREATE/DROP/ALTER: synthesized confirmation naming the object
    Ddl { message: String },
    /// INSERT/UPDATE/DELETE: change count plus a post-mutation table snapshot
    Dml {
        operation: String,
        changes: u64,
        #[serde(rename = "tableName")]
        table_name: String,
        /// Current contents of the affected table; `None` when it is empty
        #[serde(skip_serializing_if = "Option::is_none")]
        data: Option<ResultTable>,
    },
    /// SELECT: either the result table or an empty-result message, never both
    Select {
        #[serde(skip_serializing_if = "Option::is_none")]
        data: Option<ResultTable>,
        #[serde(skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
    /// Catch-all for statements like PRAGMA or trigger creation
    Other { message: String },
    /// The engine rejected the statement (or a DML read-back failed)
    Error { message: String },
}
