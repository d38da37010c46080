pub mod classifier;
pub mod engine;
pub mod result;
pub mod runner;
#[cfg(feature = "sqlite")]
pub mod runner_sqlite;
pub mod splitter;
pub mod str_utils;

// Re-export types for convenience
pub use classifier::{StatementKind, classify};
pub use engine::SqlEngine;
pub use result::{ExecutionOutcome, Result, ResultRecord, ResultTable, SqlPadError};
pub use runner::{ErrorPolicy, run_script};
pub use splitter::split_statements;

// Re-export third-party types used in the public API to provide fallback for dependency conflicts
pub use serde_json::Value as JsonValue;

// Re-export third-party types used in the public API to provide fallback for dependency conflicts
#[cfg(feature = "sqlite")]
pub use rusqlite::Connection as SqliteConnection;
