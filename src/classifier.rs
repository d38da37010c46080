//! Classification of statement execution outcomes into display records.

use crate::{
    engine::SqlEngine,
    result::{ExecutionOutcome, Result, ResultRecord},
    str_utils::{leading_token, nth_token},
};

/// The finite set of statement kinds the classifier distinguishes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementKind {
    /// CREATE / DROP / ALTER
    Ddl,
    /// INSERT / UPDATE / DELETE
    Dml,
    /// SELECT
    Select,
    /// Everything else (PRAGMA, REPLACE, ...)
    Other,
}

impl StatementKind {
    /// Detect the kind from the statement's leading keyword, case-insensitively
    pub fn detect(statement: &str) -> Self {
        let Some(keyword) = leading_token(statement) else {
            return StatementKind::Other;
        };
        match keyword.to_uppercase().as_str() {
            "CREATE" | "DROP" | "ALTER" => StatementKind::Ddl,
            "INSERT" | "UPDATE" | "DELETE" => StatementKind::Dml,
            "SELECT" => StatementKind::Select,
            _ => StatementKind::Other,
        }
    }
}

/// Build the display record for one executed statement.
///
/// An engine failure short-circuits every kind to an `Error` record. For DML
/// statements a read-back `SELECT * FROM <table>` is issued through `engine`
/// to snapshot the table's post-mutation contents; this extra read is a
/// deliberate side effect of classification. A read-back failure degrades the
/// record to `Error` instead of propagating, so `classify` itself never fails.
pub fn classify<E: SqlEngine>(
    engine: &mut E,
    statement: &str,
    outcome: Result<ExecutionOutcome>,
) -> ResultRecord {
    let outcome = match outcome {
        Ok(outcome) => outcome,
        Err(e) => {
            return ResultRecord::Error {
                message: e.to_string(),
            };
        }
    };

    match StatementKind::detect(statement) {
        StatementKind::Ddl => ResultRecord::Ddl {
            message: ddl_message(statement),
        },
        StatementKind::Dml => classify_dml(engine, statement, outcome.changes),
        StatementKind::Select => match outcome.table {
            Some(table) => ResultRecord::Select {
                data: Some(table),
                message: None,
            },
            // Zero-row reads are reported as a message, not an empty table
            None => ResultRecord::Select {
                data: None,
                message: Some("No results found.".to_string()),
            },
        },
        StatementKind::Other => ResultRecord::Other {
            message: "Query executed successfully.".to_string(),
        },
    }
}

/// Synthesize the DDL confirmation from the statement's own tokens.
///
/// The verb is suffixed mechanically (`create` -> `createed`, `drop` ->
/// `droped`), keeping the message text bit-compatible with what the
/// rendering layer has always displayed.
fn ddl_message(statement: &str) -> String {
    let upper = statement.to_uppercase();
    let operation = leading_token(&upper).unwrap_or_default().to_lowercase();
    let object_type = nth_token(&upper, 1).unwrap_or_default();
    let name = object_name(nth_token(&upper, 2).unwrap_or_default());
    format!("{object_type} {name} successfully {operation}ed.")
}

fn classify_dml<E: SqlEngine>(engine: &mut E, statement: &str, changes: u64) -> ResultRecord {
    let operation = leading_token(statement).unwrap_or_default().to_lowercase();
    let table_name = dml_table_name(statement).unwrap_or_default();

    match engine.query(&format!("SELECT * FROM {table_name}")) {
        Ok(table) => ResultRecord::Dml {
            operation,
            changes,
            table_name,
            data: table,
        },
        Err(e) => ResultRecord::Error {
            message: e.to_string(),
        },
    }
}

/// The affected table is named by the statement's third token
/// (`INSERT INTO t ...`, `DELETE FROM t ...`). Source casing is preserved
/// for the read-back query. A token that does not actually name a table
/// (such as `UPDATE t SET`'s `SET`) makes the read-back fail, which degrades
/// the record to an error.
fn dml_table_name(statement: &str) -> Option<String> {
    nth_token(statement, 2).map(object_name)
}

/// Strip a trailing delimiter and any parenthesized tail from a token, so
/// `users(id,name);` names `users`
fn object_name(token: &str) -> String {
    token
        .split('(')
        .next()
        .unwrap_or_default()
        .trim_end_matches(';')
        .to_string()
}
