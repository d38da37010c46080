//! Script orchestration: split, execute in order, classify each outcome.

use crate::{
    classifier::{StatementKind, classify},
    engine::SqlEngine,
    result::{ExecutionOutcome, ResultRecord},
    splitter::split_statements,
};

/// What to do with the rest of a script once a statement fails.
///
/// Statement execution is strictly sequential either way; this only decides
/// whether statements after the first `Error` record still run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// Stop after the first error record (the remaining statements never run)
    HaltOnError,
    /// Keep executing the remaining statements
    Continue,
}

/// Run a whole script against `engine` and collect one record per statement.
///
/// The full statement sequence is produced before anything executes.
/// Statements then run strictly in order; each one's completion, including
/// the classifier's DML read-back, happens before the next starts. SELECTs
/// go through [`SqlEngine::query`], everything else through
/// [`SqlEngine::execute`].
pub fn run_script<E: SqlEngine>(engine: &mut E, sql: &str, policy: ErrorPolicy) -> Vec<ResultRecord> {
    let statements = split_statements(sql);
    let mut records = Vec::with_capacity(statements.len());

    for statement in statements {
        let outcome = match StatementKind::detect(&statement) {
            StatementKind::Select => engine.query(&statement).map(|table| ExecutionOutcome {
                changes: 0,
                table,
            }),
            _ => engine.execute(&statement).map(|changes| ExecutionOutcome {
                changes,
                table: None,
            }),
        };

        let record = classify(engine, &statement, outcome);
        let failed = matches!(record, ResultRecord::Error { .. });
        records.push(record);

        if failed && policy == ErrorPolicy::HaltOnError {
            break;
        }
    }

    records
}
