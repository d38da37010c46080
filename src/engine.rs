use crate::result::{Result, ResultTable};

/// Contract for the external SQL engine a script runs against.
///
/// The core treats the engine purely as a collaborator: it executes one
/// statement at a time and reports either a change count, a result table, or
/// a failure. The `&mut` receiver reflects that the caller owns the database
/// state exclusively while a script runs.
pub trait SqlEngine {
    /// Run a statement, returning the number of rows it changed
    fn execute(&mut self, statement: &str) -> Result<u64>;

    /// Run a statement, returning its result table, or `None` when it
    /// produced no rows
    fn query(&mut self, statement: &str) -> Result<Option<ResultTable>>;
}
