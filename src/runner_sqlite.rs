//! SQLite engine backend via rusqlite.

use crate::{
    engine::SqlEngine,
    result::{Result, ResultTable},
};
use rusqlite::Connection;

fn value_ref_to_json(value: rusqlite::types::ValueRef<'_>) -> serde_json::Value {
    match value {
        rusqlite::types::ValueRef::Integer(i) => serde_json::Value::Number(i.into()),
        rusqlite::types::ValueRef::Real(r) => serde_json::Value::from(r),
        rusqlite::types::ValueRef::Text(s) => {
            serde_json::Value::String(String::from_utf8_lossy(s).to_string())
        }
        rusqlite::types::ValueRef::Blob(b) => serde_json::Value::Array(
            b.iter()
                .map(|&byte| serde_json::Value::Number(byte.into()))
                .collect(),
        ),
        rusqlite::types::ValueRef::Null => serde_json::Value::Null,
    }
}

impl SqlEngine for Connection {
    fn execute(&mut self, statement: &str) -> Result<u64> {
        let mut stmt = self.prepare(statement)?;
        if stmt.column_count() == 0 {
            let changes = stmt.execute([])?;
            Ok(changes as u64)
        } else {
            // Row-returning statements routed here (PRAGMA and friends) are
            // drained so they still run to completion; their rows are not
            // part of an execute outcome
            let mut rows = stmt.query([])?;
            while rows.next()?.is_some() {}
            Ok(0)
        }
    }

    fn query(&mut self, statement: &str) -> Result<Option<ResultTable>> {
        let mut stmt = self.prepare(statement)?;
        let columns: Vec<String> = stmt
            .column_names()
            .iter()
            .map(|name| name.to_string())
            .collect();
        let column_count = stmt.column_count();

        let mut raw_rows = stmt.query([])?;
        let mut rows = Vec::new();
        while let Some(row) = raw_rows.next()? {
            let mut cells = Vec::with_capacity(column_count);
            for idx in 0..column_count {
                cells.push(value_ref_to_json(row.get_ref(idx)?));
            }
            rows.push(cells);
        }

        // Zero rows reads as "no table", matching how the classifier reports
        // empty results
        if rows.is_empty() {
            return Ok(None);
        }
        Ok(Some(ResultTable { columns, rows }))
    }
}
