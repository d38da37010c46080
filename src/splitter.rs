//! Multi-statement SQL splitting.
//!
//! Naive splitting on `;` breaks as soon as a statement carries its own
//! semicolons, which is exactly what trigger bodies do. The splitter keeps a
//! small scan state across the semicolon-delimited parts so that a
//! `CREATE TRIGGER ... BEGIN ...; ...; END;` definition comes out as one
//! statement while plain statements flush immediately.

use crate::str_utils::{mask_quoted, word_tokens};

const TRIGGER_START: &str = "CREATE TRIGGER";
const BLOCK_OPEN: &str = "BEGIN";
const BLOCK_CLOSE: &str = "END";

/// Transient scanner state, local to one `split_statements` call
#[derive(Debug, Default)]
struct ScanState {
    /// Inside a `CREATE TRIGGER` definition whose body is still open
    inside_trigger_body: bool,
    /// Unmatched `BEGIN` keywords since the last balanced `END`
    block_depth: usize,
    /// Source text accumulated for the statement currently being assembled
    pending: String,
}

impl ScanState {
    /// Move the pending buffer out as a finished statement, if non-empty
    fn flush(&mut self, statements: &mut Vec<String>) {
        let trimmed = self.pending.trim();
        if !trimmed.is_empty() {
            statements.push(trimmed.to_string());
        }
        self.pending.clear();
    }
}

/// Split multi-statement SQL into individual executable statements.
///
/// Statements are returned trimmed and delimiter-terminated, in source order.
/// Keyword matching is case-insensitive and token-based: `BEGIN`/`END`
/// occurrences inside identifiers or quoted literals do not count toward
/// block depth. Empty segments (consecutive delimiters, trailing whitespace)
/// are skipped.
///
/// The splitter never fails. An unterminated trigger body (unmatched `BEGIN`
/// at end of input) folds all remaining text into one open-ended statement;
/// the engine reports the malformed SQL when the statement runs.
pub fn split_statements(sql: &str) -> Vec<String> {
    let mut statements = Vec::new();
    let mut scan = ScanState::default();

    for part in sql.split(';') {
        let trimmed = part.trim();
        if trimmed.is_empty() {
            continue;
        }

        scan.pending.push_str(part);
        scan.pending.push(';');

        // Literals are blanked before any keyword comparison
        let masked = mask_quoted(trimmed);
        let upper = masked.to_uppercase();

        if upper.starts_with(TRIGGER_START) {
            scan.inside_trigger_body = true;
        }

        for token in word_tokens(&masked) {
            if token.eq_ignore_ascii_case(BLOCK_OPEN) {
                scan.block_depth += 1;
            } else if token.eq_ignore_ascii_case(BLOCK_CLOSE) {
                // A stray END outside any block saturates at zero
                scan.block_depth = scan.block_depth.saturating_sub(1);
            }
        }

        if scan.inside_trigger_body {
            if scan.block_depth == 0 && upper.trim_end().ends_with(BLOCK_CLOSE) {
                scan.inside_trigger_body = false;
                scan.flush(&mut statements);
            }
        } else if scan.block_depth == 0 {
            scan.flush(&mut statements);
        }
    }

    // Unterminated trigger or trailing text without a delimiter
    scan.flush(&mut statements);

    statements
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_statements_split_per_delimiter() {
        let statements = split_statements("SELECT 1; SELECT 2;");
        assert_eq!(statements, vec!["SELECT 1;", "SELECT 2;"]);
    }

    #[test]
    fn test_empty_segments_are_skipped() {
        let statements = split_statements(";;  SELECT 1;;;  \n ");
        assert_eq!(statements, vec!["SELECT 1;"]);
    }

    #[test]
    fn test_trigger_body_is_one_statement() {
        let sql = "CREATE TRIGGER t BEFORE INSERT ON a BEGIN UPDATE a SET x=1; END;";
        let statements = split_statements(sql);
        assert_eq!(statements.len(), 1);
        assert_eq!(statements[0], sql);
    }

    #[test]
    fn test_trigger_with_multiple_body_statements() {
        let sql = "CREATE TRIGGER audit AFTER UPDATE ON users\n\
                   BEGIN\n\
                   INSERT INTO log VALUES (old.id);\n\
                   DELETE FROM cache WHERE user_id = old.id;\n\
                   END;\n\
                   SELECT * FROM log;";
        let statements = split_statements(sql);
        assert_eq!(statements.len(), 2);
        assert!(statements[0].starts_with("CREATE TRIGGER audit"));
        assert!(statements[0].trim_end_matches(';').trim_end().ends_with("END"));
        assert_eq!(statements[1], "SELECT * FROM log;");
    }

    #[test]
    fn test_nested_begin_end_blocks() {
        let sql = "CREATE TRIGGER t AFTER INSERT ON a BEGIN \
                   BEGIN UPDATE a SET x=1; END; \
                   UPDATE a SET y=2; \
                   END;";
        let statements = split_statements(sql);
        assert_eq!(statements.len(), 1);
    }

    #[test]
    fn test_create_table_flushes_on_its_own() {
        let sql = "CREATE TABLE t (id INTEGER); INSERT INTO t VALUES (1);";
        let statements = split_statements(sql);
        assert_eq!(
            statements,
            vec!["CREATE TABLE t (id INTEGER);", "INSERT INTO t VALUES (1);"]
        );
    }

    #[test]
    fn test_keywords_inside_literals_do_not_count() {
        let sql = "CREATE TRIGGER t AFTER INSERT ON a BEGIN \
                   INSERT INTO log VALUES ('END'); \
                   END; \
                   INSERT INTO notes VALUES ('BEGIN again');";
        let statements = split_statements(sql);
        assert_eq!(statements.len(), 2);
        assert!(statements[0].contains("'END'"));
        assert!(statements[1].starts_with("INSERT INTO notes"));
    }

    #[test]
    fn test_keywords_inside_identifiers_do_not_count() {
        let statements = split_statements("UPDATE append SET legend = 1; SELECT 2;");
        assert_eq!(statements.len(), 2);
    }

    #[test]
    fn test_case_insensitive_trigger_detection() {
        let sql = "create trigger t before insert on a begin update a set x=1; end;";
        let statements = split_statements(sql);
        assert_eq!(statements.len(), 1);
    }

    #[test]
    fn test_unmatched_begin_folds_remainder_into_one_statement() {
        let sql = "CREATE TRIGGER t AFTER INSERT ON a BEGIN UPDATE a SET x=1; SELECT 2;";
        let statements = split_statements(sql);
        assert_eq!(statements.len(), 1);
        assert!(statements[0].contains("SELECT 2;"));
    }

    #[test]
    fn test_resplit_is_idempotent() {
        let inputs = [
            "SELECT 1;",
            "CREATE TABLE t (id INTEGER);",
            "CREATE TRIGGER t BEFORE INSERT ON a BEGIN UPDATE a SET x=1; END;",
        ];
        for input in inputs {
            let first = split_statements(input);
            assert_eq!(first.len(), 1);
            assert_eq!(split_statements(&first[0]), first);
        }
    }

    #[test]
    fn test_round_trip_preserves_all_text() {
        let sql = "CREATE TABLE t (id INTEGER);\nINSERT INTO t VALUES (1);\n\
                   CREATE TRIGGER tr AFTER INSERT ON t BEGIN UPDATE t SET id=2; END;\n\
                   SELECT * FROM t;";
        let statements = split_statements(sql);
        let rejoined: String = statements.join(" ");
        let normalize = |s: &str| s.split_whitespace().collect::<Vec<_>>().join(" ");
        assert_eq!(normalize(&rejoined), normalize(sql));
    }

    #[test]
    fn test_statement_without_trailing_delimiter() {
        let statements = split_statements("SELECT 1");
        assert_eq!(statements, vec!["SELECT 1;"]);
    }
}
