/// Utility functions for string processing, particularly SQL keyword scanning
use regex::Regex;

// Regex compiled once as a lazy static for performance
static WORD_REGEX: once_cell::sync::Lazy<Regex> =
    once_cell::sync::Lazy::new(|| Regex::new(r"[A-Za-z_][A-Za-z0-9_]*").unwrap());

/// Blank out the contents of quoted string literals, preserving length and
/// the positions of everything outside them.
///
/// Keyword scanning runs on the masked text so that a literal like
/// `'not the END'` can never perturb block tracking.
pub fn mask_quoted(sql: &str) -> String {
    let mut masked = String::with_capacity(sql.len());
    let mut in_string = false;
    let mut string_char = '"';

    for ch in sql.chars() {
        if in_string {
            if ch == string_char {
                in_string = false;
                masked.push(ch);
            } else {
                masked.push(' ');
            }
        } else if ch == '\'' || ch == '"' {
            in_string = true;
            string_char = ch;
            masked.push(ch);
        } else {
            masked.push(ch);
        }
    }

    masked
}

/// Extract the word tokens (identifier-shaped runs) of a statement fragment.
///
/// Tokens are whole words only, so an identifier such as `append` never
/// matches the keyword `END`. Callers compare case-insensitively.
pub fn word_tokens(fragment: &str) -> Vec<&str> {
    WORD_REGEX.find_iter(fragment).map(|m| m.as_str()).collect()
}

/// First whitespace-delimited token of a statement, if any
pub fn leading_token(statement: &str) -> Option<&str> {
    statement.split_whitespace().next()
}

/// Nth whitespace-delimited token (0-based), used for object/table names
pub fn nth_token(statement: &str, n: usize) -> Option<&str> {
    statement.split_whitespace().nth(n)
}
