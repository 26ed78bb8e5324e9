//! Line tokenizer for delimited records.
//!
//! Splits on a single fixed comma. No quoting or escaping: a delimiter inside
//! a field cannot be represented. A line with no delimiter is one token, and
//! the token after the last delimiter is kept.

pub const DELIMITER: char = ',';

/// Split one line into its raw field tokens.
///
/// An empty line yields no tokens; consecutive delimiters yield empty ones.
/// Tokens borrow from the input and carry no type information.
pub fn split_line(line: &str) -> Vec<&str> {
    if line.is_empty() {
        return Vec::new();
    }
    line.split(DELIMITER).collect()
}
