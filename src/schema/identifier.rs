//! SQL identifier validation.

use regex::Regex;
use std::sync::LazyLock;

/// Plain, unquoted SQL identifiers.
static IDENTIFIER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("Invalid identifier regex")
});

/// Maximum identifier length accepted by both MySQL (64) and PostgreSQL (63).
pub(crate) const MAX_IDENTIFIER_LEN: usize = 63;

/// Whether `name` can be used as a table, column or constraint name.
pub fn is_valid_identifier(name: &str) -> bool {
    name.len() <= MAX_IDENTIFIER_LEN && IDENTIFIER_REGEX.is_match(name)
}
