//! Parsing helpers for loosely typed query-string values.

/// `true` only for the literal values `"true"` and `"1"`
pub fn parse_flag(value: Option<&str>) -> bool {
    matches!(value, Some("true") | Some("1"))
}

/// Splits a comma separated list. Entries are trimmed and blanks dropped.
pub fn split_csv(value: Option<&str>) -> Vec<&str> {
    value
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect()
}
