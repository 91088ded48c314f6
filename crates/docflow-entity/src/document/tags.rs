//! Free-text tag parsing.

/// Split a comma-separated tag string.
///
/// Entries are trimmed and empty entries dropped. Order is preserved and
/// duplicates are kept.
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(String::from)
        .collect()
}
