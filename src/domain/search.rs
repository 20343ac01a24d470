//! Case-insensitive substring search over the browse listing.

use super::TemplateRecord;

/// True when `query` occurs in the name, description or category.
///
/// Each field is checked on its own; a blank query matches everything. The
/// query is not trimmed, so surrounding spaces must match too.
pub fn matches_query(record: &TemplateRecord, query: &str) -> bool {
    if query.trim().is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    [&record.name, &record.description, &record.category]
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}
