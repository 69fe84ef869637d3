//! Pure filtering over item sequences.
//!
//! Filters never mutate their input and compose by chaining; applying both
//! narrows to the intersection. An empty filter (no categories selected, empty
//! search term) is the identity, matching the dashboard's "no selection" default.

use std::collections::HashSet;

use serde::Deserialize;

use crate::inventory_model::{Category, InventoryItem};

/// Combined filter request as submitted by the presentation layer.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct ItemFilter {
    /// Categories to keep. Empty means no category filtering.
    #[serde(default)]
    pub categories: Vec<Category>,
    /// Case-insensitive name substring. Empty means no name filtering.
    #[serde(default)]
    pub search: String,
}

/// Applies both parts of `filter` in sequence.
pub fn apply(filter: &ItemFilter, items: &[InventoryItem]) -> Vec<InventoryItem> {
    let categories: HashSet<Category> = filter.categories.iter().copied().collect();
    let by_category = filter_by_categories(items, &categories);
    filter_by_name_substring(&by_category, &filter.search)
}

/// Keeps items whose category is in `categories`. An empty set keeps everything.
pub fn filter_by_categories(
    items: &[InventoryItem],
    categories: &HashSet<Category>,
) -> Vec<InventoryItem> {
    if categories.is_empty() {
        return items.to_vec();
    }
    items
        .iter()
        .filter(|item| categories.contains(&item.category))
        .cloned()
        .collect()
}

/// Keeps items whose name contains `term`, case-insensitively. An empty term
/// keeps everything.
pub fn filter_by_name_substring(items: &[InventoryItem], term: &str) -> Vec<InventoryItem> {
    if term.is_empty() {
        return items.to_vec();
    }
    let needle = term.to_lowercase();
    items
        .iter()
        .filter(|item| item.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}
