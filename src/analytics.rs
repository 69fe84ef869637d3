//! Aggregations over the current item set.
//!
//! All functions are pure linear scans. Per-category maps only carry categories
//! actually present in the input, which is what the dashboard charts expect.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::inventory_model::{Category, InventoryItem};

/// Number of records per category present in `items`.
pub fn count_by_category(items: &[InventoryItem]) -> BTreeMap<Category, u64> {
    let mut counts = BTreeMap::new();
    for item in items {
        *counts.entry(item.category).or_insert(0) += 1;
    }
    counts
}

/// Sum of `price` per category present in `items`.
pub fn value_by_category(items: &[InventoryItem]) -> BTreeMap<Category, Decimal> {
    let mut values = BTreeMap::new();
    for item in items {
        *values.entry(item.category).or_insert(Decimal::ZERO) += item.price;
    }
    values
}

/// Sum of `quantity` across all items. 0 for empty input.
pub fn total_quantity(items: &[InventoryItem]) -> u64 {
    items.iter().map(|item| u64::from(item.quantity)).sum()
}

/// Sum of `price` across all items. 0.00 for empty input.
pub fn total_value(items: &[InventoryItem]) -> Decimal {
    items.iter().map(|item| item.price).sum()
}

/// Number of records in the input. Named after the dashboard's "Unique
/// Products" metric, which counts records rather than distinct names.
pub fn distinct_count(items: &[InventoryItem]) -> usize {
    items.len()
}

/// Everything the analytics view renders, bundled for a single FFI round trip.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InventorySummary {
    pub items_by_category: BTreeMap<Category, u64>,
    pub value_by_category: BTreeMap<Category, Decimal>,
    pub total_quantity: u64,
    pub total_value: Decimal,
    pub distinct_items: usize,
}

/// Computes all summary metrics in one pass over the item set.
pub fn summarize(items: &[InventoryItem]) -> InventorySummary {
    InventorySummary {
        items_by_category: count_by_category(items),
        value_by_category: value_by_category(items),
        total_quantity: total_quantity(items),
        total_value: total_value(items),
        distinct_items: distinct_count(items),
    }
}
