//! Data model definitions for the inventory store.
//!
//! This module defines the structures persisted to the backing JSON file and the
//! request payloads accepted over FFI. The primary model is [`InventoryItem`],
//! one record per living good tracked by the store.

use std::fmt::{Display, Formatter};

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Fixed classification for inventory items.
///
/// Serializes to the display label, so the persisted file and the FFI payloads
/// carry `"Plants"`, `"Pets"`, `"Aquatic Life"` or `"Other"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Plants,
    Pets,
    #[serde(rename = "Aquatic Life")]
    AquaticLife,
    Other,
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Plants => write!(f, "Plants"),
            Category::Pets => write!(f, "Pets"),
            Category::AquaticLife => write!(f, "Aquatic Life"),
            Category::Other => write!(f, "Other"),
        }
    }
}

/// One inventory record.
///
/// Items are kept in insertion order by [`AppInventoryState`] and written to the
/// backing file as a JSON array of these objects. `id` is assigned by the store
/// as the item count plus one at insert time; after a deletion a later insert can
/// repeat an earlier id, so id-based operations match every occurrence.
///
/// Only `price` may change after creation, through the price-update operation.
/// `date_added` is captured once at creation and serialized as
/// `YYYY-MM-DD HH:MM:SS`.
///
/// # Examples
///
/// ```rust
/// use living_inventory_core::inventory_model::{Category, InventoryItem};
/// use rust_decimal::Decimal;
///
/// let item = InventoryItem {
///     id: 1,
///     name: "Boston Fern".to_string(),
///     category: Category::Plants,
///     quantity: 2,
///     price: Decimal::new(999, 2),
///     care_instructions: "Indirect light, keep soil moist".to_string(),
///     date_added: chrono::NaiveDateTime::parse_from_str(
///         "2024-01-15 10:30:00",
///         "%Y-%m-%d %H:%M:%S",
///     )?,
/// };
///
/// let json = serde_json::to_string(&item)?;
/// assert!(json.contains("\"category\":\"Plants\""));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
///
/// [`AppInventoryState`]: crate::inventory_state::AppInventoryState
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    /// Store-assigned identifier (item count + 1 at insert time).
    pub id: u32,

    /// User-supplied label. May be empty.
    pub name: String,

    /// Classification bucket used by filtering and analytics.
    pub category: Category,

    /// Units on hand. The presentation layer enforces a minimum of 1.
    pub quantity: u32,

    /// Unit price. Non-negative, displayed with two decimals; serialized as a
    /// plain JSON number.
    pub price: Decimal,

    /// Free-text care notes. May be empty.
    pub care_instructions: String,

    /// Creation timestamp, immutable after insert.
    #[serde(with = "wire_timestamp")]
    pub date_added: NaiveDateTime,
}

/// Payload for the add operation: everything the caller supplies for a new item.
///
/// The store fills in `id` and `date_added`. Inputs are trusted to be
/// pre-validated by the presentation layer (quantity >= 1, price >= 0).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewItem {
    pub name: String,
    pub category: Category,
    pub quantity: u32,
    pub price: Decimal,
    #[serde(default)]
    pub care_instructions: String,
}

/// Payload for the price-update operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceUpdate {
    pub id: u32,
    pub price: Decimal,
}

/// Serde adapter for the `YYYY-MM-DD HH:MM:SS` timestamp format used by the
/// backing file.
pub mod wire_timestamp {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, FORMAT).map_err(serde::de::Error::custom)
    }
}
