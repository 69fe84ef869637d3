use std::fmt::{Display, Formatter};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::{Local, Timelike};
use log::{info, warn};
use rust_decimal::Decimal;

use crate::inventory_model::{InventoryItem, NewItem};

/// Hard failures of the persistence adapter.
///
/// Not-found on update/delete is soft and reported as `Ok(false)`, never through
/// this type.
#[derive(Debug)]
pub enum StoreError {
    /// The backing file exists but is not a valid JSON array of items.
    CorruptState(String),
    /// Serializing or writing the backing file failed. The in-memory mutation
    /// that triggered the save is kept; only durability is lost.
    WriteFailed(String),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::CorruptState(msg) => write!(f, "Corrupt inventory file: {}", msg),
            StoreError::WriteFailed(msg) => write!(f, "Inventory write failed: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}

/// In-memory inventory store backed by a single JSON file.
///
/// Items live in insertion order. Every mutating call rewrites the whole file
/// before returning, so memory and disk agree whenever a call succeeds.
pub struct AppInventoryState {
    path: PathBuf,
    items: Vec<InventoryItem>,
}

impl AppInventoryState {
    /// Opens the store at `path`, loading the backing file if it exists.
    ///
    /// A missing file yields an empty store; a file that exists but does not
    /// parse as an array of items fails with [`StoreError::CorruptState`].
    pub fn init(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let items = load_items(&path)?;
        info!("Inventory loaded from {}: {} item(s)", path.display(), items.len());
        Ok(Self { path, items })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Creates an item from `new`, appends it and persists the store.
    ///
    /// The id is the current item count plus one. After deletions a new item can
    /// repeat an earlier id, which is why [`update_price`](Self::update_price)
    /// and [`delete_by_id`](Self::delete_by_id) act on every match.
    pub fn add(&mut self, new: NewItem) -> Result<InventoryItem, StoreError> {
        let now = Local::now().naive_local();
        let item = InventoryItem {
            id: self.items.len() as u32 + 1,
            name: new.name,
            category: new.category,
            quantity: new.quantity,
            price: new.price,
            care_instructions: new.care_instructions,
            // Truncated to whole seconds, the resolution of the wire format.
            date_added: now.with_nanosecond(0).unwrap_or(now),
        };
        self.items.push(item.clone());
        self.save()?;
        info!("Added item {} ({})", item.id, item.category);
        Ok(item)
    }

    /// Full item sequence in insertion order.
    pub fn get_all(&self) -> &[InventoryItem] {
        &self.items
    }

    /// Sets `price` on every item matching `id` and persists the store.
    ///
    /// Returns `Ok(false)` without touching the file when nothing matches.
    pub fn update_price(&mut self, id: u32, new_price: Decimal) -> Result<bool, StoreError> {
        let mut matched = false;
        for item in self.items.iter_mut().filter(|item| item.id == id) {
            item.price = new_price;
            matched = true;
        }
        if !matched {
            return Ok(false);
        }
        self.save()?;
        info!("Updated price of item {}", id);
        Ok(true)
    }

    /// Removes every item matching `id`, keeping the remaining items in their
    /// original relative order, and persists the store.
    ///
    /// Returns `Ok(false)` without touching the file when nothing matches.
    pub fn delete_by_id(&mut self, id: u32) -> Result<bool, StoreError> {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        if self.items.len() == before {
            return Ok(false);
        }
        self.save()?;
        info!("Deleted item {}", id);
        Ok(true)
    }

    // Whole-file rewrite through a temp path plus rename, so a crash mid-write
    // never leaves a truncated store behind.
    fn save(&self) -> Result<(), StoreError> {
        let json = serde_json::to_string(&self.items)
            .map_err(|e| StoreError::WriteFailed(format!("serializing inventory: {e}")))?;

        let temp_path = self.path.with_extension("tmp");
        fs::write(&temp_path, json).map_err(|e| {
            StoreError::WriteFailed(format!("writing {}: {e}", temp_path.display()))
        })?;
        fs::rename(&temp_path, &self.path).map_err(|e| {
            StoreError::WriteFailed(format!("replacing {}: {e}", self.path.display()))
        })?;
        Ok(())
    }
}

fn load_items(path: &Path) -> Result<Vec<InventoryItem>, StoreError> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            info!("No inventory file at {}, starting empty", path.display());
            return Ok(Vec::new());
        }
        Err(e) => {
            warn!("Could not read inventory file {}: {e}", path.display());
            return Err(StoreError::CorruptState(format!(
                "reading {}: {e}",
                path.display()
            )));
        }
    };

    serde_json::from_str(&raw)
        .map_err(|e| StoreError::CorruptState(format!("parsing {}: {e}", path.display())))
}
