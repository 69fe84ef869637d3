//! # Living Inventory Core
//!
//! A JSON-file backed inventory store for living goods (plants, pets, aquatic life),
//! designed for FFI (Foreign Function Interface) integration with dashboard front
//! ends. The core keeps the full item list in memory, rewrites the backing file
//! atomically on every mutation, and derives filtered views and per-category
//! aggregates for the presentation layer to render.
//!
//! ## Features
//!
//! - **Whole-file JSON persistence**: one human-readable file, rewritten through a
//!   temp path and rename so a crash mid-write never leaves a truncated store
//! - **FFI-optimized**: C-compatible entry points exchanging JSON envelopes,
//!   designed for dashboard UIs in other languages
//! - **Pure derived views**: category and name filters plus count/value aggregates
//!   that never mutate the store
//! - **Exact money math**: prices carried as decimals, summed without float drift
//! - **Safe error handling**: no `unwrap()` calls in production code
//!
//! ## Quick Start
//!
//! ```no_run
//! use living_inventory_core::{create_inventory, add_item};
//! use std::ffi::CString;
//!
//! // Open (or create) the inventory store
//! let store_name = CString::new("my_inventory").unwrap();
//! let state = create_inventory(store_name.as_ptr());
//!
//! // Add an item
//! let payload = CString::new(
//!     r#"{"name":"Boston Fern","category":"Plants","quantity":2,"price":9.99,"care_instructions":"Indirect light"}"#,
//! ).unwrap();
//! let result = add_item(state, payload.as_ptr());
//! ```
//!
//! ## FFI Functions
//!
//! This library exposes C-compatible functions for cross-language integration:
//!
//! - [`create_inventory`] - Open the store, loading the backing file if present
//! - [`add_item`] - Insert a new item
//! - [`get_all_items`] - Retrieve all items in insertion order
//! - [`update_item_price`] - Change the price of an existing item
//! - [`delete_item_by_id`] - Remove an item by id
//! - [`filter_items`] - Derive a filtered view by category set and name substring
//! - [`get_analytics`] - Compute per-category counts, value sums and totals
//! - [`close_inventory`] - Release the store instance

pub mod analytics;
pub mod inventory_model;
pub mod inventory_state;
pub mod query;
mod app_response;

use std::ffi::{CStr, CString};
use std::os::raw::c_char;

use log::{info, warn};

use crate::app_response::AppResponse;
use crate::inventory_model::{NewItem, PriceUpdate};
use crate::inventory_state::AppInventoryState;
use crate::query::ItemFilter;

/// Opens an inventory store with the specified name.
///
/// The backing file is `<name>.json` in the current working directory. If it
/// exists it is parsed as the item list; if it is missing the store starts
/// empty and the file is created on the first mutation.
///
/// # Parameters
///
/// * `name` - A null-terminated C string containing the store name
///
/// # Returns
///
/// Returns a pointer to the [`AppInventoryState`] instance on success, or a null
/// pointer on failure. The caller is responsible for releasing the instance via
/// [`close_inventory`].
///
/// # Safety
///
/// This function is unsafe because it:
/// - Dereferences a raw pointer without validation
/// - Returns a raw pointer that must be properly managed
/// - Requires the input string to be valid UTF-8
///
/// # Examples
///
/// ```no_run
/// use std::ffi::CString;
/// use living_inventory_core::create_inventory;
///
/// let name = CString::new("shop_inventory").unwrap();
/// let state = create_inventory(name.as_ptr());
///
/// if !state.is_null() {
///     // Store opened successfully
/// }
/// ```
///
/// # Errors
///
/// Returns null pointer if:
/// - Input name pointer is null
/// - Input string contains invalid UTF-8
/// - The backing file exists but is not a valid JSON array of items
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn create_inventory(name: *const c_char) -> *mut AppInventoryState {
    if name.is_null() {
        warn!("Null name pointer passed to create_inventory");
        return std::ptr::null_mut();
    }

    let name_str = match unsafe { CStr::from_ptr(name).to_str() } {
        Ok(s) => s,
        Err(e) => {
            warn!("Invalid UTF-8 in name parameter: {e}");
            return std::ptr::null_mut();
        }
    };

    let store_path = format!("{name_str}.json");
    info!("Opening inventory store at: {}", store_path);

    match AppInventoryState::init(store_path) {
        Ok(state) => {
            info!("✅ Inventory store opened successfully");
            Box::into_raw(Box::new(state))
        }
        Err(e) => {
            warn!("❌ Failed to open inventory store: {e}");
            std::ptr::null_mut()
        }
    }
}

/// Inserts a new item into the inventory.
///
/// The JSON payload carries the caller-supplied fields; the store assigns the id
/// and the creation timestamp, appends the item and rewrites the backing file
/// before returning.
///
/// # Parameters
///
/// * `state` - Pointer to the inventory state instance
/// * `json_ptr` - Null-terminated C string containing the new-item JSON
///
/// # Returns
///
/// Returns a JSON-formatted C string containing the created item on success.
/// The returned string must be freed by the caller.
///
/// # Safety
///
/// This function is unsafe because it dereferences raw pointers.
/// Both parameters must be valid pointers to their respective types.
///
/// # JSON Format
///
/// ```json
/// {
///   "name": "Boston Fern",
///   "category": "Plants",
///   "quantity": 2,
///   "price": 9.99,
///   "care_instructions": "Indirect light, keep soil moist"
/// }
/// ```
///
/// `category` must be one of `"Plants"`, `"Pets"`, `"Aquatic Life"`, `"Other"`.
/// `care_instructions` may be omitted.
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn add_item(state: *mut AppInventoryState, json_ptr: *const c_char) -> *const c_char {
    let state = match unsafe { state.as_mut() } {
        Some(s) => s,
        None => {
            let error = AppResponse::BadRequest("Null state pointer".to_string());
            return response_to_c_string(&error);
        }
    };

    let json_str = match c_ptr_to_string(json_ptr, "JSON") {
        Ok(json) => json,
        Err(error_ptr) => return error_ptr,
    };

    let new_item: NewItem = match serde_json::from_str(&json_str) {
        Ok(item) => item,
        Err(e) => {
            let error = AppResponse::SerializationError(format!("Invalid JSON: {e}"));
            return response_to_c_string(&error);
        }
    };

    match state.add(new_item) {
        Ok(item) => match serde_json::to_string(&item) {
            Ok(json) => response_to_c_string(&AppResponse::Ok(json)),
            Err(e) => response_to_c_string(&AppResponse::from(e)),
        },
        Err(e) => response_to_c_string(&AppResponse::from(e)),
    }
}

/// Retrieves all items in insertion order.
///
/// # Parameters
///
/// * `state` - Pointer to the inventory state instance
///
/// # Returns
///
/// Returns a JSON-formatted C string containing the item array. An empty store
/// yields an empty array, not an error.
///
/// # Safety
///
/// The state parameter must be a valid pointer to an [`AppInventoryState`] instance.
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn get_all_items(state: *mut AppInventoryState) -> *const c_char {
    let state = match unsafe { state.as_ref() } {
        Some(s) => s,
        None => {
            let error = AppResponse::BadRequest("Null state pointer passed to get_all_items".to_string());
            return response_to_c_string(&error);
        }
    };

    match serde_json::to_string(state.get_all()) {
        Ok(json) => response_to_c_string(&AppResponse::Ok(json)),
        Err(e) => response_to_c_string(&AppResponse::from(e)),
    }
}

/// Updates the price of an existing item.
///
/// The payload is `{"id": 3, "price": 12.50}`. Every item carrying the id gets
/// the new price; other fields are untouched. The store is persisted before the
/// call returns.
///
/// # Parameters
///
/// * `state` - Pointer to the inventory state instance
/// * `json_ptr` - Null-terminated C string containing the price-update JSON
///
/// # Returns
///
/// Returns a JSON-formatted C string: a success message, or a `NotFound`
/// response when no item carries the id.
///
/// # Safety
///
/// Both parameters must be valid pointers.
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn update_item_price(state: *mut AppInventoryState, json_ptr: *const c_char) -> *const c_char {
    let state = match unsafe { state.as_mut() } {
        Some(s) => s,
        None => {
            let error = AppResponse::BadRequest("Null state pointer passed to update_item_price".to_string());
            return response_to_c_string(&error);
        }
    };

    let json_str = match c_ptr_to_string(json_ptr, "JSON") {
        Ok(json) => json,
        Err(error_ptr) => return error_ptr,
    };

    let update: PriceUpdate = match serde_json::from_str(&json_str) {
        Ok(u) => u,
        Err(e) => {
            let error = AppResponse::SerializationError(format!("Invalid JSON: {e}"));
            return response_to_c_string(&error);
        }
    };

    match state.update_price(update.id, update.price) {
        Ok(true) => {
            let success = AppResponse::success(format!("Price updated for item {}", update.id));
            response_to_c_string(&success)
        }
        Ok(false) => {
            let not_found = AppResponse::NotFound(format!("No item found with id: {}", update.id));
            response_to_c_string(&not_found)
        }
        Err(e) => response_to_c_string(&AppResponse::from(e)),
    }
}

/// Deletes an item from the inventory by its id.
///
/// Every item carrying the id is removed; the remaining items keep their
/// original relative order. The store is persisted before the call returns.
///
/// # Parameters
///
/// * `state` - Pointer to the inventory state instance
/// * `id` - Identifier of the item to delete
///
/// # Returns
///
/// Returns a JSON-formatted C string: a success message, or a `NotFound`
/// response when no item carries the id.
///
/// # Safety
///
/// The state parameter must be a valid pointer.
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn delete_item_by_id(state: *mut AppInventoryState, id: u32) -> *const c_char {
    let state = match unsafe { state.as_mut() } {
        Some(s) => s,
        None => {
            let error = AppResponse::BadRequest("Null state pointer passed to delete_item_by_id".to_string());
            return response_to_c_string(&error);
        }
    };

    match state.delete_by_id(id) {
        Ok(true) => {
            let success = AppResponse::success(format!("Item {} deleted successfully", id));
            response_to_c_string(&success)
        }
        Ok(false) => {
            let not_found = AppResponse::NotFound(format!("No item found with id: {}", id));
            response_to_c_string(&not_found)
        }
        Err(e) => response_to_c_string(&AppResponse::from(e)),
    }
}

/// Derives a filtered view of the inventory.
///
/// The payload selects by category membership and case-insensitive name
/// substring; both parts are optional and an empty filter returns every item.
/// The store itself is never mutated.
///
/// # Parameters
///
/// * `state` - Pointer to the inventory state instance
/// * `json_ptr` - Null-terminated C string containing the filter JSON
///
/// # Returns
///
/// Returns a JSON-formatted C string containing the matching item array.
///
/// # Safety
///
/// Both parameters must be valid pointers.
///
/// # JSON Format
///
/// ```json
/// {
///   "categories": ["Plants", "Aquatic Life"],
///   "search": "fern"
/// }
/// ```
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn filter_items(state: *mut AppInventoryState, json_ptr: *const c_char) -> *const c_char {
    let state = match unsafe { state.as_ref() } {
        Some(s) => s,
        None => {
            let error = AppResponse::BadRequest("Null state pointer passed to filter_items".to_string());
            return response_to_c_string(&error);
        }
    };

    let json_str = match c_ptr_to_string(json_ptr, "JSON") {
        Ok(json) => json,
        Err(error_ptr) => return error_ptr,
    };

    let filter: ItemFilter = match serde_json::from_str(&json_str) {
        Ok(f) => f,
        Err(e) => {
            let error = AppResponse::SerializationError(format!("Invalid JSON: {e}"));
            return response_to_c_string(&error);
        }
    };

    let matches = query::apply(&filter, state.get_all());
    match serde_json::to_string(&matches) {
        Ok(json) => response_to_c_string(&AppResponse::Ok(json)),
        Err(e) => response_to_c_string(&AppResponse::from(e)),
    }
}

/// Computes the analytics summary for the current inventory.
///
/// The summary carries per-category item counts and value sums plus the total
/// quantity, total value and record count rendered by the dashboard's metrics
/// row.
///
/// # Parameters
///
/// * `state` - Pointer to the inventory state instance
///
/// # Returns
///
/// Returns a JSON-formatted C string containing the summary document.
///
/// # Safety
///
/// The state parameter must be a valid pointer.
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn get_analytics(state: *mut AppInventoryState) -> *const c_char {
    let state = match unsafe { state.as_ref() } {
        Some(s) => s,
        None => {
            let error = AppResponse::BadRequest("Null state pointer passed to get_analytics".to_string());
            return response_to_c_string(&error);
        }
    };

    let summary = analytics::summarize(state.get_all());
    match serde_json::to_string(&summary) {
        Ok(json) => response_to_c_string(&AppResponse::Ok(json)),
        Err(e) => response_to_c_string(&AppResponse::from(e)),
    }
}

/// Releases the inventory store instance.
///
/// Reclaims the state allocated by [`create_inventory`]. The in-memory list is
/// already persisted after every mutation, so there is nothing to flush here.
///
/// # Parameters
///
/// * `state` - Pointer to the inventory state instance
///
/// # Returns
///
/// Returns a JSON-formatted C string indicating success or failure.
///
/// # Safety
///
/// The state parameter must be a valid pointer obtained from
/// [`create_inventory`], and must not be used after this call.
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn close_inventory(state: *mut AppInventoryState) -> *const c_char {
    if state.is_null() {
        let error = AppResponse::BadRequest("Null state pointer passed to close_inventory".to_string());
        return response_to_c_string(&error);
    }

    let state = unsafe { Box::from_raw(state) };
    info!("Closing inventory store at {}", state.path().display());
    drop(state);

    let success = AppResponse::success("Inventory store closed successfully");
    response_to_c_string(&success)
}

/// Converts an [`AppResponse`] to a C-compatible string.
///
/// Serializes the response to JSON and hands ownership of the resulting C
/// string to the FFI caller, who is responsible for freeing it.
///
/// Returns a null pointer if serialization or C string creation fails.
fn response_to_c_string(response: &AppResponse) -> *const c_char {
    let json = match serde_json::to_string(response) {
        Ok(j) => j,
        Err(e) => {
            warn!("Error serializing response: {e}");
            return std::ptr::null();
        }
    };

    match CString::new(json) {
        Ok(c_str) => c_str.into_raw(),
        Err(e) => {
            warn!("Error creating CString: {e}");
            std::ptr::null()
        }
    }
}

/// Converts a C string pointer to a Rust String with comprehensive error handling.
///
/// Handles null pointers and invalid UTF-8, returning a ready-to-ship error
/// response pointer when the conversion fails.
fn c_ptr_to_string(ptr: *const c_char, field_name: &str) -> Result<String, *const c_char> {
    if ptr.is_null() {
        let error = AppResponse::BadRequest(format!("Null {field_name} pointer"));
        return Err(response_to_c_string(&error));
    }

    match unsafe { CStr::from_ptr(ptr).to_str() } {
        Ok(s) => Ok(s.to_string()),
        Err(e) => {
            let error = AppResponse::BadRequest(format!("Invalid UTF-8 in {field_name}: {e}"));
            Err(response_to_c_string(&error))
        }
    }
}
