//! Per-phone submission counter.
//!
//! DESIGN
//! ======
//! Counts live in one JSON object (`{"<phone>": <count>}`) under a single
//! storage key, keyed by the phone digits as typed (no dial code). Entries
//! never expire. Updates are read-modify-write with no cross-tab guard.

#[cfg(test)]
#[path = "phone_counts_test.rs"]
mod phone_counts_test;

use std::collections::BTreeMap;

use super::storage::{KeyValueStore, load_json, save_json};

/// Storage key holding the counter map.
pub const STORAGE_KEY: &str = "phoneCounts";

/// Attempts allowed per phone number.
pub const MAX_SUBMISSIONS_PER_PHONE: u32 = 5;

/// Read the whole map; absent or malformed data reads as empty.
pub fn load(store: &impl KeyValueStore) -> BTreeMap<String, u32> {
    load_json(store, STORAGE_KEY).unwrap_or_default()
}

/// Attempts already spent by `phone`.
pub fn count(store: &impl KeyValueStore, phone: &str) -> u32 {
    load(store).get(phone).copied().unwrap_or(0)
}

/// True once `phone` has no attempts left.
pub fn is_exhausted(store: &impl KeyValueStore, phone: &str) -> bool {
    count(store, phone) >= MAX_SUBMISSIONS_PER_PHONE
}

/// Spend one attempt for `phone` and persist the map. Returns the new count.
pub fn record(store: &impl KeyValueStore, phone: &str) -> u32 {
    let mut counts = load(store);
    let entry = counts.entry(phone.to_owned()).or_insert(0);
    *entry = entry.saturating_add(1);
    let next = *entry;
    save_json(store, STORAGE_KEY, &counts);
    next
}
