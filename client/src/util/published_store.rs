//! Browser-storage backing for the published-profiles list.
//!
//! Reads and writes a JSON array under one `localStorage` key. Requires a
//! browser environment.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort browser-only behavior; SSR and test builds
//! read an empty list and drop writes.

#[cfg(test)]
#[path = "published_store_test.rs"]
mod published_store_test;

use crate::state::published::PublishedProfile;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "profiler_published_profiles";

/// Parse the stored JSON array.
///
/// # Errors
///
/// Returns the `serde_json` error for malformed data.
pub fn parse(json: &str) -> Result<Vec<PublishedProfile>, serde_json::Error> {
    serde_json::from_str(json)
}

/// Read the stored list. Missing or malformed data reads as empty.
pub fn load() -> Vec<PublishedProfile> {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = local_storage() else {
            return Vec::new();
        };
        match storage.get_item(STORAGE_KEY) {
            Ok(Some(json)) => parse(&json).unwrap_or_else(|e| {
                leptos::logging::warn!("ignoring malformed published profiles: {e}");
                Vec::new()
            }),
            Ok(None) => Vec::new(),
            Err(e) => {
                leptos::logging::warn!("published profiles unreadable: {e:?}");
                Vec::new()
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Vec::new()
    }
}

/// Overwrite the stored list.
pub fn save(items: &[PublishedProfile]) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = local_storage() else {
            return;
        };
        match serde_json::to_string(items) {
            Ok(json) => {
                if let Err(e) = storage.set_item(STORAGE_KEY, &json) {
                    leptos::logging::warn!("published profiles not saved: {e:?}");
                }
            }
            Err(e) => leptos::logging::warn!("published profiles not serializable: {e}"),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _items = items;
    }
}

/// Milliseconds since the Unix epoch on the client clock.
pub fn now_ms() -> u64 {
    #[cfg(feature = "hydrate")]
    {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let now = js_sys::Date::now() as u64;
        now
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0
    }
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    match web_sys::window()?.local_storage() {
        Ok(storage) => storage,
        Err(e) => {
            leptos::logging::warn!("localStorage unavailable: {e:?}");
            None
        }
    }
}
