//! Recently published profiles, listed for quick reloading.
//!
//! The list is read from browser storage after hydration; the server always
//! renders it empty.

#[cfg(test)]
#[path = "published_test.rs"]
mod published_test;

/// A profile previously uploaded from this browser.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishedProfile {
    pub profile_token: String,
    pub name: String,
    pub url: String,
    pub published_at_ms: u64,
}

#[derive(Clone, Debug, Default)]
pub struct PublishedProfilesState {
    /// Newest first.
    pub items: Vec<PublishedProfile>,
    pub loaded: bool,
}

impl PublishedProfilesState {
    pub fn from_items(mut items: Vec<PublishedProfile>) -> Self {
        items.sort_by(|a, b| b.published_at_ms.cmp(&a.published_at_ms));
        Self { items, loaded: true }
    }

    /// The first `limit` entries.
    pub fn visible(&self, limit: usize) -> &[PublishedProfile] {
        &self.items[..self.items.len().min(limit)]
    }

    /// How many entries `visible(limit)` leaves out.
    pub fn remaining(&self, limit: usize) -> usize {
        self.items.len().saturating_sub(limit)
    }

    pub fn remove(&mut self, profile_token: &str) {
        self.items.retain(|p| p.profile_token != profile_token);
    }
}

/// Coarse "how long ago" label for a publication timestamp.
pub fn age_label(now_ms: u64, published_at_ms: u64) -> String {
    const MINUTE: u64 = 60_000;
    const HOUR: u64 = 60 * MINUTE;
    const DAY: u64 = 24 * HOUR;

    let elapsed = now_ms.saturating_sub(published_at_ms);
    if elapsed < MINUTE {
        return "just now".to_owned();
    }
    let (count, unit) = if elapsed < HOUR {
        (elapsed / MINUTE, "minute")
    } else if elapsed < DAY {
        (elapsed / HOUR, "hour")
    } else {
        (elapsed / DAY, "day")
    };
    if count == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{count} {unit}s ago")
    }
}
