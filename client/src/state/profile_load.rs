//! Data-source slice of the global app state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Load actions dispatched from the home screen land here. The loading route
//! reads the requested source back, and the app root consumes
//! `pending_navigation` to move there.

#[cfg(test)]
#[path = "profile_load_test.rs"]
mod profile_load_test;

use leptos::prelude::{LocalStorage, RwSignal};

use crate::net::receive_profile::SelectedFile;

/// The file behind the latest `FromFile` request. Browser file handles are
/// not `Send`, so the slot uses local signal storage.
pub type FileSlot = RwSignal<Option<SelectedFile>, LocalStorage>;

/// Where the next profile is coming from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum DataSource {
    #[default]
    None,
    FromFile {
        name: String,
        size_bytes: u64,
    },
    FromUrl {
        url: String,
    },
}

#[derive(Clone, Debug, Default)]
pub struct ProfileLoadState {
    pub data_source: DataSource,
    /// Bumped on every dispatched load, including repeats of the same source.
    pub request_seq: u64,
    /// Route to visit once the dispatching page observes the request.
    pub pending_navigation: Option<String>,
}

impl ProfileLoadState {
    pub fn request(&mut self, data_source: DataSource, route: String) {
        self.data_source = data_source;
        self.request_seq += 1;
        self.pending_navigation = Some(route);
    }

    /// Take the pending route, leaving none behind.
    pub fn take_navigation(&mut self) -> Option<String> {
        self.pending_navigation.take()
    }
}
