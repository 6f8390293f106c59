//! Load-profile actions dispatched by the home screen.
//!
//! SYSTEM CONTEXT
//! ==============
//! These are the entry points into the profile-loading subsystem. They record
//! the requested data source in [`ProfileLoadState`] and queue the route the
//! loader runs under; fetching and parsing happen behind that route. A picked
//! file's browser handle is parked in the client-local [`FileSlot`] so the
//! loader can read its bytes.
//!
//! [`FileSlot`]: crate::state::profile_load::FileSlot

#[cfg(test)]
#[path = "receive_profile_test.rs"]
mod receive_profile_test;

use leptos::prelude::*;

use crate::state::profile_load::{DataSource, ProfileLoadState};

pub const FROM_FILE_ROUTE: &str = "/from-file";
pub const FROM_URL_ROUTE: &str = "/from-url";

/// A file picked through the native file input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub size_bytes: u64,
    /// Browser handle for reading the contents.
    #[cfg(feature = "hydrate")]
    pub handle: Option<web_sys::File>,
}

impl SelectedFile {
    /// Metadata only, with no readable handle.
    pub fn new(name: impl Into<String>, size_bytes: u64) -> Self {
        Self {
            name: name.into(),
            size_bytes,
            #[cfg(feature = "hydrate")]
            handle: None,
        }
    }
}

#[cfg(feature = "hydrate")]
impl From<&web_sys::File> for SelectedFile {
    fn from(file: &web_sys::File) -> Self {
        // Blob sizes are whole bytes reported as f64.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let size_bytes = file.size() as u64;
        Self {
            name: file.name(),
            size_bytes,
            handle: Some(file.clone()),
        }
    }
}

/// Route for loading `url`, with the URL carried as a query parameter.
pub fn from_url_route(url: &str) -> String {
    let query = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("url", url)
        .finish();
    format!("{FROM_URL_ROUTE}?{query}")
}

/// Hand a local file to the loader: its metadata goes into `state`, the file
/// itself into `slot`.
pub fn retrieve_profile_from_file(state: &mut ProfileLoadState, slot: &mut Option<SelectedFile>, file: SelectedFile) {
    state.request(
        DataSource::FromFile {
            name: file.name.clone(),
            size_bytes: file.size_bytes,
        },
        FROM_FILE_ROUTE.to_owned(),
    );
    *slot = Some(file);
}

/// Hand a profile URL to the loader. Any previously picked file is released.
pub fn trigger_loading_from_url(state: &mut ProfileLoadState, slot: &mut Option<SelectedFile>, url: String) {
    let route = from_url_route(&url);
    state.request(DataSource::FromUrl { url }, route);
    *slot = None;
}

/// Take the route queued by the latest load action.
///
/// The signal belongs to the app root, so a route queued by a page that has
/// since unmounted is still followed exactly once.
pub fn take_pending_route(profile_load: RwSignal<ProfileLoadState>) -> Option<String> {
    if profile_load.with(|state| state.pending_navigation.is_none()) {
        return None;
    }
    profile_load.try_update(ProfileLoadState::take_navigation).flatten()
}
