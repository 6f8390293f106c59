//! Landing route for dispatched profile loads (`/from-file`, `/from-url`).
//!
//! SYSTEM CONTEXT
//! ==============
//! Load actions record their data source in `ProfileLoadState` and navigate
//! here. A `/from-url` link opened directly carries the URL in its `url`
//! query parameter instead. With no source at all the page falls back to the
//! home screen with an explanatory message.

#[cfg(test)]
#[path = "loading_test.rs"]
mod loading_test;

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::components::app_header::AppHeader;
use crate::pages::home::HomePage;
use crate::state::profile_load::{DataSource, ProfileLoadState};
use crate::util::l10n::{format_message, message};

/// Source to show: the dispatched one, else a non-empty `url` query value.
pub fn resolve_data_source(dispatched: DataSource, url_param: Option<String>) -> DataSource {
    match (dispatched, url_param) {
        (DataSource::None, Some(url)) if !url.is_empty() => DataSource::FromUrl { url },
        (dispatched, _) => dispatched,
    }
}

/// Progress text for `source`, or `None` when nothing was requested.
pub fn loading_message(source: &DataSource) -> Option<String> {
    match source {
        DataSource::None => None,
        DataSource::FromFile { name, size_bytes } => {
            let size = size_bytes.to_string();
            Some(format_message(
                "ProfileLoader--loading-from-file",
                &[("name", name.as_str()), ("size", size.as_str())],
            ))
        }
        DataSource::FromUrl { url } => Some(format_message("ProfileLoader--loading-from-url", &[("url", url.as_str())])),
    }
}

#[component]
pub fn LoadingPage() -> impl IntoView {
    let profile_load = expect_context::<RwSignal<ProfileLoadState>>();
    let query = use_query_map();

    let source = Memo::new(move |_| {
        resolve_data_source(
            profile_load.with(|state| state.data_source.clone()),
            query.with(|params| params.get("url")),
        )
    });

    move || match loading_message(&source.get()) {
        Some(text) => view! {
            <div class="profileLoader">
                <AppHeader/>
                <p class="profileLoaderMessage" role="status">{text}</p>
                <a class="homeSectionButton" href="/">{message("ProfileLoader--back-home")}</a>
            </div>
        }
        .into_any(),
        None => view! { <HomePage special_message=message("ProfileLoader--no-source").to_owned()/> }.into_any(),
    }
}
