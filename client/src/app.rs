//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    NavigateOptions, StaticSegment,
    components::{Route, Router, Routes},
    hooks::use_navigate,
};

use crate::net::HostServices;
use crate::net::receive_profile::{FROM_FILE_ROUTE, FROM_URL_ROUTE, take_pending_route};
use crate::pages::{
    compare::ComparePage, home::HomePage, loading::LoadingPage, uploaded_recordings::UploadedRecordingsPage,
};
use crate::state::profile_load::{FileSlot, ProfileLoadState};
use crate::state::published::PublishedProfilesState;
use crate::util::l10n::message;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared state slices and host services, and sets up
/// client-side routing. Routes queued by load actions are followed here so
/// they outlive the page that queued them.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let profile_load = RwSignal::new(ProfileLoadState::default());
    let published = RwSignal::new(PublishedProfilesState::default());
    let file_slot: FileSlot = RwSignal::new_local(None);

    provide_context(profile_load);
    provide_context(published);
    provide_context(file_slot);
    provide_context(HostServices::default());

    view! {
        <Stylesheet id="leptos" href="/pkg/profiler-home.css"/>
        <Title text=message("AppHeader--app-header-title")/>

        <Router>
            <FollowLoadRoutes profile_load=profile_load/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=|| view! { <HomePage/> }/>
                <Route path=StaticSegment(route_segment(FROM_FILE_ROUTE)) view=LoadingPage/>
                <Route path=StaticSegment(route_segment(FROM_URL_ROUTE)) view=LoadingPage/>
                <Route path=StaticSegment("compare") view=ComparePage/>
                <Route path=StaticSegment("uploaded-recordings") view=UploadedRecordingsPage/>
            </Routes>
        </Router>
    }
}

/// Navigate to each route a load action queues, once.
#[component]
fn FollowLoadRoutes(profile_load: RwSignal<ProfileLoadState>) -> impl IntoView {
    let navigate = use_navigate();
    Effect::new(move || {
        if let Some(route) = take_pending_route(profile_load) {
            navigate(&route, NavigateOptions::default());
        }
    });
}

fn route_segment(route: &'static str) -> &'static str {
    route.trim_start_matches('/')
}
