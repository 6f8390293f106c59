//! Router link to another data-source view of the app.

#[cfg(test)]
#[path = "inner_navigation_link_test.rs"]
mod inner_navigation_link_test;

use leptos::prelude::*;
use leptos_router::components::A;

/// App route serving `data_source`.
pub fn data_source_path(data_source: &str) -> String {
    format!("/{data_source}")
}

/// In-app navigation to the view for `data_source` (e.g. `compare`).
#[component]
pub fn InnerNavigationLink(data_source: &'static str, children: Children) -> impl IntoView {
    view! { <A href=data_source_path(data_source)>{children()}</A> }
}
