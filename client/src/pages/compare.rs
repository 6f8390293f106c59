//! Compare route reached from the home page's "compare recordings" link.

use leptos::prelude::*;

use crate::components::app_header::AppHeader;
use crate::util::l10n::message;

#[component]
pub fn ComparePage() -> impl IntoView {
    view! {
        <main class="compareHome">
            <AppHeader/>
            <h2 class="compareHomeInstructionTitle">{message("CompareHome--instruction-title")}</h2>
            <p class="compareHomeInstructionContent">{message("CompareHome--instruction-content")}</p>
            <a class="homeSectionButton" href="/">{message("ProfileLoader--back-home")}</a>
        </main>
    }
}
