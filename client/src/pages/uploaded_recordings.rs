//! Every published profile, with delete buttons.

use leptos::prelude::*;

use crate::components::app_header::AppHeader;
use crate::components::published_profiles::ListOfPublishedProfiles;
use crate::util::l10n::message;

#[component]
pub fn UploadedRecordingsPage() -> impl IntoView {
    view! {
        <main class="uploadedRecordings">
            <AppHeader/>
            <h2 class="uploadedRecordingsTitle">{message("UploadedRecordings--title")}</h2>
            <ListOfPublishedProfiles limit=usize::MAX with_action_buttons=true/>
        </main>
    }
}
