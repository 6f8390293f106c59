//! Load-profile buttons: open a local file, or reveal the load-from-URL form.
//!
//! SYSTEM CONTEXT
//! ==============
//! The buttons only collect input. The chosen file or URL is handed to the
//! caller's callbacks, which dispatch into the profile-loading subsystem.

#[cfg(test)]
#[path = "action_buttons_test.rs"]
mod action_buttons_test;

use leptos::prelude::*;

use crate::net::receive_profile::SelectedFile;
use crate::state::home::ActionButtonsState;
use crate::util::l10n::message;

/// Forward the first of `files` to `forward`. Returns whether anything was
/// forwarded.
pub fn forward_first_file(files: impl IntoIterator<Item = SelectedFile>, forward: impl FnOnce(SelectedFile)) -> bool {
    match files.into_iter().next() {
        Some(file) => {
            forward(file);
            true
        }
        None => false,
    }
}

/// Forward a submitted URL value unless it is empty. The value is passed on
/// exactly as typed.
pub fn forward_url_submission(value: &str, forward: impl FnOnce(String)) -> bool {
    if value.is_empty() {
        return false;
    }
    forward(value.to_owned());
    true
}

#[cfg(feature = "hydrate")]
fn selected_files(input: &web_sys::HtmlInputElement) -> Vec<SelectedFile> {
    let Some(list) = input.files() else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .map(|file| SelectedFile::from(&file))
        .collect()
}

/// File and URL load buttons, with the URL form shown on demand.
#[component]
pub fn ActionButtons(on_file: Callback<SelectedFile>, on_url: Callback<String>) -> impl IntoView {
    let state = RwSignal::new(ActionButtonsState::default());
    let file_input = NodeRef::<leptos::html::Input>::new();

    let on_load_from_file = move |_| {
        // Open the file picker.
        #[cfg(feature = "hydrate")]
        {
            if let Some(input) = file_input.get() {
                input.click();
            }
        }
    };

    let on_file_change = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let Some(input) = file_input.get() else {
                return;
            };
            forward_first_file(selected_files(&input), |file| on_file.run(file));
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _on_file = on_file;
        }
    };

    let on_load_from_url = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        state.update(ActionButtonsState::toggle_load_from_url);
    };

    view! {
        <div class="homeSectionLoadProfile">
            <div class="homeSectionActionButtons">
                <input
                    class="homeSectionUploadFromFileInput"
                    type="file"
                    node_ref=file_input
                    on:change=on_file_change
                />
                <button type="button" class="homeSectionButton" on:click=on_load_from_file>
                    {message("Home--upload-from-file-input-button")}
                </button>
                <button
                    type="button"
                    class="homeSectionButton"
                    on:click=on_load_from_url
                    aria-expanded=move || if state.get().load_from_url_open { "true" } else { "false" }
                >
                    {message("Home--upload-from-url-button")}
                </button>
            </div>
            <Show when=move || state.get().load_from_url_open>
                <LoadFromUrl on_url=on_url/>
            </Show>
        </div>
    }
}

/// Single-field form submitting a profile URL.
#[component]
pub fn LoadFromUrl(on_url: Callback<String>) -> impl IntoView {
    let value = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        forward_url_submission(&value.get_untracked(), |url| on_url.run(url));
    };

    view! {
        <form class="homeSectionLoadFromUrl" on:submit=on_submit>
            <input
                class="homeSectionLoadFromUrlInput photon-input"
                type="url"
                placeholder="https://"
                autofocus=true
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
            <input
                type="submit"
                class="homeSectionButton homeSectionLoadFromUrlSubmitButton"
                value=message("Home--load-from-url-submit-button")
            />
        </form>
    }
}
