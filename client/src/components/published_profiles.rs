//! List of recently published profiles.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads the shared `PublishedProfilesState` from context. The list is
//! populated from browser storage the first time a list mounts on the client.

use leptos::prelude::*;

use crate::state::published::{PublishedProfile, PublishedProfilesState, age_label};
use crate::util::l10n::{format_message, message};
use crate::util::published_store;

const ALL_RECORDINGS_ROUTE: &str = "/uploaded-recordings";

/// Up to `limit` published profiles, newest first. Delete buttons render only
/// with `with_action_buttons`.
#[component]
pub fn ListOfPublishedProfiles(limit: usize, with_action_buttons: bool) -> impl IntoView {
    let published = expect_context::<RwSignal<PublishedProfilesState>>();

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        if !published.get_untracked().loaded {
            published.set(PublishedProfilesState::from_items(published_store::load()));
        }
    });

    let on_delete = Callback::new(move |profile_token: String| {
        published.update(|state| state.remove(&profile_token));
        published.with_untracked(|state| published_store::save(&state.items));
    });

    let has_more = move || published.get().remaining(limit) > 0;
    let more_label = move || {
        let rest = published.get().remaining(limit).to_string();
        format_message(
            "ListOfPublishedProfiles--uploaded-profile-information-list",
            &[("profilesRestCount", rest.as_str())],
        )
    };

    view! {
        <Show
            when=move || !published.get().items.is_empty()
            fallback=|| {
                view! {
                    <p class="publishedProfilesEmpty">
                        {message("ListOfPublishedProfiles--uploaded-profile-information-list-empty")}
                    </p>
                }
            }
        >
            <ul class="publishedProfilesList">
                {move || {
                    let now_ms = published_store::now_ms();
                    published
                        .get()
                        .visible(limit)
                        .iter()
                        .cloned()
                        .map(|profile| {
                            view! {
                                <PublishedProfileItem
                                    profile=profile
                                    now_ms=now_ms
                                    with_action_buttons=with_action_buttons
                                    on_delete=on_delete
                                />
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </ul>
            <Show when=has_more>
                <p class="publishedProfilesMoreLink">
                    <a href=ALL_RECORDINGS_ROUTE>{more_label}</a>
                </p>
            </Show>
        </Show>
    }
}

#[component]
fn PublishedProfileItem(
    profile: PublishedProfile,
    now_ms: u64,
    with_action_buttons: bool,
    on_delete: Callback<String>,
) -> impl IntoView {
    let age = age_label(now_ms, profile.published_at_ms);
    let published = format_message(
        "ListOfPublishedProfiles--published-profiles-published",
        &[("age", age.as_str())],
    );
    let token = profile.profile_token.clone();

    view! {
        <li class="publishedProfilesListItem">
            <a class="publishedProfilesLink" href=profile.url>
                <span class="publishedProfilesName">{profile.name}</span>
                <span class="publishedProfilesDate">{published}</span>
            </a>
            <Show when=move || with_action_buttons>
                <button
                    type="button"
                    class="publishedProfilesDeleteButton"
                    on:click={
                        let token = token.clone();
                        move |_| on_delete.run(token.clone())
                    }
                >
                    {message("ListOfPublishedProfiles--published-profiles-delete-button")}
                </button>
            </Show>
        </li>
    }
}
