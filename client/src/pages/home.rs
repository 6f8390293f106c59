//! Home page: onboarding guidance and load-profile entry points.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the landing route. It picks one instruction panel from the
//! profiler-button install phase, and hands selected files and URLs to the
//! profile-loading actions. The app root follows the route those actions
//! queue, so a load started here survives this page unmounting.
//!
//! DESIGN
//! ======
//! The install phase lives in a page-owned signal. On Firefox the page asks
//! the host over the web channel whether the menu button is enabled; the
//! answer (or its failure) replaces `checking-webchannel` once. The server
//! renders the same initial phase from the request's `User-Agent`, so
//! hydration starts from matching markup.
//!
//! ERROR HANDLING
//! ==============
//! A failed enable request keeps the current phase and goes to the console.
//! The user sees no error text. A reply arriving after the page unmounted is
//! dropped.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

use crate::components::action_buttons::ActionButtons;
use crate::components::app_header::AppHeader;
use crate::components::drag_and_drop::DragAndDropOverlay;
use crate::components::inner_navigation_link::InnerNavigationLink;
use crate::components::instruction_transition::{InstructionTransition, TransitionGroupState};
use crate::components::localized::Localized;
use crate::components::published_profiles::ListOfPublishedProfiles;
use crate::net::HostServices;
use crate::net::web_channel::ChannelError;
use crate::net::receive_profile::{SelectedFile, retrieve_profile_from_file, trigger_loading_from_url};
use crate::state::home::{Instructions, PopupInstallPhase};
use crate::state::profile_load::{FileSlot, ProfileLoadState};
use crate::util::l10n::message;

const DOCS_PATH: &str = "/docs/";
const FIREFOX_DOWNLOAD_URL: &str = "https://www.mozilla.org/en-US/firefox/new/";
const PERF_SCREENSHOT: &str = "/images/perf-screenshot-2021-05-06.jpg";
const POPUP_SCREENSHOT: &str = "/images/firefox-profiler-button-2021-05-06.jpg";

/// Number of recent uploads listed on the home page.
pub const RECENT_RECORDINGS_LIMIT: usize = 3;

/// Recording shortcuts: the digit pressed with Ctrl+Shift, and its label.
pub const RECORDING_SHORTCUTS: [(&str, &str); 2] = [
    ("1", "Home--record-instructions-start-stop"),
    ("2", "Home--record-instructions-capture-load"),
];

/// Tooltip for the enable button. Only set when the button is disabled.
pub fn enable_button_title(web_channel_available: bool) -> Option<&'static str> {
    if web_channel_available {
        None
    } else {
        Some(message("Home--enable-button-unavailable"))
    }
}

/// Apply the result of an enable-menu-button request to `phase`.
///
/// Returns `false` without touching anything when the page owning `phase`
/// has unmounted while the host was answering.
pub fn apply_enable_result(phase: RwSignal<PopupInstallPhase>, result: Result<(), ChannelError>) -> bool {
    let Some(current) = phase.try_get_untracked() else {
        return false;
    };
    let outcome = current.after_enable_menu_button(result);
    if let Some(diagnostic) = outcome.diagnostic {
        leptos::logging::error!("{diagnostic}");
    }
    phase.set(outcome.phase);
    true
}

/// Home page. `special_message` is shown above the motto, e.g. when a load
/// route was opened without a profile to load.
#[component]
pub fn HomePage(#[prop(optional, into)] special_message: Option<String>) -> impl IntoView {
    let services = use_context::<HostServices>().unwrap_or_default();
    let profile_load = expect_context::<RwSignal<ProfileLoadState>>();
    let file_slot = expect_context::<FileSlot>();

    let phase = RwSignal::new(PopupInstallPhase::initial(services.environment.is_firefox()));
    let instructions = Memo::new(move |_| phase.get().instructions());
    let transition_key = Memo::new(move |_| instructions.get().transition_key());
    let transitions = StoredValue::new(TransitionGroupState::default());

    #[cfg(feature = "hydrate")]
    {
        if phase.get_untracked() == PopupInstallPhase::CheckingWebChannel {
            let channel = services.channel.clone();
            leptos::task::spawn_local(async move {
                let next = crate::state::home::query_install_phase(channel.as_ref()).await;
                leptos::logging::log!("profiler menu button phase: {}", next.as_str());
                phase.set(next);
            });
        }
    }

    let enable_channel = services.channel.clone();
    let on_enable = Callback::new(move |()| {
        let channel = enable_channel.clone();
        leptos::task::spawn_local(async move {
            let result = channel.enable_menu_button().await;
            if !apply_enable_result(phase, result) {
                leptos::logging::log!("enable menu button answered after the home page closed");
            }
        });
    });

    // The app root follows the route these actions queue.
    let on_file = Callback::new(move |file: SelectedFile| {
        profile_load.update(|state| file_slot.update(|slot| retrieve_profile_from_file(state, slot, file)));
    });
    let on_url = Callback::new(move |url: String| {
        profile_load.update(|state| file_slot.update(|slot| trigger_loading_from_url(state, slot, url)));
    });

    // A key change mounts a fresh transition; same-key panels swap inside it.
    let instruction_panel = move || {
        transition_key.track();
        let animate = transitions.try_update_value(TransitionGroupState::mount).unwrap_or(false);
        view! {
            <InstructionTransition animate=animate>
                {move || render_instructions(instructions.get(), on_enable)}
            </InstructionTransition>
        }
    };

    view! {
        <div class="home">
            <main class="homeSection">
                <AppHeader/>
                {special_message.map(|text| view! { <div class="homeSpecialMessage">{text}</div> })}
                <p>{message("Home--profiler-motto")}</p>
                <div class="homeInstructionsTransitionGroup">{instruction_panel}</div>
                <section class="homeAdditionalContent">
                    <h2 class="homeAdditionalContentTitle protocol-display-xs">
                        {message("Home--additional-content-title")}
                    </h2>
                    <section class="homeActions">
                        <p>
                            <Localized id="Home--additional-content-content"/>
                        </p>
                        <ActionButtons on_file=on_file on_url=on_url/>
                        <p>
                            {message("Home--compare-recordings-info")}
                            " "
                            <InnerNavigationLink data_source="compare">
                                {message("Home--compare-recordings-link")}
                            </InnerNavigationLink>
                        </p>
                    </section>
                    <section>
                        <h2 class="homeRecentUploadedRecordingsTitle protocol-display-xxs">
                            {message("Home--recent-uploaded-recordings-title")}
                        </h2>
                        <ListOfPublishedProfiles limit=RECENT_RECORDINGS_LIMIT with_action_buttons=false/>
                    </section>
                </section>
                <DragAndDropOverlay/>
            </main>
        </div>
    }
}

fn render_instructions(instructions: Instructions, on_enable: Callback<()>) -> AnyView {
    match instructions {
        Instructions::EnablePopup { web_channel_available } => view! {
            <EnablePopupInstructions web_channel_available=web_channel_available on_enable=on_enable/>
        }
        .into_any(),
        Instructions::Record => view! { <RecordInstructions/> }.into_any(),
        Instructions::OtherBrowser => view! { <OtherBrowserInstructions/> }.into_any(),
    }
}

#[component]
fn EnablePopupInstructions(web_channel_available: bool, on_enable: Callback<()>) -> impl IntoView {
    let test_id = Instructions::EnablePopup { web_channel_available }.test_id();
    let on_click = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        on_enable.run(());
    };

    view! {
        <div class="homeInstructions" data-testid=test_id>
            <img class="homeSectionScreenshot" src=PERF_SCREENSHOT alt=message("Home--perf-screenshot-alt")/>
            <div>
                <button
                    type="button"
                    class="homeSectionButton"
                    on:click=on_click
                    disabled={!web_channel_available}
                    title=enable_button_title(web_channel_available)
                >
                    <span class="homeSectionPlus">"+"</span>
                    {message("Home--menu-button")}
                </button>
                <DocsButton/>
                {if web_channel_available {
                    view! { <p>{message("Home--menu-button-instructions")}</p> }.into_any()
                } else {
                    view! {
                        <p>
                            <Localized id="Home--web-channel-unavailable"/>
                        </p>
                    }
                    .into_any()
                }}
            </div>
        </div>
    }
}

#[component]
fn RecordInstructions() -> impl IntoView {
    view! {
        <div class="homeInstructions" data-testid=Instructions::Record.test_id()>
            <img
                class="homeSectionScreenshot"
                src=POPUP_SCREENSHOT
                alt=message("Home--popup-screenshot-alt")
            />
            <div>
                <DocsButton/>
                <p>
                    <Localized id="Home--record-instructions"/>
                </p>
                <div>
                    {RECORDING_SHORTCUTS
                        .iter()
                        .map(|&(digit, label)| {
                            view! {
                                <p>
                                    <kbd>"Ctrl"</kbd>
                                    "+"
                                    <kbd>"Shift"</kbd>
                                    "+"
                                    <kbd>{digit}</kbd>
                                    " "
                                    {message(label)}
                                </p>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

#[component]
fn OtherBrowserInstructions() -> impl IntoView {
    view! {
        <div class="homeInstructions" data-testid=Instructions::OtherBrowser.test_id()>
            <img class="homeSectionScreenshot" src=PERF_SCREENSHOT alt=message("Home--perf-screenshot-alt")/>
            <div>
                <DocsButton/>
                <h2>{message("Home--instructions-title")}</h2>
                <p>
                    <Localized id="Home--instructions-content" href=FIREFOX_DOWNLOAD_URL/>
                </p>
            </div>
        </div>
    }
}

#[component]
fn DocsButton() -> impl IntoView {
    view! {
        <a href=DOCS_PATH class="homeSectionButton">
            <span class="homeSectionDocsIcon"></span>
            {message("Home--documentation-button")}
        </a>
    }
}
