//! Full-page drop-target overlay.
//!
//! Only the overlay markup lives here; stylesheet rules reveal it while a
//! drag is in progress over the page.

use leptos::prelude::*;

use crate::util::l10n::message;

#[component]
pub fn DragAndDropOverlay() -> impl IntoView {
    view! {
        <div class="dragAndDropOverlayWrapper" aria-hidden="true">
            <div class="dragAndDropOverlay">
                <div class="dragAndDropOverlayMessage">{message("DragAndDrop--drop-files-here")}</div>
            </div>
        </div>
    }
}
