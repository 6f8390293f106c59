//! Enter-only CSS transition wrapper for the home instruction panels.
//!
//! DESIGN
//! ======
//! Mirrors the `enter` / `enter-active` / `enter-done` class protocol of CSS
//! transition groups. Panels are swapped without an exit animation, so only
//! the entering side is staged. The first panel of a group does not animate:
//! server output and the first hydrated frame carry `enter-done`, so the panel
//! is visible without WASM. Only later swaps run the stages in the browser.

#[cfg(test)]
#[path = "instruction_transition_test.rs"]
mod instruction_transition_test;

use leptos::prelude::*;

/// Duration of the enter transition in `Home.css`.
pub const TRANSITION_TIMEOUT_MS: u32 = 300;

const CLASS_PREFIX: &str = "homeTransition";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransitionStage {
    Enter,
    EnterActive,
    EnterDone,
}

impl TransitionStage {
    /// Stage a panel mounts at.
    pub fn initial(animate: bool) -> Self {
        if animate {
            Self::Enter
        } else {
            Self::EnterDone
        }
    }

    pub fn class(self) -> String {
        match self {
            Self::Enter => format!("{CLASS_PREFIX}-enter"),
            Self::EnterActive => format!("{CLASS_PREFIX}-enter {CLASS_PREFIX}-enter-active"),
            Self::EnterDone => format!("{CLASS_PREFIX}-enter-done"),
        }
    }
}

/// Mount bookkeeping for one transition group.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TransitionGroupState {
    mounted: bool,
}

impl TransitionGroupState {
    /// Record a panel mount. Returns whether it should animate: every mount
    /// but the group's first.
    pub fn mount(&mut self) -> bool {
        let animate = self.mounted;
        self.mounted = true;
        animate
    }
}

/// Wrap a freshly mounted panel in the staged transition classes. Without
/// `animate` the panel starts at `enter-done`.
#[component]
pub fn InstructionTransition(#[prop(optional)] animate: bool, children: Children) -> impl IntoView {
    let stage = RwSignal::new(TransitionStage::initial(animate));

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        if !animate {
            return;
        }
        leptos::task::spawn_local(async move {
            // Let the `enter` styles paint before activating the transition.
            gloo_timers::future::TimeoutFuture::new(0).await;
            stage.set(TransitionStage::EnterActive);
            gloo_timers::future::TimeoutFuture::new(TRANSITION_TIMEOUT_MS).await;
            stage.set(TransitionStage::EnterDone);
        });
    });

    view! {
        <div class=move || stage.get().class()>
            {children()}
        </div>
    }
}
