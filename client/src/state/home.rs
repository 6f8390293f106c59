//! Home screen view state: the profiler-button install phase and the
//! load-profile action toggle.
//!
//! DESIGN
//! ======
//! Transitions are plain functions over small `Copy` enums so the page can
//! apply async results with a single `RwSignal::set`, and tests can drive the
//! machine without a reactive runtime.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use crate::net::web_channel::{ChannelError, WebChannel};

/// Where the user stands in getting the profiler toolbar button set up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PopupInstallPhase {
    // Firefox:
    CheckingWebChannel,
    WebChannelUnavailable,
    PopupEnabled,
    SuggestEnablePopup,
    // Other browsers:
    OtherBrowser,
}

impl PopupInstallPhase {
    /// Phase at mount. Only Firefox can talk to the menu button, so every
    /// other browser starts (and stays) on the install guidance.
    pub fn initial(is_firefox: bool) -> Self {
        if is_firefox {
            Self::CheckingWebChannel
        } else {
            Self::OtherBrowser
        }
    }

    /// Phase after the "is menu button enabled" query settles.
    ///
    /// A rejected query is not an error from the screen's point of view; it
    /// just means the channel is not reachable from this origin.
    pub fn after_menu_button_query(result: Result<bool, ChannelError>) -> Self {
        match result {
            Ok(true) => Self::PopupEnabled,
            Ok(false) => Self::SuggestEnablePopup,
            Err(_) => Self::WebChannelUnavailable,
        }
    }

    /// Phase after the user asked the host to enable the menu button.
    pub fn after_enable_menu_button(self, result: Result<(), ChannelError>) -> EnableOutcome {
        match result {
            Ok(()) => EnableOutcome {
                phase: Self::PopupEnabled,
                diagnostic: None,
            },
            Err(error) => EnableOutcome {
                phase: self,
                diagnostic: Some(format!("Unable to enable the profiler popup button. {error}")),
            },
        }
    }

    /// The instruction panel shown for this phase.
    pub fn instructions(self) -> Instructions {
        match self {
            Self::CheckingWebChannel | Self::SuggestEnablePopup => Instructions::EnablePopup {
                web_channel_available: true,
            },
            Self::WebChannelUnavailable => Instructions::EnablePopup {
                web_channel_available: false,
            },
            Self::PopupEnabled => Instructions::Record,
            Self::OtherBrowser => Instructions::OtherBrowser,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::CheckingWebChannel => "checking-webchannel",
            Self::WebChannelUnavailable => "webchannel-unavailable",
            Self::PopupEnabled => "popup-enabled",
            Self::SuggestEnablePopup => "suggest-enable-popup",
            Self::OtherBrowser => "other-browser",
        }
    }
}

/// Result of an enable-menu-button attempt. Failures keep the phase and carry
/// a diagnostic for the console; nothing is surfaced in the UI.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnableOutcome {
    pub phase: PopupInstallPhase,
    pub diagnostic: Option<String>,
}

/// Mutually-exclusive instruction panels on the home screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Instructions {
    /// "Enable the profiler menu button" guidance. The button is disabled
    /// (with an explanatory tooltip) when the channel is unreachable.
    EnablePopup { web_channel_available: bool },
    /// "How to record" guidance with keyboard shortcuts.
    Record,
    /// "Recording requires Firefox" guidance.
    OtherBrowser,
}

impl Instructions {
    /// Panels sharing a key swap in place; a key change mounts a new panel
    /// and replays the enter transition.
    pub fn transition_key(self) -> u8 {
        match self {
            Self::EnablePopup { .. } | Self::OtherBrowser => 0,
            Self::Record => 1,
        }
    }

    /// Stable `data-testid` of the rendered panel.
    pub fn test_id(self) -> &'static str {
        match self {
            Self::EnablePopup { .. } => "home-enable-popup-instructions",
            Self::Record => "home-record-instructions",
            Self::OtherBrowser => "home-other-browser-instructions",
        }
    }
}

/// Resolve the phase that follows `checking-webchannel`.
pub async fn query_install_phase(channel: &dyn WebChannel) -> PopupInstallPhase {
    PopupInstallPhase::after_menu_button_query(channel.query_is_menu_button_enabled().await)
}

/// Toggle state owned by the load-profile action buttons.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ActionButtonsState {
    pub load_from_url_open: bool,
}

impl ActionButtonsState {
    pub fn toggle_load_from_url(&mut self) {
        self.load_from_url_open = !self.load_from_url_open;
    }
}
