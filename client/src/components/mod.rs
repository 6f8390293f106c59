//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the home screen's building blocks. Shared state comes
//! from Leptos context providers; actions leave through callback props.

pub mod action_buttons;
pub mod app_header;
pub mod drag_and_drop;
pub mod inner_navigation_link;
pub mod instruction_transition;
pub mod localized;
pub mod published_profiles;
