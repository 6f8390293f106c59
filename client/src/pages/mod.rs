//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`.

pub mod compare;
pub mod home;
pub mod loading;
pub mod uploaded_recordings;
