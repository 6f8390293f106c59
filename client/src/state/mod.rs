//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`home`, `profile_load`, `published`) so
//! individual components can depend on small focused models.

pub mod home;
pub mod profile_load;
pub mod published;
