//! Outbound collaborators of the home screen: the host browser channel and the
//! profile-loading actions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Browser-only capabilities sit behind traits collected in [`HostServices`],
//! which the app root provides through context. Tests and server rendering
//! substitute their own implementations.

pub mod receive_profile;
pub mod web_channel;

use std::sync::Arc;

use crate::util::environment::{BrowserEnvironment, Environment};
use web_channel::{FirefoxWebChannel, WebChannel};

/// Injectable browser capabilities used by the home screen.
#[derive(Clone)]
pub struct HostServices {
    pub environment: Arc<dyn Environment + Send + Sync>,
    pub channel: Arc<dyn WebChannel + Send + Sync>,
}

impl Default for HostServices {
    fn default() -> Self {
        Self {
            environment: Arc::new(BrowserEnvironment),
            channel: Arc::new(FirefoxWebChannel),
        }
    }
}
