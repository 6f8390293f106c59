//! Browser detection behind an injectable trait.
//!
//! The browser implementation reads `navigator.userAgent` after hydration and
//! the request's `User-Agent` header during server rendering, so both sides
//! agree on the first render.

#[cfg(test)]
#[path = "environment_test.rs"]
mod environment_test;

const FIREFOX_TOKEN: &str = "Firefox/";

pub trait Environment {
    /// The runtime's user-agent string, if it can be determined.
    fn user_agent(&self) -> Option<String>;

    /// Whether the runtime is Firefox, the only browser that can record.
    fn is_firefox(&self) -> bool {
        self.user_agent().is_some_and(|ua| is_firefox_user_agent(&ua))
    }
}

/// True when `user_agent` carries a `Firefox/<major>.<minor>` product token.
pub fn is_firefox_user_agent(user_agent: &str) -> bool {
    user_agent
        .match_indices(FIREFOX_TOKEN)
        .any(|(at, token)| has_dotted_version(&user_agent[at + token.len()..]))
}

fn has_dotted_version(rest: &str) -> bool {
    let major = rest.bytes().take_while(u8::is_ascii_digit).count();
    if major == 0 {
        return false;
    }
    rest[major..]
        .strip_prefix('.')
        .is_some_and(|minor| minor.bytes().next().is_some_and(|b| b.is_ascii_digit()))
}

/// Environment of the page actually being rendered.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserEnvironment;

impl Environment for BrowserEnvironment {
    fn user_agent(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let window = web_sys::window()?;
            match window.navigator().user_agent() {
                Ok(ua) => Some(ua),
                Err(e) => {
                    leptos::logging::warn!("navigator.userAgent unavailable: {e:?}");
                    None
                }
            }
        }
        #[cfg(all(feature = "ssr", not(feature = "hydrate")))]
        {
            let parts = leptos::prelude::use_context::<http::request::Parts>()?;
            let header = parts.headers.get(http::header::USER_AGENT)?;
            match header.to_str() {
                Ok(ua) => Some(ua.to_owned()),
                Err(_) => None,
            }
        }
        #[cfg(not(any(feature = "hydrate", feature = "ssr")))]
        {
            None
        }
    }
}
