//! Bridge to the host browser's profiler `WebChannel`.
//!
//! SYSTEM CONTEXT
//! ==============
//! Firefox exposes privileged profiler controls (the toolbar menu button) to
//! the profiler origin through `WebChannel` custom events. Requests go out as
//! `WebChannelMessageToChrome` events; replies come back as
//! `WebChannelMessageToContent` events correlated by `requestId`.
//!
//! ERROR HANDLING
//! ==============
//! A host that does not recognize the channel answers with a channel-level
//! error that carries no request id. That error rejects every pending request.
//! Outside the browser every request fails with [`ChannelError::NotInBrowser`].

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "web_channel_test.rs"]
mod web_channel_test;

use std::collections::HashMap;

use futures::future::LocalBoxFuture;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Channel id the profiler origin is registered under.
pub const CHANNEL_ID: &str = "profiler.firefox.com";

#[cfg(feature = "hydrate")]
const TO_CHROME_EVENT: &str = "WebChannelMessageToChrome";
#[cfg(feature = "hydrate")]
const TO_CONTENT_EVENT: &str = "WebChannelMessageToContent";

/// Failure of a web-channel request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChannelError {
    /// The host has no channel for this origin, or the event could not be sent.
    #[error("web channel unavailable: {0}")]
    Unavailable(String),

    /// The host received the request and answered with an error.
    #[error("request rejected by host: {0}")]
    Rejected(String),

    /// A message could not be encoded or decoded.
    #[error("malformed web channel message: {0}")]
    Malformed(String),

    /// No `window` to dispatch events on (server rendering, tests).
    #[error("web channel requires a browser environment")]
    NotInBrowser,
}

pub type ChannelFuture<T> = LocalBoxFuture<'static, Result<T, ChannelError>>;

/// Control surface of the host browser's profiler menu button.
pub trait WebChannel {
    /// Resolve to whether the toolbar button is already enabled.
    fn query_is_menu_button_enabled(&self) -> ChannelFuture<bool>;

    /// Ask the host to enable the toolbar button.
    fn enable_menu_button(&self) -> ChannelFuture<()>;
}

/// Outbound request types understood by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RequestKind {
    #[serde(rename = "STATUS_QUERY")]
    StatusQuery,
    #[serde(rename = "ENABLE_MENU_BUTTON")]
    EnableMenuButton,
}

#[derive(Serialize)]
struct OutboundMessage {
    #[serde(rename = "type")]
    kind: RequestKind,
    #[serde(rename = "requestId")]
    request_id: u32,
}

#[derive(Serialize)]
struct OutboundEnvelope<'a> {
    id: &'a str,
    message: OutboundMessage,
}

#[derive(Deserialize)]
struct InboundEnvelope {
    id: String,
    message: Value,
}

#[derive(Deserialize)]
#[serde(tag = "type")]
enum ReplyMessage {
    #[serde(rename = "SUCCESS_RESPONSE")]
    Success {
        #[serde(rename = "requestId")]
        request_id: u32,
        #[serde(default)]
        response: Value,
    },
    #[serde(rename = "ERROR_RESPONSE")]
    Error {
        #[serde(rename = "requestId")]
        request_id: u32,
        error: Value,
    },
}

#[derive(Deserialize)]
struct FailureMessage {
    #[serde(default)]
    errno: Option<i64>,
    error: Value,
}

/// A decoded `WebChannelMessageToContent` payload.
#[derive(Debug, Clone, PartialEq)]
pub enum Inbound {
    /// Answer to one request.
    Reply {
        request_id: u32,
        result: Result<Value, ChannelError>,
    },
    /// The channel itself failed; every pending request is dead.
    ChannelFailure(ChannelError),
    /// Addressed to some other channel.
    Ignored,
}

/// Serialize a request into the JSON string carried in the event `detail`.
///
/// # Errors
///
/// Returns [`ChannelError::Malformed`] if serialization fails.
pub fn encode_request(kind: RequestKind, request_id: u32) -> Result<String, ChannelError> {
    let envelope = OutboundEnvelope {
        id: CHANNEL_ID,
        message: OutboundMessage { kind, request_id },
    };
    serde_json::to_string(&envelope).map_err(|e| ChannelError::Malformed(e.to_string()))
}

/// Decode the JSON `detail` of an inbound event.
///
/// # Errors
///
/// Returns [`ChannelError::Malformed`] for payloads that are neither a reply
/// nor a channel failure.
pub fn decode_inbound(detail: &str) -> Result<Inbound, ChannelError> {
    let envelope: InboundEnvelope =
        serde_json::from_str(detail).map_err(|e| ChannelError::Malformed(e.to_string()))?;
    if envelope.id != CHANNEL_ID {
        return Ok(Inbound::Ignored);
    }

    if envelope.message.get("type").is_some() {
        let reply: ReplyMessage =
            serde_json::from_value(envelope.message).map_err(|e| ChannelError::Malformed(e.to_string()))?;
        return Ok(match reply {
            ReplyMessage::Success { request_id, response } => Inbound::Reply {
                request_id,
                result: Ok(response),
            },
            ReplyMessage::Error { request_id, error } => Inbound::Reply {
                request_id,
                result: Err(ChannelError::Rejected(value_text(&error))),
            },
        });
    }

    let failure: FailureMessage =
        serde_json::from_value(envelope.message).map_err(|e| ChannelError::Malformed(e.to_string()))?;
    let reason = match failure.errno {
        Some(errno) => format!("{} (errno {errno})", value_text(&failure.error)),
        None => value_text(&failure.error),
    };
    Ok(Inbound::ChannelFailure(ChannelError::Unavailable(reason)))
}

/// Read `menuButtonIsEnabled` from a `STATUS_QUERY` response.
///
/// # Errors
///
/// Returns [`ChannelError::Malformed`] if the field is missing or not a bool.
pub fn menu_button_status(response: &Value) -> Result<bool, ChannelError> {
    response
        .get("menuButtonIsEnabled")
        .and_then(Value::as_bool)
        .ok_or_else(|| ChannelError::Malformed(format!("status response without menuButtonIsEnabled: {response}")))
}

fn value_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// The real Firefox channel, driven through DOM events.
#[derive(Clone, Copy, Debug, Default)]
pub struct FirefoxWebChannel;

impl WebChannel for FirefoxWebChannel {
    fn query_is_menu_button_enabled(&self) -> ChannelFuture<bool> {
        Box::pin(async move {
            let response = send_request(RequestKind::StatusQuery).await?;
            menu_button_status(&response)
        })
    }

    fn enable_menu_button(&self) -> ChannelFuture<()> {
        Box::pin(async move { send_request(RequestKind::EnableMenuButton).await.map(|_| ()) })
    }
}

/// Requests waiting for a reply, keyed by `requestId`.
///
/// Generic over the reply sender so routing can be exercised without a
/// browser. [`PendingRequests::route`] hands back each sender together with
/// the result it should receive.
#[derive(Debug)]
pub struct PendingRequests<S> {
    next_id: u32,
    waiting: HashMap<u32, S>,
}

impl<S> Default for PendingRequests<S> {
    fn default() -> Self {
        Self {
            next_id: 0,
            waiting: HashMap::new(),
        }
    }
}

impl<S> PendingRequests<S> {
    /// Park `sender` under a fresh request id.
    pub fn register(&mut self, sender: S) -> u32 {
        self.next_id = self.next_id.wrapping_add(1);
        self.waiting.insert(self.next_id, sender);
        self.next_id
    }

    /// Drop a request whose event never went out.
    pub fn cancel(&mut self, request_id: u32) -> Option<S> {
        self.waiting.remove(&request_id)
    }

    pub fn len(&self) -> usize {
        self.waiting.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waiting.is_empty()
    }

    /// Senders to resolve for `inbound`. A reply reaches only its own
    /// request; replies for unknown ids resolve nothing. A channel failure
    /// drains the table and rejects every waiting request.
    pub fn route(&mut self, inbound: Inbound) -> Vec<(S, Result<Value, ChannelError>)> {
        match inbound {
            Inbound::Reply { request_id, result } => self
                .waiting
                .remove(&request_id)
                .map(|sender| vec![(sender, result)])
                .unwrap_or_default(),
            Inbound::ChannelFailure(error) => self
                .waiting
                .drain()
                .map(|(_, sender)| (sender, Err(error.clone())))
                .collect(),
            Inbound::Ignored => Vec::new(),
        }
    }
}

#[cfg(feature = "hydrate")]
type PendingReply = futures::channel::oneshot::Sender<Result<Value, ChannelError>>;

#[cfg(feature = "hydrate")]
thread_local! {
    static LISTENING: std::cell::Cell<bool> = const { std::cell::Cell::new(false) };
    static PENDING: std::cell::RefCell<PendingRequests<PendingReply>> =
        std::cell::RefCell::new(PendingRequests::default());
}

#[cfg(feature = "hydrate")]
async fn send_request(kind: RequestKind) -> Result<Value, ChannelError> {
    let window = web_sys::window().ok_or(ChannelError::NotInBrowser)?;
    ensure_listener(&window)?;

    let (sender, receiver) = futures::channel::oneshot::channel();
    let request_id = PENDING.with(|pending| pending.borrow_mut().register(sender));
    if let Err(e) = dispatch_request(&window, kind, request_id) {
        PENDING.with(|pending| pending.borrow_mut().cancel(request_id));
        return Err(e);
    }
    leptos::logging::log!("web channel request {request_id}: {kind:?}");

    match receiver.await {
        Ok(result) => result,
        Err(_) => Err(ChannelError::Unavailable("request dropped before a reply arrived".to_owned())),
    }
}

#[cfg(not(feature = "hydrate"))]
async fn send_request(_kind: RequestKind) -> Result<Value, ChannelError> {
    Err(ChannelError::NotInBrowser)
}

#[cfg(feature = "hydrate")]
fn dispatch_request(window: &web_sys::Window, kind: RequestKind, request_id: u32) -> Result<(), ChannelError> {
    let detail = encode_request(kind, request_id)?;
    let init = web_sys::CustomEventInit::new();
    init.set_detail(&wasm_bindgen::JsValue::from_str(&detail));
    let event = web_sys::CustomEvent::new_with_event_init_dict(TO_CHROME_EVENT, &init)
        .map_err(|e| ChannelError::Unavailable(format!("{e:?}")))?;
    window
        .dispatch_event(&event)
        .map(|_| ())
        .map_err(|e| ChannelError::Unavailable(format!("{e:?}")))
}

/// Install the reply listener once per page.
#[cfg(feature = "hydrate")]
fn ensure_listener(window: &web_sys::Window) -> Result<(), ChannelError> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    if LISTENING.with(std::cell::Cell::get) {
        return Ok(());
    }
    let listener = Closure::<dyn Fn(web_sys::CustomEvent)>::new(handle_content_event);
    window
        .add_event_listener_with_callback(TO_CONTENT_EVENT, listener.as_ref().unchecked_ref())
        .map_err(|e| ChannelError::Unavailable(format!("{e:?}")))?;
    // Lives for the rest of the page.
    listener.forget();
    LISTENING.with(|listening| listening.set(true));
    Ok(())
}

#[cfg(feature = "hydrate")]
fn handle_content_event(event: web_sys::CustomEvent) {
    let detail = event.detail();
    let text = match detail.as_string() {
        Some(text) => text,
        None => match js_sys::JSON::stringify(&detail) {
            Ok(text) => String::from(text),
            Err(e) => {
                leptos::logging::warn!("unreadable web channel message: {e:?}");
                return;
            }
        },
    };

    let inbound = match decode_inbound(&text) {
        Ok(inbound) => inbound,
        Err(e) => {
            leptos::logging::warn!("web channel: {e}");
            return;
        }
    };
    if let Inbound::ChannelFailure(error) = &inbound {
        leptos::logging::warn!("web channel failure: {error}");
    }

    let resolved = PENDING.with(|pending| pending.borrow_mut().route(inbound));
    for (sender, result) in resolved {
        if sender.send(result).is_err() {
            leptos::logging::log!("web channel reply arrived after its caller went away");
        }
    }
}
