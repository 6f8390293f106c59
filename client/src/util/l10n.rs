//! English message catalog and inline-markup segmentation.
//!
//! Messages are looked up by identifier. A message may embed a small set of
//! inline elements (`<code>`, `<kbd>`, `<strong>`, `<a>`) and `{ $name }`
//! placeholders; [`segments`] splits the text so the `Localized` component can
//! render real elements. Unknown identifiers render as the identifier itself.

#[cfg(test)]
#[path = "l10n_test.rs"]
mod l10n_test;

const CATALOG: &[(&str, &str)] = &[
    ("AppHeader--app-header-title", "Firefox Profiler"),
    ("AppHeader--app-header-subtitle", "Web app for Firefox performance analysis"),
    ("AppHeader--github-icon", "Go to our Git repository (this opens in a new window)"),
    ("Home--upload-from-file-input-button", "Load a profile from file"),
    ("Home--upload-from-url-button", "Load a profile from a URL"),
    ("Home--load-from-url-submit-button", "Load"),
    ("Home--documentation-button", "Documentation"),
    ("Home--menu-button", "Enable Profiler Menu Button"),
    (
        "Home--enable-button-unavailable",
        "This profiler instance was unable to connect to the WebChannel, so it cannot enable the profiler menu button.",
    ),
    (
        "Home--menu-button-instructions",
        "Enable the profiler menu button to start recording a performance profile in Firefox, then analyze it and share it with profiler.firefox.com.",
    ),
    (
        "Home--web-channel-unavailable",
        "This profiler instance was unable to connect to the WebChannel. This usually means that it’s running on a different host from the one that is specified in the preference <code>devtools.performance.recording.ui-base-url</code>. If you would like to capture new profiles with this instance, and give it programmatic control of the profiler menu button, you can go to <code>about:config</code> and change the preference.",
    ),
    (
        "Home--record-instructions",
        "To start profiling, click on the profiling button, or use the keyboard shortcuts. The icon is blue when a profile is recording. Hit <kbd>Capture</kbd> to load the data into profiler.firefox.com.",
    ),
    ("Home--record-instructions-start-stop", "Stop and start profiling"),
    ("Home--record-instructions-capture-load", "Capture and load profile"),
    ("Home--instructions-title", "How to view and record profiles"),
    (
        "Home--instructions-content",
        "Recording performance profiles requires <a>Firefox</a>. However, existing profiles can be viewed in any modern browser.",
    ),
    (
        "Home--profiler-motto",
        "Capture a performance profile. Analyze it. Share it. Make the web faster.",
    ),
    ("Home--additional-content-title", "Load existing profiles"),
    (
        "Home--additional-content-content",
        "You can <strong>drag and drop</strong> a profile file here to load it, or:",
    ),
    ("Home--compare-recordings-info", "You can also compare recordings."),
    ("Home--compare-recordings-link", "Open the comparing interface."),
    ("Home--recent-uploaded-recordings-title", "Recent uploaded recordings"),
    ("Home--perf-screenshot-alt", "screenshot of profiler.firefox.com"),
    (
        "Home--popup-screenshot-alt",
        "Screenshot of the profiler settings from the Firefox menu.",
    ),
    (
        "ListOfPublishedProfiles--uploaded-profile-information-list-empty",
        "No profile has been uploaded yet!",
    ),
    (
        "ListOfPublishedProfiles--uploaded-profile-information-list",
        "See all your recordings ({ $profilesRestCount } more)",
    ),
    ("ListOfPublishedProfiles--published-profiles-delete-button", "Delete"),
    ("ListOfPublishedProfiles--published-profiles-published", "Uploaded { $age }"),
    ("UploadedRecordings--title", "Uploaded recordings"),
    ("DragAndDrop--drop-files-here", "Drop a profile file here to load it"),
    ("ProfileLoader--loading-from-file", "Loading the profile from the file { $name } ({ $size } bytes)…"),
    ("ProfileLoader--loading-from-url", "Loading the profile from { $url }…"),
    ("ProfileLoader--no-source", "No profile was requested. Pick one to load below."),
    ("ProfileLoader--back-home", "Back to the home page"),
    ("CompareHome--instruction-title", "Enter the profile URLs that you’d like to compare"),
    (
        "CompareHome--instruction-content",
        "The tool will extract the data from the selected track and range for each profile, and put them both on the same view to make them easy to compare.",
    ),
];

/// Catalog text for `id`, or `id` itself when the catalog has no entry.
pub fn message(id: &'static str) -> &'static str {
    CATALOG
        .iter()
        .find_map(|(key, text)| (*key == id).then_some(*text))
        .unwrap_or(id)
}

/// Catalog text for `id` with `{ $name }` placeholders filled from `args`.
pub fn format_message(id: &'static str, args: &[(&str, &str)]) -> String {
    args.iter()
        .fold(message(id).to_owned(), |text, (name, value)| {
            text.replace(&format!("{{ ${name} }}"), value)
        })
}

/// A run of message text, or one inline element wrapping text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Segment<'a> {
    Text(&'a str),
    Element { tag: &'a str, text: &'a str },
}

/// Split `text` into plain runs and inline elements.
///
/// Elements do not nest. A tag without its closing counterpart is kept as
/// plain text.
pub fn segments(text: &str) -> Vec<Segment<'_>> {
    let mut out = Vec::new();
    let mut run_start = 0;
    let mut cursor = 0;
    while let Some(offset) = text[cursor..].find('<') {
        let open = cursor + offset;
        match split_element(&text[open..]) {
            Some((tag, inner, consumed)) => {
                if open > run_start {
                    out.push(Segment::Text(&text[run_start..open]));
                }
                out.push(Segment::Element { tag, text: inner });
                cursor = open + consumed;
                run_start = cursor;
            }
            None => cursor = open + 1,
        }
    }
    if run_start < text.len() {
        out.push(Segment::Text(&text[run_start..]));
    }
    out
}

/// Parse `<tag>inner</tag>` at the start of `s`, returning the tag, the inner
/// text, and how many bytes the element spans.
fn split_element(s: &str) -> Option<(&str, &str, usize)> {
    let close_angle = s.find('>')?;
    let tag = &s[1..close_angle];
    if tag.is_empty() || !tag.bytes().all(|b| b.is_ascii_alphabetic()) {
        return None;
    }
    let body_start = close_angle + 1;
    let closing = format!("</{tag}>");
    let end = s[body_start..].find(&closing)?;
    Some((tag, &s[body_start..body_start + end], body_start + end + closing.len()))
}
