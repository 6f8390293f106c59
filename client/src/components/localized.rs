//! Catalog-backed text with inline elements.

use leptos::prelude::*;

use crate::util::l10n::{Segment, message, segments};

/// Render catalog message `id`, turning embedded `<code>`, `<kbd>`,
/// `<strong>` and `<a>` markup into elements. `href` targets the `<a>`.
#[component]
pub fn Localized(id: &'static str, #[prop(optional)] href: Option<&'static str>) -> impl IntoView {
    segments(message(id))
        .into_iter()
        .map(|segment| match segment {
            Segment::Text(text) => text.into_any(),
            Segment::Element { tag: "code", text } => view! { <code>{text}</code> }.into_any(),
            Segment::Element { tag: "kbd", text } => view! { <kbd>{text}</kbd> }.into_any(),
            Segment::Element { tag: "strong", text } => view! { <strong>{text}</strong> }.into_any(),
            Segment::Element { tag: "a", text } => view! { <a href=href.unwrap_or("#")>{text}</a> }.into_any(),
            Segment::Element { text, .. } => text.into_any(),
        })
        .collect_view()
}
