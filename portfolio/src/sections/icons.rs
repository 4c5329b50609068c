//! Inline SVG icons in the Lucide style (24x24, stroked, round caps).

use leptos::prelude::*;

/// Renders a stroked icon from SVG path data.
///
/// ```rust,ignore
/// view! { <Icon path=ICON_CODE class="card-icon" /> }
/// ```
#[component]
pub fn Icon(
    /// SVG path data (the `d` attribute value)
    path: &'static str,
    /// Icon size in pixels
    #[prop(default = "32")]
    size: &'static str,
    /// Additional CSS class names
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width=size
            height=size
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=class
            aria-hidden="true"
        >
            <path d=path></path>
        </svg>
    }
}

pub const ICON_CHEVRON_DOWN: &str = "m6 9 6 6 6-6";

pub const ICON_CODE: &str = "m16 18 6-6-6-6M8 6l-6 6 6 6";

pub const ICON_LAYERS: &str = "m12 2 10 5-10 5L2 7zM2 17l10 5 10-5M2 12l10 5 10-5";

pub const ICON_BRIEFCASE: &str = "M4 7h16a2 2 0 0 1 2 2v10a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V9a2 2 0 0 1 2-2zM16 21V5a2 2 0 0 0-2-2h-4a2 2 0 0 0-2 2v16";
