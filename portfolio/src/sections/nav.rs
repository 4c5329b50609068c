use leptos::prelude::*;

use crate::tracker::SectionId;

/// Class for a nav link, highlighted when its section is active.
pub fn nav_link_class(is_active: bool) -> &'static str {
    if is_active { "nav-link active" } else { "nav-link" }
}

/// Fixed header. Links are plain anchors; the browser does the scrolling.
#[component]
pub fn NavBar(active: ReadSignal<SectionId>) -> impl IntoView {
    view! {
        <header class="site-header">
            <nav class="nav">
                <ul class="nav-links">
                    {SectionId::ALL
                        .into_iter()
                        .map(|section| {
                            let is_active = move || active.get() == section;
                            view! {
                                <li>
                                    <a
                                        href=section.href()
                                        class=move || nav_link_class(is_active())
                                        aria-current=move || is_active().then_some("true")
                                    >
                                        {section.label()}
                                    </a>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()}
                </ul>
            </nav>
        </header>
    }
}
