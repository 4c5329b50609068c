use leptos::prelude::*;

use super::VERSION;
use crate::content::copyright;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container">
                <p class="footer-copyright">{copyright()}</p>
                <p class="footer-build">{VERSION}</p>
            </div>
        </footer>
    }
}
