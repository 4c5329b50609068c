//! # portfolio
//!
//! Single-page personal portfolio rendered client-side with
//! [Leptos](https://leptos.dev/).
//!
//! The page is four stacked sections (profile, experience, skills,
//! projects) under a fixed nav bar. The nav bar highlights whichever
//! section sits under a probe line near the top of the viewport; see
//! [`tracker`] for the rules and [`scroll`] for how it hooks into the
//! window.
//!
//! ## Architecture
//!
//! - [`tracker`] - Section ids, bounds, the in-view scan (DOM-free)
//! - [`geometry`] - Boundary lookup: live DOM or a fixed layout
//! - [`scroll`] - Scoped scroll subscription and the active-section signal
//! - [`sections`] - Leptos components for each page block
//! - [`motion`] - One-shot entrance animations
//! - [`content`] - Page copy
//! - [`config`], [`logging`], [`error`] - Plumbing

pub mod config;
pub mod content;
pub mod error;
pub mod geometry;
pub mod logging;
pub mod motion;
pub mod scroll;
pub mod sections;
pub mod styles;
pub mod tracker;

use leptos::prelude::*;

use config::PortfolioConfig;
use sections::*;
use styles::PORTFOLIO_CSS;

/// The whole page.
#[component]
pub fn App(#[prop(optional)] config: PortfolioConfig) -> impl IntoView {
    let active = scroll::use_active_section(config.tracker());

    view! {
        <style>{PORTFOLIO_CSS}</style>
        <div class="page">
            <NavBar active=active />
            <main>
                <ProfileSection />
                <ExperienceSection />
                <SkillsSection />
                <ProjectsSection />
            </main>
            <Footer />
        </div>
    }
}
