use leptos::prelude::*;

use super::{ICON_CHEVRON_DOWN, Icon};
use crate::content::PROFILE;
use crate::motion::{Reveal, Transition, Trigger};
use crate::tracker::SectionId;

#[component]
pub fn ProfileSection() -> impl IntoView {
    view! {
        <section id=SectionId::Profile.anchor() class="section profile">
            <Reveal trigger=Trigger::Mount transition=Transition::HERO class="profile-inner">
                <h1 class="profile-name">{PROFILE.name}</h1>
                <h2 class="profile-title">{PROFILE.title}</h2>
                <p class="profile-summary">
                    {PROFILE.summary.iter().copied().collect::<Vec<_>>()}
                </p>
                // Bounces forever, hints there is more below
                <div class="scroll-hint">
                    <Icon path=ICON_CHEVRON_DOWN class="scroll-hint-icon" />
                </div>
            </Reveal>
        </section>
    }
}
