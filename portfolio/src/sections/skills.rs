use leptos::prelude::*;

use super::Icon;
use crate::content::{SKILL_GROUPS, SkillGroup};
use crate::motion::Reveal;
use crate::tracker::SectionId;

#[component]
pub fn SkillsSection() -> impl IntoView {
    view! {
        <section id=SectionId::Skills.anchor() class="section skills">
            <div class="container">
                <h2 class="section-title">"Technical Skills"</h2>
                <div class="skills-grid">
                    {SKILL_GROUPS.iter().enumerate().map(|(index, group)| {
                        view! {
                            <Reveal index=index class="card">
                                <SkillCard group=group />
                            </Reveal>
                        }
                    }).collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn SkillCard(group: &'static SkillGroup) -> impl IntoView {
    view! {
        <Icon path=group.icon class="card-icon" />
        <h3 class="card-title">{group.title}</h3>
        <ul class="skill-list">
            {group.skills.iter().map(|skill| {
                view! {
                    <li class="skill">
                        <span class="skill-dot"></span>
                        {*skill}
                    </li>
                }
            }).collect::<Vec<_>>()}
        </ul>
    }
}
