use leptos::prelude::*;

use crate::content::PROJECTS;
use crate::motion::Reveal;
use crate::tracker::SectionId;

#[component]
pub fn ProjectsSection() -> impl IntoView {
    view! {
        <section id=SectionId::Projects.anchor() class="section projects">
            <div class="container">
                <h2 class="section-title">"Notable Projects"</h2>
                <div class="projects-grid">
                    {PROJECTS.iter().enumerate().map(|(index, project)| {
                        view! {
                            <Reveal index=index class="card">
                                <h3 class="card-title">{project.title}</h3>
                                <p class="project-tech">{project.tech}</p>
                            </Reveal>
                        }
                    }).collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}
