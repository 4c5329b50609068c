use leptos::prelude::*;

use crate::content::JOBS;
use crate::motion::Reveal;
use crate::tracker::SectionId;

#[component]
pub fn ExperienceSection() -> impl IntoView {
    view! {
        <section id=SectionId::Experience.anchor() class="section experience">
            <div class="container">
                <h2 class="section-title">"Professional Experience"</h2>
                <div class="job-list">
                    {JOBS.iter().enumerate().map(|(index, job)| {
                        view! {
                            <Reveal index=index class="card">
                                <h3 class="card-title">{job.title}</h3>
                                <p class="job-company">{job.company}</p>
                                <p class="job-period">{job.period}</p>
                            </Reveal>
                        }
                    }).collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}
