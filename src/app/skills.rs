use leptos::prelude::*;

use crate::content::SKILLS;

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <section class="section" id="skills" aria-label="Skills and tools">
            <h2 class="section__title reveal">"Skills & " <span>"Tools"</span></h2>
            <div class="skills-grid reveal-stagger">
                {SKILLS
                    .iter()
                    .map(|group| {
                        view! {
                            <div class="skill-card">
                                <div class="skill-card__icon" aria-hidden="true">
                                    {group.icon}
                                </div>
                                <h3 class="skill-card__title">{group.title}</h3>
                                <div class="skill-card__tags">
                                    {group
                                        .tags
                                        .iter()
                                        .map(|tag| view! { <span class="skill-card__tag">{*tag}</span> })
                                        .collect_view()}
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
