use leptos::prelude::*;

use crate::{
    config::SITE,
    content::{Project, PROJECTS},
};

#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <section class="section" id="projects" aria-label="Featured projects">
            <h2 class="section__title reveal">"Featured " <span>"Projects"</span></h2>
            <div class="project-grid reveal-stagger">
                {PROJECTS
                    .iter()
                    .map(|project| view! { <ProjectCard project=*project /> })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    let image = project.image.map(|file| {
        view! {
            <div class="project-card__image-wrap">
                <img
                    src=SITE.asset_url(file)
                    alt=format!("Screenshot of {}", project.title)
                    class="project-card__image"
                    loading="lazy"
                    width="800"
                    height="600"
                />
            </div>
        }
    });
    let badge = project.badge.map(|badge| {
        view! {
            <span class="project-card__badge" aria-label=badge>
                <span class="project-card__badge-dot" aria-hidden="true" />
                {badge}
            </span>
        }
    });
    let link = project.link.map(|link| {
        view! {
            <a
                href=link.href
                target="_blank"
                rel="noopener noreferrer"
                class="project-card__link"
            >
                {link.label}
                <span class="project-card__link-arrow" aria-hidden="true">
                    "→"
                </span>
            </a>
        }
    });

    view! {
        <article class=project.card_class()>
            {image}
            <div class="project-card__body">
                <div class="project-card__header">
                    <h3 class="project-card__title">{project.title}</h3>
                    {badge}
                </div>
                <p class="project-card__description">{project.description}</p>
                <div class="project-card__tech" aria-label="Technologies used">
                    {project
                        .tech
                        .iter()
                        .map(|t| view! { <span class="project-card__tech-pill">{*t}</span> })
                        .collect_view()}
                </div>
                {link}
            </div>
        </article>
    }
}
