use leptos::prelude::*;

use super::{nav::SectionLink, observers::SiteMenu};
use crate::content::{HERO_ID, SITE_OWNER};

#[component]
pub fn Hero(menu: SiteMenu) -> impl IntoView {
    view! {
        <section class="hero" id=HERO_ID aria-label="Introduction">
            <div class="hero__content">
                <p class="hero__status">"Graphics Engineer · Open to Opportunities"</p>
                <h1>{SITE_OWNER}</h1>
                <p class="hero__title">"Graphics Programmer & Full-Stack Developer"</p>
                <p class="hero__tagline">
                    "I write ray tracers from scratch, build multiplayer servers with raw sockets, and ship full-stack web apps."
                </p>
                <div class="hero__ctas">
                    <SectionLink menu target="projects" class="hero__cta hero__cta--primary">
                        "View Projects"
                    </SectionLink>
                    <SectionLink menu target="contact" class="hero__cta hero__cta--secondary">
                        "Get in Touch"
                    </SectionLink>
                </div>
            </div>
        </section>
    }
}
