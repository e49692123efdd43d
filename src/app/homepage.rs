use leptos::prelude::*;
use leptos_meta::Title;

use super::{
    about::About,
    contact::{Contact, Footer},
    hero::Hero,
    nav::Nav,
    observers::{use_active_section, use_menu, use_nav_scrolled, use_scroll_reveal},
    projects::Projects,
    skills::Skills,
};
use crate::content::{SECTION_IDS, SITE_OWNER};

#[component]
pub fn HomePage() -> impl IntoView {
    use_scroll_reveal();
    let active = use_active_section(Signal::derive(|| {
        SECTION_IDS.iter().map(|id| id.to_string()).collect()
    }));
    let scrolled = use_nav_scrolled();
    let menu = use_menu();

    view! {
        <Title text=format!("{SITE_OWNER} | Graphics & Full-Stack") />
        // keyboard users can jump past the nav
        <a href="#about" class="skip-link">
            "Skip to content"
        </a>
        <div class="animated-bg" aria-hidden="true" />

        <Nav menu active scrolled />

        <main class="portfolio" id="main">
            <Hero menu />
            <hr class="section-divider" />
            <About />
            <hr class="section-divider" />
            <Projects />
            <hr class="section-divider" />
            <Skills />
            <hr class="section-divider" />
            <Contact />
            <Footer />
        </main>
    }
}
