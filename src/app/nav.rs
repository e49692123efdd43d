use leptos::prelude::*;

use super::observers::{PageScroller, SiteMenu};
use crate::{
    active_section::nav_link_class,
    config::SITE,
    content::{HERO_ID, NAV_LINKS, RESUME_FILE, SITE_LOGO, SITE_OWNER},
    menu::{hamburger_class, links_class, overlay_class, toggle_label},
    nav_visibility::nav_class,
};

/// In-page anchor that closes the menu and smooth-scrolls instead of jumping.
#[component]
pub fn SectionLink(
    menu: SiteMenu,
    target: &'static str,
    #[prop(into)] class: Signal<String>,
    #[prop(optional)] label: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <a
            href=format!("#{target}")
            class=move || class.get()
            aria-label=label
            on:click=move |ev| {
                ev.prevent_default();
                menu.nav_click(target, &PageScroller);
            }
        >
            {children()}
        </a>
    }
}

#[component]
pub fn Nav(
    menu: SiteMenu,
    active: ReadSignal<String>,
    scrolled: ReadSignal<bool>,
) -> impl IntoView {
    let open = menu.is_open();
    let resume_url = SITE.asset_url(RESUME_FILE);

    view! {
        <nav
            class=move || nav_class(scrolled.get())
            role="navigation"
            aria-label="Main navigation"
        >
            <div class="nav__inner">
                <SectionLink
                    menu
                    target=HERO_ID
                    class="nav__logo"
                    label=format!("{SITE_OWNER} \u{2014} scroll to top")
                >
                    {SITE_LOGO}
                </SectionLink>

                <button
                    class=move || hamburger_class(open.get())
                    on:click=move |_| menu.toggle()
                    aria-label=move || toggle_label(open.get())
                    aria-expanded=move || if open.get() { "true" } else { "false" }
                >
                    <span aria-hidden="true" />
                    <span aria-hidden="true" />
                    <span aria-hidden="true" />
                </button>

                <ul class=move || links_class(open.get())>
                    {NAV_LINKS
                        .iter()
                        .map(|link| {
                            let id = link.id;
                            view! {
                                <li>
                                    <SectionLink
                                        menu
                                        target=id
                                        class=Signal::derive(move || {
                                            active.with(|a| nav_link_class(a, id)).to_string()
                                        })
                                    >
                                        {link.label}
                                    </SectionLink>
                                </li>
                            }
                        })
                        .collect_view()}
                    <li>
                        <a
                            href=resume_url
                            class="nav__resume"
                            target="_blank"
                            rel="noopener noreferrer"
                        >
                            "Resume"
                        </a>
                    </li>
                </ul>
            </div>
        </nav>

        <div
            class=move || overlay_class(open.get())
            on:click=move |_| menu.close()
            aria-hidden="true"
        />
    }
}
