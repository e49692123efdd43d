use chrono::Datelike;
use leptos::prelude::*;

use crate::content::{copyright, CONTACT_EMAIL, CONTACT_LINKS, FOOTER_LINKS};

#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <section class="contact" id="contact" aria-label="Contact information">
            <h2 class="section__title reveal">"Let's " <span>"Connect"</span></h2>
            <p class="contact__subtitle reveal">
                "Open to roles, collaborations, and conversations about graphics programming and systems."
            </p>
            <div class="contact__buttons reveal">
                {CONTACT_LINKS
                    .iter()
                    .map(|link| {
                        let new_tab = link.opens_new_tab();
                        view! {
                            <a
                                href=link.href()
                                target=new_tab.then_some("_blank")
                                rel=new_tab.then_some("noopener noreferrer")
                                class="contact__button"
                            >
                                {link.label}
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
            <p class="contact__email reveal">{CONTACT_EMAIL}</p>
        </section>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    // read at render time so a long-running server rolls over with the calendar
    let year = chrono::Local::now().year();

    view! {
        <footer class="footer" role="contentinfo">
            <span class="footer__copyright">{copyright(year)}</span>
            <div class="footer__links">
                {FOOTER_LINKS
                    .iter()
                    .map(|link| {
                        view! {
                            <a
                                href=link.href
                                target="_blank"
                                rel="noopener noreferrer"
                                class="footer__link"
                            >
                                {link.label}
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </footer>
    }
}
