//! Browser bindings for the hooks in [`crate::hooks`].
//!
//! Everything here only does work in the browser; during server rendering the
//! returned signals keep their initial values.

use leptos::{ev::KeyboardEvent, prelude::*};
use leptos_use::{use_event_listener, use_window};

use crate::{
    hooks::{menu_control, MenuControl},
    menu::{ScrollLock, SectionScroller},
};

#[cfg(feature = "hydrate")]
use super::dom;
#[cfg(feature = "hydrate")]
use crate::{
    content::HERO_ID,
    hooks::{use_active_section_with, use_nav_scrolled_with, use_scroll_reveal_with},
    reveal::{REVEAL_SELECTOR, VISIBLE_CLASS},
    viewport::dom::DomViewport,
};

pub type SiteMenu = MenuControl<BodyScrollLock>;

pub fn use_scroll_reveal() {
    #[cfg(feature = "hydrate")]
    use_scroll_reveal_with(
        DomViewport,
        || {
            dom::query_all(REVEAL_SELECTOR).unwrap_or_else(|e| {
                log::warn!("scroll reveal disabled: {e}");
                Vec::new()
            })
        },
        |el| {
            if let Err(e) = dom::add_class(el, VISIBLE_CLASS) {
                log::warn!("{e}");
            }
        },
    );
}

pub fn use_active_section(section_ids: Signal<Vec<String>>) -> ReadSignal<String> {
    #[cfg(feature = "hydrate")]
    let active = use_active_section_with(DomViewport, section_ids, dom::element_by_id);
    #[cfg(not(feature = "hydrate"))]
    let active = {
        let _ = section_ids;
        signal(String::new()).0
    };
    active
}

pub fn use_nav_scrolled() -> ReadSignal<bool> {
    #[cfg(feature = "hydrate")]
    let scrolled = use_nav_scrolled_with(DomViewport, || dom::element_by_id(HERO_ID));
    #[cfg(not(feature = "hydrate"))]
    let scrolled = signal(false).0;
    scrolled
}

/// Sets `overflow: hidden` on `<body>` while a guard is alive.
#[derive(Debug, Clone, Copy, Default)]
pub struct BodyScrollLock;

#[derive(Debug)]
pub struct BodyScrollGuard;

impl ScrollLock for BodyScrollLock {
    type Guard = BodyScrollGuard;

    fn lock(&self) -> BodyScrollGuard {
        set_body_overflow("hidden");
        BodyScrollGuard
    }
}

impl Drop for BodyScrollGuard {
    fn drop(&mut self) {
        set_body_overflow("");
    }
}

fn set_body_overflow(value: &str) {
    #[cfg(feature = "hydrate")]
    if let Err(e) = dom::set_body_overflow(value) {
        log::warn!("{e}");
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = value;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PageScroller;

impl SectionScroller for PageScroller {
    fn scroll_to(&self, id: &str) -> bool {
        #[cfg(feature = "hydrate")]
        let scrolled = dom::scroll_to_id(id);
        #[cfg(not(feature = "hydrate"))]
        let scrolled = {
            let _ = id;
            false
        };
        scrolled
    }
}

/// Menu state plus the global Escape listener, both released with the
/// calling component.
pub fn use_menu() -> SiteMenu {
    let control = menu_control(BodyScrollLock);

    let _ = use_event_listener(use_window(), leptos::ev::keydown, move |ev: KeyboardEvent| {
        control.handle_key(&ev.key());
    });

    control
}
