//! Reactive glue that ties the scroll controllers to a component's lifetime.
//!
//! Each hook takes the host it runs against, so the page passes the browser
//! viewport and tests pass the in-memory one. Subscriptions are dropped when
//! the owning effect re-runs or the owner is cleaned up.

use leptos::prelude::*;

use crate::{
    active_section::{track_active_section, TieBreak},
    menu::{Menu, NavClick, ScrollLock, SectionScroller},
    nav_visibility::watch_hero,
    reveal::watch_reveals,
    viewport::{Target, ViewportObserver},
};

/// Keep `value` alive until the current owner is cleaned up.
pub fn hold_until_cleanup<T: 'static>(value: T) {
    let held = StoredValue::new_local(Some(value));
    on_cleanup(move || {
        held.try_update_value(|v| drop(v.take()));
    });
}

/// Reveal whatever `targets` returns once the page is mounted.
pub fn use_scroll_reveal_with<O, T, F>(observer: O, targets: T, on_reveal: F)
where
    O: ViewportObserver + 'static,
    Target<O>: Clone + PartialEq + 'static,
    T: Fn() -> Vec<Target<O>> + 'static,
    F: Fn(&Target<O>) + Clone + 'static,
{
    Effect::new(move |_| {
        let sub = watch_reveals(&observer, &targets(), on_reveal.clone());
        hold_until_cleanup(sub);
    });
}

/// The id of the section currently in focus, `""` until one qualifies.
///
/// `resolve` maps an id to its element; ids it can't resolve are skipped.
/// A new id list tears down the previous watch before observing again.
pub fn use_active_section_with<O, R>(
    observer: O,
    section_ids: Signal<Vec<String>>,
    resolve: R,
) -> ReadSignal<String>
where
    O: ViewportObserver + 'static,
    Target<O>: Clone + PartialEq + 'static,
    R: Fn(&str) -> Option<Target<O>> + 'static,
{
    let (active, set_active) = signal(String::new());

    Effect::new(move |_| {
        let sections = section_ids
            .get()
            .into_iter()
            .filter_map(|id| resolve(&id).map(|target| (id, target)))
            .collect::<Vec<_>>();
        let sub = track_active_section(&observer, sections, TieBreak::default(), move |id| {
            set_active.set(id.to_string())
        });
        hold_until_cleanup(sub);
    });

    active
}

/// `true` once the hero has scrolled out from under the nav bar.
pub fn use_nav_scrolled_with<O, R>(observer: O, hero: R) -> ReadSignal<bool>
where
    O: ViewportObserver + 'static,
    R: Fn() -> Option<Target<O>> + 'static,
{
    let (scrolled, set_scrolled) = signal(false);

    Effect::new(move |_| {
        let Some(hero) = hero() else {
            return;
        };
        let sub = watch_hero(&observer, hero, move |s| set_scrolled.set(s));
        hold_until_cleanup(sub);
    });

    scrolled
}

/// Reactive handle to the mobile menu. Cheap to copy into event handlers.
pub struct MenuControl<L: ScrollLock> {
    state: StoredValue<Menu<L>>,
    open: RwSignal<bool>,
}

impl<L: ScrollLock> Clone for MenuControl<L> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<L: ScrollLock> Copy for MenuControl<L> {}

impl<L> MenuControl<L>
where
    L: ScrollLock + Send + Sync + 'static,
    L::Guard: Send + Sync + 'static,
{
    pub fn is_open(&self) -> Signal<bool> {
        self.open.into()
    }

    pub fn toggle(&self) {
        self.apply(Menu::toggle);
    }

    pub fn close(&self) {
        self.apply(Menu::close);
    }

    /// Close the menu and scroll to `target`. The caller suppresses the
    /// anchor's default navigation. `None` once the owner is gone.
    pub fn nav_click(&self, target: &str, scroller: &impl SectionScroller) -> Option<NavClick> {
        self.apply(|m| m.handle_nav_click(target, scroller))
    }

    /// `Some(true)` when the key dismissed the menu.
    pub fn handle_key(&self, key: &str) -> Option<bool> {
        let dismissed = self.apply(|m| m.handle_key(key));
        if dismissed == Some(true) {
            log::debug!("menu dismissed with {key}");
        }
        dismissed
    }

    fn apply<R>(&self, f: impl FnOnce(&mut Menu<L>) -> R) -> Option<R> {
        let (res, open) = self.state.try_update_value(|m| {
            let res = f(m);
            (res, m.is_open())
        })?;
        let _ = self.open.try_set(open);
        Some(res)
    }
}

/// Menu state owned by the current component. Cleanup closes the menu, which
/// releases the scroll lock.
pub fn menu_control<L>(locker: L) -> MenuControl<L>
where
    L: ScrollLock + Send + Sync + 'static,
    L::Guard: Send + Sync + 'static,
{
    let control = MenuControl {
        state: StoredValue::new(Menu::new(locker)),
        open: RwSignal::new(false),
    };
    on_cleanup(move || control.close());
    control
}
