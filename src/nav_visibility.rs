use crate::{
    active_section::NAV_HEIGHT_PX,
    viewport::{Inset, ObserverOptions, RootMargin, Subscription, Target, ViewportObserver},
};

pub const HERO_OPTIONS: ObserverOptions = ObserverOptions {
    threshold: 0.0,
    root_margin: RootMargin::ZERO.top(Inset::Px(-NAV_HEIGHT_PX)),
};

pub fn nav_class(scrolled: bool) -> &'static str {
    if scrolled {
        "nav nav--scrolled"
    } else {
        "nav"
    }
}

/// Watch the hero banner. `on_change` receives `true` once the hero has
/// scrolled out from under the nav bar and `false` when it is back.
pub fn watch_hero<O, F>(observer: &O, hero: Target<O>, mut on_change: F) -> Subscription<O::Handle>
where
    O: ViewportObserver,
    F: FnMut(bool) + 'static,
{
    let mut scrolled = false;
    observer.observe(&[hero], &HERO_OPTIONS, move |batch, _| {
        // the latest entry describes the current state
        let Some(entry) = batch.last() else {
            return;
        };
        let now = !entry.is_intersecting;
        if now != scrolled {
            scrolled = now;
            log::debug!("nav scrolled: {scrolled}");
        }
        on_change(scrolled);
    })
}
