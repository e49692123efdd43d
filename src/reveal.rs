//! One-shot scroll reveal.
//!
//! Elements carrying one of [`REVEAL_CLASSES`] get [`VISIBLE_CLASS`] the first
//! time they enter the viewport and are then dropped from the observer.

use crate::viewport::{
    Inset, ObserverHandle, ObserverOptions, RootMargin, Subscription, Target, ViewportObserver,
};

pub const REVEAL_CLASSES: [&str; 4] = ["reveal", "reveal-left", "reveal-right", "reveal-stagger"];
pub const REVEAL_SELECTOR: &str = ".reveal, .reveal-left, .reveal-right, .reveal-stagger";
pub const VISIBLE_CLASS: &str = "visible";

pub const REVEAL_OPTIONS: ObserverOptions = ObserverOptions {
    threshold: 0.1,
    // fire a little before the element is fully on screen
    root_margin: RootMargin::ZERO.bottom(Inset::Px(-50)),
};

/// Start revealing `targets`. `on_reveal` runs at most once per target.
pub fn watch_reveals<O, F>(
    observer: &O,
    targets: &[Target<O>],
    mut on_reveal: F,
) -> Subscription<O::Handle>
where
    O: ViewportObserver,
    Target<O>: Clone + PartialEq + 'static,
    F: FnMut(&Target<O>) + 'static,
{
    let mut revealed: Vec<Target<O>> = Vec::new();
    observer.observe(targets, &REVEAL_OPTIONS, move |batch, handle| {
        for entry in batch.iter().filter(|e| e.is_intersecting) {
            if revealed.contains(&entry.target) {
                continue;
            }
            on_reveal(&entry.target);
            handle.unobserve(&entry.target);
            revealed.push(entry.target.clone());
        }
    })
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use super::*;
    use crate::viewport::{fake::FakeViewport, Intersection};

    type Visible = Rc<RefCell<Vec<&'static str>>>;

    fn setup() -> (FakeViewport<&'static str>, Visible) {
        (FakeViewport::new(), Rc::new(RefCell::new(Vec::new())))
    }

    #[test]
    fn test_reveal_options() {
        assert_eq!(REVEAL_OPTIONS.threshold, 0.1);
        assert_eq!(REVEAL_OPTIONS.root_margin.to_string(), "0px 0px -50px 0px");
        for class in REVEAL_CLASSES {
            assert!(REVEAL_SELECTOR.contains(&format!(".{class}")));
        }
    }

    #[test]
    fn test_nothing_visible_at_mount_when_offscreen() {
        let (viewport, visible) = setup();
        let log = visible.clone();
        let _sub = watch_reveals(&viewport, &["title", "cards"], move |t| {
            log.borrow_mut().push(*t)
        });
        viewport.flush();
        assert!(visible.borrow().is_empty());
        assert_eq!(viewport.observed_by(0), vec!["title", "cards"]);
    }

    #[test]
    fn test_already_onscreen_revealed_by_initial_scan() {
        let (viewport, visible) = setup();
        viewport.set_in_view("title", true);
        let log = visible.clone();
        let _sub = watch_reveals(&viewport, &["title", "cards"], move |t| {
            log.borrow_mut().push(*t)
        });
        viewport.flush();
        assert_eq!(*visible.borrow(), vec!["title"]);
        assert_eq!(viewport.observed_by(0), vec!["cards"]);
    }

    #[test]
    fn test_reveal_is_one_shot() {
        let (viewport, visible) = setup();
        let log = visible.clone();
        let _sub = watch_reveals(&viewport, &["title"], move |t| log.borrow_mut().push(*t));
        viewport.flush();

        viewport.set_in_view("title", true);
        viewport.flush();
        viewport.set_in_view("title", false);
        viewport.set_in_view("title", true);
        viewport.flush();

        assert_eq!(*visible.borrow(), vec!["title"]);
        assert!(viewport.observed_by(0).is_empty());
    }

    #[test]
    fn test_duplicate_entries_in_batch_reveal_once() {
        let (viewport, visible) = setup();
        let log = visible.clone();
        let _sub = watch_reveals(&viewport, &["a", "b"], move |t| log.borrow_mut().push(*t));
        viewport.flush();

        viewport.deliver(vec![
            Intersection::new("a", true),
            Intersection::new("a", true),
            Intersection::new("b", false),
        ]);
        viewport.flush();
        assert_eq!(*visible.borrow(), vec!["a"]);
        assert_eq!(viewport.observed_by(0), vec!["b"]);
    }

    #[test]
    fn test_teardown_disconnects_with_pending_targets() {
        let (viewport, visible) = setup();
        let log = visible.clone();
        let sub = watch_reveals(&viewport, &["a", "b"], move |t| log.borrow_mut().push(*t));
        viewport.set_in_view("a", true);
        viewport.flush();
        assert_eq!(viewport.live_watches(), 1);

        drop(sub);
        assert_eq!(viewport.live_watches(), 0);
        viewport.set_in_view("b", true);
        viewport.flush();
        assert_eq!(*visible.borrow(), vec!["a"]);
    }
}
