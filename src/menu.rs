//! Mobile navigation menu state.
//!
//! While the menu is open a [`ScrollLock`] guard is held inside [`Menu`], so
//! every way of closing the menu (or dropping it) releases the page scroll.

pub const ESCAPE_KEY: &str = "Escape";

/// Something that can stop the page from scrolling.
pub trait ScrollLock {
    /// Released on drop.
    type Guard;

    fn lock(&self) -> Self::Guard;
}

/// Scrolls the viewport to an in-page section.
pub trait SectionScroller {
    /// Returns `false` when no element has the given id.
    fn scroll_to(&self, id: &str) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavClick {
    Scrolled,
    /// The target section doesn't exist; only the menu was closed.
    MissingTarget,
}

pub struct Menu<L: ScrollLock> {
    locker: L,
    lock: Option<L::Guard>,
}

impl<L: ScrollLock> Menu<L> {
    pub fn new(locker: L) -> Self {
        Self { locker, lock: None }
    }

    pub fn is_open(&self) -> bool {
        self.lock.is_some()
    }

    pub fn open(&mut self) {
        if self.lock.is_none() {
            self.lock = Some(self.locker.lock());
        }
    }

    pub fn close(&mut self) {
        self.lock = None;
    }

    pub fn toggle(&mut self) {
        if self.is_open() {
            self.close();
        } else {
            self.open();
        }
    }

    /// Returns whether the key changed anything.
    pub fn handle_key(&mut self, key: &str) -> bool {
        if key != ESCAPE_KEY || !self.is_open() {
            return false;
        }
        self.close();
        true
    }

    pub fn handle_nav_click(&mut self, target: &str, scroller: &impl SectionScroller) -> NavClick {
        self.close();
        if scroller.scroll_to(target) {
            NavClick::Scrolled
        } else {
            log::debug!("no section with id {target}");
            NavClick::MissingTarget
        }
    }
}

pub fn hamburger_class(open: bool) -> &'static str {
    if open {
        "nav__hamburger nav__hamburger--open"
    } else {
        "nav__hamburger"
    }
}

pub fn links_class(open: bool) -> &'static str {
    if open {
        "nav__links nav__links--open"
    } else {
        "nav__links"
    }
}

pub fn overlay_class(open: bool) -> &'static str {
    if open {
        "nav__overlay nav__overlay--visible"
    } else {
        "nav__overlay"
    }
}

pub fn toggle_label(open: bool) -> &'static str {
    if open {
        "Close menu"
    } else {
        "Open menu"
    }
}
