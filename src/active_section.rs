//! Tracks which page section is "in focus" for nav highlighting.

use crate::viewport::{
    Inset, Intersection, ObserverOptions, RootMargin, Subscription, Target, ViewportObserver,
};

/// Height of the fixed nav bar, excluded from the top of the viewport.
pub const NAV_HEIGHT_PX: i32 = 64;

pub const SECTION_OPTIONS: ObserverOptions = ObserverOptions {
    threshold: 0.3,
    // only the upper half of the viewport below the nav counts
    root_margin: RootMargin::ZERO
        .top(Inset::Px(-NAV_HEIGHT_PX))
        .bottom(Inset::Percent(-50)),
};

/// How to choose between several sections qualifying in the same batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TieBreak {
    /// The last intersecting entry in the batch wins.
    #[default]
    LastInBatch,
    /// The qualifying section that comes first in the tracked list wins.
    DocumentOrder,
}

#[derive(Debug, Clone)]
pub struct SectionTracker<T> {
    sections: Vec<(String, T)>,
    active: String,
    tie_break: TieBreak,
}

impl<T: PartialEq> SectionTracker<T> {
    pub fn new(sections: Vec<(String, T)>, tie_break: TieBreak) -> Self {
        Self {
            sections,
            active: String::new(),
            tie_break,
        }
    }

    /// Empty until some section has qualified.
    pub fn active(&self) -> &str {
        &self.active
    }

    pub fn targets(&self) -> impl Iterator<Item = &T> {
        self.sections.iter().map(|(_, t)| t)
    }

    fn position(&self, target: &T) -> Option<usize> {
        self.sections.iter().position(|(_, t)| t == target)
    }

    /// Apply one batch. Returns the new active id when it changed.
    pub fn apply(&mut self, batch: &[Intersection<T>]) -> Option<&str> {
        let qualifying = batch
            .iter()
            .filter(|e| e.is_intersecting)
            .filter_map(|e| self.position(&e.target));
        let winner = match self.tie_break {
            TieBreak::LastInBatch => qualifying.last(),
            TieBreak::DocumentOrder => qualifying.min(),
        }?;
        let id = &self.sections[winner].0;
        if *id == self.active {
            return None;
        }
        self.active = id.clone();
        Some(self.active.as_str())
    }
}

pub fn nav_link_class(active: &str, id: &str) -> &'static str {
    if active == id {
        "nav__link nav__link--active"
    } else {
        "nav__link"
    }
}

/// Watch `sections` and report every change of the active section id.
pub fn track_active_section<O, F>(
    observer: &O,
    sections: Vec<(String, Target<O>)>,
    tie_break: TieBreak,
    mut on_change: F,
) -> Subscription<O::Handle>
where
    O: ViewportObserver,
    Target<O>: Clone + PartialEq + 'static,
    F: FnMut(&str) + 'static,
{
    let mut tracker = SectionTracker::new(sections, tie_break);
    let targets = tracker.targets().cloned().collect::<Vec<_>>();
    observer.observe(&targets, &SECTION_OPTIONS, move |batch, _| {
        if let Some(id) = tracker.apply(batch) {
            log::debug!("active section: {id}");
            on_change(id);
        }
    })
}
