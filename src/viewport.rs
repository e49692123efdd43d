//! Viewport intersection watching.
//!
//! The controllers in this crate only see [`Intersection`] batches and an
//! [`ObserverHandle`]; the browser binding lives in `dom` and a
//! deterministic host for tests lives in `fake`.

#[cfg(feature = "hydrate")]
pub mod dom;
#[cfg(test)]
pub mod fake;

use std::fmt;

/// One side of a root margin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Inset {
    Px(i32),
    Percent(i32),
}

impl fmt::Display for Inset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Inset::Px(v) => write!(f, "{v}px"),
            Inset::Percent(v) => write!(f, "{v}%"),
        }
    }
}

/// Grows (positive) or shrinks (negative) the viewport box before
/// intersections are computed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RootMargin {
    pub top: Inset,
    pub right: Inset,
    pub bottom: Inset,
    pub left: Inset,
}

impl RootMargin {
    pub const ZERO: RootMargin = RootMargin {
        top: Inset::Px(0),
        right: Inset::Px(0),
        bottom: Inset::Px(0),
        left: Inset::Px(0),
    };

    pub const fn top(mut self, inset: Inset) -> Self {
        self.top = inset;
        self
    }

    pub const fn bottom(mut self, inset: Inset) -> Self {
        self.bottom = inset;
        self
    }
}

impl Default for RootMargin {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for RootMargin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.top, self.right, self.bottom, self.left)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserverOptions {
    /// Fraction of the target that must be visible, `0.0..=1.0`.
    pub threshold: f64,
    pub root_margin: RootMargin,
}

/// A single visibility change reported by the host.
#[derive(Debug, Clone, PartialEq)]
pub struct Intersection<T> {
    pub target: T,
    pub is_intersecting: bool,
}

impl<T> Intersection<T> {
    pub fn new(target: T, is_intersecting: bool) -> Self {
        Self {
            target,
            is_intersecting,
        }
    }
}

/// Control over a live watch, handed to callbacks and held by [`Subscription`].
pub trait ObserverHandle {
    type Target;

    /// Stop delivering events for one target.
    fn unobserve(&self, target: &Self::Target);

    /// Stop delivering events for every target.
    fn disconnect(&self);
}

pub type Target<O> = <<O as ViewportObserver>::Handle as ObserverHandle>::Target;

pub trait ViewportObserver {
    type Handle: ObserverHandle;

    /// Watch `targets`, calling `callback` with every batch of entries the
    /// host delivers. Entries inside a batch keep the host's order.
    ///
    /// Hosts deliver an initial batch for every target once observation
    /// starts, so targets already on screen are reported too.
    fn observe<F>(
        &self,
        targets: &[Target<Self>],
        options: &ObserverOptions,
        callback: F,
    ) -> Subscription<Self::Handle>
    where
        F: FnMut(&[Intersection<Target<Self>>], &Self::Handle) + 'static;
}

/// Guard for a watch. Dropping it disconnects the observer.
#[must_use = "dropping a subscription stops observation"]
pub struct Subscription<H: ObserverHandle> {
    handle: H,
}

impl<H: ObserverHandle> Subscription<H> {
    pub fn new(handle: H) -> Self {
        Self { handle }
    }

    pub fn handle(&self) -> &H {
        &self.handle
    }

    pub fn unobserve(&self, target: &H::Target) {
        self.handle.unobserve(target);
    }
}

impl<H: ObserverHandle> Drop for Subscription<H> {
    fn drop(&mut self) {
        self.handle.disconnect();
    }
}

impl<H: ObserverHandle> fmt::Debug for Subscription<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").finish_non_exhaustive()
    }
}
