//! In-memory viewport host for driving the controllers in tests.
//!
//! Nothing is delivered until [`FakeViewport::flush`], mirroring the browser
//! queueing entries and notifying on a later task.

use std::{cell::RefCell, collections::VecDeque, rc::Rc};

use super::{Intersection, ObserverHandle, ObserverOptions, Subscription, ViewportObserver};

type Callback<T> = Box<dyn FnMut(&[Intersection<T>], &FakeHandle<T>)>;

struct Watch<T> {
    options: ObserverOptions,
    targets: Vec<T>,
    callback: Option<Callback<T>>,
    live: bool,
}

struct Inner<T> {
    in_view: Vec<(T, bool)>,
    watches: Vec<Watch<T>>,
    queue: VecDeque<(usize, Vec<Intersection<T>>)>,
}

impl<T: PartialEq> Inner<T> {
    fn is_in_view(&self, target: &T) -> bool {
        self.in_view
            .iter()
            .find(|(t, _)| t == target)
            .is_some_and(|(_, v)| *v)
    }
}

#[derive(Clone)]
pub struct FakeViewport<T> {
    inner: Rc<RefCell<Inner<T>>>,
}

pub struct FakeHandle<T> {
    inner: Rc<RefCell<Inner<T>>>,
    watch: usize,
}

impl<T: Clone + PartialEq + 'static> FakeViewport<T> {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                in_view: Vec::new(),
                watches: Vec::new(),
                queue: VecDeque::new(),
            })),
        }
    }

    pub fn set_in_view(&self, target: T, in_view: bool) {
        self.scroll(&[(target, in_view)]);
    }

    /// Apply several visibility changes at once. Every watch sees the changes
    /// to its own targets as one batch, in the order given.
    pub fn scroll(&self, changes: &[(T, bool)]) {
        let mut inner = self.inner.borrow_mut();
        for (target, in_view) in changes {
            match inner.in_view.iter_mut().find(|(t, _)| t == target) {
                Some(entry) => entry.1 = *in_view,
                None => inner.in_view.push((target.clone(), *in_view)),
            }
        }
        let mut batches = Vec::new();
        for (id, watch) in inner.watches.iter().enumerate() {
            if !watch.live {
                continue;
            }
            let batch = changes
                .iter()
                .filter(|(t, _)| watch.targets.contains(t))
                .map(|(t, v)| Intersection::new(t.clone(), *v))
                .collect::<Vec<_>>();
            if !batch.is_empty() {
                batches.push((id, batch));
            }
        }
        inner.queue.extend(batches);
    }

    /// Queue a raw batch for every live watch, bypassing the in-view model.
    pub fn deliver(&self, batch: Vec<Intersection<T>>) {
        let mut inner = self.inner.borrow_mut();
        let ids = inner
            .watches
            .iter()
            .enumerate()
            .filter(|(_, w)| w.live)
            .map(|(id, _)| id)
            .collect::<Vec<_>>();
        for id in ids {
            inner.queue.push_back((id, batch.clone()));
        }
    }

    /// Run every queued batch, including batches queued by callbacks.
    pub fn flush(&self) {
        loop {
            let next = self.inner.borrow_mut().queue.pop_front();
            let Some((id, batch)) = next else {
                break;
            };
            let taken = {
                let mut inner = self.inner.borrow_mut();
                let watch = &mut inner.watches[id];
                let batch = batch
                    .into_iter()
                    .filter(|e| watch.live && watch.targets.contains(&e.target))
                    .collect::<Vec<_>>();
                if batch.is_empty() {
                    None
                } else {
                    watch.callback.take().map(|cb| (cb, batch))
                }
            };
            let Some((mut callback, batch)) = taken else {
                continue;
            };
            let handle = FakeHandle {
                inner: self.inner.clone(),
                watch: id,
            };
            callback(&batch, &handle);
            let mut inner = self.inner.borrow_mut();
            let watch = &mut inner.watches[id];
            if watch.live {
                watch.callback = Some(callback);
            }
        }
    }

    pub fn live_watches(&self) -> usize {
        self.inner.borrow().watches.iter().filter(|w| w.live).count()
    }

    pub fn observed_by(&self, watch: usize) -> Vec<T> {
        self.inner.borrow().watches[watch].targets.clone()
    }

    pub fn options_of(&self, watch: usize) -> ObserverOptions {
        self.inner.borrow().watches[watch].options
    }
}

impl<T: Clone + PartialEq + 'static> ViewportObserver for FakeViewport<T> {
    type Handle = FakeHandle<T>;

    fn observe<F>(
        &self,
        targets: &[T],
        options: &ObserverOptions,
        callback: F,
    ) -> Subscription<FakeHandle<T>>
    where
        F: FnMut(&[Intersection<T>], &FakeHandle<T>) + 'static,
    {
        let mut inner = self.inner.borrow_mut();
        let initial = targets
            .iter()
            .map(|t| Intersection::new(t.clone(), inner.is_in_view(t)))
            .collect::<Vec<_>>();
        let id = inner.watches.len();
        inner.watches.push(Watch {
            options: *options,
            targets: targets.to_vec(),
            callback: Some(Box::new(callback)),
            live: true,
        });
        if !initial.is_empty() {
            inner.queue.push_back((id, initial));
        }
        Subscription::new(FakeHandle {
            inner: self.inner.clone(),
            watch: id,
        })
    }
}

impl<T: PartialEq> ObserverHandle for FakeHandle<T> {
    type Target = T;

    fn unobserve(&self, target: &T) {
        let mut inner = self.inner.borrow_mut();
        inner.watches[self.watch].targets.retain(|t| t != target);
    }

    fn disconnect(&self) {
        let callback = {
            let mut inner = self.inner.borrow_mut();
            let watch = &mut inner.watches[self.watch];
            watch.live = false;
            watch.targets.clear();
            watch.callback.take()
        };
        // captured state may hold other watches
        drop(callback);
    }
}
