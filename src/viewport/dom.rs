use js_sys::Array;
use wasm_bindgen::{prelude::Closure, JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::{Intersection, ObserverHandle, ObserverOptions, Subscription, ViewportObserver};

type EntriesCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Browser `IntersectionObserver` host. Every call to `observe` creates a
/// new observer instance.
#[derive(Debug, Clone, Copy, Default)]
pub struct DomViewport;

pub struct DomHandle {
    observer: IntersectionObserver,
    // Only the handle owned by a `Subscription` keeps the JS callback alive.
    _callback: Option<EntriesCallback>,
}

impl ViewportObserver for DomViewport {
    type Handle = DomHandle;

    fn observe<F>(
        &self,
        targets: &[Element],
        options: &ObserverOptions,
        mut callback: F,
    ) -> Subscription<DomHandle>
    where
        F: FnMut(&[Intersection<Element>], &DomHandle) + 'static,
    {
        let closure = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, observer: IntersectionObserver| {
                let batch = entries
                    .iter()
                    .map(|v| {
                        let entry = v.unchecked_into::<IntersectionObserverEntry>();
                        Intersection::new(entry.target(), entry.is_intersecting())
                    })
                    .collect::<Vec<_>>();
                let handle = DomHandle {
                    observer,
                    _callback: None,
                };
                callback(&batch, &handle);
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold));
        init.set_root_margin(&options.root_margin.to_string());

        // The constructor only throws for malformed margins or thresholds,
        // which are compile-time constants here.
        let observer =
            IntersectionObserver::new_with_options(closure.as_ref().unchecked_ref(), &init)
                .expect("intersection observer options should be valid");
        for target in targets {
            observer.observe(target);
        }
        log::trace!(
            "observing {} element(s) with margin {}",
            targets.len(),
            options.root_margin
        );

        Subscription::new(DomHandle {
            observer,
            _callback: Some(closure),
        })
    }
}

impl ObserverHandle for DomHandle {
    type Target = Element;

    fn unobserve(&self, target: &Element) {
        self.observer.unobserve(target);
    }

    fn disconnect(&self) {
        self.observer.disconnect();
    }
}
