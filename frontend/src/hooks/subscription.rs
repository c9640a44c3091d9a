//! Scoped host subscriptions. Every listener or observer the page registers
//! is wrapped in a `Subscription` that releases it exactly once, either
//! through `dispose` or when dropped by an effect cleanup.

use std::cell::Cell;
use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Event;

use crate::error::PortfolioError;

/// Shared "still subscribed" flag. Callbacks check it so that an event already
/// queued by the browser when the subscription was released does nothing.
#[derive(Debug, Clone)]
pub struct ActiveFlag(Rc<Cell<bool>>);

impl ActiveFlag {
    pub fn new() -> Self {
        ActiveFlag(Rc::new(Cell::new(true)))
    }

    pub fn is_active(&self) -> bool {
        self.0.get()
    }

    fn deactivate(&self) {
        self.0.set(false);
    }

    /// Wraps `handler` so it only runs while the flag is active.
    pub fn guard<E>(&self, mut handler: impl FnMut(E)) -> impl FnMut(E) {
        let flag = self.clone();
        move |event| {
            if flag.is_active() {
                handler(event);
            }
        }
    }
}

impl Default for ActiveFlag {
    fn default() -> Self {
        Self::new()
    }
}

pub struct Subscription {
    active: ActiveFlag,
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(active: ActiveFlag, release: impl FnOnce() + 'static) -> Self {
        Subscription {
            active,
            release: Some(Box::new(release)),
        }
    }

    #[cfg(test)]
    pub fn is_active(&self) -> bool {
        self.active.is_active()
    }

    pub fn dispose(mut self) {
        self.release_now();
    }

    fn release_now(&mut self) {
        if let Some(release) = self.release.take() {
            self.active.deactivate();
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release_now();
    }
}

/// Cleanup for an effect that may not have subscribed.
pub fn release(subscription: Option<Subscription>) {
    if let Some(subscription) = subscription {
        subscription.dispose();
    }
}

/// Registers `handler` for `event` on the global window.
pub fn listen_window<E>(
    event: &'static str,
    handler: impl FnMut(E) + 'static,
) -> Result<Subscription, PortfolioError>
where
    E: JsCast + 'static,
{
    let window = web_sys::window().ok_or(PortfolioError::NoWindow)?;
    let active = ActiveFlag::new();
    let mut guarded = active.guard(handler);

    let callback = Closure::wrap(Box::new(move |event: Event| {
        if let Ok(event) = event.dyn_into::<E>() {
            guarded(event);
        }
    }) as Box<dyn FnMut(Event)>);

    window.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
    debug!("Listening for window {} events", event);

    Ok(Subscription::new(active, move || {
        match window.remove_event_listener_with_callback(event, callback.as_ref().unchecked_ref()) {
            Ok(()) => debug!("Removed window {} listener", event),
            Err(err) => warn!("Failed to remove window {} listener: {:?}", event, err),
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    fn counting_subscription() -> (Subscription, Rc<Cell<u32>>) {
        let releases = Rc::new(Cell::new(0));
        let counter = releases.clone();
        let subscription = Subscription::new(ActiveFlag::new(), move || counter.set(counter.get() + 1));
        (subscription, releases)
    }

    #[test]
    fn dispose_releases_exactly_once() {
        let (subscription, releases) = counting_subscription();
        assert!(subscription.is_active());
        subscription.dispose();
        assert_eq!(releases.get(), 1);
    }

    #[test]
    fn effect_cleanup_releases_once_or_not_at_all() {
        let (subscription, releases) = counting_subscription();
        release(Some(subscription));
        assert_eq!(releases.get(), 1);
        release(None);
        assert_eq!(releases.get(), 1);
    }

    #[test]
    fn drop_releases_on_early_teardown() {
        let (subscription, releases) = counting_subscription();
        {
            let _scoped = subscription;
        }
        assert_eq!(releases.get(), 1);
    }

    #[test]
    fn late_event_after_teardown_is_ignored() {
        let active = ActiveFlag::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let mut handler = active.guard(move |offset: f64| sink.borrow_mut().push(offset));

        let subscription = Subscription::new(active.clone(), || ());
        handler(10.0);
        subscription.dispose();
        handler(20.0);
        handler(30.0);

        assert_eq!(*seen.borrow(), vec![10.0]);
        assert!(!active.is_active());
    }
}
