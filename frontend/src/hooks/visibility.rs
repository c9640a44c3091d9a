use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use super::subscription::{release, ActiveFlag, Subscription};
use crate::config;
use crate::error::PortfolioError;

/// Share of an element that must intersect the viewport, in (0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Threshold(f64);

impl Threshold {
    pub fn new(ratio: f64) -> Result<Self, PortfolioError> {
        if ratio > 0.0 && ratio <= 1.0 {
            Ok(Threshold(ratio))
        } else {
            Err(PortfolioError::InvalidThreshold(ratio))
        }
    }

    pub fn ratio(self) -> f64 {
        self.0
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Threshold::new(config::DEFAULT_THRESHOLD).unwrap_or_else(|err| {
            warn!("{}, revealing on first intersection", err);
            Threshold(f64::MIN_POSITIVE)
        })
    }
}

/// Single-fire hidden → visible switch.
///
/// Elements that can never reach the threshold (for example a section taller
/// than the viewport with a threshold near 1) stay hidden for good; there is
/// no fallback trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RevealLatch {
    visible: bool,
}

impl RevealLatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Feeds one intersection report. Returns true only for the report that
    /// flips the latch.
    pub fn observe(&mut self, threshold: Threshold, ratio: f64, intersecting: bool) -> bool {
        if self.is_visible() {
            return false;
        }
        if intersecting && ratio >= threshold.ratio() {
            self.visible = true;
            return true;
        }
        false
    }
}

/// Invokes `on_reveal` once, the first time `element` crosses `threshold`.
/// The observer disconnects itself after firing; dropping the subscription
/// disconnects it earlier.
pub fn observe_visibility(
    element: &Element,
    threshold: Threshold,
    on_reveal: impl FnOnce() + 'static,
) -> Result<Subscription, PortfolioError> {
    let active = ActiveFlag::new();
    let guard = active.clone();
    let mut latch = RevealLatch::new();
    let mut on_reveal = Some(on_reveal);

    let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
        if !guard.is_active() {
            return;
        }
        for entry in entries.iter() {
            let entry: IntersectionObserverEntry = entry.unchecked_into();
            if latch.observe(threshold, entry.intersection_ratio(), entry.is_intersecting()) {
                debug!("Section crossed {} visibility, revealing", threshold.ratio());
                observer.disconnect();
                if let Some(reveal) = on_reveal.take() {
                    reveal();
                }
                break;
            }
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold.ratio()));
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    observer.observe(element);

    Ok(Subscription::new(active, move || {
        observer.disconnect();
        drop(callback);
    }))
}

/// Returns whether the element behind `node` has been revealed. Starts false
/// and latches to true; never reverts while the component stays mounted.
#[hook]
pub fn use_reveal(node: NodeRef, threshold: Threshold) -> bool {
    let revealed = use_state_eq(|| false);

    {
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |(node, threshold): &(NodeRef, Threshold)| {
                let subscription = node.cast::<Element>().and_then(|element| {
                    let setter = revealed.setter();
                    match observe_visibility(&element, *threshold, move || setter.set(true)) {
                        Ok(subscription) => Some(subscription),
                        Err(err) => {
                            warn!("Could not observe section visibility: {}", err);
                            None
                        }
                    }
                });
                move || release(subscription)
            },
            (node, threshold),
        );
    }

    *revealed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ten_percent() -> Threshold {
        Threshold::new(0.1).unwrap()
    }

    #[test]
    fn starts_hidden() {
        assert!(!RevealLatch::new().is_visible());
    }

    #[test]
    fn stays_hidden_below_threshold() {
        let mut latch = RevealLatch::new();
        assert!(!latch.observe(ten_percent(), 0.05, true));
        assert!(!latch.observe(ten_percent(), 0.0, false));
        assert!(!latch.is_visible());
    }

    #[test]
    fn fires_exactly_once_and_never_reverts() {
        let mut latch = RevealLatch::new();
        assert!(latch.observe(ten_percent(), 0.2, true));
        assert!(latch.is_visible());

        // Scrolled out and back in again.
        assert!(!latch.observe(ten_percent(), 0.0, false));
        assert!(!latch.observe(ten_percent(), 0.9, true));
        assert!(latch.is_visible());
    }

    #[test]
    fn ratio_at_threshold_counts_as_crossed() {
        let mut latch = RevealLatch::new();
        assert!(latch.observe(ten_percent(), 0.1, true));
    }

    #[test]
    fn non_intersecting_report_does_not_fire_even_with_ratio() {
        let mut latch = RevealLatch::new();
        assert!(!latch.observe(ten_percent(), 0.5, false));
        assert!(!latch.is_visible());
    }

    // Known limitation: a tall element whose visible share tops out below the
    // threshold is never revealed.
    #[test]
    fn element_that_never_reaches_threshold_stays_hidden() {
        let strict = Threshold::new(1.0).unwrap();
        let mut latch = RevealLatch::new();
        for ratio in [0.1, 0.4, 0.6, 0.6, 0.4, 0.0] {
            latch.observe(strict, ratio, ratio > 0.0);
        }
        assert!(!latch.is_visible());
    }

    #[test]
    fn threshold_must_be_in_unit_interval() {
        assert!(Threshold::new(1.0).is_ok());
        assert!(matches!(Threshold::new(0.0), Err(PortfolioError::InvalidThreshold(_))));
        assert!(Threshold::new(1.5).is_err());
        assert!(Threshold::new(f64::NAN).is_err());
        assert_eq!(Threshold::default().ratio(), config::DEFAULT_THRESHOLD);
    }
}
