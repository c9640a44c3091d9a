use log::warn;
use web_sys::MouseEvent;
use yew::prelude::*;

use super::subscription::{listen_window, release};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

impl PointerPosition {
    /// Offset from `origin`, scaled down by `damping` and capped at `limit` px per axis.
    pub fn nudge(&self, origin: PointerPosition, damping: f64, limit: f64) -> (f64, f64) {
        let clamp = |delta: f64| (delta / damping).clamp(-limit, limit);
        (clamp(self.x - origin.x), clamp(self.y - origin.y))
    }
}

/// Last known pointer position in client coordinates. One `mousemove`
/// listener per mounted caller, removed on unmount.
#[hook]
pub fn use_pointer_position() -> PointerPosition {
    let position = use_state_eq(PointerPosition::default);

    {
        let position = position.clone();
        use_effect_with_deps(
            move |_| {
                let setter = position.setter();
                let subscription = match listen_window("mousemove", move |e: MouseEvent| {
                    setter.set(PointerPosition {
                        x: f64::from(e.client_x()),
                        y: f64::from(e.client_y()),
                    });
                }) {
                    Ok(subscription) => Some(subscription),
                    Err(err) => {
                        warn!("Pointer tracking unavailable: {}", err);
                        None
                    }
                };
                move || release(subscription)
            },
            (),
        );
    }

    *position
}
