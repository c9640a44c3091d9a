use log::warn;
use web_sys::Event;
use yew::prelude::*;

use super::subscription::{listen_window, release};

fn current_scroll_y() -> f64 {
    web_sys::window()
        .and_then(|window| window.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Vertical page scroll offset, refreshed on every scroll event.
#[hook]
pub fn use_scroll_y() -> f64 {
    let offset = use_state_eq(|| 0.0_f64);

    {
        let offset = offset.clone();
        use_effect_with_deps(
            move |_| {
                let setter = offset.setter();
                // Initial check
                setter.set(current_scroll_y());

                let subscription = match listen_window("scroll", move |_: Event| setter.set(current_scroll_y())) {
                    Ok(subscription) => Some(subscription),
                    Err(err) => {
                        warn!("Scroll tracking unavailable: {}", err);
                        None
                    }
                };
                move || release(subscription)
            },
            (),
        );
    }

    *offset
}
