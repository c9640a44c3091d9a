use std::fmt::Write;

use super::variant::{Easing, MotionState};

/// An infinitely repeating animation through evenly spaced keyframes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyframeLoop {
    pub frames: &'static [MotionState],
    pub duration_ms: u32,
    pub easing: Easing,
}

impl KeyframeLoop {
    /// `@keyframes` rule named `name`.
    pub fn keyframes_css(&self, name: &str) -> String {
        keyframes_rule(name, self.frames)
    }

    /// `animation` shorthand for one element, with its own duration and phase.
    pub fn animation_css(&self, name: &str, duration_ms: u32, delay_ms: u32) -> String {
        format!(
            "{} {}ms {} {}ms infinite",
            name,
            duration_ms,
            self.easing.css(),
            delay_ms
        )
    }
}

/// Spreads `frames` evenly from 0% to 100%.
pub fn keyframes_rule(name: &str, frames: &[MotionState]) -> String {
    let mut out = format!("@keyframes {} {{", name);
    let steps = frames.len().saturating_sub(1).max(1);
    for (i, frame) in frames.iter().enumerate() {
        let percent = i as f64 * 100.0 / steps as f64;
        let _ = write!(out, " {}% {{ {} }}", percent, frame.css());
    }
    out.push_str(" }");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOB: KeyframeLoop = KeyframeLoop {
        frames: &[
            MotionState::REST,
            MotionState::REST.with_offset(0.0, -10.0),
            MotionState::REST,
        ],
        duration_ms: 3000,
        easing: Easing::EaseInOut,
    };

    #[test]
    fn frames_are_spread_from_zero_to_hundred_percent() {
        let css = BOB.keyframes_css("bob");
        assert!(css.starts_with("@keyframes bob {"));
        assert!(css.contains(" 0% { opacity: 1;"));
        assert!(css.contains(" 50% { opacity: 1; transform: translate(0px, -10px)"));
        assert!(css.contains(" 100% {"));
        assert!(css.ends_with(" }"));
    }

    #[test]
    fn animation_repeats_forever_with_phase_offset() {
        assert_eq!(
            BOB.animation_css("bob", 3000, 400),
            "bob 3000ms cubic-bezier(0.42, 0, 0.58, 1) 400ms infinite"
        );
    }
}
