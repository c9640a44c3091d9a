//! Typed animation states. A `Variants` pair describes where an element
//! starts (`hidden`) and where it ends up (`visible`); the browser does the
//! interpolation through CSS transitions.

use std::fmt::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    Linear,
    EaseOut,
    EaseInOut,
}

impl Easing {
    pub fn css(self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::EaseOut => "cubic-bezier(0, 0, 0.58, 1)",
            Easing::EaseInOut => "cubic-bezier(0.42, 0, 0.58, 1)",
        }
    }
}

/// Visual parameters of an element at one point of an animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionState {
    pub opacity: f64,
    pub translate_x: f64,
    pub translate_y: f64,
    pub scale: f64,
    pub rotate: f64,
}

impl MotionState {
    pub const REST: MotionState = MotionState {
        opacity: 1.0,
        translate_x: 0.0,
        translate_y: 0.0,
        scale: 1.0,
        rotate: 0.0,
    };

    pub const fn faded() -> Self {
        MotionState { opacity: 0.0, ..Self::REST }
    }

    pub const fn with_offset(self, x: f64, y: f64) -> Self {
        MotionState {
            translate_x: x,
            translate_y: y,
            ..self
        }
    }

    pub const fn with_scale(self, scale: f64) -> Self {
        MotionState { scale, ..self }
    }

    pub const fn with_opacity(self, opacity: f64) -> Self {
        MotionState { opacity, ..self }
    }

    pub const fn with_rotation(self, rotate: f64) -> Self {
        MotionState { rotate, ..self }
    }

    pub fn transform_css(&self) -> String {
        format!(
            "translate({}px, {}px) scale({}) rotate({}deg)",
            self.translate_x, self.translate_y, self.scale, self.rotate
        )
    }

    /// Inline style declarations for this state.
    pub fn css(&self) -> String {
        format!("opacity: {}; transform: {};", self.opacity, self.transform_css())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub duration_ms: u32,
    pub delay_ms: u32,
    pub easing: Easing,
}

impl Transition {
    pub const fn new(duration_ms: u32, easing: Easing) -> Self {
        Transition {
            duration_ms,
            delay_ms: 0,
            easing,
        }
    }

    pub const fn delayed(self, delay_ms: u32) -> Self {
        Transition { delay_ms, ..self }
    }

    /// `transition` value applied to every listed property.
    pub fn css(&self, properties: &[&str]) -> String {
        let mut out = String::new();
        for (i, property) in properties.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            let _ = write!(
                out,
                "{} {}ms {} {}ms",
                property,
                self.duration_ms,
                self.easing.css(),
                self.delay_ms
            );
        }
        out
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Variants {
    pub hidden: MotionState,
    pub visible: MotionState,
    pub transition: Transition,
}

impl Variants {
    pub fn state(&self, visible: bool) -> &MotionState {
        if visible {
            &self.visible
        } else {
            &self.hidden
        }
    }

    /// Full inline style for a child. The delay only matters once visible;
    /// hiding is never animated because the latch does not revert.
    pub fn style_for(&self, visible: bool, delay_ms: u32) -> String {
        let transition = self.transition.delayed(self.transition.delay_ms + delay_ms);
        format!(
            "{} transition: {}; will-change: opacity, transform;",
            self.state(visible).css(),
            transition.css(&["opacity", "transform"])
        )
    }
}

/// Start-delay schedule for siblings inside one revealing container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stagger {
    pub delay_children_ms: u32,
    pub stagger_ms: u32,
}

impl Stagger {
    pub const fn new(stagger_ms: u32) -> Self {
        Stagger {
            delay_children_ms: 0,
            stagger_ms,
        }
    }

    pub const fn after(self, delay_children_ms: u32) -> Self {
        Stagger {
            delay_children_ms,
            ..self
        }
    }

    pub fn delay_for(&self, index: usize) -> u32 {
        let index = u32::try_from(index).unwrap_or(u32::MAX);
        self.delay_children_ms
            .saturating_add(self.stagger_ms.saturating_mul(index))
    }
}

/// Pointer-hover target relative to the element's resting state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoverMotion {
    pub scale: f64,
    pub translate_x: f64,
    pub translate_y: f64,
    pub rotate: f64,
    pub duration_ms: u32,
}

impl HoverMotion {
    pub const fn scale(scale: f64) -> Self {
        HoverMotion {
            scale,
            translate_x: 0.0,
            translate_y: 0.0,
            rotate: 0.0,
            duration_ms: 300,
        }
    }

    pub const fn lift(self, translate_y: f64) -> Self {
        HoverMotion { translate_y, ..self }
    }

    pub const fn shift(self, translate_x: f64) -> Self {
        HoverMotion { translate_x, ..self }
    }

    pub const fn spin(self, rotate: f64) -> Self {
        HoverMotion { rotate, ..self }
    }

    pub const fn over(self, duration_ms: u32) -> Self {
        HoverMotion { duration_ms, ..self }
    }

    pub fn transform_css(&self) -> String {
        MotionState::REST
            .with_offset(self.translate_x, self.translate_y)
            .with_scale(self.scale)
            .with_rotation(self.rotate)
            .transform_css()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ITEM: Variants = Variants {
        hidden: MotionState::faded().with_offset(0.0, 60.0).with_scale(0.8),
        visible: MotionState::REST,
        transition: Transition::new(800, Easing::EaseOut),
    };

    #[test]
    fn hidden_style_reports_zero_opacity() {
        let style = ITEM.style_for(false, 400);
        assert!(style.starts_with("opacity: 0;"), "{}", style);
        assert!(style.contains("translate(0px, 60px) scale(0.8)"));
    }

    #[test]
    fn visible_style_carries_the_stagger_delay() {
        let style = ITEM.style_for(true, 400);
        assert!(style.starts_with("opacity: 1;"));
        assert!(style.contains("opacity 800ms cubic-bezier(0, 0, 0.58, 1) 400ms"));
        assert!(style.contains("transform 800ms cubic-bezier(0, 0, 0.58, 1) 400ms"));
    }

    #[test]
    fn stagger_delays_never_decrease_with_index() {
        for stagger in [Stagger::new(0), Stagger::new(150).after(300), Stagger::new(200)] {
            let delays: Vec<u32> = (0..20).map(|i| stagger.delay_for(i)).collect();
            assert!(delays.windows(2).all(|w| w[0] <= w[1]), "{:?}", delays);
            assert_eq!(delays[0], stagger.delay_children_ms);
        }
        assert_eq!(Stagger::new(150).after(300).delay_for(2), 600);
    }

    #[test]
    fn stagger_saturates_instead_of_overflowing() {
        let stagger = Stagger::new(u32::MAX / 2);
        assert_eq!(stagger.delay_for(10), u32::MAX);
        assert_eq!(stagger.delay_for(usize::MAX), u32::MAX);
    }

    #[test]
    fn hover_transform_composes_every_axis() {
        let hover = HoverMotion::scale(1.05).lift(-8.0).spin(2.0);
        assert_eq!(hover.transform_css(), "translate(0px, -8px) scale(1.05) rotate(2deg)");
    }

    #[test]
    fn linear_easing_is_plain_css_keyword() {
        assert_eq!(Easing::Linear.css(), "linear");
        assert_eq!(Transition::new(5000, Easing::Linear).css(&["color"]), "color 5000ms linear 0ms");
    }
}
