//! Decorative layers that loop forever from mount to unmount, independent of
//! scroll position or visibility.

use yew::prelude::*;

use crate::components::icon::IconView;
use crate::models::{Density, Icon, Speed};
use crate::motion::keyframes::{keyframes_rule, KeyframeLoop};
use crate::motion::variant::{Easing, MotionState};

/// Layout and timing of a row of looping particles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmbientConfig {
    pub count: usize,
    pub size_px: u32,
    /// Start and per-index step, in percent of the layer.
    pub left: (f64, f64),
    pub top: (f64, f64),
    pub duration_step_ms: u32,
    pub phase_step_ms: u32,
    pub motion: KeyframeLoop,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub left_percent: f64,
    pub top_percent: f64,
    pub duration_ms: u32,
    pub delay_ms: u32,
}

impl AmbientConfig {
    pub fn particles(&self) -> Vec<Particle> {
        (0..self.count)
            .map(|i| {
                let step = u32::try_from(i).unwrap_or(u32::MAX);
                Particle {
                    left_percent: self.left.0 + i as f64 * self.left.1,
                    top_percent: self.top.0 + i as f64 * self.top.1,
                    duration_ms: self
                        .motion
                        .duration_ms
                        .saturating_add(step.saturating_mul(self.duration_step_ms)),
                    delay_ms: step.saturating_mul(self.phase_step_ms),
                }
            })
            .collect()
    }
}

#[derive(Properties, PartialEq)]
pub struct AmbientMotionLayerProps {
    /// Keyframe name; unique per page.
    pub name: AttrValue,
    pub config: AmbientConfig,
    #[prop_or(AttrValue::Static("rgba(107, 33, 168, 0.3)"))]
    pub color: AttrValue,
}

#[function_component(AmbientMotionLayer)]
pub fn ambient_motion_layer(props: &AmbientMotionLayerProps) -> Html {
    let config = props.config;
    let keyframes = config.motion.keyframes_css(&props.name);

    html! {
        <div class="ambient-layer" aria-hidden="true">
            <style>{keyframes}</style>
            {
                for config.particles().into_iter().map(|particle| {
                    let style = format!(
                        "position: absolute; left: {}%; top: {}%; width: {size}px; height: {size}px; border-radius: 50%; background: {}; animation: {};",
                        particle.left_percent,
                        particle.top_percent,
                        props.color,
                        config.motion.animation_css(&props.name, particle.duration_ms, particle.delay_ms),
                        size = config.size_px,
                    );
                    html! { <div class="ambient-particle" style={style}></div> }
                })
            }
        </div>
    }
}

const GLOW_FRAMES: &[MotionState] = &[
    MotionState::REST.with_opacity(0.2),
    MotionState::REST.with_opacity(0.4).with_scale(1.2),
    MotionState::REST.with_opacity(0.2),
];

const GLOW: KeyframeLoop = KeyframeLoop {
    frames: GLOW_FRAMES,
    duration_ms: 4000,
    easing: Easing::EaseInOut,
};

#[derive(Properties, PartialEq)]
pub struct PulseGlowProps {
    /// Extra offset of the glow, e.g. following the pointer.
    #[prop_or_default]
    pub offset: (f64, f64),
}

#[function_component(PulseGlow)]
pub fn pulse_glow(props: &PulseGlowProps) -> Html {
    let (x, y) = props.offset;
    html! {
        <div class="pulse-glow-anchor" style={format!("transform: translate({}px, {}px);", x, y)} aria-hidden="true">
            <style>{GLOW.keyframes_css("pulse-glow")}</style>
            <div class="pulse-glow" style={format!("animation: {};", GLOW.animation_css("pulse-glow", GLOW.duration_ms, 0))}></div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ShimmerTextProps {
    pub text: AttrValue,
    #[prop_or(5000)]
    pub duration_ms: u32,
}

/// Heading whose gradient fill slides back and forth at a constant rate.
#[function_component(ShimmerText)]
pub fn shimmer_text(props: &ShimmerTextProps) -> Html {
    let style = format!(
        "background-size: 200% 200%; animation: shimmer {}ms {} 0ms infinite;",
        props.duration_ms,
        Easing::Linear.css()
    );
    html! {
        <>
            <style>{r#"
                @keyframes shimmer {
                    0% { background-position: 0% 50%; }
                    50% { background-position: 100% 50%; }
                    100% { background-position: 0% 50%; }
                }
            "#}</style>
            <h2 class="section-title shimmer" style={style}>{props.text.clone()}</h2>
        </>
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FloatingIcon {
    pub icon: Icon,
    pub color: AttrValue,
    pub size: u32,
}

/// Position and timing of drifting icon `index`. Positions are
/// spread deterministically so renders are stable.
pub fn floating_slot(index: usize, density: Density, speed: Speed) -> Particle {
    let step = u32::try_from(index).unwrap_or(u32::MAX);
    let spread = u32::try_from(density.count().max(1)).unwrap_or(u32::MAX);
    Particle {
        left_percent: ((index * 37 + 5) % 100) as f64,
        top_percent: ((index * 61 + 13) % 100) as f64,
        duration_ms: speed
            .base_duration_ms()
            .saturating_add((step % 4).saturating_mul(1500)),
        // Phases spread across one loop so icons never pulse together.
        delay_ms: step.saturating_mul(speed.base_duration_ms() / spread),
    }
}

#[derive(Properties, PartialEq)]
pub struct FloatingIconsProps {
    pub icons: Vec<FloatingIcon>,
    #[prop_or_default]
    pub density: Density,
    #[prop_or_default]
    pub speed: Speed,
    /// Opacity at start, middle and end of each loop.
    #[prop_or([0.05, 0.2, 0.05])]
    pub opacity: [f64; 3],
}

#[function_component(FloatingIcons)]
pub fn floating_icons(props: &FloatingIconsProps) -> Html {
    if props.icons.is_empty() {
        return html! {};
    }
    let [start, middle, end] = props.opacity;
    let frames = [
        MotionState::REST.with_opacity(start),
        MotionState::REST.with_opacity(middle).with_offset(0.0, -30.0).with_rotation(10.0),
        MotionState::REST.with_opacity(end),
    ];
    let keyframes = keyframes_rule("floating-icon", &frames);

    html! {
        <div class="ambient-layer" aria-hidden="true">
            <style>{keyframes}</style>
            {
                for (0..props.density.count()).map(|index| {
                    let slot = floating_slot(index, props.density, props.speed);
                    let icon = &props.icons[index % props.icons.len()];
                    let style = format!(
                        "position: absolute; left: {}%; top: {}%; opacity: {}; animation: floating-icon {}ms {} {}ms infinite;",
                        slot.left_percent,
                        slot.top_percent,
                        start,
                        slot.duration_ms,
                        Easing::EaseInOut.css(),
                        slot.delay_ms,
                    );
                    html! {
                        <div style={style}>
                            <IconView icon={icon.icon} size={icon.size} color={icon.color.clone()} />
                        </div>
                    }
                })
            }
        </div>
    }
}
