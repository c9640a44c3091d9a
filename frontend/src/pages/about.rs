use yew::prelude::*;

use crate::components::ambient::{AmbientConfig, AmbientMotionLayer, PulseGlow, ShimmerText};
use crate::components::hover::Hoverable;
use crate::components::icon::IconView;
use crate::components::parallax::{ScrollFade, ScrollParallaxLayer};
use crate::components::reveal::RevealSection;
use crate::hooks::pointer::{use_pointer_position, PointerPosition};
use crate::hooks::scroll::use_scroll_y;
use crate::models::{AboutContent, Icon};
use crate::motion::keyframes::KeyframeLoop;
use crate::motion::ramp::Ramp;
use crate::motion::variant::{Easing, HoverMotion, MotionState, Stagger, Transition, Variants};

const CONTAINER: Variants = Variants {
    hidden: MotionState::faded(),
    visible: MotionState::REST,
    transition: Transition::new(300, Easing::EaseOut),
};

const ITEM: Variants = Variants {
    hidden: MotionState::faded().with_offset(0.0, 60.0).with_scale(0.8),
    visible: MotionState::REST,
    transition: Transition::new(800, Easing::EaseOut),
};

const STAGGER: Stagger = Stagger::new(200);

const PARTICLE_FRAMES: &[MotionState] = &[
    MotionState::REST.with_opacity(0.2),
    MotionState::REST
        .with_opacity(0.8)
        .with_offset(0.0, -40.0)
        .with_scale(1.8)
        .with_rotation(180.0),
    MotionState::REST.with_opacity(0.2).with_rotation(360.0),
];

const PARTICLES: AmbientConfig = AmbientConfig {
    count: 12,
    size_px: 24,
    left: (10.0, 8.0),
    top: (15.0, 6.0),
    duration_step_ms: 800,
    phase_step_ms: 400,
    motion: KeyframeLoop {
        frames: PARTICLE_FRAMES,
        duration_ms: 6000,
        easing: Easing::EaseInOut,
    },
};

const BADGE_BOB: KeyframeLoop = KeyframeLoop {
    frames: &[
        MotionState::REST,
        MotionState::REST.with_offset(0.0, -10.0).with_rotation(10.0),
        MotionState::REST,
    ],
    duration_ms: 3000,
    easing: Easing::EaseInOut,
};

const PORTRAIT_HOVER: HoverMotion = HoverMotion::scale(1.05).spin(2.0).over(400);
const STAT_HOVER: HoverMotion = HoverMotion::scale(1.08).lift(-8.0);
const STATUS_HOVER: HoverMotion = HoverMotion::scale(1.03).shift(10.0);
const BLOCK_HOVER: HoverMotion = HoverMotion::scale(1.02).lift(-5.0);

// Scroll ranges in px.
const BACKGROUND_DRIFT: ((f64, f64), (f64, f64)) = ((0.0, 0.0), (1000.0, -200.0));
const CONTENT_FADE: (f64, f64, f64) = (200.0, 600.0, 0.8);

fn viewport_center() -> PointerPosition {
    web_sys::window()
        .map(|window| {
            let half = |value: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
                value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) / 2.0
            };
            PointerPosition {
                x: half(window.inner_width()),
                y: half(window.inner_height()),
            }
        })
        .unwrap_or_default()
}

#[derive(Properties, PartialEq)]
pub struct AboutSectionProps {
    pub content: AboutContent,
}

#[function_component(AboutSection)]
pub fn about_section(props: &AboutSectionProps) -> Html {
    let content = &props.content;
    let scroll_y = use_scroll_y();
    let pointer = use_pointer_position();

    let fade = use_memo(
        |_| ScrollFade::between(CONTENT_FADE.0, CONTENT_FADE.1, CONTENT_FADE.2),
        (),
    );
    let drift = use_memo(|_| Ramp::linear(BACKGROUND_DRIFT.0, BACKGROUND_DRIFT.1), ());

    let glow_offset = if pointer == PointerPosition::default() {
        (0.0, 0.0)
    } else {
        pointer.nudge(viewport_center(), 25.0, 16.0)
    };

    html! {
        <section id="about" class="portfolio-section about-section">
            <ScrollParallaxLayer translate_y={(*drift).clone()} class="about-backdrop" />
            <AmbientMotionLayer name="about-particle" config={PARTICLES} />

            <div class="section-inner">
                <RevealSection
                    container={CONTAINER}
                    item={ITEM}
                    stagger={STAGGER}
                    class="section-column"
                    style={fade.style_after_scroll(scroll_y).map(AttrValue::from)}
                >
                    <div class="section-heading">
                        <ShimmerText text={content.heading.clone()} />
                        <div class="heading-rule" />
                    </div>

                    <div class="portrait-wrap">
                        <Hoverable motion={PORTRAIT_HOVER}>
                            <PulseGlow offset={glow_offset} />
                            <div class="portrait">
                                <img src={content.portrait.clone()} alt="Developer workspace" />
                                <div class="portrait-shade" />
                                <style>{BADGE_BOB.keyframes_css("badge-bob")}</style>
                                <div
                                    class="portrait-badge"
                                    style={format!("animation: {};", BADGE_BOB.animation_css("badge-bob", BADGE_BOB.duration_ms, 0))}
                                >
                                    <IconView icon={Icon::Code} size={24} color="white" />
                                </div>
                            </div>
                        </Hoverable>
                    </div>

                    <div class="stat-grid">
                        {
                            for content.stats.iter().map(|stat| html! {
                                <Hoverable motion={STAT_HOVER} class="stat-card" key={stat.label.clone()}>
                                    <div class="stat-icon"><IconView icon={stat.icon} color="white" /></div>
                                    <div class="stat-value">{stat.value.clone()}</div>
                                    <div class="stat-label">{stat.label.clone()}</div>
                                </Hoverable>
                            })
                        }
                    </div>

                    <div class="about-text">
                        <Hoverable motion={STATUS_HOVER} class="status-card">
                            <div class="status-icon"><IconView icon={Icon::Calendar} color="white" /></div>
                            <div>
                                <p class="status-label">{"Status"}</p>
                                <p class="status-value">{content.status.clone()}</p>
                            </div>
                        </Hoverable>

                        <Hoverable motion={BLOCK_HOVER} class="text-block">
                            <h3><IconView icon={Icon::Monitor} size={28} />{"My Journey"}</h3>
                            <p>{content.journey.clone()}</p>
                        </Hoverable>

                        <Hoverable motion={BLOCK_HOVER} class="text-block">
                            <h3><IconView icon={Icon::Target} size={28} />{"What I Do"}</h3>
                            <ul class="bullet-list">
                                { for content.what_i_do.iter().map(|line| html! { <li>{line.clone()}</li> }) }
                            </ul>
                        </Hoverable>

                        <Hoverable motion={BLOCK_HOVER} class="text-block">
                            <h3><IconView icon={Icon::Briefcase} size={28} />{"Experience"}</h3>
                            <ul class="experience-list">
                                {
                                    for content.experience.iter().map(|entry| html! {
                                        <li>
                                            <p class="experience-title">
                                                {format!("{} · {} ({})", entry.role, entry.organisation, entry.period)}
                                            </p>
                                            <p>{entry.summary.clone()}</p>
                                        </li>
                                    })
                                }
                            </ul>
                        </Hoverable>
                    </div>
                </RevealSection>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::reveal::container_style;

    fn content_fade() -> ScrollFade {
        ScrollFade::between(CONTENT_FADE.0, CONTENT_FADE.1, CONTENT_FADE.2)
    }

    fn container_at(scroll_y: f64) -> String {
        let scroll = content_fade().style_after_scroll(scroll_y);
        container_style(&CONTAINER, true, scroll.as_deref())
    }

    #[test]
    fn revealed_content_is_opaque_before_any_scroll() {
        let style = container_at(0.0);
        assert!(style.starts_with("opacity: 1;"), "{}", style);
        assert!(!style.contains("opacity: 0;"));
    }

    #[test]
    fn scroll_fade_drives_the_container_after_scrolling() {
        let style = container_at(400.0);
        assert!(style.starts_with("opacity: 0.5;"), "{}", style);
        assert!(!style.contains("transition"));
        assert_eq!(container_at(900.0), "opacity: 1; transform: scale(1);");
    }
}
