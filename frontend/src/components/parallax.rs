use yew::prelude::*;

use crate::hooks::scroll::use_scroll_y;
use crate::motion::ramp::Ramp;

/// Background translation for a scroll offset.
pub fn parallax_style(translate_y: &Ramp, offset: f64) -> String {
    format!("transform: translate3d(0, {}px, 0);", translate_y.sample(offset))
}

#[derive(Properties, PartialEq)]
pub struct ScrollParallaxLayerProps {
    /// Scroll offset → vertical translation in px.
    pub translate_y: Ramp,
    #[prop_or_default]
    pub class: Classes,
}

/// Layer that drifts vertically as the page scrolls.
#[function_component(ScrollParallaxLayer)]
pub fn scroll_parallax_layer(props: &ScrollParallaxLayerProps) -> Html {
    let offset = use_scroll_y();
    html! {
        <div
            class={classes!("parallax-layer", props.class.clone())}
            style={parallax_style(&props.translate_y, offset)}
            aria-hidden="true"
        />
    }
}

/// Opacity and scale of a block as functions of the scroll offset.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollFade {
    pub opacity: Ramp,
    pub scale: Ramp,
}

impl ScrollFade {
    /// Both ramps over the same scroll range, opacity 0 → 1 and scale
    /// `min_scale` → 1.
    pub fn between(start: f64, end: f64, min_scale: f64) -> Self {
        ScrollFade {
            opacity: Ramp::linear((start, 0.0), (end, 1.0)),
            scale: Ramp::linear((start, min_scale), (end, 1.0)),
        }
    }

    /// Style once the page has scrolled, `None` at offset 0 so the reveal
    /// keeps control of opacity and scale on first paint.
    pub fn style_after_scroll(&self, offset: f64) -> Option<String> {
        (offset > 0.0).then(|| self.style_at(offset))
    }

    pub fn style_at(&self, offset: f64) -> String {
        format!(
            "opacity: {}; transform: scale({});",
            self.opacity.sample(offset),
            self.scale.sample(offset)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fade_is_invisible_at_initial_paint() {
        let fade = ScrollFade::between(200.0, 600.0, 0.8);
        assert_eq!(fade.style_at(0.0), "opacity: 0; transform: scale(0.8);");
    }

    #[test]
    fn fade_settles_without_overshoot() {
        let fade = ScrollFade::between(200.0, 600.0, 0.8);
        assert_eq!(fade.style_at(600.0), "opacity: 1; transform: scale(1);");
        assert_eq!(fade.style_at(40_000.0), "opacity: 1; transform: scale(1);");
    }

    #[test]
    fn fade_waits_for_the_first_scroll() {
        let fade = ScrollFade::between(200.0, 600.0, 0.8);
        assert_eq!(fade.style_after_scroll(0.0), None);
        assert_eq!(
            fade.style_after_scroll(50.0).as_deref(),
            Some("opacity: 0; transform: scale(0.8);")
        );
    }

    #[test]
    fn parallax_follows_the_ramp() {
        let ramp = Ramp::linear((0.0, 0.0), (1000.0, -200.0));
        assert_eq!(parallax_style(&ramp, 0.0), "transform: translate3d(0, 0px, 0);");
        assert_eq!(parallax_style(&ramp, 500.0), "transform: translate3d(0, -100px, 0);");
        assert_eq!(parallax_style(&ramp, 1e6), "transform: translate3d(0, -200px, 0);");
    }
}
