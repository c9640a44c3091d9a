use yew::prelude::*;

use crate::hooks::visibility::{use_reveal, Threshold};
use crate::motion::variant::{Stagger, Variants};

#[derive(Properties, PartialEq)]
pub struct RevealSectionProps {
    /// Animation of the container itself.
    pub container: Variants,
    /// Animation applied to each direct child.
    pub item: Variants,
    pub stagger: Stagger,
    #[prop_or_default]
    pub threshold: Threshold,
    #[prop_or_default]
    pub class: Classes,
    /// Scroll-driven style for the container. While set it replaces the
    /// container variant, transition included.
    #[prop_or_default]
    pub style: Option<AttrValue>,
    #[prop_or_default]
    pub children: Children,
}

/// Style of child `index` given the latch state.
pub fn child_style(item: &Variants, stagger: &Stagger, visible: bool, index: usize) -> String {
    item.style_for(visible, stagger.delay_for(index))
}

/// Style of the container: its own variant, or `scroll` verbatim once a
/// scroll-driven style takes over opacity and transform.
pub fn container_style(container: &Variants, visible: bool, scroll: Option<&str>) -> String {
    match scroll {
        Some(style) => style.to_string(),
        None => container.style_for(visible, 0),
    }
}

/// Reveals its children one after another the first time the container
/// scrolls into view.
#[function_component(RevealSection)]
pub fn reveal_section(props: &RevealSectionProps) -> Html {
    let node = use_node_ref();
    let visible = use_reveal(node.clone(), props.threshold);

    let style = container_style(&props.container, visible, props.style.as_deref());

    html! {
        <div ref={node} class={props.class.clone()} style={style}>
            {
                for props.children.iter().enumerate().map(|(index, child)| html! {
                    <div
                        class="reveal-item"
                        style={child_style(&props.item, &props.stagger, visible, index)}
                    >
                        { child }
                    </div>
                })
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::variant::{Easing, MotionState, Transition};

    const CARD: Variants = Variants {
        hidden: MotionState::faded().with_offset(0.0, 50.0).with_scale(0.9),
        visible: MotionState::REST,
        transition: Transition::new(600, Easing::EaseOut),
    };

    fn delay_in(style: &str) -> u32 {
        // "... opacity 600ms <easing> 400ms, ..."
        let transition = style.split("transition: opacity 600ms ").nth(1).unwrap();
        let after_easing = transition.split(") ").nth(1).unwrap();
        after_easing.split("ms").next().unwrap().parse().unwrap()
    }

    #[test]
    fn scroll_style_replaces_the_container_variant() {
        let style = container_style(&CARD, true, Some("opacity: 0.5; transform: scale(0.9);"));
        assert_eq!(style, "opacity: 0.5; transform: scale(0.9);");
        assert!(!style.contains("transition"));
        assert!(container_style(&CARD, true, None).starts_with("opacity: 1;"));
        assert!(container_style(&CARD, false, None).starts_with("opacity: 0;"));
    }

    #[test]
    fn every_child_is_transparent_before_reveal() {
        let stagger = Stagger::new(200);
        for index in 0..6 {
            let style = child_style(&CARD, &stagger, false, index);
            assert!(style.starts_with("opacity: 0;"), "child {}: {}", index, style);
        }
    }

    #[test]
    fn children_cascade_in_order_once_visible() {
        let stagger = Stagger::new(150).after(300);
        let delays: Vec<u32> = (0..5)
            .map(|index| delay_in(&child_style(&CARD, &stagger, true, index)))
            .collect();
        assert_eq!(delays, vec![300, 450, 600, 750, 900]);
        for index in 0..5 {
            assert!(child_style(&CARD, &stagger, true, index).starts_with("opacity: 1;"));
        }
    }
}
