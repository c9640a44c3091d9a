use stylist::yew::styled_component;
use yew::prelude::*;

use crate::motion::variant::HoverMotion;

#[derive(Properties, PartialEq)]
pub struct HoverableProps {
    pub motion: HoverMotion,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Wrapper that moves towards `motion` while hovered and eases back afterwards.
#[styled_component]
pub fn Hoverable(props: &HoverableProps) -> Html {
    let hover = css!(
        r#"
            transition: transform ${duration}ms ease;
            &:hover {
                transform: ${transform};
            }
        "#,
        duration = props.motion.duration_ms,
        transform = props.motion.transform_css(),
    );

    html! {
        <div class={classes!(hover, props.class.clone())}>
            { for props.children.iter() }
        </div>
    }
}
