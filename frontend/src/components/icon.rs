use yew::prelude::*;

use crate::models::Icon;

fn glyph(icon: Icon) -> &'static str {
    match icon {
        Icon::Code => "</>",
        Icon::Database => "🗄",
        Icon::Globe => "🌐",
        Icon::Cpu => "⚙",
        Icon::Brain => "🧠",
        Icon::Smartphone => "📱",
        Icon::Bot => "🤖",
        Icon::Zap => "⚡",
        Icon::Target => "🎯",
        Icon::Lightbulb => "💡",
        Icon::Calendar => "📅",
        Icon::Monitor => "🖥",
        Icon::Briefcase => "💼",
        Icon::Users => "👥",
        Icon::MessageSquare => "💬",
        Icon::ExternalLink => "↗",
        Icon::Github => "🐙",
    }
}

#[derive(Properties, PartialEq)]
pub struct IconViewProps {
    pub icon: Icon,
    #[prop_or(24)]
    pub size: u32,
    #[prop_or_default]
    pub color: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(IconView)]
pub fn icon_view(props: &IconViewProps) -> Html {
    let color = props
        .color
        .as_ref()
        .map(|c| format!(" color: {};", c))
        .unwrap_or_default();
    let style = format!(
        "display: inline-flex; align-items: center; justify-content: center; width: {0}px; height: {0}px; font-size: {1}px; line-height: 1;{2}",
        props.size,
        props.size * 3 / 4,
        color
    );
    html! {
        <span class={classes!("icon", props.class.clone())} style={style} aria-hidden="true">
            {glyph(props.icon)}
        </span>
    }
}
