use yew::prelude::*;

use crate::components::ambient::{FloatingIcon, FloatingIcons};
use crate::components::icon::IconView;
use crate::components::reveal::child_style;
use crate::hooks::visibility::{use_reveal, Threshold};
use crate::models::{Backdrop, Icon, SkillCategory, SkillRow};
use crate::motion::variant::{Easing, MotionState, Stagger, Transition, Variants};

const CARD: Variants = Variants {
    hidden: MotionState::faded().with_offset(0.0, 60.0).with_scale(0.8),
    visible: MotionState::REST,
    transition: Transition::new(800, Easing::EaseOut),
};

// Heading, cards and footer.
const STAGGER: Stagger = Stagger::new(150).after(300);

const ROW: Variants = Variants {
    hidden: MotionState::faded().with_offset(-20.0, 0.0),
    visible: MotionState::REST,
    transition: Transition::new(300, Easing::EaseOut),
};

const BAR_FILL: Transition = Transition::new(1000, Easing::EaseOut);

fn background_icons() -> Vec<FloatingIcon> {
    [
        (Icon::Code, "#9333EA", 28),
        (Icon::Database, "#A855F7", 24),
        (Icon::Globe, "#8B5CF6", 26),
        (Icon::Cpu, "#A855F7", 24),
        (Icon::Brain, "#9333EA", 28),
        (Icon::Smartphone, "#8B5CF6", 24),
        (Icon::Bot, "#A855F7", 28),
        (Icon::Zap, "#9333EA", 26),
    ]
    .into_iter()
    .map(|(icon, color, size)| FloatingIcon {
        icon,
        color: AttrValue::Static(color),
        size,
    })
    .collect()
}

/// Bar style: empty until revealed, then grows to the row's width.
pub fn bar_style(row: &SkillRow, visible: bool) -> String {
    let width = if visible { row.bar_width.as_str() } else { "0%" };
    format!(
        "width: {}; transition: {};",
        width,
        BAR_FILL.delayed(row.delay_ms).css(&["width"])
    )
}

fn render_dots(row: &SkillRow) -> Html {
    html! {
        <div class="proficiency-dots">
            {
                for row.dots.iter().map(|filled| html! {
                    <span class={classes!("proficiency-dot", filled.then_some("filled"))} />
                })
            }
        </div>
    }
}

fn render_row(row: &SkillRow, visible: bool) -> Html {
    html! {
        <div class="skill-row" key={row.name.clone()} style={ROW.style_for(visible, row.delay_ms)}>
            <div class="skill-row-header">
                <span class="skill-name">{row.name.clone()}</span>
                { render_dots(row) }
            </div>
            <div class="skill-bar-track">
                <div class="skill-bar" style={bar_style(row, visible)} />
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SkillCardProps {
    pub category: SkillCategory,
    pub visible: bool,
}

#[function_component(SkillCard)]
pub fn skill_card(props: &SkillCardProps) -> Html {
    let rows = props.category.rows();
    html! {
        <div class="skill-card">
            <div class="skill-card-header">
                <IconView icon={props.category.icon} color="#a855f7" />
                <h3>{props.category.title.clone()}</h3>
            </div>
            <div class="skill-rows">
                { for rows.iter().map(|row| render_row(row, props.visible)) }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SkillsSectionProps {
    pub categories: Vec<SkillCategory>,
    pub tagline: AttrValue,
    #[prop_or_default]
    pub backdrop: Backdrop,
    #[prop_or_default]
    pub threshold: Threshold,
}

#[function_component(SkillsSection)]
pub fn skills_section(props: &SkillsSectionProps) -> Html {
    let node = use_node_ref();
    let visible = use_reveal(node.clone(), props.threshold);
    let icons = use_memo(|_| background_icons(), ());
    let card_count = props.categories.len();

    html! {
        <section id="skills" class="portfolio-section skills-section">
            <FloatingIcons icons={(*icons).clone()} density={props.backdrop.density} speed={props.backdrop.speed} />

            <div class="section-inner" ref={node}>
                <div class="section-heading" style={child_style(&CARD, &STAGGER, visible, 0)}>
                    <h2 class="section-title">{"Skills & Technologies"}</h2>
                    <div class="heading-rule" />
                </div>

                <div class="skill-grid">
                    {
                        for props.categories.iter().enumerate().map(|(index, category)| html! {
                            <div key={category.title.clone()} style={child_style(&CARD, &STAGGER, visible, index + 1)}>
                                <SkillCard category={category.clone()} visible={visible} />
                            </div>
                        })
                    }
                </div>

                <div class="skills-footer" style={child_style(&CARD, &STAGGER, visible, card_count + 1)}>
                    <div class="tagline">
                        <IconView icon={Icon::Code} size={20} color="#c084fc" />
                        <span>{props.tagline.clone()}</span>
                        <IconView icon={Icon::Code} size={20} color="#c084fc" />
                    </div>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Skill;

    #[test]
    fn bars_stay_empty_until_revealed() {
        let category = SkillCategory {
            title: "Test".into(),
            icon: Icon::Code,
            skills: vec![Skill::new("X", 5), Skill::new("Y", 3)],
        };
        let rows = category.rows();

        assert!(bar_style(&rows[0], false).starts_with("width: 0%;"));
        assert!(bar_style(&rows[0], true).starts_with("width: 100%;"));
        assert!(bar_style(&rows[1], true).starts_with("width: 60%;"));
        assert!(bar_style(&rows[1], true).ends_with("width 1000ms cubic-bezier(0, 0, 0.58, 1) 50ms;"));
    }

    async fn render_card(category: SkillCategory, visible: bool) -> String {
        yew::ServerRenderer::<SkillCard>::with_props(move || SkillCardProps { category, visible })
            .hydratable(false)
            .render()
            .await
    }

    fn two_skills() -> SkillCategory {
        SkillCategory {
            title: "Test".into(),
            icon: Icon::Code,
            skills: vec![Skill::new("X", 5), Skill::new("Y", 3)],
        }
    }

    #[tokio::test]
    async fn card_renders_bar_widths_and_filled_dots() {
        let html = render_card(two_skills(), true).await;

        assert!(html.contains("width: 100%;"), "{}", html);
        assert!(html.contains("width: 60%;"), "{}", html);
        assert!(!html.contains("width: 0%;"));
        assert_eq!(html.matches(r#"class="proficiency-dot filled""#).count(), 8);
        assert_eq!(html.matches(r#"class="proficiency-dot""#).count(), 2);
        assert!(html.find(">X<").unwrap() < html.find(">Y<").unwrap());
    }

    #[tokio::test]
    async fn unrevealed_card_renders_empty_bars() {
        let html = render_card(two_skills(), false).await;
        assert_eq!(html.matches("width: 0%;").count(), 2);
        assert!(!html.contains("width: 100%;"));
    }

    #[test]
    fn rows_slide_in_from_the_left() {
        assert!(ROW.style_for(false, 0).contains("translate(-20px, 0px)"));
        assert!(ROW.style_for(true, 100).contains("translate(0px, 0px)"));
    }
}
