use log::debug;
use web_sys::window;
use yew::prelude::*;

use crate::components::hover::Hoverable;
use crate::components::icon::IconView;
use crate::components::reveal::RevealSection;
use crate::models::{Icon, Project, ProjectAction};
use crate::motion::variant::{Easing, HoverMotion, MotionState, Stagger, Transition, Variants};

const CONTAINER: Variants = Variants {
    hidden: MotionState::faded(),
    visible: MotionState::REST,
    transition: Transition::new(300, Easing::EaseOut),
};

const CARD: Variants = Variants {
    hidden: MotionState::faded().with_offset(0.0, 50.0).with_scale(0.9),
    visible: MotionState::REST,
    transition: Transition::new(600, Easing::EaseOut),
};

const STAGGER: Stagger = Stagger::new(200);

const CARD_HOVER: HoverMotion = HoverMotion::scale(1.02).lift(-5.0);
const BADGE_HOVER: HoverMotion = HoverMotion::scale(1.1).spin(360.0).over(600);

/// Opens `url` in a new browsing context. Blocked popups are ignored.
fn open_external(url: &str) {
    if let Some(window) = window() {
        debug!("Opening {}", url);
        let _ = window.open_with_url_and_target(url, "_blank");
    }
}

fn open_callback(url: String) -> Callback<MouseEvent> {
    Callback::from(move |_: MouseEvent| open_external(&url))
}

#[derive(Properties, PartialEq)]
pub struct ProjectCardProps {
    pub project: Project,
}

#[function_component(ProjectCard)]
pub fn project_card(props: &ProjectCardProps) -> Html {
    let project = &props.project;
    let (from, to) = &project.accent;
    let badge_style = format!("background: linear-gradient(90deg, {}, {});", from, to);

    html! {
        <Hoverable motion={CARD_HOVER} class="project-card">
            <div class="project-image">
                <img src={project.image.clone()} alt={project.title.clone()} loading="lazy" />
                <div class="project-image-shade" />
                <Hoverable motion={BADGE_HOVER} class="project-badge-anchor">
                    <div class="project-badge" style={badge_style}>
                        <IconView icon={project.icon} size={16} color="white" />
                    </div>
                </Hoverable>
            </div>

            <div class="project-body">
                <h3 class="project-title">{project.title.clone()}</h3>
                <p class="project-description">{project.description.clone()}</p>

                <div class="project-features">
                    {
                        for project.features.iter().map(|feature| html! {
                            <div class="project-feature" key={feature.clone()}>
                                <span class="dot" />
                                {feature.clone()}
                            </div>
                        })
                    }
                </div>

                <div class="project-tech">
                    {
                        for project.displayed_tech().map(|group| html! {
                            <div class="tech-row">
                                <IconView icon={group.category.icon()} size={12} color="#c084fc" />
                                <span class="tech-label">{format!("{}:", group.category.label())}</span>
                                <div class="tech-chips">
                                    { for group.items.iter().map(|item| html! { <span class="tech-chip">{item.clone()}</span> }) }
                                </div>
                            </div>
                        })
                    }
                </div>

                <div class="project-actions">
                    {
                        for project.actions().into_iter().map(|action| {
                            let class = match &action {
                                ProjectAction::LivePreview(_) => "action-button primary",
                                ProjectAction::Code(_) => "action-button outline",
                            };
                            html! {
                                <button class={class} onclick={open_callback(action.url().to_string())}>
                                    <IconView icon={action.icon()} size={12} />
                                    {action.label()}
                                </button>
                            }
                        })
                    }
                </div>
            </div>
        </Hoverable>
    }
}

#[derive(Properties, PartialEq)]
pub struct ProjectsSectionProps {
    pub projects: Vec<Project>,
    pub github_profile: AttrValue,
}

#[function_component(ProjectsSection)]
pub fn projects_section(props: &ProjectsSectionProps) -> Html {
    html! {
        <section id="projects" class="portfolio-section projects-section">
            <div class="section-inner">
                // Heading, every card and the banner reveal as siblings; the
                // grid spans heading and banner across both columns.
                <RevealSection container={CONTAINER} item={CARD} stagger={STAGGER} class="project-grid">
                    <div class="section-heading">
                        <h2 class="section-title">{"Featured Projects"}</h2>
                        <p class="section-subtitle">
                            {"A showcase of my latest work, featuring innovative solutions and cutting-edge technologies."}
                        </p>
                        <div class="heading-rule" />
                    </div>

                    {
                        for props.projects.iter().map(|project| html! {
                            <ProjectCard project={project.clone()} />
                        })
                    }

                    <div class="profile-banner-wrap">
                        <div class="profile-banner" onclick={open_callback(props.github_profile.to_string())}>
                            <IconView icon={Icon::Github} size={20} />
                            <span>{"View my GitHub profile for all projects and source code"}</span>
                            <IconView icon={Icon::ExternalLink} size={20} />
                        </div>
                    </div>
                </RevealSection>
            </div>
        </section>
    }
}
