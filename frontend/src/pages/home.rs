use std::rc::Rc;

use yew::prelude::*;

use crate::models::Portfolio;
use crate::pages::about::AboutSection;
use crate::pages::projects::ProjectsSection;
use crate::pages::skills::SkillsSection;

#[derive(Properties, PartialEq)]
pub struct HomePageProps {
    pub portfolio: Rc<Portfolio>,
}

#[function_component(HomePage)]
pub fn home_page(props: &HomePageProps) -> Html {
    let portfolio = &props.portfolio;

    html! {
        <main class="portfolio-page">
            <style>
                {r#"
                    .portfolio-page {
                        background: #05010a;
                        color: #e5e7eb;
                        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                    }
                    .portfolio-section {
                        position: relative;
                        overflow: hidden;
                        padding: 5rem 0;
                    }
                    .section-inner {
                        position: relative;
                        z-index: 10;
                        max-width: 72rem;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                    }
                    .section-column > .reveal-item + .reveal-item {
                        margin-top: 4rem;
                    }
                    .section-heading {
                        text-align: center;
                        margin-bottom: 3rem;
                    }
                    .section-title {
                        font-size: 3rem;
                        font-weight: 700;
                        margin-bottom: 1rem;
                        background-image: linear-gradient(90deg, #ffffff, #d8b4fe, #6b21a8);
                        -webkit-background-clip: text;
                        background-clip: text;
                        color: transparent;
                    }
                    .section-subtitle {
                        color: #9ca3af;
                        font-size: 1.125rem;
                        max-width: 42rem;
                        margin: 0 auto;
                    }
                    .heading-rule {
                        width: 8rem;
                        height: 0.375rem;
                        margin: 1.5rem auto 0;
                        border-radius: 9999px;
                        background: linear-gradient(90deg, #581c87, #9333ea);
                    }
                    .ambient-layer,
                    .parallax-layer {
                        position: absolute;
                        inset: 0;
                        pointer-events: none;
                    }
                    .about-backdrop {
                        background: linear-gradient(135deg, rgba(88, 28, 135, 0.3), rgba(107, 33, 168, 0.2), rgba(88, 28, 135, 0.4));
                    }

                    /* About */
                    .portrait-wrap {
                        display: flex;
                        justify-content: center;
                    }
                    .pulse-glow-anchor {
                        position: absolute;
                        inset: -2rem;
                        transition: transform 0.6s ease-out;
                    }
                    .pulse-glow {
                        width: 100%;
                        height: 100%;
                        border-radius: 1.5rem;
                        background: linear-gradient(90deg, #581c87, #7e22ce);
                        filter: blur(64px);
                    }
                    .portrait {
                        position: relative;
                        width: 20rem;
                        height: 20rem;
                        border-radius: 1rem;
                        overflow: hidden;
                        border: 4px solid rgba(107, 33, 168, 0.5);
                        background: linear-gradient(135deg, rgba(147, 51, 234, 0.1), rgba(88, 28, 135, 0.2));
                    }
                    .portrait img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                    }
                    .portrait-shade {
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(0deg, rgba(88, 28, 135, 0.4), transparent);
                    }
                    .portrait-badge {
                        position: absolute;
                        top: 1rem;
                        right: 1rem;
                        width: 3rem;
                        height: 3rem;
                        border-radius: 50%;
                        background: #6b21a8;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }
                    .stat-grid {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 1.5rem;
                    }
                    .stat-card {
                        text-align: center;
                        padding: 1.25rem;
                        border-radius: 0.75rem;
                        border: 1px solid rgba(147, 51, 234, 0.4);
                        background: linear-gradient(180deg, #581c87, #7e22ce);
                    }
                    .stat-icon,
                    .status-icon {
                        display: inline-flex;
                        padding: 0.75rem;
                        border-radius: 0.5rem;
                        background: #9333ea;
                        margin-bottom: 0.75rem;
                    }
                    .stat-value {
                        font-size: 1.5rem;
                        font-weight: 700;
                        color: #e9d5ff;
                    }
                    .stat-label {
                        font-size: 0.875rem;
                        color: #d1d5db;
                    }
                    .about-text {
                        max-width: 48rem;
                        margin: 0 auto;
                        display: flex;
                        flex-direction: column;
                        gap: 2rem;
                    }
                    .status-card {
                        display: flex;
                        align-items: center;
                        gap: 1.25rem;
                        padding: 1.5rem;
                        border-radius: 0.75rem;
                        background: linear-gradient(90deg, #7e22ce, #581c87);
                    }
                    .status-label {
                        color: #d8b4fe;
                        font-size: 0.875rem;
                    }
                    .status-value {
                        color: white;
                        font-weight: 600;
                        font-size: 1.125rem;
                    }
                    .text-block {
                        padding: 2rem;
                        border-radius: 0.75rem;
                        border: 1px solid rgba(147, 51, 234, 0.4);
                        background: linear-gradient(90deg, rgba(88, 28, 135, 0.5), rgba(107, 33, 168, 0.4));
                        font-size: 1.125rem;
                    }
                    .text-block h3 {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                        color: #d8b4fe;
                        margin-bottom: 1rem;
                    }
                    .bullet-list li::before {
                        content: '';
                        display: inline-block;
                        width: 0.5rem;
                        height: 0.5rem;
                        margin-right: 0.75rem;
                        border-radius: 50%;
                        background: #a855f7;
                    }
                    .experience-title {
                        font-weight: 600;
                        color: white;
                    }

                    /* Projects */
                    .project-grid {
                        display: grid;
                        grid-template-columns: repeat(2, 1fr);
                        gap: 1.5rem;
                    }
                    .project-grid > .reveal-item:first-child,
                    .project-grid > .reveal-item:last-child {
                        grid-column: 1 / -1;
                    }
                    .project-card {
                        height: 100%;
                        overflow: hidden;
                        border-radius: 0.75rem;
                        border: 1px solid rgba(147, 51, 234, 0.3);
                        background: linear-gradient(135deg, rgba(17, 24, 39, 0.8), rgba(88, 28, 135, 0.3));
                    }
                    .project-image {
                        position: relative;
                        overflow: hidden;
                    }
                    .project-image img {
                        width: 100%;
                        height: 12rem;
                        object-fit: cover;
                        transition: transform 0.5s;
                    }
                    .project-card:hover .project-image img {
                        transform: scale(1.1);
                    }
                    .project-image-shade {
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(0deg, rgba(0, 0, 0, 0.8), transparent);
                    }
                    .project-badge-anchor {
                        position: absolute;
                        top: 0.75rem;
                        right: 0.75rem;
                    }
                    .project-badge {
                        padding: 0.5rem;
                        border-radius: 0.5rem;
                    }
                    .project-body {
                        padding: 1.25rem;
                    }
                    .project-title {
                        font-size: 1.25rem;
                        font-weight: 700;
                        color: white;
                        margin-bottom: 0.5rem;
                    }
                    .project-card:hover .project-title {
                        color: #d8b4fe;
                    }
                    .project-description {
                        color: #9ca3af;
                        font-size: 0.875rem;
                        margin-bottom: 0.75rem;
                    }
                    .project-features {
                        display: grid;
                        grid-template-columns: repeat(2, 1fr);
                        gap: 0.25rem;
                        font-size: 0.75rem;
                        margin-bottom: 0.75rem;
                    }
                    .project-feature .dot {
                        display: inline-block;
                        width: 0.25rem;
                        height: 0.25rem;
                        margin-right: 0.5rem;
                        border-radius: 50%;
                        background: #a855f7;
                    }
                    .tech-row {
                        display: flex;
                        align-items: center;
                        gap: 0.375rem;
                        margin-bottom: 0.5rem;
                    }
                    .tech-label {
                        font-size: 0.75rem;
                        color: #d8b4fe;
                    }
                    .tech-chips {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 0.25rem;
                    }
                    .tech-chip {
                        padding: 0.125rem 0.375rem;
                        font-size: 10px;
                        color: #d8b4fe;
                        border-radius: 9999px;
                        border: 1px solid rgba(147, 51, 234, 0.4);
                        background: rgba(107, 33, 168, 0.3);
                    }
                    .project-actions {
                        display: flex;
                        gap: 0.5rem;
                    }
                    .action-button {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.25rem;
                        padding: 0.5rem 0.75rem;
                        font-size: 0.75rem;
                        border-radius: 0.375rem;
                        cursor: pointer;
                    }
                    .action-button.primary {
                        flex: 1;
                        justify-content: center;
                        color: white;
                        border: none;
                        background: linear-gradient(90deg, #7e22ce, #6b21a8);
                    }
                    .action-button.outline {
                        color: #c084fc;
                        background: transparent;
                        border: 1px solid #9333ea;
                    }
                    .profile-banner-wrap {
                        text-align: center;
                        padding-bottom: 3.5rem;
                    }
                    .profile-banner {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.75rem;
                        margin-top: 2rem;
                        padding: 0.625rem 1.25rem;
                        border-radius: 9999px;
                        cursor: pointer;
                        color: white;
                        border: 1px solid rgba(192, 132, 252, 0.7);
                        background: linear-gradient(90deg, rgba(126, 34, 206, 0.5), rgba(147, 51, 234, 0.5));
                        transition: all 0.3s;
                    }

                    /* Skills */
                    .skill-grid {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 2rem;
                    }
                    .skill-card {
                        height: 100%;
                        padding: 1.5rem;
                        border-radius: 0.5rem;
                        background: black;
                        border: 1px solid rgba(107, 33, 168, 0.5);
                        transition: border-color 0.3s;
                    }
                    .skill-card:hover {
                        border-color: #a855f7;
                    }
                    .skill-card-header {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                        margin-bottom: 1.5rem;
                        color: white;
                    }
                    .skill-rows {
                        display: flex;
                        flex-direction: column;
                        gap: 1.25rem;
                    }
                    .skill-row-header {
                        display: flex;
                        justify-content: space-between;
                        margin-bottom: 0.375rem;
                    }
                    .skill-name {
                        color: #d1d5db;
                        font-size: 0.875rem;
                    }
                    .proficiency-dots {
                        display: flex;
                        gap: 0.25rem;
                    }
                    .proficiency-dot {
                        width: 0.625rem;
                        height: 0.625rem;
                        border-radius: 50%;
                        background: #374151;
                    }
                    .proficiency-dot.filled {
                        background: #a855f7;
                    }
                    .skill-bar-track {
                        width: 100%;
                        height: 0.375rem;
                        overflow: hidden;
                        border-radius: 9999px;
                        background: #1f2937;
                    }
                    .skill-bar {
                        height: 100%;
                        border-radius: 9999px;
                        background: linear-gradient(90deg, #9333ea, #c084fc);
                    }
                    .skills-footer {
                        text-align: center;
                        margin-top: 4rem;
                    }
                    .tagline {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.75rem;
                        padding: 1rem 2rem;
                        border-radius: 9999px;
                        color: #d8b4fe;
                        font-weight: 600;
                        border: 1px solid rgba(107, 33, 168, 0.5);
                        background: linear-gradient(90deg, rgba(88, 28, 135, 0.4), rgba(107, 33, 168, 0.4));
                    }

                    @media (max-width: 1024px) {
                        .skill-grid {
                            grid-template-columns: repeat(2, 1fr);
                        }
                        .project-grid {
                            grid-template-columns: 1fr;
                        }
                    }
                    @media (max-width: 700px) {
                        .skill-grid,
                        .stat-grid {
                            grid-template-columns: 1fr;
                        }
                        .section-title {
                            font-size: 2.25rem;
                        }
                    }
                "#}
            </style>

            <AboutSection content={portfolio.about.clone()} />
            <ProjectsSection
                projects={portfolio.projects.clone()}
                github_profile={portfolio.github_profile.clone()}
            />
            <SkillsSection
                categories={portfolio.skill_categories.clone()}
                tagline={portfolio.skills_tagline.clone()}
                backdrop={portfolio.skills_backdrop}
            />
        </main>
    }
}
