use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::error::PortfolioError;

pub const PROFICIENCY_DOTS: usize = 5;
const MAX_PROFICIENCY: u8 = PROFICIENCY_DOTS as u8;

/// Stagger between skill rows inside one category card.
pub const SKILL_ROW_STAGGER_MS: u32 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Icon {
    Code,
    Database,
    Globe,
    Cpu,
    Brain,
    Smartphone,
    Bot,
    Zap,
    Target,
    Lightbulb,
    Calendar,
    Monitor,
    Briefcase,
    Users,
    MessageSquare,
    ExternalLink,
    Github,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub proficiency: u8,
}

impl Skill {
    pub fn new(name: impl Into<String>, proficiency: u8) -> Self {
        Skill {
            name: name.into(),
            proficiency,
        }
    }

    pub fn fill_percent(&self) -> u8 {
        self.proficiency.min(MAX_PROFICIENCY) * 20
    }

    pub fn filled_dots(&self) -> [bool; PROFICIENCY_DOTS] {
        let mut dots = [false; PROFICIENCY_DOTS];
        for (i, dot) in dots.iter_mut().enumerate() {
            *dot = i < usize::from(self.proficiency);
        }
        dots
    }
}

/// What a category card renders for one skill.
#[derive(Debug, Clone, PartialEq)]
pub struct SkillRow {
    pub name: String,
    pub bar_width: String,
    pub dots: [bool; PROFICIENCY_DOTS],
    pub delay_ms: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub title: String,
    pub icon: Icon,
    pub skills: Vec<Skill>,
}

impl SkillCategory {
    pub fn rows(&self) -> Vec<SkillRow> {
        self.skills
            .iter()
            .zip(0u32..)
            .map(|(skill, index)| SkillRow {
                name: skill.name.clone(),
                bar_width: format!("{}%", skill.fill_percent()),
                dots: skill.filled_dots(),
                delay_ms: index * SKILL_ROW_STAGGER_MS,
            })
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TechCategory {
    Frontend,
    Backend,
    Database,
    Deployment,
    Maps,
    Tools,
    Auth,
}

impl TechCategory {
    pub fn label(self) -> &'static str {
        match self {
            TechCategory::Frontend => "Frontend",
            TechCategory::Backend => "Backend",
            TechCategory::Database => "Database",
            TechCategory::Deployment => "Deployment",
            TechCategory::Maps => "Maps",
            TechCategory::Tools => "Tools",
            TechCategory::Auth => "Auth",
        }
    }

    pub fn icon(self) -> Icon {
        match self {
            TechCategory::Frontend => Icon::Code,
            TechCategory::Backend => Icon::Zap,
            TechCategory::Database => Icon::Database,
            TechCategory::Deployment => Icon::Globe,
            TechCategory::Maps => Icon::Globe,
            TechCategory::Tools => Icon::Cpu,
            TechCategory::Auth => Icon::Target,
        }
    }
}

// Card rows, in display order.
const DISPLAYED_TECH: [TechCategory; 3] = [TechCategory::Frontend, TechCategory::Backend, TechCategory::Database];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechGroup {
    pub category: TechCategory,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProjectLinks {
    #[serde(default)]
    pub live: Option<String>,
    #[serde(default)]
    pub github: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectAction {
    LivePreview(String),
    Code(String),
}

impl ProjectAction {
    pub fn label(&self) -> &'static str {
        match self {
            ProjectAction::LivePreview(_) => "Live Preview",
            ProjectAction::Code(_) => "Code",
        }
    }

    pub fn url(&self) -> &str {
        match self {
            ProjectAction::LivePreview(url) | ProjectAction::Code(url) => url,
        }
    }

    pub fn icon(&self) -> Icon {
        match self {
            ProjectAction::LivePreview(_) => Icon::ExternalLink,
            ProjectAction::Code(_) => Icon::Github,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub image: String,
    pub icon: Icon,
    /// Two CSS colours for the icon badge gradient.
    pub accent: (String, String),
    pub features: Vec<String>,
    #[serde(default)]
    pub tech: Vec<TechGroup>,
    #[serde(default)]
    pub links: ProjectLinks,
}

impl Project {
    pub fn actions(&self) -> Vec<ProjectAction> {
        let mut actions = Vec::with_capacity(2);
        if let Some(live) = &self.links.live {
            actions.push(ProjectAction::LivePreview(live.clone()));
        }
        if let Some(github) = &self.links.github {
            actions.push(ProjectAction::Code(github.clone()));
        }
        actions
    }

    /// Frontend, backend and database groups, in that order, when present.
    pub fn displayed_tech(&self) -> impl Iterator<Item = &TechGroup> {
        DISPLAYED_TECH
            .into_iter()
            .filter_map(move |category| self.tech.iter().find(|group| group.category == category))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stat {
    pub icon: Icon,
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub role: String,
    pub organisation: String,
    pub period: String,
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AboutContent {
    pub heading: String,
    pub portrait: String,
    pub stats: Vec<Stat>,
    pub status: String,
    pub journey: String,
    pub what_i_do: Vec<String>,
    pub experience: Vec<Experience>,
}

/// How many icons drift behind a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Density {
    Low,
    #[default]
    Medium,
    High,
}

impl Density {
    pub fn count(self) -> usize {
        match self {
            Density::Low => 6,
            Density::Medium => 10,
            Density::High => 16,
        }
    }
}

/// How long one drift loop takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Speed {
    #[default]
    Slow,
    Medium,
    Fast,
}

impl Speed {
    pub fn base_duration_ms(self) -> u32 {
        match self {
            Speed::Slow => 20_000,
            Speed::Medium => 14_000,
            Speed::Fast => 8_000,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Backdrop {
    #[serde(default)]
    pub density: Density,
    #[serde(default)]
    pub speed: Speed,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Portfolio {
    pub about: AboutContent,
    pub projects: Vec<Project>,
    pub skill_categories: Vec<SkillCategory>,
    pub github_profile: String,
    pub skills_tagline: String,
    #[serde(default)]
    pub skills_backdrop: Backdrop,
}

impl Portfolio {
    pub fn from_json(raw: &str) -> Result<Self, PortfolioError> {
        let portfolio: Portfolio = serde_json::from_str(raw)?;
        portfolio.validate()?;
        info!(
            "Loaded portfolio: {} projects, {} skill categories",
            portfolio.projects.len(),
            portfolio.skill_categories.len()
        );
        Ok(portfolio)
    }

    fn validate(&self) -> Result<(), PortfolioError> {
        for skill in self.skill_categories.iter().flat_map(|c| &c.skills) {
            if skill.proficiency > MAX_PROFICIENCY {
                return Err(PortfolioError::ProficiencyOutOfRange {
                    skill: skill.name.clone(),
                    value: skill.proficiency,
                });
            }
            if skill.proficiency == 0 {
                warn!("Skill {} has proficiency 0 and renders an empty bar", skill.name);
            }
        }
        for project in &self.projects {
            if project.actions().is_empty() {
                warn!("Project {} has no live or github link", project.title);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PORTFOLIO_JSON;

    fn project(links: ProjectLinks) -> Project {
        Project {
            title: "Clone".into(),
            description: String::new(),
            image: String::new(),
            icon: Icon::MessageSquare,
            accent: ("#f97316".into(), "#dc2626".into()),
            features: vec![],
            tech: vec![],
            links,
        }
    }

    #[test]
    fn proficiency_maps_exactly_to_bar_width() {
        assert_eq!(Skill::new("a", 5).fill_percent(), 100);
        assert_eq!(Skill::new("b", 1).fill_percent(), 20);
        assert_eq!(Skill::new("c", 0).fill_percent(), 0);
    }

    #[test]
    fn category_renders_bars_and_dots() {
        let category = SkillCategory {
            title: "Test".into(),
            icon: Icon::Code,
            skills: vec![Skill::new("X", 5), Skill::new("Y", 3)],
        };
        let rows = category.rows();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].bar_width, "100%");
        assert_eq!(rows[1].bar_width, "60%");
        assert!(rows.iter().all(|row| row.dots.len() == PROFICIENCY_DOTS));
        assert_eq!(rows[0].dots.iter().filter(|d| **d).count(), 5);
        assert_eq!(rows[1].dots, [true, true, true, false, false]);
        assert!(rows[0].delay_ms <= rows[1].delay_ms);
    }

    #[test]
    fn github_only_project_has_only_code_action() {
        let project = project(ProjectLinks {
            live: None,
            github: Some("https://github.com/example/codequest".into()),
        });
        let actions = project.actions();
        assert_eq!(actions.len(), 1);
        assert_eq!(actions[0].label(), "Code");
        assert_eq!(actions[0].url(), "https://github.com/example/codequest");
    }

    #[test]
    fn live_preview_comes_before_code() {
        let project = project(ProjectLinks {
            live: Some("https://demo.example".into()),
            github: Some("https://github.com/example/demo".into()),
        });
        let labels: Vec<_> = project.actions().iter().map(ProjectAction::label).collect();
        assert_eq!(labels, ["Live Preview", "Code"]);
    }

    #[test]
    fn displayed_tech_keeps_card_order_and_skips_extras() {
        let mut project = project(ProjectLinks::default());
        project.tech = vec![
            TechGroup { category: TechCategory::Tools, items: vec!["Git".into()] },
            TechGroup { category: TechCategory::Database, items: vec!["MongoDB".into()] },
            TechGroup { category: TechCategory::Frontend, items: vec!["React".into()] },
        ];
        let shown: Vec<_> = project.displayed_tech().map(|g| g.category).collect();
        assert_eq!(shown, [TechCategory::Frontend, TechCategory::Database]);
    }

    #[test]
    fn bundled_content_loads() {
        let portfolio = Portfolio::from_json(PORTFOLIO_JSON).unwrap();
        assert!(!portfolio.projects.is_empty());
        assert!(!portfolio.skill_categories.is_empty());
        assert_eq!(portfolio.about.stats.len(), 3);
        assert!(portfolio.projects.iter().any(|p| p.links.live.is_none()));
    }

    #[test]
    fn rejects_proficiency_above_five() {
        let raw = r#"{
            "about": {"heading": "", "portrait": "", "stats": [], "status": "", "journey": "",
                      "what_i_do": [], "experience": []},
            "projects": [],
            "skill_categories": [{"title": "T", "icon": "Code", "skills": [{"name": "Rust", "proficiency": 6}]}],
            "github_profile": "",
            "skills_tagline": ""
        }"#;
        match Portfolio::from_json(raw) {
            Err(PortfolioError::ProficiencyOutOfRange { skill, value }) => {
                assert_eq!(skill, "Rust");
                assert_eq!(value, 6);
            }
            other => panic!("expected proficiency error, got {:?}", other),
        }
    }

    #[test]
    fn backdrop_defaults_to_medium_and_slow() {
        let portfolio = Portfolio::from_json(PORTFOLIO_JSON).unwrap();
        assert_eq!(portfolio.skills_backdrop, Backdrop::default());
        assert_eq!(Backdrop::default().density, Density::Medium);
        assert_eq!(Backdrop::default().speed, Speed::Slow);
    }

    #[test]
    fn backdrop_parses_every_setting() {
        let dense: Backdrop = serde_json::from_str(r#"{"density": "high", "speed": "fast"}"#).unwrap();
        assert_eq!(dense.density.count(), 16);
        assert_eq!(dense.speed.base_duration_ms(), 8_000);

        let sparse: Backdrop = serde_json::from_str(r#"{"density": "low", "speed": "medium"}"#).unwrap();
        assert_eq!(sparse.density.count(), 6);
        assert_eq!(sparse.speed.base_duration_ms(), 14_000);

        assert!(serde_json::from_str::<Backdrop>(r#"{"density": "dense"}"#).is_err());
    }

    #[test]
    fn malformed_json_is_a_content_error() {
        assert!(matches!(Portfolio::from_json("{"), Err(PortfolioError::Content(_))));
    }
}
