use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

const PORTFOLIO_FILE: &str = "portfolio.json";

/// Project filter id that matches every project.
pub const ALL_PROJECTS: &str = "all";

/// Cards only preview this many features.
const FEATURE_PREVIEW: usize = 3;

static PORTFOLIO: LazyLock<Portfolio> = LazyLock::new(|| {
    Portfolio::from_embedded().unwrap_or_else(|e| {
        log::error!("falling back to empty portfolio: {e}");
        Portfolio::default()
    })
});

#[derive(Embed)]
#[folder = "content"]
struct ContentAssets;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("{0} is not embedded")]
    Missing(&'static str),
    #[error("Couldn't parse portfolio content: {0}")]
    Parse(#[from] serde_json::Error),
}

/// The in-page anchors each section registers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Home,
    About,
    Skills,
    Experience,
    Projects,
    Contact,
}

impl Anchor {
    pub const ALL: [Anchor; 6] = [
        Anchor::Home,
        Anchor::About,
        Anchor::Skills,
        Anchor::Experience,
        Anchor::Projects,
        Anchor::Contact,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Anchor::Home => "home",
            Anchor::About => "about",
            Anchor::Skills => "skills",
            Anchor::Experience => "experience",
            Anchor::Projects => "projects",
            Anchor::Contact => "contact",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Anchor::Home => "Home",
            Anchor::About => "About",
            Anchor::Skills => "Skills",
            Anchor::Experience => "Experience",
            Anchor::Projects => "Projects",
            Anchor::Contact => "Contact",
        }
    }

    pub fn href(&self) -> String {
        format!("#{}", self.id())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Portfolio {
    pub profile: Profile,
    pub about: About,
    pub skills: Skills,
    pub experience: Vec<ExperienceEntry>,
    pub projects: Projects,
    pub contact: ContactDetails,
    pub footer: Footer,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub brand: String,
    pub greeting: String,
    pub roles: Vec<String>,
    pub intro: String,
    pub image: String,
    pub resume: String,
    pub badges: Vec<String>,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub socials: Vec<SocialLink>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SocialLink {
    pub icon: String,
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct About {
    pub paragraphs: Vec<String>,
    pub stats: Vec<Stat>,
    pub highlights: Vec<Highlight>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Stat {
    pub icon: String,
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Highlight {
    pub icon: String,
    pub title: String,
    pub description: String,
    pub color: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Skills {
    pub categories: Vec<SkillCategory>,
    pub stack: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SkillCategory {
    pub icon: String,
    pub title: String,
    pub color: String,
    pub skills: Vec<Skill>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: u8,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub title: String,
    pub company: String,
    pub location: String,
    pub period: String,
    pub color: String,
    pub responsibilities: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Projects {
    pub categories: Vec<ProjectCategory>,
    pub github_profile: String,
    pub entries: Vec<Project>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectCategory {
    pub id: String,
    pub label: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub category: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub features: Vec<String>,
    #[serde(default)]
    pub github: String,
    #[serde(default)]
    pub demo: String,
    pub color: String,
    pub icon: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactDetails {
    pub blurb: String,
    pub cards: Vec<ContactCard>,
    pub availability: Availability,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactCard {
    pub icon: String,
    pub label: String,
    pub value: String,
    pub href: String,
    pub color: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Availability {
    pub title: String,
    pub text: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Footer {
    pub blurb: String,
    pub address: Vec<String>,
}

/// Site content, decoded from the embedded document on first use.
pub fn portfolio() -> &'static Portfolio {
    &PORTFOLIO
}

impl Portfolio {
    pub fn from_embedded() -> Result<Self, ContentError> {
        let file =
            ContentAssets::get(PORTFOLIO_FILE).ok_or(ContentError::Missing(PORTFOLIO_FILE))?;
        Self::from_json(&file.data)
    }

    pub fn from_json(data: &[u8]) -> Result<Self, ContentError> {
        Ok(serde_json::from_slice(data)?)
    }

    /// Projects shown under a filter id, in their configured order.
    pub fn projects_in(&self, category: &str) -> Vec<&Project> {
        self.projects
            .entries
            .iter()
            .filter(|p| category == ALL_PROJECTS || p.category == category)
            .collect()
    }
}

impl Profile {
    /// The role shown after `tick` rotations.
    pub fn role_at(&self, tick: usize) -> Option<&str> {
        if self.roles.is_empty() {
            return None;
        }
        Some(&self.roles[tick % self.roles.len()])
    }
}

impl Skill {
    pub fn bar_width(&self) -> String {
        format!("{}%", self.level.min(100))
    }
}

impl Project {
    pub fn feature_preview(&self) -> &[String] {
        &self.features[..self.features.len().min(FEATURE_PREVIEW)]
    }

    pub fn live_demo(&self) -> Option<&str> {
        match self.demo.as_str() {
            "" | "#" => None,
            s => Some(s),
        }
    }

    pub fn source(&self) -> Option<&str> {
        if self.github.is_empty() {
            None
        } else {
            Some(&self.github)
        }
    }
}

impl ContactCard {
    pub fn is_external(&self) -> bool {
        self.href.starts_with("http")
    }
}

pub fn copyright(name: &str, year: i32) -> String {
    format!("© {year} {name}. All rights reserved.")
}
