use serde::Deserialize;

use crate::config::COPY_FEEDBACK_MS;
use crate::error::PageError;

const SITE_JSON: &str = include_str!("../content/site.json");

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct SiteContent {
    pub brand: Brand,
    pub hero: HeroCopy,
    pub about: AboutCopy,
    pub skills: Vec<Skill>,
    pub achievements: Vec<Achievement>,
    pub projects: Vec<Project>,
    pub contacts: Vec<ContactEntry>,
}

impl SiteContent {
    pub fn parse(raw: &str) -> Result<Self, PageError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn embedded() -> Result<Self, PageError> {
        Self::parse(SITE_JSON)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Brand {
    pub monogram: String,
    pub name: String,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct HeroCopy {
    pub first_name: String,
    pub tagline: String,
    pub description: String,
    pub floating_cards: Vec<FloatingCard>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct FloatingCard {
    pub icon: String,
    pub label: String,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct AboutCopy {
    pub paragraphs: Vec<String>,
    pub stats: Vec<Stat>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Skill {
    pub name: String,
    pub icon: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Achievement {
    pub title: String,
    pub description: String,
    pub icon: String,
    pub highlight: String,
}

/// A project's category as written in the content file: some records carry
/// one label, others a list.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Category {
    One(String),
    Many(Vec<String>),
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub tech: Vec<String>,
    pub category: Category,
    pub image: String,
    pub features: Vec<String>,
    pub link: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProjectFilter {
    #[default]
    All,
    Frontend,
    FullStack,
    Backend,
}

impl ProjectFilter {
    pub const ALL: [Self; 4] = [Self::All, Self::Frontend, Self::FullStack, Self::Backend];

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Frontend => "Frontend",
            Self::FullStack => "Full Stack",
            Self::Backend => "Backend",
        }
    }

    /// Exact comparison against the record's category value. A list-valued
    /// category never equals a single label, so such records only show
    /// under `All`.
    pub fn matches(self, category: &Category) -> bool {
        match (self, category) {
            (Self::All, _) => true,
            (_, Category::One(label)) => label == self.label(),
            (_, Category::Many(_)) => false,
        }
    }
}

pub fn filter_projects(projects: &[Project], filter: ProjectFilter) -> Vec<&Project> {
    projects
        .iter()
        .filter(|project| filter.matches(&project.category))
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactKind {
    Email,
    Phone,
    Github,
    Linkedin,
}

/// Contact fields whose value goes to the clipboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CopyTarget {
    Email,
    Phone,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContactAction<'a> {
    Copy { target: CopyTarget, text: &'a str },
    Open { url: &'a str },
}

impl ContactAction<'_> {
    /// How long the "Copied!" hint stays before reverting. Links give no
    /// feedback.
    pub fn feedback_ms(&self) -> Option<u32> {
        match self {
            Self::Copy { .. } => Some(COPY_FEEDBACK_MS),
            Self::Open { .. } => None,
        }
    }
}

/// Keys that activate a focused contact card, like a click.
pub fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " " | "Spacebar")
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ContactEntry {
    pub kind: ContactKind,
    pub label: String,
    pub value: String,
    pub display: String,
}

impl ContactEntry {
    pub fn action(&self) -> ContactAction<'_> {
        match self.kind {
            ContactKind::Email => ContactAction::Copy {
                target: CopyTarget::Email,
                text: &self.value,
            },
            ContactKind::Phone => ContactAction::Copy {
                target: CopyTarget::Phone,
                text: &self.value,
            },
            ContactKind::Github | ContactKind::Linkedin => ContactAction::Open { url: &self.value },
        }
    }

    pub fn copy_target(&self) -> Option<CopyTarget> {
        match self.action() {
            ContactAction::Copy { target, .. } => Some(target),
            ContactAction::Open { .. } => None,
        }
    }

    /// Hint under copyable entries; `None` for links.
    pub fn copy_hint(&self, copied: Option<CopyTarget>) -> Option<&'static str> {
        let target = self.copy_target()?;
        Some(if copied == Some(target) {
            "Copied!"
        } else {
            "Click to copy"
        })
    }
}
