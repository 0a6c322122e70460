use chrono::{DateTime, Datelike, Utc};
use rust_embed::Embed;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

pub static PORTFOLIO: LazyLock<Portfolio> = LazyLock::new(|| {
    Portfolio::load().unwrap_or_else(|e| {
        log::error!("falling back to empty content: {e}");
        Portfolio::default()
    })
});

#[derive(Embed)]
#[folder = "content"]
pub struct Assets;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("content file {0} not found")]
    Missing(&'static str),
    #[error("couldn't parse {file}: {source}")]
    Parse {
        file: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub name: String,
    pub url: String,
    pub icon: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
    pub sub: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub initials: String,
    pub short_name: String,
    pub headline: String,
    pub location: String,
    pub email: String,
    pub phone: String,
    pub maps_url: String,
    pub resume_url: String,
    pub available: bool,
    pub availability: String,
    /// Phrases cycled by the hero typewriter.
    pub roles: Vec<String>,
    pub intro: String,
    pub bio: Vec<String>,
    pub stats: Vec<Stat>,
    pub socials: Vec<SocialLink>,
}

impl Profile {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }

    /// `tel:` link with the display spacing stripped.
    pub fn tel(&self) -> String {
        let digits: String = self.phone.chars().filter(|c| !c.is_whitespace()).collect();
        format!("tel:{digits}")
    }

    pub fn social(&self, name: &str) -> Option<&SocialLink> {
        self.socials.iter().find(|s| s.name.eq_ignore_ascii_case(name))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    #[default]
    Completed,
    Ongoing,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectLinks {
    pub live: Option<String>,
    pub behance: Option<String>,
    pub github: Option<String>,
}

impl ProjectLinks {
    /// Present links with their button labels, in display order.
    pub fn labelled(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("Live Demo", &self.live),
            ("Case Study", &self.behance),
            ("GitHub", &self.github),
        ]
        .into_iter()
        .filter_map(|(label, url)| url.as_deref().map(|u| (label, u)))
    }

    pub fn is_empty(&self) -> bool {
        self.labelled().next().is_none()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub year: String,
    pub description: String,
    pub tools: Vec<String>,
    pub status: ProjectStatus,
    #[serde(default)]
    pub links: ProjectLinks,
    /// Tailwind gradient stops for the card header.
    pub accent: String,
    pub icon: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    #[serde(default)]
    pub icon: Option<String>,
    pub color: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub label: String,
    pub title: String,
    pub skills: Vec<Skill>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimelineItem {
    pub year: String,
    pub degree: String,
    pub short: String,
    pub institution: String,
    pub location: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Portfolio {
    pub profile: Profile,
    pub projects: Vec<Project>,
    pub skills: Vec<SkillCategory>,
    pub timeline: Vec<TimelineItem>,
}

impl Portfolio {
    pub fn load() -> Result<Self, ContentError> {
        Ok(Self {
            profile: read("profile.json")?,
            projects: read("projects.json")?,
            skills: read("skills.json")?,
            timeline: read("timeline.json")?,
        })
    }
}

fn read<T: DeserializeOwned>(file: &'static str) -> Result<T, ContentError> {
    let content = Assets::get(file).ok_or(ContentError::Missing(file))?;
    parse(file, &content.data)
}

fn parse<T: DeserializeOwned>(file: &'static str, data: &[u8]) -> Result<T, ContentError> {
    serde_json::from_slice(data).map_err(|source| ContentError::Parse { file, source })
}

/// Year the site was built, for the footer copyright line.
pub fn build_year() -> i32 {
    year_of(env!("BUILD_TIME")).unwrap_or_else(|| Utc::now().year())
}

fn year_of(timestamp: &str) -> Option<i32> {
    DateTime::parse_from_rfc3339(timestamp).ok().map(|d| d.year())
}
