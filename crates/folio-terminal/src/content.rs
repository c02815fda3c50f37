//! Portfolio content and its text rendering.
//!
//! Content is plain data deserialized from TOML. A sample is bundled with
//! the crate; `Portfolio::load` reads a replacement from disk.

use std::path::Path;

use serde::Deserialize;

use folio_types::error::{FolioError, Result};

const BUNDLED_PORTFOLIO: &str = include_str!("../data/portfolio.toml");

/// Column at which `align_right` ends the right-hand text.
pub const ALIGN_WIDTH: usize = 38;

/// Width of a skill bar between the brackets.
pub const SKILL_BAR_WIDTH: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Portfolio {
    pub resume_url: String,
    pub about: About,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub experience: Vec<Role>,
    #[serde(default)]
    pub education: Education,
    #[serde(default)]
    pub achievements: Achievements,
    pub contact: Contact,
    #[serde(default)]
    pub social: Vec<Link>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct About {
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Link {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub details: Vec<String>,
    pub tech: String,
    #[serde(default)]
    pub links: Vec<Link>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Skill {
    pub name: String,
    /// Proficiency in percent, 0..=100.
    pub level: u8,
    pub keywords: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Role {
    pub title: String,
    pub company: String,
    pub start: String,
    pub end: String,
    pub location: String,
    #[serde(default)]
    pub bullets: Vec<String>,
    #[serde(default)]
    pub tech: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Education {
    #[serde(default)]
    pub degrees: Vec<Degree>,
    #[serde(default)]
    pub certifications: Vec<String>,
    #[serde(default)]
    pub learning: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Degree {
    pub degree: String,
    pub institution: String,
    pub start: String,
    pub end: String,
    #[serde(default)]
    pub details: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Achievements {
    #[serde(default)]
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Contact {
    pub email: String,
    pub phone: String,
    pub location: String,
    pub linkedin: String,
    pub github: String,
}

impl Portfolio {
    /// The sample content compiled into the crate.
    pub fn bundled() -> Result<Self> {
        Self::from_toml(BUNDLED_PORTFOLIO)
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        let portfolio: Portfolio = toml::from_str(text)?;
        portfolio.validate()?;
        Ok(portfolio)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let portfolio = Self::from_toml(&text)?;
        log::info!("Loaded portfolio content from {}", path.display());
        Ok(portfolio)
    }

    fn validate(&self) -> Result<()> {
        if let Some(skill) = self.skills.iter().find(|s| s.level > 100) {
            return Err(FolioError::Content(format!(
                "skill {} has level {} (max 100)",
                skill.name, skill.level
            )));
        }
        Ok(())
    }

    pub fn render_projects(&self) -> String {
        let projects = self
            .projects
            .iter()
            .map(|p| {
                let details = p
                    .details
                    .iter()
                    .map(|d| format!("  > {d}"))
                    .collect::<Vec<_>>()
                    .join("\n");
                let links = p
                    .links
                    .iter()
                    .map(|l| l.name.as_str())
                    .collect::<Vec<_>>()
                    .join(" | ");
                [
                    p.title.to_uppercase(),
                    p.description.clone(),
                    String::new(),
                    details,
                    String::new(),
                    format!("  * {}", p.tech),
                    format!("  @ {links}"),
                ]
                .join("\n")
            })
            .collect::<Vec<_>>()
            .join("\n\n\n");
        format!("{}\n\n\n{projects}", header("featured projects"))
    }

    pub fn render_skills(&self) -> String {
        let skills = self
            .skills
            .iter()
            .map(|s| {
                format!(
                    "{}\n{}\n{}",
                    align_right(&s.name, &format!("{}%", s.level), ALIGN_WIDTH),
                    skill_bar(s.level, SKILL_BAR_WIDTH),
                    s.keywords
                )
            })
            .collect::<Vec<_>>()
            .join("\n\n");
        format!("{}\n\n\n{skills}", header("technical skills"))
    }

    pub fn render_experience(&self) -> String {
        let roles = self
            .experience
            .iter()
            .map(render_role)
            .collect::<Vec<_>>()
            .join("\n\n---\n\n");
        format!("{}\n\n\n{roles}", header("work experience"))
    }

    pub fn render_education(&self) -> String {
        let edu = &self.education;
        let mut sections = vec![header("education"), String::new(), String::new()];
        if !edu.degrees.is_empty() {
            sections.push(
                edu.degrees
                    .iter()
                    .map(render_degree)
                    .collect::<Vec<_>>()
                    .join("\n\n---\n\n"),
            );
        }
        if !edu.certifications.is_empty() {
            sections.extend([String::new(), String::new(), header("certifications"), String::new()]);
            sections.extend(edu.certifications.iter().map(|c| format!("  > {c}")));
        }
        if !edu.learning.is_empty() {
            sections.extend([String::new(), String::new(), header("current learning"), String::new()]);
            sections.extend(edu.learning.iter().map(|l| format!("  - {l}")));
        }
        sections.join("\n")
    }

    pub fn render_achievements(&self) -> String {
        let mut lines = vec![header("key achievements"), String::new()];
        lines.extend(self.achievements.items.iter().map(|a| format!("  > {a}")));
        lines.join("\n")
    }

    pub fn render_contact(&self) -> String {
        let c = &self.contact;
        [
            header("contact"),
            String::new(),
            format!("  Email      {}", c.email),
            format!("  Phone      {}", c.phone),
            format!("  Location   {}", c.location),
            String::new(),
            "  ---".to_string(),
            String::new(),
            format!("  LinkedIn   {}", c.linkedin),
            format!("  GitHub     {}", c.github),
        ]
        .join("\n")
    }

    pub fn render_social(&self) -> String {
        let mut lines = vec![header("social"), String::new()];
        lines.extend(self.social.iter().map(|l| format!("  {:<12} {}", l.name, l.url)));
        lines.join("\n")
    }
}

fn render_role(role: &Role) -> String {
    let mut lines = vec![
        role.title.to_uppercase(),
        role.company.clone(),
        format!("{} - {} | {}", role.start, role.end, role.location),
    ];
    lines.extend(role.bullets.iter().map(|b| format!("  > {b}")));
    if !role.tech.is_empty() {
        lines.push(format!("  * {}", role.tech.join(", ")));
    }
    lines.retain(|l| !l.is_empty());
    lines.join("\n")
}

fn render_degree(degree: &Degree) -> String {
    let institution = if degree.institution.chars().count() > 30 {
        degree
            .institution
            .split(' ')
            .take(3)
            .collect::<Vec<_>>()
            .join(" ")
    } else {
        degree.institution.clone()
    };
    let mut lines = vec![
        degree.degree.to_uppercase(),
        institution,
        format!("{} - {}", degree.start, degree.end),
        String::new(),
    ];
    lines.extend(degree.details.iter().map(|d| format!("  {d}")));
    lines.join("\n")
}

/// Section header: `=== TEXT ===`.
pub fn header(text: &str) -> String {
    format!("=== {} ===", text.to_uppercase())
}

/// `[====      ]` bar, `width` cells wide, filled to `percent`.
pub fn skill_bar(percent: u8, width: usize) -> String {
    let percent = usize::from(percent.min(100));
    // Round half up, matching how percentages read.
    let filled = (percent * width + 50) / 100;
    format!("[{}{}]", "=".repeat(filled), " ".repeat(width - filled))
}

/// `left` and `right` separated so the line is `width` wide, with at least
/// one space between them.
pub fn align_right(left: &str, right: &str, width: usize) -> String {
    let used = left.chars().count() + right.chars().count();
    let padding = width.saturating_sub(used).max(1);
    format!("{left}{}{right}", " ".repeat(padding))
}
