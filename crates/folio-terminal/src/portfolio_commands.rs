//! Content commands: static portfolio sections rendered once at registration.

use folio_types::error::Result;

use crate::content::Portfolio;
use crate::interpreter::{Command, CommandContext, CommandRegistry, Output, OutputKind};

/// Register the portfolio content commands plus `resume` and `download`.
pub fn register_portfolio_commands(reg: &mut CommandRegistry, portfolio: &Portfolio) {
    let sections = [
        ("about", "Learn about me", OutputKind::Info, portfolio.about.content.clone()),
        ("projects", "View featured projects", OutputKind::List, portfolio.render_projects()),
        ("skills", "View technical skills", OutputKind::Info, portfolio.render_skills()),
        ("experience", "View work experience", OutputKind::Info, portfolio.render_experience()),
        ("education", "View educational background", OutputKind::Info, portfolio.render_education()),
        ("achievements", "View accomplishments", OutputKind::Success, portfolio.render_achievements()),
        ("contact", "Get contact information", OutputKind::Info, portfolio.render_contact()),
    ];
    for (name, description, kind, body) in sections {
        reg.register(Box::new(SectionCmd {
            name,
            description,
            kind,
            body,
        }));
    }
    reg.register(Box::new(ResumeCmd {
        name: "resume",
        label: "Resume ready:",
        url: portfolio.resume_url.clone(),
    }));
    reg.register(Box::new(ResumeCmd {
        name: "download",
        label: "Download:",
        url: portfolio.resume_url.clone(),
    }));
    reg.register(Box::new(SectionCmd {
        name: "social",
        description: "View social media links",
        kind: OutputKind::Info,
        body: portfolio.render_social(),
    }));
}

// ---------------------------------------------------------------------------
// about, projects, skills, experience, education, achievements, contact, social
// ---------------------------------------------------------------------------

struct SectionCmd {
    name: &'static str,
    description: &'static str,
    kind: OutputKind,
    body: String,
}

impl Command for SectionCmd {
    fn name(&self) -> &str {
        self.name
    }
    fn description(&self) -> &str {
        self.description
    }
    fn execute(&self, _args: &str, _ctx: &mut CommandContext<'_>) -> Result<Option<Output>> {
        Ok(Some(Output::new(self.kind, self.body.as_str())))
    }
}

// ---------------------------------------------------------------------------
// resume, download
// ---------------------------------------------------------------------------

struct ResumeCmd {
    name: &'static str,
    label: &'static str,
    url: String,
}

impl Command for ResumeCmd {
    fn name(&self) -> &str {
        self.name
    }
    fn description(&self) -> &str {
        "Download resume"
    }
    fn execute(&self, _args: &str, _ctx: &mut CommandContext<'_>) -> Result<Option<Output>> {
        Ok(Some(Output::success(format!("{}\n{}", self.label, self.url))))
    }
}
