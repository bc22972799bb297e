//! Command handlers and clap argument wrappers.
//!
//! This module implements the CLI side of the parameter wrapper pattern:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Domain Logic
//! ```
//!
//! The argument structures carry clap-specific attributes (flags, help
//! text, value delimiters) and convert via [`From`] into the framework-free
//! [`IntakeAnswers`] core parameter structure, which owns all domain-level
//! validation. The CLI can evolve its flag surface without touching core
//! types, and every interface (flags, interactive prompts) funnels through
//! the same validation with the same error wording.

use anyhow::Result;
use clap::Args;
use mentor_core::catalog::content;
use mentor_core::display::{PlanProgress, ProfileSummary};
use mentor_core::models::{CompletionSet, Domain, RoadmapPlan, UserProfile};
use mentor_core::params::IntakeAnswers;
use mentor_core::selector;

use crate::intake;
use crate::renderer::TerminalRenderer;

/// The eight questionnaire answers, supplied as flags
///
/// CLI wrapper for [`IntakeAnswers`]. Single-choice answers default to the
/// questionnaire's preselected options, so only the free-text fields are
/// required.
#[derive(Args)]
pub struct AnswerArgs {
    /// Your educational/professional background
    #[arg(short, long)]
    pub background: String,
    /// Technical skills you currently have
    #[arg(short = 's', long = "skills")]
    pub current_skills: String,
    /// Experience level (absolute-beginner, beginner, intermediate, advanced)
    #[arg(short, long, default_value = "beginner")]
    pub experience: String,
    /// Hours per week you can dedicate (0-5, 5-10, 10-20, 20+)
    #[arg(short, long = "time", default_value = "5-10")]
    pub time_available: String,
    /// Your primary career goal
    #[arg(short = 'g', long = "goal")]
    pub career_goal: String,
    /// Domains of interest as a comma-separated list (see `tm domains`)
    #[arg(short, long, value_delimiter = ',')]
    pub domains: Vec<String>,
    /// Learning style (theory-first, project-based, balanced)
    #[arg(long = "style", default_value = "project-based")]
    pub learning_style: String,
    /// Target timeline in months (3-6, 6-12, 12-24, 24+)
    #[arg(long, default_value = "6-12")]
    pub timeline: String,
}

impl From<AnswerArgs> for IntakeAnswers {
    /// Convert CLI arguments to the core parameter structure.
    ///
    /// Validation happens in [`IntakeAnswers::submit`], not here, so flag
    /// input and interactive input share identical checks.
    fn from(val: AnswerArgs) -> Self {
        IntakeAnswers {
            background: val.background,
            current_skills: val.current_skills,
            experience: val.experience,
            time_available: val.time_available,
            career_goal: val.career_goal,
            domains: val.domains,
            learning_style: val.learning_style,
            timeline: val.timeline,
        }
    }
}

/// Generate a roadmap without prompts
#[derive(Args)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub answers: AnswerArgs,

    /// Emit the roadmap as JSON instead of rendering it
    #[arg(long)]
    pub json: bool,
}

/// Command handler owning the terminal renderer.
pub struct Cli {
    renderer: TerminalRenderer,
}

impl Cli {
    /// Create a new command handler.
    pub fn new(renderer: TerminalRenderer) -> Self {
        Self { renderer }
    }

    /// Handle `tm generate`: validate the flag answers, generate the plan,
    /// and render it (or dump JSON).
    pub fn handle_generate(&self, args: GenerateArgs) -> Result<()> {
        let GenerateArgs { answers, json } = args;
        let answers: IntakeAnswers = answers.into();

        let profile = answers.submit()?;
        let plan = selector::generate(&profile);

        if json {
            println!("{}", plan.to_json()?);
            return Ok(());
        }

        self.renderer.render(&roadmap_markdown(&profile, &plan, None))
    }

    /// Handle `tm domains`: list the accepted domain vocabulary.
    pub fn handle_domains(&self) -> Result<()> {
        let mut markdown = String::from("# Domains\n\n");
        for domain in Domain::ALL {
            markdown.push_str(&format!("- {}\n", domain.as_str()));
        }
        self.renderer.render(&markdown)
    }

    /// Handle `tm intake`: run the interactive questionnaire and review
    /// session.
    pub fn handle_intake(&self) -> Result<()> {
        intake::run(&self.renderer)
    }
}

/// Compose the full roadmap page: profile summary, the plan (with
/// completion icons when a session's set is supplied), the career
/// enablement plan, and the next-actions list.
pub(crate) fn roadmap_markdown(
    profile: &UserProfile,
    plan: &RoadmapPlan,
    completed: Option<&CompletionSet>,
) -> String {
    let mut markdown = format!("{}\n", ProfileSummary(profile));

    match completed {
        Some(done) => markdown.push_str(&PlanProgress::new(plan, done).to_string()),
        None => markdown.push_str(&plan.to_string()),
    }

    markdown.push_str(&content::career_plan().to_string());
    markdown.push_str("## Your Next Actions\n\n");
    for (idx, action) in content::next_actions().iter().enumerate() {
        markdown.push_str(&format!("{}. {action}\n", idx + 1));
    }

    markdown
}
