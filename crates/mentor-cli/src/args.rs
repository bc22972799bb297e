use clap::{Parser, Subcommand};

use crate::cli::GenerateArgs;

/// Main command-line interface for the Tech Mentor roadmap tool
///
/// Tech Mentor collects a short questionnaire about your background, goals,
/// and interests, and generates a four-phase learning roadmap from them.
/// Run it without a subcommand for the interactive questionnaire, or use
/// `generate` to supply every answer as a flag.
#[derive(Parser)]
#[command(version, about, name = "tm")]
pub struct Args {
    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Tech Mentor CLI
///
/// The CLI is organized into three commands:
/// - `intake`: interactive questionnaire plus a review session (default)
/// - `generate`: non-interactive generation from answer flags
/// - `domains`: list the domain vocabulary accepted by `--domains`
#[derive(Subcommand)]
pub enum Commands {
    /// Answer the questionnaire interactively and review the roadmap
    #[command(alias = "i")]
    Intake,
    /// Generate a roadmap from answers supplied as flags
    #[command(alias = "g")]
    Generate(GenerateArgs),
    /// List the accepted domain names
    #[command(alias = "d")]
    Domains,
}
