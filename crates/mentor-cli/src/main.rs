//! Tech Mentor CLI Application
//!
//! Command-line interface for the Tech Mentor learning roadmap tool.

mod args;
mod cli;
mod intake;
mod renderer;
mod session;

use anyhow::Result;
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use Commands::*;

fn main() -> Result<()> {
    env_logger::init();

    let Args { no_color, command } = Args::parse();

    let renderer = TerminalRenderer::new(!no_color);
    let cli = Cli::new(renderer);

    info!("Tech Mentor started");

    match command {
        Some(Generate(args)) => cli.handle_generate(args),
        Some(Domains) => cli.handle_domains(),
        Some(Intake) | None => cli.handle_intake(),
    }
}
