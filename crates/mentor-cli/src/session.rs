//! Interactive review session over a generated roadmap.
//!
//! The session owns the ephemeral UI state (the completion set and the
//! currently expanded phase) as plain local values. Nothing here is
//! persisted or global: restarting or quitting drops the state, and the
//! selector never sees any of it.

use anyhow::Result;
use dialoguer::{MultiSelect, Select};
use mentor_core::display::{PhaseProgress, ProgressOverview};
use mentor_core::models::{CompletionSet, RoadmapPlan, TaskId, UserProfile};

use crate::cli::roadmap_markdown;
use crate::renderer::TerminalRenderer;

/// How a review session ended.
pub enum SessionOutcome {
    /// Discard the profile and plan and run the questionnaire again
    Restart,
    /// Leave the program
    Quit,
}

const ACTIONS: [&str; 6] = [
    "Open a phase",
    "Check off tasks",
    "Show progress",
    "Show full roadmap",
    "Restart questionnaire",
    "Quit",
];

/// Run the review loop until the user restarts or quits.
pub fn run(
    renderer: &TerminalRenderer,
    profile: &UserProfile,
    plan: &RoadmapPlan,
) -> Result<SessionOutcome> {
    let mut completed = CompletionSet::default();

    renderer.render(&roadmap_markdown(profile, plan, Some(&completed)))?;

    loop {
        let action = Select::new()
            .with_prompt("What next?")
            .items(&ACTIONS)
            .default(0)
            .interact()?;

        match action {
            0 => {
                let phase_idx = pick_phase(plan)?;
                renderer.render(&PhaseProgress::new(plan, phase_idx, &completed).to_string())?;
            }
            1 => {
                let phase_idx = pick_phase(plan)?;
                check_off_tasks(plan, phase_idx, &mut completed)?;
                renderer.render(&PhaseProgress::new(plan, phase_idx, &completed).to_string())?;
            }
            2 => {
                renderer.render(&ProgressOverview::new(plan, &completed).to_string())?;
            }
            3 => {
                renderer.render(&roadmap_markdown(profile, plan, Some(&completed)))?;
            }
            4 => return Ok(SessionOutcome::Restart),
            _ => return Ok(SessionOutcome::Quit),
        }
    }
}

fn pick_phase(plan: &RoadmapPlan) -> Result<usize> {
    let titles: Vec<&str> = plan.phases.iter().map(|phase| phase.title.as_str()).collect();
    let picked = Select::new()
        .with_prompt("Which phase?")
        .items(&titles)
        .default(0)
        .interact()?;
    Ok(picked)
}

/// Multi-select over a phase's tasks, seeded with the current completion
/// state. The set is synced to the confirmed selection, so unchecking a
/// previously completed task reopens it.
fn check_off_tasks(
    plan: &RoadmapPlan,
    phase_idx: usize,
    completed: &mut CompletionSet,
) -> Result<()> {
    let phase = &plan.phases[phase_idx];

    let mut items: Vec<(String, bool)> = Vec::new();
    let mut ids: Vec<TaskId> = Vec::new();
    for (week_idx, week) in phase.weeks.iter().enumerate() {
        for (task_idx, task) in week.tasks.iter().enumerate() {
            let id = TaskId::new(phase_idx, week_idx, task_idx);
            items.push((
                format!("Week {}: {}", week_idx + 1, task.description),
                completed.is_done(id),
            ));
            ids.push(id);
        }
    }

    let picked = MultiSelect::new()
        .with_prompt("Space toggles a task, enter confirms")
        .items_checked(items)
        .interact()?;

    for (pos, id) in ids.iter().enumerate() {
        completed.set_done(*id, picked.contains(&pos));
    }
    Ok(())
}
