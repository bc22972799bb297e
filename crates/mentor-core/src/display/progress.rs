//! Wrapper types rendering a plan against session completion state.

use std::fmt;

use super::models::{fmt_phase, phase_progress};
use crate::models::{CompletionSet, RoadmapPlan};

/// Renders a full plan with completion icons and progress counts.
///
/// Borrows both the plan and the completion set; the set stays owned by
/// the presentation layer.
///
/// # Examples
///
/// ```rust
/// use mentor_core::display::PlanProgress;
/// use mentor_core::models::{CompletionSet, TaskId};
/// use mentor_core::params::IntakeAnswers;
/// use mentor_core::selector;
///
/// let answers = IntakeAnswers {
///     background: "CS student".to_string(),
///     current_skills: "Some Python".to_string(),
///     career_goal: "Software engineer".to_string(),
///     ..IntakeAnswers::default()
/// };
/// let plan = selector::generate(&answers.submit()?);
///
/// let mut done = CompletionSet::default();
/// done.toggle(TaskId::new(0, 0, 0));
///
/// let output = format!("{}", PlanProgress::new(&plan, &done));
/// assert!(output.contains("1/"));
/// assert!(output.contains("✓"));
/// # Ok::<(), mentor_core::MentorError>(())
/// ```
pub struct PlanProgress<'a> {
    plan: &'a RoadmapPlan,
    completed: &'a CompletionSet,
}

impl<'a> PlanProgress<'a> {
    /// Create a progress view over a plan and a completion set.
    pub fn new(plan: &'a RoadmapPlan, completed: &'a CompletionSet) -> Self {
        Self { plan, completed }
    }
}

impl fmt::Display for PlanProgress<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Completed: {}/{} tasks",
            self.completed.len(),
            self.plan.task_count()
        )?;
        writeln!(f)?;

        for (phase_idx, phase) in self.plan.phases.iter().enumerate() {
            fmt_phase(f, phase, phase_idx, Some(self.completed))?;
        }
        Ok(())
    }
}

/// Renders a single phase of a plan with completion icons: the expanded
/// phase of an interactive review session.
pub struct PhaseProgress<'a> {
    plan: &'a RoadmapPlan,
    phase_idx: usize,
    completed: &'a CompletionSet,
}

impl<'a> PhaseProgress<'a> {
    /// Create a progress view over one phase of a plan.
    pub fn new(plan: &'a RoadmapPlan, phase_idx: usize, completed: &'a CompletionSet) -> Self {
        Self {
            plan,
            phase_idx,
            completed,
        }
    }
}

impl fmt::Display for PhaseProgress<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.plan.phases.get(self.phase_idx) {
            Some(phase) => fmt_phase(f, phase, self.phase_idx, Some(self.completed)),
            None => writeln!(f, "No such phase."),
        }
    }
}

/// Compact per-phase progress listing for the review session menu.
pub struct ProgressOverview<'a> {
    plan: &'a RoadmapPlan,
    completed: &'a CompletionSet,
}

impl<'a> ProgressOverview<'a> {
    /// Create a compact progress overview.
    pub fn new(plan: &'a RoadmapPlan, completed: &'a CompletionSet) -> Self {
        Self { plan, completed }
    }
}

impl fmt::Display for ProgressOverview<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## Progress Overview")?;
        writeln!(f)?;
        for (phase_idx, phase) in self.plan.phases.iter().enumerate() {
            let (checked, total) = phase_progress(phase, phase_idx, self.completed);
            writeln!(f, "- {}: {checked}/{total} tasks", phase.title)?;
        }
        writeln!(
            f,
            "- **Total**: {}/{} tasks",
            self.completed.len(),
            self.plan.task_count()
        )?;
        Ok(())
    }
}
