//! Display implementations for domain models.
//!
//! All implementations produce markdown suited to the terminal renderer:
//! `##` phase headers, `###` week sections, task bullets with completion
//! icons (`✓` done, `○` open), and `####` subsections for milestone
//! projects and resources.

use std::fmt;

use crate::models::{CareerPlan, CompletionSet, Phase, Resource, RoadmapPlan, TaskId};

/// Format one phase, optionally against a session's completion state.
///
/// With `completed` absent every task renders with the open icon; with it
/// present, icons follow the set and a progress line is added under the
/// description. `phase_idx` is only consulted to build task identifiers.
pub(crate) fn fmt_phase(
    f: &mut fmt::Formatter<'_>,
    phase: &Phase,
    phase_idx: usize,
    completed: Option<&CompletionSet>,
) -> fmt::Result {
    writeln!(f, "## {} ({})", phase.title, phase.duration)?;
    writeln!(f)?;
    writeln!(f, "{}", phase.description)?;
    writeln!(f)?;

    if let Some(done) = completed {
        let (checked, total) = phase_progress(phase, phase_idx, done);
        writeln!(f, "Progress: {checked}/{total} tasks")?;
        writeln!(f)?;
    }

    for (week_idx, week) in phase.weeks.iter().enumerate() {
        writeln!(f, "### Week {}: {}", week_idx + 1, week.focus)?;
        writeln!(f)?;
        for (task_idx, task) in week.tasks.iter().enumerate() {
            let icon = match completed {
                Some(done) if done.is_done(TaskId::new(phase_idx, week_idx, task_idx)) => "✓",
                _ => "○",
            };
            writeln!(f, "- {icon} {}", task.description)?;
            if let Some(url) = &task.resource {
                writeln!(f, "  - Resource: {url}")?;
            }
        }
        writeln!(f)?;
    }

    writeln!(f, "#### Milestone Project")?;
    writeln!(f)?;
    writeln!(f, "{}", phase.project)?;
    writeln!(f)?;

    writeln!(f, "#### Recommended Resources")?;
    writeln!(f)?;
    for resource in &phase.resources {
        writeln!(f, "- {resource}")?;
    }
    writeln!(f)?;

    Ok(())
}

/// Checked and total task counts for one phase.
pub(crate) fn phase_progress(
    phase: &Phase,
    phase_idx: usize,
    completed: &CompletionSet,
) -> (usize, usize) {
    let mut checked = 0;
    let mut total = 0;
    for (week_idx, week) in phase.weeks.iter().enumerate() {
        total += week.tasks.len();
        for task_idx in 0..week.tasks.len() {
            if completed.is_done(TaskId::new(phase_idx, week_idx, task_idx)) {
                checked += 1;
            }
        }
    }
    (checked, total)
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_phase(f, self, 0, None)
    }
}

impl fmt::Display for RoadmapPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Duration overview strip, then the full phase breakdown
        for phase in &self.phases {
            writeln!(f, "- **{}**: {}", phase.duration, phase.title)?;
        }
        writeln!(f)?;

        for (phase_idx, phase) in self.phases.iter().enumerate() {
            fmt_phase(f, phase, phase_idx, None)?;
        }
        Ok(())
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}): {}", self.name, self.kind, self.url)
    }
}

impl fmt::Display for CareerPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## Career Enablement Plan")?;
        writeln!(f)?;

        let sections = [
            ("Portfolio Building", &self.portfolio),
            ("Certifications", &self.certifications),
            ("Job Search Strategy", &self.job_search),
        ];
        for (title, items) in sections {
            writeln!(f, "### {title}")?;
            writeln!(f)?;
            for item in items {
                writeln!(f, "- {item}")?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
