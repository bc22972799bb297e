//! Roadmap plan models: the tree a generated roadmap is made of.

use serde::{Deserialize, Serialize};

use super::TaskId;

/// Number of phases in every generated roadmap.
pub const PHASE_COUNT: usize = 4;

/// A complete generated learning roadmap.
///
/// Always contains exactly [`PHASE_COUNT`] phases in fixed order: Foundation
/// Phase, Core Skills Development, Advanced Specialization, Job-Ready
/// Mastery. Derived deterministically from a
/// [`UserProfile`](super::UserProfile); recomputed rather than cached
/// whenever the profile changes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoadmapPlan {
    /// The four phases, in order
    pub phases: Vec<Phase>,
}

impl RoadmapPlan {
    /// Total number of tasks across all phases and weeks.
    pub fn task_count(&self) -> usize {
        self.phases
            .iter()
            .flat_map(|phase| &phase.weeks)
            .map(|week| week.tasks.len())
            .sum()
    }

    /// Whether the given task identifier addresses a task in this plan.
    pub fn contains(&self, id: TaskId) -> bool {
        self.phases
            .get(id.phase)
            .and_then(|phase| phase.weeks.get(id.week))
            .map(|week| id.task < week.tasks.len())
            .unwrap_or(false)
    }

    /// Serialize the plan as pretty-printed JSON.
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// One of the four fixed top-level stages of a roadmap.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Phase {
    /// Title of the phase
    pub title: String,

    /// Duration label (e.g. "4-8 weeks")
    pub duration: String,

    /// One-line description of the phase
    pub description: String,

    /// Weekly breakdown, in order
    pub weeks: Vec<Week>,

    /// Milestone project closing out the phase
    pub project: String,

    /// Recommended resources. Fixed per phase; never profile-dependent.
    pub resources: Vec<Resource>,
}

/// A week within a phase: a focus label and its tasks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Week {
    /// Focus label for the week
    pub focus: String,

    /// Tasks to complete, in order
    pub tasks: Vec<Task>,
}

/// An individual task within a week.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    /// What to do
    pub description: String,

    /// Optional resource URL supporting the task
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource: Option<String>,
}

impl Task {
    /// Create a task without a supporting resource.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            resource: None,
        }
    }

    /// Create a task with a supporting resource URL.
    pub fn with_resource(description: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            resource: Some(url.into()),
        }
    }
}

/// A recommended resource attached to a phase.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Resource {
    /// Resource name
    pub name: String,

    /// Kind of resource (Course, Book, Practice, ...)
    #[serde(rename = "type")]
    pub kind: String,

    /// Where to find it
    pub url: String,
}

impl Resource {
    /// Create a resource entry.
    pub fn new(name: impl Into<String>, kind: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            url: url.into(),
        }
    }
}

/// The static career enablement plan rendered alongside a roadmap.
///
/// Profile-independent: every roadmap carries the same three sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CareerPlan {
    /// Portfolio building checklist
    pub portfolio: Vec<String>,

    /// Certifications worth pursuing
    pub certifications: Vec<String>,

    /// Job search strategy checklist
    pub job_search: Vec<String>,
}
