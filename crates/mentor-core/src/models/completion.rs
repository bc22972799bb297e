//! Task completion tracking for a single review session.
//!
//! Completion state is UI state: it is owned by whoever renders the plan,
//! never consulted by the selector, and dies with the session. There is no
//! persistence.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Identifies a task by its position within a plan: phase, week, and task
/// index, all 0-based.
///
/// Formats as `phase-week-task` (e.g. `2-1-0` for the first task of the
/// second week of the Advanced Specialization phase).
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, Default,
)]
pub struct TaskId {
    /// Phase index within the plan
    pub phase: usize,

    /// Week index within the phase
    pub week: usize,

    /// Task index within the week
    pub task: usize,
}

impl TaskId {
    /// Create a task identifier from its position.
    pub fn new(phase: usize, week: usize, task: usize) -> Self {
        Self { phase, week, task }
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.phase, self.week, self.task)
    }
}

impl FromStr for TaskId {
    type Err = String;

    /// Parse a `phase-week-task` identifier.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::str::FromStr;
    /// use mentor_core::models::TaskId;
    ///
    /// assert_eq!(TaskId::from_str("2-1-0"), Ok(TaskId::new(2, 1, 0)));
    /// assert!(TaskId::from_str("2-1").is_err());
    /// assert!(TaskId::from_str("a-b-c").is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('-').collect();
        if parts.len() != 3 {
            return Err(format!("Invalid task id: {s}"));
        }
        let index = |part: &str| {
            part.parse::<usize>()
                .map_err(|_| format!("Invalid task id: {s}"))
        };
        Ok(TaskId::new(
            index(parts[0])?,
            index(parts[1])?,
            index(parts[2])?,
        ))
    }
}

/// The set of tasks a user has checked off during the current session.
///
/// Toggling is idempotent over a round trip: toggling the same identifier
/// twice restores the original state.
///
/// # Examples
///
/// ```rust
/// use mentor_core::models::{CompletionSet, TaskId};
///
/// let mut done = CompletionSet::default();
/// let id = TaskId::new(2, 1, 0);
///
/// assert!(done.toggle(id));
/// assert!(done.is_done(id));
/// assert!(!done.toggle(id));
/// assert!(done.is_empty());
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CompletionSet(HashSet<TaskId>);

impl CompletionSet {
    /// Flip the completion state of a task. Returns the new state:
    /// `true` if the task is now done.
    pub fn toggle(&mut self, id: TaskId) -> bool {
        if self.0.remove(&id) {
            false
        } else {
            self.0.insert(id);
            true
        }
    }

    /// Force a task's completion state rather than flipping it.
    pub fn set_done(&mut self, id: TaskId, done: bool) {
        if done {
            self.0.insert(id);
        } else {
            self.0.remove(&id);
        }
    }

    /// Whether the task has been checked off.
    pub fn is_done(&self, id: TaskId) -> bool {
        self.0.contains(&id)
    }

    /// Number of tasks checked off.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no task has been checked off.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Discard all completion state.
    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Iterate over the checked-off task identifiers (arbitrary order).
    pub fn iter(&self) -> impl Iterator<Item = &TaskId> {
        self.0.iter()
    }
}
