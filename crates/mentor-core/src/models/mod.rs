//! Data models for profiles and roadmap plans.
//!
//! This module contains the core domain models of the Tech Mentor system:
//! the questionnaire profile ([`UserProfile`] and its answer enums), the
//! generated plan tree ([`RoadmapPlan`] down to [`Task`]), and the
//! session-scoped completion state ([`CompletionSet`]).
//!
//! Display implementations for these models live in
//! [`crate::display`] to keep data structures separate from presentation.
//! All formatting there produces markdown for rich terminal rendering.
//!
//! Answer enums follow a common discipline: `FromStr` accepts the canonical
//! kebab-case answer string (plus small aliases where noted), `as_str`
//! reproduces it, and serde renames match, so profiles round-trip through
//! JSON using the same strings the questionnaire speaks.

pub mod completion;
pub mod plan;
pub mod profile;

#[cfg(test)]
mod tests;

// Re-export all public types at the models level
pub use completion::{CompletionSet, TaskId};
pub use plan::{CareerPlan, Phase, Resource, RoadmapPlan, Task, Week, PHASE_COUNT};
pub use profile::{Domain, Experience, LearningStyle, TimeAvailable, Timeline, UserProfile};
