//! Core library for the Tech Mentor roadmap application.
//!
//! This crate provides the domain logic for turning a short questionnaire
//! into a personalized learning roadmap: the profile and plan models, the
//! intake answer validation, the fixed content catalog with its decision
//! tables, the pure roadmap selector, and markdown display formatting.
//!
//! # Architecture
//!
//! - **Intake** ([`params`]): raw questionnaire answers validated into an
//!   immutable [`UserProfile`](models::UserProfile)
//! - **Selection** ([`selector`]): a pure, deterministic, total function
//!   from profile to a four-phase [`RoadmapPlan`](models::RoadmapPlan);
//!   the variable slots resolve through explicit decision tables in
//!   [`catalog`]
//! - **Display** ([`display`]): markdown formatting via `Display` impls and
//!   contextual wrapper types, rendered by the CLI's terminal renderer
//!
//! Completion state ([`models::CompletionSet`]) belongs to the presentation
//! layer: the selector never reads it, and it is never persisted.
//!
//! # Quick Start
//!
//! ```rust
//! use mentor_core::params::IntakeAnswers;
//! use mentor_core::selector;
//!
//! let answers = IntakeAnswers {
//!     background: "Self-taught developer".to_string(),
//!     current_skills: "HTML/CSS, a little JavaScript".to_string(),
//!     career_goal: "Freelance as full-stack developer".to_string(),
//!     domains: vec!["Web Development".to_string()],
//!     ..IntakeAnswers::default()
//! };
//!
//! let profile = answers.submit()?;
//! let plan = selector::generate(&profile);
//!
//! assert_eq!(plan.phases.len(), 4);
//! assert_eq!(plan.phases[1].weeks[2].focus, "Web Development");
//! # Ok::<(), mentor_core::MentorError>(())
//! ```

pub mod catalog;
pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod selector;

// Re-export commonly used types
pub use catalog::{DomainFlags, PhaseKind};
pub use display::{PhaseProgress, PlanProgress, ProfileSummary, ProgressOverview};
pub use error::{MentorError, Result};
pub use models::{
    CareerPlan, CompletionSet, Domain, Experience, LearningStyle, Phase, Resource, RoadmapPlan,
    Task, TaskId, TimeAvailable, Timeline, UserProfile, Week,
};
pub use params::IntakeAnswers;
pub use selector::generate;
