//! Display formatting for profiles and plans.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`])
//! and format as markdown for rich terminal rendering. Wrapper types add
//! contextual formatting the models alone cannot provide:
//!
//! - [`ProfileSummary`]: the intake recap strip shown above a roadmap
//! - [`PlanProgress`] / [`PhaseProgress`]: a plan (or one phase of it)
//!   rendered against a session's completion set, with ✓/○ task icons and
//!   progress counts
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │    Wrappers     │    │   Formatted     │
//! │ (Plan, Profile) │───▶│ (Progress, ...) │───▶│    Output       │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Wrappers hold references, never owned data; completion state stays owned
//! by the presentation layer and is only borrowed for the duration of a
//! render.

pub mod models;
pub mod progress;
pub mod summary;

// Re-export commonly used types for convenience
pub use progress::{PhaseProgress, PlanProgress, ProgressOverview};
pub use summary::ProfileSummary;
