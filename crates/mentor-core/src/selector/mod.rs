//! Roadmap selection: the pure transform from profile to plan.
//!
//! [`generate`] is the single entry point. It is total over all well-formed
//! profiles (every variable slot has a fallback arm), deterministic
//! (identical input yields structurally identical output), and free of side
//! effects. Repeated calls simply repeat the same result, so callers
//! recompute rather than cache.

use log::debug;

use crate::catalog::{
    self, DomainFlags, PhaseKind, ProjectBlock, WeekBlock, CORE_SKILLS_PROJECT,
    CORE_SKILLS_WEEK_THREE, CORE_SKILLS_WEEK_TWO, SPECIALIZATION_PROJECT, SPECIALIZATION_WEEK_ONE,
    SPECIALIZATION_WEEK_TWO,
};
use crate::models::{Phase, RoadmapPlan, UserProfile, Week};

#[cfg(test)]
mod tests;

/// Generate the four-phase roadmap for a profile.
///
/// # Examples
///
/// ```rust
/// use mentor_core::params::IntakeAnswers;
/// use mentor_core::selector;
///
/// let answers = IntakeAnswers {
///     background: "Mechanical engineer".to_string(),
///     current_skills: "Basic Python".to_string(),
///     career_goal: "Get a job as an ML engineer".to_string(),
///     domains: vec!["AI/Machine Learning".to_string()],
///     ..IntakeAnswers::default()
/// };
/// let profile = answers.submit()?;
///
/// let plan = selector::generate(&profile);
/// assert_eq!(plan.phases.len(), 4);
/// assert_eq!(plan.phases[2].weeks[1].focus, "Deep Learning");
/// # Ok::<(), mentor_core::MentorError>(())
/// ```
pub fn generate(profile: &UserProfile) -> RoadmapPlan {
    let flags = DomainFlags::from_domains(&profile.domains);
    debug!("generating roadmap with domain flags {flags:?}");

    RoadmapPlan {
        phases: vec![
            foundation_phase(),
            core_skills_phase(flags),
            specialization_phase(flags),
            mastery_phase(),
        ],
    }
}

fn build_phase(kind: PhaseKind, weeks: Vec<Week>, project: ProjectBlock) -> Phase {
    Phase {
        title: kind.title().to_string(),
        duration: kind.duration().to_string(),
        description: kind.description().to_string(),
        weeks,
        project: catalog::content::project(project),
        resources: catalog::content::resources(kind),
    }
}

fn foundation_phase() -> Phase {
    build_phase(
        PhaseKind::Foundation,
        vec![
            catalog::content::week(WeekBlock::ProgrammingBasics),
            catalog::content::week(WeekBlock::DataStructures),
        ],
        ProjectBlock::TaskManager,
    )
}

fn core_skills_phase(flags: DomainFlags) -> Phase {
    build_phase(
        PhaseKind::CoreSkills,
        vec![
            catalog::content::week(WeekBlock::AdvancedAlgorithms),
            catalog::content::week(CORE_SKILLS_WEEK_TWO.resolve(flags)),
            catalog::content::week(CORE_SKILLS_WEEK_THREE.resolve(flags)),
        ],
        CORE_SKILLS_PROJECT.resolve(flags),
    )
}

fn specialization_phase(flags: DomainFlags) -> Phase {
    build_phase(
        PhaseKind::Specialization,
        vec![
            catalog::content::week(SPECIALIZATION_WEEK_ONE.resolve(flags)),
            catalog::content::week(SPECIALIZATION_WEEK_TWO.resolve(flags)),
            catalog::content::week(WeekBlock::RealWorldProjects),
        ],
        SPECIALIZATION_PROJECT.resolve(flags),
    )
}

fn mastery_phase() -> Phase {
    build_phase(
        PhaseKind::Mastery,
        vec![
            catalog::content::week(WeekBlock::InterviewPreparation),
            catalog::content::week(WeekBlock::PortfolioBrand),
            catalog::content::week(WeekBlock::JobSearchNetworking),
        ],
        ProjectBlock::Capstone,
    )
}
