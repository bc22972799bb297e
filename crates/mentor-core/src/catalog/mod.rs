//! The fixed content catalog and the decision tables that select from it.
//!
//! Every week focus, task list, milestone project, and resource list a
//! roadmap can contain is hardcoded here. Five slots of the roadmap vary
//! with the profile; each variable slot is an explicit [`Choice`] table,
//! an ordered list of `(predicate, block)` rules plus an unconditional
//! fallback, so the priority order among overlapping domain selections is
//! data rather than control flow and can be tested on its own.
//!
//! Block identifiers ([`WeekBlock`], [`ProjectBlock`]) name pieces of
//! content; [`content`] maps each identifier to its full content.

pub mod content;

use std::collections::BTreeSet;

use crate::models::Domain;

/// Booleans derived from a profile's selected domains.
///
/// These three predicates are the only profile inputs that influence
/// content selection. Any other selected domain is recorded on the profile
/// but has no effect on the generated plan.
///
/// # Examples
///
/// ```rust
/// use std::collections::BTreeSet;
/// use mentor_core::catalog::DomainFlags;
/// use mentor_core::models::Domain;
///
/// let domains: BTreeSet<Domain> = [Domain::Robotics].into_iter().collect();
/// let flags = DomainFlags::from_domains(&domains);
/// assert!(flags.robotics);
/// assert!(!flags.ai && !flags.web);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DomainFlags {
    /// "AI/Machine Learning" was selected
    pub ai: bool,

    /// "Robotics" was selected
    pub robotics: bool,

    /// "Web Development" was selected
    pub web: bool,
}

impl DomainFlags {
    /// Derive the selection predicates from a set of domains.
    pub fn from_domains(domains: &BTreeSet<Domain>) -> Self {
        Self {
            ai: domains.contains(&Domain::AiMachineLearning),
            robotics: domains.contains(&Domain::Robotics),
            web: domains.contains(&Domain::WebDevelopment),
        }
    }

    fn holds(self, predicate: Predicate) -> bool {
        match predicate {
            Predicate::Ai => self.ai,
            Predicate::Robotics => self.robotics,
            Predicate::Web => self.web,
        }
    }
}

/// A domain predicate a selection rule can key on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Predicate {
    Ai,
    Robotics,
    Web,
}

/// Decision table for one variable slot of the roadmap.
///
/// Rules are tried top to bottom; the first rule whose predicate holds
/// wins, and the fallback applies when none do. Rule order therefore IS
/// the precedence order between overlapping domain selections.
pub(crate) struct Choice<B: Copy + 'static> {
    rules: &'static [(Predicate, B)],
    fallback: B,
}

impl<B: Copy + 'static> Choice<B> {
    pub(crate) const fn new(rules: &'static [(Predicate, B)], fallback: B) -> Self {
        Self { rules, fallback }
    }

    /// Resolve the slot for the given predicates.
    pub(crate) fn resolve(&self, flags: DomainFlags) -> B {
        self.rules
            .iter()
            .find(|(predicate, _)| flags.holds(*predicate))
            .map(|(_, block)| *block)
            .unwrap_or(self.fallback)
    }
}

/// Identifier for a week content block (focus label plus task list).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum WeekBlock {
    // Foundation Phase (fixed)
    ProgrammingBasics,
    DataStructures,

    // Core Skills Development
    AdvancedAlgorithms,
    MathForMl,
    SystemDesignBasics,
    WebDevelopment,
    DomainSpecialization,

    // Advanced Specialization
    MlFundamentals,
    AdvancedDevelopment,
    DeepLearning,
    RoboticsCore,
    ProductionSystems,
    RealWorldProjects,

    // Job-Ready Mastery (fixed)
    InterviewPreparation,
    PortfolioBrand,
    JobSearchNetworking,
}

/// Identifier for a milestone project text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ProjectBlock {
    TaskManager,
    FullStackTodo,
    AlgorithmVisualizer,
    MlDeployment,
    AutonomousRobot,
    ProductionApp,
    Capstone,
}

/// The four fixed top-level stages of every roadmap, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseKind {
    /// Core programming fundamentals and tools
    Foundation,
    /// Advanced programming, algorithms, and domain fundamentals
    CoreSkills,
    /// Deep dive into the chosen domains
    Specialization,
    /// Interview prep, portfolio polish, job search
    Mastery,
}

impl PhaseKind {
    /// All phases in roadmap order.
    pub const ALL: [PhaseKind; 4] = [
        PhaseKind::Foundation,
        PhaseKind::CoreSkills,
        PhaseKind::Specialization,
        PhaseKind::Mastery,
    ];

    /// Phase title.
    pub fn title(&self) -> &'static str {
        match self {
            PhaseKind::Foundation => "Foundation Phase",
            PhaseKind::CoreSkills => "Core Skills Development",
            PhaseKind::Specialization => "Advanced Specialization",
            PhaseKind::Mastery => "Job-Ready Mastery",
        }
    }

    /// Duration label for the phase.
    pub fn duration(&self) -> &'static str {
        match self {
            PhaseKind::Foundation => "4-8 weeks",
            PhaseKind::CoreSkills => "8-16 weeks",
            PhaseKind::Specialization => "12-24 weeks",
            PhaseKind::Mastery => "8-12 weeks",
        }
    }

    /// One-line description of the phase.
    pub fn description(&self) -> &'static str {
        match self {
            PhaseKind::Foundation => "Core programming fundamentals and tools",
            PhaseKind::CoreSkills => "Advanced programming, algorithms, and domain fundamentals",
            PhaseKind::Specialization => "Deep dive into your chosen domains",
            PhaseKind::Mastery => "Interview prep, portfolio polish, job search",
        }
    }
}

// ============================================================================
// Slot tables
// ============================================================================
//
// One table per variable slot. Everything not listed here is fixed content
// assembled directly by the selector.

/// Core Skills week 2: math track for ML-bound users, system design
/// otherwise.
pub(crate) const CORE_SKILLS_WEEK_TWO: Choice<WeekBlock> = Choice::new(
    &[(Predicate::Ai, WeekBlock::MathForMl)],
    WeekBlock::SystemDesignBasics,
);

/// Core Skills week 3: dedicated web track, generic specialization
/// otherwise.
pub(crate) const CORE_SKILLS_WEEK_THREE: Choice<WeekBlock> = Choice::new(
    &[(Predicate::Web, WeekBlock::WebDevelopment)],
    WeekBlock::DomainSpecialization,
);

/// Core Skills milestone project.
pub(crate) const CORE_SKILLS_PROJECT: Choice<ProjectBlock> = Choice::new(
    &[(Predicate::Web, ProjectBlock::FullStackTodo)],
    ProjectBlock::AlgorithmVisualizer,
);

/// Advanced Specialization week 1.
pub(crate) const SPECIALIZATION_WEEK_ONE: Choice<WeekBlock> = Choice::new(
    &[(Predicate::Ai, WeekBlock::MlFundamentals)],
    WeekBlock::AdvancedDevelopment,
);

/// Advanced Specialization week 2. AI takes precedence over Robotics,
/// which takes precedence over the default.
pub(crate) const SPECIALIZATION_WEEK_TWO: Choice<WeekBlock> = Choice::new(
    &[
        (Predicate::Ai, WeekBlock::DeepLearning),
        (Predicate::Robotics, WeekBlock::RoboticsCore),
    ],
    WeekBlock::ProductionSystems,
);

/// Advanced Specialization milestone project. Same precedence as the
/// week-2 slot.
pub(crate) const SPECIALIZATION_PROJECT: Choice<ProjectBlock> = Choice::new(
    &[
        (Predicate::Ai, ProjectBlock::MlDeployment),
        (Predicate::Robotics, ProjectBlock::AutonomousRobot),
    ],
    ProjectBlock::ProductionApp,
);

#[cfg(test)]
mod tests {
    use super::*;

    const AI: DomainFlags = DomainFlags {
        ai: true,
        robotics: false,
        web: false,
    };
    const ROBOTICS: DomainFlags = DomainFlags {
        ai: false,
        robotics: true,
        web: false,
    };
    const BOTH: DomainFlags = DomainFlags {
        ai: true,
        robotics: true,
        web: false,
    };
    const NONE: DomainFlags = DomainFlags {
        ai: false,
        robotics: false,
        web: false,
    };

    #[test]
    fn test_choice_picks_first_matching_rule() {
        assert_eq!(SPECIALIZATION_WEEK_TWO.resolve(AI), WeekBlock::DeepLearning);
        assert_eq!(
            SPECIALIZATION_WEEK_TWO.resolve(ROBOTICS),
            WeekBlock::RoboticsCore
        );
    }

    #[test]
    fn test_choice_falls_back_when_no_rule_matches() {
        assert_eq!(
            SPECIALIZATION_WEEK_TWO.resolve(NONE),
            WeekBlock::ProductionSystems
        );
        assert_eq!(
            SPECIALIZATION_PROJECT.resolve(NONE),
            ProjectBlock::ProductionApp
        );
    }

    #[test]
    fn test_ai_outranks_robotics_in_shared_slots() {
        assert_eq!(
            SPECIALIZATION_WEEK_TWO.resolve(BOTH),
            WeekBlock::DeepLearning
        );
        assert_eq!(
            SPECIALIZATION_PROJECT.resolve(BOTH),
            ProjectBlock::MlDeployment
        );
    }

    #[test]
    fn test_web_slots_ignore_other_flags() {
        let web_and_ai = DomainFlags {
            ai: true,
            robotics: false,
            web: true,
        };
        assert_eq!(
            CORE_SKILLS_WEEK_THREE.resolve(web_and_ai),
            WeekBlock::WebDevelopment
        );
        assert_eq!(
            CORE_SKILLS_PROJECT.resolve(AI),
            ProjectBlock::AlgorithmVisualizer
        );
    }

    #[test]
    fn test_phase_kind_order_and_titles() {
        let titles: Vec<&str> = PhaseKind::ALL.iter().map(|kind| kind.title()).collect();
        assert_eq!(
            titles,
            vec![
                "Foundation Phase",
                "Core Skills Development",
                "Advanced Specialization",
                "Job-Ready Mastery"
            ]
        );
    }
}
