use std::collections::BTreeSet;

use super::*;
use crate::models::{Domain, Experience, LearningStyle, TimeAvailable, Timeline};

fn profile_with_domains(domains: &[Domain]) -> UserProfile {
    UserProfile {
        background: "Self-taught developer".to_string(),
        current_skills: "Basic Python, HTML/CSS".to_string(),
        experience: Experience::Beginner,
        time_available: TimeAvailable::FiveToTen,
        career_goal: "Land a software engineering job".to_string(),
        domains: domains.iter().copied().collect::<BTreeSet<Domain>>(),
        learning_style: LearningStyle::ProjectBased,
        timeline: Timeline::SixToTwelve,
    }
}

#[test]
fn test_generate_returns_four_phases_in_fixed_order() {
    let plan = generate(&profile_with_domains(&[]));

    assert_eq!(plan.phases.len(), 4);
    assert_eq!(plan.phases[0].title, "Foundation Phase");
    assert_eq!(plan.phases[1].title, "Core Skills Development");
    assert_eq!(plan.phases[2].title, "Advanced Specialization");
    assert_eq!(plan.phases[3].title, "Job-Ready Mastery");
}

#[test]
fn test_generate_is_deterministic() {
    let profile = profile_with_domains(&[Domain::AiMachineLearning, Domain::WebDevelopment]);

    assert_eq!(generate(&profile), generate(&profile));
}

#[test]
fn test_domain_order_does_not_matter() {
    let forward = profile_with_domains(&[Domain::AiMachineLearning, Domain::Robotics]);
    let backward = profile_with_domains(&[Domain::Robotics, Domain::AiMachineLearning]);

    assert_eq!(generate(&forward), generate(&backward));
}

#[test]
fn test_ai_profile_gets_ml_specialization() {
    let plan = generate(&profile_with_domains(&[Domain::AiMachineLearning]));
    let specialization = &plan.phases[2];

    assert_eq!(specialization.weeks[0].focus, "Machine Learning Fundamentals");
    assert_eq!(specialization.weeks[1].focus, "Deep Learning");
    assert!(specialization.project.starts_with("End-to-end ML project"));
}

#[test]
fn test_robotics_profile_gets_robotics_specialization() {
    let plan = generate(&profile_with_domains(&[Domain::Robotics]));
    let specialization = &plan.phases[2];

    assert_eq!(specialization.weeks[0].focus, "Advanced Development");
    assert_eq!(specialization.weeks[1].focus, "Robotics Core");
    assert!(specialization.project.starts_with("Autonomous robot"));
}

#[test]
fn test_unfocused_profile_gets_production_track() {
    let plan = generate(&profile_with_domains(&[Domain::DataScience]));
    let specialization = &plan.phases[2];

    assert_eq!(specialization.weeks[1].focus, "Production Systems");
    assert!(specialization.project.starts_with("Production-grade application"));
}

#[test]
fn test_ai_takes_precedence_over_robotics() {
    let plan = generate(&profile_with_domains(&[
        Domain::AiMachineLearning,
        Domain::Robotics,
    ]));
    let specialization = &plan.phases[2];

    assert_eq!(specialization.weeks[1].focus, "Deep Learning");
    assert!(specialization.project.starts_with("End-to-end ML project"));
}

#[test]
fn test_web_profile_gets_web_core_skills() {
    let plan = generate(&profile_with_domains(&[Domain::WebDevelopment]));
    let core_skills = &plan.phases[1];

    assert_eq!(core_skills.weeks[2].focus, "Web Development");
    assert!(core_skills.project.starts_with("Full-stack web app"));
}

#[test]
fn test_non_web_profile_gets_generic_core_skills() {
    let plan = generate(&profile_with_domains(&[Domain::Robotics]));
    let core_skills = &plan.phases[1];

    assert_eq!(core_skills.weeks[1].focus, "System Design Basics");
    assert_eq!(core_skills.weeks[2].focus, "Domain Specialization");
    assert!(core_skills.project.starts_with("Algorithm visualizer"));
}

#[test]
fn test_ai_profile_gets_math_week() {
    let plan = generate(&profile_with_domains(&[Domain::AiMachineLearning]));

    assert_eq!(plan.phases[1].weeks[1].focus, "Math for ML");
}

#[test]
fn test_fixed_slots_ignore_domains() {
    let ai = generate(&profile_with_domains(&[Domain::AiMachineLearning]));
    let none = generate(&profile_with_domains(&[]));

    // Foundation and Mastery never vary
    assert_eq!(ai.phases[0], none.phases[0]);
    assert_eq!(ai.phases[3], none.phases[3]);
    // Neither do per-phase resource lists
    for (left, right) in ai.phases.iter().zip(none.phases.iter()) {
        assert_eq!(left.resources, right.resources);
    }
}

#[test]
fn test_every_phase_has_weeks_project_and_resources() {
    let plan = generate(&profile_with_domains(&[Domain::MobileDevelopment]));

    for phase in &plan.phases {
        assert!(!phase.weeks.is_empty());
        assert!(!phase.project.is_empty());
        assert_eq!(phase.resources.len(), 4);
        for week in &phase.weeks {
            assert_eq!(week.tasks.len(), 4);
        }
    }
}
