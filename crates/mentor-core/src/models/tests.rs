use std::str::FromStr;

use super::*;

#[test]
fn test_domain_round_trips_canonical_names() {
    for domain in Domain::ALL {
        assert_eq!(Domain::from_str(domain.as_str()), Ok(domain));
    }
}

#[test]
fn test_domain_accepts_short_aliases() {
    assert_eq!(Domain::from_str("ai"), Ok(Domain::AiMachineLearning));
    assert_eq!(Domain::from_str("ml"), Ok(Domain::AiMachineLearning));
    assert_eq!(Domain::from_str("web"), Ok(Domain::WebDevelopment));
    assert_eq!(Domain::from_str("mobile"), Ok(Domain::MobileDevelopment));
}

#[test]
fn test_domain_rejects_unknown_names() {
    assert!(Domain::from_str("Quantum Computing").is_err());
    assert!(Domain::from_str("").is_err());
}

#[test]
fn test_domain_serde_uses_canonical_names() {
    let json = serde_json::to_string(&Domain::AiMachineLearning).unwrap();
    assert_eq!(json, "\"AI/Machine Learning\"");

    let parsed: Domain = serde_json::from_str("\"Web Development\"").unwrap();
    assert_eq!(parsed, Domain::WebDevelopment);
}

#[test]
fn test_experience_round_trips_answer_strings() {
    for experience in [
        Experience::AbsoluteBeginner,
        Experience::Beginner,
        Experience::Intermediate,
        Experience::Advanced,
    ] {
        assert_eq!(Experience::from_str(experience.as_str()), Ok(experience));
    }
}

#[test]
fn test_time_available_round_trips_answer_strings() {
    for time in [
        TimeAvailable::ZeroToFive,
        TimeAvailable::FiveToTen,
        TimeAvailable::TenToTwenty,
        TimeAvailable::TwentyPlus,
    ] {
        assert_eq!(TimeAvailable::from_str(time.as_str()), Ok(time));
    }
}

#[test]
fn test_timeline_round_trips_answer_strings() {
    for timeline in [
        Timeline::ThreeToSix,
        Timeline::SixToTwelve,
        Timeline::TwelveToTwentyFour,
        Timeline::TwentyFourPlus,
    ] {
        assert_eq!(Timeline::from_str(timeline.as_str()), Ok(timeline));
    }
}

#[test]
fn test_learning_style_round_trips_answer_strings() {
    for style in [
        LearningStyle::TheoryFirst,
        LearningStyle::ProjectBased,
        LearningStyle::Balanced,
    ] {
        assert_eq!(LearningStyle::from_str(style.as_str()), Ok(style));
    }
}

#[test]
fn test_answer_enum_defaults_match_questionnaire() {
    assert_eq!(Experience::default(), Experience::Beginner);
    assert_eq!(TimeAvailable::default(), TimeAvailable::FiveToTen);
    assert_eq!(LearningStyle::default(), LearningStyle::ProjectBased);
    assert_eq!(Timeline::default(), Timeline::SixToTwelve);
}

#[test]
fn test_answer_enum_serde_matches_as_str() {
    let json = serde_json::to_string(&TimeAvailable::TwentyPlus).unwrap();
    assert_eq!(json, "\"20+\"");

    let json = serde_json::to_string(&Experience::AbsoluteBeginner).unwrap();
    assert_eq!(json, "\"absolute-beginner\"");

    let json = serde_json::to_string(&Timeline::TwelveToTwentyFour).unwrap();
    assert_eq!(json, "\"12-24\"");
}

#[test]
fn test_task_id_display_and_parse() {
    let id = TaskId::new(2, 1, 0);
    assert_eq!(id.to_string(), "2-1-0");
    assert_eq!(TaskId::from_str("2-1-0"), Ok(id));
}

#[test]
fn test_task_id_rejects_malformed_input() {
    assert!(TaskId::from_str("2-1").is_err());
    assert!(TaskId::from_str("2-1-0-3").is_err());
    assert!(TaskId::from_str("a-b-c").is_err());
    assert!(TaskId::from_str("").is_err());
}

#[test]
fn test_completion_toggle_round_trip() {
    let mut done = CompletionSet::default();
    let id = TaskId::new(0, 1, 2);

    assert!(!done.is_done(id));
    assert!(done.toggle(id));
    assert!(done.is_done(id));
    assert_eq!(done.len(), 1);

    assert!(!done.toggle(id));
    assert!(!done.is_done(id));
    assert!(done.is_empty());
}

#[test]
fn test_completion_set_done_is_not_a_toggle() {
    let mut done = CompletionSet::default();
    let id = TaskId::new(3, 0, 1);

    done.set_done(id, true);
    done.set_done(id, true);
    assert!(done.is_done(id));
    assert_eq!(done.len(), 1);

    done.set_done(id, false);
    assert!(done.is_empty());
}

#[test]
fn test_completion_clear() {
    let mut done = CompletionSet::default();
    done.toggle(TaskId::new(0, 0, 0));
    done.toggle(TaskId::new(1, 2, 3));

    done.clear();
    assert!(done.is_empty());
}

#[test]
fn test_plan_task_count_and_contains() {
    let plan = RoadmapPlan {
        phases: vec![Phase {
            title: "Test Phase".to_string(),
            duration: "1 week".to_string(),
            description: "A test phase".to_string(),
            weeks: vec![Week {
                focus: "Testing".to_string(),
                tasks: vec![Task::new("Write tests"), Task::new("Run them")],
            }],
            project: "A tiny project".to_string(),
            resources: vec![],
        }],
    };

    assert_eq!(plan.task_count(), 2);
    assert!(plan.contains(TaskId::new(0, 0, 0)));
    assert!(plan.contains(TaskId::new(0, 0, 1)));
    assert!(!plan.contains(TaskId::new(0, 0, 2)));
    assert!(!plan.contains(TaskId::new(0, 1, 0)));
    assert!(!plan.contains(TaskId::new(1, 0, 0)));
}

#[test]
fn test_task_resource_skipped_when_absent() {
    let json = serde_json::to_string(&Task::new("No link here")).unwrap();
    assert!(!json.contains("resource"));

    let json =
        serde_json::to_string(&Task::with_resource("Linked", "https://example.com")).unwrap();
    assert!(json.contains("https://example.com"));
}

#[test]
fn test_resource_serde_uses_type_key() {
    let resource = Resource::new("Full Stack Open", "Course", "https://fullstackopen.com/");
    let json = serde_json::to_string(&resource).unwrap();
    assert!(json.contains("\"type\":\"Course\""));
}

#[test]
fn test_profile_json_round_trip() {
    let profile = UserProfile {
        background: "Mechanical engineer".to_string(),
        current_skills: "Arduino projects".to_string(),
        experience: Experience::Intermediate,
        time_available: TimeAvailable::TwentyPlus,
        career_goal: "Build a robotics startup".to_string(),
        domains: [Domain::Robotics, Domain::AiMachineLearning]
            .into_iter()
            .collect(),
        learning_style: LearningStyle::TheoryFirst,
        timeline: Timeline::TwentyFourPlus,
    };

    let json = serde_json::to_string(&profile).unwrap();
    let parsed: UserProfile = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, profile);
}
