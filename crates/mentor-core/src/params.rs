//! Parameter structures for the intake questionnaire.
//!
//! This module contains the shared parameter structure that carries raw
//! questionnaire answers between interfaces (CLI flags, interactive prompts)
//! and the core domain, without framework-specific derives or dependencies.
//!
//! ## Architecture: Parameter Wrapper Pattern
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │ Interactive     │    │  Core Params    │
//! │  (clap derives) │───▶│ prompts         │───▶│ (minimal deps)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Interface layers own their framework concerns (flag parsing, help text,
//! prompt rendering) and convert into [`IntakeAnswers`], which performs the
//! domain-level checks: required text fields are non-empty, enum answers
//! are drawn from their vocabularies. Keeping validation here means every
//! interface gets identical behavior and error wording.

use std::collections::BTreeSet;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{MentorError, Result};
use crate::models::{Domain, Experience, LearningStyle, TimeAvailable, Timeline, UserProfile};

/// The eight questionnaire answers in raw string form.
///
/// Single-choice answers default to the questionnaire's preselected options;
/// the free-text fields and the domain list start empty. The text fields are
/// required, while domains may legitimately stay empty: a profile without
/// focus domains generates the generic roadmap.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct IntakeAnswers {
    /// Educational/professional background (required)
    pub background: String,
    /// Current technical skills (required)
    pub current_skills: String,
    /// Experience level answer ('absolute-beginner', 'beginner',
    /// 'intermediate', or 'advanced')
    pub experience: String,
    /// Weekly time commitment answer ('0-5', '5-10', '10-20', or '20+')
    pub time_available: String,
    /// Primary career goal (required)
    pub career_goal: String,
    /// Selected domain names; duplicates collapse
    pub domains: Vec<String>,
    /// Learning style answer ('theory-first', 'project-based', or
    /// 'balanced')
    pub learning_style: String,
    /// Target timeline answer ('3-6', '6-12', '12-24', or '24+')
    pub timeline: String,
}

impl Default for IntakeAnswers {
    fn default() -> Self {
        Self {
            background: String::new(),
            current_skills: String::new(),
            experience: Experience::default().as_str().to_string(),
            time_available: TimeAvailable::default().as_str().to_string(),
            career_goal: String::new(),
            domains: Vec::new(),
            learning_style: LearningStyle::default().as_str().to_string(),
            timeline: Timeline::default().as_str().to_string(),
        }
    }
}

impl IntakeAnswers {
    /// Validate the answers and assemble the completed profile.
    ///
    /// # Errors
    ///
    /// * [`MentorError::InvalidInput`] - When a required text field is empty
    /// * [`MentorError::InvalidInput`] - When an enum or domain answer is
    ///   outside its vocabulary
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mentor_core::params::IntakeAnswers;
    ///
    /// let answers = IntakeAnswers {
    ///     background: "CS student".to_string(),
    ///     current_skills: "Arduino projects, linear algebra".to_string(),
    ///     career_goal: "Build a robotics startup".to_string(),
    ///     domains: vec!["Robotics".to_string()],
    ///     ..IntakeAnswers::default()
    /// };
    ///
    /// let profile = answers.submit()?;
    /// assert_eq!(profile.domains.len(), 1);
    /// # Ok::<(), mentor_core::MentorError>(())
    /// ```
    pub fn submit(&self) -> Result<UserProfile> {
        require_non_empty("background", &self.background)?;
        require_non_empty("current_skills", &self.current_skills)?;
        require_non_empty("career_goal", &self.career_goal)?;

        let experience = parse_answer::<Experience>(
            "experience",
            &self.experience,
            "'absolute-beginner', 'beginner', 'intermediate', or 'advanced'",
        )?;
        let time_available = parse_answer::<TimeAvailable>(
            "time_available",
            &self.time_available,
            "'0-5', '5-10', '10-20', or '20+'",
        )?;
        let learning_style = parse_answer::<LearningStyle>(
            "learning_style",
            &self.learning_style,
            "'theory-first', 'project-based', or 'balanced'",
        )?;
        let timeline = parse_answer::<Timeline>(
            "timeline",
            &self.timeline,
            "'3-6', '6-12', '12-24', or '24+'",
        )?;

        let mut domains = BTreeSet::new();
        for name in &self.domains {
            let domain = Domain::from_str(name).map_err(|_| {
                MentorError::invalid_input("domains").with_reason(format!(
                    "Unknown domain: {name}. Must be one of: {}",
                    domain_vocabulary()
                ))
            })?;
            domains.insert(domain);
        }

        Ok(UserProfile {
            background: self.background.trim().to_string(),
            current_skills: self.current_skills.trim().to_string(),
            experience,
            time_available,
            career_goal: self.career_goal.trim().to_string(),
            domains,
            learning_style,
            timeline,
        })
    }
}

fn require_non_empty(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(MentorError::invalid_input(field).with_reason("This field is required"));
    }
    Ok(())
}

fn parse_answer<T: FromStr>(field: &str, value: &str, accepted: &str) -> Result<T> {
    T::from_str(value).map_err(|_| {
        MentorError::invalid_input(field)
            .with_reason(format!("Invalid value: {value}. Must be {accepted}"))
    })
}

fn domain_vocabulary() -> String {
    Domain::ALL
        .iter()
        .map(|domain| domain.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_answers() -> IntakeAnswers {
        IntakeAnswers {
            background: "Mechanical engineer".to_string(),
            current_skills: "Basic Python, Arduino projects".to_string(),
            career_goal: "Get a job as ML engineer".to_string(),
            domains: vec![
                "AI/Machine Learning".to_string(),
                "Robotics".to_string(),
            ],
            ..IntakeAnswers::default()
        }
    }

    #[test]
    fn test_submit_builds_profile_with_defaults() {
        let profile = complete_answers().submit().unwrap();

        assert_eq!(profile.experience, Experience::Beginner);
        assert_eq!(profile.time_available, TimeAvailable::FiveToTen);
        assert_eq!(profile.learning_style, LearningStyle::ProjectBased);
        assert_eq!(profile.timeline, Timeline::SixToTwelve);
        assert_eq!(profile.domains.len(), 2);
        assert!(profile.domains.contains(&Domain::AiMachineLearning));
        assert!(profile.domains.contains(&Domain::Robotics));
    }

    #[test]
    fn test_submit_rejects_empty_background() {
        let mut answers = complete_answers();
        answers.background = "   ".to_string();

        match answers.submit().unwrap_err() {
            MentorError::InvalidInput { field, reason } => {
                assert_eq!(field, "background");
                assert!(reason.contains("required"));
            }
            other => panic!("Expected InvalidInput error, got {other:?}"),
        }
    }

    #[test]
    fn test_submit_rejects_empty_skills_and_goal() {
        let mut answers = complete_answers();
        answers.current_skills = String::new();
        assert!(answers.submit().is_err());

        let mut answers = complete_answers();
        answers.career_goal = String::new();
        assert!(answers.submit().is_err());
    }

    #[test]
    fn test_submit_rejects_unknown_experience() {
        let mut answers = complete_answers();
        answers.experience = "wizard".to_string();

        match answers.submit().unwrap_err() {
            MentorError::InvalidInput { field, reason } => {
                assert_eq!(field, "experience");
                assert!(reason.contains("wizard"));
            }
            other => panic!("Expected InvalidInput error, got {other:?}"),
        }
    }

    #[test]
    fn test_submit_rejects_unknown_domain() {
        let mut answers = complete_answers();
        answers.domains.push("Quantum Computing".to_string());

        match answers.submit().unwrap_err() {
            MentorError::InvalidInput { field, reason } => {
                assert_eq!(field, "domains");
                assert!(reason.contains("Quantum Computing"));
            }
            other => panic!("Expected InvalidInput error, got {other:?}"),
        }
    }

    #[test]
    fn test_submit_collapses_duplicate_domains() {
        let mut answers = complete_answers();
        answers.domains = vec![
            "Robotics".to_string(),
            "robotics".to_string(),
            "Robotics".to_string(),
        ];

        let profile = answers.submit().unwrap();
        assert_eq!(profile.domains.len(), 1);
    }

    #[test]
    fn test_submit_accepts_empty_domain_list() {
        let mut answers = complete_answers();
        answers.domains.clear();

        let profile = answers.submit().unwrap();
        assert!(profile.domains.is_empty());
    }

    #[test]
    fn test_submit_trims_text_fields() {
        let mut answers = complete_answers();
        answers.background = "  CS student  ".to_string();

        let profile = answers.submit().unwrap();
        assert_eq!(profile.background, "CS student");
    }
}
