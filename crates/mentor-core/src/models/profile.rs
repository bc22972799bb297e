//! User profile model and the questionnaire answer enumerations.

use std::collections::BTreeSet;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The structured record of a user's questionnaire answers.
///
/// A profile is created once per questionnaire submission and is immutable
/// afterward. It is never persisted; its lifetime is the current process.
/// Roadmap generation is a pure function of this record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserProfile {
    /// Educational/professional background (free text)
    pub background: String,

    /// Technical skills the user already has (free text)
    pub current_skills: String,

    /// Overall technical experience level
    pub experience: Experience,

    /// Hours per week the user can dedicate
    pub time_available: TimeAvailable,

    /// Primary career goal (free text)
    pub career_goal: String,

    /// Selected domains of interest. Insertion order is irrelevant;
    /// duplicates collapse.
    pub domains: BTreeSet<Domain>,

    /// Preferred learning style
    pub learning_style: LearningStyle,

    /// Target timeline to become job-ready
    pub timeline: Timeline,
}

/// Fixed six-entry vocabulary of technical interest domains.
///
/// Three of these ("AI/Machine Learning", "Robotics", "Web Development")
/// influence content selection; the other three are recorded on the profile
/// but never change the generated plan.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Domain {
    /// Software Development
    #[serde(rename = "Software Development")]
    SoftwareDevelopment,

    /// AI/Machine Learning
    #[serde(rename = "AI/Machine Learning")]
    AiMachineLearning,

    /// Robotics
    #[serde(rename = "Robotics")]
    Robotics,

    /// Data Science
    #[serde(rename = "Data Science")]
    DataScience,

    /// Web Development
    #[serde(rename = "Web Development")]
    WebDevelopment,

    /// Mobile Development
    #[serde(rename = "Mobile Development")]
    MobileDevelopment,
}

impl Domain {
    /// All domains in questionnaire order.
    pub const ALL: [Domain; 6] = [
        Domain::SoftwareDevelopment,
        Domain::AiMachineLearning,
        Domain::Robotics,
        Domain::DataScience,
        Domain::WebDevelopment,
        Domain::MobileDevelopment,
    ];

    /// Canonical display name of the domain.
    pub fn as_str(&self) -> &'static str {
        match self {
            Domain::SoftwareDevelopment => "Software Development",
            Domain::AiMachineLearning => "AI/Machine Learning",
            Domain::Robotics => "Robotics",
            Domain::DataScience => "Data Science",
            Domain::WebDevelopment => "Web Development",
            Domain::MobileDevelopment => "Mobile Development",
        }
    }
}

impl FromStr for Domain {
    type Err = String;

    /// Parse a domain from its canonical name. A handful of short aliases
    /// are accepted for CLI convenience.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::str::FromStr;
    /// use mentor_core::models::Domain;
    ///
    /// assert_eq!(Domain::from_str("AI/Machine Learning"), Ok(Domain::AiMachineLearning));
    /// assert_eq!(Domain::from_str("web"), Ok(Domain::WebDevelopment));
    /// assert!(Domain::from_str("Quantum Computing").is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "software development" | "software" => Ok(Domain::SoftwareDevelopment),
            "ai/machine learning" | "ai/ml" | "ai" | "machine learning" | "ml" => {
                Ok(Domain::AiMachineLearning)
            }
            "robotics" => Ok(Domain::Robotics),
            "data science" | "data" => Ok(Domain::DataScience),
            "web development" | "web" => Ok(Domain::WebDevelopment),
            "mobile development" | "mobile" => Ok(Domain::MobileDevelopment),
            _ => Err(format!("Invalid domain: {s}")),
        }
    }
}

/// Overall technical experience level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Experience {
    /// No coding experience
    AbsoluteBeginner,

    /// Some basics
    #[default]
    Beginner,

    /// Can build simple projects
    Intermediate,

    /// Professional experience
    Advanced,
}

impl Experience {
    /// Canonical answer string, as stored on the profile.
    pub fn as_str(&self) -> &'static str {
        match self {
            Experience::AbsoluteBeginner => "absolute-beginner",
            Experience::Beginner => "beginner",
            Experience::Intermediate => "intermediate",
            Experience::Advanced => "advanced",
        }
    }

    /// Questionnaire label shown when prompting for this answer.
    pub fn label(&self) -> &'static str {
        match self {
            Experience::AbsoluteBeginner => "Absolute Beginner (No coding experience)",
            Experience::Beginner => "Beginner (Some basics)",
            Experience::Intermediate => "Intermediate (Can build simple projects)",
            Experience::Advanced => "Advanced (Professional experience)",
        }
    }
}

impl FromStr for Experience {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "absolute-beginner" | "absolute_beginner" => Ok(Experience::AbsoluteBeginner),
            "beginner" => Ok(Experience::Beginner),
            "intermediate" => Ok(Experience::Intermediate),
            "advanced" => Ok(Experience::Advanced),
            _ => Err(format!("Invalid experience level: {s}")),
        }
    }
}

/// Hours per week the user can dedicate to learning.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum TimeAvailable {
    /// 0-5 hours
    #[serde(rename = "0-5")]
    ZeroToFive,

    /// 5-10 hours
    #[default]
    #[serde(rename = "5-10")]
    FiveToTen,

    /// 10-20 hours
    #[serde(rename = "10-20")]
    TenToTwenty,

    /// 20+ hours
    #[serde(rename = "20+")]
    TwentyPlus,
}

impl TimeAvailable {
    /// Canonical answer string, as stored on the profile.
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeAvailable::ZeroToFive => "0-5",
            TimeAvailable::FiveToTen => "5-10",
            TimeAvailable::TenToTwenty => "10-20",
            TimeAvailable::TwentyPlus => "20+",
        }
    }

    /// Questionnaire label shown when prompting for this answer.
    pub fn label(&self) -> &'static str {
        match self {
            TimeAvailable::ZeroToFive => "0-5 hours (Part-time, busy schedule)",
            TimeAvailable::FiveToTen => "5-10 hours (Moderate commitment)",
            TimeAvailable::TenToTwenty => "10-20 hours (High commitment)",
            TimeAvailable::TwentyPlus => "20+ hours (Full-time learning)",
        }
    }
}

impl FromStr for TimeAvailable {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "0-5" => Ok(TimeAvailable::ZeroToFive),
            "5-10" => Ok(TimeAvailable::FiveToTen),
            "10-20" => Ok(TimeAvailable::TenToTwenty),
            "20+" => Ok(TimeAvailable::TwentyPlus),
            _ => Err(format!("Invalid time commitment: {s}")),
        }
    }
}

/// Preferred learning style.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum LearningStyle {
    /// Understand concepts deeply, then apply
    TheoryFirst,

    /// Learn by building
    #[default]
    ProjectBased,

    /// Mix of theory and practice
    Balanced,
}

impl LearningStyle {
    /// Canonical answer string, as stored on the profile.
    pub fn as_str(&self) -> &'static str {
        match self {
            LearningStyle::TheoryFirst => "theory-first",
            LearningStyle::ProjectBased => "project-based",
            LearningStyle::Balanced => "balanced",
        }
    }

    /// Questionnaire label shown when prompting for this answer.
    pub fn label(&self) -> &'static str {
        match self {
            LearningStyle::TheoryFirst => "Theory First (Understand concepts deeply, then apply)",
            LearningStyle::ProjectBased => "Project-Based (Learn by building)",
            LearningStyle::Balanced => "Balanced (Mix of theory and practice)",
        }
    }
}

impl FromStr for LearningStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "theory-first" | "theory_first" => Ok(LearningStyle::TheoryFirst),
            "project-based" | "project_based" => Ok(LearningStyle::ProjectBased),
            "balanced" => Ok(LearningStyle::Balanced),
            _ => Err(format!("Invalid learning style: {s}")),
        }
    }
}

/// Target timeline to become job-ready, in months.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum Timeline {
    /// 3-6 months
    #[serde(rename = "3-6")]
    ThreeToSix,

    /// 6-12 months
    #[default]
    #[serde(rename = "6-12")]
    SixToTwelve,

    /// 12-24 months
    #[serde(rename = "12-24")]
    TwelveToTwentyFour,

    /// 24+ months
    #[serde(rename = "24+")]
    TwentyFourPlus,
}

impl Timeline {
    /// Canonical answer string, as stored on the profile.
    pub fn as_str(&self) -> &'static str {
        match self {
            Timeline::ThreeToSix => "3-6",
            Timeline::SixToTwelve => "6-12",
            Timeline::TwelveToTwentyFour => "12-24",
            Timeline::TwentyFourPlus => "24+",
        }
    }

    /// Questionnaire label shown when prompting for this answer.
    pub fn label(&self) -> &'static str {
        match self {
            Timeline::ThreeToSix => "3-6 months (Intensive)",
            Timeline::SixToTwelve => "6-12 months (Moderate pace)",
            Timeline::TwelveToTwentyFour => "12-24 months (Gradual, thorough)",
            Timeline::TwentyFourPlus => "24+ months (Long-term mastery)",
        }
    }
}

impl FromStr for Timeline {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "3-6" => Ok(Timeline::ThreeToSix),
            "6-12" => Ok(Timeline::SixToTwelve),
            "12-24" => Ok(Timeline::TwelveToTwentyFour),
            "24+" => Ok(Timeline::TwentyFourPlus),
            _ => Err(format!("Invalid timeline: {s}")),
        }
    }
}
