//! Profile summary formatting: the recap strip shown above a roadmap.

use std::fmt;

use crate::models::UserProfile;

/// Newtype wrapper rendering a profile as the summary header of a roadmap:
/// time commitment, timeline, experience, selected domains, and the career
/// goal callout.
pub struct ProfileSummary<'a>(pub &'a UserProfile);

impl fmt::Display for ProfileSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let profile = self.0;

        writeln!(f, "# Your Personalized Roadmap")?;
        writeln!(f)?;
        writeln!(f, "- Time: {}h/week", profile.time_available.as_str())?;
        writeln!(f, "- Timeline: {} months", profile.timeline.as_str())?;
        writeln!(f, "- Experience: {}", profile.experience.as_str())?;

        if profile.domains.is_empty() {
            writeln!(f, "- Domains: none selected")?;
        } else {
            let names: Vec<&str> = profile.domains.iter().map(|domain| domain.as_str()).collect();
            writeln!(f, "- Domains: {} ({})", names.join(", "), names.len())?;
        }

        writeln!(f)?;
        writeln!(f, "## Target Career Goal")?;
        writeln!(f)?;
        writeln!(f, "{}", profile.career_goal)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::models::{Domain, Experience, LearningStyle, TimeAvailable, Timeline};

    fn test_profile(domains: &[Domain]) -> UserProfile {
        UserProfile {
            background: "CS student".to_string(),
            current_skills: "Some Python".to_string(),
            experience: Experience::Intermediate,
            time_available: TimeAvailable::TenToTwenty,
            career_goal: "Freelance as full-stack developer".to_string(),
            domains: domains.iter().copied().collect::<BTreeSet<Domain>>(),
            learning_style: LearningStyle::Balanced,
            timeline: Timeline::ThreeToSix,
        }
    }

    #[test]
    fn test_summary_includes_answers() {
        let profile = test_profile(&[Domain::WebDevelopment, Domain::MobileDevelopment]);
        let output = format!("{}", ProfileSummary(&profile));

        assert!(output.contains("10-20h/week"));
        assert!(output.contains("3-6 months"));
        assert!(output.contains("intermediate"));
        assert!(output.contains("Web Development"));
        assert!(output.contains("(2)"));
        assert!(output.contains("Freelance as full-stack developer"));
    }

    #[test]
    fn test_summary_handles_empty_domains() {
        let profile = test_profile(&[]);
        let output = format!("{}", ProfileSummary(&profile));

        assert!(output.contains("none selected"));
    }
}
