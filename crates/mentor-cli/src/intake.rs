//! Interactive questionnaire.
//!
//! Walks the eight intake questions with dialoguer prompts, funnels the
//! answers through the same [`IntakeAnswers`] validation the flag interface
//! uses, and hands the generated roadmap to the review session. Choosing
//! "restart" in the session discards everything and asks again.

use anyhow::{Context, Result};
use dialoguer::{Input, MultiSelect, Select};
use log::info;
use mentor_core::models::{Domain, Experience, LearningStyle, TimeAvailable, Timeline};
use mentor_core::params::IntakeAnswers;
use mentor_core::selector;

use crate::renderer::TerminalRenderer;
use crate::session::{self, SessionOutcome};

const EXPERIENCE_CHOICES: [Experience; 4] = [
    Experience::AbsoluteBeginner,
    Experience::Beginner,
    Experience::Intermediate,
    Experience::Advanced,
];

const TIME_CHOICES: [TimeAvailable; 4] = [
    TimeAvailable::ZeroToFive,
    TimeAvailable::FiveToTen,
    TimeAvailable::TenToTwenty,
    TimeAvailable::TwentyPlus,
];

const STYLE_CHOICES: [LearningStyle; 3] = [
    LearningStyle::TheoryFirst,
    LearningStyle::ProjectBased,
    LearningStyle::Balanced,
];

const TIMELINE_CHOICES: [Timeline; 4] = [
    Timeline::ThreeToSix,
    Timeline::SixToTwelve,
    Timeline::TwelveToTwentyFour,
    Timeline::TwentyFourPlus,
];

/// Run the questionnaire/review loop until the user quits.
pub fn run(renderer: &TerminalRenderer) -> Result<()> {
    loop {
        let answers = ask().context("Questionnaire aborted")?;
        let profile = answers.submit()?;
        let plan = selector::generate(&profile);
        info!("generated roadmap for {} domain(s)", profile.domains.len());

        match session::run(renderer, &profile, &plan)? {
            SessionOutcome::Restart => continue,
            SessionOutcome::Quit => return Ok(()),
        }
    }
}

/// Walk the eight questions and collect raw answers.
fn ask() -> Result<IntakeAnswers> {
    println!("Let's build your roadmap. Answer these questions to shape your learning journey.\n");

    let background = required_text("1. What's your educational/professional background?")?;
    let current_skills = required_text("2. What technical skills do you currently have?")?;

    let experience = {
        let labels: Vec<&str> = EXPERIENCE_CHOICES.iter().map(|choice| choice.label()).collect();
        let picked = choose("3. Overall technical experience level?", &labels, 1)?;
        EXPERIENCE_CHOICES[picked]
    };

    let time_available = {
        let labels: Vec<&str> = TIME_CHOICES.iter().map(|choice| choice.label()).collect();
        let picked = choose("4. How many hours per week can you dedicate?", &labels, 1)?;
        TIME_CHOICES[picked]
    };

    let domains = pick_domains()?;
    let career_goal = required_text("6. What's your primary career goal?")?;

    let learning_style = {
        let labels: Vec<&str> = STYLE_CHOICES.iter().map(|choice| choice.label()).collect();
        let picked = choose("7. Preferred learning style?", &labels, 1)?;
        STYLE_CHOICES[picked]
    };

    let timeline = {
        let labels: Vec<&str> = TIMELINE_CHOICES.iter().map(|choice| choice.label()).collect();
        let picked = choose("8. Target timeline to become job-ready?", &labels, 1)?;
        TIMELINE_CHOICES[picked]
    };

    Ok(IntakeAnswers {
        background,
        current_skills,
        experience: experience.as_str().to_string(),
        time_available: time_available.as_str().to_string(),
        career_goal,
        domains,
        learning_style: learning_style.as_str().to_string(),
        timeline: timeline.as_str().to_string(),
    })
}

fn required_text(prompt: &str) -> Result<String> {
    let text: String = Input::new()
        .with_prompt(prompt)
        .validate_with(|input: &String| {
            if input.trim().is_empty() {
                Err("This field is required")
            } else {
                Ok(())
            }
        })
        .interact_text()?;
    Ok(text)
}

fn choose(prompt: &str, labels: &[&str], default: usize) -> Result<usize> {
    let picked = Select::new()
        .with_prompt(prompt)
        .items(labels)
        .default(default)
        .interact()?;
    Ok(picked)
}

fn pick_domains() -> Result<Vec<String>> {
    let names: Vec<&str> = Domain::ALL.iter().map(|domain| domain.as_str()).collect();
    let picked = MultiSelect::new()
        .with_prompt("5. Which domains interest you? (space selects, enter confirms)")
        .items(&names)
        .interact()?;
    Ok(picked.into_iter().map(|idx| names[idx].to_string()).collect())
}
