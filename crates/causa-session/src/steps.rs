//! # Discovery Quiz Steps
//!
//! The four questions of the site's discovery quiz: interests, skills,
//! values, and time commitment.

use causa_core::{StepId, ValidationError};

use crate::session::{PreferenceSession, Step};

const STEPS: &[(&str, &str, &[&str])] = &[
    (
        "interests",
        "What interests you?",
        &[
            "Environment",
            "Education",
            "Health",
            "Poverty",
            "Human Rights",
            "Technology",
            "Arts & Culture",
            "Animal Welfare",
        ],
    ),
    (
        "skills",
        "What skills can you contribute?",
        &[
            "Research",
            "Writing",
            "Design",
            "Programming",
            "Teaching",
            "Public Speaking",
            "Organization",
            "Fundraising",
        ],
    ),
    (
        "values",
        "What values drive you?",
        &[
            "Justice",
            "Compassion",
            "Innovation",
            "Community",
            "Sustainability",
            "Equality",
            "Independence",
            "Cooperation",
        ],
    ),
    (
        "time",
        "How much time can you commit?",
        &[
            "1-2 hours/week",
            "3-5 hours/week",
            "6-10 hours/week",
            "10+ hours/week",
            "Project-based",
            "Full-time",
        ],
    ),
];

/// The discovery quiz step definitions.
pub fn discovery_steps() -> Result<Vec<Step>, ValidationError> {
    STEPS
        .iter()
        .map(|(id, prompt, options)| -> Result<Step, ValidationError> {
            Ok(Step::new(StepId::new(*id)?, *prompt, options.iter().copied()))
        })
        .collect()
}

/// A fresh session over the discovery quiz.
pub fn discovery_session() -> Result<PreferenceSession, ValidationError> {
    PreferenceSession::create(discovery_steps()?)
}
