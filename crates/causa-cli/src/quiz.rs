//! # Quiz Subcommand
//!
//! Replays discovery quiz answers and prints the ranked catalog.
//!
//! A fresh session is created, then for every step in order the selections
//! naming that step are toggled before advancing. The session is completed
//! at the last step and scored against the catalog. Naming the same
//! `STEP=OPTION` twice toggles it off again.

use std::fmt;
use std::str::FromStr;

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use causa_core::SessionError;
use causa_match::{score, top, ScoredEntry};
use causa_session::PreferenceSession;

use crate::config::CliConfig;

/// One `STEP=OPTION` answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// Step identifier.
    pub step: String,
    /// Option to toggle on that step.
    pub option: String,
}

impl FromStr for Selection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (step, option) = s
            .split_once('=')
            .ok_or_else(|| format!("expected STEP=OPTION, got \"{s}\""))?;
        let (step, option) = (step.trim(), option.trim());
        if step.is_empty() || option.is_empty() {
            return Err(format!("expected STEP=OPTION, got \"{s}\""));
        }
        Ok(Self {
            step: step.to_string(),
            option: option.to_string(),
        })
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.step, self.option)
    }
}

/// Arguments for the `causa quiz` subcommand.
#[derive(Args, Debug)]
pub struct QuizArgs {
    /// An answer as STEP=OPTION, e.g. `interests=Environment`. Repeatable.
    #[arg(long = "select", short, value_name = "STEP=OPTION")]
    pub selections: Vec<Selection>,

    /// Number of recommendations to print.
    #[arg(long)]
    pub top: Option<usize>,

    /// Print recommendations as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Machine-readable quiz outcome.
#[derive(Debug, Serialize)]
struct QuizReport<'a> {
    selections: Vec<&'a str>,
    results: Vec<ScoredEntry<'a>>,
}

/// Walk the session through every step, toggling the answers for each step
/// before moving on, and complete it.
pub fn replay(session: &mut PreferenceSession, selections: &[Selection]) -> Result<()> {
    for selection in selections {
        if !session
            .steps()
            .iter()
            .any(|s| s.id.as_str() == selection.step)
        {
            return Err(SessionError::UnknownStep {
                step: selection.step.clone(),
            })
            .with_context(|| format!("cannot apply {selection}"));
        }
    }

    loop {
        let step = session.current_step().id.clone();
        for selection in selections.iter().filter(|s| s.step == step.as_str()) {
            let selected = session
                .toggle(&selection.step, &selection.option)
                .with_context(|| format!("cannot apply {selection}"))?;
            tracing::debug!(%selection, selected, "toggled");
        }
        match session.advance() {
            Ok(index) => tracing::trace!(index, "advanced"),
            Err(SessionError::AtLastStep { .. }) => break,
            Err(e) => return Err(e.into()),
        }
    }
    session.complete()?;
    tracing::info!(
        selections = session.total_selected(),
        "quiz completed"
    );
    Ok(())
}

/// Execute the quiz subcommand.
pub fn run_quiz(args: &QuizArgs, config: &CliConfig) -> Result<u8> {
    let store = config.catalog()?;
    let mut session = config.session()?;
    replay(&mut session, &args.selections)?;

    let k = config.top(args.top);
    let results = top(score(&session, &store), k);

    if args.json {
        let report = QuizReport {
            selections: session.selected_options(),
            results,
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&report).context("failed to encode results")?
        );
        return Ok(0);
    }

    if session.total_selected() == 0 {
        println!("No selections given; every entry scores 0%.");
    }
    println!("Your matches:");
    for result in &results {
        println!(
            "{:>3}% Match  {:<14} {}",
            result.percent(),
            result.entry.id.as_str(),
            result.entry.title
        );
        if !result.matched.is_empty() {
            println!("{:>12}matched: {}", "", result.matched.join(", "));
        }
    }
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use causa_session::{discovery_session, SessionState};

    fn sel(s: &str) -> Selection {
        s.parse().unwrap()
    }

    #[test]
    fn parses_selection() {
        assert_eq!(
            sel("time=1-2 hours/week"),
            Selection {
                step: "time".into(),
                option: "1-2 hours/week".into()
            }
        );
        assert_eq!(sel("interests=Arts & Culture").option, "Arts & Culture");
        assert!("interests".parse::<Selection>().is_err());
        assert!("=Health".parse::<Selection>().is_err());
    }

    #[test]
    fn replay_completes_session_with_selections() {
        let mut session = discovery_session().unwrap();
        replay(
            &mut session,
            &[sel("values=Justice"), sel("interests=Environment")],
        )
        .unwrap();
        assert_eq!(session.state(), SessionState::Completed);
        assert_eq!(session.selected_options(), vec!["Environment", "Justice"]);
    }

    #[test]
    fn replay_without_selections_still_completes() {
        let mut session = discovery_session().unwrap();
        replay(&mut session, &[]).unwrap();
        assert!(session.is_complete());
        assert_eq!(session.total_selected(), 0);
    }

    #[test]
    fn repeated_selection_toggles_off() {
        let mut session = discovery_session().unwrap();
        replay(
            &mut session,
            &[sel("interests=Health"), sel("interests=Health")],
        )
        .unwrap();
        assert_eq!(session.total_selected(), 0);
    }

    #[test]
    fn unknown_step_is_rejected_before_any_toggle() {
        let mut session = discovery_session().unwrap();
        let err = replay(
            &mut session,
            &[sel("interests=Health"), sel("mood=Calm")],
        )
        .unwrap_err();
        assert!(format!("{err:#}").contains("unknown step \"mood\""), "{err:#}");
        assert_eq!(session.total_selected(), 0);
        assert!(!session.is_complete());
    }

    #[test]
    fn undeclared_option_is_rejected() {
        let mut session = discovery_session().unwrap();
        let err = replay(&mut session, &[sel("interests=Cooking")]).unwrap_err();
        assert!(format!("{err:#}").contains("not declared"), "{err:#}");
    }

    #[test]
    fn quiz_on_seed_catalog_succeeds() {
        let args = QuizArgs {
            selections: vec![sel("interests=Education")],
            top: Some(3),
            json: true,
        };
        assert_eq!(run_quiz(&args, &CliConfig::default()).unwrap(), 0);
    }
}
