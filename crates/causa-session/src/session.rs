//! # Preference Session
//!
//! A session owns its step definitions, the current position, and one
//! selection set per step. It is owned by a single interaction flow and
//! mutated through `&mut self`; it is never persisted.

use std::collections::{BTreeMap, BTreeSet, HashSet};

use serde::{Deserialize, Serialize};

use causa_core::{SessionError, StepId, ValidationError};

// ─── Steps ───────────────────────────────────────────────────────────

/// One quiz question and its selectable options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    /// Step identifier, unique within a session.
    pub id: StepId,
    /// The question shown to the visitor.
    pub prompt: String,
    /// Declared options, in display order.
    pub options: Vec<String>,
}

impl Step {
    /// Create a step definition. Validation happens in
    /// [`PreferenceSession::create`].
    pub fn new<I, S>(id: StepId, prompt: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id,
            prompt: prompt.into(),
            options: options.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether `option` is declared for this step (exact match).
    pub fn declares(&self, option: &str) -> bool {
        self.options.iter().any(|o| o == option)
    }
}

// ─── Session State ───────────────────────────────────────────────────

/// Position of a session in its state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SessionState {
    /// Answering the step at `index`.
    InProgress {
        /// Zero-based step index.
        index: usize,
    },
    /// The visitor finished the last step (terminal until reset).
    Completed,
}

impl SessionState {
    /// Whether this state is terminal.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed)
    }
}

impl std::fmt::Display for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InProgress { index } => write!(f, "STEP {index}"),
            Self::Completed => f.write_str("COMPLETED"),
        }
    }
}

/// What caused a recorded transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionKind {
    /// Moved forward one step.
    Advance,
    /// Moved back one step.
    Retreat,
    /// Finished the last step.
    Complete,
    /// Returned to the first step with selections cleared.
    Reset,
}

/// Record of a session state transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionTransitionRecord {
    /// State before the transition.
    pub from_state: SessionState,
    /// State after the transition.
    pub to_state: SessionState,
    /// What triggered it.
    pub kind: TransitionKind,
}

/// Quiz progress as displayed above the current question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Progress {
    /// One-based number of the current step.
    pub step_number: usize,
    /// Number of steps.
    pub total_steps: usize,
    /// `step_number / total_steps` as a whole percentage; 100 once completed.
    pub percent: u8,
}

impl std::fmt::Display for Progress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Step {} of {} ({}% complete)",
            self.step_number, self.total_steps, self.percent
        )
    }
}

// ─── Session ─────────────────────────────────────────────────────────

/// A visitor's in-progress or completed quiz state.
///
/// Invariants, held by every method:
/// - `0 <= current_step_index() < steps.len()`; the index lives only in
///   [`SessionState::InProgress`] and a completed session sits on the last
///   step;
/// - every selected option is declared by its own step;
/// - every step has a (possibly empty) selection set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreferenceSession {
    steps: Vec<Step>,
    state: SessionState,
    selections: BTreeMap<StepId, BTreeSet<String>>,
    transitions: Vec<SessionTransitionRecord>,
}

impl PreferenceSession {
    /// Create a session at the first step with every selection empty.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::EmptySteps`] if `steps` is empty;
    /// - [`ValidationError::DuplicateStep`] if two steps share an id;
    /// - [`ValidationError::DuplicateOption`] if a step repeats an option.
    pub fn create(steps: Vec<Step>) -> Result<Self, ValidationError> {
        if steps.is_empty() {
            return Err(ValidationError::EmptySteps);
        }
        let mut selections = BTreeMap::new();
        for step in &steps {
            if selections.insert(step.id.clone(), BTreeSet::new()).is_some() {
                return Err(ValidationError::DuplicateStep(step.id.to_string()));
            }
            let mut seen = HashSet::new();
            for option in &step.options {
                if !seen.insert(option.as_str()) {
                    return Err(ValidationError::DuplicateOption {
                        step: step.id.to_string(),
                        option: option.clone(),
                    });
                }
            }
        }
        Ok(Self {
            steps,
            state: SessionState::InProgress { index: 0 },
            selections,
            transitions: Vec::new(),
        })
    }

    /// Flip membership of `option` in the selection set of `step_id`.
    ///
    /// Returns whether the option is selected after the toggle.
    ///
    /// # Errors
    ///
    /// - [`SessionError::AlreadyCompleted`] after completion;
    /// - [`SessionError::UnknownStep`] if the step is not declared;
    /// - [`SessionError::UnknownOption`] if the step does not declare `option`.
    pub fn toggle(&mut self, step_id: &str, option: &str) -> Result<bool, SessionError> {
        self.require_in_progress()?;
        let step = self.step(step_id)?;
        if !step.declares(option) {
            return Err(SessionError::UnknownOption {
                step: step_id.to_string(),
                option: option.to_string(),
            });
        }
        let selected = self
            .selections
            .get_mut(step_id)
            .ok_or_else(|| SessionError::UnknownStep {
                step: step_id.to_string(),
            })?;
        if selected.remove(option) {
            Ok(false)
        } else {
            selected.insert(option.to_string());
            Ok(true)
        }
    }

    /// Move to the next step. Returns the new index.
    ///
    /// # Errors
    ///
    /// - [`SessionError::AtLastStep`] at the final step; the index is
    ///   unchanged and the caller decides whether to [`complete`](Self::complete);
    /// - [`SessionError::AlreadyCompleted`] after completion.
    pub fn advance(&mut self) -> Result<usize, SessionError> {
        let index = self.require_in_progress()?;
        let last = self.last_index();
        if index == last {
            return Err(SessionError::AtLastStep { index: last });
        }
        self.move_to(index + 1, TransitionKind::Advance);
        Ok(index + 1)
    }

    /// Move to the previous step. Returns the new index.
    ///
    /// # Errors
    ///
    /// - [`SessionError::AtFirstStep`] at index 0;
    /// - [`SessionError::AlreadyCompleted`] after completion.
    pub fn retreat(&mut self) -> Result<usize, SessionError> {
        let index = self.require_in_progress()?;
        if index == 0 {
            return Err(SessionError::AtFirstStep);
        }
        self.move_to(index - 1, TransitionKind::Retreat);
        Ok(index - 1)
    }

    /// Mark the session completed (last step → `Completed`).
    ///
    /// # Errors
    ///
    /// - [`SessionError::NotAtLastStep`] from any other step;
    /// - [`SessionError::AlreadyCompleted`] if already completed.
    pub fn complete(&mut self) -> Result<(), SessionError> {
        let index = self.require_in_progress()?;
        let last = self.last_index();
        if index != last {
            return Err(SessionError::NotAtLastStep { index, last });
        }
        self.record(SessionState::Completed, TransitionKind::Complete);
        Ok(())
    }

    /// Return to the first step and clear every selection. Legal from any
    /// state, and the only way out of `Completed`.
    ///
    /// The transition log is kept: the reset is appended to it like any
    /// other transition.
    pub fn reset(&mut self) {
        for selected in self.selections.values_mut() {
            selected.clear();
        }
        self.record(
            SessionState::InProgress { index: 0 },
            TransitionKind::Reset,
        );
    }

    /// Whether the visitor explicitly finished the last step.
    pub fn is_complete(&self) -> bool {
        self.state.is_terminal()
    }

    /// Current state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Zero-based index of the current step. Stays on the last step once
    /// completed.
    pub fn current_step_index(&self) -> usize {
        match self.state {
            SessionState::InProgress { index } => index,
            SessionState::Completed => self.last_index(),
        }
    }

    /// The step being answered.
    pub fn current_step(&self) -> &Step {
        &self.steps[self.current_step_index()]
    }

    /// All step definitions in order.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Selected options of one step, in declared order.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::UnknownStep`] if the step is not declared.
    pub fn selected(&self, step_id: &str) -> Result<Vec<&str>, SessionError> {
        let step = self.step(step_id)?;
        Ok(self.selected_in(step))
    }

    /// Whether `option` is selected on `step_id`. Unknown steps and options
    /// are simply not selected.
    pub fn is_selected(&self, step_id: &str, option: &str) -> bool {
        self.selections
            .get(step_id)
            .is_some_and(|s| s.contains(option))
    }

    /// Every selection across all steps, in step order then declared order.
    /// An option selected on two steps appears twice.
    pub fn selected_options(&self) -> Vec<&str> {
        self.steps
            .iter()
            .flat_map(|step| self.selected_in(step))
            .collect()
    }

    /// Number of selections across all steps.
    pub fn total_selected(&self) -> usize {
        self.selections.values().map(BTreeSet::len).sum()
    }

    /// Quiz progress for display.
    pub fn progress(&self) -> Progress {
        let total_steps = self.steps.len();
        let step_number = self.current_step_index() + 1;
        let percent = if self.is_complete() {
            100
        } else {
            (step_number as f64 / total_steps as f64 * 100.0).round() as u8
        };
        Progress {
            step_number,
            total_steps,
            percent,
        }
    }

    /// Ordered log of state transitions since creation, resets included.
    /// Toggles are not transitions and are not logged.
    pub fn transitions(&self) -> &[SessionTransitionRecord] {
        &self.transitions
    }

    fn step(&self, step_id: &str) -> Result<&Step, SessionError> {
        self.steps
            .iter()
            .find(|s| s.id.as_str() == step_id)
            .ok_or_else(|| SessionError::UnknownStep {
                step: step_id.to_string(),
            })
    }

    fn selected_in<'a>(&'a self, step: &'a Step) -> Vec<&'a str> {
        match self.selections.get(&step.id) {
            None => Vec::new(),
            Some(selected) => step
                .options
                .iter()
                .filter(|o| selected.contains(o.as_str()))
                .map(String::as_str)
                .collect(),
        }
    }

    fn last_index(&self) -> usize {
        self.steps.len() - 1
    }

    /// Validate that the session is still in progress, returning its index.
    fn require_in_progress(&self) -> Result<usize, SessionError> {
        match self.state {
            SessionState::InProgress { index } => Ok(index),
            SessionState::Completed => Err(SessionError::AlreadyCompleted),
        }
    }

    fn move_to(&mut self, index: usize, kind: TransitionKind) {
        self.record(SessionState::InProgress { index }, kind);
    }

    /// Record a state transition.
    fn record(&mut self, to: SessionState, kind: TransitionKind) {
        self.transitions.push(SessionTransitionRecord {
            from_state: self.state,
            to_state: to,
            kind,
        });
        self.state = to;
    }
}

// ─── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn step(id: &str, options: &[&str]) -> Step {
        Step::new(StepId::new(id).unwrap(), format!("{id}?"), options.iter().copied())
    }

    fn make_session() -> PreferenceSession {
        PreferenceSession::create(vec![
            step("interests", &["Environment", "Education", "Health"]),
            step("skills", &["Research", "Writing"]),
            step("values", &["Justice", "Community"]),
        ])
        .unwrap()
    }

    fn make_completed() -> PreferenceSession {
        let mut s = make_session();
        s.advance().unwrap();
        s.advance().unwrap();
        s.complete().unwrap();
        s
    }

    // ── Creation ─────────────────────────────────────────────────────

    #[test]
    fn test_create_starts_at_first_step() {
        let s = make_session();
        assert_eq!(s.current_step_index(), 0);
        assert_eq!(s.state(), SessionState::InProgress { index: 0 });
        assert_eq!(s.total_selected(), 0);
        assert!(!s.is_complete());
        assert_eq!(s.current_step().id.as_str(), "interests");
    }

    #[test]
    fn test_create_rejects_empty_steps() {
        assert_eq!(
            PreferenceSession::create(Vec::new()),
            Err(ValidationError::EmptySteps)
        );
    }

    #[test]
    fn test_create_rejects_duplicate_step() {
        let result = PreferenceSession::create(vec![step("a", &["x"]), step("a", &["y"])]);
        assert_eq!(result, Err(ValidationError::DuplicateStep("a".to_string())));
    }

    #[test]
    fn test_create_rejects_duplicate_option() {
        let result = PreferenceSession::create(vec![step("a", &["x", "x"])]);
        assert!(matches!(
            result,
            Err(ValidationError::DuplicateOption { ref option, .. }) if option == "x"
        ));
    }

    // ── Toggle ───────────────────────────────────────────────────────

    #[test]
    fn test_toggle_selects_then_deselects() {
        let mut s = make_session();
        let before = s.selected("interests").unwrap().len();
        assert!(s.toggle("interests", "Education").unwrap());
        assert_eq!(s.selected("interests").unwrap(), vec!["Education"]);
        assert!(!s.toggle("interests", "Education").unwrap());
        assert_eq!(s.selected("interests").unwrap().len(), before);
    }

    #[test]
    fn test_double_toggle_restores_session() {
        let mut s = make_session();
        s.toggle("skills", "Writing").unwrap();
        let snapshot = s.clone();
        s.toggle("interests", "Health").unwrap();
        s.toggle("interests", "Health").unwrap();
        assert_eq!(s, snapshot);
    }

    #[test]
    fn test_toggle_any_step_regardless_of_position() {
        let mut s = make_session();
        s.toggle("values", "Justice").unwrap();
        assert!(s.is_selected("values", "Justice"));
        assert_eq!(s.current_step_index(), 0);
    }

    #[test]
    fn test_toggle_unknown_step() {
        let mut s = make_session();
        assert_eq!(
            s.toggle("time", "Full-time"),
            Err(SessionError::UnknownStep {
                step: "time".to_string()
            })
        );
    }

    #[test]
    fn test_toggle_option_of_another_step() {
        let mut s = make_session();
        let err = s.toggle("interests", "Research").unwrap_err();
        assert_eq!(
            err,
            SessionError::UnknownOption {
                step: "interests".to_string(),
                option: "Research".to_string()
            }
        );
    }

    #[test]
    fn test_toggle_option_is_case_sensitive() {
        let mut s = make_session();
        assert!(s.toggle("interests", "environment").is_err());
    }

    #[test]
    fn test_selected_uses_declared_order() {
        let mut s = make_session();
        s.toggle("interests", "Health").unwrap();
        s.toggle("interests", "Environment").unwrap();
        assert_eq!(s.selected("interests").unwrap(), vec!["Environment", "Health"]);
    }

    #[test]
    fn test_selected_options_across_steps() {
        let mut s = make_session();
        s.toggle("values", "Community").unwrap();
        s.toggle("interests", "Health").unwrap();
        s.toggle("skills", "Research").unwrap();
        assert_eq!(s.selected_options(), vec!["Health", "Research", "Community"]);
        assert_eq!(s.total_selected(), 3);
    }

    // ── Navigation ───────────────────────────────────────────────────

    #[test]
    fn test_advance_and_retreat() {
        let mut s = make_session();
        assert_eq!(s.advance().unwrap(), 1);
        assert_eq!(s.current_step().id.as_str(), "skills");
        assert_eq!(s.retreat().unwrap(), 0);
        assert_eq!(s.transitions().len(), 2);
    }

    #[test]
    fn test_retreat_at_first_step() {
        let mut s = make_session();
        assert_eq!(s.retreat(), Err(SessionError::AtFirstStep));
        assert_eq!(s.current_step_index(), 0);
    }

    #[test]
    fn test_advance_at_last_step() {
        let mut s = make_session();
        s.advance().unwrap();
        s.advance().unwrap();
        assert_eq!(s.advance(), Err(SessionError::AtLastStep { index: 2 }));
        assert_eq!(s.current_step_index(), 2);
        assert!(!s.is_complete());
    }

    #[test]
    fn test_single_step_session_is_both_first_and_last() {
        let mut s = PreferenceSession::create(vec![step("only", &["a"])]).unwrap();
        assert_eq!(s.retreat(), Err(SessionError::AtFirstStep));
        assert_eq!(s.advance(), Err(SessionError::AtLastStep { index: 0 }));
        s.complete().unwrap();
        assert!(s.is_complete());
    }

    // ── Completion ───────────────────────────────────────────────────

    #[test]
    fn test_complete_from_last_step() {
        let s = make_completed();
        assert!(s.is_complete());
        assert_eq!(s.state(), SessionState::Completed);
        assert_eq!(s.current_step_index(), 2);
        let last = s.transitions().last().unwrap();
        assert_eq!(last.kind, TransitionKind::Complete);
        assert_eq!(last.from_state, SessionState::InProgress { index: 2 });
    }

    #[test]
    fn test_complete_before_last_step() {
        let mut s = make_session();
        assert_eq!(
            s.complete(),
            Err(SessionError::NotAtLastStep { index: 0, last: 2 })
        );
    }

    #[test]
    fn test_completed_is_terminal() {
        let mut s = make_completed();
        assert_eq!(s.advance(), Err(SessionError::AlreadyCompleted));
        assert_eq!(s.retreat(), Err(SessionError::AlreadyCompleted));
        assert_eq!(s.complete(), Err(SessionError::AlreadyCompleted));
        assert_eq!(
            s.toggle("interests", "Health"),
            Err(SessionError::AlreadyCompleted)
        );
    }

    #[test]
    fn test_reset_leaves_completed() {
        let mut s = make_completed();
        s.reset();
        assert!(!s.is_complete());
        assert_eq!(s.current_step_index(), 0);
        s.toggle("interests", "Health").unwrap();
        assert_eq!(s.total_selected(), 1);
    }

    #[test]
    fn test_reset_clears_selections() {
        let mut s = make_session();
        s.toggle("interests", "Health").unwrap();
        s.advance().unwrap();
        s.toggle("skills", "Writing").unwrap();
        s.reset();
        assert_eq!(s.total_selected(), 0);
        assert_eq!(s.state(), SessionState::InProgress { index: 0 });
        assert_eq!(s.transitions().last().unwrap().kind, TransitionKind::Reset);
    }

    #[test]
    fn test_reset_keeps_transition_history() {
        let mut s = make_completed();
        let before = s.transitions().to_vec();
        s.reset();
        let after = s.transitions();
        assert_eq!(after.len(), before.len() + 1);
        assert_eq!(&after[..before.len()], &before[..]);
        assert_eq!(
            after.last().unwrap(),
            &SessionTransitionRecord {
                from_state: SessionState::Completed,
                to_state: SessionState::InProgress { index: 0 },
                kind: TransitionKind::Reset,
            }
        );
    }

    #[test]
    fn test_completed_session_sits_on_last_step() {
        let s = make_completed();
        assert_eq!(s.state(), SessionState::Completed);
        assert_eq!(s.current_step_index(), 2);
        assert_eq!(s.current_step().id.as_str(), s.steps()[2].id.as_str());
    }

    // ── Progress ─────────────────────────────────────────────────────

    #[test]
    fn test_progress_percentages() {
        let mut s = make_session();
        assert_eq!(s.progress().percent, 33);
        s.advance().unwrap();
        assert_eq!(s.progress().percent, 67);
        s.advance().unwrap();
        assert_eq!(s.progress().percent, 100);
        assert_eq!(s.progress().to_string(), "Step 3 of 3 (100% complete)");
    }

    #[test]
    fn test_progress_when_completed() {
        let s = make_completed();
        let p = s.progress();
        assert_eq!(p.step_number, 3);
        assert_eq!(p.percent, 100);
    }

    // ── Display & serialization ──────────────────────────────────────

    #[test]
    fn test_state_display() {
        assert_eq!(SessionState::InProgress { index: 1 }.to_string(), "STEP 1");
        assert_eq!(SessionState::Completed.to_string(), "COMPLETED");
    }

    #[test]
    fn test_session_serialization() {
        let mut s = make_session();
        s.toggle("interests", "Health").unwrap();
        let json = serde_json::to_value(&s).unwrap();
        assert_eq!(json["state"]["state"], "in_progress");
        assert_eq!(json["state"]["index"], 0);
        assert!(json.get("current_step_index").is_none());
        assert_eq!(json["selections"]["interests"][0], "Health");
    }

    #[test]
    fn test_step_deserialization() {
        let step: Step = serde_json::from_str(
            r#"{"id":"time","prompt":"How much time?","options":["Project-based"]}"#,
        )
        .unwrap();
        assert!(step.declares("Project-based"));
        assert!(serde_json::from_str::<Step>(r#"{"id":"","prompt":"?","options":[]}"#).is_err());
    }
}
