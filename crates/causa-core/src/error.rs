//! # Error Hierarchy
//!
//! Structured error types for the whole engine, built with `thiserror`.
//!
//! Every error is deterministic given identical inputs and is surfaced
//! synchronously. Nothing here is retried:
//!
//! - [`CatalogError`] is raised while loading or querying the catalog.
//! - [`SessionError`] covers preference session transitions. `AtFirstStep`
//!   and `AtLastStep` are expected boundaries that callers use to decide UI
//!   affordances, while `UnknownStep` and `UnknownOption` indicate a mismatch
//!   between the declared steps and the caller's requests.
//! - [`ValidationError`] rejects malformed identifiers, tag sets, and step
//!   definitions at construction time.

use thiserror::Error;

/// Top-level error type for the engine.
#[derive(Error, Debug)]
pub enum CausaError {
    /// Catalog load or lookup failure.
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Preference session transition failure.
    #[error("session error: {0}")]
    Session(#[from] SessionError),

    /// Domain primitive validation failure.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

/// Errors raised by the catalog store and its typed views.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Two entries passed to a single load share an identifier.
    #[error("duplicate entry id \"{id}\" in catalog")]
    DuplicateId {
        /// The repeated identifier.
        id: String,
    },

    /// No entry with the requested identifier exists.
    #[error("entry \"{id}\" not found")]
    NotFound {
        /// The identifier that was looked up.
        id: String,
    },

    /// An attribute exists but does not have the expected shape.
    #[error("entry \"{id}\" has malformed attribute \"{attribute}\": {reason}")]
    Attribute {
        /// The entry carrying the attribute.
        id: String,
        /// Attribute name.
        attribute: String,
        /// What was expected.
        reason: String,
    },
}

/// Errors raised by preference session transitions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// The step identifier is not declared in the session.
    #[error("unknown step \"{step}\"")]
    UnknownStep {
        /// The requested step identifier.
        step: String,
    },

    /// The option is not declared in the step's option list.
    #[error("option \"{option}\" is not declared for step \"{step}\"")]
    UnknownOption {
        /// The step the option was toggled on.
        step: String,
        /// The rejected option.
        option: String,
    },

    /// Retreat requested at the first step.
    #[error("already at the first step")]
    AtFirstStep,

    /// Advance requested at the final step.
    #[error("already at the last step (index {index})")]
    AtLastStep {
        /// The final step index.
        index: usize,
    },

    /// Completion requested before reaching the final step.
    #[error("cannot complete at step {index}; the last step is {last}")]
    NotAtLastStep {
        /// The current step index.
        index: usize,
        /// The final step index.
        last: usize,
    },

    /// The session is completed; only a reset leaves this state.
    #[error("session is completed; reset it to make further changes")]
    AlreadyCompleted,
}

/// Validation errors for domain primitives and step definitions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Entry identifier is empty or whitespace.
    #[error("invalid entry ID: must be non-empty")]
    EmptyEntryId,

    /// Step identifier is empty or whitespace.
    #[error("invalid step ID: must be non-empty")]
    EmptyStepId,

    /// Entry kind string is not one of `resource`, `cause`, `region`.
    #[error("unknown entry kind: {0:?}")]
    UnknownKind(String),

    /// A tag appears twice when compared case-insensitively.
    #[error("duplicate tag \"{0}\" (tags are compared case-insensitively)")]
    DuplicateTag(String),

    /// A session needs at least one step.
    #[error("a preference session requires at least one step")]
    EmptySteps,

    /// Two steps share an identifier.
    #[error("duplicate step \"{0}\"")]
    DuplicateStep(String),

    /// A step declares the same option twice.
    #[error("step \"{step}\" declares option \"{option}\" more than once")]
    DuplicateOption {
        /// The offending step.
        step: String,
        /// The repeated option.
        option: String,
    },
}
