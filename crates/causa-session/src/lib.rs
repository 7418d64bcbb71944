//! # causa-session — Preference Session State Machine
//!
//! Tracks a visitor's answers across an ordered sequence of multi-select
//! question steps.
//!
//! ## State Machine
//!
//! ```text
//! Step 0 ⇄ Step 1 ⇄ ... ⇄ Step N-1 ──complete──▶ Completed
//!    ▲                                               │
//!    └──────────────────── reset ────────────────────┘
//! ```
//!
//! - `advance` and `retreat` move one step at a time; no transition skips an
//!   index. At the ends they fail with `AtLastStep` / `AtFirstStep`, which
//!   are expected boundaries rather than faults: a UI disables its "Back"
//!   button on `AtFirstStep` and shows results on `AtLastStep`.
//! - `complete` is the explicit, caller-observed finish. It is only legal
//!   from the last step.
//! - `Completed` is terminal until `reset`.
//!
//! Selections are toggled per step and validated against that step's
//! declared options.
//!
//! - **Session** (`session.rs`): [`PreferenceSession`] and its transitions.
//! - **Steps** (`steps.rs`): the discovery quiz the site ships with.

pub mod session;
pub mod steps;

pub use session::{
    PreferenceSession, Progress, SessionState, SessionTransitionRecord, Step, TransitionKind,
};
pub use steps::{discovery_session, discovery_steps};
