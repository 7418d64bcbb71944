//! # causa-match — Recommendation Scoring
//!
//! Maps a preference session to a ranked list of catalog entries.
//!
//! ## Scoring rule
//!
//! Let `S` be every selection in the session (across all steps; an option
//! selected on two steps counts twice) and, for an entry `e`,
//! `M(e) = { s ∈ S : s equals a tag of e or the category of e }`, compared
//! case-insensitively. Then
//!
//! ```text
//! score(e) = 100 · |M(e)| / max(1, |S|)      clamped to [0, 100]
//! ```
//!
//! Every entry is scored, including those with no match (score 0). The
//! result is sorted by descending score; ties keep catalog order. Scores are
//! recomputed from the session each time and never cached.

pub mod score;

pub use score::{score, top, ScoredEntry};
