//! # Entry Scoring

use serde::Serialize;

use causa_catalog::CatalogStore;
use causa_core::Entry;
use causa_session::PreferenceSession;

/// A catalog entry annotated with its relevance to a session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredEntry<'a> {
    /// The scored entry.
    pub entry: &'a Entry,
    /// Relevance in `[0, 100]`.
    pub score: f64,
    /// Selections that matched a tag or the category, in selection order.
    pub matched: Vec<String>,
}

impl ScoredEntry<'_> {
    /// Score rounded to a whole percentage, for "92% Match" style display.
    pub fn percent(&self) -> u8 {
        self.score.round().clamp(0.0, 100.0) as u8
    }
}

/// Score every catalog entry against the session's selections.
///
/// Works on partial sessions as well as completed ones. Never mutates the
/// catalog.
pub fn score<'a>(session: &PreferenceSession, catalog: &'a CatalogStore) -> Vec<ScoredEntry<'a>> {
    let selected = session.selected_options();
    let denominator = selected.len().max(1) as f64;

    let mut scored: Vec<ScoredEntry<'a>> = catalog
        .all()
        .iter()
        .map(|entry| {
            let matched: Vec<String> = selected
                .iter()
                .filter(|option| entry.has_label(option))
                .map(|option| option.to_string())
                .collect();
            let score = (100.0 * matched.len() as f64 / denominator).clamp(0.0, 100.0);
            ScoredEntry {
                entry,
                score,
                matched,
            }
        })
        .collect();

    // `sort_by` is stable, so equal scores keep catalog order.
    scored.sort_by(|a, b| b.score.total_cmp(&a.score));

    tracing::debug!(
        selections = selected.len(),
        entries = scored.len(),
        best = scored.first().map(|s| s.score),
        "scored catalog against session"
    );
    scored
}

/// Keep the `k` best entries of an already sorted list.
pub fn top(scored: Vec<ScoredEntry<'_>>, k: usize) -> Vec<ScoredEntry<'_>> {
    scored.into_iter().take(k).collect()
}
