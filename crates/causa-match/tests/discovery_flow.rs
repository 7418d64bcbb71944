//! End-to-end: walk the discovery quiz over the seed catalog and rank it.

use causa_catalog::{seed, CauseView};
use causa_core::{EntryKind, SessionError};
use causa_match::{score, top};
use causa_session::{discovery_session, SessionState};

#[test]
fn quiz_walkthrough_ranks_seed_catalog() {
    let catalog = seed::catalog().unwrap();
    let mut session = discovery_session().unwrap();

    assert!(session.toggle("interests", "Education").unwrap());
    assert_eq!(session.advance().unwrap(), 1);
    assert_eq!(session.advance().unwrap(), 2);
    assert!(session.toggle("values", "Justice").unwrap());
    assert_eq!(session.advance().unwrap(), 3);
    assert_eq!(
        session.advance().unwrap_err(),
        SessionError::AtLastStep { index: 3 }
    );
    session.complete().unwrap();
    assert_eq!(session.state(), SessionState::Completed);
    assert_eq!(session.progress().percent, 100);

    let ranked = score(&session, &catalog);
    assert_eq!(ranked.len(), catalog.len());

    let best: Vec<&str> = top(ranked, 6)
        .iter()
        .map(|s| s.entry.id.as_str())
        .collect();
    // Resource 8 carries the Education category, so it ties with the causes
    // at 50 and ranks ahead of them by catalog order.
    assert_eq!(
        best,
        vec!["1", "2", "8", "cause-1", "cause-4", "cause-5"]
    );
}

#[test]
fn cause_cards_decode_from_ranked_entries() {
    let catalog = seed::catalog().unwrap();
    let mut session = discovery_session().unwrap();
    session.toggle("interests", "Environment").unwrap();

    let ranked = score(&session, &catalog);
    let cards: Vec<CauseView<'_>> = ranked
        .iter()
        .filter(|s| s.entry.kind == EntryKind::Cause && s.score > 0.0)
        .map(|s| CauseView::from_entry(s.entry).unwrap())
        .collect();
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].entry.title, "Climate Justice");
    assert_eq!(ranked[0].percent(), 100);
}

#[test]
fn reset_clears_scores() {
    let catalog = seed::catalog().unwrap();
    let mut session = discovery_session().unwrap();
    session.toggle("interests", "Health").unwrap();
    assert!(score(&session, &catalog)[0].score > 0.0);

    session.reset();
    assert!(score(&session, &catalog).iter().all(|s| s.score == 0.0));
}
