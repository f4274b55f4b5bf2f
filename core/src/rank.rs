use crate::{DocId, Query, Scorer, SearchIndex};
use serde::Serialize;
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoredDoc {
    pub doc_id: DocId,
    pub score: f64,
}

/// Scores every candidate and sorts by descending score. The sort is stable, so candidates
/// with equal scores keep the order they were given in.
pub fn rank<I>(index: &SearchIndex, candidates: I, query: &Query, scorer: &dyn Scorer) -> Vec<ScoredDoc>
where
    I: IntoIterator<Item = DocId>,
{
    let mut scored: Vec<ScoredDoc> = candidates
        .into_iter()
        .filter_map(|doc_id| {
            let doc = index.doc(doc_id)?;
            Some(ScoredDoc { doc_id, score: scorer.score(index, doc, query) })
        })
        .collect();
    scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    scored
}
