use crate::{rank, retrieve, DocId, Query, Scorer, ScoringMethod, SearchIndex};
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Hit {
    pub doc_id: DocId,
    pub url: String,
    pub title: String,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// The query text was empty.
    NoQuery,
    /// Ranked hits, best first. Empty when nothing matched.
    Hits(Vec<Hit>),
}

impl SearchOutcome {
    pub fn hits(&self) -> &[Hit] {
        match self {
            SearchOutcome::NoQuery => &[],
            SearchOutcome::Hits(hits) => hits,
        }
    }
}

/// Query side of the engine: parse, retrieve, score and rank against a shared index.
pub struct Searcher {
    index: Arc<SearchIndex>,
    scorer: Box<dyn Scorer>,
}

impl Searcher {
    pub fn new(index: Arc<SearchIndex>, scorer: Box<dyn Scorer>) -> Self {
        Self { index, scorer }
    }

    pub fn with_method(index: Arc<SearchIndex>, method: ScoringMethod) -> Self {
        Self::new(index, method.scorer())
    }

    pub fn index(&self) -> &SearchIndex { &self.index }

    pub fn search(&self, text: &str) -> SearchOutcome {
        let Some(query) = Query::parse(text) else {
            return SearchOutcome::NoQuery;
        };
        let candidates = retrieve(&self.index, &query);
        let ranked = rank(&self.index, candidates, &query, self.scorer.as_ref());
        tracing::debug!(query = text, clauses = query.clauses().len(), hits = ranked.len(), "search");
        let hits = ranked
            .into_iter()
            .filter_map(|s| {
                let doc = self.index.doc(s.doc_id)?;
                Some(Hit {
                    doc_id: s.doc_id,
                    url: doc.url.clone(),
                    title: doc.title.clone().unwrap_or_default(),
                    score: s.score,
                })
            })
            .collect();
        SearchOutcome::Hits(hits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn searcher(method: ScoringMethod) -> Searcher {
        let index = SearchIndex::from_lines(&[
            "*PAGE:http://page1.com", "title1", "this", "is", "a", "sample", "example",
            "*PAGE:http://page2.com", "title2", "example", "example", "example",
            "*PAGE:http://page3.com", "title3", "nothing", "here",
        ]);
        Searcher::with_method(Arc::new(index), method)
    }

    #[test]
    fn empty_text_is_no_query() {
        assert_eq!(searcher(ScoringMethod::TermFrequency).search(""), SearchOutcome::NoQuery);
    }

    #[test]
    fn no_match_is_empty_hits() {
        let outcome = searcher(ScoringMethod::TermFrequency).search("flower1");
        assert_eq!(outcome, SearchOutcome::Hits(vec![]));
    }

    #[test]
    fn ranks_best_first() {
        let outcome = searcher(ScoringMethod::TermFrequency).search("example");
        let urls: Vec<&str> = outcome.hits().iter().map(|h| h.url.as_str()).collect();
        assert_eq!(urls, vec!["http://page2.com", "http://page1.com"]);
        assert_eq!(outcome.hits()[0].title, "title2");
        assert_eq!(outcome.hits()[0].score, 3.0);
        assert_eq!(outcome.hits()[1].score, 1.0);
    }

    #[test]
    fn tfidf_ranks_denser_page_first() {
        let outcome = searcher(ScoringMethod::TfIdf).search("example");
        assert_eq!(outcome.hits()[0].url, "http://page2.com");
        assert!(outcome.hits()[0].score > outcome.hits()[1].score);
    }
}
