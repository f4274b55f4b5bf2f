//! Relevance scoring. A document's score is the best score of any single clause.

use crate::{Clause, Document, Query, SearchIndex};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Scores a document against a query. Implementations must return non-negative values.
pub trait Scorer: Send + Sync {
    fn score(&self, index: &SearchIndex, doc: &Document, query: &Query) -> f64;
}

fn best_clause<F>(query: &Query, mut clause_score: F) -> f64
where
    F: FnMut(&Clause) -> f64,
{
    query.clauses().iter().map(|c| clause_score(c)).fold(0.0, f64::max)
}

/// Sum of raw occurrence counts of the clause terms.
#[derive(Debug, Clone, Copy, Default)]
pub struct TermFrequency;

impl Scorer for TermFrequency {
    fn score(&self, _index: &SearchIndex, doc: &Document, query: &Query) -> f64 {
        let tf = doc.term_frequencies();
        best_clause(query, |clause| {
            clause.iter().map(|t| *tf.get(t.as_str()).unwrap_or(&0) as f64).sum()
        })
    }
}

/// Length-normalized term frequency times `ln(N / df)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TfIdf;

impl Scorer for TfIdf {
    fn score(&self, index: &SearchIndex, doc: &Document, query: &Query) -> f64 {
        let tf: HashMap<&str, u32> = doc.term_frequencies();
        let total_terms = doc.total_terms() as f64;
        let n = index.num_docs() as f64;
        best_clause(query, |clause| {
            let mut part = 0.0;
            for term in clause {
                let tf_t = *tf.get(term.as_str()).unwrap_or(&0);
                let df_t = index.document_frequency(term);
                if tf_t > 0 && df_t > 0 {
                    part += (tf_t as f64 / total_terms) * (n / df_t as f64).ln();
                }
            }
            part
        })
    }
}

/// Startup-time choice of scoring strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScoringMethod {
    #[default]
    TermFrequency,
    TfIdf,
}

impl ScoringMethod {
    pub fn scorer(self) -> Box<dyn Scorer> {
        match self {
            ScoringMethod::TermFrequency => Box::new(TermFrequency),
            ScoringMethod::TfIdf => Box::new(TfIdf),
        }
    }
}

impl FromStr for ScoringMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "tf" | "term-frequency" => Ok(ScoringMethod::TermFrequency),
            "tfidf" | "tf-idf" => Ok(ScoringMethod::TfIdf),
            other => Err(format!("unknown scoring method `{other}` (expected tf or tfidf)")),
        }
    }
}

impl fmt::Display for ScoringMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoringMethod::TermFrequency => write!(f, "tf"),
            ScoringMethod::TfIdf => write!(f, "tfidf"),
        }
    }
}
