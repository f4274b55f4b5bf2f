use lazy_static::lazy_static;
use regex::Regex;
use std::collections::BTreeSet;

lazy_static! {
    static ref OR_SEPARATOR: Regex = Regex::new(r"\s+OR\s+").expect("valid regex");
}

/// Terms that must all occur in a document.
pub type Clause = BTreeSet<String>;

/// A parsed query: clauses joined by OR, terms inside a clause joined by AND.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Query {
    clauses: Vec<Clause>,
}

impl Query {
    /// Parses free text. Returns `None` for an empty string, which callers must keep apart
    /// from a query that parsed to zero clauses (for example the bare text `OR`).
    pub fn parse(text: &str) -> Option<Query> {
        if text.is_empty() {
            return None;
        }
        let clauses = OR_SEPARATOR
            .split(text)
            .filter(|part| *part != "OR")
            .map(|part| part.split_whitespace().map(str::to_string).collect::<Clause>())
            .filter(|clause| !clause.is_empty())
            .collect();
        Some(Query { clauses })
    }

    pub fn clauses(&self) -> &[Clause] { &self.clauses }

    pub fn is_empty(&self) -> bool { self.clauses.is_empty() }
}

impl From<Vec<Clause>> for Query {
    fn from(clauses: Vec<Clause>) -> Self { Query { clauses } }
}
