use crate::{DocId, Query, SearchIndex};
use std::collections::BTreeSet;

/// Documents matching at least one clause, where a clause matches when the document contains
/// every one of its terms.
///
/// Each clause is a strict left-to-right intersection: once the running result is empty it
/// stays empty.
pub fn retrieve(index: &SearchIndex, query: &Query) -> BTreeSet<DocId> {
    let mut matches = BTreeSet::new();
    for clause in query.clauses() {
        let mut terms = clause.iter();
        let Some(first) = terms.next() else { continue };
        let mut acc = index.docs_with(first);
        for term in terms {
            if acc.is_empty() {
                break;
            }
            let docs = index.docs_with(term);
            acc.retain(|d| docs.contains(d));
        }
        matches.extend(acc);
    }
    matches
}
