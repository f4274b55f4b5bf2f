use crate::segment::segment;
use crate::{DocId, Document};
use std::collections::{BTreeSet, HashMap, HashSet};

/// Inverted index, document frequencies and the admitted documents.
///
/// Built once by [`SearchIndex::from_lines`] and read-only afterwards. Query code shares it
/// behind an `Arc`, so every reader sees the completed ingestion.
#[derive(Debug, Default)]
pub struct SearchIndex {
    /// One entry per occurrence of the term, so a document repeats for repeated terms.
    postings: HashMap<String, Vec<DocId>>,
    df: HashMap<String, u32>,
    docs: Vec<Document>,
    num_docs: u32,
}

impl SearchIndex {
    pub fn new() -> Self { Self::default() }

    /// Segments the corpus lines and admits every valid record.
    pub fn from_lines<S: AsRef<str>>(lines: &[S]) -> Self {
        let mut index = Self::new();
        for doc in segment(lines) {
            index.admit(doc);
        }
        tracing::info!(num_docs = index.num_docs, num_terms = index.df.len(), "ingested corpus");
        index
    }

    /// Indexes a document. Returns `None` and leaves the index untouched when the document has
    /// no title or no content.
    pub fn admit(&mut self, doc: Document) -> Option<DocId> {
        if !doc.is_indexable() {
            tracing::debug!(url = %doc.url, "skipping document without title or content");
            return None;
        }
        let doc_id = self.docs.len() as DocId;
        let mut seen_in_doc: HashSet<&str> = HashSet::new();
        for term in &doc.content {
            seen_in_doc.insert(term);
            self.postings.entry(term.clone()).or_default().push(doc_id);
        }
        for term in seen_in_doc {
            *self.df.entry(term.to_string()).or_insert(0) += 1;
        }
        self.docs.push(doc);
        self.num_docs += 1;
        Some(doc_id)
    }

    /// Raw postings for a term; empty when the term was never seen.
    pub fn postings(&self, term: &str) -> &[DocId] {
        self.postings.get(term).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Distinct documents containing the term.
    pub fn docs_with(&self, term: &str) -> BTreeSet<DocId> {
        self.postings(term).iter().copied().collect()
    }

    pub fn document_frequency(&self, term: &str) -> u32 {
        self.df.get(term).copied().unwrap_or(0)
    }

    pub fn num_docs(&self) -> u32 { self.num_docs }

    pub fn num_terms(&self) -> usize { self.df.len() }

    /// Every indexed term with its document frequency, in no particular order.
    pub fn document_frequencies(&self) -> impl Iterator<Item = (&str, u32)> + '_ {
        self.df.iter().map(|(t, n)| (t.as_str(), *n))
    }

    pub fn doc(&self, doc_id: DocId) -> Option<&Document> {
        self.docs.get(doc_id as usize)
    }

    pub fn docs(&self) -> &[Document] { &self.docs }

    pub fn is_empty(&self) -> bool { self.num_docs == 0 }

    /// True when every term's postings reference the document.
    pub fn contains_all<'a, I>(&self, doc_id: DocId, terms: I) -> bool
    where
        I: IntoIterator<Item = &'a str>,
    {
        terms.into_iter().all(|t| self.postings(t).contains(&doc_id))
    }

    /// Drops all indexed state. Not safe to interleave with ingestion or queries.
    pub fn reset(&mut self) {
        self.postings.clear();
        self.df.clear();
        self.docs.clear();
        self.num_docs = 0;
    }
}
