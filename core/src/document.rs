use serde::Serialize;
use std::collections::HashMap;

/// A page admitted from the corpus. Content terms are kept exactly as they appeared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    pub url: String,
    pub title: Option<String>,
    pub content: Vec<String>,
}

impl Document {
    pub fn new(url: impl Into<String>, title: impl Into<String>, content: Vec<String>) -> Self {
        Self { url: url.into(), title: Some(title.into()), content }
    }

    /// Occurrence count of every term in the content.
    pub fn term_frequencies(&self) -> HashMap<&str, u32> {
        let mut tf: HashMap<&str, u32> = HashMap::new();
        for term in &self.content {
            *tf.entry(term.as_str()).or_insert(0) += 1;
        }
        tf
    }

    pub fn total_terms(&self) -> usize { self.content.len() }

    /// A document is indexable only with a title and at least one content term.
    pub fn is_indexable(&self) -> bool {
        self.title.is_some() && !self.content.is_empty()
    }
}
