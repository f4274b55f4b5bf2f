pub mod document;
pub mod index;
pub mod query;
pub mod rank;
pub mod retrieve;
pub mod scoring;
pub mod search;
pub mod segment;

pub use document::Document;
pub use index::SearchIndex;
pub use query::{Clause, Query};
pub use rank::{rank, ScoredDoc};
pub use retrieve::retrieve;
pub use scoring::{Scorer, ScoringMethod, TermFrequency, TfIdf};
pub use search::{Hit, SearchOutcome, Searcher};

/// Position of a document in ingestion order.
pub type DocId = u32;
