//! Result records.

use serde::{Deserialize, Serialize};

/// `part_index` value meaning no specific word part was responsible for the
/// match (pure spelling search).
pub const NO_PART: i32 = -1;

/// One ranked word hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SearchResult {
    /// The matched word.
    pub word_id: u64,
    /// The word part responsible for the match, or [`NO_PART`].
    pub part_index: i32,
}

/// One ranked lemma-frequency rollup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LemmaSearchResult {
    /// The lemma.
    pub lemma_id: u64,
    /// Total occurrences across the collection.
    pub collection_frequency: u64,
    /// Number of documents the lemma occurs in.
    pub document_frequency: u64,
}
