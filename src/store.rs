//! The interface to the external corpus store.
//!
//! The core never holds a live session: it hands a [`CompiledPlan`] to the
//! store and gets rows back, asks for the current members of saved sets
//! just before compilation, and asks for work-part expansion when a work
//! set references a container part (a whole play must expand to all of its
//! textual descendants). Failures propagate unchanged; retry and deadline
//! policy belong to the caller.

use serde::{Deserialize, Serialize};

use crate::compile::plan::CompiledPlan;
use crate::error::Result;

/// The kind of saved set a reference criterion points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SetKind {
    WorkSet,
    WordSet,
    PhraseSet,
}

/// One raw row returned by plan execution.
///
/// `part_index` is `-1` when no specific word part was responsible for the
/// match. The lemma and aggregate fields are only populated on the
/// lemma-rollup path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    /// The matched word's identity.
    pub word_id: u64,
    /// The responsible word-part index, or -1.
    pub part_index: i32,
    /// The tag of the containing work.
    pub work_tag: String,
    /// The word's ordinal position within its work.
    pub ordinal: u32,
    /// The word's actual spelling, for residual matching.
    pub spelling: String,
    /// The lemma behind the matched part, when known.
    pub lemma_id: Option<u64>,
    /// Summed collection frequency (rollup path only).
    pub collection_frequency: Option<u64>,
    /// Summed document frequency (rollup path only).
    pub document_frequency: Option<u64>,
}

impl Row {
    /// A plain word hit with no part, lemma or aggregate data.
    pub fn word(word_id: u64, work_tag: &str, ordinal: u32, spelling: &str) -> Self {
        Row {
            word_id,
            part_index: -1,
            work_tag: work_tag.to_string(),
            ordinal,
            spelling: spelling.to_string(),
            lemma_id: None,
            collection_frequency: None,
            document_frequency: None,
        }
    }
}

/// The execution backend the core compiles for.
pub trait CorpusStore: Send + Sync {
    /// Run a compiled plan and return its raw rows.
    fn execute(&self, plan: &CompiledPlan) -> Result<Vec<Row>>;

    /// Return the current member tags of a saved set.
    ///
    /// Called once per referenced set per compilation, immediately before
    /// the reference criterion's fields are read.
    fn refresh_reference(&self, kind: SetKind, id: u64) -> Result<Vec<String>>;

    /// Expand work-part tags to the full list of descendant parts with
    /// text.
    fn expand_work_parts(&self, tags: &[String]) -> Result<Vec<String>>;
}
