//! # Obelus
//!
//! A search-predicate compiler and result assembler for linguistic corpora.
//!
//! Callers assemble heterogeneous typed criteria (corpus, lemma, part of
//! speech, spelling with wildcards, speaker attributes, publication years,
//! frequency thresholds, saved-set membership), optionally grouped under
//! any/all/none relations, and Obelus compiles them into one named-parameter
//! predicate plan. An external [`store::CorpusStore`] executes the plan;
//! the [`search::Searcher`] dedups the rows, re-checks spellings at the
//! declared collation strength, sorts, and wraps them into ranked results.

pub mod collation;
pub mod compile;
pub mod criteria;
pub mod error;
pub mod search;
pub mod store;

pub mod prelude {
    pub use crate::collation::{Charset, CollationProfile, Strength};
    pub use crate::compile::{compile, CompiledPlan, Value};
    pub use crate::criteria::{
        BooleanRelation, CompareOp, CriteriaSet, Criterion, CriterionKind, Gender,
        JoinRequirement, Mortality, Prosody, TypedSet,
    };
    pub use crate::error::{ObelusError, Result};
    pub use crate::search::{LemmaSearchResult, SearchResult, Searcher};
    pub use crate::store::{CorpusStore, Row, SetKind};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
