//! The result assembler: execute, dedup, residual-filter, sort, wrap.

use std::collections::BTreeSet;

use ahash::AHashSet;
use log::debug;

use crate::collation::{self, CollationProfile};
use crate::compile::compiler::compile;
use crate::compile::plan::{CompiledPlan, Value};
use crate::criteria::criterion::{Criterion, CriterionKind, JoinRequirement};
use crate::criteria::set::{CriteriaNode, CriteriaSet};
use crate::criteria::typed_set::BooleanRelation;
use crate::error::Result;
use crate::search::results::{LemmaSearchResult, SearchResult};
use crate::store::{CorpusStore, Row};

/// Projection of the lemma-rollup aggregate pass.
pub const LEMMA_ROLLUP_PROJECTION: &str =
    "lemma.id, sum(lemmaCounts.colFreq), sum(lemmaCounts.docFreq)";

/// Runs compiled searches against a corpus store and assembles ranked
/// results.
///
/// Each invocation is a straight-line pipeline with no retained state;
/// concurrent searches simply construct their own criteria sets.
pub struct Searcher<'a> {
    store: &'a dyn CorpusStore,
}

impl<'a> Searcher<'a> {
    /// Create a searcher over a store.
    pub fn new(store: &'a dyn CorpusStore) -> Self {
        Searcher { store }
    }

    /// Run a word search: refresh, compile, execute, dedup, residual
    /// filter, sort, wrap.
    pub fn search(&self, criteria: &mut CriteriaSet) -> Result<Vec<SearchResult>> {
        let rows = self.matching_rows(criteria)?;
        Ok(rows
            .into_iter()
            .map(|row| SearchResult {
                word_id: row.word_id,
                part_index: row.part_index,
            })
            .collect())
    }

    /// Run a lemma-rollup search: the word pipeline, then one aggregate
    /// pass over the distinct lemmas of the surviving rows, ranked by
    /// collection frequency.
    pub fn search_lemmata(&self, criteria: &mut CriteriaSet) -> Result<Vec<LemmaSearchResult>> {
        let rows = self.matching_rows(criteria)?;

        let mut seen = AHashSet::new();
        let mut lemma_ids: Vec<i64> = Vec::new();
        for row in &rows {
            if let Some(lemma_id) = row.lemma_id {
                if seen.insert(lemma_id) {
                    lemma_ids.push(lemma_id as i64);
                }
            }
        }
        if lemma_ids.is_empty() {
            return Ok(Vec::new());
        }

        let plan = rollup_plan(lemma_ids);
        plan.validate()?;
        let rows = self.store.execute(&plan)?;

        let mut results: Vec<LemmaSearchResult> = rows
            .into_iter()
            .filter_map(|row| {
                row.lemma_id.map(|lemma_id| LemmaSearchResult {
                    lemma_id,
                    collection_frequency: row.collection_frequency.unwrap_or(0),
                    document_frequency: row.document_frequency.unwrap_or(0),
                })
            })
            .collect();
        results.sort_by(|a, b| {
            b.collection_frequency
                .cmp(&a.collection_frequency)
                .then(a.lemma_id.cmp(&b.lemma_id))
        });
        Ok(results)
    }

    fn matching_rows(&self, criteria: &mut CriteriaSet) -> Result<Vec<Row>> {
        criteria.refresh(self.store)?;
        let plan = compile(criteria)?;
        let rows = self.store.execute(&plan)?;
        let fetched = rows.len();

        let mut rows = dedup(rows);
        let filter = ResidualFilter::from_criteria(criteria);
        if !filter.is_empty() {
            rows.retain(|row| filter.keep(&row.spelling));
        }
        debug!(
            "search: {} rows fetched, {} after dedup and residual filter",
            fetched,
            rows.len()
        );

        // Client-side ordering by work then position is faster than asking
        // the store to sort for this workload, and keeps presentation
        // deterministic.
        rows.sort_by(|a, b| a.work_tag.cmp(&b.work_tag).then(a.ordinal.cmp(&b.ordinal)));
        Ok(rows)
    }
}

/// Drop repeated (word, part) pairs, keeping the first occurrence. The
/// store may return one row per matching optional-join row.
fn dedup(rows: Vec<Row>) -> Vec<Row> {
    let mut seen = AHashSet::new();
    rows.into_iter()
        .filter(|row| seen.insert((row.word_id, row.part_index)))
        .collect()
}

/// The aggregate plan of the rollup pass, keyed by the lemma set the word
/// pass produced.
fn rollup_plan(lemma_ids: Vec<i64>) -> CompiledPlan {
    CompiledPlan {
        projection: LEMMA_ROLLUP_PROJECTION.to_string(),
        joins: BTreeSet::from([JoinRequirement::FrequencyTable]),
        where_clause: "lemma.id in (:lemmaIds1)".to_string(),
        parameters: vec![("lemmaIds1".to_string(), Value::IntList(lemma_ids))],
    }
}

enum SpellingCheck {
    /// A top-level spelling criterion: the row must match.
    Single(String, CollationProfile),
    /// An `Any` group of spellings: the row must match one member.
    AnyOf(Vec<(String, CollationProfile)>),
}

/// The client-side re-check of spelling criteria.
///
/// The store's spelling index folds at primary strength only, and its LIKE
/// pushdown is approximate for wildcards, so every candidate's actual
/// spelling is re-verified at the declared strength. `All`/`None` spelling
/// groups constrain sibling occurrences of the row's lemma and are fully
/// expressed by their existential clauses, so they are not re-checked here.
struct ResidualFilter {
    checks: Vec<SpellingCheck>,
}

impl ResidualFilter {
    fn from_criteria(criteria: &CriteriaSet) -> Self {
        let mut checks = Vec::new();
        for node in criteria.nodes() {
            match node {
                CriteriaNode::Leaf(Criterion::SpellingLike { pattern, profile }) => {
                    checks.push(SpellingCheck::Single(pattern.clone(), *profile));
                }
                CriteriaNode::Group(set)
                    if set.kind() == CriterionKind::SpellingLike
                        && set.relation() == BooleanRelation::Any =>
                {
                    let members = set
                        .members()
                        .iter()
                        .filter_map(|m| match m {
                            Criterion::SpellingLike { pattern, profile } => {
                                Some((pattern.clone(), *profile))
                            }
                            _ => None,
                        })
                        .collect();
                    checks.push(SpellingCheck::AnyOf(members));
                }
                _ => {}
            }
        }
        ResidualFilter { checks }
    }

    fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    fn keep(&self, spelling: &str) -> bool {
        self.checks.iter().all(|check| match check {
            SpellingCheck::Single(pattern, profile) => {
                collation::matches(spelling, pattern, true, *profile)
            }
            SpellingCheck::AnyOf(members) => members
                .iter()
                .any(|(pattern, profile)| collation::matches(spelling, pattern, true, *profile)),
        })
    }
}
