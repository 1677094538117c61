//! The ordered collection of criteria a user has assembled for one search.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::criteria::criterion::{Criterion, CriterionKind, JoinRequirement};
use crate::criteria::typed_set::TypedSet;
use crate::error::Result;
use crate::store::{CorpusStore, SetKind};

/// One top-level node: a single criterion or a typed group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CriteriaNode {
    /// A single criterion.
    Leaf(Criterion),
    /// A same-type group under a boolean relation.
    Group(TypedSet),
}

impl CriteriaNode {
    /// A human-readable rendering of this node.
    pub fn describe(&self) -> String {
        match self {
            CriteriaNode::Leaf(criterion) => criterion.describe(),
            CriteriaNode::Group(set) => set.describe(),
        }
    }
}

/// The ordered list of top-level criteria and groups for one search.
///
/// Insertion order is preserved for description rendering only; the
/// compiled predicate is an unordered conjunction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CriteriaSet {
    nodes: Vec<CriteriaNode>,
}

impl CriteriaSet {
    /// Create an empty criteria set.
    pub fn new() -> Self {
        CriteriaSet::default()
    }

    /// Add a single criterion.
    pub fn add(&mut self, criterion: Criterion) {
        self.nodes.push(CriteriaNode::Leaf(criterion));
    }

    /// Add a typed group.
    pub fn add_group(&mut self, set: TypedSet) {
        self.nodes.push(CriteriaNode::Group(set));
    }

    /// The top-level nodes, in insertion order.
    pub fn nodes(&self) -> &[CriteriaNode] {
        &self.nodes
    }

    /// Number of top-level nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check whether the set has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The union of all members' join requirements, in canonical order.
    ///
    /// The frequency table hangs off the word-part relationship, so
    /// requiring it pulls in the word-part join as well.
    pub fn required_joins(&self) -> BTreeSet<JoinRequirement> {
        let mut joins = BTreeSet::new();
        for node in &self.nodes {
            let join = match node {
                CriteriaNode::Leaf(criterion) => criterion.join_requirement(),
                CriteriaNode::Group(set) => set.join_requirement(),
            };
            if let Some(join) = join {
                joins.insert(join);
            }
        }
        if joins.contains(&JoinRequirement::FrequencyTable) {
            joins.insert(JoinRequirement::WordPart);
        }
        joins
    }

    /// True when no node constrains the lemma or the spelling, recursively
    /// through groups. Such a query is likely to be slow or huge, and the
    /// caller should warn the user before executing it.
    pub fn is_suspicious(&self) -> bool {
        !self.criteria().any(|criterion| {
            matches!(
                criterion.kind(),
                CriterionKind::LemmaEquals | CriterionKind::SpellingLike
            )
        })
    }

    /// Iterate every criterion, flattening groups.
    pub fn criteria(&self) -> impl Iterator<Item = &Criterion> {
        self.nodes.iter().flat_map(|node| match node {
            CriteriaNode::Leaf(criterion) => std::slice::from_ref(criterion).iter(),
            CriteriaNode::Group(set) => set.members().iter(),
        })
    }

    /// Re-read every saved-set reference from the store, in place.
    ///
    /// A referenced set's membership may have changed since the criterion
    /// was built, so this runs immediately before compilation reads any of
    /// its fields. Work-set part tags are additionally expanded to their
    /// textual descendant parts.
    pub fn refresh(&mut self, store: &dyn CorpusStore) -> Result<()> {
        for node in &mut self.nodes {
            match node {
                CriteriaNode::Leaf(criterion) => refresh_criterion(criterion, store)?,
                CriteriaNode::Group(set) => {
                    for member in set.members_mut() {
                        refresh_criterion(member, store)?;
                    }
                }
            }
        }
        Ok(())
    }

    /// A human-readable rendering of the whole set, in insertion order.
    pub fn describe(&self) -> String {
        self.nodes
            .iter()
            .map(|n| n.describe())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

fn refresh_criterion(criterion: &mut Criterion, store: &dyn CorpusStore) -> Result<()> {
    match criterion {
        Criterion::WorkSetRef { id, parts } => {
            let tags = store.refresh_reference(SetKind::WorkSet, *id)?;
            *parts = store.expand_work_parts(&tags)?;
        }
        Criterion::WordSetRef { id, words } => {
            *words = store.refresh_reference(SetKind::WordSet, *id)?;
        }
        Criterion::PhraseSetRef { id, words } => {
            *words = store.refresh_reference(SetKind::PhraseSet, *id)?;
        }
        _ => {}
    }
    Ok(())
}
