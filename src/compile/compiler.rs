//! Assembling a criteria set into one executable plan.

use log::debug;

use crate::compile::plan::CompiledPlan;
use crate::compile::template::ParamNamer;
use crate::criteria::criterion::{AliasSet, JoinRequirement};
use crate::criteria::set::{CriteriaNode, CriteriaSet};
use crate::error::{ObelusError, Result};

/// Projection for the plain word search.
pub const WORD_PROJECTION: &str = "word.id";
/// Projection when the word-part join is in play: the caller needs to know
/// which part was responsible, since a word may match through several.
pub const WORD_PART_PROJECTION: &str = "word.id, wordPart.partIndex";

/// Compile a criteria set into one plan.
///
/// A set with zero nodes is refused: an unconstrained select-everything
/// query is never sent to the store. Any saved-set references must have been
/// refreshed first (see [`CriteriaSet::refresh`]).
pub fn compile(criteria: &CriteriaSet) -> Result<CompiledPlan> {
    if criteria.is_empty() {
        return Err(ObelusError::EmptyCriteriaSet);
    }

    let joins = criteria.required_joins();
    let projection = if joins.contains(&JoinRequirement::WordPart) {
        WORD_PART_PROJECTION
    } else {
        WORD_PROJECTION
    };

    let mut namer = ParamNamer::new();
    let aliases = AliasSet::default();
    let mut fragments = Vec::with_capacity(criteria.len());
    let mut parameters = Vec::new();

    for node in criteria.nodes() {
        let (fragment, mut bindings) = match node {
            CriteriaNode::Leaf(criterion) => criterion.where_template(&aliases).rename(&mut namer),
            CriteriaNode::Group(set) => set.render(&mut namer)?,
        };
        fragments.push(fragment);
        parameters.append(&mut bindings);
    }

    let plan = CompiledPlan {
        projection: projection.to_string(),
        joins,
        where_clause: fragments.join(" and "),
        parameters,
    };
    plan.validate()?;

    debug!("compiled plan: {}", plan.query_text());
    Ok(plan)
}
