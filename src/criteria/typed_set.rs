//! Same-type criterion groups combined by a boolean relation.

use serde::{Deserialize, Serialize};

use crate::compile::plan::Value;
use crate::compile::template::ParamNamer;
use crate::criteria::criterion::{AliasSet, Criterion, CriterionKind, JoinRequirement};
use crate::error::{ObelusError, Result};

/// How the members of a [`TypedSet`] combine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BooleanRelation {
    /// Logical OR across members.
    #[default]
    Any,
    /// Logical AND: every member must hold for the subject, each checked
    /// through its own supporting row.
    All,
    /// Logical AND of negated existence checks.
    None,
}

impl BooleanRelation {
    fn as_str(&self) -> &'static str {
        match self {
            BooleanRelation::Any => "any",
            BooleanRelation::All => "all",
            BooleanRelation::None => "none",
        }
    }
}

/// An ordered group of same-variant criteria under one boolean relation.
///
/// All members share the set's declared [`CriterionKind`]; adding a
/// mismatched member is rejected atomically.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypedSet {
    kind: CriterionKind,
    relation: BooleanRelation,
    members: Vec<Criterion>,
}

impl TypedSet {
    /// Create an empty set for the given variant; the relation defaults to
    /// `Any`.
    pub fn new(kind: CriterionKind) -> Self {
        TypedSet {
            kind,
            relation: BooleanRelation::default(),
            members: Vec::new(),
        }
    }

    /// Set the boolean relation.
    pub fn with_relation(mut self, relation: BooleanRelation) -> Self {
        self.relation = relation;
        self
    }

    /// Add a member, rejecting a variant mismatch without mutating the set.
    pub fn add(&mut self, criterion: Criterion) -> Result<()> {
        if criterion.kind() != self.kind {
            return Err(ObelusError::type_mismatch(
                self.kind.name(),
                criterion.kind().name(),
            ));
        }
        self.members.push(criterion);
        Ok(())
    }

    /// The declared member variant.
    pub fn kind(&self) -> CriterionKind {
        self.kind
    }

    /// The boolean relation.
    pub fn relation(&self) -> BooleanRelation {
        self.relation
    }

    /// The members, in insertion order.
    pub fn members(&self) -> &[Criterion] {
        &self.members
    }

    /// Mutable member access for the pre-compilation refresh pass.
    pub(crate) fn members_mut(&mut self) -> &mut [Criterion] {
        &mut self.members
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Check whether the set has no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// The join this group needs.
    ///
    /// An `All`/`None` group over members that need no join of their own is
    /// upgraded to the frequency-table join: the synthesized existential
    /// subqueries correlate through the lemma.
    pub fn join_requirement(&self) -> Option<JoinRequirement> {
        // Members share a variant, but zero-count frequency equalities need
        // only the word-part join while their siblings need the frequency
        // table. Take the widest member requirement.
        let member_join = self
            .members
            .iter()
            .filter_map(|m| m.join_requirement())
            .max();
        match self.relation {
            BooleanRelation::Any => member_join,
            BooleanRelation::All | BooleanRelation::None => {
                if self.in_shortcut() {
                    member_join
                } else {
                    member_join.or(Some(JoinRequirement::FrequencyTable))
                }
            }
        }
    }

    /// A human-readable rendering of this group.
    pub fn describe(&self) -> String {
        let members: Vec<String> = self.members.iter().map(|m| m.describe()).collect();
        format!("{} of ({})", self.relation.as_str(), members.join(", "))
    }

    fn in_shortcut(&self) -> bool {
        self.members
            .first()
            .map(|m| m.membership_values().is_some())
            .unwrap_or(false)
    }

    /// Render this group's where-clause fragment, drawing unique parameter
    /// names from the compiler's namer.
    pub(crate) fn render(&self, namer: &mut ParamNamer) -> Result<(String, Vec<(String, Value)>)> {
        if self.members.is_empty() {
            return Err(ObelusError::query(format!(
                "typed set of {} has no members",
                self.kind.name()
            )));
        }

        match self.relation {
            BooleanRelation::Any => self.render_any(namer),
            BooleanRelation::All => self.render_all(namer, false),
            BooleanRelation::None => self.render_all(namer, true),
        }
    }

    fn render_any(&self, namer: &mut ParamNamer) -> Result<(String, Vec<(String, Value)>)> {
        let aliases = AliasSet::default();
        let mut fragments = Vec::with_capacity(self.members.len());
        let mut bindings = Vec::new();
        for member in &self.members {
            let (fragment, mut member_bindings) = member.where_template(&aliases).rename(namer);
            fragments.push(fragment);
            bindings.append(&mut member_bindings);
        }
        Ok((parenthesize(fragments, " or "), bindings))
    }

    fn render_all(
        &self,
        namer: &mut ParamNamer,
        negated: bool,
    ) -> Result<(String, Vec<(String, Value)>)> {
        // Direct entity-membership variants collapse to one IN list; the
        // two-value variants (frequencies, year ranges) have no membership
        // values and expand per member.
        if let Some((path, base, _)) = self.members.first().and_then(|m| m.membership_values()) {
            return Ok(self.render_in_list(path, base, namer, negated));
        }

        let mut fragments = Vec::with_capacity(self.members.len());
        let mut bindings = Vec::new();
        for (index, member) in self.members.iter().enumerate() {
            // A zero-count frequency equality already carries its own
            // subquery; wrapping it in a synthesized existential over the
            // frequency table would exclude the count-less lemmata it
            // matches. Emit it directly, negating for `None`.
            if member.is_presence_test() {
                let (fragment, mut member_bindings) =
                    member.where_template(&AliasSet::default()).rename(namer);
                fragments.push(if negated {
                    format!("not {fragment}")
                } else {
                    fragment
                });
                bindings.append(&mut member_bindings);
                continue;
            }
            let mut aliases = AliasSet::default();
            let (path, alias) = correlation(member, index + 1, &mut aliases);
            let (fragment, mut member_bindings) = member.where_template(&aliases).rename(namer);
            let keyword = if negated { "not exists" } else { "exists" };
            fragments.push(format!("{keyword} (from {path} {alias} where {fragment})"));
            bindings.append(&mut member_bindings);
        }
        Ok((parenthesize(fragments, " and "), bindings))
    }

    fn render_in_list(
        &self,
        path: &str,
        base: &str,
        namer: &mut ParamNamer,
        negated: bool,
    ) -> (String, Vec<(String, Value)>) {
        let mut values = Vec::new();
        for member in &self.members {
            if let Some((_, _, member_values)) = member.membership_values() {
                values.extend(member_values);
            }
        }
        let name = namer.unique(base);
        let operator = if negated { "not in" } else { "in" };
        (
            format!("{path} {operator} (:{name})"),
            vec![(name, Value::StrList(values))],
        )
    }
}

/// Pick the correlated subquery path and alias for one member of an
/// `All`/`None` group, overriding the alias its fragment will reference.
fn correlation(member: &Criterion, index: usize, aliases: &mut AliasSet) -> (String, String) {
    match member.join_requirement() {
        Some(JoinRequirement::WordPart) => {
            let alias = format!("part{index}");
            aliases.word_part = alias.clone();
            ("word.wordParts".to_string(), alias)
        }
        Some(JoinRequirement::Speaker) => {
            let alias = format!("speaker{index}");
            aliases.speaker = alias.clone();
            ("word.speech.speakers".to_string(), alias)
        }
        Some(JoinRequirement::Author) => {
            let alias = format!("author{index}");
            aliases.author = alias.clone();
            ("word.work.authors".to_string(), alias)
        }
        Some(JoinRequirement::FrequencyTable) => {
            let alias = format!("counts{index}");
            aliases.counts = alias.clone();
            ("wordPart.lemPos.lemma.corpusCounts".to_string(), alias)
        }
        // No join of its own: correlate through sibling occurrences of the
        // same lemma.
        Some(JoinRequirement::WordSetJoin) | None => {
            let alias = format!("occurrence{index}");
            aliases.word = format!("{alias}.word");
            ("wordPart.lemPos.lemma.wordParts".to_string(), alias)
        }
    }
}

fn parenthesize(fragments: Vec<String>, separator: &str) -> String {
    if fragments.len() == 1 {
        fragments.into_iter().next().unwrap_or_default()
    } else {
        format!("({})", fragments.join(separator))
    }
}
