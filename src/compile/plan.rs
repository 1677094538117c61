//! Compiled predicate plans.

use std::collections::BTreeSet;
use std::fmt;

use ahash::AHashSet;
use serde::{Deserialize, Serialize};

use crate::compile::template::PLACEHOLDER;
use crate::criteria::criterion::JoinRequirement;
use crate::error::{ObelusError, Result};

/// A value bound to a named plan parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// A string value.
    Str(String),
    /// An integer value.
    Int(i64),
    /// A list of strings (for `in (:name)` clauses).
    StrList(Vec<String>),
    /// A list of integers (for `in (:name)` clauses).
    IntList(Vec<i64>),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => write!(f, "{s}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::StrList(items) => write!(f, "[{}]", items.join(", ")),
            Value::IntList(items) => {
                let rendered: Vec<String> = items.iter().map(|n| n.to_string()).collect();
                write!(f, "[{}]", rendered.join(", "))
            }
        }
    }
}

/// The executable output of one compilation: projection, join tags, the
/// conjunctive where clause, and the ordered named parameters.
///
/// Invariant (checked by [`CompiledPlan::validate`]): every placeholder in
/// `where_clause` appears exactly once in `parameters`, and vice versa.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompiledPlan {
    /// The select projection.
    pub projection: String,
    /// The joins the where clause relies on, in canonical order.
    pub joins: BTreeSet<JoinRequirement>,
    /// The conjunctive where clause with `:name` placeholders.
    pub where_clause: String,
    /// The bound parameters, in binding order.
    pub parameters: Vec<(String, Value)>,
}

impl CompiledPlan {
    /// Render the join clauses in canonical order.
    pub fn join_clause(&self) -> String {
        self.joins
            .iter()
            .map(|j| j.clause())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Render the full query text for logging and deterministic assertions.
    pub fn query_text(&self) -> String {
        let joins = self.join_clause();
        if joins.is_empty() {
            format!(
                "select {} from Word word where {}",
                self.projection, self.where_clause
            )
        } else {
            format!(
                "select {} from Word word {} where {}",
                self.projection, joins, self.where_clause
            )
        }
    }

    /// Look up a bound parameter by name.
    pub fn parameter(&self, name: &str) -> Option<&Value> {
        self.parameters
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    /// Check the placeholder/parameter balance invariant.
    ///
    /// A violation is a bug in a criterion implementation, not a user error,
    /// and must never be silently ignored.
    pub fn validate(&self) -> Result<()> {
        let mut referenced: AHashSet<&str> = AHashSet::new();
        for cap in PLACEHOLDER.captures_iter(&self.where_clause) {
            referenced.insert(cap.get(1).map(|m| m.as_str()).unwrap_or(""));
        }

        let mut bound: AHashSet<&str> = AHashSet::new();
        for (name, _) in &self.parameters {
            if !bound.insert(name.as_str()) {
                return Err(ObelusError::OrphanParameter(name.clone()));
            }
        }

        for name in &referenced {
            if !bound.contains(name) {
                return Err(ObelusError::UnresolvedParameter((*name).to_string()));
            }
        }
        for (name, _) in &self.parameters {
            if !referenced.contains(name.as_str()) {
                return Err(ObelusError::OrphanParameter(name.clone()));
            }
        }
        Ok(())
    }
}
