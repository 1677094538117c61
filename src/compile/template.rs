//! Clause templates and parameter naming.
//!
//! Criteria render themselves as fragments with `:base` placeholders plus an
//! ordered binding list. The compiler renames every placeholder to a
//! globally unique suffixed name before conjoining fragments. Renaming is
//! token-based: a bare substring replacement would corrupt `:gender2` while
//! renaming `:gender`.

use ahash::AHashMap;
use lazy_static::lazy_static;
use regex::Regex;

use crate::compile::plan::Value;

lazy_static! {
    /// A `:name` placeholder token.
    pub static ref PLACEHOLDER: Regex =
        Regex::new(r":([A-Za-z_][A-Za-z0-9_]*)").expect("placeholder regex");
}

/// A where-clause fragment with its bound placeholder values.
///
/// `bindings` is ordered and uses base (unsuffixed) names; the same base may
/// appear in many templates within one compilation.
#[derive(Debug, Clone, PartialEq)]
pub struct ClauseTemplate {
    /// The fragment text with `:base` placeholders.
    pub fragment: String,
    /// The ordered (base name, value) bindings.
    pub bindings: Vec<(String, Value)>,
}

impl ClauseTemplate {
    /// Create a new clause template.
    pub fn new<S: Into<String>>(fragment: S, bindings: Vec<(String, Value)>) -> Self {
        ClauseTemplate {
            fragment: fragment.into(),
            bindings,
        }
    }

    /// Rename every placeholder through the namer, returning the rewritten
    /// fragment and the uniquely named bindings in order.
    pub fn rename(&self, namer: &mut ParamNamer) -> (String, Vec<(String, Value)>) {
        let mut renames: AHashMap<&str, String> = AHashMap::new();
        let mut bindings = Vec::with_capacity(self.bindings.len());
        for (base, value) in &self.bindings {
            let unique = namer.unique(base);
            renames.insert(base.as_str(), unique.clone());
            bindings.push((unique, value.clone()));
        }

        let fragment = PLACEHOLDER
            .replace_all(&self.fragment, |caps: &regex::Captures| {
                let base = caps.get(1).map(|m| m.as_str()).unwrap_or("");
                match renames.get(base) {
                    Some(unique) => format!(":{unique}"),
                    // Unknown placeholders survive for validation to reject.
                    None => caps.get(0).map(|m| m.as_str()).unwrap_or("").to_string(),
                }
            })
            .into_owned();

        (fragment, bindings)
    }
}

/// Allocates globally unique parameter names within one compilation.
///
/// Each base name carries its own monotonically increasing counter, reset
/// per compilation by constructing a fresh namer, so compiled output is
/// deterministic.
#[derive(Debug, Default)]
pub struct ParamNamer {
    counters: AHashMap<String, usize>,
}

impl ParamNamer {
    /// Create a new namer with all counters at zero.
    pub fn new() -> Self {
        ParamNamer::default()
    }

    /// Produce the next unique name for a base: `gender` yields `gender1`,
    /// then `gender2`, and so on.
    pub fn unique(&mut self, base: &str) -> String {
        let counter = self.counters.entry(base.to_string()).or_insert(0);
        *counter += 1;
        format!("{base}{counter}")
    }
}
