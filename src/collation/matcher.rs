//! Wildcard matching under a collation profile.
//!
//! Patterns contain zero or more `*` wildcards, each matching any run of
//! characters; consecutive `*` collapse to one. Literal segments compare
//! character by character at the profile's strength. When `anchored` is
//! false the match may begin at any offset in the subject; the end of the
//! pattern is always anchored, so a free suffix needs an explicit trailing
//! `*`.
//!
//! The matcher never fails: user-entered search text must never crash a
//! search, so degenerate patterns simply do not match (or match vacuously).

use crate::collation::CollationProfile;

/// Test whether `subject` matches `pattern` at the profile's strength.
pub fn matches(subject: &str, pattern: &str, anchored: bool, profile: CollationProfile) -> bool {
    let subject: Vec<char> = subject.chars().collect();
    let pattern: Vec<char> = pattern.chars().collect();
    matches_inner(&subject, &pattern, anchored, profile)
}

fn matches_inner(subject: &[char], pattern: &[char], anchored: bool, profile: CollationProfile) -> bool {
    if pattern.is_empty() {
        return !anchored || subject.is_empty();
    }

    if pattern[0] == '*' {
        // Collapse the run of wildcards and free the prefix.
        let rest = pattern.iter().position(|&c| c != '*').unwrap_or(pattern.len());
        return matches_inner(subject, &pattern[rest..], false, profile);
    }

    // Literal segment up to the next wildcard (or the end of the pattern).
    let lit_len = pattern.iter().position(|&c| c == '*').unwrap_or(pattern.len());
    let literal = &pattern[..lit_len];
    let rest = &pattern[lit_len..];

    if literal.len() > subject.len() {
        return false;
    }

    let last_start = if anchored { 0 } else { subject.len() - literal.len() };
    for start in 0..=last_start {
        let candidate = &subject[start..start + literal.len()];
        let equal = candidate
            .iter()
            .zip(literal.iter())
            .all(|(&s, &p)| profile.chars_equal(s, p));
        if equal && matches_inner(&subject[start + literal.len()..], rest, true, profile) {
            return true;
        }
    }
    false
}
