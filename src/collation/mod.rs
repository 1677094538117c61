//! Locale- and strength-aware text comparison.
//!
//! A [`CollationProfile`] pairs a charset with a collation strength and is
//! used both to normalize `SpellingLike` parameters before they are bound
//! and to re-check candidate rows client-side (the residual filter), since
//! the corpus store's spelling index only folds at primary strength.

pub mod matcher;
pub mod tables;

pub use self::matcher::matches;

use serde::{Deserialize, Serialize};

/// The writing system a spelling belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Charset {
    /// Latin script (ASCII plus the Latin-1 supplement).
    Roman,
    /// Greek script, including polytonic.
    Greek,
}

/// Degree of case/diacritic sensitivity when comparing text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strength {
    /// Case and diacritic insensitive.
    Primary,
    /// Case insensitive, diacritic sensitive.
    Secondary,
    /// Fully sensitive.
    Tertiary,
}

/// An immutable charset/strength pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CollationProfile {
    /// The charset the text is drawn from.
    pub charset: Charset,
    /// The comparison strength.
    pub strength: Strength,
}

impl CollationProfile {
    /// Create a new collation profile.
    pub fn new(charset: Charset, strength: Strength) -> Self {
        CollationProfile { charset, strength }
    }

    /// Fold a single character according to this profile's strength.
    pub fn fold_char(&self, c: char) -> char {
        match self.strength {
            Strength::Tertiary => c,
            Strength::Secondary => tables::case_fold(c, self.charset),
            Strength::Primary => {
                tables::diacritic_fold(tables::case_fold(c, self.charset), self.charset)
            }
        }
    }

    /// Fold a string according to this profile's strength.
    pub fn fold(&self, s: &str) -> String {
        s.chars().map(|c| self.fold_char(c)).collect()
    }

    /// Compare two characters for equality at this profile's strength.
    pub fn chars_equal(&self, a: char, b: char) -> bool {
        self.fold_char(a) == self.fold_char(b)
    }

    /// Compare two strings for equality at this profile's strength.
    pub fn strings_equal(&self, a: &str, b: &str) -> bool {
        let mut ai = a.chars();
        let mut bi = b.chars();
        loop {
            match (ai.next(), bi.next()) {
                (None, None) => return true,
                (Some(x), Some(y)) if self.chars_equal(x, y) => continue,
                _ => return false,
            }
        }
    }
}

/// Produce the canonical case- and diacritic-insensitive form of a string.
///
/// This is the form bound for spelling parameters, matching the folding the
/// store applies when it builds its insensitive spelling column.
pub fn insensitive(s: &str, charset: Charset) -> String {
    CollationProfile::new(charset, Strength::Primary).fold(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fold_by_strength() {
        let tertiary = CollationProfile::new(Charset::Roman, Strength::Tertiary);
        let secondary = CollationProfile::new(Charset::Roman, Strength::Secondary);
        let primary = CollationProfile::new(Charset::Roman, Strength::Primary);

        assert_eq!(tertiary.fold("Éte"), "Éte");
        assert_eq!(secondary.fold("Éte"), "éte");
        assert_eq!(primary.fold("Éte"), "ete");
    }

    #[test]
    fn test_greek_insensitive() {
        assert_eq!(insensitive("ΣΩΚΡΑΤΗΣ", Charset::Greek), "σωκρατησ");
        assert_eq!(insensitive("μῆνιν", Charset::Greek), "μηνιν");
    }

    #[test]
    fn test_strings_equal() {
        let primary = CollationProfile::new(Charset::Greek, Strength::Primary);
        assert!(primary.strings_equal("ΣΩΚΡΑΤΗΣ", "σωκρατησ"));
        assert!(primary.strings_equal("ἄνδρα", "ανδρα"));
        assert!(!primary.strings_equal("ανδρα", "ανδρασ"));

        let tertiary = CollationProfile::new(Charset::Greek, Strength::Tertiary);
        assert!(!tertiary.strings_equal("ΣΩΚΡΑΤΗΣ", "σωκρατησ"));
        assert!(tertiary.strings_equal("σωκρατησ", "σωκρατησ"));
    }

    #[test]
    fn test_secondary_keeps_diacritics() {
        let secondary = CollationProfile::new(Charset::Greek, Strength::Secondary);
        assert!(secondary.strings_equal("Μῆνιν", "μῆνιν"));
        assert!(!secondary.strings_equal("μῆνιν", "μηνιν"));
    }
}
