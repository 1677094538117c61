//! Atomic search criteria.
//!
//! A [`Criterion`] is one typed constraint: a pure value that knows its join
//! requirement, its where-clause template, its bound arguments, and a
//! human-readable description. The variant set is closed so the combinator
//! logic in [`crate::criteria::typed_set`] stays exhaustively checkable.

use serde::{Deserialize, Serialize};

use crate::collation::{self, CollationProfile, Strength};
use crate::compile::plan::Value;
use crate::compile::template::ClauseTemplate;

/// An additional relationship that must be joined to evaluate a criterion.
///
/// The enum order is the canonical join-clause emission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum JoinRequirement {
    /// The word-part relationship (lemma and part-of-speech live there).
    WordPart,
    /// The speakers of the containing speech.
    Speaker,
    /// The authors of the containing work.
    Author,
    /// The per-corpus lemma frequency table.
    FrequencyTable,
    /// The word-set membership table.
    WordSetJoin,
}

impl JoinRequirement {
    /// The canonical join clause for this requirement.
    pub fn clause(&self) -> &'static str {
        match self {
            JoinRequirement::WordPart => "join word.wordParts as wordPart",
            JoinRequirement::Speaker => "join word.speech.speakers as speaker",
            JoinRequirement::Author => "join word.work.authors as author",
            JoinRequirement::FrequencyTable => {
                "join wordPart.lemPos.lemma.corpusCounts as lemmaCounts"
            }
            JoinRequirement::WordSetJoin => "join word.wordSetWords as wordSetWord",
        }
    }
}

/// Comparison operator for frequency criteria.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompareOp {
    /// Less than.
    Lt,
    /// Less than or equal.
    Le,
    /// Equal.
    Eq,
    /// Not equal.
    Ne,
    /// Greater than or equal.
    Ge,
    /// Greater than.
    Gt,
}

impl CompareOp {
    /// The operator's query-text symbol.
    pub fn symbol(&self) -> &'static str {
        match self {
            CompareOp::Lt => "<",
            CompareOp::Le => "<=",
            CompareOp::Eq => "=",
            CompareOp::Ne => "<>",
            CompareOp::Ge => ">=",
            CompareOp::Gt => ">",
        }
    }
}

/// Speaker gender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Uncertain,
}

impl Gender {
    fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Uncertain => "uncertain",
        }
    }
}

/// Speaker mortality (epic speakers may be gods).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mortality {
    Mortal,
    Immortal,
    Unknown,
}

impl Mortality {
    fn as_str(&self) -> &'static str {
        match self {
            Mortality::Mortal => "mortal",
            Mortality::Immortal => "immortal",
            Mortality::Unknown => "unknown",
        }
    }
}

/// Whether a word occurs in verse or prose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Prosody {
    Verse,
    Prose,
    Unknown,
}

impl Prosody {
    fn as_str(&self) -> &'static str {
        match self {
            Prosody::Verse => "verse",
            Prosody::Prose => "prose",
            Prosody::Unknown => "unknown",
        }
    }
}

/// The concrete variant of a criterion, used as the type tag of a
/// [`crate::criteria::typed_set::TypedSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CriterionKind {
    CorpusEquals,
    LemmaEquals,
    PosEquals,
    SpellingLike,
    SpeakerGender,
    SpeakerMortality,
    Prosodic,
    DocFrequency,
    CollectionFrequency,
    PubYearRange,
    SpeakerName,
    WorkSetRef,
    WordSetRef,
    PhraseSetRef,
}

impl CriterionKind {
    /// The variant name, used in type-mismatch errors.
    pub fn name(&self) -> &'static str {
        match self {
            CriterionKind::CorpusEquals => "CorpusEquals",
            CriterionKind::LemmaEquals => "LemmaEquals",
            CriterionKind::PosEquals => "PosEquals",
            CriterionKind::SpellingLike => "SpellingLike",
            CriterionKind::SpeakerGender => "SpeakerGender",
            CriterionKind::SpeakerMortality => "SpeakerMortality",
            CriterionKind::Prosodic => "Prosodic",
            CriterionKind::DocFrequency => "DocFrequency",
            CriterionKind::CollectionFrequency => "CollectionFrequency",
            CriterionKind::PubYearRange => "PubYearRange",
            CriterionKind::SpeakerName => "SpeakerName",
            CriterionKind::WorkSetRef => "WorkSetRef",
            CriterionKind::WordSetRef => "WordSetRef",
            CriterionKind::PhraseSetRef => "PhraseSetRef",
        }
    }
}

/// Entity aliases used when rendering a fragment.
///
/// The defaults are the canonical top-level aliases; the typed-set
/// combinator substitutes per-member aliases when it synthesizes
/// existential subqueries.
#[derive(Debug, Clone)]
pub(crate) struct AliasSet {
    pub word: String,
    pub word_part: String,
    pub speaker: String,
    pub author: String,
    pub counts: String,
}

impl Default for AliasSet {
    fn default() -> Self {
        AliasSet {
            word: "word".to_string(),
            word_part: "wordPart".to_string(),
            speaker: "speaker".to_string(),
            author: "author".to_string(),
            counts: "lemmaCounts".to_string(),
        }
    }
}

/// One atomic, typed search constraint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Criterion {
    /// The word's work belongs to a corpus.
    CorpusEquals {
        /// The corpus tag.
        tag: String,
    },
    /// The word's lemma.
    LemmaEquals {
        /// The lemma tag.
        tag: String,
    },
    /// The word's part of speech.
    PosEquals {
        /// The part-of-speech tag.
        tag: String,
    },
    /// The word's spelling, with optional `*` wildcards.
    ///
    /// An empty pattern is legal and matches everything. The store is only
    /// sent the primary-strength form; the declared strength is enforced by
    /// the residual filter.
    SpellingLike {
        /// The raw pattern as the user entered it.
        pattern: String,
        /// Charset and strength for matching.
        profile: CollationProfile,
    },
    /// The gender of a speaker of the containing speech.
    SpeakerGender(Gender),
    /// The mortality of a speaker of the containing speech.
    SpeakerMortality(Mortality),
    /// Whether the word occurs in verse or prose.
    Prosodic(Prosody),
    /// The lemma's document frequency within a corpus.
    DocFrequency {
        op: CompareOp,
        count: u64,
        /// The corpus the frequency is counted in.
        corpus: String,
    },
    /// The lemma's collection frequency within a corpus.
    CollectionFrequency {
        op: CompareOp,
        count: u64,
        corpus: String,
    },
    /// The author's working years fall inside a range.
    ///
    /// A range with `start > end` is accepted as-is and compiles to a
    /// vacuous clause; validation is the caller's responsibility.
    PubYearRange { start: i32, end: i32 },
    /// The name of a speaker of the containing speech.
    SpeakerName {
        name: String,
    },
    /// Membership in a saved work set. `parts` is the expanded list of leaf
    /// work-part tags, refreshed against the store before compilation.
    WorkSetRef {
        id: u64,
        parts: Vec<String>,
    },
    /// Membership in a saved word set. `words` is refreshed against the
    /// store before compilation.
    WordSetRef {
        id: u64,
        words: Vec<String>,
    },
    /// Membership in a saved phrase set. `words` holds the word tags of the
    /// set's phrases, refreshed against the store before compilation.
    PhraseSetRef {
        id: u64,
        words: Vec<String>,
    },
}

impl Criterion {
    /// The variant tag of this criterion.
    pub fn kind(&self) -> CriterionKind {
        match self {
            Criterion::CorpusEquals { .. } => CriterionKind::CorpusEquals,
            Criterion::LemmaEquals { .. } => CriterionKind::LemmaEquals,
            Criterion::PosEquals { .. } => CriterionKind::PosEquals,
            Criterion::SpellingLike { .. } => CriterionKind::SpellingLike,
            Criterion::SpeakerGender(_) => CriterionKind::SpeakerGender,
            Criterion::SpeakerMortality(_) => CriterionKind::SpeakerMortality,
            Criterion::Prosodic(_) => CriterionKind::Prosodic,
            Criterion::DocFrequency { .. } => CriterionKind::DocFrequency,
            Criterion::CollectionFrequency { .. } => CriterionKind::CollectionFrequency,
            Criterion::PubYearRange { .. } => CriterionKind::PubYearRange,
            Criterion::SpeakerName { .. } => CriterionKind::SpeakerName,
            Criterion::WorkSetRef { .. } => CriterionKind::WorkSetRef,
            Criterion::WordSetRef { .. } => CriterionKind::WordSetRef,
            Criterion::PhraseSetRef { .. } => CriterionKind::PhraseSetRef,
        }
    }

    /// The extra join this criterion needs, if any.
    pub fn join_requirement(&self) -> Option<JoinRequirement> {
        match self {
            Criterion::CorpusEquals { .. } => None,
            Criterion::LemmaEquals { .. } => Some(JoinRequirement::WordPart),
            Criterion::PosEquals { .. } => Some(JoinRequirement::WordPart),
            Criterion::SpellingLike { .. } => None,
            Criterion::SpeakerGender(_) => Some(JoinRequirement::Speaker),
            Criterion::SpeakerMortality(_) => Some(JoinRequirement::Speaker),
            Criterion::Prosodic(_) => None,
            Criterion::DocFrequency { .. } | Criterion::CollectionFrequency { .. } => {
                // Zero-count equality renders as a self-contained subquery and
                // must not force an inner join to the frequency table, which
                // would drop the very lemmata it matches.
                if self.is_presence_test() {
                    Some(JoinRequirement::WordPart)
                } else {
                    Some(JoinRequirement::FrequencyTable)
                }
            }
            Criterion::PubYearRange { .. } => Some(JoinRequirement::Author),
            Criterion::SpeakerName { .. } => Some(JoinRequirement::Speaker),
            Criterion::WorkSetRef { .. } => None,
            Criterion::WordSetRef { .. } => Some(JoinRequirement::WordSetJoin),
            Criterion::PhraseSetRef { .. } => None,
        }
    }

    /// Whether this criterion renders as a self-contained `not exists`
    /// subquery instead of a comparison against the frequency alias.
    pub(crate) fn is_presence_test(&self) -> bool {
        matches!(
            self,
            Criterion::DocFrequency {
                op: CompareOp::Eq,
                count: 0,
                ..
            } | Criterion::CollectionFrequency {
                op: CompareOp::Eq,
                count: 0,
                ..
            }
        )
    }

    /// Render this criterion's where-clause template against a set of
    /// entity aliases.
    pub(crate) fn where_template(&self, a: &AliasSet) -> ClauseTemplate {
        match self {
            Criterion::CorpusEquals { tag } => ClauseTemplate::new(
                format!("{}.work.corpus.tag = :corpus", a.word),
                vec![("corpus".to_string(), Value::Str(tag.clone()))],
            ),
            Criterion::LemmaEquals { tag } => ClauseTemplate::new(
                format!("{}.lemPos.lemma.tag = :lemma", a.word_part),
                vec![("lemma".to_string(), Value::Str(tag.clone()))],
            ),
            Criterion::PosEquals { tag } => ClauseTemplate::new(
                format!("{}.lemPos.pos.tag = :pos", a.word_part),
                vec![("pos".to_string(), Value::Str(tag.clone()))],
            ),
            Criterion::SpellingLike { pattern, profile } => {
                let folded = collation::insensitive(pattern, profile.charset);
                if pattern.contains('*') {
                    ClauseTemplate::new(
                        format!("{}.spellingInsensitive like :spelling", a.word),
                        vec![("spelling".to_string(), Value::Str(to_like_pattern(&folded)))],
                    )
                } else {
                    ClauseTemplate::new(
                        format!("{}.spellingInsensitive = :spelling", a.word),
                        vec![("spelling".to_string(), Value::Str(folded))],
                    )
                }
            }
            Criterion::SpeakerGender(gender) => ClauseTemplate::new(
                format!("{}.gender = :gender", a.speaker),
                vec![("gender".to_string(), Value::Str(gender.as_str().to_string()))],
            ),
            Criterion::SpeakerMortality(mortality) => ClauseTemplate::new(
                format!("{}.mortality = :mortality", a.speaker),
                vec![(
                    "mortality".to_string(),
                    Value::Str(mortality.as_str().to_string()),
                )],
            ),
            Criterion::Prosodic(prosody) => ClauseTemplate::new(
                format!("{}.prosodic = :prosodic", a.word),
                vec![(
                    "prosodic".to_string(),
                    Value::Str(prosody.as_str().to_string()),
                )],
            ),
            Criterion::DocFrequency { op, count, corpus } => {
                frequency_template(a, "docFreq", *op, *count, corpus)
            }
            Criterion::CollectionFrequency { op, count, corpus } => {
                frequency_template(a, "colFreq", *op, *count, corpus)
            }
            Criterion::PubYearRange { start, end } => ClauseTemplate::new(
                format!(
                    "({alias}.earliestWorkYear >= :startYear and {alias}.latestWorkYear <= :endYear)",
                    alias = a.author
                ),
                vec![
                    ("startYear".to_string(), Value::Int(*start as i64)),
                    ("endYear".to_string(), Value::Int(*end as i64)),
                ],
            ),
            Criterion::SpeakerName { name } => ClauseTemplate::new(
                format!("{}.name = :speakerName", a.speaker),
                vec![("speakerName".to_string(), Value::Str(name.clone()))],
            ),
            Criterion::WorkSetRef { parts, .. } => ClauseTemplate::new(
                format!("{}.workPart.tag in (:workParts)", a.word),
                vec![("workParts".to_string(), Value::StrList(parts.clone()))],
            ),
            Criterion::WordSetRef { words, .. } => ClauseTemplate::new(
                "wordSetWord.tag in (:wordSetWords)",
                vec![("wordSetWords".to_string(), Value::StrList(words.clone()))],
            ),
            Criterion::PhraseSetRef { words, .. } => ClauseTemplate::new(
                format!("{}.tag in (:phraseWords)", a.word),
                vec![("phraseWords".to_string(), Value::StrList(words.clone()))],
            ),
        }
    }

    /// For direct entity-membership variants: the subject path, parameter
    /// base name, and this member's values, used by the typed-set IN
    /// shortcut under `All`/`None`.
    pub(crate) fn membership_values(&self) -> Option<(&'static str, &'static str, Vec<String>)> {
        match self {
            Criterion::CorpusEquals { tag } => Some((
                "word.work.corpus.tag",
                "corpus",
                vec![tag.clone()],
            )),
            Criterion::WorkSetRef { parts, .. } => {
                Some(("word.workPart.tag", "workParts", parts.clone()))
            }
            Criterion::WordSetRef { words, .. } => {
                Some(("wordSetWord.tag", "wordSetWords", words.clone()))
            }
            Criterion::PhraseSetRef { words, .. } => {
                Some(("word.tag", "phraseWords", words.clone()))
            }
            _ => None,
        }
    }

    /// A human-readable rendering of this criterion.
    pub fn describe(&self) -> String {
        match self {
            Criterion::CorpusEquals { tag } => format!("corpus = {tag}"),
            Criterion::LemmaEquals { tag } => format!("lemma = {tag}"),
            Criterion::PosEquals { tag } => format!("part of speech = {tag}"),
            Criterion::SpellingLike { pattern, profile } => {
                let sensitivity = match profile.strength {
                    Strength::Primary => " (case and diacritical insensitive)",
                    Strength::Secondary => " (case insensitive)",
                    Strength::Tertiary => "",
                };
                format!("spelling = {pattern}{sensitivity}")
            }
            Criterion::SpeakerGender(gender) => format!("speaker gender = {}", gender.as_str()),
            Criterion::SpeakerMortality(mortality) => {
                format!("speaker mortality = {}", mortality.as_str())
            }
            Criterion::Prosodic(prosody) => format!("prosodic = {}", prosody.as_str()),
            Criterion::DocFrequency { op, count, corpus } => {
                format!("document frequency {} {count} in {corpus}", op.symbol())
            }
            Criterion::CollectionFrequency { op, count, corpus } => {
                format!("collection frequency {} {count} in {corpus}", op.symbol())
            }
            Criterion::PubYearRange { start, end } => {
                format!("publication year between {start} and {end}")
            }
            Criterion::SpeakerName { name } => format!("speaker name = {name}"),
            Criterion::WorkSetRef { id, .. } => format!("in work set {id}"),
            Criterion::WordSetRef { id, .. } => format!("in word set {id}"),
            Criterion::PhraseSetRef { id, .. } => format!("in phrase set {id}"),
        }
    }
}

/// Render a frequency comparison.
///
/// "Frequency = 0" cannot be expressed as a positive join condition (the
/// frequency table only holds rows for lemmas that occur), so zero-equality
/// folds into a join-presence check and suppresses the count parameter.
fn frequency_template(
    a: &AliasSet,
    field: &str,
    op: CompareOp,
    count: u64,
    corpus: &str,
) -> ClauseTemplate {
    if op == CompareOp::Eq && count == 0 {
        return ClauseTemplate::new(
            format!(
                "(not exists (from {}.lemPos.lemma.corpusCounts zeroCount where zeroCount.corpus.tag = :corpus))",
                a.word_part
            ),
            vec![("corpus".to_string(), Value::Str(corpus.to_string()))],
        );
    }
    ClauseTemplate::new(
        format!(
            "({alias}.corpus.tag = :corpus and {alias}.{field} {op} :{field})",
            alias = a.counts,
            field = field,
            op = op.symbol()
        ),
        vec![
            ("corpus".to_string(), Value::Str(corpus.to_string())),
            (field.to_string(), Value::Int(count as i64)),
        ],
    )
}

/// Convert a primary-folded wildcard pattern into the store's LIKE syntax,
/// collapsing `*` runs into single `%` wildcards.
fn to_like_pattern(folded: &str) -> String {
    let mut out = String::with_capacity(folded.len());
    let mut in_run = false;
    for c in folded.chars() {
        if c == '*' {
            if !in_run {
                out.push('%');
                in_run = true;
            }
        } else {
            out.push(c);
            in_run = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collation::Charset;

    fn aliases() -> AliasSet {
        AliasSet::default()
    }

    #[test]
    fn test_join_requirements() {
        assert_eq!(
            Criterion::CorpusEquals {
                tag: "sha".to_string()
            }
            .join_requirement(),
            None
        );
        assert_eq!(
            Criterion::LemmaEquals {
                tag: "love (n)".to_string()
            }
            .join_requirement(),
            Some(JoinRequirement::WordPart)
        );
        assert_eq!(
            Criterion::SpeakerGender(Gender::Female).join_requirement(),
            Some(JoinRequirement::Speaker)
        );
        assert_eq!(
            Criterion::DocFrequency {
                op: CompareOp::Ge,
                count: 5,
                corpus: "ege".to_string()
            }
            .join_requirement(),
            Some(JoinRequirement::FrequencyTable)
        );
    }

    #[test]
    fn test_zero_frequency_needs_only_word_part_join() {
        // The rendered clause carries its own frequency subquery; an inner
        // join to the frequency table would drop count-less lemmata.
        assert_eq!(
            Criterion::DocFrequency {
                op: CompareOp::Eq,
                count: 0,
                corpus: "sha".to_string()
            }
            .join_requirement(),
            Some(JoinRequirement::WordPart)
        );
        assert_eq!(
            Criterion::CollectionFrequency {
                op: CompareOp::Eq,
                count: 0,
                corpus: "sha".to_string()
            }
            .join_requirement(),
            Some(JoinRequirement::WordPart)
        );
    }

    #[test]
    fn test_corpus_template() {
        let criterion = Criterion::CorpusEquals {
            tag: "sha".to_string(),
        };
        let template = criterion.where_template(&aliases());
        assert_eq!(template.fragment, "word.work.corpus.tag = :corpus");
        assert_eq!(
            template.bindings,
            vec![("corpus".to_string(), Value::Str("sha".to_string()))]
        );
    }

    #[test]
    fn test_spelling_exact_binds_insensitive_form() {
        let criterion = Criterion::SpellingLike {
            pattern: "Étude".to_string(),
            profile: CollationProfile::new(Charset::Roman, Strength::Tertiary),
        };
        let template = criterion.where_template(&aliases());
        assert_eq!(template.fragment, "word.spellingInsensitive = :spelling");
        // The store only indexes the folded form, whatever the strength.
        assert_eq!(
            template.bindings,
            vec![("spelling".to_string(), Value::Str("etude".to_string()))]
        );
    }

    #[test]
    fn test_spelling_wildcard_becomes_like() {
        let criterion = Criterion::SpellingLike {
            pattern: "Soc**tes".to_string(),
            profile: CollationProfile::new(Charset::Roman, Strength::Primary),
        };
        let template = criterion.where_template(&aliases());
        assert_eq!(
            template.fragment,
            "word.spellingInsensitive like :spelling"
        );
        assert_eq!(
            template.bindings,
            vec![("spelling".to_string(), Value::Str("soc%tes".to_string()))]
        );
    }

    #[test]
    fn test_empty_spelling_pattern_is_legal() {
        let criterion = Criterion::SpellingLike {
            pattern: String::new(),
            profile: CollationProfile::new(Charset::Roman, Strength::Primary),
        };
        let template = criterion.where_template(&aliases());
        assert_eq!(
            template.bindings,
            vec![("spelling".to_string(), Value::Str(String::new()))]
        );
    }

    #[test]
    fn test_frequency_template() {
        let criterion = Criterion::DocFrequency {
            op: CompareOp::Ge,
            count: 5,
            corpus: "ege".to_string(),
        };
        let template = criterion.where_template(&aliases());
        assert_eq!(
            template.fragment,
            "(lemmaCounts.corpus.tag = :corpus and lemmaCounts.docFreq >= :docFreq)"
        );
        assert_eq!(template.bindings.len(), 2);
        assert_eq!(template.bindings[1], ("docFreq".to_string(), Value::Int(5)));
    }

    #[test]
    fn test_zero_frequency_suppresses_count_parameter() {
        let criterion = Criterion::CollectionFrequency {
            op: CompareOp::Eq,
            count: 0,
            corpus: "sha".to_string(),
        };
        let template = criterion.where_template(&aliases());
        assert!(template.fragment.contains("not exists"));
        assert_eq!(
            template.bindings,
            vec![("corpus".to_string(), Value::Str("sha".to_string()))]
        );
    }

    #[test]
    fn test_pub_year_range_inverted_accepted() {
        // start > end is accepted as-is; it compiles to a vacuous clause.
        let criterion = Criterion::PubYearRange {
            start: 1616,
            end: 1590,
        };
        let template = criterion.where_template(&aliases());
        assert_eq!(
            template.fragment,
            "(author.earliestWorkYear >= :startYear and author.latestWorkYear <= :endYear)"
        );
        assert_eq!(
            template.bindings,
            vec![
                ("startYear".to_string(), Value::Int(1616)),
                ("endYear".to_string(), Value::Int(1590)),
            ]
        );
    }

    #[test]
    fn test_describe() {
        assert_eq!(
            Criterion::SpellingLike {
                pattern: "foo*".to_string(),
                profile: CollationProfile::new(Charset::Roman, Strength::Primary),
            }
            .describe(),
            "spelling = foo* (case and diacritical insensitive)"
        );
        assert_eq!(
            Criterion::SpeakerGender(Gender::Female).describe(),
            "speaker gender = female"
        );
        assert_eq!(
            Criterion::DocFrequency {
                op: CompareOp::Gt,
                count: 10,
                corpus: "ege".to_string()
            }
            .describe(),
            "document frequency > 10 in ege"
        );
    }

    #[test]
    fn test_membership_values() {
        let criterion = Criterion::WorkSetRef {
            id: 3,
            parts: vec!["ham-1".to_string(), "ham-2".to_string()],
        };
        let (path, base, values) = criterion.membership_values().unwrap();
        assert_eq!(path, "word.workPart.tag");
        assert_eq!(base, "workParts");
        assert_eq!(values.len(), 2);

        assert!(
            Criterion::PubYearRange {
                start: 1590,
                end: 1616
            }
            .membership_values()
            .is_none()
        );
    }
}
