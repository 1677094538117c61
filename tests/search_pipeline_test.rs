//! End-to-end pipeline tests against an in-memory corpus store.

use std::collections::HashMap;
use std::sync::Mutex;

use obelus::prelude::*;

/// An in-memory store: canned execution rows, mutable saved-set membership,
/// and a record of everything the searcher asked for.
struct MemoryStore {
    rows: Mutex<Vec<Vec<Row>>>,
    sets: Mutex<HashMap<(SetKind, u64), Vec<String>>>,
    executed: Mutex<Vec<CompiledPlan>>,
    refreshes: Mutex<usize>,
}

impl MemoryStore {
    fn new() -> Self {
        MemoryStore {
            rows: Mutex::new(Vec::new()),
            sets: Mutex::new(HashMap::new()),
            executed: Mutex::new(Vec::new()),
            refreshes: Mutex::new(0),
        }
    }

    fn with_rows(rows: Vec<Row>) -> Self {
        let store = MemoryStore::new();
        store.rows.lock().unwrap().push(rows);
        store
    }

    fn set_members(&self, kind: SetKind, id: u64, members: Vec<String>) {
        self.sets.lock().unwrap().insert((kind, id), members);
    }

    fn executed_plans(&self) -> Vec<CompiledPlan> {
        self.executed.lock().unwrap().clone()
    }

    fn refresh_count(&self) -> usize {
        *self.refreshes.lock().unwrap()
    }
}

impl CorpusStore for MemoryStore {
    fn execute(&self, plan: &CompiledPlan) -> Result<Vec<Row>> {
        plan.validate()?;
        self.executed.lock().unwrap().push(plan.clone());
        let mut rows = self.rows.lock().unwrap();
        if rows.is_empty() {
            Ok(Vec::new())
        } else {
            Ok(rows.remove(0))
        }
    }

    fn refresh_reference(&self, kind: SetKind, id: u64) -> Result<Vec<String>> {
        *self.refreshes.lock().unwrap() += 1;
        Ok(self
            .sets
            .lock()
            .unwrap()
            .get(&(kind, id))
            .cloned()
            .unwrap_or_default())
    }

    fn expand_work_parts(&self, tags: &[String]) -> Result<Vec<String>> {
        // Container parts carry a trailing slash and expand to two scenes.
        let mut parts = Vec::new();
        for tag in tags {
            if let Some(container) = tag.strip_suffix('/') {
                parts.push(format!("{container}-1"));
                parts.push(format!("{container}-2"));
            } else {
                parts.push(tag.clone());
            }
        }
        Ok(parts)
    }
}

#[test]
fn refresh_is_called_before_compilation_reads_members() {
    let store = MemoryStore::with_rows(Vec::new());
    store.set_members(SetKind::WordSet, 7, vec!["w-old".to_string()]);

    // The criterion is built against the old membership.
    let mut criteria = CriteriaSet::new();
    criteria.add(Criterion::LemmaEquals {
        tag: "love (n)".to_string(),
    });
    criteria.add(Criterion::WordSetRef {
        id: 7,
        words: vec!["w-old".to_string()],
    });

    // Membership changes between construction and the search.
    store.set_members(SetKind::WordSet, 7, vec!["w-new-1".to_string(), "w-new-2".to_string()]);

    let searcher = Searcher::new(&store);
    searcher.search(&mut criteria).unwrap();

    assert_eq!(store.refresh_count(), 1);
    let plans = store.executed_plans();
    assert_eq!(
        plans[0].parameter("wordSetWords1"),
        Some(&Value::StrList(vec![
            "w-new-1".to_string(),
            "w-new-2".to_string()
        ]))
    );
}

#[test]
fn work_set_references_expand_container_parts() {
    let store = MemoryStore::with_rows(Vec::new());
    store.set_members(
        SetKind::WorkSet,
        3,
        vec!["ham/".to_string(), "lr-1".to_string()],
    );

    let mut criteria = CriteriaSet::new();
    criteria.add(Criterion::LemmaEquals {
        tag: "king (n)".to_string(),
    });
    criteria.add(Criterion::WorkSetRef {
        id: 3,
        parts: Vec::new(),
    });

    let searcher = Searcher::new(&store);
    searcher.search(&mut criteria).unwrap();

    let plans = store.executed_plans();
    assert_eq!(
        plans[0].parameter("workParts1"),
        Some(&Value::StrList(vec![
            "ham-1".to_string(),
            "ham-2".to_string(),
            "lr-1".to_string()
        ]))
    );
}

#[test]
fn results_are_sorted_and_deduplicated() {
    let mut rows = vec![
        Row::word(10, "b", 1, "love"),
        Row::word(11, "a", 5, "love"),
        Row::word(12, "a", 2, "love"),
    ];
    // A duplicate (word, part) pair from a second matching join row.
    rows.push(Row::word(11, "a", 5, "love"));

    let store = MemoryStore::with_rows(rows);
    let mut criteria = CriteriaSet::new();
    criteria.add(Criterion::LemmaEquals {
        tag: "love (n)".to_string(),
    });

    let searcher = Searcher::new(&store);
    let results = searcher.search(&mut criteria).unwrap();
    let ids: Vec<u64> = results.iter().map(|r| r.word_id).collect();
    assert_eq!(ids, vec![12, 11, 10]);
}

#[test]
fn greek_spelling_search_filters_at_declared_strength() {
    let store = MemoryStore::with_rows(vec![
        Row::word(1, "il", 1, "μῆνιν"),
        Row::word(2, "il", 9, "ΜΗΝΙΝ"),
        Row::word(3, "il", 12, "μανίαν"),
    ]);

    // Secondary strength: case-insensitive but diacritic-sensitive, so the
    // all-caps row (no diacritics) must be dropped.
    let mut criteria = CriteriaSet::new();
    criteria.add(Criterion::SpellingLike {
        pattern: "μῆνιν".to_string(),
        profile: CollationProfile::new(Charset::Greek, Strength::Secondary),
    });

    let searcher = Searcher::new(&store);
    let results = searcher.search(&mut criteria).unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].word_id, 1);
}

#[test]
fn any_spelling_group_keeps_rows_matching_some_member() {
    let store = MemoryStore::with_rows(vec![
        Row::word(1, "a", 1, "love"),
        Row::word(2, "a", 2, "loue"),
        Row::word(3, "a", 3, "hate"),
    ]);

    let profile = CollationProfile::new(Charset::Roman, Strength::Primary);
    let mut group = TypedSet::new(CriterionKind::SpellingLike);
    group
        .add(Criterion::SpellingLike {
            pattern: "love".to_string(),
            profile,
        })
        .unwrap();
    group
        .add(Criterion::SpellingLike {
            pattern: "loue".to_string(),
            profile,
        })
        .unwrap();

    let mut criteria = CriteriaSet::new();
    criteria.add_group(group);

    let searcher = Searcher::new(&store);
    let results = searcher.search(&mut criteria).unwrap();
    let ids: Vec<u64> = results.iter().map(|r| r.word_id).collect();
    assert_eq!(ids, vec![1, 2]);
}

#[test]
fn lemma_rollup_ranks_by_collection_frequency() {
    let mut hit_a = Row::word(1, "a", 1, "love");
    hit_a.part_index = 0;
    hit_a.lemma_id = Some(100);
    let mut hit_b = Row::word(2, "a", 2, "loving");
    hit_b.part_index = 0;
    hit_b.lemma_id = Some(101);

    let aggregate = |lemma_id: u64, col: u64, doc: u64| Row {
        word_id: 0,
        part_index: -1,
        work_tag: String::new(),
        ordinal: 0,
        spelling: String::new(),
        lemma_id: Some(lemma_id),
        collection_frequency: Some(col),
        document_frequency: Some(doc),
    };

    let store = MemoryStore::with_rows(vec![hit_a, hit_b]);
    store
        .rows
        .lock()
        .unwrap()
        .push(vec![aggregate(100, 12, 3), aggregate(101, 57, 9)]);

    let mut criteria = CriteriaSet::new();
    criteria.add(Criterion::SpellingLike {
        pattern: "lov*".to_string(),
        profile: CollationProfile::new(Charset::Roman, Strength::Primary),
    });
    criteria.add(Criterion::PosEquals {
        tag: "n".to_string(),
    });

    let searcher = Searcher::new(&store);
    let results = searcher.search_lemmata(&mut criteria).unwrap();
    assert_eq!(
        results,
        vec![
            LemmaSearchResult {
                lemma_id: 101,
                collection_frequency: 57,
                document_frequency: 9
            },
            LemmaSearchResult {
                lemma_id: 100,
                collection_frequency: 12,
                document_frequency: 3
            },
        ]
    );
}

#[test]
fn empty_criteria_set_reaches_caller_as_user_error() {
    let store = MemoryStore::new();
    let searcher = Searcher::new(&store);
    match searcher.search(&mut CriteriaSet::new()) {
        Err(ObelusError::EmptyCriteriaSet) => {}
        other => panic!("expected EmptyCriteriaSet, got {other:?}"),
    }
    assert!(store.executed_plans().is_empty());
}
