//! Static character-translation tables for collation folding.
//!
//! Two tables per charset, built once at first use and never mutated:
//! a case fold (uppercase to lowercase, final sigma to medial sigma) and a
//! diacritic fold (accented lowercase to the bare base letter). Code points
//! outside the covered ranges pass through unchanged.
//!
//! Roman covers ASCII plus the Latin-1 supplement; Greek covers the basic
//! Greek block (monotonic) plus the polytonic Greek Extended block
//! (U+1F00–U+1FFF).

use ahash::AHashMap;
use lazy_static::lazy_static;

use crate::collation::Charset;

fn insert_offset_range(map: &mut AHashMap<char, char>, range: std::ops::RangeInclusive<u32>, offset: i32) {
    for cp in range {
        let from = char::from_u32(cp);
        let to = char::from_u32((cp as i32 + offset) as u32);
        if let (Some(from), Some(to)) = (from, to) {
            map.insert(from, to);
        }
    }
}

fn insert_range_to(map: &mut AHashMap<char, char>, range: std::ops::RangeInclusive<u32>, base: char) {
    for cp in range {
        if let Some(from) = char::from_u32(cp) {
            map.insert(from, base);
        }
    }
}

lazy_static! {
    static ref ROMAN_CASE_FOLD: AHashMap<char, char> = {
        let mut m = AHashMap::new();
        insert_offset_range(&mut m, 0x41..=0x5A, 0x20); // A-Z
        insert_offset_range(&mut m, 0xC0..=0xD6, 0x20); // À-Ö
        insert_offset_range(&mut m, 0xD8..=0xDE, 0x20); // Ø-Þ
        m
    };

    static ref ROMAN_DIACRITIC_FOLD: AHashMap<char, char> = {
        let mut m = AHashMap::new();
        insert_range_to(&mut m, 0xE0..=0xE5, 'a'); // à-å
        m.insert('ç', 'c');
        insert_range_to(&mut m, 0xE8..=0xEB, 'e'); // è-ë
        insert_range_to(&mut m, 0xEC..=0xEF, 'i'); // ì-ï
        m.insert('ñ', 'n');
        insert_range_to(&mut m, 0xF2..=0xF6, 'o'); // ò-ö
        m.insert('ø', 'o');
        insert_range_to(&mut m, 0xF9..=0xFC, 'u'); // ù-ü
        m.insert('ý', 'y');
        m.insert('ÿ', 'y');
        m
    };

    static ref GREEK_CASE_FOLD: AHashMap<char, char> = {
        let mut m = AHashMap::new();
        insert_offset_range(&mut m, 0x391..=0x3A1, 0x20); // Α-Ρ
        insert_offset_range(&mut m, 0x3A3..=0x3AB, 0x20); // Σ-Ϋ
        m.insert('ς', 'σ'); // final sigma folds to medial
        // Monotonic accented capitals are not at a fixed offset.
        m.insert('Ά', 'ά');
        m.insert('Έ', 'έ');
        m.insert('Ή', 'ή');
        m.insert('Ί', 'ί');
        m.insert('Ό', 'ό');
        m.insert('Ύ', 'ύ');
        m.insert('Ώ', 'ώ');
        // Polytonic blocks pair uppercase at lowercase + 8.
        for range in [
            0x1F08..=0x1F0F,
            0x1F18..=0x1F1D,
            0x1F28..=0x1F2F,
            0x1F38..=0x1F3F,
            0x1F48..=0x1F4D,
            0x1F68..=0x1F6F,
            0x1F88..=0x1F8F,
            0x1F98..=0x1F9F,
            0x1FA8..=0x1FAF,
        ] {
            insert_offset_range(&mut m, range, -8);
        }
        for cp in [0x1F59u32, 0x1F5B, 0x1F5D, 0x1F5F] {
            insert_offset_range(&mut m, cp..=cp, -8);
        }
        // The 1FBx-1FFx rows are irregular.
        let pairs: [(u32, u32); 22] = [
            (0x1FB8, 0x1FB0),
            (0x1FB9, 0x1FB1),
            (0x1FBA, 0x1F70),
            (0x1FBB, 0x1F71),
            (0x1FBC, 0x1FB3),
            (0x1FC8, 0x1F72),
            (0x1FC9, 0x1F73),
            (0x1FCA, 0x1F74),
            (0x1FCB, 0x1F75),
            (0x1FCC, 0x1FC3),
            (0x1FD8, 0x1FD0),
            (0x1FD9, 0x1FD1),
            (0x1FDA, 0x1F76),
            (0x1FDB, 0x1F77),
            (0x1FE8, 0x1FE0),
            (0x1FE9, 0x1FE1),
            (0x1FEA, 0x1F7A),
            (0x1FEB, 0x1F7B),
            (0x1FEC, 0x1FE5),
            (0x1FF8, 0x1F78),
            (0x1FF9, 0x1F79),
            (0x1FFA, 0x1F7C),
        ];
        for (upper, lower) in pairs {
            if let (Some(u), Some(l)) = (char::from_u32(upper), char::from_u32(lower)) {
                m.insert(u, l);
            }
        }
        if let (Some(u), Some(l)) = (char::from_u32(0x1FFB), char::from_u32(0x1F7D)) {
            m.insert(u, l);
        }
        if let (Some(u), Some(l)) = (char::from_u32(0x1FFC), char::from_u32(0x1FF3)) {
            m.insert(u, l);
        }
        m
    };

    static ref GREEK_DIACRITIC_FOLD: AHashMap<char, char> = {
        let mut m = AHashMap::new();
        // Monotonic accented lowercase.
        m.insert('ά', 'α');
        m.insert('έ', 'ε');
        m.insert('ή', 'η');
        m.insert('ί', 'ι');
        m.insert('ό', 'ο');
        m.insert('ύ', 'υ');
        m.insert('ώ', 'ω');
        m.insert('ϊ', 'ι');
        m.insert('ϋ', 'υ');
        m.insert('ΐ', 'ι');
        m.insert('ΰ', 'υ');
        // Polytonic lowercase with breathings, accents and iota subscript.
        insert_range_to(&mut m, 0x1F00..=0x1F07, 'α');
        insert_range_to(&mut m, 0x1F10..=0x1F15, 'ε');
        insert_range_to(&mut m, 0x1F20..=0x1F27, 'η');
        insert_range_to(&mut m, 0x1F30..=0x1F37, 'ι');
        insert_range_to(&mut m, 0x1F40..=0x1F45, 'ο');
        insert_range_to(&mut m, 0x1F50..=0x1F57, 'υ');
        insert_range_to(&mut m, 0x1F60..=0x1F67, 'ω');
        insert_range_to(&mut m, 0x1F70..=0x1F71, 'α');
        insert_range_to(&mut m, 0x1F72..=0x1F73, 'ε');
        insert_range_to(&mut m, 0x1F74..=0x1F75, 'η');
        insert_range_to(&mut m, 0x1F76..=0x1F77, 'ι');
        insert_range_to(&mut m, 0x1F78..=0x1F79, 'ο');
        insert_range_to(&mut m, 0x1F7A..=0x1F7B, 'υ');
        insert_range_to(&mut m, 0x1F7C..=0x1F7D, 'ω');
        insert_range_to(&mut m, 0x1F80..=0x1F87, 'α');
        insert_range_to(&mut m, 0x1F90..=0x1F97, 'η');
        insert_range_to(&mut m, 0x1FA0..=0x1FA7, 'ω');
        insert_range_to(&mut m, 0x1FB0..=0x1FB4, 'α');
        insert_range_to(&mut m, 0x1FB6..=0x1FB7, 'α');
        insert_range_to(&mut m, 0x1FC2..=0x1FC4, 'η');
        insert_range_to(&mut m, 0x1FC6..=0x1FC7, 'η');
        insert_range_to(&mut m, 0x1FD0..=0x1FD3, 'ι');
        insert_range_to(&mut m, 0x1FD6..=0x1FD7, 'ι');
        insert_range_to(&mut m, 0x1FE0..=0x1FE3, 'υ');
        insert_range_to(&mut m, 0x1FE4..=0x1FE5, 'ρ');
        insert_range_to(&mut m, 0x1FE6..=0x1FE7, 'υ');
        insert_range_to(&mut m, 0x1FF2..=0x1FF4, 'ω');
        insert_range_to(&mut m, 0x1FF6..=0x1FF7, 'ω');
        m
    };
}

/// Fold a single character to lowercase for the given charset.
///
/// Unmapped code points pass through unchanged.
pub fn case_fold(c: char, charset: Charset) -> char {
    let table = match charset {
        Charset::Roman => &*ROMAN_CASE_FOLD,
        Charset::Greek => &*GREEK_CASE_FOLD,
    };
    table.get(&c).copied().unwrap_or(c)
}

/// Strip diacritics from a lowercase character for the given charset.
///
/// Expects case-folded input; uppercase and unmapped code points pass
/// through unchanged.
pub fn diacritic_fold(c: char, charset: Charset) -> char {
    let table = match charset {
        Charset::Roman => &*ROMAN_DIACRITIC_FOLD,
        Charset::Greek => &*GREEK_DIACRITIC_FOLD,
    };
    table.get(&c).copied().unwrap_or(c)
}
