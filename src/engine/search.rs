use icu_normalizer::ComposingNormalizerBorrowed;

use crate::content::entry::CharacterEntry;
use crate::content::level::{LEVEL_ORDER, Level};
use crate::content::library::Library;

/// One search result, tagged with the level that teaches the character.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchHit {
    pub level: Level,
    pub entry: CharacterEntry,
}

/// Case-sensitive substring search over glyph, gloss and reading of every
/// character table.
///
/// Hits come back in level order and keep each level's row order, so the
/// same query always renders the same list. The query is NFC-normalized
/// first: the bundled tables are NFC, but some terminals hand over Hangul
/// as decomposed jamo. Normalization does not fold case.
pub fn search(library: &Library, query: &str) -> Vec<SearchHit> {
    if query.is_empty() {
        return Vec::new();
    }
    let query = ComposingNormalizerBorrowed::new_nfc().normalize(query);

    let mut hits = Vec::new();
    for level in LEVEL_ORDER {
        let Some(rows) = library.characters.get(&level) else {
            continue;
        };
        for entry in rows {
            if entry.glyph.contains(&*query)
                || entry.gloss.contains(&*query)
                || entry.reading.contains(&*query)
            {
                hits.push(SearchHit {
                    level,
                    entry: entry.clone(),
                });
            }
        }
    }
    hits
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    fn entry(glyph: &str, gloss: &str, reading: &str) -> CharacterEntry {
        CharacterEntry {
            glyph: glyph.to_string(),
            gloss: gloss.to_string(),
            reading: reading.to_string(),
            strokes: 4,
        }
    }

    fn small_library() -> Library {
        let mut characters = BTreeMap::new();
        characters.insert(
            Level::L8,
            vec![entry("水", "물", "수"), entry("火", "불", "화")],
        );
        characters.insert(Level::L7, vec![entry("數", "셈", "수")]);
        Library {
            characters,
            words: BTreeMap::new(),
            idioms: Vec::new(),
        }
    }

    #[test]
    fn empty_query_returns_nothing() {
        let library = small_library();
        assert!(search(&library, "").is_empty());
    }

    #[test]
    fn matches_glyph_gloss_and_reading() {
        let library = small_library();

        let by_glyph = search(&library, "火");
        assert_eq!(by_glyph.len(), 1);
        assert_eq!(by_glyph[0].entry.glyph, "火");
        assert_eq!(by_glyph[0].level, Level::L8);

        let by_gloss = search(&library, "불");
        assert_eq!(by_gloss.len(), 1);
        assert_eq!(by_gloss[0].entry.glyph, "火");

        let by_reading = search(&library, "수");
        assert_eq!(by_reading.len(), 2);
    }

    #[test]
    fn hits_come_back_in_level_order_and_stay_stable() {
        let library = small_library();
        let first = search(&library, "수");
        assert_eq!(first[0].level, Level::L8);
        assert_eq!(first[0].entry.glyph, "水");
        assert_eq!(first[1].level, Level::L7);
        assert_eq!(first[1].entry.glyph, "數");

        let second = search(&library, "수");
        assert_eq!(first, second);
    }

    #[test]
    fn no_match_is_an_empty_list() {
        let library = small_library();
        assert!(search(&library, "없는말").is_empty());
    }

    #[test]
    fn decomposed_jamo_queries_still_match() {
        // ᄉ + ᅮ as separate jamo compose to 수 under NFC.
        let library = small_library();
        let composed = search(&library, "수");
        let decomposed = search(&library, "\u{1109}\u{116E}");
        assert_eq!(composed, decomposed);
        assert_eq!(decomposed.len(), 2);
    }

    #[test]
    fn matching_is_case_sensitive() {
        let mut characters = BTreeMap::new();
        characters.insert(Level::L8, vec![entry("水", "water", "Su")]);
        let library = Library {
            characters,
            words: BTreeMap::new(),
            idioms: Vec::new(),
        };

        assert_eq!(search(&library, "Su").len(), 1);
        assert!(search(&library, "su").is_empty());
        assert!(search(&library, "WATER").is_empty());
    }

    #[test]
    fn finds_entries_in_the_bundled_tables() {
        let library = Library::load();
        let hits = search(&library, "學");
        assert!(!hits.is_empty());
        assert!(hits.iter().any(|h| h.level == Level::L8));
    }
}
