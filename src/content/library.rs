use std::collections::BTreeMap;

use serde::de::DeserializeOwned;

use crate::content::entry::{CharacterEntry, IdiomEntry, VocabularyEntry};
use crate::content::level::Level;

const CHARACTERS_JSON: &str = include_str!("../../assets/characters.json");
const WORDS_JSON: &str = include_str!("../../assets/words.json");
const IDIOMS_JSON: &str = include_str!("../../assets/idioms.json");

/// All bundled study content, keyed by level. Loaded once at startup and
/// never mutated afterwards.
pub struct Library {
    pub characters: BTreeMap<Level, Vec<CharacterEntry>>,
    pub words: BTreeMap<Level, Vec<VocabularyEntry>>,
    pub idioms: Vec<IdiomEntry>,
}

impl Library {
    pub fn load() -> Self {
        Self {
            characters: parse_table(CHARACTERS_JSON),
            words: parse_table(WORDS_JSON),
            idioms: serde_json::from_str(IDIOMS_JSON).unwrap_or_default(),
        }
    }

    pub fn character_count(&self, level: Level) -> usize {
        self.characters.get(&level).map_or(0, Vec::len)
    }

    pub fn total_characters(&self) -> usize {
        self.characters.values().map(Vec::len).sum()
    }

    pub fn total_words(&self) -> usize {
        self.words.values().map(Vec::len).sum()
    }
}

/// Parse a `{ "급수": [rows] }` table. Labels that aren't a known level
/// are dropped rather than failing the whole load.
fn parse_table<E: DeserializeOwned>(json: &str) -> BTreeMap<Level, Vec<E>> {
    let raw: BTreeMap<String, Vec<E>> = serde_json::from_str(json).unwrap_or_default();
    raw.into_iter()
        .filter_map(|(label, rows)| Level::from_label(&label).map(|level| (level, rows)))
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::content::level::LEVEL_ORDER;

    #[test]
    fn bundled_tables_parse() {
        let library = Library::load();
        assert!(!library.characters.is_empty());
        assert!(!library.words.is_empty());
        assert!(!library.idioms.is_empty());
    }

    #[test]
    fn beginner_level_is_complete() {
        // 8급 is the full official set of 50.
        let library = Library::load();
        assert_eq!(library.character_count(Level::L8), 50);
    }

    #[test]
    fn character_rows_are_well_formed() {
        let library = Library::load();
        for (level, rows) in &library.characters {
            assert!(!rows.is_empty(), "{level} table should not be empty");
            for entry in rows {
                assert_eq!(
                    entry.glyph.chars().count(),
                    1,
                    "{level} glyph {:?} should be a single character",
                    entry.glyph
                );
                assert!(!entry.gloss.is_empty());
                assert!(!entry.reading.is_empty());
                assert!(entry.strokes >= 1);
            }
        }
    }

    #[test]
    fn glyphs_are_unique_across_levels() {
        // Quiz identity keys are glyphs; a character taught twice would
        // make its own duplicate a "distractor".
        let library = Library::load();
        let mut seen: HashSet<&str> = HashSet::new();
        for rows in library.characters.values() {
            for entry in rows {
                assert!(
                    seen.insert(entry.glyph.as_str()),
                    "glyph {} appears in more than one level",
                    entry.glyph
                );
            }
        }
    }

    #[test]
    fn word_rows_are_well_formed() {
        let library = Library::load();
        for (level, rows) in &library.words {
            for entry in rows {
                assert!(
                    entry.headword.chars().count() >= 2,
                    "{level} headword {:?} should be a compound",
                    entry.headword
                );
                assert!(!entry.meaning.is_empty());
            }
        }
    }

    #[test]
    fn idioms_are_four_characters() {
        let library = Library::load();
        // At least one full daily set's worth.
        assert!(library.idioms.len() >= 5);
        let mut seen: HashSet<&str> = HashSet::new();
        for idiom in &library.idioms {
            assert_eq!(
                idiom.phrase.chars().count(),
                4,
                "{:?} should be four characters",
                idiom.phrase
            );
            assert!(!idiom.reading.is_empty());
            assert!(!idiom.meaning.is_empty());
            assert!(seen.insert(idiom.phrase.as_str()), "{} is listed twice", idiom.phrase);
        }
    }

    #[test]
    fn upper_levels_are_still_in_preparation() {
        // The app has to cope with levels that ship no data yet.
        let library = Library::load();
        let missing: Vec<Level> = LEVEL_ORDER
            .iter()
            .copied()
            .filter(|lv| library.character_count(*lv) == 0)
            .collect();
        assert!(missing.contains(&Level::Special));
    }

    #[test]
    fn unknown_labels_are_skipped() {
        let table: BTreeMap<Level, Vec<CharacterEntry>> = parse_table(
            r#"{
              "8급": [{"glyph":"一","gloss":"한","reading":"일","strokes":1}],
              "9급": [{"glyph":"曌","gloss":"비칠","reading":"조","strokes":16}]
            }"#,
        );
        assert_eq!(table.len(), 1);
        assert!(table.contains_key(&Level::L8));
    }

    #[test]
    fn malformed_json_loads_empty() {
        let table: BTreeMap<Level, Vec<CharacterEntry>> = parse_table("not json");
        assert!(table.is_empty());
    }
}
