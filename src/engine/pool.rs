use std::collections::BTreeMap;

use crate::content::entry::StudyCard;
use crate::content::level::{LEVEL_ORDER, Level};
use crate::content::library::Library;
use crate::engine::StudyError;

/// Which content table feeds the quiz and flashcards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StudySource {
    Characters,
    Words,
}

impl StudySource {
    pub fn as_str(self) -> &'static str {
        match self {
            StudySource::Characters => "characters",
            StudySource::Words => "words",
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            StudySource::Characters => StudySource::Words,
            StudySource::Words => StudySource::Characters,
        }
    }
}

/// Resolve an inclusive `from..=to` span of the level order. A single
/// level is a valid span; a reversed pair is refused.
pub fn resolve_span(from: Level, to: Level) -> Result<&'static [Level], StudyError> {
    if from > to {
        return Err(StudyError::InvalidRange { from, to });
    }
    Ok(&LEVEL_ORDER[from.rank()..=to.rank()])
}

/// Concatenate table rows for each level of a span, in level order.
/// Levels missing from the table contribute nothing.
pub fn concat_range<'a, E>(span: &[Level], table: &'a BTreeMap<Level, Vec<E>>) -> Vec<&'a E> {
    span.iter()
        .filter_map(|level| table.get(level))
        .flat_map(|rows| rows.iter())
        .collect()
}

/// Build the quiz/flashcard pool for a source over a resolved span.
pub fn card_pool(library: &Library, source: StudySource, span: &[Level]) -> Vec<StudyCard> {
    match source {
        StudySource::Characters => concat_range(span, &library.characters)
            .into_iter()
            .map(StudyCard::from)
            .collect(),
        StudySource::Words => concat_range(span, &library.words)
            .into_iter()
            .map(StudyCard::from)
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::entry::CharacterEntry;

    fn entry(glyph: &str) -> CharacterEntry {
        CharacterEntry {
            glyph: glyph.to_string(),
            gloss: "훈".to_string(),
            reading: "음".to_string(),
            strokes: 1,
        }
    }

    #[test]
    fn single_level_span_is_valid() {
        let span = resolve_span(Level::L7, Level::L7).unwrap();
        assert_eq!(span, &[Level::L7]);
    }

    #[test]
    fn full_span_covers_every_level() {
        let span = resolve_span(Level::L8, Level::Special).unwrap();
        assert_eq!(span.len(), 14);
        assert_eq!(span.first(), Some(&Level::L8));
        assert_eq!(span.last(), Some(&Level::Special));
    }

    #[test]
    fn reversed_span_is_refused() {
        let err = resolve_span(Level::Pre7, Level::L8).unwrap_err();
        assert_eq!(
            err,
            StudyError::InvalidRange {
                from: Level::Pre7,
                to: Level::L8
            }
        );
    }

    #[test]
    fn concat_preserves_level_then_row_order() {
        let mut table: BTreeMap<Level, Vec<CharacterEntry>> = BTreeMap::new();
        table.insert(Level::L7, vec![entry("丙"), entry("丁")]);
        table.insert(Level::L8, vec![entry("甲"), entry("乙")]);

        let span = resolve_span(Level::L8, Level::L7).unwrap();
        let rows = concat_range(span, &table);
        let glyphs: Vec<&str> = rows.iter().map(|e| e.glyph.as_str()).collect();
        assert_eq!(glyphs, vec!["甲", "乙", "丙", "丁"]);
    }

    #[test]
    fn absent_levels_contribute_nothing() {
        let mut table: BTreeMap<Level, Vec<CharacterEntry>> = BTreeMap::new();
        table.insert(Level::L8, vec![entry("甲")]);
        // 준7급 has no rows; the span still resolves and just skips it.
        let span = resolve_span(Level::L8, Level::L7).unwrap();
        let rows = concat_range(span, &table);
        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn empty_table_gives_empty_pool() {
        let table: BTreeMap<Level, Vec<CharacterEntry>> = BTreeMap::new();
        let span = resolve_span(Level::L8, Level::Special).unwrap();
        assert!(concat_range(span, &table).is_empty());
    }

    #[test]
    fn card_pool_normalizes_both_sources() {
        let library = Library::load();
        let span = resolve_span(Level::L8, Level::L8).unwrap();

        let characters = card_pool(&library, StudySource::Characters, span);
        assert_eq!(characters.len(), library.character_count(Level::L8));
        // Captions carry "gloss reading" for character cards.
        assert!(characters.iter().all(|c| c.caption.contains(' ')));

        let words = card_pool(&library, StudySource::Words, span);
        assert!(words.iter().all(|c| c.glyph.chars().count() >= 2));
    }
}
