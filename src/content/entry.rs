use serde::{Deserialize, Serialize};

/// One hanja row: the glyph with its Korean gloss (훈) and reading (음).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CharacterEntry {
    pub glyph: String,
    pub gloss: String,
    pub reading: String,
    pub strokes: u8,
}

/// A compound word built from hanja, with its plain Korean meaning.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VocabularyEntry {
    pub headword: String,
    pub meaning: String,
}

/// A four-character idiom (사자성어).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IdiomEntry {
    pub phrase: String,
    pub reading: String,
    pub meaning: String,
}

/// The two-faced view quiz rounds and flashcards deal in. `glyph` doubles
/// as the identity key: two cards are the same answer iff glyphs match.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StudyCard {
    pub glyph: String,
    pub caption: String,
}

impl From<&CharacterEntry> for StudyCard {
    fn from(entry: &CharacterEntry) -> Self {
        Self {
            glyph: entry.glyph.clone(),
            caption: format!("{} {}", entry.gloss, entry.reading),
        }
    }
}

impl From<&VocabularyEntry> for StudyCard {
    fn from(entry: &VocabularyEntry) -> Self {
        Self {
            glyph: entry.headword.clone(),
            caption: entry.meaning.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn character_card_caption_is_gloss_then_reading() {
        let entry = CharacterEntry {
            glyph: "火".to_string(),
            gloss: "불".to_string(),
            reading: "화".to_string(),
            strokes: 4,
        };
        let card = StudyCard::from(&entry);
        assert_eq!(card.glyph, "火");
        assert_eq!(card.caption, "불 화");
    }

    #[test]
    fn vocabulary_card_uses_headword_as_key() {
        let entry = VocabularyEntry {
            headword: "學校".to_string(),
            meaning: "학교".to_string(),
        };
        let card = StudyCard::from(&entry);
        assert_eq!(card.glyph, "學校");
        assert_eq!(card.caption, "학교");
    }
}
