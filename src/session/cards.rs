use crate::content::entry::StudyCard;
use crate::content::level::Level;
use crate::content::library::Library;
use crate::engine::StudyError;
use crate::engine::pool::{StudySource, card_pool, resolve_span};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardFace {
    GlyphFront,
    CaptionFront,
}

impl CardFace {
    pub fn as_str(&self) -> &'static str {
        match self {
            CardFace::GlyphFront => "hanja front",
            CardFace::CaptionFront => "meaning front",
        }
    }

    pub fn toggle(&self) -> Self {
        match self {
            CardFace::GlyphFront => CardFace::CaptionFront,
            CardFace::CaptionFront => CardFace::GlyphFront,
        }
    }
}

/// Flashcard walk over a level range. Unlike the quiz there is no
/// four-card minimum; a single card is a perfectly fine deck.
pub struct CardDeck {
    pub from: Level,
    pub to: Level,
    pub source: StudySource,
    pub face: CardFace,
    pub cards: Result<Vec<StudyCard>, StudyError>,
    pub index: usize,
    pub flipped: bool,
}

impl CardDeck {
    pub fn new(library: &Library) -> Self {
        let mut deck = Self {
            from: Level::L8,
            to: Level::Special,
            source: StudySource::Characters,
            face: CardFace::GlyphFront,
            cards: Ok(Vec::new()),
            index: 0,
            flipped: false,
        };
        deck.rebuild(library);
        deck
    }

    pub fn rebuild(&mut self, library: &Library) {
        self.index = 0;
        self.flipped = false;
        self.cards =
            resolve_span(self.from, self.to).map(|span| card_pool(library, self.source, span));
    }

    pub fn len(&self) -> usize {
        self.cards.as_ref().map_or(0, Vec::len)
    }

    pub fn current(&self) -> Option<&StudyCard> {
        self.cards.as_ref().ok()?.get(self.index)
    }

    // Moving always lands face-down again.
    pub fn next(&mut self) {
        let last = self.len().saturating_sub(1);
        if self.index < last {
            self.index += 1;
            self.flipped = false;
        }
    }

    pub fn prev(&mut self) {
        if self.index > 0 {
            self.index -= 1;
            self.flipped = false;
        }
    }

    pub fn flip(&mut self) {
        if self.current().is_some() {
            self.flipped = !self.flipped;
        }
    }

    /// Text for the visible side of the current card.
    pub fn face_text(&self) -> Option<&str> {
        let card = self.current()?;
        let front_is_glyph = matches!(self.face, CardFace::GlyphFront);
        let show_glyph = front_is_glyph != self.flipped;
        Some(if show_glyph { &card.glyph } else { &card.caption })
    }

    pub fn cycle_from(&mut self, library: &Library, forward: bool) {
        self.from = if forward {
            self.from.next()
        } else {
            self.from.prev()
        };
        self.rebuild(library);
    }

    pub fn cycle_to(&mut self, library: &Library, forward: bool) {
        self.to = if forward { self.to.next() } else { self.to.prev() };
        self.rebuild(library);
    }

    pub fn cycle_source(&mut self, library: &Library) {
        self.source = self.source.toggle();
        self.rebuild(library);
    }

    pub fn cycle_face(&mut self) {
        self.face = self.face.toggle();
        self.flipped = false;
    }
}
