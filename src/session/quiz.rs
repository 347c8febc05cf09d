use std::time::{Duration, Instant};

use rand::rngs::SmallRng;

use crate::content::entry::StudyCard;
use crate::content::level::Level;
use crate::content::library::Library;
use crate::engine::StudyError;
use crate::engine::deal::{QuizRound, draw_round};
use crate::engine::pool::{StudySource, card_pool, resolve_span};

/// Which side of the card the question shows. The options always show
/// the other side.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizStyle {
    GlyphPrompt,
    CaptionPrompt,
}

impl QuizStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuizStyle::GlyphPrompt => "hanja prompt",
            QuizStyle::CaptionPrompt => "meaning prompt",
        }
    }

    pub fn toggle(&self) -> Self {
        match self {
            QuizStyle::GlyphPrompt => QuizStyle::CaptionPrompt,
            QuizStyle::CaptionPrompt => QuizStyle::GlyphPrompt,
        }
    }

    pub fn prompt_face<'a>(&self, card: &'a StudyCard) -> &'a str {
        match self {
            QuizStyle::GlyphPrompt => &card.glyph,
            QuizStyle::CaptionPrompt => &card.caption,
        }
    }

    pub fn option_face<'a>(&self, card: &'a StudyCard) -> &'a str {
        match self {
            QuizStyle::GlyphPrompt => &card.caption,
            QuizStyle::CaptionPrompt => &card.glyph,
        }
    }
}

/// Outcome of an answered round, held until the advance deadline passes.
#[derive(Clone, Copy, Debug)]
pub struct Grading {
    pub chosen: usize,
    pub correct: bool,
    pub advance_at: Instant,
}

pub struct QuizSession {
    pub from: Level,
    pub to: Level,
    pub source: StudySource,
    pub style: QuizStyle,
    pub pool: Vec<StudyCard>,
    pub deal: Result<QuizRound, StudyError>,
    pub score: u32,
    pub answered: u32,
    pub selected: usize,
    pub grading: Option<Grading>,
}

impl QuizSession {
    pub fn new(library: &Library, rng: &mut SmallRng) -> Self {
        let mut session = Self {
            from: Level::L8,
            to: Level::Special,
            source: StudySource::Characters,
            style: QuizStyle::GlyphPrompt,
            pool: Vec::new(),
            deal: Err(StudyError::InsufficientData {
                needed: 0,
                found: 0,
            }),
            score: 0,
            answered: 0,
            selected: 0,
            grading: None,
        };
        session.rebuild(library, rng);
        session
    }

    /// Recompute the pool for the current range and deal a fresh round.
    /// The running score is left alone so range tweaks mid-session
    /// don't wipe it.
    pub fn rebuild(&mut self, library: &Library, rng: &mut SmallRng) {
        self.selected = 0;
        self.grading = None;
        match resolve_span(self.from, self.to) {
            Ok(span) => {
                self.pool = card_pool(library, self.source, span);
                self.deal = draw_round(&self.pool, rng);
            }
            Err(err) => {
                self.pool.clear();
                self.deal = Err(err);
            }
        }
    }

    /// Deal the next round from the existing pool. A reversed range
    /// stays reported as such rather than degrading into an
    /// empty-pool error.
    pub fn redeal(&mut self, rng: &mut SmallRng) {
        if matches!(self.deal, Err(StudyError::InvalidRange { .. })) {
            return;
        }
        self.deal = draw_round(&self.pool, rng);
        self.selected = 0;
        self.grading = None;
    }

    pub fn cycle_from(&mut self, library: &Library, rng: &mut SmallRng, forward: bool) {
        self.from = if forward {
            self.from.next()
        } else {
            self.from.prev()
        };
        self.rebuild(library, rng);
    }

    pub fn cycle_to(&mut self, library: &Library, rng: &mut SmallRng, forward: bool) {
        self.to = if forward { self.to.next() } else { self.to.prev() };
        self.rebuild(library, rng);
    }

    pub fn cycle_source(&mut self, library: &Library, rng: &mut SmallRng) {
        self.source = self.source.toggle();
        self.rebuild(library, rng);
    }

    pub fn cycle_style(&mut self) {
        self.style = self.style.toggle();
    }

    fn grade(&mut self, glyph: &str) -> bool {
        let correct = match &self.deal {
            Ok(round) => round.question.glyph == glyph,
            Err(_) => false,
        };
        self.answered += 1;
        if correct {
            self.score += 1;
        }
        correct
    }

    /// Lock in an answer. Ignored while a verdict is already showing or
    /// when the index is out of range.
    pub fn choose(&mut self, idx: usize, now: Instant, delay: Duration) {
        if self.grading.is_some() {
            return;
        }
        let Ok(round) = &self.deal else {
            return;
        };
        if idx >= round.options.len() {
            return;
        }
        let glyph = round.options[idx].glyph.clone();
        let correct = self.grade(&glyph);
        self.selected = idx;
        self.grading = Some(Grading {
            chosen: idx,
            correct,
            advance_at: now + delay,
        });
    }

    /// Deal the next round once the verdict has been on screen long
    /// enough. Returns whether an advance happened.
    pub fn maybe_advance(&mut self, now: Instant, rng: &mut SmallRng) -> bool {
        let due = self
            .grading
            .as_ref()
            .is_some_and(|grading| now >= grading.advance_at);
        if due {
            self.redeal(rng);
        }
        due
    }

    pub fn move_selection(&mut self, down: bool) {
        if self.grading.is_some() {
            return;
        }
        let Ok(round) = &self.deal else {
            return;
        };
        let last = round.options.len().saturating_sub(1);
        self.selected = if down {
            (self.selected + 1).min(last)
        } else {
            self.selected.saturating_sub(1)
        };
    }
}
