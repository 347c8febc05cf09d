use std::collections::HashSet;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::content::entry::StudyCard;
use crate::engine::StudyError;

/// Options per round. Dealing needs this many distinct glyphs in the pool.
pub const OPTION_COUNT: usize = 4;

/// One dealt round: the question card plus `OPTION_COUNT` shuffled options,
/// exactly one of which shares the question's glyph.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizRound {
    pub question: StudyCard,
    pub options: Vec<StudyCard>,
}

impl QuizRound {
    /// Where the correct option landed after the shuffle.
    pub fn correct_index(&self) -> usize {
        self.options
            .iter()
            .position(|card| card.glyph == self.question.glyph)
            .unwrap_or(0)
    }
}

/// Deal one round: pick the question uniformly, reject-sample distractors
/// until four distinct glyphs are on the table, then shuffle the options.
///
/// The distinct-glyph count is checked up front. With at least
/// `OPTION_COUNT` distinct glyphs present the rejection loop finishes with
/// probability 1, so it carries no iteration cap.
pub fn draw_round(pool: &[StudyCard], rng: &mut impl Rng) -> Result<QuizRound, StudyError> {
    let distinct: HashSet<&str> = pool.iter().map(|card| card.glyph.as_str()).collect();
    if distinct.len() < OPTION_COUNT {
        return Err(StudyError::InsufficientData {
            needed: OPTION_COUNT,
            found: distinct.len(),
        });
    }

    let question = pool[rng.gen_range(0..pool.len())].clone();

    let mut options: Vec<StudyCard> = Vec::with_capacity(OPTION_COUNT);
    let mut taken: HashSet<String> = HashSet::new();
    taken.insert(question.glyph.clone());
    options.push(question.clone());

    while options.len() < OPTION_COUNT {
        let candidate = &pool[rng.gen_range(0..pool.len())];
        if taken.contains(candidate.glyph.as_str()) {
            continue;
        }
        taken.insert(candidate.glyph.clone());
        options.push(candidate.clone());
    }

    options.shuffle(rng);

    Ok(QuizRound { question, options })
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use super::*;

    fn card(glyph: &str) -> StudyCard {
        StudyCard {
            glyph: glyph.to_string(),
            caption: format!("caption {glyph}"),
        }
    }

    fn pool_of(glyphs: &[&str]) -> Vec<StudyCard> {
        glyphs.iter().map(|g| card(g)).collect()
    }

    #[test]
    fn rounds_hold_their_invariants() {
        let pool = pool_of(&["一", "二", "三", "四", "五", "六", "七", "八", "九", "十"]);
        for seed in 0..100 {
            let mut rng = SmallRng::seed_from_u64(seed);
            let round = draw_round(&pool, &mut rng).unwrap();

            assert_eq!(round.options.len(), OPTION_COUNT);

            let glyphs: HashSet<&str> =
                round.options.iter().map(|c| c.glyph.as_str()).collect();
            assert_eq!(glyphs.len(), OPTION_COUNT, "options must be pairwise distinct");

            let matches = round
                .options
                .iter()
                .filter(|c| c.glyph == round.question.glyph)
                .count();
            assert_eq!(matches, 1, "the answer appears exactly once");

            assert!(pool.iter().any(|c| c.glyph == round.question.glyph));
        }
    }

    #[test]
    fn minimal_pool_uses_every_card() {
        let pool = pool_of(&["甲", "乙", "丙", "丁"]);
        let mut rng = SmallRng::seed_from_u64(7);
        let round = draw_round(&pool, &mut rng).unwrap();

        let mut glyphs: Vec<&str> = round.options.iter().map(|c| c.glyph.as_str()).collect();
        glyphs.sort_unstable();
        let mut expected = vec!["甲", "乙", "丙", "丁"];
        expected.sort_unstable();
        assert_eq!(glyphs, expected);
    }

    #[test]
    fn small_pool_is_refused() {
        let pool = pool_of(&["一", "二", "三"]);
        let mut rng = SmallRng::seed_from_u64(0);
        let err = draw_round(&pool, &mut rng).unwrap_err();
        assert_eq!(err, StudyError::InsufficientData { needed: 4, found: 3 });
    }

    #[test]
    fn empty_pool_is_refused() {
        let mut rng = SmallRng::seed_from_u64(0);
        let err = draw_round(&[], &mut rng).unwrap_err();
        assert_eq!(err, StudyError::InsufficientData { needed: 4, found: 0 });
    }

    #[test]
    fn duplicate_glyphs_do_not_count_twice() {
        // Eight cards but only three distinct glyphs: the deal must refuse
        // rather than spin forever hunting a fourth.
        let pool = pool_of(&["一", "一", "二", "二", "二", "三", "三", "一"]);
        let mut rng = SmallRng::seed_from_u64(0);
        let err = draw_round(&pool, &mut rng).unwrap_err();
        assert_eq!(err, StudyError::InsufficientData { needed: 4, found: 3 });
    }

    #[test]
    fn shuffle_moves_the_answer_around() {
        let pool = pool_of(&["一", "二", "三", "四", "五", "六"]);
        let mut seen_positions: HashSet<usize> = HashSet::new();
        for seed in 0..200 {
            let mut rng = SmallRng::seed_from_u64(seed);
            let round = draw_round(&pool, &mut rng).unwrap();
            seen_positions.insert(round.correct_index());
        }
        assert_eq!(
            seen_positions.len(),
            OPTION_COUNT,
            "over many deals the answer should land in every slot"
        );
    }
}
