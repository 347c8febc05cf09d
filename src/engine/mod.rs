pub mod daily;
pub mod deal;
pub mod pool;
pub mod search;

use thiserror::Error;

use crate::content::level::Level;

/// Conditions the study engine refuses to sample under. Both are
/// recoverable: views keep their state and show the message in place of
/// options or cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum StudyError {
    #[error("starting level {from} is above ending level {to}")]
    InvalidRange { from: Level, to: Level },
    #[error("need {needed} distinct entries in this range, found {found}")]
    InsufficientData { needed: usize, found: usize },
}
