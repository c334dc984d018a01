//! Per-session quiz state: question counter, score, mistake penalty, and
//! the per-question answer log.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// How a submitted answer was classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnswerOutcome {
    /// Both province and capital matched.
    Correct,
    /// Exactly one of the pair matched.
    HalfCorrect,
    /// Neither matched.
    Wrong,
}

impl std::fmt::Display for AnswerOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Correct => write!(f, "correct"),
            Self::HalfCorrect => write!(f, "half-correct"),
            Self::Wrong => write!(f, "wrong"),
        }
    }
}

/// Mutable session state. Owned by a single [`QuizSession`]; mutated only by
/// the submit and skip handlers, and restored to its initial values by
/// [`QuizState::reset`] when the player replays.
///
/// [`QuizSession`]: crate::session::QuizSession
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizState {
    /// 1-based index of the question currently being asked. Strictly
    /// increases by one on every submission or skip.
    pub question_index: u32,
    pub score: u32,
    /// Accumulated mistake penalty; the game ends early once it reaches the
    /// configured limit.
    pub mistakes: u32,
    /// Outcome per answered question, keyed by the question index at the
    /// time of submission. Skipped questions leave no entry.
    pub answer_log: BTreeMap<u32, AnswerOutcome>,
}

impl Default for QuizState {
    fn default() -> Self {
        Self {
            question_index: 1,
            score: 0,
            mistakes: 0,
            answer_log: BTreeMap::new(),
        }
    }
}

impl QuizState {
    /// Restore the initial values. The catalog and its permutation are not
    /// touched; a replay walks the same question order again.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
