//! Answer evaluation: the pure outcome table and the per-turn feedback copy.

use crate::constants::{
    PENALTY_HALF_CORRECT, PENALTY_WRONG, SCORE_BOTH_CORRECT, SCORE_HALF_CORRECT,
};
use crate::question::ActiveQuestion;
use crate::state::AnswerOutcome;
use serde::{Deserialize, Serialize};

/// Result of grading one submission. Purely computed; applying the deltas to
/// the session state is the caller's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    pub outcome: AnswerOutcome,
    pub score_delta: u32,
    pub mistake_delta: u32,
    pub province_correct: bool,
    pub capital_correct: bool,
}

/// Grade a submitted (province, capital) pair against the active question.
///
/// Both comparisons are independent exact string matches:
///
/// | province | capital | outcome      | score | mistakes |
/// |----------|---------|--------------|-------|----------|
/// | yes      | yes     | correct      | +2    | +0       |
/// | yes      | no      | half-correct | +1    | +1       |
/// | no       | yes     | half-correct | +1    | +1       |
/// | no       | no      | wrong        | +0    | +2       |
#[must_use]
pub fn evaluate(province: &str, capital: &str, question: &ActiveQuestion) -> Evaluation {
    let province_correct = province == question.province;
    let capital_correct = capital == question.capital;
    let (outcome, score_delta, mistake_delta) = match (province_correct, capital_correct) {
        (true, true) => (AnswerOutcome::Correct, SCORE_BOTH_CORRECT, 0),
        (true, false) | (false, true) => (
            AnswerOutcome::HalfCorrect,
            SCORE_HALF_CORRECT,
            PENALTY_HALF_CORRECT,
        ),
        (false, false) => (AnswerOutcome::Wrong, 0, PENALTY_WRONG),
    };
    Evaluation {
        outcome,
        score_delta,
        mistake_delta,
        province_correct,
        capital_correct,
    }
}

/// Severity class for the per-turn feedback banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackKind {
    Success,
    Warning,
    Error,
}

/// User-visible feedback for one graded turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    pub kind: FeedbackKind,
    pub message: String,
}

impl Evaluation {
    /// Build the feedback banner for this grading, interpolating the correct
    /// answer text on non-perfect outcomes.
    #[must_use]
    pub fn feedback(&self, question: &ActiveQuestion) -> Feedback {
        match (self.province_correct, self.capital_correct) {
            (true, true) => Feedback {
                kind: FeedbackKind::Success,
                message: "hore dua-duanya benar".to_string(),
            },
            (true, false) => Feedback {
                kind: FeedbackKind::Warning,
                message: format!(
                    "Ups provinsi benar tapi ibukotanya salah, harusnya {}",
                    question.capital
                ),
            },
            (false, true) => Feedback {
                kind: FeedbackKind::Warning,
                message: format!(
                    "Ups ibukotanya benar tapi provinsinya salah, harusnya {}",
                    question.province
                ),
            },
            (false, false) => Feedback {
                kind: FeedbackKind::Error,
                message: format!(
                    "O ow salah besar! jawabannya Provinsi {}, ibukota {}",
                    question.province, question.capital
                ),
            },
        }
    }
}
