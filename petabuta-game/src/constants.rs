//! Centralized tuning constants for the Peta Buta quiz rules.
//!
//! Keeping the budgets together ensures the game can only be rebalanced via
//! code changes reviewed in version control, rather than through external
//! JSON assets.

// Turn budgets --------------------------------------------------------------
/// Hard cap on the question counter; the game is over once the counter
/// passes this value. Sized to the full province roster.
pub const MAX_QUESTIONS: u32 = 38;
/// The game ends early once the mistake penalty reaches this value.
pub const MISTAKE_LIMIT: u32 = 6;

// Scoring -------------------------------------------------------------------
pub const SCORE_BOTH_CORRECT: u32 = 2;
pub const SCORE_HALF_CORRECT: u32 = 1;
pub const PENALTY_HALF_CORRECT: u32 = 1;
pub const PENALTY_WRONG: u32 = 2;
/// Theoretical maximum score, used by the share message.
pub const MAX_SCORE: u32 = 76;

// Display caps shown next to the metrics. The design intends ~32 real
// questions before the mistake budget runs out, even though the counter may
// run to `MAX_QUESTIONS`.
pub const DISPLAY_QUESTION_CAP: u32 = 32;
pub const DISPLAY_SCORE_CAP: u32 = 64;
