//! The turn-based game controller: one session owns the catalog, the city
//! list, and the mutable quiz state, and processes one event at a time.

use crate::catalog::{CityIndex, ProvinceCatalog};
use crate::constants::{MAX_QUESTIONS, MISTAKE_LIMIT};
use crate::evaluate::{Feedback, evaluate};
use crate::question::{ActiveQuestion, QuizError, resolve};
use crate::state::QuizState;
use crate::summary::{self, StatusFeature, SummaryFeature};
use serde::{Deserialize, Serialize};

/// Turn budgets for one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizConfig {
    pub max_questions: u32,
    pub mistake_limit: u32,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            max_questions: MAX_QUESTIONS,
            mistake_limit: MISTAKE_LIMIT,
        }
    }
}

/// A player action. Submissions come from enumerated choice lists, so there
/// is no malformed-input path; skip and replay carry no payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuizEvent {
    Submit { province: String, capital: String },
    Skip,
    Replay,
}

/// One quiz session: reference data plus mutable state, advanced one event
/// at a time. The catalog's question order is fixed for the session's whole
/// life, replays included.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizSession {
    catalog: ProvinceCatalog,
    cities: CityIndex,
    config: QuizConfig,
    state: QuizState,
}

impl QuizSession {
    #[must_use]
    pub fn new(catalog: ProvinceCatalog, cities: CityIndex, config: QuizConfig) -> Self {
        Self {
            catalog,
            cities,
            config,
            state: QuizState::default(),
        }
    }

    /// Whether the session is still in active play: the question budget is
    /// not exhausted and the mistake penalty is below the limit.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.state.question_index <= self.config.max_questions
            && self.state.mistakes < self.config.mistake_limit
    }

    /// The correct answer pair for the current turn.
    ///
    /// # Errors
    ///
    /// Returns [`QuizError::NoActiveQuestion`] when called past the end of
    /// the catalog; gate on [`Self::is_active`] first.
    pub fn active_question(&self) -> Result<ActiveQuestion, QuizError> {
        resolve(&self.catalog, self.state.question_index)
    }

    /// Grade a submission and apply its effects: log the outcome under the
    /// current question index, add the score and mistake deltas, and advance
    /// to the next question.
    ///
    /// # Errors
    ///
    /// Returns [`QuizError::NoActiveQuestion`] when no question is active.
    pub fn submit(&mut self, province: &str, capital: &str) -> Result<Feedback, QuizError> {
        let question = self.active_question()?;
        let evaluation = evaluate(province, capital, &question);
        self.state
            .answer_log
            .insert(self.state.question_index, evaluation.outcome);
        self.state.score += evaluation.score_delta;
        self.state.mistakes += evaluation.mistake_delta;
        self.state.question_index += 1;
        Ok(evaluation.feedback(&question))
    }

    /// Move on without answering: the question index advances, nothing is
    /// logged, score and mistakes stay put.
    pub fn skip(&mut self) {
        self.state.question_index += 1;
    }

    /// Reset the quiz state for another run. The permutation is untouched;
    /// the player replays the same question order.
    pub fn replay(&mut self) {
        self.state.reset();
    }

    /// Process one player event, returning feedback for submissions.
    ///
    /// # Errors
    ///
    /// Returns [`QuizError::NoActiveQuestion`] for a submission arriving
    /// when no question is active.
    pub fn apply(&mut self, event: QuizEvent) -> Result<Option<Feedback>, QuizError> {
        match event {
            QuizEvent::Submit { province, capital } => {
                self.submit(&province, &capital).map(Some)
            }
            QuizEvent::Skip => {
                self.skip();
                Ok(None)
            }
            QuizEvent::Replay => {
                self.replay();
                Ok(None)
            }
        }
    }

    #[must_use]
    pub fn state(&self) -> &QuizState {
        &self.state
    }

    #[must_use]
    pub fn config(&self) -> &QuizConfig {
        &self.config
    }

    #[must_use]
    pub fn catalog(&self) -> &ProvinceCatalog {
        &self.catalog
    }

    /// Province answer choices, distinct and in catalog order.
    #[must_use]
    pub fn province_choices(&self) -> Vec<String> {
        self.catalog.province_names()
    }

    /// Capital answer choices, distractors included.
    #[must_use]
    pub fn capital_choices(&self) -> &[String] {
        self.cities.names()
    }

    /// The in-play map: current province highlighted as `being asked`.
    #[must_use]
    pub fn map_features(&self) -> Vec<StatusFeature> {
        summary::status_features(&self.catalog, self.state.question_index)
    }

    /// The game-over map: every province labeled with its logged outcome,
    /// or `unanswered`.
    #[must_use]
    pub fn summary_features(&self) -> Vec<SummaryFeature> {
        summary::summarize(&self.catalog, &self.state.answer_log)
    }

    /// The copyable share message for the current score.
    #[must_use]
    pub fn share_text(&self) -> String {
        summary::share_text(self.state.score)
    }
}
