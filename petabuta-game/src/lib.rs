//! Peta Buta quiz engine
//!
//! Platform-agnostic core logic for the Peta Buta Indonesian province quiz.
//! This crate provides the question sequencing, answer grading, and summary
//! mechanics without UI or platform-specific dependencies.

pub mod catalog;
pub mod constants;
pub mod evaluate;
pub mod question;
pub mod session;
pub mod state;
pub mod summary;

// Re-export commonly used types
pub use catalog::{CatalogError, CityIndex, Geometry, Province, ProvinceCatalog};
pub use evaluate::{Evaluation, Feedback, FeedbackKind, evaluate};
pub use question::{ActiveQuestion, QuizError, resolve};
pub use session::{QuizConfig, QuizEvent, QuizSession};
pub use state::{AnswerOutcome, QuizState};
pub use summary::{
    AskStatus, StatusFeature, SummaryFeature, SummaryLabel, share_text, status_features, summarize,
};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Trait for abstracting reference-data loading.
/// Platform-specific implementations should provide this.
pub trait DataLoader {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Load the province GeoJSON document from the platform-specific source.
    ///
    /// # Errors
    ///
    /// Returns an error if the province data cannot be loaded.
    fn load_provinces(&self) -> Result<String, Self::Error>;

    /// Load the city CSV table from the platform-specific source.
    ///
    /// # Errors
    ///
    /// Returns an error if the city data cannot be loaded.
    fn load_cities(&self) -> Result<String, Self::Error>;
}

/// Builds quiz sessions from a data loader. The session seed fixes the
/// question order; building happens once per session, so the permutation is
/// never redrawn mid-game.
pub struct QuizEngine<L>
where
    L: DataLoader,
{
    loader: L,
}

impl<L> QuizEngine<L>
where
    L: DataLoader,
{
    pub const fn new(loader: L) -> Self {
        Self { loader }
    }

    /// Load the reference data and assemble a fresh session with the
    /// question order drawn from `seed`.
    ///
    /// # Errors
    ///
    /// Returns an error if either source is missing or malformed.
    pub fn create_session(&self, seed: u64) -> Result<QuizSession, anyhow::Error>
    where
        L::Error: Into<anyhow::Error>,
    {
        let provinces = self.loader.load_provinces().map_err(Into::into)?;
        let cities = self.loader.load_cities().map_err(Into::into)?;
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let catalog = ProvinceCatalog::from_geojson(&provinces, &mut rng)?;
        let cities = CityIndex::from_csv(&cities)?;
        Ok(QuizSession::new(catalog, cities, QuizConfig::default()))
    }
}
