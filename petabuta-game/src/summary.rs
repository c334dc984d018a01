//! Map-facing feature collections and the end-of-game share message.
//!
//! The view layer treats these as opaque colored/labeled features; nothing
//! here flows back into the quiz core.

use crate::catalog::{Geometry, ProvinceCatalog};
use crate::constants::MAX_SCORE;
use crate::state::AnswerOutcome;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Category shown on the in-play map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AskStatus {
    BeingAsked,
    NotAsked,
}

impl std::fmt::Display for AskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BeingAsked => write!(f, "being asked"),
            Self::NotAsked => write!(f, "not asked"),
        }
    }
}

/// One province on the in-play map: highlighted when it is the subject of
/// the current question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusFeature {
    pub name: String,
    pub capital: String,
    pub status: AskStatus,
    pub geometry: Geometry,
}

/// Build the in-play feature collection: the active province is marked
/// `being asked`, every other province `not asked`.
#[must_use]
pub fn status_features(catalog: &ProvinceCatalog, question_index: u32) -> Vec<StatusFeature> {
    catalog
        .iter()
        .map(|province| StatusFeature {
            name: province.name.clone(),
            capital: province.capital.clone(),
            status: if province.sequence == question_index {
                AskStatus::BeingAsked
            } else {
                AskStatus::NotAsked
            },
            geometry: province.geometry.clone(),
        })
        .collect()
}

/// Category shown on the game-over map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SummaryLabel {
    Correct,
    HalfCorrect,
    Unanswered,
    Wrong,
}

impl SummaryLabel {
    /// Legend order for the game-over map.
    pub const CATEGORIES: [Self; 4] = [
        Self::Correct,
        Self::HalfCorrect,
        Self::Unanswered,
        Self::Wrong,
    ];
}

impl From<AnswerOutcome> for SummaryLabel {
    fn from(outcome: AnswerOutcome) -> Self {
        match outcome {
            AnswerOutcome::Correct => Self::Correct,
            AnswerOutcome::HalfCorrect => Self::HalfCorrect,
            AnswerOutcome::Wrong => Self::Wrong,
        }
    }
}

impl std::fmt::Display for SummaryLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Correct => write!(f, "correct"),
            Self::HalfCorrect => write!(f, "half-correct"),
            Self::Unanswered => write!(f, "unanswered"),
            Self::Wrong => write!(f, "wrong"),
        }
    }
}

/// One province on the game-over map, labeled with its logged outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryFeature {
    pub name: String,
    pub capital: String,
    pub label: SummaryLabel,
    pub geometry: Geometry,
}

/// Left join of the full province set against the answer log by sequence
/// number. Provinces the player never reached (or skipped) come out as
/// `unanswered`; no province is dropped or duplicated.
#[must_use]
pub fn summarize(
    catalog: &ProvinceCatalog,
    answer_log: &BTreeMap<u32, AnswerOutcome>,
) -> Vec<SummaryFeature> {
    catalog
        .iter()
        .map(|province| SummaryFeature {
            name: province.name.clone(),
            capital: province.capital.clone(),
            label: answer_log
                .get(&province.sequence)
                .map_or(SummaryLabel::Unanswered, |outcome| (*outcome).into()),
            geometry: province.geometry.clone(),
        })
        .collect()
}

/// The copyable share message for social posts.
#[must_use]
pub fn share_text(score: u32) -> String {
    format!(
        "Tes Geografi Umum Peta Buta Ibukota Provinsi Indonesia skor: {score}/{MAX_SCORE} - petabuta.app"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn catalog() -> ProvinceCatalog {
        let json = r#"{"type":"FeatureCollection","features":[
            {"type":"Feature","properties":{"NAMA_PROVINSI":"Jawa Barat","NAMA_IBUKOTA":"Bandung"},"geometry":{"type":"Polygon","coordinates":[[[0.0,0.0],[1.0,0.0],[1.0,1.0],[0.0,0.0]]]}},
            {"type":"Feature","properties":{"NAMA_PROVINSI":"Bali","NAMA_IBUKOTA":"Denpasar"},"geometry":{"type":"Polygon","coordinates":[[[0.0,0.0],[1.0,0.0],[1.0,1.0],[0.0,0.0]]]}},
            {"type":"Feature","properties":{"NAMA_PROVINSI":"Aceh","NAMA_IBUKOTA":"Banda Aceh"},"geometry":{"type":"Polygon","coordinates":[[[0.0,0.0],[1.0,0.0],[1.0,1.0],[0.0,0.0]]]}}
        ]}"#;
        let mut rng = ChaCha8Rng::seed_from_u64(21);
        ProvinceCatalog::from_geojson(json, &mut rng).unwrap()
    }

    #[test]
    fn exactly_one_province_is_being_asked() {
        let catalog = catalog();
        let features = status_features(&catalog, 2);
        let asked: Vec<_> = features
            .iter()
            .filter(|f| f.status == AskStatus::BeingAsked)
            .collect();
        assert_eq!(asked.len(), 1);
        assert_eq!(asked[0].name, catalog.by_sequence(2).unwrap().name);
        assert_eq!(features.len() as u32, catalog.len());
    }

    #[test]
    fn past_the_end_index_marks_nothing_asked() {
        let catalog = catalog();
        let features = status_features(&catalog, catalog.len() + 1);
        assert!(features.iter().all(|f| f.status == AskStatus::NotAsked));
    }

    #[test]
    fn summary_join_labels_missing_entries_unanswered() {
        let catalog = catalog();
        let log = BTreeMap::from([
            (1, AnswerOutcome::Correct),
            (2, AnswerOutcome::HalfCorrect),
        ]);
        let summary = summarize(&catalog, &log);
        assert_eq!(summary.len() as u32, catalog.len());

        for province in catalog.iter() {
            let feature = summary.iter().find(|f| f.name == province.name).unwrap();
            let expected = match province.sequence {
                1 => SummaryLabel::Correct,
                2 => SummaryLabel::HalfCorrect,
                _ => SummaryLabel::Unanswered,
            };
            assert_eq!(feature.label, expected);
        }
    }

    #[test]
    fn summary_join_drops_and_duplicates_nothing() {
        let catalog = catalog();
        let summary = summarize(&catalog, &BTreeMap::new());
        let mut names: Vec<_> = summary.iter().map(|f| f.name.clone()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len() as u32, catalog.len());
    }

    #[test]
    fn share_text_interpolates_score() {
        let text = share_text(42);
        assert!(text.contains("42/76"));
    }
}
