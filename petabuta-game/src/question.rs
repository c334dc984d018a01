//! Question resolution: which province is being asked this turn.

use crate::catalog::ProvinceCatalog;
use serde::{Deserialize, Serialize};

/// Contract violations inside the per-turn loop. These never surface to the
/// player when the controller gates on `is_active` first.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuizError {
    #[error("no active question: index {question_index} is past the end of the catalog")]
    NoActiveQuestion { question_index: u32 },
}

/// The correct answer pair for the question currently being asked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveQuestion {
    pub province: String,
    pub capital: String,
}

/// Select the unique province whose sequence number equals the question
/// index.
///
/// # Errors
///
/// Returns [`QuizError::NoActiveQuestion`] when the index is past the end of
/// the catalog; callers must check the game-active predicate first.
pub fn resolve(catalog: &ProvinceCatalog, question_index: u32) -> Result<ActiveQuestion, QuizError> {
    catalog
        .by_sequence(question_index)
        .map(|province| ActiveQuestion {
            province: province.name.clone(),
            capital: province.capital.clone(),
        })
        .ok_or(QuizError::NoActiveQuestion { question_index })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn catalog() -> ProvinceCatalog {
        let json = r#"{"type":"FeatureCollection","features":[
            {"type":"Feature","properties":{"NAMA_PROVINSI":"Jawa Barat","NAMA_IBUKOTA":"Bandung"},"geometry":{"type":"Polygon","coordinates":[[[0.0,0.0],[1.0,0.0],[1.0,1.0],[0.0,0.0]]]}},
            {"type":"Feature","properties":{"NAMA_PROVINSI":"Bali","NAMA_IBUKOTA":"Denpasar"},"geometry":{"type":"Polygon","coordinates":[[[0.0,0.0],[1.0,0.0],[1.0,1.0],[0.0,0.0]]]}}
        ]}"#;
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        ProvinceCatalog::from_geojson(json, &mut rng).unwrap()
    }

    #[test]
    fn resolve_matches_sequence_to_index() {
        let catalog = catalog();
        for index in 1..=catalog.len() {
            let question = resolve(&catalog, index).unwrap();
            let province = catalog.by_sequence(index).unwrap();
            assert_eq!(question.province, province.name);
            assert_eq!(question.capital, province.capital);
        }
    }

    #[test]
    fn resolve_past_the_end_is_a_contract_violation() {
        let catalog = catalog();
        let err = resolve(&catalog, catalog.len() + 1).unwrap_err();
        assert_eq!(
            err,
            QuizError::NoActiveQuestion {
                question_index: catalog.len() + 1
            }
        );
    }
}
