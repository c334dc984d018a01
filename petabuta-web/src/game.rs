//! Bridges the platform-agnostic quiz engine to the web build: embedded
//! reference data and the session-seed source.

use petabuta_game::{DataLoader, QuizEngine, QuizSession};
use std::convert::Infallible;

/// Loads the reference data embedded into the wasm binary at compile time.
#[derive(Clone, Copy, Default)]
pub struct WebDataLoader;

impl DataLoader for WebDataLoader {
    type Error = Infallible;

    fn load_provinces(&self) -> Result<String, Self::Error> {
        Ok(include_str!("../static/assets/data/provinsi.geojson").to_string())
    }

    fn load_cities(&self) -> Result<String, Self::Error> {
        Ok(include_str!("../static/assets/data/kabupaten.csv").to_string())
    }
}

/// Assemble one quiz session. Called exactly once per browser session; the
/// resulting permutation lives as long as the page.
///
/// # Errors
///
/// Returns an error when the embedded data is malformed.
pub fn build_session(seed: u64) -> Result<QuizSession, anyhow::Error> {
    QuizEngine::new(WebDataLoader).create_session(seed)
}

/// Entropy for the per-session question order.
#[must_use]
pub fn session_seed() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        let millis = js_sys::Date::now() as u64;
        let jitter = (js_sys::Math::random() * f64::from(u32::MAX)) as u64;
        millis ^ (jitter << 20)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_data_builds_a_session() {
        let session = build_session(5).unwrap();
        assert!(session.is_active());
        assert_eq!(session.catalog().len(), 38);
        assert!(session.active_question().is_ok());
    }

    #[test]
    fn build_is_deterministic_per_seed() {
        let a = build_session(77).unwrap();
        let b = build_session(77).unwrap();
        assert_eq!(a.catalog(), b.catalog());
    }
}
