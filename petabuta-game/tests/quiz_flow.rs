use petabuta_game::{
    AnswerOutcome, AskStatus, CityIndex, ProvinceCatalog, QuizConfig, QuizEvent, QuizSession,
    QuizState, SummaryLabel,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::BTreeSet;

fn load_session(seed: u64) -> QuizSession {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let catalog = ProvinceCatalog::from_geojson(
        include_str!("../../petabuta-web/static/assets/data/provinsi.geojson"),
        &mut rng,
    )
    .unwrap();
    let cities = CityIndex::from_csv(include_str!(
        "../../petabuta-web/static/assets/data/kabupaten.csv"
    ))
    .unwrap();
    QuizSession::new(catalog, cities, QuizConfig::default())
}

#[test]
fn shipped_data_covers_all_38_provinces() {
    let session = load_session(1);
    assert_eq!(session.catalog().len(), 38);

    let sequences: BTreeSet<u32> = session.catalog().iter().map(|p| p.sequence).collect();
    assert_eq!(sequences, (1..=38).collect());

    // Every capital must be offered by the city choice list.
    let capitals = session.capital_choices();
    for province in session.catalog().iter() {
        assert!(
            capitals.contains(&province.capital),
            "capital {} missing from city table",
            province.capital
        );
    }
    // Distractors are present beyond the capitals themselves.
    assert!(capitals.len() > 38);
}

#[test]
fn perfect_run_walks_the_whole_catalog() {
    let mut session = load_session(42);
    let mut turns = 0;
    while session.is_active() {
        let question = session.active_question().unwrap();
        let feedback = session
            .apply(QuizEvent::Submit {
                province: question.province,
                capital: question.capital,
            })
            .unwrap();
        assert!(feedback.is_some());
        turns += 1;
    }

    assert_eq!(turns, 38);
    assert_eq!(session.state().score, 76);
    assert_eq!(session.state().mistakes, 0);
    assert_eq!(session.state().question_index, 39);

    let summary = session.summary_features();
    assert_eq!(summary.len(), 38);
    assert!(summary.iter().all(|f| f.label == SummaryLabel::Correct));
}

#[test]
fn all_wrong_run_ends_on_the_mistake_budget() {
    let mut session = load_session(9);
    while session.is_active() {
        let question = session.active_question().unwrap();
        let province = session
            .province_choices()
            .into_iter()
            .find(|p| *p != question.province)
            .unwrap();
        let capital = session
            .capital_choices()
            .iter()
            .find(|c| **c != question.capital)
            .unwrap()
            .clone();
        session.apply(QuizEvent::Submit { province, capital }).unwrap();
    }

    // Three fully wrong answers exhaust the budget of six.
    assert_eq!(session.state().mistakes, 6);
    assert_eq!(session.state().question_index, 4);
    assert_eq!(session.state().score, 0);

    let summary = session.summary_features();
    let wrong = summary
        .iter()
        .filter(|f| f.label == SummaryLabel::Wrong)
        .count();
    let unanswered = summary
        .iter()
        .filter(|f| f.label == SummaryLabel::Unanswered)
        .count();
    assert_eq!(wrong, 3);
    assert_eq!(unanswered, 35);
}

#[test]
fn skips_interleave_with_answers() {
    let mut session = load_session(13);

    let question = session.active_question().unwrap();
    session
        .apply(QuizEvent::Submit {
            province: question.province,
            capital: question.capital,
        })
        .unwrap();
    session.apply(QuizEvent::Skip).unwrap();

    assert_eq!(session.state().question_index, 3);
    assert_eq!(session.state().answer_log.len(), 1);
    assert_eq!(session.state().answer_log[&1], AnswerOutcome::Correct);

    let summary = session.summary_features();
    let skipped = session.catalog().by_sequence(2).unwrap();
    let feature = summary.iter().find(|f| f.name == skipped.name).unwrap();
    assert_eq!(feature.label, SummaryLabel::Unanswered);
}

#[test]
fn replay_keeps_the_permutation_and_resets_the_rest() {
    let mut session = load_session(4);
    let first_question = session.active_question().unwrap();
    let order_before: Vec<u32> = session.catalog().iter().map(|p| p.sequence).collect();

    session
        .apply(QuizEvent::Submit {
            province: "Bali".to_string(),
            capital: "Denpasar".to_string(),
        })
        .unwrap();
    session.apply(QuizEvent::Skip).unwrap();
    session.apply(QuizEvent::Replay).unwrap();

    assert_eq!(*session.state(), QuizState::default());
    let order_after: Vec<u32> = session.catalog().iter().map(|p| p.sequence).collect();
    assert_eq!(order_before, order_after);
    assert_eq!(session.active_question().unwrap(), first_question);
}

#[test]
fn in_play_map_highlights_exactly_one_feature() {
    let session = load_session(27);
    let features = session.map_features();
    assert_eq!(features.len(), 38);
    let asked = features
        .iter()
        .filter(|f| f.status == AskStatus::BeingAsked)
        .count();
    assert_eq!(asked, 1);
}
