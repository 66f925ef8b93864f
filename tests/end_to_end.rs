//! End-to-end scenarios through the public API

use wordle_entropy::commands::{run_session, run_test_all};
use wordle_entropy::core::{Pattern, PopularityModel, PopularityTransform, Word};
use wordle_entropy::dictionary::{FrequencyKind, embedded_dictionary, loader::parse_json};
use wordle_entropy::solver::entropy::select_best_guess;
use wordle_entropy::solver::{AttemptState, Outcome, SolveError, Solver, SolverConfig};

fn word(s: &str) -> Word {
    Word::new(s).unwrap()
}

fn three_word_solver() -> Solver {
    let config = SolverConfig::new()
        .with_opening(word("abcde"))
        .with_popularity_weight(0.0)
        .unwrap();
    Solver::new(
        vec![word("abcde"), word("abcdf"), word("zzzzz")],
        PopularityModel::default(),
        &config,
    )
    .unwrap()
}

#[test]
fn scripted_attempt_solves_in_two_guesses() {
    let solver = three_word_solver();
    let mut attempt = solver.attempt();

    let first = attempt.next_guess().unwrap();
    assert_eq!(first.guess, word("abcde"));

    let feedback = Pattern::calculate(&first.guess, &word("abcdf"));
    assert_eq!(feedback.to_string(), "GGGGX");

    let Outcome::Continue(second) = attempt.observe(feedback).unwrap() else {
        panic!("attempt should continue after GGGGX");
    };
    assert_eq!(attempt.candidates(), &[word("abcdf")]);
    assert_eq!(second.guess, word("abcdf"));

    assert_eq!(
        attempt.observe_str("GGGGG").unwrap(),
        Outcome::Solved { guesses: 2 }
    );
}

#[test]
fn inconsistent_feedback_is_a_contradiction() {
    let solver = three_word_solver();
    let mut attempt = solver.attempt();
    attempt.next_guess().unwrap();

    let result = attempt.observe_str("YYYYY");

    assert!(matches!(result, Err(SolveError::EmptyPool { .. })));
    assert_eq!(attempt.state(), AttemptState::Contradicted);
}

#[test]
fn dictionary_feeds_the_solver() {
    let content = r#"{
        "crane": 8.1e-6, "slate": 6.5e-6, "irate": 2.2e-6, "crate": 3.0e-6,
        "grate": 1.1e-6, "trace": 1.4e-5, "raise": 3.3e-5, "arise": 9.0e-6,
        "stare": 5.5e-6, "roast": 2.0e-6, "toast": 3.1e-6, "beast": 4.4e-6,
        "Bad!": 1.0, "negat": -1.0
    }"#;
    let dictionary = parse_json(content, FrequencyKind::Raw, &PopularityTransform::default())
        .unwrap();
    assert_eq!(dictionary.len(), 12);

    let (vocabulary, popularity) = dictionary.into_parts();
    let expected_opening = select_best_guess(&vocabulary, &popularity, 1.0).unwrap().word;

    let solver = Solver::new(vocabulary.clone(), popularity, &SolverConfig::new()).unwrap();
    assert_eq!(solver.opening(), expected_opening);

    let stats = run_test_all(&solver, &vocabulary, false);
    assert_eq!(stats.solved, vocabulary.len());
    assert!(stats.failed.is_empty());
    assert!(stats.max_guesses <= vocabulary.len());
}

#[test]
fn embedded_dictionary_solves_with_default_opening() {
    let dictionary = embedded_dictionary(&PopularityTransform::default()).unwrap();
    let (vocabulary, popularity) = dictionary.into_parts();
    let config = SolverConfig::new().with_opening(word("corms"));
    let solver = Solver::new(vocabulary, popularity, &config).unwrap();

    for target in ["crane", "slate", "about", "world"] {
        let target = word(target);
        if !solver.vocabulary().contains(&target) {
            continue;
        }
        let result = solver.solve(&target).unwrap();
        assert_eq!(result.rounds[0].report.guess, word("corms"));
        assert_eq!(result.rounds.last().unwrap().report.guess, target);
    }
}

#[test]
fn interactive_session_recovers_from_bad_input() {
    let solver = three_word_solver();
    let script = "GGG\nXXXXY\nGGGGX\nGGGGG\nno\n";
    let mut out = Vec::new();

    let summary = run_session(&solver, script.as_bytes(), &mut out).unwrap();

    assert_eq!(summary.contradictions, 1);
    assert_eq!(summary.solved, vec![2]);
}
