use std::io::Cursor;

use adder_nn::session::render::{FAREWELL, INVALID_INPUT, NO_HISTORY, USAGE};
use adder_nn::{train_adder, Predictor, Session, TrainConfig};

/// Runs `script` through a session and returns the ANSI-free transcript.
fn transcript<P: Predictor>(session: &mut Session<P>, script: &str) -> String {
    let mut out = Vec::new();
    session.run(Cursor::new(script), &mut out).expect("in-memory I/O cannot fail");
    console::strip_ansi_codes(&String::from_utf8(out).unwrap()).into_owned()
}

fn exact_session() -> Session<fn(f64, f64) -> f64> {
    fn add(a: f64, b: f64) -> f64 {
        a + b
    }
    Session::new(add as fn(f64, f64) -> f64)
}

#[test]
fn answers_and_records_a_query() {
    let mut session = exact_session();
    let text = transcript(&mut session, "3 4\nexit\n");

    assert!(text.contains("AI Calculator Chat Interface"));
    assert!(text.contains("AI: 3.0 + 4.0 = 7.00 (100.0% confidence)"), "{text}");
    assert!(text.trim_end().ends_with(FAREWELL));

    let entry = session.history().last().unwrap();
    assert_eq!((entry.num1(), entry.num2()), (3.0, 4.0));
    assert_eq!(session.history().len(), 1);
}

#[test]
fn malformed_lines_are_reported_and_skipped() {
    let mut session = exact_session();
    let text = transcript(&mut session, "3 4 5\nabc 4\n\n1 2\nquit\n");

    assert_eq!(text.matches(USAGE).count(), 2, "{text}");
    assert_eq!(text.matches(INVALID_INPUT).count(), 1, "{text}");
    assert!(text.contains("AI: 1.0 + 2.0 = 3.00"));
    assert_eq!(session.history().len(), 1);
}

#[test]
fn failures_while_answering_do_not_end_the_session() {
    let mut session = exact_session();
    let text = transcript(&mut session, "inf -inf\n2 2\nexit\n");

    assert!(text.contains("An error occurred: "), "{text}");
    assert!(text.contains("AI: 2.0 + 2.0 = 4.00"));
    assert_eq!(session.history().len(), 1);
}

#[test]
fn overflowing_sum_is_reported_without_an_entry() {
    let mut session = Session::new(|a: f64, b: f64| 0.5 * a + 0.5 * b);
    let text = transcript(&mut session, "1.5e308 1.5e308\nhistory\nexit\n");

    assert!(text.contains("An error occurred: 1.5e308 + 1.5e308 is out of range"), "{text}");
    assert!(!text.contains("NaN"), "{text}");
    assert!(text.contains(NO_HISTORY));
    assert!(session.history().is_empty());
}

#[test]
fn history_command_lists_queries_in_order() {
    let mut session = exact_session();
    let text = transcript(&mut session, "History\n1 1\n2 3\n10 -4\nHISTORY\nEXIT\n");

    assert!(text.contains(NO_HISTORY));
    let first = text.find("1. [").expect("first entry");
    let second = text.find("2. [").expect("second entry");
    let third = text.find("3. [").expect("third entry");
    assert!(first < second && second < third);
    assert!(text.contains("] 10.0 + -4.0 = 6.00 (100.0% confidence)"), "{text}");

    let entries: Vec<_> = session.history().iter().collect();
    assert_eq!(entries.len(), 3);
    assert!(entries.windows(2).all(|w| w[0].timestamp() <= w[1].timestamp()));
    assert_eq!(entries[2].num1(), 10.0);
}

#[test]
fn help_is_case_insensitive() {
    let mut session = exact_session();
    let text = transcript(&mut session, "HELP\nexit\n");
    // Once from the banner, once on request.
    assert_eq!(text.matches("Available commands:").count(), 2);
}

#[test]
fn end_of_input_closes_the_session() {
    let mut session = exact_session();
    let text = transcript(&mut session, "5 5\n");
    assert!(text.trim_end().ends_with(FAREWELL));
    assert_eq!(session.history().len(), 1);
}

#[test]
fn trained_model_answers_with_bounded_confidence() {
    let config = TrainConfig {
        epochs: 30,
        samples: 1_000,
        seed: Some(42),
        ..TrainConfig::default()
    };
    let model = train_adder(&config, |_| {}).unwrap();
    let mut session = Session::new(model);

    let text = transcript(&mut session, "3 4\n");
    assert!(text.contains("AI: 3.0 + 4.0 = "), "{text}");

    let entry = session.history().last().unwrap();
    assert_eq!((entry.num1(), entry.num2()), (3.0, 4.0));
    assert!((0.0..=100.0).contains(&entry.confidence()));
    assert!((entry.predicted_sum() - 7.0).abs() < 2.0);
}
