//! End-to-end session scenarios
//!
//! Drives the full menu loop over canned stdin text and asserts the printed transcript.
//! Input is not echoed, so an output line may follow a prompt on the same line;
//! lookups therefore search by substring rather than by line start.

use std::io::Cursor;

use procenten_core::application::constants::{
    FAREWELL, INVALID_DIRECTION, INVALID_NUMBER, INVALID_PERCENT_LIST, MENU_HEADER,
    UNDEFINED_PERCENT_OF_TOTAL,
};
use procenten_core::application::{DirectionInput, Session, SessionConfig};
use procenten_core::port::StreamConsole;

fn run_with(input: &str, config: SessionConfig) -> String {
    run_bytes(input.as_bytes(), config)
}

fn run_bytes(input: &[u8], config: SessionConfig) -> String {
    let console = StreamConsole::new(Cursor::new(input.to_vec()), Vec::new());
    let mut session = Session::new(console, config);
    session
        .run()
        .expect("session should not fail on in-memory streams");
    String::from_utf8(session.into_console().into_writer()).expect("utf-8 output")
}

fn run(input: &str) -> String {
    run_with(input, SessionConfig::default())
}

/// Every printed fragment starting at `marker`, up to the end of its line
fn lines_with<'a>(output: &'a str, marker: &str) -> Vec<&'a str> {
    output
        .match_indices(marker)
        .filter_map(|(i, _)| output[i..].lines().next())
        .collect()
}

fn line_with<'a>(output: &'a str, marker: &str) -> &'a str {
    lines_with(output, marker)
        .into_iter()
        .next()
        .unwrap_or_else(|| panic!("no {marker:?} in:\n{output}"))
}

#[test]
fn test_percent_of_scenario() {
    let output = run("1\n10\n200\n8\n");

    assert_eq!(
        line_with(&output, "Berekening:"),
        "Berekening: 10.0% = 0.1 ; 0.1 * 200.0 = 20.0"
    );
    assert_eq!(
        line_with(&output, "Antwoord:"),
        "Antwoord: 10.0% van 200.0 is 20.0"
    );
    assert!(output.ends_with(&format!("{FAREWELL}\n")));
}

#[test]
fn test_zero_denominator_scenario() {
    let output = run("2\n0\n0\n8\n");

    assert!(output.contains(UNDEFINED_PERCENT_OF_TOTAL));
    assert!(!output.contains("Antwoord"));
    assert!(!output.contains("Berekening"));
}

#[test]
fn test_percent_of_total_scenario() {
    let output = run("2\n121\n412\nq\n");

    assert_eq!(
        line_with(&output, "Antwoord:"),
        "Antwoord: 121.0 is 29.36893203883495% van 412.0"
    );
}

#[test]
fn test_compound_scenario() {
    let output = run("7\n100\n10, -20, 5\n8\n");

    let steps = lines_with(&output, "Toepassen");
    assert_eq!(steps.len(), 3);
    assert!(steps[0].starts_with("Toepassen 10.0%: 100.0 -> 110"));
    assert!(steps[1].starts_with("Toepassen -20.0%: 110"));
    assert!(steps[1].contains("-> 88"));
    assert!(steps[2].starts_with("Toepassen 5.0%: 88"));
    assert!(steps[2].contains("-> 92.4"));

    assert_eq!(line_with(&output, "Startwaarde:"), "Startwaarde: 100.0");
    assert!(line_with(&output, "Eindwaarde").contains(": 92.4"));
}

#[test]
fn test_compound_bad_list_has_no_partial_effect() {
    let output = run("7\n100\n10, twintig\n8\n");

    assert!(output.contains(INVALID_PERCENT_LIST));
    assert!(!output.contains("Startwaarde"));
    assert!(!output.contains("Toepassen"));
    assert!(!output.contains("Eindwaarde"));
    // back at the menu afterwards
    assert_eq!(output.matches(MENU_HEADER).count(), 2);
}

#[test]
fn test_compound_empty_list_keeps_start_value() {
    let output = run("7\n42\n\n8\n");

    assert!(!output.contains("Toepassen"));
    assert_eq!(
        line_with(&output, "Eindwaarde"),
        "Eindwaarde na samengestelde procenten: 42.0"
    );
}

#[test]
fn test_invalid_number_reprompts() {
    let output = run("1\nabc\n12,5\n100\n8\n");

    assert_eq!(output.matches(INVALID_NUMBER).count(), 1);
    assert_eq!(
        line_with(&output, "Antwoord:"),
        "Antwoord: 12.5% van 100.0 is 12.5"
    );
}

#[test]
fn test_undecodable_bytes_are_reprompted() {
    let mut input = b"1\n".to_vec();
    input.extend_from_slice(&[0xff, 0xfe, b'\n']);
    input.extend_from_slice(b"10\n200\n8\n");

    let output = run_bytes(&input, SessionConfig::default());

    assert_eq!(output.matches(INVALID_NUMBER).count(), 1);
    assert_eq!(
        line_with(&output, "Antwoord:"),
        "Antwoord: 10.0% van 200.0 is 20.0"
    );
    assert!(output.ends_with(&format!("{FAREWELL}\n")));
}

#[test]
fn test_change_by_percent_letter_rule() {
    let output = run("4\n200\n25\nVerhogen\n4\n200\n25\nanders\n8\n");

    assert_eq!(
        lines_with(&output, "Antwoord:"),
        vec![
            "Antwoord: waarde verhoogd met 25.0% = 250.0",
            "Antwoord: waarde verlaagd met 25.0% = 150.0",
        ]
    );
    assert_eq!(
        line_with(&output, "Berekening:"),
        "Berekening: 200.0 + 25.0% -> factor = 1.25 ; resultaat = 250.0"
    );
}

#[test]
fn test_original_before_change_explicit_mode() {
    let config = SessionConfig {
        direction_input: DirectionInput::Explicit,
    };
    let output = run_with("5\n150\n25\nanders\nverlaging\n8\n", config);

    assert_eq!(output.matches(INVALID_DIRECTION).count(), 1);
    assert_eq!(
        line_with(&output, "Berekening:"),
        "Berekening: origineel = nieuw / factor = 150.0 / 0.75 = 200.0"
    );
    assert_eq!(
        line_with(&output, "Antwoord:"),
        "Antwoord: oorspronkelijke waarde = 200.0"
    );
}

#[test]
fn test_total_from_part_scenario() {
    let output = run("3\n30\n15\n8\n");

    assert_eq!(
        line_with(&output, "Berekening:"),
        "Berekening: totaal = deel * 100 / pct = 30.0 * 100 / 15.0 = 200.0"
    );
    assert_eq!(line_with(&output, "Antwoord:"), "Antwoord: totaal = 200.0");
}

#[test]
fn test_percent_change_directions() {
    let output = run("6\n326\n413\n6\n413\n326\n6\n5\n5\n8\n");

    let answers = lines_with(&output, "Antwoord:");
    assert_eq!(answers.len(), 3);
    assert!(answers[0].starts_with("Antwoord: procentuele toename: 26.68"));
    assert!(answers[1].starts_with("Antwoord: procentuele afname: -21.06"));
    assert_eq!(answers[2], "Antwoord: procentuele geen verandering: 0.0%");
}

#[test]
fn test_overview_then_exit_on_end_of_input() {
    let output = run("0\n");

    assert!(output.contains("Procenten in 1 overzicht:"));
    assert!(output.contains("Antwoord: 0.13 x 365 = 47.45"));
    assert!(output.ends_with(&format!("{FAREWELL}\n")));
}
