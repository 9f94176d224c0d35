//! Integration tests for the typed-text rotator's full cycle behavior.

use core::time::Duration;

use folio_core::typed::{DELETE_TICK, HOLD_EMPTY, HOLD_FULL, TYPE_TICK};
use folio_core::{TypedPhase, Typewriter};
use pretty_assertions::assert_eq;

fn rotator(phrases: &[&str]) -> Typewriter {
    Typewriter::new(phrases.iter().map(|p| (*p).to_owned()).collect())
        .expect("non-empty phrase set")
}

/// Collect `(visible, delay)` pairs over `ticks` steps.
fn run(tw: &mut Typewriter, ticks: usize) -> Vec<(String, Duration)> {
    (0..ticks)
        .map(|_| {
            let delay = tw.step();
            (tw.visible().to_owned(), delay)
        })
        .collect()
}

#[test]
fn milestone_sequence_cycles_through_both_phrases() {
    let mut tw = rotator(&["A", "BB"]);
    let seen: Vec<String> = run(&mut tw, 14).into_iter().map(|(text, _)| text).collect();

    // The contract sequence; intermediate deletions also render but must
    // appear between these milestones, never out of order.
    let milestones = ["A", "", "B", "BB", "", "A"];
    let mut at = 0;
    for text in &seen {
        if at < milestones.len() && text == milestones[at] {
            at += 1;
        }
    }
    assert_eq!(at, milestones.len(), "milestones out of order in {seen:?}");
}

#[test]
fn full_phrase_always_precedes_deletion() {
    let mut tw = rotator(&["Azure Data Engineer", "Databricks Engineer"]);
    let mut last_full = String::new();
    for _ in 0..500 {
        tw.step();
        match tw.phase() {
            TypedPhase::HoldingFull => last_full = tw.visible().to_owned(),
            TypedPhase::Deleting => {
                assert!(
                    last_full.starts_with(tw.visible()),
                    "deleting text {:?} is not a prefix of the last full phrase {:?}",
                    tw.visible(),
                    last_full
                );
            }
            _ => {}
        }
    }
}

#[test]
fn every_delay_comes_from_the_contract_set() {
    let mut tw = rotator(&["one", "two", "three"]);
    for (_, delay) in run(&mut tw, 1000) {
        assert!(
            [TYPE_TICK, DELETE_TICK, HOLD_FULL, HOLD_EMPTY].contains(&delay),
            "unexpected delay {delay:?}"
        );
    }
}

#[test]
fn single_phrase_cycle_period_is_stable() {
    // For a single phrase of n chars, one full cycle is n type ticks
    // (the last returning the full hold) plus n delete ticks (the last
    // returning the empty hold).
    let mut tw = rotator(&["abcd"]);
    let budget: Duration = run(&mut tw, 8).into_iter().map(|(_, delay)| delay).sum();
    let expected = TYPE_TICK * 3 + HOLD_FULL + DELETE_TICK * 3 + HOLD_EMPTY;
    assert_eq!(budget, expected);
    assert_eq!(tw.visible(), "", "back to empty after one full cycle");
}

#[test]
fn two_machines_with_the_same_phrases_stay_in_lockstep() {
    let mut a = rotator(&["Azure Data Engineer", "ETL Pipeline Architect"]);
    let mut b = rotator(&["Azure Data Engineer", "ETL Pipeline Architect"]);
    for _ in 0..300 {
        assert_eq!(a.step(), b.step());
        assert_eq!(a.visible(), b.visible());
        assert_eq!(a.phase(), b.phase());
    }
}

#[test]
fn production_phrase_set_rotates_in_order() {
    let phrases = ["Azure Data Engineer", "Databricks Engineer", "ETL Pipeline Architect"];
    let mut tw = rotator(&phrases);

    let mut fully_typed = Vec::new();
    for _ in 0..2000 {
        tw.step();
        let at_full = tw.phase() == TypedPhase::HoldingFull;
        if at_full && fully_typed.last().map(String::as_str) != Some(tw.visible()) {
            fully_typed.push(tw.visible().to_owned());
        }
        if fully_typed.len() == 5 {
            break;
        }
    }
    assert_eq!(
        fully_typed,
        [
            "Azure Data Engineer",
            "Databricks Engineer",
            "ETL Pipeline Architect",
            "Azure Data Engineer",
            "Databricks Engineer",
        ]
    );
}
