#![forbid(unsafe_code)]

//! Typed-text rotator.
//!
//! Cycles a list of phrases through a type / hold / delete / hold loop. The
//! machine is tick-driven rather than clock-driven: the host calls
//! [`Typewriter::step`] once per timer expiry and schedules the next timer
//! with the returned delay, so every tick performs exactly one visible
//! action and the pacing contract lives entirely in the transition function.
//!
//! Transition table (`step` from each phase):
//!
//! | phase        | action            | next phase               | delay        |
//! |--------------|-------------------|--------------------------|--------------|
//! | Typing       | append one char   | HoldingFull if complete  | hold / type  |
//! | HoldingFull  | delete one char   | HoldingEmpty if emptied  | hold / delete|
//! | Deleting     | delete one char   | HoldingEmpty if emptied  | hold / delete|
//! | HoldingEmpty | append one char   | HoldingFull if complete  | hold / type  |
//!
//! Emptying a phrase advances to the next one (wrapping), so the hold at
//! empty doubles as the gap before the next phrase starts typing.

use core::fmt;
use core::time::Duration;

/// Delay after appending a character.
pub const TYPE_TICK: Duration = Duration::from_millis(90);

/// Delay after deleting a character.
pub const DELETE_TICK: Duration = Duration::from_millis(40);

/// Hold once a phrase is fully typed.
pub const HOLD_FULL: Duration = Duration::from_millis(2000);

/// Hold once a phrase is fully deleted, before the next one starts.
pub const HOLD_EMPTY: Duration = Duration::from_millis(400);

/// Delay before the very first tick after page load.
pub const LEAD_IN: Duration = Duration::from_millis(800);

/// Rotator phase. See the module docs for the transition table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypedPhase {
    Typing,
    HoldingFull,
    Deleting,
    HoldingEmpty,
}

/// Error constructing a [`Typewriter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhraseSetError {
    /// The phrase list was empty; the rotator needs at least one phrase.
    Empty,
}

impl fmt::Display for PhraseSetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "phrase set is empty"),
        }
    }
}

impl std::error::Error for PhraseSetError {}

/// Tick-driven phrase rotator.
#[derive(Debug, Clone)]
pub struct Typewriter {
    phrases: Vec<String>,
    phrase: usize,
    chars: usize,
    phase: TypedPhase,
}

impl Typewriter {
    /// Create a rotator over `phrases`, starting empty on the first one.
    pub fn new(phrases: Vec<String>) -> Result<Self, PhraseSetError> {
        if phrases.is_empty() {
            return Err(PhraseSetError::Empty);
        }
        Ok(Self {
            phrases,
            phrase: 0,
            chars: 0,
            phase: TypedPhase::Typing,
        })
    }

    /// Currently visible text: the first `chars` characters of the current
    /// phrase.
    #[must_use]
    pub fn visible(&self) -> &str {
        let phrase = self.phrases[self.phrase].as_str();
        match phrase.char_indices().nth(self.chars) {
            Some((byte, _)) => &phrase[..byte],
            None => phrase,
        }
    }

    #[must_use]
    pub const fn phase(&self) -> TypedPhase {
        self.phase
    }

    #[must_use]
    pub const fn phrase_index(&self) -> usize {
        self.phrase
    }

    /// Perform one tick and return the delay until the next one.
    pub fn step(&mut self) -> Duration {
        match self.phase {
            TypedPhase::Typing | TypedPhase::HoldingEmpty => self.type_one(),
            TypedPhase::Deleting | TypedPhase::HoldingFull => self.delete_one(),
        }
    }

    fn phrase_chars(&self) -> usize {
        self.phrases[self.phrase].chars().count()
    }

    fn type_one(&mut self) -> Duration {
        let len = self.phrase_chars();
        if self.chars < len {
            self.chars += 1;
        }
        if self.chars >= len {
            self.phase = TypedPhase::HoldingFull;
            HOLD_FULL
        } else {
            self.phase = TypedPhase::Typing;
            TYPE_TICK
        }
    }

    fn delete_one(&mut self) -> Duration {
        self.chars = self.chars.saturating_sub(1);
        if self.chars == 0 {
            self.phase = TypedPhase::HoldingEmpty;
            self.phrase = (self.phrase + 1) % self.phrases.len();
            crate::trace!(phrase = self.phrase, "rotating to next phrase");
            HOLD_EMPTY
        } else {
            self.phase = TypedPhase::Deleting;
            DELETE_TICK
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn rotator(phrases: &[&str]) -> Typewriter {
        Typewriter::new(phrases.iter().map(|p| (*p).to_owned()).collect())
            .expect("non-empty phrase set")
    }

    #[test]
    fn starts_empty_in_typing_phase() {
        let tw = rotator(&["Azure Data Engineer"]);
        assert_eq!(tw.visible(), "");
        assert_eq!(tw.phase(), TypedPhase::Typing);
        assert_eq!(tw.phrase_index(), 0);
    }

    #[test]
    fn empty_phrase_list_is_rejected() {
        assert_eq!(Typewriter::new(Vec::new()).unwrap_err(), PhraseSetError::Empty);
    }

    #[test]
    fn two_phrase_cycle_shows_expected_sequence() {
        let mut tw = rotator(&["A", "BB"]);
        let mut seen = Vec::new();
        for _ in 0..7 {
            tw.step();
            seen.push(tw.visible().to_owned());
        }
        assert_eq!(seen, ["A", "", "B", "BB", "B", "", "A"]);
    }

    #[test]
    fn delays_follow_the_phase_contract() {
        let mut tw = rotator(&["A", "BB"]);
        let delays: Vec<Duration> = (0..7).map(|_| tw.step()).collect();
        assert_eq!(
            delays,
            [
                HOLD_FULL,  // "A" complete
                HOLD_EMPTY, // emptied, rotated to "BB"
                TYPE_TICK,  // "B"
                HOLD_FULL,  // "BB" complete
                DELETE_TICK,
                HOLD_EMPTY, // emptied, rotated back to "A"
                HOLD_FULL,
            ]
        );
    }

    #[test]
    fn phase_transitions_match_the_table() {
        let mut tw = rotator(&["ab"]);
        let mut trace = vec![tw.phase()];
        for _ in 0..6 {
            tw.step();
            trace.push(tw.phase());
        }
        assert_eq!(
            trace,
            [
                TypedPhase::Typing,       // initial
                TypedPhase::Typing,       // "a"
                TypedPhase::HoldingFull,  // "ab"
                TypedPhase::Deleting,     // "a"
                TypedPhase::HoldingEmpty, // "" + rotate
                TypedPhase::Typing,       // "a"
                TypedPhase::HoldingFull,  // "ab"
            ]
        );
    }

    #[test]
    fn rotation_wraps_through_every_phrase() {
        let mut tw = rotator(&["x", "y", "z"]);
        let mut indices = Vec::new();
        for _ in 0..6 {
            // Each phrase is one char: type (hold-full) then delete (hold-empty).
            tw.step();
            tw.step();
            indices.push(tw.phrase_index());
        }
        assert_eq!(indices, [1, 2, 0, 1, 2, 0]);
    }

    #[test]
    fn multibyte_phrases_slice_on_char_boundaries() {
        let mut tw = rotator(&["héllo"]);
        let mut seen = Vec::new();
        for _ in 0..5 {
            tw.step();
            seen.push(tw.visible().to_owned());
        }
        assert_eq!(seen, ["h", "hé", "hél", "héll", "héllo"]);
    }

    #[test]
    fn empty_phrase_entry_cycles_without_underflow() {
        let mut tw = rotator(&["", "A"]);
        assert_eq!(tw.step(), HOLD_FULL);
        assert_eq!(tw.visible(), "");
        assert_eq!(tw.step(), HOLD_EMPTY);
        assert_eq!(tw.phrase_index(), 1);
        assert_eq!(tw.step(), HOLD_FULL);
        assert_eq!(tw.visible(), "A");
    }

    #[test]
    fn long_run_never_escapes_phrase_bounds() {
        let mut tw = rotator(&["Azure Data Engineer", "Databricks Engineer"]);
        for _ in 0..10_000 {
            tw.step();
            let len = tw.visible().chars().count();
            assert!(len <= "Databricks Engineer".chars().count());
            assert!(tw.phrase_index() < 2);
        }
    }
}
