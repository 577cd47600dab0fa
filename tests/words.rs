// Native tests for the bonus-word evaluator and the word list itself.

use ocean_letter_quest::game::session::{GameEvent, GameSession};
use ocean_letter_quest::{COMMON_WORDS, WORD_BONUS_MULTIPLIER};

fn session_with_buffer(buffer: &str) -> GameSession {
    let mut session = GameSession::new(800.0, 600.0, 42);
    session.state.collected_word = buffer.to_string();
    session
}

#[test]
fn word_list_entries_are_uppercase_and_unique() {
    for word in COMMON_WORDS {
        assert!(!word.is_empty());
        assert!(
            word.chars().all(|c| c.is_ascii_uppercase()),
            "{word} is not all uppercase"
        );
    }
    for (i, a) in COMMON_WORDS.iter().enumerate() {
        for b in &COMMON_WORDS[i + 1..] {
            assert_ne!(a, b, "duplicate word {a}");
        }
    }
}

#[test]
fn embedded_word_is_credited_and_stripped() {
    let mut session = session_with_buffer("XFISHY");
    let mut events = Vec::new();

    session.check_for_words(&mut events);

    assert_eq!(session.state.score, 4 * WORD_BONUS_MULTIPLIER);
    assert_eq!(session.state.collected_word, "XY");
    assert_eq!(
        events,
        vec![GameEvent::WordBonus {
            word: "FISH",
            points: 4 * WORD_BONUS_MULTIPLIER,
        }]
    );
}

#[test]
fn list_order_decides_between_overlapping_matches() {
    // "OCEANFISH" contains both OCEAN and FISH; FISH comes first in the list.
    let mut session = session_with_buffer("OCEANFISH");
    let mut events = Vec::new();

    session.check_for_words(&mut events);

    assert_eq!(
        events,
        vec![GameEvent::WordBonus {
            word: "FISH",
            points: 4 * WORD_BONUS_MULTIPLIER,
        }]
    );
    assert_eq!(session.state.collected_word, "OCEAN");
}

#[test]
fn only_the_first_occurrence_is_stripped_per_call() {
    let mut session = session_with_buffer("FISHFISH");
    let mut events = Vec::new();

    session.check_for_words(&mut events);

    assert_eq!(events.len(), 1);
    assert_eq!(session.state.score, 4 * WORD_BONUS_MULTIPLIER);
    assert_eq!(session.state.collected_word, "FISH");
}

#[test]
fn matching_is_case_insensitive_over_the_buffer() {
    let mut session = session_with_buffer("xfishy");
    let mut events = Vec::new();

    session.check_for_words(&mut events);

    assert_eq!(session.state.score, 4 * WORD_BONUS_MULTIPLIER);
    assert_eq!(session.state.collected_word, "XY");
}

#[test]
fn no_match_leaves_the_buffer_untouched() {
    let mut session = session_with_buffer("QZXJ");
    let mut events = Vec::new();

    session.check_for_words(&mut events);

    assert!(events.is_empty());
    assert_eq!(session.state.score, 0);
    assert_eq!(session.state.collected_word, "QZXJ");
}
