//! Integration tests for Autocompleter and AutocompleterV2.
//!
//! Items are small named records, indexed through an injected word mapper
//! the same way the application's activity list is.

use std::collections::HashSet;

use rstest::{fixture, rstest};
use trie_autocomplete::autocomplete::{Autocompleter, AutocompleterV2, SearchEngine};
use trie_autocomplete::words::{WordSet, words_from_names};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct Exercise {
    id: u32,
    name: &'static str,
}

fn exercise_words(exercise: &Exercise) -> WordSet {
    words_from_names([exercise.name])
}

type Mapper = fn(&Exercise) -> WordSet;

const CODER: Exercise = Exercise { id: 1, name: "Coder" };
const CODE: Exercise = Exercise { id: 2, name: "Code" };
const COCOA: Exercise = Exercise { id: 3, name: "Cocoa" };
const BANANA: Exercise = Exercise { id: 4, name: "Banana" };
const BIG_COCOA: Exercise = Exercise { id: 5, name: "Big cocoa" };

fn set(exercises: &[Exercise]) -> HashSet<Exercise> {
    exercises.iter().cloned().collect()
}

fn autocompleter(items: &[Exercise]) -> Autocompleter<Exercise, Mapper> {
    let mut completer = Autocompleter::new(exercise_words as Mapper);
    completer.initialize(items.iter().cloned());
    completer
}

#[fixture]
fn completer() -> Autocompleter<Exercise, Mapper> {
    autocompleter(&[CODER, CODE, COCOA, BANANA])
}

// =============================================================================
// Autocompleter: searching
// =============================================================================

#[rstest]
fn test_search_by_prefix(completer: Autocompleter<Exercise, Mapper>) {
    assert_eq!(completer.search(["co"]), set(&[CODER, CODE, COCOA]));
}

#[rstest]
fn test_search_ignores_case(completer: Autocompleter<Exercise, Mapper>) {
    let uppercase = completer.search(["CO"]);
    let lowercase = completer.search(["co"]);

    assert_eq!(uppercase, set(&[CODER, CODE, COCOA]));
    assert_eq!(uppercase, lowercase);
}

#[rstest]
fn test_search_matches_start_of_any_word() {
    let completer = autocompleter(&[CODER, BIG_COCOA, BANANA]);
    assert_eq!(completer.search(["co"]), set(&[CODER, BIG_COCOA]));
    assert_eq!(completer.search(["big"]), set(&[BIG_COCOA]));
}

#[rstest]
fn test_search_matches_multiple_prefixes(completer: Autocompleter<Exercise, Mapper>) {
    assert_eq!(completer.search(["cod", "ban"]), set(&[CODER, CODE, BANANA]));
}

#[rstest]
fn test_search_exact_word_counts_as_match(completer: Autocompleter<Exercise, Mapper>) {
    assert_eq!(completer.search(["banana"]), set(&[BANANA]));
    assert_eq!(completer.search(["bananas"]), set(&[]));
}

#[rstest]
fn test_search_without_prefixes_matches_nothing(completer: Autocompleter<Exercise, Mapper>) {
    assert!(completer.search(Vec::<String>::new()).is_empty());
}

#[rstest]
fn test_search_distinguishes_items_with_same_name() {
    let twin = Exercise { id: 99, name: "Cocoa" };
    let completer = autocompleter(&[COCOA, twin.clone()]);
    assert_eq!(completer.search(["coc"]), set(&[COCOA, twin]));
}

// =============================================================================
// Autocompleter: adding and removing
// =============================================================================

#[rstest]
fn test_add_item() {
    let mut completer = autocompleter(&[COCOA, CODE]);
    assert_eq!(completer.search(["c"]), set(&[COCOA, CODE]));
    assert_eq!(completer.search(["b"]), set(&[]));

    assert!(completer.add_item(BANANA));

    assert_eq!(completer.search(["c"]), set(&[COCOA, CODE]));
    assert_eq!(completer.search(["b"]), set(&[BANANA]));
    assert_eq!(completer.len(), 3);
}

#[rstest]
fn test_remove_item() {
    let mut completer = autocompleter(&[COCOA, CODE, CODER, BANANA]);
    assert_eq!(completer.search(["c"]), set(&[COCOA, CODE, CODER]));
    assert_eq!(completer.search(["b"]), set(&[BANANA]));

    assert!(completer.remove_item(&CODE));

    assert_eq!(completer.search(["c"]), set(&[COCOA, CODER]));
    assert_eq!(completer.search(["code"]), set(&[CODER]));
    assert_eq!(completer.search(["b"]), set(&[BANANA]));
    assert!(!completer.contains(&CODE));
}

#[rstest]
fn test_remove_unknown_item_is_ignored(mut completer: Autocompleter<Exercise, Mapper>) {
    assert!(!completer.remove_item(&BIG_COCOA));
    assert_eq!(completer.len(), 4);
    assert_eq!(completer.search(["co"]), set(&[CODER, CODE, COCOA]));
}

#[rstest]
fn test_add_then_remove_restores_results(mut completer: Autocompleter<Exercise, Mapper>) {
    let prefixes = ["c", "co", "cod", "b", "big", "coc"];
    let before: Vec<_> = prefixes.iter().map(|prefix| completer.search([prefix])).collect();
    let words_before = completer.word_count();

    completer.add_item(BIG_COCOA);
    completer.remove_item(&BIG_COCOA);

    let after: Vec<_> = prefixes.iter().map(|prefix| completer.search([prefix])).collect();
    assert_eq!(after, before);
    assert_eq!(completer.word_count(), words_before);
}

#[rstest]
fn test_remove_every_item_empties_index(mut completer: Autocompleter<Exercise, Mapper>) {
    for item in [CODER, CODE, COCOA, BANANA] {
        completer.remove_item(&item);
    }

    assert!(completer.is_empty());
    assert_eq!(completer.word_count(), 0);
    assert!(completer.search([""]).is_empty());
}

#[rstest]
fn test_mapper_over_alternative_names() {
    fn alias_words(names: &(&'static str, &'static str)) -> WordSet {
        words_from_names([names.0, names.1])
    }

    let mut completer = Autocompleter::new(alias_words);
    completer.initialize([("Pull up", "Chin up"), ("Push up", "Press up")]);

    assert_eq!(completer.search(["chi"]).len(), 1);
    assert_eq!(completer.search(["up"]).len(), 2);
    assert_eq!(completer.search(["pre", "pul"]).len(), 2);
}

// =============================================================================
// AutocompleterV2: spaces behave as AND operators
// =============================================================================

const LEFT: Exercise = Exercise { id: 10, name: "left bulgarian squat" };
const RIGHT: Exercise = Exercise { id: 11, name: "right bulgarian squat" };

fn conjunctive(items: &[Exercise]) -> AutocompleterV2<Exercise, Mapper> {
    let mut completer = AutocompleterV2::new(exercise_words as Mapper);
    completer.initialize(items.iter().cloned());
    completer
}

#[rstest]
fn test_spaces_behave_as_and_operators() {
    let completer = conjunctive(&[LEFT, RIGHT]);

    assert_eq!(completer.search("lef bul"), set(&[LEFT]));
    assert_eq!(completer.search("lef"), set(&[LEFT]));
    assert_eq!(completer.search("bul"), set(&[LEFT, RIGHT]));
}

#[rstest]
fn test_v1_and_v2_differ_on_multiple_terms() {
    let any = autocompleter(&[LEFT, RIGHT]);
    let all = conjunctive(&[LEFT, RIGHT]);

    assert_eq!(any.search(["lef", "bul"]), set(&[LEFT, RIGHT]));
    assert_eq!(all.search("lef bul"), set(&[LEFT]));
}

#[rstest]
#[case("LEF BUL", &[LEFT])]
#[case("squat bulgarian", &[LEFT, RIGHT])]
#[case("rig lef", &[])]
#[case("", &[])]
fn test_v2_search(#[case] query: &str, #[case] expected: &[Exercise]) {
    let completer = conjunctive(&[LEFT, RIGHT]);
    assert_eq!(completer.search(query), set(expected));
}

#[rstest]
fn test_v2_add_and_remove() {
    let mut completer = conjunctive(&[LEFT]);
    completer.add_item(RIGHT);
    assert_eq!(completer.search("rig squ"), set(&[RIGHT]));

    completer.remove_item(&LEFT);
    assert_eq!(completer.search("bul"), set(&[RIGHT]));
    assert!(completer.search("lef").is_empty());
    assert_eq!(completer.len(), 1);
}

// =============================================================================
// SearchEngine: both query styles over one index
// =============================================================================

#[rstest]
fn test_engine_offers_both_query_styles() {
    let mut engine = SearchEngine::new(exercise_words as Mapper);
    engine.initialize([LEFT, RIGHT, BANANA]);

    assert_eq!(engine.search_any(["lef", "ban"]), set(&[LEFT, BANANA]));
    assert_eq!(engine.search_all(["lef", "ban"]), set(&[]));
    assert_eq!(engine.search_all(["lef", "squ"]), set(&[LEFT]));
    assert_eq!(engine.matching("BUL"), set(&[LEFT, RIGHT]));
}
