//! Property tests for filtering, narrowing and solving

use proptest::prelude::*;
use wordle_filter::core::{Feedback, Word, WordRules};
use wordle_filter::solver::{
    CandidateStore, KnownLetters, SessionOutcome, Solver, TruthfulOracle, UniqueLetterFrequency,
    apply_filters, interpret,
};
use wordle_filter::wordlists::{EMBEDDED_WORDS, words_from_slice};

fn embedded_words() -> Vec<Word> {
    let rules = WordRules::default();
    let mut words: Vec<Word> = EMBEDDED_WORDS
        .iter()
        .filter_map(|w| Word::new(*w, &rules).ok())
        .collect();
    words.sort();
    words.dedup();
    words
}

fn store() -> CandidateStore {
    CandidateStore::from_raw(&words_from_slice(EMBEDDED_WORDS), &WordRules::default())
}

fn feedback_line() -> impl Strategy<Value = String> {
    proptest::collection::vec(prop_oneof![Just('.'), Just('?'), Just('x')], 5)
        .prop_map(|symbols| symbols.into_iter().collect())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn filtering_is_idempotent(
        rounds in proptest::collection::vec((any::<prop::sample::Index>(), feedback_line()), 1..4)
    ) {
        let words = embedded_words();
        let store = store();
        let mut known = KnownLetters::new();
        let mut filters = Vec::new();
        for (index, line) in &rounds {
            let guess = index.get(&words);
            filters.extend(interpret(guess, line, &mut known).unwrap());
        }

        let once = apply_filters(store.original(), &filters, store.defaults());
        let twice = apply_filters(&once, &filters, store.defaults());
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn known_letters_never_shrink(
        rounds in proptest::collection::vec((any::<prop::sample::Index>(), feedback_line()), 1..6)
    ) {
        let words = embedded_words();
        let mut known = KnownLetters::new();
        for (index, line) in &rounds {
            let before = known.clone();
            interpret(index.get(&words), line, &mut known).unwrap();
            prop_assert!(before.is_subset(&known));
        }
    }

    #[test]
    fn truthful_rounds_narrow_and_keep_target(
        target in any::<prop::sample::Index>(),
        guesses in proptest::collection::vec(any::<prop::sample::Index>(), 1..6)
    ) {
        let words = embedded_words();
        let target = target.get(&words);
        let store = store();
        let mut known = KnownLetters::new();
        let mut filters = Vec::new();
        let mut previous = store.len();

        for index in &guesses {
            let guess = index.get(&words);
            let line = Feedback::score(guess, target).to_string();
            filters.extend(interpret(guess, &line, &mut known).unwrap());

            let current = apply_filters(store.original(), &filters, store.defaults());
            prop_assert!(current.len() <= previous);
            prop_assert!(current.contains(target));
            previous = current.len();
        }
    }

    #[test]
    fn solver_always_finds_target(target in any::<prop::sample::Index>()) {
        let words = embedded_words();
        let target = target.get(&words).clone();
        let mut solver = Solver::new(
            &words_from_slice(EMBEDDED_WORDS),
            WordRules::default(),
            UniqueLetterFrequency,
        );
        let mut oracle = TruthfulOracle::new(target.clone());

        let outcome = solver.run(&mut oracle).unwrap();

        let SessionOutcome::Solved { word, rounds } = outcome else {
            panic!("unbounded run must solve");
        };
        prop_assert_eq!(&word, &target);
        prop_assert_eq!(rounds, oracle.transcript().len());

        let counts: Vec<usize> = oracle
            .transcript()
            .iter()
            .map(|step| step.proposal.candidates)
            .collect();
        prop_assert!(counts.windows(2).all(|pair| pair[1] < pair[0]));
    }
}
