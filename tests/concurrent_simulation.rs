//! Sharing automata across tasks and threads.

use dfa_trace::catalog;
use dfa_trace::core::Automaton;
use dfa_trace::registry::Registry;
use std::sync::Arc;

const WORDS: [(&str, &str); 6] = [
    ("bets", "aaababaabb"),
    ("bets", "ababaa"),
    ("bets", "aaabax"),
    ("stars", "111111101"),
    ("stars", "000111101"),
    ("stars", "1111a11101"),
];

#[tokio::test]
async fn registry_is_shared_across_tasks() {
    let registry = Arc::new(Registry::with_catalog());

    let expected: Vec<_> = WORDS
        .iter()
        .map(|(name, word)| registry.run(name, word).unwrap())
        .collect();

    let mut handles = Vec::new();
    for _ in 0..8 {
        let registry = Arc::clone(&registry);
        handles.push(tokio::spawn(async move {
            WORDS
                .iter()
                .map(|(name, word)| registry.run(name, word).unwrap())
                .collect::<Vec<_>>()
        }));
    }

    for handle in handles {
        assert_eq!(handle.await.unwrap(), expected);
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn blocking_simulations_agree() {
    let automaton = Arc::new(Automaton::build(catalog::stars().definition).unwrap());
    let expected = automaton.simulate("0101111100010");

    let handles: Vec<_> = (0..16)
        .map(|_| {
            let automaton = Arc::clone(&automaton);
            tokio::task::spawn_blocking(move || automaton.simulate("0101111100010"))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.await.unwrap(), expected);
    }
}

#[test]
fn scoped_threads_borrow_one_automaton() {
    let owned = Automaton::build(catalog::bets().definition).unwrap();
    let automaton = &owned;
    let words = ["aaabaa", "bbbbba", "ababaa", ""];

    std::thread::scope(|scope| {
        let handles: Vec<_> = words
            .iter()
            .map(|&word| scope.spawn(move || automaton.simulate(word)))
            .collect();

        for (handle, word) in handles.into_iter().zip(words) {
            assert_eq!(handle.join().unwrap(), automaton.simulate(word));
        }
    });
}
