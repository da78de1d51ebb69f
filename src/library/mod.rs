//! The shipped automaton library.
//!
//! A read-only catalog of hand-authored, complete DFAs grouped into
//! categories. Every automaton here is total over its alphabet, so a
//! simulation can never get stuck on in-alphabet input.

use crate::automaton::{Automaton, AutomatonBuilder, State};

/// One browsable group of automata.
pub struct Category {
    /// Stable lookup key, e.g. `"basic-patterns"`
    pub key: &'static str,
    /// Name shown in the category picker
    pub display_name: &'static str,
    pub automata: Vec<Automaton>,
}

/// Build the full shipped library.
///
/// Returns fresh owned values on every call; callers hand individual
/// automata to the playback controller by value.
pub fn library() -> Vec<Category> {
    vec![
        Category {
            key: "basic-patterns",
            display_name: "Basic Patterns",
            automata: vec![
                ends_with_a(),
                starts_with_a(),
                contains_aa(),
                even_number_of_a(),
            ],
        },
        Category {
            key: "length-patterns",
            display_name: "Length Patterns",
            automata: vec![even_length(), length_divisible_by_3()],
        },
        Category {
            key: "binary-divisibility",
            display_name: "Binary Divisibility",
            automata: vec![binary_divisible_by_2(), binary_divisible_by_3()],
        },
    ]
}

// The library data is static and known-valid, so `expect` here can never
// fire once the entries below pass the test suite.

fn ends_with_a() -> Automaton {
    AutomatonBuilder::new("Ends with a")
        .description("Accepts all strings over {a, b} that end with the symbol 'a'.")
        .state(State::new("q0", 100.0, 200.0).initial())
        .state(State::new("q1", 280.0, 200.0).accepting())
        .transition("q0", "q1", 'a')
        .transition("q0", "q0", 'b')
        .transition("q1", "q1", 'a')
        .transition("q1", "q0", 'b')
        .alphabet(['a', 'b'])
        .build()
        .expect("library automaton is valid")
}

fn starts_with_a() -> Automaton {
    AutomatonBuilder::new("Starts with a")
        .description("Accepts strings that start with 'a'.")
        .state(State::new("q0", 100.0, 200.0).initial())
        .state(State::new("q1", 280.0, 200.0).accepting())
        .state(State::new("q2", 460.0, 200.0))
        .transition("q0", "q1", 'a')
        .transition("q0", "q2", 'b')
        .transition("q1", "q1", 'a')
        .transition("q1", "q1", 'b')
        .transition("q2", "q2", 'a')
        .transition("q2", "q2", 'b')
        .alphabet(['a', 'b'])
        .build()
        .expect("library automaton is valid")
}

fn contains_aa() -> Automaton {
    AutomatonBuilder::new("Contains 'aa'")
        .description("Accepts strings containing the substring 'aa'.")
        .state(State::new("q0", 100.0, 200.0).initial())
        .state(State::new("q1", 280.0, 200.0))
        .state(State::new("q2", 460.0, 200.0).accepting())
        .transition("q0", "q1", 'a')
        .transition("q0", "q0", 'b')
        .transition("q1", "q2", 'a')
        .transition("q1", "q0", 'b')
        .transition("q2", "q2", 'a')
        .transition("q2", "q2", 'b')
        .alphabet(['a', 'b'])
        .build()
        .expect("library automaton is valid")
}

fn even_number_of_a() -> Automaton {
    AutomatonBuilder::new("Even number of a's")
        .description("Accepts strings with an even number of 'a's.")
        .state(State::new("q0", 100.0, 200.0).initial().accepting())
        .state(State::new("q1", 280.0, 200.0))
        .transition("q0", "q1", 'a')
        .transition("q0", "q0", 'b')
        .transition("q1", "q0", 'a')
        .transition("q1", "q1", 'b')
        .alphabet(['a', 'b'])
        .build()
        .expect("library automaton is valid")
}

fn even_length() -> Automaton {
    AutomatonBuilder::new("Even Length")
        .description("Accepts strings with an even total length.")
        .state(State::new("q0", 100.0, 200.0).initial().accepting())
        .state(State::new("q1", 280.0, 200.0))
        .transition("q0", "q1", 'a')
        .transition("q0", "q1", 'b')
        .transition("q1", "q0", 'a')
        .transition("q1", "q0", 'b')
        .alphabet(['a', 'b'])
        .build()
        .expect("library automaton is valid")
}

fn length_divisible_by_3() -> Automaton {
    AutomatonBuilder::new("Length divisible by 3")
        .description("Accepts strings where the length is a multiple of 3.")
        .state(State::new("q0", 100.0, 200.0).initial().accepting())
        .state(State::new("q1", 280.0, 200.0))
        .state(State::new("q2", 460.0, 200.0))
        .transition("q0", "q1", 'a')
        .transition("q0", "q1", 'b')
        .transition("q1", "q2", 'a')
        .transition("q1", "q2", 'b')
        .transition("q2", "q0", 'a')
        .transition("q2", "q0", 'b')
        .alphabet(['a', 'b'])
        .build()
        .expect("library automaton is valid")
}

fn binary_divisible_by_2() -> Automaton {
    AutomatonBuilder::new("Binary number divisible by 2")
        .description("Accepts binary strings that represent a number divisible by 2 (i.e., end in 0).")
        .state(State::new("q0", 100.0, 200.0).initial().accepting())
        .state(State::new("q1", 280.0, 200.0))
        .transition("q0", "q0", '0')
        .transition("q0", "q1", '1')
        .transition("q1", "q0", '0')
        .transition("q1", "q1", '1')
        .alphabet(['0', '1'])
        .build()
        .expect("library automaton is valid")
}

fn binary_divisible_by_3() -> Automaton {
    AutomatonBuilder::new("Binary number divisible by 3")
        .description("Accepts binary strings representing a number divisible by 3.")
        .state(State::new("s0", 150.0, 200.0).initial().accepting())
        .state(State::new("s1", 350.0, 120.0))
        .state(State::new("s2", 350.0, 280.0))
        .transition("s0", "s0", '0')
        .transition("s0", "s1", '1')
        .transition("s1", "s2", '0')
        .transition("s1", "s0", '1')
        .transition("s2", "s1", '0')
        .transition("s2", "s2", '1')
        .alphabet(['0', '1'])
        .build()
        .expect("library automaton is valid")
}
