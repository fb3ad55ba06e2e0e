//! Property tests for the stepping kernel.
//!
//! Each property builds boards from seeded soups or reference patterns and
//! checks an observable contract of `next_generation` / `run_generations`.

use lifegrid_board::Board;
use lifegrid_core::{BoardId, Cell};
use lifegrid_test_utils::{random_soup, translate, Pattern};
use proptest::prelude::*;

fn board(generation: u64, cells: impl IntoIterator<Item = Cell>) -> Board {
    Board::new(BoardId::new(), generation, cells).unwrap()
}

fn still_life() -> impl Strategy<Value = Pattern> {
    prop_oneof![Just(Pattern::Block), Just(Pattern::Tub)]
}

fn oscillator() -> impl Strategy<Value = Pattern> {
    prop_oneof![
        Just(Pattern::Blinker),
        Just(Pattern::Toad),
        Just(Pattern::Beacon)
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn step_is_deterministic(seed in any::<u64>(), generation in 0u64..1_000, density in 0.1f64..0.6) {
        let soup = random_soup(seed, 16, 16, density);
        let mut a = board(generation, soup.clone());
        let mut b = board(generation, soup);
        for _ in 0..4 {
            prop_assert_eq!(a.next_generation(), b.next_generation());
            prop_assert_eq!(a.cells(), b.cells());
            prop_assert_eq!(a.has_mutated(), b.has_mutated());
        }
    }

    #[test]
    fn step_commutes_with_translation(seed in any::<u64>(), dx in -1_000i64..1_000, dy in -1_000i64..1_000) {
        let soup = random_soup(seed, 12, 12, 0.35);
        let mut here = board(0, soup.clone());
        let mut there = board(0, translate(&soup, dx, dy));
        here.next_generation();
        there.next_generation();
        prop_assert_eq!(translate(&here.cells(), dx, dy), there.cells());
    }

    #[test]
    fn still_life_fast_forward_is_exact(p in still_life(), start in 0u64..10_000, n in 1u64..1_000_000_000) {
        let b = board(start, p.cells());
        let ran = b.run_generations(n, false).unwrap().into_advanced().unwrap();
        prop_assert_eq!(ran.generation(), start + n);
        prop_assert_eq!(ran.cells(), p.cells());
    }

    #[test]
    fn still_life_meets_final_state(p in still_life(), n in 1u64..1_000_000) {
        let b = board(0, p.cells());
        let ran = b.run_generations(n, true).unwrap().into_advanced().unwrap();
        prop_assert_eq!(ran.generation(), n);
        prop_assert_eq!(ran.cells(), p.cells());
    }

    #[test]
    fn oscillator_never_meets_final_state(p in oscillator(), n in 1u64..200) {
        let b = board(0, p.cells());
        let outcome = b.run_generations(n, true).unwrap();
        prop_assert!(!outcome.is_advanced());
        prop_assert_eq!(outcome.board().generation(), 0);
        prop_assert_eq!(outcome.board().cells(), p.cells());
    }

    #[test]
    fn run_matches_manual_steps(seed in any::<u64>(), n in 1u64..40) {
        let soup = random_soup(seed, 10, 10, 0.4);
        let start = board(0, soup.clone());
        let ran = start.run_generations(n, false).unwrap().into_advanced().unwrap();

        let mut manual = board(0, soup);
        for _ in 0..n {
            manual.next_generation();
        }
        prop_assert_eq!(ran.generation(), manual.generation());
        prop_assert_eq!(ran.cells(), manual.cells());
    }
}
