//! Property-based tests for the line catalog and the game engine.

use std::collections::HashSet;

use four_in_a_row::game::{GameOutcome, GameState, GridSpec, LineCatalog};
use proptest::prelude::*;

/// Any valid grid up to 12x12
fn arb_spec() -> impl Strategy<Value = GridSpec> {
    (2usize..=12)
        .prop_flat_map(|size| (Just(size), 2usize..=size))
        .prop_map(|(size, run)| GridSpec::new(size, run).unwrap())
}

/// A sequence of raw positions, some of them invalid or repeated
fn arb_moves() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(0usize..60, 0..80)
}

proptest! {
    #[test]
    fn prop_catalog_lines_are_straight_and_in_bounds(spec in arb_spec()) {
        let catalog = LineCatalog::generate(spec);
        let n = spec.size();
        prop_assert_eq!(catalog.len(), spec.expected_line_count());

        for line in catalog.lines() {
            let positions = line.positions();
            prop_assert_eq!(positions.len(), spec.run_length());
            let distinct: HashSet<_> = positions.iter().collect();
            prop_assert_eq!(distinct.len(), positions.len());
            prop_assert!(positions.iter().all(|&p| p < n * n));

            // Constant (row, col) step between neighbours: no wrapping
            let coords: Vec<(i64, i64)> = positions
                .iter()
                .map(|&p| ((p / n) as i64, (p % n) as i64))
                .collect();
            let step = (coords[1].0 - coords[0].0, coords[1].1 - coords[0].1);
            prop_assert!(step.0.abs() <= 1 && step.1.abs() <= 1 && step != (0, 0));
            for pair in coords.windows(2) {
                prop_assert_eq!((pair[1].0 - pair[0].0, pair[1].1 - pair[0].1), step);
            }
        }
    }

    #[test]
    fn prop_catalog_has_no_duplicates(spec in arb_spec()) {
        let catalog = LineCatalog::generate(spec);
        let normalized: HashSet<Vec<usize>> = catalog
            .lines()
            .iter()
            .map(|l| {
                let mut p = l.positions().to_vec();
                p.sort_unstable();
                p
            })
            .collect();
        prop_assert_eq!(normalized.len(), catalog.len());
    }

    #[test]
    fn prop_generation_is_deterministic(spec in arb_spec()) {
        prop_assert_eq!(LineCatalog::generate(spec), LineCatalog::generate(spec));
    }

    #[test]
    fn prop_rejected_moves_change_nothing(moves in arb_moves()) {
        let mut state = GameState::new_game();
        for pos in moves {
            let before = state.clone();
            match state.apply_move_mut(pos) {
                Ok(()) => {
                    prop_assert_eq!(state.move_count(), before.move_count() + 1);
                    prop_assert!(!before.is_terminal());
                }
                Err(_) => prop_assert_eq!(&state, &before),
            }
        }
    }

    #[test]
    fn prop_pure_and_in_place_moves_agree(moves in arb_moves()) {
        let mut in_place = GameState::new_game();
        let mut pure = GameState::new_game();
        for pos in moves {
            let a = in_place.apply_move_mut(pos);
            let b = pure.apply_move(pos);
            prop_assert_eq!(a.is_ok(), b.is_ok());
            if let Ok(next) = b {
                pure = next;
            }
            prop_assert_eq!(&in_place, &pure);
        }
    }

    #[test]
    fn prop_outcome_matches_full_scan(moves in arb_moves()) {
        let mut state = GameState::new_game();
        for pos in moves {
            let _ = state.apply_move_mut(pos);
        }
        let scanned = LineCatalog::standard()
            .find_winner(state.board())
            .map(|(player, _)| player);
        match state.outcome() {
            GameOutcome::Won(player) => prop_assert_eq!(scanned, Some(player)),
            GameOutcome::Draw => {
                prop_assert_eq!(scanned, None);
                prop_assert!(state.board().is_full());
            }
            GameOutcome::InProgress => {
                prop_assert_eq!(scanned, None);
                prop_assert!(!state.board().is_full());
            }
        }
    }
}
