//! Heuristic analyzer lock tests.

use colormaze_search::analysis::{analyze, analyze_world};
use colormaze_search::heuristic::{HeuristicKind, NearestEmpty, PenalizedRemaining};
use colormaze_search::search::run_search;
use lock_tests::world_helpers::{solvable_levels, world};

#[test]
fn consistent_heuristics_pass_on_every_fixture() {
    for level in solvable_levels() {
        for kind in [HeuristicKind::Admissible, HeuristicKind::RemainingCells] {
            let result = run_search(level.world().unwrap(), &kind).unwrap();
            let verdict = analyze(&result.terminal_node, &kind);
            assert!(verdict.is_admissible, "{} under {kind}: {verdict:?}", level.name);
            assert!(verdict.is_monotonic, "{} under {kind}: {verdict:?}", level.name);
            assert_eq!(verdict.solution_cost, result.solution_cost());
            assert_eq!(verdict.states_checked, result.actions().len());
        }
    }
}

#[test]
fn penalized_heuristic_is_caught_after_a_colored_slide() {
    // The first slide only crosses colored cells, so the penalty term
    // overshoots what is left to pay.
    let result = run_search(world(&["X X 0", "S C C"]), &PenalizedRemaining).unwrap();
    let verdict = analyze(&result.terminal_node, &PenalizedRemaining);
    assert!(!verdict.is_admissible);
    assert!(!verdict.is_monotonic);
}

#[test]
fn verdict_depends_on_the_heuristic_not_the_path() {
    // Same path, judged by two heuristics.
    let result = run_search(world(&["X X 0", "S C C"]), &NearestEmpty).unwrap();
    let strict = analyze(&result.terminal_node, &NearestEmpty);
    let penalized = analyze(&result.terminal_node, &PenalizedRemaining);
    assert!(strict.is_admissible && strict.is_monotonic);
    assert!(!penalized.is_admissible);
}

#[test]
fn analyzing_in_place_rewinds_the_world() {
    let initial = world(&["S 0 0 X", "X X 0 X", "0 0 0 0", "0 X X 0"]);
    let result = run_search(initial.clone(), &HeuristicKind::Admissible).unwrap();
    let mut w = result.terminal_node.world.clone();
    let verdict = analyze_world(&mut w, &HeuristicKind::Admissible);
    assert!(verdict.is_admissible);
    assert_eq!(w, initial);
    assert!(w.history().is_empty());
}
