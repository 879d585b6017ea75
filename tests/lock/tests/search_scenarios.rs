//! Search driver lock tests over the fixture levels.

use colormaze_kernel::direction::Direction;
use colormaze_search::error::SearchError;
use colormaze_search::frontier::{FrontierUpdate, IndexedFrontier};
use colormaze_search::heuristic::{HeuristicKind, RemainingCells};
use colormaze_search::node::SearchNode;
use colormaze_search::policy::{DedupKey, SearchPolicy};
use colormaze_search::search::{run_search, run_search_with_policy, SearchResult};
use lock_tests::world_helpers::{solvable_levels, unsolvable_levels, world};

fn assert_sane_bounds(name: &str, result: &SearchResult) {
    let stats = &result.stats;
    assert!(
        stats.max_frontier_size as u64 <= 1 + 3 * stats.searches_done,
        "{name}: frontier grew faster than expansions allow: {stats:?}"
    );
    assert!(stats.final_frontier_size <= stats.max_frontier_size, "{name}: {stats:?}");
    assert!(stats.successors_generated <= 4 * stats.searches_done, "{name}: {stats:?}");
}

#[test]
fn consistent_heuristics_find_the_optimal_cost() {
    for level in solvable_levels() {
        for kind in [HeuristicKind::Admissible, HeuristicKind::RemainingCells] {
            let result = run_search(level.world().unwrap(), &kind).unwrap();
            assert_eq!(
                Some(result.solution_cost()),
                level.optimal_cost,
                "{} under {kind}",
                level.name
            );
            assert!(result.terminal_node.is_goal());
            assert_sane_bounds(level.name, &result);
        }
    }
}

#[test]
fn replaying_the_actions_reaches_the_goal_at_the_reported_cost() {
    for level in solvable_levels() {
        for kind in HeuristicKind::ALL {
            let result = run_search(level.world().unwrap(), &kind).unwrap();
            let mut replay = level.world().unwrap();
            for direction in result.actions() {
                assert!(replay.apply_move(direction), "{}: {direction} blocked", level.name);
            }
            assert!(replay.goal_reached(), "{} under {kind}", level.name);
            assert_eq!(replay.cost(), result.solution_cost());
            assert_eq!(replay.fingerprint(), result.terminal_node.world.fingerprint());
        }
    }
}

#[test]
fn unsolvable_levels_exhaust_the_frontier() {
    for level in unsolvable_levels() {
        for kind in HeuristicKind::ALL {
            let err = run_search(level.world().unwrap(), &kind).unwrap_err();
            assert!(
                matches!(err, SearchError::Unsolvable { searches_done, .. } if searches_done > 0),
                "{} under {kind}: expected Unsolvable, got {err:?}",
                level.name
            );
        }
    }
}

#[test]
fn full_state_dedup_agrees_on_optimal_cost() {
    let policy = SearchPolicy {
        dedup_key: DedupKey::FullState,
        ..SearchPolicy::default()
    };
    for level in solvable_levels() {
        let result =
            run_search_with_policy(level.world().unwrap(), &RemainingCells, &policy).unwrap();
        assert_eq!(Some(result.solution_cost()), level.optimal_cost, "{}", level.name);
    }
}

#[test]
fn budget_below_need_is_exceeded() {
    let full = run_search(world(&["S 0 0 X", "X X 0 X", "0 0 0 0", "0 X X 0"]), &RemainingCells)
        .unwrap();
    let needed = full.stats.searches_done;
    assert!(needed > 1);

    let short = SearchPolicy {
        max_expansions: Some(needed - 1),
        ..SearchPolicy::default()
    };
    let err = run_search_with_policy(
        world(&["S 0 0 X", "X X 0 X", "0 0 0 0", "0 X X 0"]),
        &RemainingCells,
        &short,
    )
    .unwrap_err();
    assert_eq!(err, SearchError::ExpansionBudgetExceeded { budget: needed - 1 });

    let exact = SearchPolicy {
        max_expansions: Some(needed),
        ..SearchPolicy::default()
    };
    let result = run_search_with_policy(
        world(&["S 0 0 X", "X X 0 X", "0 0 0 0", "0 X X 0"]),
        &RemainingCells,
        &exact,
    )
    .unwrap();
    assert_eq!(result.stats, full.stats);
}

#[test]
fn hook_statistics_are_locked() {
    for kind in HeuristicKind::ALL {
        let result = run_search(world(&["X X 0", "S C C"]), &kind).unwrap();
        assert_eq!(result.actions(), vec![Direction::Right, Direction::Up]);
        assert_eq!(result.stats.searches_done, 2, "{kind}");
        assert_eq!(result.stats.max_frontier_size, 2, "{kind}");
        assert_eq!(result.stats.final_frontier_size, 1, "{kind}");
        assert_eq!(result.stats.successors_generated, 3, "{kind}");
    }
}

#[test]
fn frontier_keeps_the_better_offer_for_a_state() {
    // One state offered three times: the live entry only ever moves to a
    // strictly lower priority.
    let root = SearchNode::root(world(&["S 0", "0 0"]), DedupKey::Configuration);
    let via_right = root
        .successor(Direction::Right, &RemainingCells, DedupKey::Configuration)
        .unwrap();
    let mut frontier = IndexedFrontier::new();
    assert_eq!(frontier.insert_or_update(via_right.clone()), FrontierUpdate::Inserted);

    let mut costlier = via_right.clone();
    costlier.priority += 4;
    assert_eq!(frontier.insert_or_update(costlier), FrontierUpdate::KeptExisting);
    assert_eq!(frontier.priority_of(via_right.key()), Some(via_right.priority));

    let mut cheaper = via_right.clone();
    cheaper.priority -= 1;
    assert_eq!(frontier.insert_or_update(cheaper), FrontierUpdate::Replaced);
    assert_eq!(frontier.priority_of(via_right.key()), Some(via_right.priority - 1));
    assert_eq!(frontier.len(), 1);
}
