//! Shared helpers for colormaze benchmark suites.

use std::collections::{HashSet, VecDeque};

use colormaze_harness::level::parse_level;
use colormaze_kernel::direction::Direction;
use colormaze_kernel::world::World;
use colormaze_search::heuristic::RemainingCells;
use colormaze_search::node::SearchNode;
use colormaze_search::policy::DedupKey;

/// Level text for a serpentine corridor `width` cells wide with `bends`
/// turns.
///
/// Even rows are fully open; odd rows are walls with a single gap that
/// alternates between the right and left edge, so a greedy sweep
/// (right, down, left, down, ...) colors every cell.
#[must_use]
pub fn snake_text(bends: usize, width: usize) -> String {
    let width = width.max(2);
    let mut rows = Vec::with_capacity(2 * bends + 1);
    for row in 0..=2 * bends {
        let symbols: Vec<&str> = (0..width)
            .map(|col| {
                if row == 0 && col == 0 {
                    "S"
                } else if row % 2 == 0 {
                    "0"
                } else {
                    let gap = if (row / 2) % 2 == 0 { width - 1 } else { 0 };
                    if col == gap {
                        "0"
                    } else {
                        "X"
                    }
                }
            })
            .collect();
        rows.push(symbols.join(" "));
    }
    rows.join("\n")
}

/// Parsed [`snake_text`].
///
/// # Panics
///
/// Never for the generated text; benchmark setup failures are fatal.
#[must_use]
pub fn snake_world(bends: usize, width: usize) -> World {
    parse_level(&snake_text(bends, width)).expect("snake level parses")
}

/// Collect `n` search nodes with pairwise distinct full-state keys by
/// breadth-first expansion from `world`.
///
/// Full-state keys include extra traversals, so any world with at least
/// one legal move yields an unbounded supply.
#[must_use]
pub fn distinct_nodes(world: World, n: usize) -> Vec<SearchNode> {
    let dedup = DedupKey::FullState;
    let mut seen = HashSet::new();
    let mut queue = VecDeque::from([SearchNode::root(world, dedup)]);
    let mut out = Vec::with_capacity(n);
    while out.len() < n {
        let Some(node) = queue.pop_front() else {
            break;
        };
        if !seen.insert(node.key().clone()) {
            continue;
        }
        for direction in Direction::ALL {
            if let Some(next) = node.successor(direction, &RemainingCells, dedup) {
                queue.push_back(next);
            }
        }
        out.push(node);
    }
    out
}
