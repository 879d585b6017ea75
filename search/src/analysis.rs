//! Post-hoc heuristic check along a discovered solution.
//!
//! The terminal world's undo log is replayed backward. At each ancestor the
//! heuristic is recomputed and compared against the realized solution cost
//! (admissibility) and against the next state toward the goal
//! (monotonicity). The verdict covers that one path only.

use tracing::{debug, warn};

use colormaze_kernel::world::World;

use crate::heuristic::Heuristic;
use crate::node::SearchNode;

/// Result of [`analyze`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeuristicVerdict {
    /// `h + cost` never exceeded the solution cost at any ancestor.
    pub is_admissible: bool,
    /// `h` never dropped by more than the step cost along the path.
    pub is_monotonic: bool,
    /// Cost of the terminal state the replay started from.
    pub solution_cost: u64,
    /// Ancestors examined (one per undone move).
    pub states_checked: usize,
}

/// Check `heuristic` along the path that produced `terminal`.
///
/// The node itself is left untouched; the replay runs on a clone of its
/// world.
#[must_use]
pub fn analyze(terminal: &SearchNode, heuristic: &dyn Heuristic) -> HeuristicVerdict {
    let mut world = terminal.world.clone();
    analyze_world(&mut world, heuristic)
}

/// Check `heuristic` by undoing every move recorded in `world`.
///
/// On return `world` is back at its initial configuration with an empty
/// history.
pub fn analyze_world(world: &mut World, heuristic: &dyn Heuristic) -> HeuristicVerdict {
    let solution_cost = world.cost();
    let mut verdict = HeuristicVerdict {
        is_admissible: true,
        is_monotonic: true,
        solution_cost,
        states_checked: 0,
    };

    // Values at the state one step closer to the goal. The goal itself is
    // treated as h = 0 whatever the heuristic says there.
    let mut later_cost = solution_cost;
    let mut later_h = 0u64;

    while world.undo_move() {
        verdict.states_checked += 1;
        let h = heuristic.estimate(world);
        let cost = world.cost();
        let estimate = h.saturating_add(cost);

        if estimate > solution_cost {
            if verdict.is_admissible {
                warn!(
                    heuristic = heuristic.name(),
                    h,
                    cost,
                    solution_cost,
                    "heuristic overestimates remaining cost"
                );
            }
            verdict.is_admissible = false;
        }
        if estimate > later_cost.saturating_add(later_h) {
            if verdict.is_monotonic {
                warn!(
                    heuristic = heuristic.name(),
                    h,
                    cost,
                    later_h,
                    later_cost,
                    "heuristic drops faster than step cost"
                );
            }
            verdict.is_monotonic = false;
        }

        later_cost = cost;
        later_h = h;
    }

    debug!(
        heuristic = heuristic.name(),
        admissible = verdict.is_admissible,
        monotonic = verdict.is_monotonic,
        states = verdict.states_checked,
        "analysis complete"
    );
    verdict
}
