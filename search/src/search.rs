//! Search entry point and expansion loop.

use tracing::{debug, info, trace};

use colormaze_kernel::direction::Direction;
use colormaze_kernel::world::World;

use crate::error::SearchError;
use crate::frontier::IndexedFrontier;
use crate::heuristic::Heuristic;
use crate::node::SearchNode;
use crate::policy::SearchPolicy;
use crate::visited::BestCostTable;

/// Counters collected over one search run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes expanded (successors generated).
    pub searches_done: u64,
    /// Largest live frontier size observed.
    pub max_frontier_size: usize,
    /// Live frontier size when the goal was popped.
    pub final_frontier_size: usize,
    /// Popped nodes discarded because their state was already expanded at
    /// an equal or lower cost.
    pub duplicates_skipped: u64,
    /// Valid successors produced across all expansions.
    pub successors_generated: u64,
}

/// A successful search: the goal node and the run's counters.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The first goal node popped from the frontier.
    pub terminal_node: SearchNode,
    pub stats: SearchStats,
}

impl SearchResult {
    /// Cost of the solution path.
    #[must_use]
    pub fn solution_cost(&self) -> u64 {
        self.terminal_node.path_cost
    }

    /// Moves from the initial world to the goal.
    #[must_use]
    pub fn actions(&self) -> Vec<Direction> {
        self.terminal_node.world.actions()
    }
}

/// Run A* from `initial` under the default policy.
///
/// # Errors
///
/// Returns [`SearchError::Unsolvable`] if the frontier empties before every
/// cell is colored.
pub fn run_search(initial: World, heuristic: &dyn Heuristic) -> Result<SearchResult, SearchError> {
    run_search_with_policy(initial, heuristic, &SearchPolicy::default())
}

/// Run A* from `initial` under `policy`.
///
/// The goal test happens when a node is popped, not when it is generated.
/// Moves are tried in [`Direction::ALL`] order and frontier ties pop FIFO,
/// so a fixed input always produces the same expansion sequence.
///
/// # Errors
///
/// - [`SearchError::InvalidPolicy`] if the policy fails validation.
/// - [`SearchError::ExpansionBudgetExceeded`] if the budget runs out first.
/// - [`SearchError::Unsolvable`] if the frontier is exhausted.
pub fn run_search_with_policy(
    initial: World,
    heuristic: &dyn Heuristic,
    policy: &SearchPolicy,
) -> Result<SearchResult, SearchError> {
    policy.validate()?;

    let mut frontier = IndexedFrontier::new();
    let mut best_costs = BestCostTable::new();
    let mut stats = SearchStats {
        max_frontier_size: 1,
        ..SearchStats::default()
    };

    info!(
        heuristic = heuristic.name(),
        dedup = policy.dedup_key.as_str(),
        color_goal = initial.color_goal(),
        empty = initial.empty_count(),
        "search started"
    );
    frontier.insert_or_update(SearchNode::root(initial, policy.dedup_key));

    while !frontier.is_empty() {
        let current = frontier.extract_min()?;

        if current.is_goal() {
            stats.final_frontier_size = frontier.len();
            info!(
                cost = current.path_cost,
                searches_done = stats.searches_done,
                max_frontier_size = stats.max_frontier_size,
                final_frontier_size = stats.final_frontier_size,
                "goal reached"
            );
            return Ok(SearchResult {
                terminal_node: current,
                stats,
            });
        }

        if !best_costs.record_if_better(current.key(), current.path_cost) {
            stats.duplicates_skipped += 1;
            debug!(
                cost = current.path_cost,
                priority = current.priority,
                "skipping already expanded state"
            );
            continue;
        }

        if let Some(budget) = policy.max_expansions {
            if stats.searches_done >= budget {
                info!(budget, "expansion budget exhausted");
                return Err(SearchError::ExpansionBudgetExceeded { budget });
            }
        }

        stats.searches_done += 1;
        debug!(
            expansion = stats.searches_done,
            priority = current.priority,
            cost = current.path_cost,
            empty = current.world.empty_count(),
            "expanding node"
        );

        for direction in Direction::ALL {
            let Some(successor) = current.successor(direction, heuristic, policy.dedup_key)
            else {
                continue;
            };
            stats.successors_generated += 1;
            let update = frontier.insert_or_update(successor);
            trace!(%direction, ?update, "successor");
        }
        stats.max_frontier_size = stats.max_frontier_size.max(frontier.len());
    }

    info!(
        searches_done = stats.searches_done,
        max_frontier_size = stats.max_frontier_size,
        "frontier exhausted"
    );
    Err(SearchError::Unsolvable {
        searches_done: stats.searches_done,
        max_frontier_size: stats.max_frontier_size,
    })
}
