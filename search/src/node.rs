//! Search node type.

use colormaze_kernel::direction::Direction;
use colormaze_kernel::world::{StateKey, World};

use crate::heuristic::Heuristic;
use crate::policy::DedupKey;

/// A world snapshot in the search tree.
///
/// Each node owns its world outright; branching clones it. The world's undo
/// log reaches back to the initial configuration, which is what the
/// analyzer replays.
#[derive(Debug, Clone)]
pub struct SearchNode {
    /// The world after `action` was applied.
    pub world: World,
    /// The move that produced this node (`None` for the root).
    pub action: Option<Direction>,
    /// `world.cost()` at this node.
    pub path_cost: u64,
    /// Frontier ordering value: `path_cost + h(world)`.
    pub priority: u64,
    key: StateKey,
}

impl SearchNode {
    /// The root node wrapping the untouched initial world.
    ///
    /// Its priority is 0: it is the only entry when it is inserted.
    #[must_use]
    pub fn root(world: World, dedup: DedupKey) -> Self {
        let key = dedup.key_of(&world);
        Self {
            path_cost: world.cost(),
            world,
            action: None,
            priority: 0,
            key,
        }
    }

    /// The node reached by sliding in `direction` from this one.
    ///
    /// Returns `None` when the move is blocked; such successors are never
    /// enqueued.
    #[must_use]
    pub fn successor(
        &self,
        direction: Direction,
        heuristic: &dyn Heuristic,
        dedup: DedupKey,
    ) -> Option<Self> {
        let mut world = self.world.clone();
        if !world.apply_move(direction) {
            return None;
        }
        let path_cost = world.cost();
        let priority = path_cost.saturating_add(heuristic.estimate(&world));
        let key = dedup.key_of(&world);
        Some(Self {
            world,
            action: Some(direction),
            path_cost,
            priority,
            key,
        })
    }

    /// Identity used by the frontier and the best-cost table.
    #[must_use]
    pub fn key(&self) -> &StateKey {
        &self.key
    }

    #[must_use]
    pub fn is_goal(&self) -> bool {
        self.world.goal_reached()
    }
}
