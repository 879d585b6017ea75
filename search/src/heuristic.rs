//! Cost-to-go estimates.
//!
//! A heuristic is a pure function of a read-only [`World`]. It must be
//! callable on any reachable state, including states rebuilt by
//! `undo_move` during analysis.

use std::fmt;
use std::str::FromStr;

use colormaze_kernel::world::World;

/// A non-negative estimate of the remaining cost to the goal.
pub trait Heuristic {
    /// Estimate the remaining cost from `world`.
    fn estimate(&self, world: &World) -> u64;

    /// Short name for logs and reports.
    fn name(&self) -> &str {
        "custom"
    }
}

impl<F> Heuristic for F
where
    F: Fn(&World) -> u64,
{
    fn estimate(&self, world: &World) -> u64 {
        self(world)
    }
}

/// `empty_count + 2 * extra_traversals`.
///
/// Charges twice for traversals the path cost already paid for, so it
/// overestimates as soon as a solution backtracks over colored cells.
#[derive(Debug, Clone, Copy, Default)]
pub struct PenalizedRemaining;

impl Heuristic for PenalizedRemaining {
    fn estimate(&self, world: &World) -> u64 {
        world
            .empty_count()
            .saturating_add(world.extra_traversals().saturating_mul(2))
    }

    fn name(&self) -> &str {
        HeuristicKind::Inadmissible.as_str()
    }
}

/// Distance to the nearest empty cell plus the number of empty cells.
///
/// Every empty cell costs one entry to color. Reaching the first of them
/// from the agent takes at least `d` entries, the last of which is that
/// empty cell itself, so only `d - 1` entries are charged for the approach.
/// Never overestimates.
#[derive(Debug, Clone, Copy, Default)]
pub struct NearestEmpty;

impl Heuristic for NearestEmpty {
    fn estimate(&self, world: &World) -> u64 {
        match world.nearest_empty_distance() {
            Some(d) => (d as u64).saturating_sub(1) + world.empty_count(),
            None => 0,
        }
    }

    fn name(&self) -> &str {
        HeuristicKind::Admissible.as_str()
    }
}

/// The number of empty cells. Admissible and monotonic on every maze.
#[derive(Debug, Clone, Copy, Default)]
pub struct RemainingCells;

impl Heuristic for RemainingCells {
    fn estimate(&self, world: &World) -> u64 {
        world.empty_count()
    }

    fn name(&self) -> &str {
        HeuristicKind::RemainingCells.as_str()
    }
}

/// Selectable built-in heuristic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeuristicKind {
    /// [`PenalizedRemaining`].
    Inadmissible,
    /// [`NearestEmpty`].
    Admissible,
    /// [`RemainingCells`].
    RemainingCells,
}

impl HeuristicKind {
    pub const ALL: [Self; 3] = [Self::Inadmissible, Self::Admissible, Self::RemainingCells];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Inadmissible => "inadmissible",
            Self::Admissible => "admissible",
            Self::RemainingCells => "remaining_cells",
        }
    }
}

impl Heuristic for HeuristicKind {
    fn estimate(&self, world: &World) -> u64 {
        match self {
            Self::Inadmissible => PenalizedRemaining.estimate(world),
            Self::Admissible => NearestEmpty.estimate(world),
            Self::RemainingCells => RemainingCells.estimate(world),
        }
    }

    fn name(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for HeuristicKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error parsing a [`HeuristicKind`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown heuristic: {0:?}")]
pub struct ParseHeuristicError(pub String);

impl FromStr for HeuristicKind {
    type Err = ParseHeuristicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| ParseHeuristicError(s.to_string()))
    }
}
