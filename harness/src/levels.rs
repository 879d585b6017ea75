//! Built-in fixture levels, addressable by name.

use colormaze_kernel::world::World;

use crate::level::{parse_level, LevelParseError};

/// A named maze with its known optimal cost.
#[derive(Debug, Clone, Copy)]
pub struct Level {
    pub name: &'static str,
    pub text: &'static str,
    /// Minimum solution cost, or `None` if the maze cannot be finished.
    pub optimal_cost: Option<u64>,
}

impl Level {
    /// Parse this level into a fresh world.
    ///
    /// # Errors
    ///
    /// Only fails if the fixture text itself is malformed.
    pub fn world(&self) -> Result<World, LevelParseError> {
        parse_level(self.text)
    }
}

/// One slide colors the whole row.
pub const CORRIDOR: Level = Level {
    name: "corridor",
    text: "S 0 0 0",
    optimal_cost: Some(3),
};

/// Reaching the last cell means crossing two pre-colored cells first.
pub const HOOK: Level = Level {
    name: "hook",
    text: "X X 0\nS C C",
    optimal_cost: Some(5),
};

/// Already finished at the start.
pub const DONE: Level = Level {
    name: "done",
    text: "S C",
    optimal_cost: Some(1),
};

/// Two dead ends off a shared row; one of them forces backtracking.
pub const ZIGZAG: Level = Level {
    name: "zigzag",
    text: "S 0 0 X\nX X 0 X\n0 0 0 0\n0 X X 0",
    optimal_cost: Some(11),
};

/// The centre cell is walled in.
pub const RING: Level = Level {
    name: "ring",
    text: "S 0 0 0 0\n0 X X X 0\n0 X 0 X 0\n0 X X X 0\n0 0 0 0 0",
    optimal_cost: None,
};

/// Slides always stop at an edge, so the centre is never entered.
pub const OPEN3: Level = Level {
    name: "open3",
    text: "S 0 0\n0 0 0\n0 0 0",
    optimal_cost: None,
};

/// Every fixture, in a stable order.
pub const ALL_LEVELS: &[Level] = &[CORRIDOR, HOOK, DONE, ZIGZAG, RING, OPEN3];

/// Look up a fixture by name.
#[must_use]
pub fn level_by_name(name: &str) -> Option<&'static Level> {
    ALL_LEVELS.iter().find(|level| level.name == name)
}
