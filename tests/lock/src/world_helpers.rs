//! Builders for small test worlds.

use colormaze_harness::levels::{Level, ALL_LEVELS};
use colormaze_kernel::world::World;

/// Build a world from space-separated rows.
///
/// # Panics
///
/// Panics if the rows do not form a valid level. Test-only.
#[must_use]
pub fn world(rows: &[&str]) -> World {
    colormaze_harness::level::parse_level(&rows.join("\n")).unwrap()
}

/// Fixtures with a known optimal cost.
pub fn solvable_levels() -> impl Iterator<Item = &'static Level> {
    ALL_LEVELS.iter().filter(|l| l.optimal_cost.is_some())
}

/// Fixtures that cannot be finished.
pub fn unsolvable_levels() -> impl Iterator<Item = &'static Level> {
    ALL_LEVELS.iter().filter(|l| l.optimal_cost.is_none())
}
