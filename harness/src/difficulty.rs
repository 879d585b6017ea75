//! Maze difficulty score.

use colormaze_kernel::cell::Cell;
use colormaze_kernel::direction::Direction;
use colormaze_kernel::world::{Position, World};

/// `10 * open_cells / max(color_goal, 1)`, in thousandths.
///
/// An open cell is a non-wall cell with no wall orthogonally adjacent to
/// it. The grid edge does not count as a wall. Higher scores mean more room
/// for slides to overshoot.
#[must_use]
pub fn difficulty_score(world: &World) -> u64 {
    let open = open_cells(world);
    open * 10_000 / world.color_goal().max(1)
}

/// Non-wall cells with no adjacent wall.
#[must_use]
pub fn open_cells(world: &World) -> u64 {
    let mut open = 0;
    for row in 0..world.rows() {
        for col in 0..world.cols() {
            let here = Position::new(row, col);
            if world.cell(here) == Some(Cell::Wall) {
                continue;
            }
            let walled = Direction::ALL.into_iter().any(|direction| {
                neighbor(here, direction).and_then(|p| world.cell(p)) == Some(Cell::Wall)
            });
            if !walled {
                open += 1;
            }
        }
    }
    open
}

fn neighbor(pos: Position, direction: Direction) -> Option<Position> {
    let (dr, dc) = direction.delta();
    Some(Position::new(
        pos.row.checked_add_signed(dr)?,
        pos.col.checked_add_signed(dc)?,
    ))
}
