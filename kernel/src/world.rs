//! `World`: the sliding color maze with an exact undo log.
//!
//! # Cost model
//!
//! Every cell the agent enters costs one unit: entering an `Empty` cell
//! colors it, entering a `Colored` cell counts as an extra traversal. The
//! agent's starting cell is colored for free, hence
//! `cost == extra_traversals + colored_count - 1`.
//!
//! # Equality semantics
//!
//! `World` derives `Eq` over everything including the move history. Search
//! dedup must NOT use it; use [`World::state_key`] or
//! [`World::configuration_key`] instead, which ignore history.

use std::fmt;

use crate::cell::{Cell, AGENT_SYMBOL};
use crate::direction::Direction;
use crate::error::ConfigurationError;
use crate::hash::{canonical_hash, ContentHash, DOMAIN_WORLD_STATE};

/// A `(row, col)` grid coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Manhattan distance to `other`.
    #[must_use]
    pub const fn manhattan(self, other: Self) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One cell entered during a move, with its state before the move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TouchedCell {
    index: usize,
    prior: Cell,
}

/// Undo record for one applied move.
///
/// Holds every entered cell in entry order together with its prior state,
/// plus the agent position before the move. Replaying the list in reverse
/// restores the world exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRecord {
    direction: Direction,
    prior_agent: Position,
    touched: Vec<TouchedCell>,
}

impl MoveRecord {
    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    #[must_use]
    pub const fn prior_agent(&self) -> Position {
        self.prior_agent
    }

    /// Number of cells entered; equals the cost of the move.
    #[must_use]
    pub fn cells_entered(&self) -> usize {
        self.touched.len()
    }

    /// Number of cells this move colored.
    #[must_use]
    pub fn cells_colored(&self) -> usize {
        self.touched
            .iter()
            .filter(|t| t.prior == Cell::Empty)
            .count()
    }
}

/// Hashable identity of a world state, independent of how it was reached.
///
/// `extra_traversals` is `None` for configuration keys, which identify a
/// state by what is on the board only.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StateKey {
    cells: Vec<Cell>,
    agent: Position,
    empty_count: u64,
    colored_count: u64,
    extra_traversals: Option<u64>,
}

/// The grid world: cells, agent, running counts and the undo log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct World {
    rows: usize,
    cols: usize,
    /// Row-major, `rows * cols` cells.
    cells: Vec<Cell>,
    agent: Position,
    empty_count: u64,
    colored_count: u64,
    extra_traversals: u64,
    color_goal: u64,
    history: Vec<MoveRecord>,
}

impl World {
    /// Build a world from a rectangular grid of level symbols.
    ///
    /// `S` marks the agent (its cell starts colored), `C` a colored cell,
    /// `0` an empty cell and `X` a wall.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError`] for an empty or ragged grid, a missing
    /// or duplicated agent, or any other symbol.
    pub fn from_symbols<R: AsRef<[char]>>(grid: &[R]) -> Result<Self, ConfigurationError> {
        let cols = grid.first().map_or(0, |r| r.as_ref().len());
        if cols == 0 {
            return Err(ConfigurationError::EmptyGrid);
        }

        let mut cells = Vec::with_capacity(grid.len() * cols);
        let mut agent: Option<Position> = None;
        let mut empty_count = 0u64;
        let mut colored_count = 0u64;

        for (row, symbols) in grid.iter().enumerate() {
            let symbols = symbols.as_ref();
            if symbols.len() != cols {
                return Err(ConfigurationError::RaggedRow {
                    row,
                    expected: cols,
                    found: symbols.len(),
                });
            }
            for (col, &symbol) in symbols.iter().enumerate() {
                let cell = if symbol == AGENT_SYMBOL {
                    let here = Position::new(row, col);
                    if let Some(first) = agent {
                        return Err(ConfigurationError::MultipleAgents {
                            first,
                            second: here,
                        });
                    }
                    agent = Some(here);
                    Cell::Colored
                } else {
                    Cell::from_symbol(symbol).ok_or(ConfigurationError::UnrecognizedSymbol {
                        row,
                        col,
                        symbol,
                    })?
                };
                match cell {
                    Cell::Empty => empty_count += 1,
                    Cell::Colored => colored_count += 1,
                    Cell::Wall => {}
                }
                cells.push(cell);
            }
        }

        let agent = agent.ok_or(ConfigurationError::NoAgent)?;

        Ok(Self {
            rows: grid.len(),
            cols,
            cells,
            agent,
            empty_count,
            colored_count,
            extra_traversals: 0,
            color_goal: empty_count + colored_count,
            history: Vec::new(),
        })
    }

    /// Slide the agent in `direction` as far as it can go.
    ///
    /// Returns `false` without touching anything if the first step is off
    /// the grid or into a wall. Otherwise colors every empty cell entered,
    /// counts every colored cell entered as an extra traversal, records an
    /// undo entry and returns `true`.
    pub fn apply_move(&mut self, direction: Direction) -> bool {
        let Some(mut next) = self.step(self.agent, direction) else {
            return false;
        };

        let prior_agent = self.agent;
        let mut touched = Vec::new();
        loop {
            let index = self.index(next);
            let prior = self.cells[index];
            debug_assert!(prior.is_passable(), "slid into a wall at {next}");
            if prior == Cell::Empty {
                self.cells[index] = Cell::Colored;
                self.empty_count -= 1;
                self.colored_count += 1;
            } else {
                self.extra_traversals += 1;
            }
            touched.push(TouchedCell { index, prior });
            self.agent = next;

            match self.step(next, direction) {
                Some(p) => next = p,
                None => break,
            }
        }

        self.history.push(MoveRecord {
            direction,
            prior_agent,
            touched,
        });
        true
    }

    /// Revert the most recent move. Returns `false` if there is none.
    pub fn undo_move(&mut self) -> bool {
        let Some(record) = self.history.pop() else {
            return false;
        };
        for t in record.touched.iter().rev() {
            if t.prior == Cell::Empty {
                self.cells[t.index] = Cell::Empty;
                self.empty_count += 1;
                self.colored_count -= 1;
            } else {
                self.extra_traversals -= 1;
            }
        }
        self.agent = record.prior_agent;
        true
    }

    /// Path cost so far: cells entered since the initial configuration,
    /// counting pre-colored cells as if the agent had colored them.
    #[must_use]
    pub fn cost(&self) -> u64 {
        (self.extra_traversals + self.colored_count).saturating_sub(1)
    }

    /// True once no empty cell remains.
    #[must_use]
    pub fn goal_reached(&self) -> bool {
        self.empty_count == 0
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[must_use]
    pub fn agent_position(&self) -> Position {
        self.agent
    }

    #[must_use]
    pub fn empty_count(&self) -> u64 {
        self.empty_count
    }

    #[must_use]
    pub fn colored_count(&self) -> u64 {
        self.colored_count
    }

    #[must_use]
    pub fn extra_traversals(&self) -> u64 {
        self.extra_traversals
    }

    /// Number of cells that must be colored for the goal; constant.
    #[must_use]
    pub fn color_goal(&self) -> u64 {
        self.color_goal
    }

    /// The cell at `pos`, or `None` if it is off the grid.
    #[must_use]
    pub fn cell(&self, pos: Position) -> Option<Cell> {
        (pos.row < self.rows && pos.col < self.cols).then(|| self.cells[self.index(pos)])
    }

    /// Row-major cell slice.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// The undo log, oldest move first.
    #[must_use]
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// Applied directions, oldest first.
    #[must_use]
    pub fn actions(&self) -> Vec<Direction> {
        self.history.iter().map(MoveRecord::direction).collect()
    }

    /// Manhattan distance from the agent to the nearest empty cell.
    #[must_use]
    pub fn nearest_empty_distance(&self) -> Option<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c == Cell::Empty)
            .map(|(i, _)| self.agent.manhattan(self.position(i)))
            .min()
    }

    /// Full state identity: grid, agent, counts and extra traversals.
    #[must_use]
    pub fn state_key(&self) -> StateKey {
        StateKey {
            extra_traversals: Some(self.extra_traversals),
            ..self.configuration_key()
        }
    }

    /// Board identity: grid, agent and counts, without extra traversals.
    ///
    /// Two worlds with equal configuration keys differ at most in cost.
    #[must_use]
    pub fn configuration_key(&self) -> StateKey {
        StateKey {
            cells: self.cells.clone(),
            agent: self.agent,
            empty_count: self.empty_count,
            colored_count: self.colored_count,
            extra_traversals: None,
        }
    }

    /// Domain-separated content hash of the full state identity.
    #[must_use]
    pub fn fingerprint(&self) -> ContentHash {
        let mut data = Vec::with_capacity(self.cells.len() + 7 * 8);
        for v in [self.rows as u64, self.cols as u64] {
            data.extend_from_slice(&v.to_le_bytes());
        }
        data.extend(self.cells.iter().map(|c| c.to_byte()));
        for v in [
            self.agent.row as u64,
            self.agent.col as u64,
            self.empty_count,
            self.colored_count,
            self.extra_traversals,
        ] {
            data.extend_from_slice(&v.to_le_bytes());
        }
        canonical_hash(DOMAIN_WORLD_STATE, &data)
    }

    /// Plain-text snapshot: one line per row, space-separated symbols, the
    /// agent shown as `S`.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.cells.len() * 2);
        for row in 0..self.rows {
            if row > 0 {
                out.push('\n');
            }
            for col in 0..self.cols {
                if col > 0 {
                    out.push(' ');
                }
                let pos = Position::new(row, col);
                if pos == self.agent {
                    out.push(AGENT_SYMBOL);
                } else {
                    out.push(self.cells[self.index(pos)].symbol());
                }
            }
        }
        out
    }

    fn index(&self, pos: Position) -> usize {
        pos.row * self.cols + pos.col
    }

    fn position(&self, index: usize) -> Position {
        Position::new(index / self.cols, index % self.cols)
    }

    /// The neighbour of `from` in `direction`, if it is on the grid and passable.
    fn step(&self, from: Position, direction: Direction) -> Option<Position> {
        let (dr, dc) = direction.delta();
        let next = Position::new(
            from.row.checked_add_signed(dr)?,
            from.col.checked_add_signed(dc)?,
        );
        self.cell(next)
            .filter(|c| c.is_passable())
            .map(|_| next)
    }
}

impl fmt::Display for World {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
