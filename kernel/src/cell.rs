//! Grid cell states and their level symbols.

/// Symbol marking the agent's starting cell. The cell itself starts colored.
pub const AGENT_SYMBOL: char = 'S';

/// The state of one grid position.
///
/// Walls never change. `Empty` cells flip to `Colored` when the agent slides
/// over them; only `undo_move` flips them back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Cell {
    Wall,
    Empty,
    Colored,
}

impl Cell {
    /// Parse a non-agent cell symbol (`X`, `0`, `C`).
    ///
    /// Returns `None` for anything else, including [`AGENT_SYMBOL`], which is
    /// handled by the world constructor.
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'X' => Some(Self::Wall),
            '0' => Some(Self::Empty),
            'C' => Some(Self::Colored),
            _ => None,
        }
    }

    /// The level symbol for this cell.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Wall => 'X',
            Self::Empty => '0',
            Self::Colored => 'C',
        }
    }

    /// Stable byte tag used in state fingerprints.
    #[must_use]
    pub const fn to_byte(self) -> u8 {
        match self {
            Self::Wall => 0,
            Self::Empty => 1,
            Self::Colored => 2,
        }
    }

    /// Whether the agent may enter this cell.
    #[must_use]
    pub const fn is_passable(self) -> bool {
        !matches!(self, Self::Wall)
    }
}
