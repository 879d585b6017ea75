//! Typed construction errors.

use crate::world::Position;

/// A symbol grid could not be turned into a [`crate::world::World`].
///
/// Construction is all-or-nothing: no partially built world is ever returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    /// The grid has no rows or no columns.
    #[error("grid is empty")]
    EmptyGrid,
    /// A row's length differs from the first row's.
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// No agent symbol was found.
    #[error("no agent symbol 'S' found in grid")]
    NoAgent,
    /// More than one agent symbol was found.
    #[error("multiple agent symbols: first at {first}, second at {second}")]
    MultipleAgents { first: Position, second: Position },
    /// A symbol outside `S`, `C`, `0`, `X`.
    #[error("unrecognized symbol {symbol:?} at ({row}, {col})")]
    UnrecognizedSymbol { row: usize, col: usize, symbol: char },
}
