//! Level text parsing.
//!
//! A level is one grid row per non-blank line, cells separated by
//! whitespace, each cell a single symbol (`S`, `C`, `0`, `X`). Symbol
//! validation and grid shape checks are left to
//! [`World::from_symbols`].

use colormaze_kernel::error::ConfigurationError;
use colormaze_kernel::world::World;

/// Failure turning level text into a world.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LevelParseError {
    /// A token on `line` (1-based) is longer than one character.
    #[error("line {line}: token {token:?} is not a single symbol")]
    MultiCharToken { line: usize, token: String },
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
}

/// Split level text into a symbol grid without validating it.
///
/// # Errors
///
/// Returns [`LevelParseError::MultiCharToken`] for any token that is not a
/// single character.
pub fn parse_grid(text: &str) -> Result<Vec<Vec<char>>, LevelParseError> {
    let mut grid = Vec::new();
    for (index, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let row = line
            .split_whitespace()
            .map(|token| {
                let mut chars = token.chars();
                match (chars.next(), chars.next()) {
                    (Some(symbol), None) => Ok(symbol),
                    _ => Err(LevelParseError::MultiCharToken {
                        line: index + 1,
                        token: token.to_string(),
                    }),
                }
            })
            .collect::<Result<Vec<char>, _>>()?;
        grid.push(row);
    }
    Ok(grid)
}

/// Parse level text into a world.
///
/// # Errors
///
/// Returns [`LevelParseError`] for malformed tokens or an invalid grid.
pub fn parse_level(text: &str) -> Result<World, LevelParseError> {
    let grid = parse_grid(text)?;
    Ok(World::from_symbols(&grid)?)
}
