//! Typed search errors.

/// Failure of a search run or of the frontier underneath it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// `extract_min` on a frontier with no live entries. The driver checks
    /// emptiness first, so this never escapes `run_search`.
    #[error("extract from an empty frontier")]
    EmptyFrontier,
    /// The frontier emptied without reaching the goal.
    #[error("frontier exhausted after {searches_done} expansions without coloring every cell")]
    Unsolvable {
        searches_done: u64,
        max_frontier_size: usize,
    },
    /// The policy's expansion budget ran out before the goal was popped.
    #[error("expansion budget of {budget} exhausted before reaching the goal")]
    ExpansionBudgetExceeded { budget: u64 },
    /// The policy is not usable.
    #[error("invalid search policy: {detail}")]
    InvalidPolicy { detail: String },
}
