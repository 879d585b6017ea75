//! End-to-end runner: level → search → analysis → report.
//!
//! # Pipeline
//!
//! ```text
//! parse_level() → difficulty_score() → run_search_with_policy()
//!   → analyze() → RunReport → encode()
//! ```

use tracing::info;

use colormaze_kernel::world::World;
use colormaze_search::analysis::analyze;
use colormaze_search::error::SearchError;
use colormaze_search::heuristic::HeuristicKind;
use colormaze_search::policy::SearchPolicy;
use colormaze_search::search::run_search_with_policy;

use crate::canon::CanonError;
use crate::difficulty::difficulty_score;
use crate::level::LevelParseError;
use crate::levels::level_by_name;
use crate::report::RunReport;

/// Heuristic and search policy for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub heuristic: HeuristicKind,
    pub policy: SearchPolicy,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            heuristic: HeuristicKind::Admissible,
            policy: SearchPolicy::default(),
        }
    }
}

impl RunConfig {
    #[must_use]
    pub fn with_heuristic(heuristic: HeuristicKind) -> Self {
        Self {
            heuristic,
            ..Self::default()
        }
    }
}

/// Error during a harness run.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RunError {
    #[error("unknown level: {name}")]
    UnknownLevel { name: String },
    #[error("level: {0}")]
    Level(#[from] LevelParseError),
    #[error("search: {0}")]
    Search(#[from] SearchError),
    #[error("report: {0}")]
    Canon(#[from] CanonError),
}

/// Solve `world` under `config` and summarize the run.
///
/// # Errors
///
/// Returns [`RunError::Search`] if the search fails (unsolvable, budget
/// exhausted, invalid policy).
pub fn run_level(world: World, config: &RunConfig) -> Result<RunReport, RunError> {
    let rows = world.rows();
    let cols = world.cols();
    let color_goal = world.color_goal();
    let difficulty_milli = difficulty_score(&world);
    let root_fingerprint = world.fingerprint();

    let result = run_search_with_policy(world, &config.heuristic, &config.policy)?;
    let verdict = analyze(&result.terminal_node, &config.heuristic);
    info!(
        heuristic = config.heuristic.as_str(),
        cost = result.solution_cost(),
        admissible = verdict.is_admissible,
        monotonic = verdict.is_monotonic,
        "run complete"
    );

    Ok(RunReport {
        heuristic: config.heuristic,
        policy: config.policy.clone(),
        rows,
        cols,
        color_goal,
        difficulty_milli,
        root_fingerprint,
        goal_fingerprint: result.terminal_node.world.fingerprint(),
        actions: result.actions(),
        solution_cost: result.solution_cost(),
        stats: result.stats,
        verdict,
    })
}

/// Parse `text` and run it.
///
/// # Errors
///
/// As [`run_level`], plus [`RunError::Level`] for malformed text.
pub fn run_level_text(text: &str, config: &RunConfig) -> Result<RunReport, RunError> {
    run_level(crate::level::parse_level(text)?, config)
}

/// Run a built-in fixture by name.
///
/// # Errors
///
/// As [`run_level`], plus [`RunError::UnknownLevel`].
pub fn run_named_level(name: &str, config: &RunConfig) -> Result<RunReport, RunError> {
    let level = level_by_name(name).ok_or_else(|| RunError::UnknownLevel {
        name: name.to_string(),
    })?;
    info!(level = level.name, "running fixture");
    run_level(level.world()?, config)
}
