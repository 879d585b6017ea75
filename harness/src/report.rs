//! Run report: the auditable summary of one solved level.
//!
//! A [`RunReport`] is rendered to canonical JSON ([`crate::canon`]) and
//! digested under [`DOMAIN_RUN_REPORT`]. Two runs of the same level under
//! the same configuration produce byte-identical reports.

use colormaze_kernel::direction::Direction;
use colormaze_kernel::hash::{canonical_hash, ContentHash};
use colormaze_search::analysis::HeuristicVerdict;
use colormaze_search::heuristic::HeuristicKind;
use colormaze_search::policy::SearchPolicy;
use colormaze_search::search::SearchStats;

use crate::canon::{canonical_json_bytes, CanonError};

/// Domain prefix for run-report digests.
pub const DOMAIN_RUN_REPORT: &[u8] = b"COLORMAZE::RUN_REPORT::V1\0";

/// Schema tag written into every report.
pub const REPORT_SCHEMA_VERSION: &str = "run_report.v1";

/// Everything recorded about one successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub heuristic: HeuristicKind,
    pub policy: SearchPolicy,
    pub rows: usize,
    pub cols: usize,
    pub color_goal: u64,
    /// [`crate::difficulty::difficulty_score`] of the initial world.
    pub difficulty_milli: u64,
    pub root_fingerprint: ContentHash,
    pub goal_fingerprint: ContentHash,
    pub actions: Vec<Direction>,
    pub solution_cost: u64,
    pub stats: SearchStats,
    pub verdict: HeuristicVerdict,
}

/// Canonical report bytes and their digest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedReport {
    pub bytes: Vec<u8>,
    pub digest: ContentHash,
}

impl EncodedReport {
    /// Digest `bytes` as a run report.
    #[must_use]
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        let digest = canonical_hash(DOMAIN_RUN_REPORT, &bytes);
        Self { bytes, digest }
    }
}

impl RunReport {
    /// The report as a JSON value. Keys are emitted sorted by
    /// [`canonical_json_bytes`], not here.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        let actions: Vec<&str> = self.actions.iter().map(|d| d.as_str()).collect();
        serde_json::json!({
            "schema_version": REPORT_SCHEMA_VERSION,
            "config": {
                "heuristic": self.heuristic.as_str(),
                "dedup_key": self.policy.dedup_key.as_str(),
                "max_expansions": self.policy.max_expansions,
            },
            "level": {
                "rows": self.rows,
                "cols": self.cols,
                "color_goal": self.color_goal,
                "difficulty_milli": self.difficulty_milli,
                "root_fingerprint": self.root_fingerprint.as_str(),
            },
            "solution": {
                "actions": actions,
                "cost": self.solution_cost,
                "goal_fingerprint": self.goal_fingerprint.as_str(),
            },
            "stats": {
                "searches_done": self.stats.searches_done,
                "max_frontier_size": self.stats.max_frontier_size,
                "final_frontier_size": self.stats.final_frontier_size,
                "duplicates_skipped": self.stats.duplicates_skipped,
                "successors_generated": self.stats.successors_generated,
            },
            "verdict": {
                "is_admissible": self.verdict.is_admissible,
                "is_monotonic": self.verdict.is_monotonic,
                "states_checked": self.verdict.states_checked,
            },
        })
    }

    /// Canonical bytes plus digest.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if the value holds a non-integer number, which
    /// a well-formed report never does.
    pub fn encode(&self) -> Result<EncodedReport, CanonError> {
        let bytes = canonical_json_bytes(&self.to_json_value())?;
        Ok(EncodedReport::from_bytes(bytes))
    }
}
