//! Run report and run directory lock tests.

use colormaze_harness::difficulty::difficulty_score;
use colormaze_harness::report::{EncodedReport, DOMAIN_RUN_REPORT};
use colormaze_harness::run_dir::{read_run_dir, write_run_dir, RunDirError, REPORT_FILENAME};
use colormaze_harness::runner::{run_level, run_named_level, RunConfig, RunError};
use colormaze_kernel::hash::canonical_hash;
use colormaze_search::error::SearchError;
use colormaze_search::policy::SearchPolicy;
use lock_tests::world_helpers::{solvable_levels, world};

#[test]
fn every_solvable_fixture_round_trips_through_a_run_dir() {
    let root = tempfile::tempdir().unwrap();
    for level in solvable_levels() {
        let encoded = run_named_level(level.name, &RunConfig::default())
            .unwrap()
            .encode()
            .unwrap();
        let dir = root.path().join(level.name);
        write_run_dir(&encoded, &dir).unwrap();
        let loaded = read_run_dir(&dir).unwrap();
        assert_eq!(loaded, encoded, "{}", level.name);
        assert_eq!(loaded.digest, canonical_hash(DOMAIN_RUN_REPORT, &loaded.bytes));
    }
}

#[test]
fn report_fields_match_the_search() {
    let w = world(&["S 0 0 X", "X X 0 X", "0 0 0 0", "0 X X 0"]);
    let difficulty = difficulty_score(&w);
    let root_fingerprint = w.fingerprint();
    let report = run_level(w, &RunConfig::default()).unwrap();
    assert_eq!(report.solution_cost, 11);
    assert_eq!(report.color_goal, 10);
    assert_eq!((report.rows, report.cols), (4, 4));
    assert_eq!(report.difficulty_milli, difficulty);
    assert_eq!(report.root_fingerprint, root_fingerprint);
    assert_eq!(report.verdict.states_checked, report.actions.len());

    let value = report.to_json_value();
    assert_eq!(value["solution"]["cost"], 11);
    assert_eq!(value["config"]["heuristic"], "admissible");
    assert_eq!(
        value["solution"]["actions"].as_array().unwrap().len(),
        report.actions.len()
    );
}

#[test]
fn budget_failure_reaches_the_caller() {
    let config = RunConfig {
        policy: SearchPolicy {
            max_expansions: Some(1),
            ..SearchPolicy::default()
        },
        ..RunConfig::default()
    };
    let err = run_named_level("zigzag", &config).unwrap_err();
    assert_eq!(
        err,
        RunError::Search(SearchError::ExpansionBudgetExceeded { budget: 1 })
    );
}

#[test]
fn tampered_report_is_rejected() {
    let encoded = run_named_level("hook", &RunConfig::default())
        .unwrap()
        .encode()
        .unwrap();
    let dir = tempfile::tempdir().unwrap();
    write_run_dir(&encoded, dir.path()).unwrap();

    // Re-digesting a forged report does not help unless the digest file is
    // rewritten too.
    let forged = String::from_utf8(encoded.bytes.clone())
        .unwrap()
        .replace("\"is_admissible\":true", "\"is_admissible\":false");
    let forged = EncodedReport::from_bytes(forged.into_bytes());
    assert_ne!(forged.digest, encoded.digest);
    std::fs::write(dir.path().join(REPORT_FILENAME), &forged.bytes).unwrap();

    let err = read_run_dir(dir.path()).unwrap_err();
    assert!(
        matches!(err, RunDirError::DigestMismatch { .. }),
        "expected DigestMismatch, got {err:?}"
    );
}
