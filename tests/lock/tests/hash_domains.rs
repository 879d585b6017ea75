//! Hash domain lock tests.
//!
//! - Every domain prefix is unique and null-terminated.
//! - Every domain follows the `COLORMAZE::*::V1\0` naming convention.
//! - Domain literals appear only where they are declared.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use colormaze_harness::report::DOMAIN_RUN_REPORT;
use colormaze_kernel::hash::DOMAIN_WORLD_STATE;

const ALL_DOMAINS: &[&[u8]] = &[DOMAIN_WORLD_STATE, DOMAIN_RUN_REPORT];

#[test]
fn domains_are_unique() {
    let unique: BTreeSet<_> = ALL_DOMAINS.iter().collect();
    assert_eq!(unique.len(), ALL_DOMAINS.len());
}

#[test]
fn domains_follow_naming_convention() {
    for domain in ALL_DOMAINS {
        let text = String::from_utf8_lossy(domain);
        assert!(domain.starts_with(b"COLORMAZE::"), "{text} lacks COLORMAZE:: prefix");
        assert!(domain.ends_with(b"::V1\0"), "{text} is not versioned and null-terminated");
    }
}

#[test]
fn no_raw_domain_literals_outside_declarations() {
    let root = Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .and_then(Path::parent)
        .expect("workspace root exists");
    let allowed = [
        root.join("kernel/src/hash.rs"),
        root.join("harness/src/report.rs"),
    ];

    let mut offenders = Vec::new();
    for crate_dir in ["kernel", "search", "harness"] {
        for path in rust_files(&root.join(crate_dir).join("src")) {
            if allowed.contains(&path) {
                continue;
            }
            let text = std::fs::read_to_string(&path).expect("readable source");
            if text.contains("b\"COLORMAZE::") {
                offenders.push(path.display().to_string());
            }
        }
    }
    assert!(offenders.is_empty(), "raw domain literals in: {offenders:?}");
}

/// Recursive `.rs` file listing.
fn rust_files(dir: &Path) -> Vec<PathBuf> {
    let mut out = Vec::new();
    if let Ok(entries) = std::fs::read_dir(dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                out.extend(rust_files(&path));
            } else if path.extension().is_some_and(|e| e == "rs") {
                out.push(path);
            }
        }
    }
    out
}
