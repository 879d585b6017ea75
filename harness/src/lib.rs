//! Colormaze Harness: levels in, auditable run reports out.
//!
//! The harness parses level text, runs the search and the heuristic
//! analyzer, and packages the outcome as a canonical JSON report with a
//! content digest. It does NOT implement search logic; it delegates to
//! `colormaze_search`.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod canon;
pub mod difficulty;
pub mod level;
pub mod levels;
pub mod report;
pub mod run_dir;
pub mod runner;
