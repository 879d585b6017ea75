//! Colormaze Search: deterministic A* over the color maze, plus a post-hoc
//! checker for the heuristic that guided it.
//!
//! This crate depends only on `colormaze_kernel`; it does NOT depend on
//! `colormaze_harness`.
//!
//! # Crate dependency graph
//!
//! ```text
//! colormaze_kernel  ←  colormaze_search  ←  colormaze_harness
//! (world model)        (frontier, A*)        (levels, runner, reports)
//! ```
//!
//! # Key types
//!
//! - [`node::SearchNode`] -- owned world snapshot with path cost and priority
//! - [`frontier::IndexedFrontier`] -- lazy-deletion priority queue keyed by state
//! - [`heuristic::Heuristic`] -- cost-to-go estimate over a read-only world
//! - [`policy::SearchPolicy`] -- expansion budget and dedup key selection
//! - [`search::run_search`] -- the A* driver
//! - [`analysis::analyze`] -- admissibility / monotonicity check along a solution

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod analysis;
pub mod error;
pub mod frontier;
pub mod heuristic;
pub mod node;
pub mod policy;
pub mod search;
pub mod visited;
