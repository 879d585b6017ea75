//! Colormaze Kernel: the world model for the sliding color maze.
//!
//! # API Surface
//!
//! - [`world::World::from_symbols`] -- build a world from a validated symbol grid
//! - [`world::World::apply_move`] -- slide the agent, coloring cells on the way
//! - [`world::World::undo_move`] -- exactly invert the most recent move
//!
//! # Module Dependency Direction
//!
//! `cell`, `direction` ← `world` ← `hash`
//!
//! One-way only. The kernel has no knowledge of search, heuristics or reports.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod cell;
pub mod direction;
pub mod error;
pub mod hash;
pub mod world;
