//! Shared helpers for the lock tests.

pub mod world_helpers;
