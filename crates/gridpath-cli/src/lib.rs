//! gridpath CLI library.
//!
//! This crate provides command-line interface utilities for the gridpath
//! pathfinder: argument parsing helpers, terminal styling and output
//! formatting.

pub mod args;
pub mod output;
pub mod terminal;
