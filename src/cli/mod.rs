//! CLI infrastructure for the oxo console game
//!
//! This module provides the command-line interface for playing games,
//! analyzing positions and verifying the search policy.

pub mod commands;
pub mod output;
