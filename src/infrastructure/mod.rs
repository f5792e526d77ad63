//! Infrastructure layer - External concerns
//!
//! This layer contains:
//! - Config: Configuration loading
//! - Puzzle: HTTP client for the puzzle API
//! - Adapters: Chat gateway integrations (Discord, console)

pub mod config;
pub mod puzzle;
pub mod adapters;
