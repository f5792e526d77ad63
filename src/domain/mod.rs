//! Domain layer - Core business logic with no external dependencies
//!
//! This layer contains:
//! - Entities: Core business objects (Puzzle, User, Message)
//! - Traits: Abstractions for infrastructure (Bot)

pub mod entities;
pub mod traits;
