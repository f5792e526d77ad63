//! Application layer - Use cases and business logic
//!
//! This layer contains:
//! - Services: Event logging for the chat listener
//! - Errors: Domain-specific errors

pub mod errors;
pub mod services;
