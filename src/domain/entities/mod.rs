//! Domain entities - Core business objects with no external dependencies

pub mod user;
pub mod message;
pub mod puzzle;

pub use user::User;
pub use message::Message;
pub use puzzle::{Difficulty, Mode, Puzzle, Seed};
