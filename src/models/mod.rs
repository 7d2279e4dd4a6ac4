//! Data models for the trivia backend.
//!
//! Field names match the JSON contract consumed by the game client.

mod category;
mod question;
mod quiz;

pub use category::*;
pub use question::*;
pub use quiz::*;
