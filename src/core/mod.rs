//! Core module - pure game logic with no external dependencies
//!
//! Game rules and the random source live here; zero dependencies on
//! networking, terminals, or I/O.

pub mod game;
pub mod rng;

// Re-export commonly used types
pub use game::GameRound;
pub use rng::SimpleRng;
