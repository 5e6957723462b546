//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// TCP port the server listens on.
pub const GAME_PORT: u16 = 24042;

/// Upper bound of the guessing range (inclusive); the lower bound is 1.
pub const MAX_NUMBER: u32 = 1_000_000;

/// Receive buffer capacity; at most `RECV_BUFFER_LEN - 1` payload bytes are
/// consumed per read.
pub const RECV_BUFFER_LEN: usize = 100;

/// Outcome of comparing one guess against the live secret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hint {
    Higher,
    Lower,
    Correct,
}
