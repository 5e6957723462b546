//! Single-client TCP number guessing game server.
//!
//! The server draws a secret in `[1, 1_000_000]`, accepts exactly one client,
//! and answers each received guess with higher/lower/correct/invalid over a
//! plain-text protocol. `core` holds the game rules and random source,
//! `server` the blocking connection lifecycle; `netstack` and `input` cover
//! platform bring-up and the startup keypress gate.

pub mod core;
pub mod input;
pub mod netstack;
pub mod server;
pub mod types;
