//! Socket-library lifecycle capability
//!
//! Some platforms require an explicit socket-stack bring-up before the first
//! socket call and a matching release at exit. The Rust standard library
//! performs that on demand, so the host implementation has nothing to do;
//! the trait keeps the entry point's shape independent of the platform.
//! Protocol and session code never touch this.

use anyhow::Result;

/// Acquire/release hooks bracketing all socket use.
pub trait NetStack {
    fn acquire(&mut self) -> Result<()>;
    fn release(&mut self);
}

/// Host implementation: both hooks are no-ops because `std` initialises the
/// platform socket stack on first use.
#[derive(Debug, Default)]
pub struct HostNetStack;

impl NetStack for HostNetStack {
    fn acquire(&mut self) -> Result<()> {
        Ok(())
    }

    fn release(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_stack_acquires_without_error() {
        let mut stack = HostNetStack::default();
        assert!(stack.acquire().is_ok());
        stack.release();
    }
}
