//! Game rules - one guessing round at a time
//!
//! A round owns the live secret together with the generator that replaces
//! it. The session loop threads a round through its iterations as local
//! state; nothing else can reach the secret.

use std::cmp::Ordering;

use crate::core::rng::SimpleRng;
use crate::types::{Hint, MAX_NUMBER};

/// The live secret plus the source of its successors.
#[derive(Debug, Clone)]
pub struct GameRound {
    secret: u32,
    rng: SimpleRng,
}

impl GameRound {
    /// Create a round and draw the first secret.
    pub fn new(mut rng: SimpleRng) -> Self {
        let secret = draw_secret(&mut rng);
        Self { secret, rng }
    }

    /// Compare a validated guess against the live secret.
    ///
    /// `Hint::Correct` replaces the secret before returning; the other hints
    /// leave the round untouched.
    pub fn evaluate(&mut self, guess: u32) -> Hint {
        debug_assert!((1..=MAX_NUMBER).contains(&guess));
        match guess.cmp(&self.secret) {
            Ordering::Less => Hint::Higher,
            Ordering::Greater => Hint::Lower,
            Ordering::Equal => {
                self.secret = draw_secret(&mut self.rng);
                Hint::Correct
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn secret(&self) -> u32 {
        self.secret
    }

    #[cfg(test)]
    pub(crate) fn with_secret(secret: u32, rng: SimpleRng) -> Self {
        Self { secret, rng }
    }
}

/// Uniform draw over `[1, MAX_NUMBER]`.
fn draw_secret(rng: &mut SimpleRng) -> u32 {
    rng.next_range(MAX_NUMBER) + 1
}
