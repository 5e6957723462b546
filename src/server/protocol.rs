//! Wire protocol - fixed ASCII messages and guess parsing
//!
//! Plain text over TCP: the server writes one of five fixed messages, the
//! client sends a decimal integer with whatever delimiter it likes. Message
//! boundaries rely on the client reading whatever one send delivers; there
//! is no length prefix and no framing.

use crate::types::{Hint, MAX_NUMBER};

pub const PROMPT: &str = "Enter a number between 1 and 1000000: ";
pub const INVALID: &str = "Invalid input. Please enter a number between 1 and 1000000.\n";
pub const CORRECT: &str = "Correct guess! New number generated.\n";
pub const HIGHER: &str = "Guess higher!\n";
pub const LOWER: &str = "Guess lower!\n";

/// Server reply for one request/response cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reply {
    Invalid,
    Correct,
    Higher,
    Lower,
}

impl Reply {
    /// The wire text for this reply.
    pub fn message(self) -> &'static str {
        match self {
            Reply::Invalid => INVALID,
            Reply::Correct => CORRECT,
            Reply::Higher => HIGHER,
            Reply::Lower => LOWER,
        }
    }
}

impl From<Hint> for Reply {
    fn from(hint: Hint) -> Self {
        match hint {
            Hint::Higher => Reply::Higher,
            Hint::Lower => Reply::Lower,
            Hint::Correct => Reply::Correct,
        }
    }
}

/// Parse one received buffer into a guess.
///
/// Prefix semantics: leading ASCII whitespace is skipped, an optional sign
/// is accepted, then the longest leading digit run is taken and everything
/// after it (newline, trailing junk) is ignored. `None` means no digits at
/// all, or a value outside `[1, MAX_NUMBER]`.
pub fn parse_guess(raw: &[u8]) -> Option<u32> {
    let value = parse_integer_prefix(raw)?;
    if (1..=i64::from(MAX_NUMBER)).contains(&value) {
        Some(value as u32)
    } else {
        None
    }
}

fn parse_integer_prefix(raw: &[u8]) -> Option<i64> {
    let mut idx = 0;
    while idx < raw.len() && raw[idx].is_ascii_whitespace() {
        idx += 1;
    }

    let negative = match raw.get(idx) {
        Some(b'-') => {
            idx += 1;
            true
        }
        Some(b'+') => {
            idx += 1;
            false
        }
        _ => false,
    };

    let mut digits = 0usize;
    let mut value: i64 = 0;
    while let Some(b) = raw.get(idx) {
        if !b.is_ascii_digit() {
            break;
        }
        // Saturating is enough: anything that overflows is far outside the
        // valid range and gets rejected by the caller.
        value = value
            .saturating_mul(10)
            .saturating_add(i64::from(b - b'0'));
        digits += 1;
        idx += 1;
    }

    if digits == 0 {
        return None;
    }
    Some(if negative { -value } else { value })
}
