//! Parity evaluation
//!
//! Pure and total over all of i64: zero and every negative even number
//! are even.

use serde::{Deserialize, Serialize};

/// Whether `n` is divisible by 2.
///
/// Uses the remainder operator, which classifies negatives correctly
/// (`-4 % 2 == 0`, `-3 % 2 == -1`).
pub fn is_even(n: i64) -> bool {
    n % 2 == 0
}

/// Outcome of evaluating one number. Created per submission, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParityResult {
    pub value: i64,
    pub is_even: bool,
}

impl ParityResult {
    pub fn evaluate(value: i64) -> Self {
        Self {
            value,
            is_even: is_even(value),
        }
    }
}
