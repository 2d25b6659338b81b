//! Differential testing of the closed form against the recurrence.
//!
//! Binet evaluation and the additive recurrence are independent routes to
//! the same sequence, so comparing them over a prefix catches arithmetic
//! regressions in either. Used by the integration tests and the CLI
//! `verify` subcommand.

use crate::error::FieldResult;
use crate::field::GoldenField;
use num_bigint::BigUint;
use num_traits::{One, Zero};

/// Outcome of comparing the closed form with the recurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiffResult {
    /// Every index agreed.
    Match {
        /// Number of indices compared.
        checked: u64,
    },
    /// First index where the two evaluations diverged.
    Mismatch {
        /// The diverging index.
        index: u64,
        /// Value from Binet's formula.
        closed_form: BigUint,
        /// Value from the additive recurrence.
        recurrence: BigUint,
    },
}

impl DiffResult {
    /// True when no mismatch was found.
    pub fn is_match(&self) -> bool {
        matches!(self, DiffResult::Match { .. })
    }
}

/// Compare `F_0 .. F_count` computed via Binet's formula against the
/// recurrence `F_{n+2} = F_{n+1} + F_n` seeded with 0, 1.
pub fn diff_fibonacci(field: &GoldenField, count: u64) -> FieldResult<DiffResult> {
    let p = field.modulus();
    let mut prev = BigUint::zero();
    let mut cur = BigUint::one();
    for n in 0..=count {
        let closed = field.fibonacci(&BigUint::from(n))?;
        if closed != prev {
            return Ok(DiffResult::Mismatch {
                index: n,
                closed_form: closed,
                recurrence: prev,
            });
        }
        let next = (&prev + &cur) % p;
        prev = std::mem::replace(&mut cur, next);
    }
    Ok(DiffResult::Match { checked: count + 1 })
}

/// Compare `L_0 .. L_count` against the recurrence seeded with 2, 1.
pub fn diff_lucas(field: &GoldenField, count: u64) -> DiffResult {
    let p = field.modulus();
    let mut prev = BigUint::from(2u32) % p;
    let mut cur = BigUint::one();
    for n in 0..=count {
        let closed = field.lucas(&BigUint::from(n));
        if closed != prev {
            return DiffResult::Mismatch {
                index: n,
                closed_form: closed,
                recurrence: prev,
            };
        }
        let next = (&prev + &cur) % p;
        prev = std::mem::replace(&mut cur, next);
    }
    DiffResult::Match { checked: count + 1 }
}
