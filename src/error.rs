//! Error handling for the golden field library.
//!
//! Every failure is reported synchronously to the immediate caller; no
//! operation retries or returns a partial result. The eligibility variants
//! double as diagnostics: they say *why* a modulus is rejected, not just that
//! it is.

use thiserror::Error;

/// Errors produced by golden field operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    /// 5 has no square root mod p (p mod 5 is neither 1 nor 4), so the
    /// golden ratio cannot exist in the field.
    #[error("sqrt(5) does not exist mod {0}")]
    SqrtFiveMissing(String),

    /// p mod 4 is not 3: the (p+1)/4 square-root shortcut does not apply,
    /// even though the golden ratio may exist for this modulus.
    #[error("modulus {0} needs a different square root algorithm")]
    UnsupportedModulus(String),

    /// The computed candidate fails the characteristic equation
    /// phi^2 = phi + 1 (mod p); the modulus is not golden.
    #[error("characteristic equation phi^2 = phi + 1 fails mod {0}")]
    CharacteristicMismatch(String),

    /// The element shares a factor with the modulus and has no
    /// multiplicative inverse.
    #[error("{0} is not invertible mod {1}")]
    NonInvertible(String, String),

    /// An arithmetic invariant was broken; returned instead of panicking.
    #[error("internal error: {0}")]
    Internal(String),
}

/// Result type for golden field operations.
pub type FieldResult<T> = Result<T, FieldError>;
