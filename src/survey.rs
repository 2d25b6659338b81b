//! Enumeration drivers over the golden field core.
//!
//! These functions walk a numeric range, apply the eligibility predicate and
//! the primality oracle, and collect serializable records. They contain no
//! arithmetic of their own: everything algorithmic lives in [`crate::field`].

use crate::field::GoldenField;
use crate::primality::is_prime;
use num_bigint::BigUint;
use serde::{Serialize, Serializer};

/// Serialize a big integer as its decimal string, not its limb array.
fn decimal<S: Serializer>(value: &BigUint, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&value.to_str_radix(10))
}

/// A golden prime together with its golden ratio.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GoldenPrimeRecord {
    /// The prime modulus.
    #[serde(serialize_with = "decimal")]
    pub p: BigUint,
    /// The golden ratio mod p.
    #[serde(serialize_with = "decimal")]
    pub phi: BigUint,
}

/// A composite number that passes the golden-prime eligibility check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PseudoGoldenPrimeRecord {
    /// The composite modulus.
    #[serde(serialize_with = "decimal")]
    pub n: BigUint,
    /// The (well-defined) golden ratio mod n.
    #[serde(serialize_with = "decimal")]
    pub phi: BigUint,
    /// Whether the Lucas probable-prime congruence also holds.
    pub lucas_probable: bool,
}

/// All golden primes below `limit`, with their ratios.
pub fn golden_primes(limit: u64) -> Vec<GoldenPrimeRecord> {
    let mut records = Vec::new();
    for n in 0..limit {
        let Ok(field) = GoldenField::new(BigUint::from(n)) else {
            continue;
        };
        if !is_prime(field.modulus()) {
            continue;
        }
        records.push(GoldenPrimeRecord {
            p: field.modulus().clone(),
            phi: field.phi().clone(),
        });
    }
    records
}

/// All composite numbers below `limit` that pass the eligibility check —
/// the false-positive class of `is_golden_prime`, annotated with the Lucas
/// probable-prime verdict.
pub fn pseudo_golden_primes(limit: u64) -> Vec<PseudoGoldenPrimeRecord> {
    let mut records = Vec::new();
    for n in 0..limit {
        let Ok(field) = GoldenField::new(BigUint::from(n)) else {
            continue;
        };
        if is_prime(field.modulus()) {
            continue;
        }
        records.push(PseudoGoldenPrimeRecord {
            n: field.modulus().clone(),
            phi: field.phi().clone(),
            lucas_probable: field.is_lucas_probable_prime(),
        });
    }
    records
}

/// Golden primes below `limit` that are also safe primes, i.e. `(p-1)/2` is
/// prime as well.
pub fn safe_golden_primes(limit: u64) -> Vec<GoldenPrimeRecord> {
    let mut records = Vec::new();
    for n in 3..limit {
        let Ok(field) = GoldenField::new(BigUint::from(n)) else {
            continue;
        };
        let p = field.modulus();
        if !is_prime(p) || !is_prime(&((p - 1u32) / 2u32)) {
            continue;
        }
        records.push(GoldenPrimeRecord {
            p: p.clone(),
            phi: field.phi().clone(),
        });
    }
    records
}
