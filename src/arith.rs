//! Generic modular arithmetic helpers.
//!
//! The golden field core only needs one primitive beyond what
//! [`num_bigint::BigUint::modpow`] provides: a multiplicative inverse for an
//! arbitrary modulus, computed with the extended Euclidean algorithm.

use crate::error::{FieldError, FieldResult};
use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::One;

/// Compute the multiplicative inverse of `a` modulo `p`.
///
/// Works for any modulus, prime or not: the inverse exists exactly when
/// `gcd(a, p) == 1`. Returns [`FieldError::NonInvertible`] otherwise, which
/// covers `a == 0`.
pub fn mod_inverse(a: &BigUint, p: &BigUint) -> FieldResult<BigUint> {
    let a_signed = BigInt::from(a.clone());
    let modulus = BigInt::from(p.clone());
    let ext = a_signed.extended_gcd(&modulus);
    if !ext.gcd.is_one() {
        return Err(FieldError::NonInvertible(a.to_string(), p.to_string()));
    }
    // a*x + p*y = 1, so x mod p is the inverse; mod_floor keeps it in [0, p).
    let inv = ext.x.mod_floor(&modulus);
    inv.to_biguint()
        .ok_or_else(|| FieldError::Internal(format!("negative residue for inverse of {a} mod {p}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(n: u64) -> BigUint {
        BigUint::from(n)
    }

    #[test]
    fn test_inverse_small() {
        // 3 * 4 = 12 = 1 mod 11
        assert_eq!(mod_inverse(&big(3), &big(11)).unwrap(), big(4));
    }

    #[test]
    fn test_inverse_roundtrip() {
        let p = big(599);
        for a in [1u64, 2, 25, 574, 598] {
            let inv = mod_inverse(&big(a), &p).unwrap();
            assert_eq!((big(a) * inv) % &p, big(1), "a = {a}");
        }
    }

    #[test]
    fn test_zero_not_invertible() {
        assert!(matches!(
            mod_inverse(&big(0), &big(11)),
            Err(FieldError::NonInvertible(_, _))
        ));
    }

    #[test]
    fn test_shared_factor_not_invertible() {
        assert!(matches!(
            mod_inverse(&big(4), &big(8)),
            Err(FieldError::NonInvertible(_, _))
        ));
    }
}
