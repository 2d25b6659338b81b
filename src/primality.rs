//! Primality oracle for the enumeration drivers.
//!
//! The core never calls this: `is_golden_prime` is a pure modular predicate
//! that is well-defined (and occasionally true) for composites. The survey
//! drivers use this oracle to separate true golden primes from the composite
//! false positives.

use num_bigint::BigUint;
use num_traits::{One, Zero};

/// Small primes for the trial-division pre-filter.
const SMALL_PRIMES: [u32; 64] = [
    2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83, 89, 97,
    101, 103, 107, 109, 113, 127, 131, 137, 139, 149, 151, 157, 163, 167, 173, 179, 181, 191, 193,
    197, 199, 211, 223, 227, 229, 233, 239, 241, 251, 257, 263, 269, 271, 277, 281, 283, 293, 307,
    311,
];

/// Miller-Rabin witnesses. This fixed set is a deterministic test for every
/// n below 3.3e24; beyond that it is a strong probable-prime test.
const WITNESSES: [u32; 12] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];

/// Decide whether `n` is prime.
///
/// Trial division by the 64 smallest primes, then Miller-Rabin over the fixed
/// witness set for survivors.
pub fn is_prime(n: &BigUint) -> bool {
    if *n < BigUint::from(2u32) {
        return false;
    }
    for &q in SMALL_PRIMES.iter() {
        let q = BigUint::from(q);
        if *n == q {
            return true;
        }
        if (n % &q).is_zero() {
            return false;
        }
    }
    miller_rabin(n)
}

/// Miller-Rabin rounds over the fixed witness set.
///
/// Precondition: `n` is odd, greater than every entry of `SMALL_PRIMES`, and
/// has no small factor.
fn miller_rabin(n: &BigUint) -> bool {
    let one = BigUint::one();
    let n_minus_1 = n - &one;
    // n - 1 = 2^shift * d with d odd
    let shift = n_minus_1.trailing_zeros().unwrap_or(0);
    let d = &n_minus_1 >> shift;

    'witness: for &a in WITNESSES.iter() {
        let mut x = BigUint::from(a).modpow(&d, n);
        if x.is_one() || x == n_minus_1 {
            continue;
        }
        for _ in 1..shift {
            x = (&x * &x) % n;
            if x == n_minus_1 {
                continue 'witness;
            }
        }
        return false;
    }
    true
}
