//! Eligibility and golden ratio conformance tests.
//!
//! Covers the characteristic equation, the conjugate identities, the
//! eligibility boundary cases, and the pseudo-golden-prime false-positive
//! class, against vectors computed with an independent big-integer
//! implementation.

use golden_field::error::FieldError;
use golden_field::primality::is_prime;
use golden_field::{golden_eligibility, is_golden_prime, mod_fibonacci, survey, GoldenField};
use num_bigint::BigUint;

fn big(n: u64) -> BigUint {
    BigUint::from(n)
}

/// Every golden prime below 1000, independently computed.
const GOLDEN_PRIMES_BELOW_1000: [u64; 42] = [
    11, 19, 31, 59, 71, 79, 131, 139, 151, 179, 191, 199, 211, 239, 251, 271, 311, 331, 359, 379,
    419, 431, 439, 479, 491, 499, 571, 599, 619, 631, 659, 691, 719, 739, 751, 811, 839, 859, 911,
    919, 971, 991,
];

// =============================================================================
// Enumeration agrees with the reference list
// =============================================================================

#[test]
fn golden_primes_below_1000_match_reference() {
    let found: Vec<u64> = survey::golden_primes(1000)
        .iter()
        .map(|r| r.p.to_string().parse().unwrap())
        .collect();
    assert_eq!(found, GOLDEN_PRIMES_BELOW_1000);
}

// =============================================================================
// Characteristic equation and conjugate identities
// =============================================================================

#[test]
fn characteristic_equation_holds_for_every_golden_prime() {
    for p in GOLDEN_PRIMES_BELOW_1000 {
        let field = GoldenField::new(big(p)).unwrap();
        let phi = field.phi();
        assert_eq!(
            (phi * phi) % field.modulus(),
            (phi + 1u32) % field.modulus(),
            "phi^2 = phi + 1 must hold mod {p}"
        );
    }
}

#[test]
fn conjugate_sum_is_one_product_is_minus_one() {
    for p in GOLDEN_PRIMES_BELOW_1000 {
        let field = GoldenField::new(big(p)).unwrap();
        let modulus = field.modulus();
        assert_eq!(
            (field.phi() + field.psi()) % modulus,
            big(1),
            "phi + psi = 1 mod {p}"
        );
        assert_eq!(
            (field.phi() * field.psi()) % modulus,
            modulus - 1u32,
            "phi * psi = -1 mod {p}"
        );
    }
}

#[test]
fn known_ratio_values() {
    for (p, phi) in [(11u64, 8u64), (31, 13), (599, 25)] {
        let field = GoldenField::new(big(p)).unwrap();
        assert_eq!(field.phi(), &big(phi), "phi mod {p}");
    }
}

// =============================================================================
// Eligibility boundary
// =============================================================================

#[test]
fn eligibility_boundary_cases() {
    assert!(!is_golden_prime(&big(2)));
    assert!(is_golden_prime(&big(599)));
    // 11 mod 5 = 1 and 11 mod 4 = 3: both preconditions hold
    assert_eq!(11 % 5, 1);
    assert_eq!(11 % 4, 3);
    assert!(is_golden_prime(&big(11)));
}

#[test]
fn eligibility_reports_distinct_diagnostics() {
    // 7 mod 5 = 2: the golden ratio cannot exist
    assert!(matches!(
        golden_eligibility(&big(7)),
        Err(FieldError::SqrtFiveMissing(_))
    ));
    // 29 mod 5 = 4 but 29 mod 4 = 1: exists, but the shortcut cannot
    // compute it
    assert!(matches!(
        golden_eligibility(&big(29)),
        Err(FieldError::UnsupportedModulus(_))
    ));
}

#[test]
fn fibonacci_fails_fast_on_ineligible_modulus() {
    let err = mod_fibonacci(&big(5), &big(7)).unwrap_err();
    assert!(matches!(err, FieldError::SqrtFiveMissing(_)));
    assert_eq!(err.to_string(), "sqrt(5) does not exist mod 7");
}

// =============================================================================
// Pseudo golden primes
// =============================================================================

#[test]
fn pseudo_golden_primes_exist_and_are_a_strict_subset() {
    let pseudo = survey::pseudo_golden_primes(10_000);
    assert_eq!(pseudo.len(), 1, "exactly one false positive below 10000");
    let n = &pseudo[0].n;
    assert_eq!(n, &big(5611));
    // 5611 = 31 * 181: golden-flagged but composite
    assert!(is_golden_prime(n));
    assert!(!is_prime(n));
    // strict subset: the golden-flagged set also contains true primes
    let golden = survey::golden_primes(10_000);
    assert!(!golden.is_empty());
    assert!(golden.iter().all(|r| r.p != *n));
}

#[test]
fn eligibility_does_not_imply_primality() {
    // The predicate is a modular property; primality is a separate oracle.
    assert!(is_golden_prime(&big(5611)));
    assert!(!is_prime(&big(5611)));
}
