//! Golden ratio arithmetic in F_p.
//!
//! A prime `p` is *golden* when the characteristic equation
//! `phi^2 = phi + 1 (mod p)` has a root. The root exists iff 5 is a quadratic
//! residue mod p (`p = ±1 mod 5`); this implementation additionally requires
//! `p = 3 mod 4` so that `sqrt(5) = 5^((p+1)/4) mod p` can be taken with the
//! closed-form shortcut instead of a general square-root algorithm.
//!
//! The eligibility predicate is a pure modular property: it does not test
//! primality, and composite moduli can pass it (see
//! [`crate::survey::pseudo_golden_primes`]). The Lucas probable-prime test
//! exists to tell those apart.

use crate::arith::mod_inverse;
use crate::error::{FieldError, FieldResult};
use num_bigint::BigUint;
use num_traits::One;

/// Check that 5 has a square root mod p, i.e. `p mod 5` is 1 or 4.
fn check_sqrt_five_exists(p: &BigUint) -> FieldResult<()> {
    let r = p % 5u32;
    if r == BigUint::from(1u32) || r == BigUint::from(4u32) {
        Ok(())
    } else {
        Err(FieldError::SqrtFiveMissing(p.to_string()))
    }
}

/// Check that the `(p+1)/4` square-root shortcut applies, i.e. `p mod 4 == 3`.
fn check_sqrt_shortcut(p: &BigUint) -> FieldResult<()> {
    if p % 4u32 == BigUint::from(3u32) {
        Ok(())
    } else {
        Err(FieldError::UnsupportedModulus(p.to_string()))
    }
}

/// Raw square root of 5 and golden ratio candidate for an odd modulus p >= 3.
///
/// `sqrt5 = 5^((p+1)/4) mod p` (integer division in the exponent) and
/// `phi = (1 + sqrt5) / 2 mod p`, where the inverse of 2 is the closed form
/// `(p-1)/2 + 1` valid for any odd p. Meaningless unless p is golden.
fn raw_ratio(p: &BigUint) -> (BigUint, BigUint) {
    let sqrt5 = BigUint::from(5u32).modpow(&((p + 1u32) / 4u32), p);
    let inv2 = (p - 1u32) / 2u32 + 1u32;
    let phi = ((&sqrt5 + 1u32) * inv2) % p;
    (sqrt5, phi)
}

/// A validated golden field: the modulus together with its precomputed
/// square root of 5, golden ratio `phi` and conjugate `psi = 1 - phi`.
///
/// Construction runs the full eligibility check, so every method can assume
/// `phi^2 = phi + 1 (mod p)` holds. The handle carries no mutable state; it
/// only saves recomputing `phi` on every sequence evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoldenField {
    p: BigUint,
    sqrt5: BigUint,
    phi: BigUint,
    psi: BigUint,
}

impl GoldenField {
    /// Validate `p` and build the field handle.
    ///
    /// Fails with the specific eligibility diagnostic: `SqrtFiveMissing` when
    /// `p mod 5` is not ±1, `UnsupportedModulus` when `p mod 4` is not 3, and
    /// `CharacteristicMismatch` when the computed candidate is not a root of
    /// `phi^2 = phi + 1`. Primality is deliberately not checked.
    pub fn new(p: BigUint) -> FieldResult<Self> {
        check_sqrt_five_exists(&p)?;
        check_sqrt_shortcut(&p)?;
        // Both checks passed, so p is odd and at least 11.
        let (sqrt5, phi) = raw_ratio(&p);
        if (&phi * &phi) % &p != (&phi + 1u32) % &p {
            return Err(FieldError::CharacteristicMismatch(p.to_string()));
        }
        let psi = (&p + 1u32 - &phi) % &p;
        Ok(Self { p, sqrt5, phi, psi })
    }

    /// The modulus p.
    pub fn modulus(&self) -> &BigUint {
        &self.p
    }

    /// The golden ratio phi.
    pub fn phi(&self) -> &BigUint {
        &self.phi
    }

    /// The conjugate root psi = 1 - phi mod p.
    pub fn psi(&self) -> &BigUint {
        &self.psi
    }

    /// The square root of 5 used to build phi.
    pub fn sqrt_five(&self) -> &BigUint {
        &self.sqrt5
    }

    /// The n-th Fibonacci number mod p via Binet's formula:
    /// `F_n = (phi^n - psi^n) / sqrt(5)`.
    ///
    /// The division fails only for composite pseudo-golden moduli where
    /// `sqrt(5)` shares a factor with p; for golden primes it always
    /// succeeds.
    pub fn fibonacci(&self, n: &BigUint) -> FieldResult<BigUint> {
        let inv_sqrt5 = mod_inverse(&self.sqrt5, &self.p)?;
        let phi_n = self.phi.modpow(n, &self.p);
        let psi_n = self.psi.modpow(n, &self.p);
        Ok(((phi_n + &self.p - psi_n) * inv_sqrt5) % &self.p)
    }

    /// The n-th Lucas number mod p: `L_n = phi^n + psi^n`. No division, so
    /// this never fails once the field is constructed.
    pub fn lucas(&self, n: &BigUint) -> BigUint {
        let phi_n = self.phi.modpow(n, &self.p);
        let psi_n = self.psi.modpow(n, &self.p);
        (phi_n + psi_n) % &self.p
    }

    /// Lucas probable-prime congruence: `L_p = 1 (mod p)` holds for every
    /// prime p. Composite moduli can pass; this is a probabilistic filter,
    /// not a primality proof.
    pub fn is_lucas_probable_prime(&self) -> bool {
        self.lucas(&self.p).is_one()
    }

    /// Pick a generator candidate for repeated-exponentiation workloads.
    ///
    /// Returns phi when `phi^((p-1)/2) = p - 1` (phi is a non-residue, a
    /// necessary condition for a primitive root), otherwise psi. A heuristic,
    /// not a certified primitive-root test.
    pub fn generator_candidate(&self) -> BigUint {
        let half = (&self.p - 1u32) / 2u32;
        let minus_one = &self.p - 1u32;
        if self.phi.modpow(&half, &self.p) == minus_one {
            self.phi.clone()
        } else {
            self.psi.clone()
        }
    }
}

/// Compute the golden ratio candidate `(1 + 5^((p+1)/4)) / 2 mod p`.
///
/// This is the unvalidated primitive: for any odd `p >= 3` it returns
/// whatever the arithmetic yields, which is meaningless unless `p` is golden.
/// Even or sub-3 moduli are rejected because the closed-form inverse of 2
/// does not exist for them. Use [`GoldenField::new`] for the validating path.
pub fn golden_ratio(p: &BigUint) -> FieldResult<BigUint> {
    if (p % 2u32).is_one() && *p >= BigUint::from(3u32) {
        let (_, phi) = raw_ratio(p);
        Ok(phi)
    } else {
        Err(FieldError::UnsupportedModulus(p.to_string()))
    }
}

/// The conjugate `psi = 1 - phi mod p` of the golden ratio candidate.
pub fn golden_ratio_conjugate(p: &BigUint) -> FieldResult<BigUint> {
    let phi = golden_ratio(p)?;
    Ok((p + 1u32 - phi) % p)
}

/// Run the eligibility check, reporting which precondition failed.
///
/// Ok(()) means `p` is golden as a modular property; it does NOT mean `p` is
/// prime. Composite "pseudo golden primes" pass this check.
pub fn golden_eligibility(p: &BigUint) -> FieldResult<()> {
    GoldenField::new(p.clone()).map(|_| ())
}

/// Boolean form of [`golden_eligibility`].
pub fn is_golden_prime(p: &BigUint) -> bool {
    golden_eligibility(p).is_ok()
}

/// The n-th Fibonacci number mod p. Fails fast with the eligibility
/// diagnostic when `p` is not golden.
pub fn mod_fibonacci(n: &BigUint, p: &BigUint) -> FieldResult<BigUint> {
    GoldenField::new(p.clone())?.fibonacci(n)
}

/// The n-th Lucas number mod p. Fails fast with the eligibility diagnostic
/// when `p` is not golden.
pub fn mod_lucas(n: &BigUint, p: &BigUint) -> FieldResult<BigUint> {
    Ok(GoldenField::new(p.clone())?.lucas(n))
}

/// Lucas probable-prime test: `mod_lucas(p, p) == 1`.
///
/// True for every golden prime and for a sparse set of composite false
/// positives; callers needing certainty must consult a primality oracle.
pub fn is_lucas_probable_prime(p: &BigUint) -> FieldResult<bool> {
    Ok(GoldenField::new(p.clone())?.is_lucas_probable_prime())
}

/// Free form of [`GoldenField::generator_candidate`].
pub fn generator_candidate(p: &BigUint) -> FieldResult<BigUint> {
    Ok(GoldenField::new(p.clone())?.generator_candidate())
}
