//! polynomial.rs - Ring elements of Z_q[X]/(X^N + 1)

use core::fmt;
use core::ops::{Add, Mul, Neg, Sub};

use dsig_api::{validate, Result};
use dsig_params::pqc::dilithium::{DILITHIUM_N, DILITHIUM_Q};
use zeroize::Zeroize;

const N: usize = DILITHIUM_N;
const Q: u32 = DILITHIUM_Q;

/// A polynomial in the ring R_q = Z_q[X]/(X^N + 1)
///
/// Always exactly N coefficients, each held canonically in [0, q). Every
/// operation returns a fresh value; nothing mutates an existing polynomial
/// except the crate-internal samplers that build one.
#[derive(Clone, PartialEq, Eq, Hash, Zeroize)]
pub struct Polynomial {
    pub(crate) coeffs: [u32; N],
}

impl Default for Polynomial {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Debug for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Polynomial")
            .field("nonzero", &self.hamming_weight())
            .field("head", &&self.coeffs[..8])
            .finish()
    }
}

impl Polynomial {
    /// Creates a new polynomial with all coefficients set to zero
    pub const fn zero() -> Self {
        Self { coeffs: [0; N] }
    }

    /// Creates a polynomial from exactly N coefficients, reducing each mod q
    pub fn from_coeffs(coeffs: &[u32]) -> Result<Self> {
        validate::length("polynomial coefficients", coeffs.len(), N)?;
        let mut poly = Self::zero();
        for (dst, &c) in poly.coeffs.iter_mut().zip(coeffs) {
            *dst = c % Q;
        }
        Ok(poly)
    }

    /// Creates a polynomial from an array of N coefficients, reducing each mod q
    pub fn from_array(mut coeffs: [u32; N]) -> Self {
        for c in coeffs.iter_mut() {
            *c %= Q;
        }
        Self { coeffs }
    }

    /// Creates a polynomial from up to N signed coefficients.
    ///
    /// Missing high-degree coefficients are zero; each value is reduced into [0, q).
    pub fn from_signed(coeffs: &[i64]) -> Result<Self> {
        validate::max_length("polynomial coefficients", coeffs.len(), N)?;
        let mut poly = Self::zero();
        for (dst, &c) in poly.coeffs.iter_mut().zip(coeffs) {
            *dst = reduce_i64(c);
        }
        Ok(poly)
    }

    /// The monomial X^degree, folded back into the ring with X^N = -1
    pub fn x_pow(degree: usize) -> Self {
        let mut poly = Self::zero();
        let wraps = degree / N;
        poly.coeffs[degree % N] = if wraps % 2 == 0 { 1 } else { Q - 1 };
        poly
    }

    /// Returns the degree bound N of the ring
    pub const fn degree() -> usize {
        N
    }

    /// Returns the modulus q for coefficient arithmetic
    pub const fn modulus_q() -> u32 {
        Q
    }

    /// Returns a slice view of the canonical coefficients
    pub fn as_coeffs_slice(&self) -> &[u32] {
        &self.coeffs
    }

    /// Canonical coefficient at `index`
    pub fn coefficient(&self, index: usize) -> u32 {
        self.coeffs[index]
    }

    /// Coefficient at `index` as the centered representative in [-(q-1)/2, (q-1)/2]
    pub fn centered(&self, index: usize) -> i32 {
        to_centered(self.coeffs[index])
    }

    /// All coefficients as centered representatives
    pub fn centered_coeffs(&self) -> [i32; N] {
        let mut out = [0i32; N];
        for (dst, &c) in out.iter_mut().zip(self.coeffs.iter()) {
            *dst = to_centered(c);
        }
        out
    }

    /// Number of non-zero coefficients
    pub fn hamming_weight(&self) -> usize {
        self.coeffs.iter().filter(|&&c| c != 0).count()
    }

    /// True when every coefficient is zero
    pub fn is_zero(&self) -> bool {
        self.coeffs.iter().all(|&c| c == 0)
    }

    /// Largest absolute centered coefficient
    pub fn infinity_norm(&self) -> u32 {
        self.coeffs
            .iter()
            .map(|&c| to_centered(c).unsigned_abs())
            .max()
            .unwrap_or(0)
    }

    /// True when every centered coefficient lies in [-bound, bound].
    ///
    /// A negative bound admits nothing.
    pub fn check_norm(&self, bound: i64) -> bool {
        bound >= 0 && self.coeffs.iter().all(|&c| (to_centered(c).unsigned_abs() as i64) <= bound)
    }

    /// Polynomial addition modulo q
    pub fn add(&self, other: &Self) -> Self {
        let mut result = Self::zero();
        for i in 0..N {
            result.coeffs[i] = reduce_once(self.coeffs[i] + other.coeffs[i]);
        }
        result
    }

    /// Polynomial subtraction modulo q
    pub fn sub(&self, other: &Self) -> Self {
        let mut result = Self::zero();
        for i in 0..N {
            result.coeffs[i] = reduce_once(self.coeffs[i] + Q - other.coeffs[i]);
        }
        result
    }

    /// Polynomial negation modulo q
    pub fn neg(&self) -> Self {
        let mut result = Self::zero();
        for i in 0..N {
            result.coeffs[i] = reduce_once(Q - self.coeffs[i]);
        }
        result
    }

    /// Multiplication by a scalar modulo q
    pub fn scalar_mul(&self, scalar: u32) -> Self {
        let mut result = Self::zero();
        for i in 0..N {
            let prod = (self.coeffs[i] as u64) * (scalar as u64);
            result.coeffs[i] = (prod % Q as u64) as u32;
        }
        result
    }

    /// Negacyclic schoolbook multiplication.
    ///
    /// The coefficient of degree d is the sum of a_i * b_j over i + j = d (mod N),
    /// with the sign flipped whenever i + j >= N because X^N = -1. Each product is
    /// reduced before it is accumulated so the i64 accumulators cannot overflow.
    pub fn mul(&self, other: &Self) -> Self {
        let mut acc = [0i64; N];
        let q = Q as i64;

        for (i, &a) in self.coeffs.iter().enumerate() {
            if a == 0 {
                continue;
            }
            let a = a as i64;
            for (j, &b) in other.coeffs.iter().enumerate() {
                let prod = (a * b as i64) % q;
                let idx = i + j;
                if idx < N {
                    acc[idx] += prod;
                } else {
                    acc[idx - N] -= prod;
                }
            }
        }

        let mut result = Self::zero();
        for (dst, &v) in result.coeffs.iter_mut().zip(acc.iter()) {
            *dst = reduce_i64(v);
        }
        result
    }
}

/// Reduce a value in [0, 2q) into [0, q)
#[inline(always)]
fn reduce_once(a: u32) -> u32 {
    if a >= Q {
        a - Q
    } else {
        a
    }
}

/// Reduce any signed integer into [0, q)
#[inline]
pub fn reduce_i64(a: i64) -> u32 {
    a.rem_euclid(Q as i64) as u32
}

/// Interpret a coefficient in [0, q) as a signed value in [-(q-1)/2, (q-1)/2]
#[inline]
pub fn to_centered(c: u32) -> i32 {
    if c > Q / 2 {
        c as i32 - Q as i32
    } else {
        c as i32
    }
}

// Implement standard ops traits for ergonomic usage
impl Add for Polynomial {
    type Output = Self;

    fn add(self, other: Self) -> Self::Output {
        Polynomial::add(&self, &other)
    }
}

impl Add for &Polynomial {
    type Output = Polynomial;

    fn add(self, other: Self) -> Self::Output {
        Polynomial::add(self, other)
    }
}

impl Sub for Polynomial {
    type Output = Self;

    fn sub(self, other: Self) -> Self::Output {
        Polynomial::sub(&self, &other)
    }
}

impl Sub for &Polynomial {
    type Output = Polynomial;

    fn sub(self, other: Self) -> Self::Output {
        Polynomial::sub(self, other)
    }
}

impl Mul for Polynomial {
    type Output = Self;

    fn mul(self, other: Self) -> Self::Output {
        Polynomial::mul(&self, &other)
    }
}

impl Mul for &Polynomial {
    type Output = Polynomial;

    fn mul(self, other: Self) -> Self::Output {
        Polynomial::mul(self, other)
    }
}

impl Neg for Polynomial {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Polynomial::neg(&self)
    }
}

impl Neg for &Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Self::Output {
        Polynomial::neg(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha20Rng;

    fn random_poly(rng: &mut ChaCha20Rng) -> Polynomial {
        let coeffs: Vec<u32> = (0..N).map(|_| rng.gen_range(0..Q)).collect();
        Polynomial::from_coeffs(&coeffs).unwrap()
    }

    #[test]
    fn test_polynomial_creation() {
        let poly = Polynomial::zero();
        assert!(poly.is_zero());
        assert_eq!(poly.as_coeffs_slice().len(), N);

        let poly = Polynomial::from_signed(&[1, -1, Q as i64 + 5]).unwrap();
        assert_eq!(&poly.as_coeffs_slice()[..4], &[1, Q - 1, 5, 0]);

        assert!(Polynomial::from_coeffs(&[1, 2, 3]).is_err());
        assert!(Polynomial::from_signed(&[0; N + 1]).is_err());
    }

    #[test]
    fn test_small_example() {
        let p1 = Polynomial::from_signed(&[1, 2]).unwrap();
        let p2 = Polynomial::from_signed(&[3, 4]).unwrap();

        let sum = &p1 + &p2;
        assert_eq!(&sum.as_coeffs_slice()[..3], &[4, 6, 0]);
        assert_eq!(sum.hamming_weight(), 2);

        let prod = &p1 * &p2;
        assert_eq!(&prod.as_coeffs_slice()[..4], &[3, 10, 8, 0]);
        assert_eq!(prod.hamming_weight(), 3);

        let diff = &p1 - &p2;
        assert_eq!(diff.centered(0), -2);
        assert_eq!(diff.centered(1), -2);
    }

    #[test]
    fn test_negacyclic_wraparound() {
        let top = Polynomial::x_pow(N - 1);
        let x = Polynomial::x_pow(1);
        let prod = &top * &x;

        assert_eq!(prod.coefficient(0), Q - 1);
        assert_eq!(prod.hamming_weight(), 1);
        assert_eq!(prod, Polynomial::x_pow(N));
        assert_eq!(Polynomial::x_pow(2 * N), Polynomial::x_pow(0));
    }

    #[test]
    fn test_negation_and_subtraction() {
        let a = Polynomial::from_signed(&[1, 2, 0, 4]).unwrap();
        let neg_a = -&a;
        assert_eq!(&neg_a.as_coeffs_slice()[..4], &[Q - 1, Q - 2, 0, Q - 4]);
        assert!((&a + &neg_a).is_zero());
        assert!((&a - &a).is_zero());
    }

    #[test]
    fn test_scalar_mul() {
        let a = Polynomial::from_signed(&[1, -1, 3]).unwrap();
        let b = a.scalar_mul(2);
        assert_eq!(b, &a + &a);
    }

    #[test]
    fn test_ring_laws_random() {
        let mut rng = ChaCha20Rng::from_seed([7u8; 32]);
        for _ in 0..4 {
            let a = random_poly(&mut rng);
            let b = random_poly(&mut rng);
            let c = random_poly(&mut rng);

            assert_eq!(&a + &(&b + &c), &(&a + &b) + &c);
            assert_eq!(&a * &(&b + &c), &(&a * &b) + &(&a * &c));
            assert_eq!(&a * &b, &b * &a);
            assert_eq!(&a * &Polynomial::x_pow(0), a);
        }
    }

    #[test]
    fn test_norms() {
        let p = Polynomial::from_signed(&[3, -7, 2]).unwrap();
        assert_eq!(p.infinity_norm(), 7);
        assert!(p.check_norm(7));
        assert!(!p.check_norm(6));
        assert!(!Polynomial::zero().check_norm(-1));
        assert!(Polynomial::zero().check_norm(0));
        assert_eq!(to_centered((Q - 1) / 2), ((Q - 1) / 2) as i32);
        assert_eq!(to_centered((Q + 1) / 2), -(((Q - 1) / 2) as i32));
    }
}
