//! Property-based tests for the polynomial ring

use dsig_algorithms::Polynomial;
use proptest::prelude::*;

const N: usize = 256;
const Q: u32 = 8_380_417;

/// Arbitrary ring element with canonical coefficients
fn ring_element() -> impl Strategy<Value = Polynomial> {
    prop::collection::vec(0..Q, N).prop_map(|c| Polynomial::from_coeffs(&c).unwrap())
}

/// Ring element with a handful of small non-zero coefficients
fn sparse_element() -> impl Strategy<Value = Polynomial> {
    prop::collection::vec((0..N, -2i64..=2), 1..16).prop_map(|terms| {
        let mut coeffs = vec![0i64; N];
        for (i, v) in terms {
            coeffs[i] = v;
        }
        Polynomial::from_signed(&coeffs).unwrap()
    })
}

proptest! {
    #[test]
    fn addition_commutes(a in ring_element(), b in ring_element()) {
        prop_assert_eq!(&a + &b, &b + &a);
    }

    #[test]
    fn subtraction_inverts_addition(a in ring_element(), b in ring_element()) {
        prop_assert_eq!(&(&a + &b) - &b, a);
    }

    #[test]
    fn negation_is_additive_inverse(a in ring_element()) {
        prop_assert!((&a + &(-&a)).is_zero());
    }

    #[test]
    fn multiplication_commutes(a in sparse_element(), b in ring_element()) {
        prop_assert_eq!(&a * &b, &b * &a);
    }

    #[test]
    fn multiplication_associates(
        a in sparse_element(),
        b in sparse_element(),
        c in ring_element()
    ) {
        prop_assert_eq!(&(&a * &b) * &c, &a * &(&b * &c));
    }

    #[test]
    fn multiplication_distributes(
        a in sparse_element(),
        b in ring_element(),
        c in ring_element()
    ) {
        prop_assert_eq!(&a * &(&b + &c), &(&a * &b) + &(&a * &c));
    }

    #[test]
    fn monomials_wrap_negacyclically(d in 0usize..N, e in 0usize..N) {
        prop_assert_eq!(
            &Polynomial::x_pow(d) * &Polynomial::x_pow(e),
            Polynomial::x_pow(d + e)
        );
    }

    #[test]
    fn shift_by_n_negates(a in ring_element()) {
        prop_assert_eq!(&Polynomial::x_pow(N) * &a, -&a);
    }

    #[test]
    fn scalar_multiplication_matches_constant_polynomial(a in ring_element(), s in 0..Q) {
        let mut coeffs = vec![0u32; N];
        coeffs[0] = s;
        let constant = Polynomial::from_coeffs(&coeffs).unwrap();
        prop_assert_eq!(a.scalar_mul(s), &constant * &a);
    }

    #[test]
    fn centered_coefficients_are_balanced(a in ring_element()) {
        for (i, &v) in a.centered_coeffs().iter().enumerate() {
            prop_assert!(v.unsigned_abs() <= (Q - 1) / 2);
            prop_assert_eq!(((v as i64).rem_euclid(Q as i64)) as u32, a.coefficient(i));
        }
    }

    #[test]
    fn byte_encoding_inverts(a in ring_element()) {
        prop_assert_eq!(Polynomial::from_bytes(&a.to_bytes()).unwrap(), a);
    }
}
