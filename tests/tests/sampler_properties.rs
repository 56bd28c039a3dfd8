//! Property-based tests for the expander and the samplers

use dsig_algorithms::poly::decompose::{decompose, make_hint, use_hint};
use dsig_algorithms::poly::sampling::{
    sample_centered, sample_sparse_ternary, sample_uniform, MAX_SPARSE_WEIGHT,
};
use dsig_algorithms::{expand, DomainTag, Expander};
use proptest::prelude::*;

const Q: u32 = 8_380_417;
const GAMMA2_SMALL: u32 = (Q - 1) / 88;
const GAMMA2_LARGE: u32 = (Q - 1) / 32;

fn domain() -> impl Strategy<Value = DomainTag> {
    prop::sample::select(DomainTag::ALL.to_vec())
}

fn gamma2() -> impl Strategy<Value = u32> {
    prop::sample::select(vec![GAMMA2_SMALL, GAMMA2_LARGE])
}

proptest! {
    #[test]
    fn expansion_is_prefix_stable(
        seed in prop::collection::vec(any::<u8>(), 0..96),
        tag in domain(),
        short in 1usize..64,
        extra in 0usize..200
    ) {
        let long = expand(&seed, tag, short + extra);
        prop_assert_eq!(&long[..short], &expand(&seed, tag, short)[..]);
    }

    #[test]
    fn split_absorption_matches_one_shot(
        seed in prop::collection::vec(any::<u8>(), 0..96),
        split in 0usize..96,
        tag in domain()
    ) {
        let split = split.min(seed.len());
        let mut stream = Expander::new(tag)
            .absorb(&seed[..split])
            .absorb(&seed[split..])
            .finalize();
        prop_assert_eq!(stream.take(48), expand(&seed, tag, 48));
    }

    #[test]
    fn uniform_coefficients_are_canonical(seed in any::<[u8; 32]>()) {
        let mut stream = Expander::new(DomainTag::Matrix).absorb(&seed).finalize();
        let poly = sample_uniform(&mut stream);
        prop_assert!(poly.as_coeffs_slice().iter().all(|&c| c < Q));
    }

    #[test]
    fn centered_samples_respect_bound(
        seed in any::<[u8; 32]>(),
        bound in prop_oneof![0u32..=8, 100u32..=127, 128u32..=(1 << 19)]
    ) {
        let mut stream = Expander::new(DomainTag::Small).absorb(&seed).finalize();
        let poly = sample_centered(&mut stream, bound).unwrap();
        prop_assert!(poly.check_norm(bound as i64));
    }

    #[test]
    fn sparse_ternary_has_exact_weight(
        seed in prop::collection::vec(any::<u8>(), 64),
        weight in 1usize..=MAX_SPARSE_WEIGHT
    ) {
        let mut stream = Expander::new(DomainTag::Challenge).absorb(&seed).finalize();
        let poly = sample_sparse_ternary(&mut stream, weight).unwrap();
        prop_assert_eq!(poly.hamming_weight(), weight);
        prop_assert!(poly.check_norm(1));
    }

    #[test]
    fn sparse_ternary_rejects_out_of_range_weight(
        seed in any::<[u8; 32]>(),
        weight in prop_oneof![Just(0usize), (MAX_SPARSE_WEIGHT + 1)..300]
    ) {
        let mut stream = Expander::new(DomainTag::Challenge).absorb(&seed).finalize();
        prop_assert!(sample_sparse_ternary(&mut stream, weight).is_err());
    }

    #[test]
    fn decomposition_reconstructs(r in 0..Q, g in gamma2()) {
        let (r1, r0) = decompose(r, g);
        prop_assert!(r0 >= -(g as i32) && r0 <= g as i32);
        let rebuilt = (r1 as i64 * 2 * g as i64 + r0 as i64).rem_euclid(Q as i64);
        prop_assert_eq!(rebuilt as u32, r);
    }

    #[test]
    fn fold_neighbourhood_reconstructs(offset in 0u32..=200, g in gamma2()) {
        let r = Q - g - 100 + offset;
        let (r1, r0) = decompose(r, g);
        prop_assert!(r0 >= -(g as i32) && r0 <= g as i32);
        let rebuilt = (r1 as i64 * 2 * g as i64 + r0 as i64).rem_euclid(Q as i64);
        prop_assert_eq!(rebuilt as u32, r);
    }

    #[test]
    fn hints_recover_high_bits(r in 0..Q, z in -78i64..=78, g in gamma2()) {
        let moved = (r as i64 + z).rem_euclid(Q as i64) as u32;
        let hint = make_hint(r, z, g);
        prop_assert_eq!(use_hint(hint, r, g), decompose(moved, g).0);
    }
}
