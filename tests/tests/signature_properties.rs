//! Property-based tests for signing and verification

use dsig_params::pqc::dilithium::{SecurityLevel, DEFAULT_MAX_SIGN_ATTEMPTS};
use dsig_sign::{sign, sign_hedged, verify, Signature};
use dsig_tests::corpus::corpus_keypair;
use dsig_tests::corpus_rng;
use dsig_tests::tamper::{flip_message_bit, negate_challenge_entry, shift_z};
use proptest::prelude::*;

fn level() -> impl Strategy<Value = SecurityLevel> {
    prop::sample::select(SecurityLevel::ALL.to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(12))]

    #[test]
    fn signatures_verify(
        lvl in level(),
        key_index in 0usize..3,
        message in prop::collection::vec(any::<u8>(), 0..512)
    ) {
        let keypair = corpus_keypair(&lvl.params(), key_index);
        let sig = sign(&message, keypair.private_key(), DEFAULT_MAX_SIGN_ATTEMPTS).unwrap();
        prop_assert!(verify(&message, &sig, keypair.public_key()));
    }

    #[test]
    fn flipped_message_bit_is_rejected(
        message in prop::collection::vec(any::<u8>(), 1..256),
        bit in any::<usize>()
    ) {
        let keypair = corpus_keypair(&SecurityLevel::Level2.params(), 0);
        let sig = sign(&message, keypair.private_key(), DEFAULT_MAX_SIGN_ATTEMPTS).unwrap();
        let altered = flip_message_bit(&message, bit % (message.len() * 8));
        prop_assert!(!verify(&altered, &sig, keypair.public_key()));
    }

    #[test]
    fn altered_signature_is_rejected(
        message in prop::collection::vec(any::<u8>(), 0..128),
        row in 0usize..4,
        col in 0usize..256,
        nth in 0usize..39
    ) {
        let keypair = corpus_keypair(&SecurityLevel::Level2.params(), 1);
        let sig = sign(&message, keypair.private_key(), DEFAULT_MAX_SIGN_ATTEMPTS).unwrap();
        let pk = keypair.public_key();

        prop_assert!(!verify(&message, &shift_z(&sig, row, col, 1), pk));
        prop_assert!(!verify(&message, &negate_challenge_entry(&sig, nth), pk));
    }

    #[test]
    fn hedged_signatures_verify(
        message in prop::collection::vec(any::<u8>(), 0..256),
        label in any::<u64>()
    ) {
        let keypair = corpus_keypair(&SecurityLevel::Level3.params(), 2);
        let mut rng = corpus_rng(label);
        let sig = sign_hedged(&message, keypair.private_key(), DEFAULT_MAX_SIGN_ATTEMPTS, &mut rng)
            .unwrap();
        prop_assert!(verify(&message, &sig, keypair.public_key()));
    }

    #[test]
    fn signature_encoding_inverts(
        lvl in level(),
        message in prop::collection::vec(any::<u8>(), 0..128)
    ) {
        let keypair = corpus_keypair(&lvl.params(), 0);
        let sig = sign(&message, keypair.private_key(), DEFAULT_MAX_SIGN_ATTEMPTS).unwrap();
        let bytes = sig.to_bytes();
        prop_assert_eq!(bytes.len(), lvl.params().signature_bytes());

        let decoded = Signature::from_bytes(lvl, &bytes).unwrap();
        prop_assert_eq!(&decoded, &sig);
        prop_assert!(verify(&message, &decoded, keypair.public_key()));
    }
}
