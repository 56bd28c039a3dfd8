//! Fixed seeds and messages

use dsig_params::pqc::dilithium::ParameterSet;
use dsig_sign::{keypair_from_seed, KeyPair};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

/// Key generation seeds, hex encoded
pub const CORPUS_SEEDS: &[&str] = &[
    "000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f",
    "7c9935a0b07694aa0c6d10e4db6b1add2fd81a25ccb148032dcd739936737f2d",
    "ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff",
];

/// Decodes corpus seed `index`
pub fn corpus_seed(index: usize) -> [u8; 32] {
    let bytes = hex::decode(CORPUS_SEEDS[index % CORPUS_SEEDS.len()])
        .expect("corpus seeds are valid hex");
    let mut seed = [0u8; 32];
    seed.copy_from_slice(&bytes);
    seed
}

/// Key pair for corpus seed `index` under `params`
pub fn corpus_keypair(params: &ParameterSet, index: usize) -> KeyPair {
    keypair_from_seed(params, &corpus_seed(index)).expect("canonical parameters are valid")
}

/// Messages of assorted lengths and contents
pub fn corpus_messages() -> Vec<Vec<u8>> {
    vec![
        Vec::new(),
        b"a".to_vec(),
        b"The quick brown fox jumps over the lazy dog".to_vec(),
        vec![0u8; 64],
        vec![0xffu8; 300],
        (0..=255u8).collect(),
    ]
}

/// Deterministic RNG for tests that need fresh randomness
pub fn corpus_rng(label: u64) -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(0x6473_6967_0000_0000 ^ label)
}
