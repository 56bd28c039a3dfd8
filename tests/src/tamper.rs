//! Single-point modifications of messages and signatures

use dsig_algorithms::Polynomial;
use dsig_sign::dilithium::PolyVec;
use dsig_sign::Signature;

/// Copy of `message` with bit `bit` flipped
pub fn flip_message_bit(message: &[u8], bit: usize) -> Vec<u8> {
    let mut out = message.to_vec();
    out[bit / 8] ^= 1 << (bit % 8);
    out
}

/// Copy of `sig` with `delta` added to coefficient `col` of z[row]
pub fn shift_z(sig: &Signature, row: usize, col: usize, delta: i64) -> Signature {
    let mut polys = sig.z().polys().to_vec();
    let mut coeffs = vec![0i64; Polynomial::degree()];
    coeffs[col] = delta;
    let shift = Polynomial::from_signed(&coeffs).expect("N coefficients");
    polys[row] = &polys[row] + &shift;
    Signature::from_parts(
        *sig.params(),
        sig.c().clone(),
        PolyVec::from_polys(polys),
        sig.hints().clone(),
    )
    .expect("shape is unchanged")
}

/// Copy of `sig` with the sign of the `nth` non-zero challenge entry flipped
pub fn negate_challenge_entry(sig: &Signature, nth: usize) -> Signature {
    let mut coeffs: Vec<i64> = sig.c().centered_coeffs().iter().map(|&v| v as i64).collect();
    let pos = coeffs
        .iter()
        .enumerate()
        .filter(|&(_, &v)| v != 0)
        .map(|(i, _)| i)
        .nth(nth % sig.params().tau)
        .expect("challenge has tau entries");
    coeffs[pos] = -coeffs[pos];
    let c = Polynomial::from_signed(&coeffs).expect("N coefficients");
    Signature::from_parts(*sig.params(), c, sig.z().clone(), sig.hints().clone())
        .expect("shape is unchanged")
}

/// Copy of `sig` with the `nth` non-zero challenge entry moved to a zero position
pub fn move_challenge_entry(sig: &Signature, nth: usize) -> Signature {
    let mut coeffs: Vec<i64> = sig.c().centered_coeffs().iter().map(|&v| v as i64).collect();
    let from = coeffs
        .iter()
        .enumerate()
        .filter(|&(_, &v)| v != 0)
        .map(|(i, _)| i)
        .nth(nth % sig.params().tau)
        .expect("challenge has tau entries");
    let to = coeffs
        .iter()
        .position(|&v| v == 0)
        .expect("challenge is sparse");
    coeffs.swap(from, to);
    let c = Polynomial::from_signed(&coeffs).expect("N coefficients");
    Signature::from_parts(*sig.params(), c, sig.z().clone(), sig.hints().clone())
        .expect("shape is unchanged")
}
