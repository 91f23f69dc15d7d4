//! The named hash-to-curve suites.
//!
//! Every suite targets the 128-bit security level (`k = 128`). The digest
//! or XOF is a type parameter so callers pick the instantiation named in
//! the suite ID, e.g. [`sha2::Sha512`] for `edwards25519_XMD:SHA-512_ELL2_RO_`.

use crate::{
    DEFAULT_ENCODE_TO_CURVE_SUITE, DEFAULT_HASH_TO_CURVE_SUITE, Edwards25519, Result,
    Ristretto255,
};
use curve25519_dalek::edwards::EdwardsPoint;
use curve25519_dalek::ristretto::RistrettoPoint;
use hash2curve::digest::core_api::BlockSizeUser;
use hash2curve::digest::typenum::U16;
use hash2curve::digest::{ExtendableOutput, FixedOutput, Update};
use hash2curve::{ExpandMsg, ExpandMsgXmd, ExpandMsgXof, Expander, GroupDigest};
use sha2::Sha512;

/// Fill `out` with `expand_message_xmd` output under the hash `H`.
///
/// # Errors
///
/// When `dst` is empty, `H` is too narrow for 128-bit security, or
/// `out.len()` is zero, above 65535 or needs more than 255 hash blocks.
pub fn expand_message_xmd<H>(out: &mut [u8], dst: &[u8], msg: &[u8]) -> Result<()>
where
    H: BlockSizeUser + Default + FixedOutput + Update,
{
    <ExpandMsgXmd<H> as ExpandMsg<U16>>::expand_message(&[msg], &[dst], out.len())?
        .fill_bytes(out);
    Ok(())
}

/// Fill `out` with `expand_message_xof` output under the XOF `X`.
///
/// # Errors
///
/// When `dst` is empty or `out.len()` is zero or above 65535.
pub fn expand_message_xof<X>(out: &mut [u8], dst: &[u8], msg: &[u8]) -> Result<()>
where
    X: Default + ExtendableOutput + Update,
{
    <ExpandMsgXof<X> as ExpandMsg<U16>>::expand_message(&[msg], &[dst], out.len())?
        .fill_bytes(out);
    Ok(())
}

/// `edwards25519_XMD:<H>_ELL2_RO_`
///
/// # Errors
///
/// See [`expand_message_xmd`].
pub fn edwards25519_xmd_ell2_ro<H>(dst: &[u8], msg: &[u8]) -> Result<EdwardsPoint>
where
    H: BlockSizeUser + Default + FixedOutput + Update,
{
    Ok(Edwards25519::hash_from_bytes::<ExpandMsgXmd<H>>(&[msg], &[dst])?)
}

/// `edwards25519_XMD:<H>_ELL2_NU_`
///
/// # Errors
///
/// See [`expand_message_xmd`].
pub fn edwards25519_xmd_ell2_nu<H>(dst: &[u8], msg: &[u8]) -> Result<EdwardsPoint>
where
    H: BlockSizeUser + Default + FixedOutput + Update,
{
    Ok(Edwards25519::encode_from_bytes::<ExpandMsgXmd<H>>(&[msg], &[dst])?)
}

/// `edwards25519_XOF:<X>_ELL2_RO_`
///
/// # Errors
///
/// See [`expand_message_xof`].
pub fn edwards25519_xof_ell2_ro<X>(dst: &[u8], msg: &[u8]) -> Result<EdwardsPoint>
where
    X: Default + ExtendableOutput + Update,
{
    Ok(Edwards25519::hash_from_bytes::<ExpandMsgXof<X>>(&[msg], &[dst])?)
}

/// `edwards25519_XOF:<X>_ELL2_NU_`
///
/// # Errors
///
/// See [`expand_message_xof`].
pub fn edwards25519_xof_ell2_nu<X>(dst: &[u8], msg: &[u8]) -> Result<EdwardsPoint>
where
    X: Default + ExtendableOutput + Update,
{
    Ok(Edwards25519::encode_from_bytes::<ExpandMsgXof<X>>(&[msg], &[dst])?)
}

/// `ristretto255_XMD:<H>_R255MAP_RO_`
///
/// # Errors
///
/// See [`expand_message_xmd`].
pub fn ristretto255_xmd_r255map_ro<H>(dst: &[u8], msg: &[u8]) -> Result<RistrettoPoint>
where
    H: BlockSizeUser + Default + FixedOutput + Update,
{
    Ok(Ristretto255::hash_from_bytes::<ExpandMsgXmd<H>>(&[msg], &[dst])?)
}

/// `ristretto255_XOF:<X>_R255MAP_RO_`
///
/// # Errors
///
/// See [`expand_message_xof`].
pub fn ristretto255_xof_r255map_ro<X>(dst: &[u8], msg: &[u8]) -> Result<RistrettoPoint>
where
    X: Default + ExtendableOutput + Update,
{
    Ok(Ristretto255::hash_from_bytes::<ExpandMsgXof<X>>(&[msg], &[dst])?)
}

/// Hash a message to the prime-order subgroup of edwards25519.
///
/// Hash using the default domain separation tag and hash function.
/// For more control see [`edwards25519_xmd_ell2_ro()`].
pub fn hash_with_defaults(msg: &[u8]) -> EdwardsPoint {
    edwards25519_xmd_ell2_ro::<Sha512>(DEFAULT_HASH_TO_CURVE_SUITE, msg)
        .expect("should never fail with the given `ExpandMsg` and `dst`")
}

/// Encode a message to the prime-order subgroup of edwards25519.
///
/// Encode using the default domain separation tag and hash function.
/// For more control see [`edwards25519_xmd_ell2_nu()`].
pub fn encode_with_defaults(msg: &[u8]) -> EdwardsPoint {
    edwards25519_xmd_ell2_nu::<Sha512>(DEFAULT_ENCODE_TO_CURVE_SUITE, msg)
        .expect("should never fail with the given `ExpandMsg` and `dst`")
}
