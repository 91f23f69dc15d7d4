//! Hashing to the ristretto255 group.
//!
//! <https://www.rfc-editor.org/rfc/rfc9496.html#name-element-derivation>

use curve25519_dalek::ristretto::RistrettoPoint;
use hash2curve::digest::typenum::U16;
use hash2curve::{ExpandMsg, Expander};

/// ristretto255 group.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Ristretto255;

impl Ristretto255 {
    /// Number of expanded bytes consumed by the one-way map.
    pub const UNIFORM_BYTES_LEN: usize = 64;

    /// Computes `hash_to_ristretto255`: expand `msg` to 64 uniform bytes and
    /// apply the one-way map, which adds the images of both 32-byte halves.
    ///
    /// There is no separate encode variant; the one-way map is already
    /// uniform.
    ///
    /// # Errors
    ///
    /// When the chosen `ExpandMsg` implementation returns an error.
    pub fn hash_from_bytes<X>(msg: &[&[u8]], dst: &[&[u8]]) -> Result<RistrettoPoint, X::Error>
    where
        X: ExpandMsg<U16>,
    {
        let mut uniform_bytes = [0u8; Self::UNIFORM_BYTES_LEN];
        X::expand_message(msg, dst, uniform_bytes.len())?.fill_bytes(&mut uniform_bytes);
        Ok(RistrettoPoint::from_uniform_bytes(&uniform_bytes))
    }
}
