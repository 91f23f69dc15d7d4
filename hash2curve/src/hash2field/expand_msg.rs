//! `expand_message` interface `for hash_to_field`.

pub(super) mod xmd;
pub(super) mod xof;

use digest::generic_array::{ArrayLength, GenericArray};
use digest::{ExtendableOutput, FixedOutput, Update, XofReader};

/// Salt when the DST is too long
const OVERSIZE_DST_SALT: &[u8] = b"H2C-OVERSIZE-DST-";
/// Maximum domain separation tag length
const MAX_DST_LEN: usize = 255;
/// Maximum `len_in_bytes` accepted by both expanders
const MAX_LEN_IN_BYTES: usize = u16::MAX as usize;

/// Trait for types implementing expand_message interface for `hash_to_field`.
///
/// `K` is the target security level in bytes:
/// <https://www.rfc-editor.org/rfc/rfc9380.html#section-8.9-2.2>
/// <https://www.rfc-editor.org/rfc/rfc9380.html#name-target-security-levels>
///
/// # Errors
/// See implementors of [`ExpandMsg`] for errors.
pub trait ExpandMsg<K> {
    /// Type holding data for the [`Expander`].
    type Expander<'dst>: Expander + Sized;
    /// Error returned by [`ExpandMsg::expand_message`].
    type Error: core::error::Error;

    /// Expands `msg` to the required number of bytes.
    ///
    /// Returns an expander that can be used to call `fill_bytes` until
    /// `len_in_bytes` bytes have been consumed.
    fn expand_message<'dst>(
        msg: &[&[u8]],
        dst: &'dst [&'dst [u8]],
        len_in_bytes: usize,
    ) -> Result<Self::Expander<'dst>, Self::Error>;
}

/// Expander that, call `fill_bytes` until enough bytes have been consumed.
pub trait Expander {
    /// Fill the array with the expanded bytes
    fn fill_bytes(&mut self, okm: &mut [u8]);
}

/// The domain separation tag
///
/// Implements [section 5.3.3 of RFC9380][dst].
///
/// [dst]: https://www.rfc-editor.org/rfc/rfc9380.html#name-using-dsts-longer-than-255-
#[derive(Debug)]
pub(crate) enum Domain<'a, L: ArrayLength<u8>> {
    /// > 255
    Hashed(GenericArray<u8, L>),
    /// <= 255
    Array(&'a [&'a [u8]]),
}

fn dst_len(dst: &[&[u8]]) -> usize {
    dst.iter().map(|slice| slice.len()).sum()
}

/// Absorb `H2C-OVERSIZE-DST- || dst` into a fresh hash state.
fn oversize_dst_state<HashT: Default + Update>(dst: &[&[u8]]) -> HashT {
    let mut state = HashT::default();
    state.update(OVERSIZE_DST_SALT);
    dst.iter().for_each(|slice| state.update(slice));
    state
}

// https://www.rfc-editor.org/rfc/rfc9380.html#section-3.1-4.2
impl<'a, L: ArrayLength<u8>> Domain<'a, L> {
    /// The DST for `expand_message_xof`; an oversize tag is squeezed to
    /// `L = 2 * K` bytes.
    pub fn xof<X>(dst: &'a [&'a [u8]]) -> Result<Self, xof::ExpandMsgXofError>
    where
        X: Default + ExtendableOutput + Update,
    {
        match dst_len(dst) {
            0 => Err(xof::ExpandMsgXofError::EmptyDst),
            1..=MAX_DST_LEN => Ok(Self::Array(dst)),
            _ if L::USIZE > MAX_DST_LEN => Err(xof::ExpandMsgXofError::DstSecurityLevel),
            _ => {
                let mut hashed = GenericArray::<u8, L>::default();
                oversize_dst_state::<X>(dst).finalize_xof().read(&mut hashed);
                Ok(Self::Hashed(hashed))
            }
        }
    }

    /// The DST for `expand_message_xmd`; an oversize tag is replaced by its
    /// `L`-byte digest.
    pub fn xmd<X>(dst: &'a [&'a [u8]]) -> Result<Self, xmd::ExpandMsgXmdError>
    where
        X: Default + FixedOutput<OutputSize = L> + Update,
    {
        match dst_len(dst) {
            0 => Err(xmd::ExpandMsgXmdError::EmptyDst),
            1..=MAX_DST_LEN => Ok(Self::Array(dst)),
            _ if L::USIZE > MAX_DST_LEN => Err(xmd::ExpandMsgXmdError::DstHash),
            _ => Ok(Self::Hashed(oversize_dst_state::<X>(dst).finalize_fixed())),
        }
    }

    /// Absorb the DST bytes, without the trailing length byte.
    pub fn update_hash<HashT: Update>(&self, hash: &mut HashT) {
        match self {
            Self::Hashed(hashed) => hash.update(hashed),
            Self::Array(dst) => dst.iter().for_each(|slice| hash.update(slice)),
        }
    }

    /// `I2OSP(len(DST), 1)`
    pub fn len(&self) -> u8 {
        // both lengths are bounded by MAX_DST_LEN on construction
        match self {
            Self::Hashed(_) => L::U8,
            Self::Array(dst) => u8::try_from(dst_len(dst)).expect("DST length checked on creation"),
        }
    }

    #[cfg(test)]
    pub fn assert(&self, bytes: &[u8]) {
        use std::vec::Vec;

        let data: Vec<u8> = match self {
            Domain::Hashed(d) => d.to_vec(),
            Domain::Array(d) => d.iter().copied().flatten().copied().collect(),
        };
        assert_eq!(data, bytes);
    }

    #[cfg(test)]
    pub fn assert_dst(&self, bytes: &[u8]) {
        self.assert(&bytes[..bytes.len() - 1]);
        assert_eq!(self.len(), bytes[bytes.len() - 1]);
    }
}

/// `len_in_bytes` as the two-byte `I2OSP(len_in_bytes, 2)` value, if it is
/// in `1..=65535`.
pub(crate) fn len_in_bytes_u16(len_in_bytes: usize) -> Option<u16> {
    if len_in_bytes == 0 || len_in_bytes > MAX_LEN_IN_BYTES {
        return None;
    }
    u16::try_from(len_in_bytes).ok()
}
