//! `expand_message_xmd` based on a hash function.

use core::{fmt, marker::PhantomData};

use super::{Domain, ExpandMsg, Expander, len_in_bytes_u16};
use digest::core_api::BlockSizeUser;
use digest::generic_array::GenericArray;
use digest::typenum::Unsigned;
use digest::{FixedOutput, Output, Update};

/// Implements `expand_message_xmd` via the [`ExpandMsg`] trait:
/// <https://www.rfc-editor.org/rfc/rfc9380.html#name-expand_message_xmd>
///
/// # Errors
/// - `dst` contains no bytes
/// - `HashT::OutputSize < 2 * K` or `dst > 255 && HashT::OutputSize > 255`
/// - `len_in_bytes == 0`, `len_in_bytes > u16::MAX` or
///   `len_in_bytes > 255 * HashT::OutputSize`
#[derive(Debug)]
pub struct ExpandMsgXmd<HashT>(PhantomData<HashT>)
where
    HashT: BlockSizeUser + Default + FixedOutput + Update;

/// Error type for [`ExpandMsgXmd`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExpandMsgXmdError {
    /// The domain separation tag is empty.
    EmptyDst,
    /// The hash output is too short for the target security level, or too
    /// long to stand in for an oversized domain separation tag.
    DstHash,
    /// `len_in_bytes` is zero, exceeds `u16::MAX`, or needs more than 255
    /// hash blocks.
    Length,
}

impl fmt::Display for ExpandMsgXmdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDst => write!(f, "the domain separation tag is empty"),
            Self::DstHash => write!(
                f,
                "the hash output size does not fit the security level or the domain separation tag"
            ),
            Self::Length => write!(f, "the requested output length is out of range"),
        }
    }
}

impl core::error::Error for ExpandMsgXmdError {}

impl<HashT, K> ExpandMsg<K> for ExpandMsgXmd<HashT>
where
    HashT: BlockSizeUser + Default + FixedOutput + Update,
    K: Unsigned,
{
    type Expander<'dst> = ExpanderXmd<'dst, HashT>;
    type Error = ExpandMsgXmdError;

    fn expand_message<'dst>(
        msg: &[&[u8]],
        dst: &'dst [&'dst [u8]],
        len_in_bytes: usize,
    ) -> Result<Self::Expander<'dst>, Self::Error> {
        let b_in_bytes = HashT::OutputSize::USIZE;

        // `b_in_bytes >= 2 * k`
        if b_in_bytes < K::USIZE.saturating_mul(2) {
            return Err(ExpandMsgXmdError::DstHash);
        }

        let len_in_bytes_u16 = len_in_bytes_u16(len_in_bytes).ok_or(ExpandMsgXmdError::Length)?;

        // `255 * <b_in_bytes>` can not exceed `u16::MAX`
        let ell = u8::try_from(len_in_bytes.div_ceil(b_in_bytes))
            .map_err(|_| ExpandMsgXmdError::Length)?;

        let domain = Domain::xmd::<HashT>(dst)?;
        let mut b_0 = HashT::default();
        b_0.update(&GenericArray::<u8, HashT::BlockSize>::default());

        for msg in msg {
            b_0.update(msg);
        }

        b_0.update(&len_in_bytes_u16.to_be_bytes());
        b_0.update(&[0]);
        domain.update_hash(&mut b_0);
        b_0.update(&[domain.len()]);
        let b_0 = b_0.finalize_fixed();

        let mut b_vals = HashT::default();
        b_vals.update(&b_0[..]);
        b_vals.update(&[1u8]);
        domain.update_hash(&mut b_vals);
        b_vals.update(&[domain.len()]);
        let b_vals = b_vals.finalize_fixed();

        Ok(ExpanderXmd {
            b_0,
            b_vals,
            domain,
            index: 1,
            offset: 0,
            ell,
        })
    }
}

/// [`Expander`] type for [`ExpandMsgXmd`].
pub struct ExpanderXmd<'a, HashT>
where
    HashT: BlockSizeUser + Default + FixedOutput + Update,
{
    b_0: Output<HashT>,
    b_vals: Output<HashT>,
    domain: Domain<'a, HashT::OutputSize>,
    index: u8,
    offset: usize,
    ell: u8,
}

impl<HashT> fmt::Debug for ExpanderXmd<'_, HashT>
where
    HashT: BlockSizeUser + Default + FixedOutput + Update,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExpanderXmd")
            .field("index", &self.index)
            .field("ell", &self.ell)
            .finish_non_exhaustive()
    }
}

impl<HashT> ExpanderXmd<'_, HashT>
where
    HashT: BlockSizeUser + Default + FixedOutput + Update,
{
    fn next(&mut self) -> bool {
        if self.index < self.ell {
            self.index += 1;
            self.offset = 0;
            // b_0 XOR b_(idx - 1)
            let mut tmp = Output::<HashT>::default();
            self.b_0
                .iter()
                .zip(&self.b_vals[..])
                .enumerate()
                .for_each(|(j, (b0val, bi1val))| tmp[j] = b0val ^ bi1val);
            let mut b_vals = HashT::default();
            b_vals.update(&tmp);
            b_vals.update(&[self.index]);
            self.domain.update_hash(&mut b_vals);
            b_vals.update(&[self.domain.len()]);
            self.b_vals = b_vals.finalize_fixed();
            true
        } else {
            false
        }
    }
}

impl<HashT> Expander for ExpanderXmd<'_, HashT>
where
    HashT: BlockSizeUser + Default + FixedOutput + Update,
{
    fn fill_bytes(&mut self, okm: &mut [u8]) {
        for b in okm {
            if self.offset == self.b_vals.len() && !self.next() {
                return;
            }
            *b = self.b_vals[self.offset];
            self.offset += 1;
        }
    }
}
