//! `expand_message_xof` for the `ExpandMsg` trait

use core::{fmt, marker::PhantomData, ops::Mul};

use super::{Domain, ExpandMsg, Expander, len_in_bytes_u16};
use digest::generic_array::ArrayLength;
use digest::typenum::{Prod, U2};
use digest::{ExtendableOutput, Update, XofReader};

/// Implements `expand_message_xof` via the [`ExpandMsg`] trait:
/// <https://www.rfc-editor.org/rfc/rfc9380.html#name-expand_message_xof>
///
/// # Errors
/// - `dst` contains no bytes
/// - `dst > 255 && K * 2 > 255`
/// - `len_in_bytes == 0` or `len_in_bytes > u16::MAX`
#[derive(Debug)]
pub struct ExpandMsgXof<HashT>(PhantomData<HashT>)
where
    HashT: Default + ExtendableOutput + Update;

/// Error type for [`ExpandMsgXof`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExpandMsgXofError {
    /// The domain separation tag is empty.
    EmptyDst,
    /// The domain separation tag is longer than 255 bytes and `2 * K` is
    /// too large to replace it.
    DstSecurityLevel,
    /// `len_in_bytes` is zero or exceeds `u16::MAX`.
    Length,
}

impl fmt::Display for ExpandMsgXofError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDst => write!(f, "the domain separation tag is empty"),
            Self::DstSecurityLevel => write!(
                f,
                "the security level is too high to hash an oversized domain separation tag"
            ),
            Self::Length => write!(f, "the requested output length is out of range"),
        }
    }
}

impl core::error::Error for ExpandMsgXofError {}

impl<HashT, K> ExpandMsg<K> for ExpandMsgXof<HashT>
where
    HashT: Default + ExtendableOutput + Update,
    K: Mul<U2>,
    Prod<K, U2>: ArrayLength<u8>,
{
    type Expander<'dst> = ExpanderXof<HashT>;
    type Error = ExpandMsgXofError;

    fn expand_message<'dst>(
        msg: &[&[u8]],
        dst: &'dst [&'dst [u8]],
        len_in_bytes: usize,
    ) -> Result<Self::Expander<'dst>, Self::Error> {
        let len_in_bytes = len_in_bytes_u16(len_in_bytes).ok_or(ExpandMsgXofError::Length)?;

        let domain = Domain::<Prod<K, U2>>::xof::<HashT>(dst)?;
        let mut reader = HashT::default();

        for msg in msg {
            reader.update(msg);
        }

        reader.update(&len_in_bytes.to_be_bytes());
        domain.update_hash(&mut reader);
        reader.update(&[domain.len()]);
        let reader = reader.finalize_xof();
        Ok(ExpanderXof { reader })
    }
}

/// [`Expander`] type for [`ExpandMsgXof`].
pub struct ExpanderXof<HashT>
where
    HashT: Default + ExtendableOutput + Update,
{
    reader: <HashT as ExtendableOutput>::Reader,
}

impl<HashT> fmt::Debug for ExpanderXof<HashT>
where
    HashT: Default + ExtendableOutput + Update,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExpanderXof").finish_non_exhaustive()
    }
}

impl<HashT> Expander for ExpanderXof<HashT>
where
    HashT: Default + ExtendableOutput + Update,
{
    fn fill_bytes(&mut self, okm: &mut [u8]) {
        self.reader.read(okm);
    }
}
