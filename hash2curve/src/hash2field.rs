//! Traits for hashing to field elements.
//!
//! <https://www.rfc-editor.org/rfc/rfc9380.html>

mod expand_msg;

pub use expand_msg::{xmd::*, xof::*, *};

use digest::generic_array::{ArrayLength, GenericArray};
use digest::typenum::Unsigned;

/// The trait for helping to convert to a field element.
pub trait FromOkm {
    /// The number of bytes needed to convert to a field element.
    ///
    /// This is the `L` parameter of
    /// [section 5 of RFC9380](https://www.rfc-editor.org/rfc/rfc9380.html#section-5-6).
    type Length: ArrayLength<u8>;

    /// Convert a byte sequence into a field element.
    fn from_okm(data: &GenericArray<u8, Self::Length>) -> Self;
}

/// Convert an arbitrary byte sequence into a field element.
///
/// <https://www.rfc-editor.org/rfc/rfc9380.html#name-hash_to_field-implementatio>
///
/// `len_in_bytes = T::Length * out.len()`
///
/// # Errors
/// See implementors of [`ExpandMsg`] for errors:
/// - [`ExpandMsgXmd`]
/// - [`ExpandMsgXof`]
///
/// A `len_in_bytes` that does not fit in `usize` is passed on as `usize::MAX`,
/// which every expander rejects.
///
/// [`ExpandMsgXmd`]: crate::hash2field::ExpandMsgXmd
/// [`ExpandMsgXof`]: crate::hash2field::ExpandMsgXof
pub fn hash_to_field<E, K, T>(data: &[&[u8]], domain: &[&[u8]], out: &mut [T]) -> Result<(), E::Error>
where
    E: ExpandMsg<K>,
    T: FromOkm,
{
    let len_in_bytes = T::Length::USIZE.saturating_mul(out.len());
    let mut tmp = GenericArray::<u8, T::Length>::default();
    let mut expander = E::expand_message(data, domain, len_in_bytes)?;
    for o in out.iter_mut() {
        expander.fill_bytes(&mut tmp);
        *o = T::from_okm(&tmp);
    }
    Ok(())
}
