#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![forbid(unsafe_code)]
#![warn(
    clippy::unwrap_used,
    clippy::mod_module_files,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    trivial_casts,
    trivial_numeric_casts,
    unused,
    unused_attributes,
    unused_imports,
    unused_mut,
    unused_must_use
)]

#[cfg(feature = "alloc")]
extern crate alloc;
#[cfg(any(feature = "std", test))]
extern crate std;

// Internal macros. Must come first!
#[macro_use]
pub(crate) mod macros;

pub use curve25519_dalek;
pub use hash2curve;
pub use rand_core;
pub use sha2;
pub use subtle;

pub(crate) mod constants;
pub(crate) mod edwards;
pub mod elligator2;
pub(crate) mod error;
pub(crate) mod field;
pub(crate) mod ristretto;
pub(crate) mod suites;

pub use edwards::AffinePoint;
pub use error::{Error, Result};
pub use field::FieldElement;
pub use ristretto::Ristretto255;
pub use suites::*;

use curve25519_dalek::edwards::EdwardsPoint;
use hash2curve::digest::typenum::U16;
use hash2curve::{GroupDigest, MapToCurve};

/// edwards25519 curve.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Edwards25519;

impl MapToCurve for Edwards25519 {
    type FieldElement = FieldElement;
    type Output = EdwardsPoint;

    fn map_to_curve(element: FieldElement) -> EdwardsPoint {
        elligator2::map_to_edwards(&element)
    }

    fn clear_cofactor(point: EdwardsPoint) -> EdwardsPoint {
        point.mul_by_cofactor()
    }
}

impl GroupDigest for Edwards25519 {
    type K = U16;
}

/// `edwards25519_XMD:SHA-512_ELL2_RO_`
pub const DEFAULT_HASH_TO_CURVE_SUITE: &[u8] = b"edwards25519_XMD:SHA-512_ELL2_RO_";

/// `edwards25519_XMD:SHA-512_ELL2_NU_`
pub const DEFAULT_ENCODE_TO_CURVE_SUITE: &[u8] = b"edwards25519_XMD:SHA-512_ELL2_NU_";
