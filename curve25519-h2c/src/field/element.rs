// -*- mode: rust; -*-
//
// This file is part of curve25519-dalek.
// Copyright (c) 2016-2021 isis agora lovecruft
// Copyright (c) 2016-2019 Henry de Valence
// See LICENSE for licensing information.
//
// Authors:
// - isis agora lovecruft <isis@patternsinthevoid.net>
// - Henry de Valence <hdevalence@hdevalence.ca>

use core::fmt::{self, Debug, Display, Formatter, LowerHex, UpperHex};
use core::iter::{Product, Sum};
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use super::fe51::FieldElement51;
use crate::Error;
use hash2curve::FromOkm;
use hash2curve::digest::generic_array::GenericArray;
use hash2curve::digest::typenum::U48;
use rand_core::RngCore;
use subtle::{Choice, ConditionallyNegatable, ConditionallySelectable, ConstantTimeEq};
use zeroize::DefaultIsZeroes;

/// An element of \\( \mathbb Z / (2\^{255} - 19)\\).
///
/// The internal limbs are not canonical. Equality, the byte encoding and
/// the sign all go through the canonical little-endian encoding.
#[derive(Clone, Copy, Default)]
pub struct FieldElement(pub(crate) FieldElement51);

impl Display for FieldElement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{self:x}")
    }
}

impl Debug for FieldElement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "FieldElement({self:x})")
    }
}

impl LowerHex for FieldElement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for byte in self.to_bytes().iter().rev() {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl UpperHex for FieldElement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for byte in self.to_bytes().iter().rev() {
            write!(f, "{byte:02X}")?;
        }
        Ok(())
    }
}

impl ConstantTimeEq for FieldElement {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.to_bytes().ct_eq(&other.to_bytes())
    }
}

impl ConditionallySelectable for FieldElement {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self(FieldElement51::conditional_select(&a.0, &b.0, choice))
    }

    fn conditional_swap(a: &mut Self, b: &mut Self, choice: Choice) {
        FieldElement51::conditional_swap(&mut a.0, &mut b.0, choice);
    }

    fn conditional_assign(&mut self, other: &Self, choice: Choice) {
        self.0.conditional_assign(&other.0, choice);
    }
}

impl PartialEq for FieldElement {
    fn eq(&self, other: &FieldElement) -> bool {
        self.ct_eq(other).into()
    }
}
impl Eq for FieldElement {}

impl DefaultIsZeroes for FieldElement {}

impl FromOkm for FieldElement {
    type Length = U48;

    /// `OS2IP(okm) mod p`, with the big-endian block reversed for the
    /// little-endian codec.
    fn from_okm(data: &GenericArray<u8, U48>) -> Self {
        let mut wide = [0u8; 64];
        wide[..48].copy_from_slice(data);
        wide[..48].reverse();
        Self::from_bytes_wide(&wide)
    }
}

impl TryFrom<&[u8]> for FieldElement {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Error> {
        <&[u8; 32]>::try_from(bytes)
            .map(Self::from_bytes)
            .map_err(|_| Error::InvalidLength)
    }
}

impl From<FieldElement> for [u8; 32] {
    fn from(fe: FieldElement) -> [u8; 32] {
        fe.to_bytes()
    }
}

impl Add<&FieldElement> for &FieldElement {
    type Output = FieldElement;

    fn add(self, other: &FieldElement) -> FieldElement {
        FieldElement(&self.0 + &other.0)
    }
}

define_op_variants!(
    Add::add,
    LHS = FieldElement,
    RHS = FieldElement,
    Output = FieldElement
);
define_op_assign_variants!(
    AddAssign::add_assign,
    Add::add,
    LHS = FieldElement,
    RHS = FieldElement
);

impl Sub<&FieldElement> for &FieldElement {
    type Output = FieldElement;

    fn sub(self, other: &FieldElement) -> FieldElement {
        FieldElement(&self.0 - &other.0)
    }
}

define_op_variants!(
    Sub::sub,
    LHS = FieldElement,
    RHS = FieldElement,
    Output = FieldElement
);
define_op_assign_variants!(
    SubAssign::sub_assign,
    Sub::sub,
    LHS = FieldElement,
    RHS = FieldElement
);

impl Mul<&FieldElement> for &FieldElement {
    type Output = FieldElement;

    fn mul(self, other: &FieldElement) -> FieldElement {
        FieldElement(&self.0 * &other.0)
    }
}

define_op_variants!(
    Mul::mul,
    LHS = FieldElement,
    RHS = FieldElement,
    Output = FieldElement
);
define_op_assign_variants!(
    MulAssign::mul_assign,
    Mul::mul,
    LHS = FieldElement,
    RHS = FieldElement
);

impl Neg for &FieldElement {
    type Output = FieldElement;

    fn neg(self) -> FieldElement {
        FieldElement(-&self.0)
    }
}

impl Neg for FieldElement {
    type Output = FieldElement;

    fn neg(self) -> FieldElement {
        -&self
    }
}

impl Sum for FieldElement {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.reduce(Add::add).unwrap_or(Self::ZERO)
    }
}

impl<'a> Sum<&'a FieldElement> for FieldElement {
    fn sum<I: Iterator<Item = &'a FieldElement>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl Product for FieldElement {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.reduce(Mul::mul).unwrap_or(Self::ONE)
    }
}

impl<'a> Product<&'a FieldElement> for FieldElement {
    fn product<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().product()
    }
}

impl FieldElement {
    /// The additive identity
    pub const ZERO: Self = Self(FieldElement51::ZERO);
    /// The multiplicative identity
    pub const ONE: Self = Self(FieldElement51::ONE);
    /// 2
    pub const TWO: Self = Self::from_limbs([2, 0, 0, 0, 0]);
    /// p - 1
    pub const MINUS_ONE: Self = Self::from_limbs([
        2251799813685228,
        2251799813685247,
        2251799813685247,
        2251799813685247,
        2251799813685247,
    ]);

    pub(crate) const fn from_limbs(limbs: [u64; 5]) -> Self {
        Self(FieldElement51::from_limbs(limbs))
    }

    /// Decode 32 little-endian bytes. The top bit is ignored and values in
    /// `[p, 2^255)` are reduced.
    pub const fn from_bytes(bytes: &[u8; 32]) -> Self {
        Self(FieldElement51::from_bytes(bytes))
    }

    /// The canonical 32-byte little-endian encoding.
    pub fn to_bytes(&self) -> [u8; 32] {
        self.0.to_bytes()
    }

    /// Reduce a 64-byte little-endian integer modulo p.
    pub fn from_bytes_wide(bytes: &[u8; 64]) -> Self {
        let mut lo = [0u8; 32];
        let mut hi = [0u8; 32];
        lo.copy_from_slice(&bytes[..32]);
        hi.copy_from_slice(&bytes[32..]);

        // from_bytes drops bit 255 of each half, so add those back:
        // 2^255 = 19 and 2^511 = 722 (mod p)
        let lo_top_bit = u16::from(lo[31] >> 7);
        let hi_top_bit = u16::from(hi[31] >> 7);
        lo[31] &= 0x7f;
        hi[31] &= 0x7f;

        let mut top_bits = [0u8; 32];
        top_bits[..2].copy_from_slice(&(lo_top_bit * 19 + hi_top_bit * 722).to_le_bytes());

        // 2^256 = 38 (mod p)
        const THIRTY_EIGHT: FieldElement = FieldElement::from_limbs([38, 0, 0, 0, 0]);

        Self::from_bytes(&lo) + Self::from_bytes(&top_bits) + THIRTY_EIGHT * Self::from_bytes(&hi)
    }

    /// Sample a uniformly distributed element from 64 random bytes.
    pub fn random<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        let mut bytes = [0u8; 64];
        rng.fill_bytes(&mut bytes);
        Self::from_bytes_wide(&bytes)
    }

    /// The low bit of the canonical encoding.
    pub fn is_negative(&self) -> Choice {
        (self.to_bytes()[0] & 1).into()
    }

    /// Whether this is zero, in constant time.
    pub fn is_zero(&self) -> Choice {
        self.to_bytes().ct_eq(&[0u8; 32])
    }

    /// Squares a field element
    pub fn square(&self) -> Self {
        Self(self.0.square())
    }

    /// Computes `2 * self^2`
    pub fn square2(&self) -> Self {
        Self(self.0.square2())
    }

    /// Squares a field element `k` times, `k >= 1`
    pub fn pow2k(&self, k: u32) -> Self {
        Self(self.0.pow2k(k))
    }

    /// Computes `(self^(2^250 - 1), self^11)`, shared by [`Self::invert`]
    /// and [`Self::pow_p58`].
    #[rustfmt::skip]
    fn pow22501(&self) -> (FieldElement, FieldElement) {
        // Each t_i is self^e_i; the column lists the set bits of e_i.
        let t0  = self.square();           // 1
        let t1  = t0.pow2k(2);             // 3
        let t2  = self * t1;               // 3,0
        let t3  = t0 * t2;                 // 3,1,0
        let t4  = t3.square();             // 4,2,1
        let t5  = t2 * t4;                 // 4..0
        let t6  = t5.pow2k(5);             // 9..5
        let t7  = t6 * t5;                 // 9..0
        let t8  = t7.pow2k(10);            // 19..10
        let t9  = t8 * t7;                 // 19..0
        let t10 = t9.pow2k(20);            // 39..20
        let t11 = t10 * t9;                // 39..0
        let t12 = t11.pow2k(10);           // 49..10
        let t13 = t12 * t7;                // 49..0
        let t14 = t13.pow2k(50);           // 99..50
        let t15 = t14 * t13;               // 99..0
        let t16 = t15.pow2k(100);          // 199..100
        let t17 = t16 * t15;               // 199..0
        let t18 = t17.pow2k(50);           // 249..50
        let t19 = t18 * t13;               // 249..0

        (t19, t3)
    }

    /// Inverts a field element as `self^(p - 2)`. Zero maps to zero.
    pub fn invert(&self) -> Self {
        // p - 2 = 2^255 - 21 has the bits 254..5,3,1,0
        let (t19, t3) = self.pow22501();
        t19.pow2k(5) * t3
    }

    /// Computes `self^((p - 5) / 8) = self^(2^252 - 3)`.
    pub fn pow_p58(&self) -> Self {
        // bits 251..2,0
        let (t19, _) = self.pow22501();
        t19.pow2k(2) * self
    }

    /// Computes the non-negative square root of `u / v`, or of `i * u / v`
    /// when `u / v` is not a square.
    ///
    /// Returns
    /// - `(+sqrt(u/v), 1)` if `v` is nonzero and `u/v` is square,
    /// - `(0, 1)` if `u` is zero,
    /// - `(0, 0)` if `v` is zero and `u` is nonzero,
    /// - `(+sqrt(i*u/v), 0)` if `u/v` is not a square.
    pub fn sqrt_ratio_i(u: &FieldElement, v: &FieldElement) -> (FieldElement, Choice) {
        // r = u^((p+3)/8) v^(p-1-(p+3)/8) = (u v^3) (u v^7)^((p-5)/8),
        // so v r^2 = ±u or ±i u, and the sign tells which root we hold.
        let v3 = v.square() * v;
        let v7 = v3.square() * v;
        let mut r = (u * v3) * (u * v7).pow_p58();
        let check = v * r.square();

        let i = &FieldElement::SQRT_M1;

        let correct_sign_sqrt = check.ct_eq(u);
        let flipped_sign_sqrt = check.ct_eq(&-u);
        let flipped_sign_sqrt_i = check.ct_eq(&(-u * i));

        let r_prime = i * r;
        r.conditional_assign(&r_prime, flipped_sign_sqrt | flipped_sign_sqrt_i);

        let r_is_negative = r.is_negative();
        r.conditional_negate(r_is_negative);

        (r, correct_sign_sqrt | flipped_sign_sqrt)
    }

    /// Computes `sqrt(1 / self)`, see [`Self::sqrt_ratio_i`].
    pub fn inv_sqrt(&self) -> (FieldElement, Choice) {
        Self::sqrt_ratio_i(&Self::ONE, self)
    }

    /// Replace each element of `inputs` with its inverse using a single
    /// field inversion.
    ///
    /// # Panics
    /// If any input is zero.
    #[cfg(feature = "alloc")]
    pub fn batch_invert(inputs: &mut [FieldElement]) {
        // Montgomery's trick: scratch[i] holds the product of inputs[..i]
        let mut scratch = alloc::vec![FieldElement::ONE; inputs.len()];
        let mut acc = FieldElement::ONE;

        for (input, scratch) in inputs.iter().zip(scratch.iter_mut()) {
            *scratch = acc;
            acc *= input;
        }

        assert!(
            bool::from(!acc.is_zero()),
            "batch_invert input contains zero"
        );

        acc = acc.invert();

        for (input, scratch) in inputs.iter_mut().rev().zip(scratch.into_iter().rev()) {
            let tmp = acc * *input;
            *input = acc * scratch;
            acc = tmp;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hash2curve::digest::typenum::U16;
    use hash2curve::{ExpandMsgXmd, hash_to_field};
    use hex_literal::hex;
    use proptest::prelude::*;
    use sha2::Sha512;

    /// Random element a of GF(2^255-19)
    const A_BYTES: [u8; 32] =
        hex!("04fedf98a7fa0a688492bd590807a7039ed1f6f2e1d9e2a4a4514736f3c3a917");
    /// a^2
    const ASQ_BYTES: [u8; 32] =
        hex!("7597249ee606feab2404566807912d5d0b0f3f1cb26ef2e2639c12ba730be362");
    /// 2 * a^2
    const ASQ2_BYTES: [u8; 32] =
        hex!("fd2e493ccd0dfc574908acd00e225bba161e7e3864dde4c5c7382574e716c645");
    /// 1/a
    const AINV_BYTES: [u8; 32] =
        hex!("961bcd8d4d5ea23ae9363793db7b4d70b80dc055d04c1d7b9071d8e9b618e630");
    /// a^(2^250 - 1) and a^11
    const A22501_BYTES: [u8; 32] =
        hex!("ec613f4bd3722731bcc959326699cfccb3a442e9dde5695b0b832998c325011d");
    const A11_BYTES: [u8; 32] =
        hex!("99c55a113dfac1906b048068feeb507cb6febe039902fed99a2d598d4763fd1c");
    /// a^((p-5)/8)
    const AP58_BYTES: [u8; 32] =
        hex!("6a4f24891f576036d0be123c8ff5b159e0f0b81b20d2b51f1521f9e3e1612155");

    fn a() -> FieldElement {
        FieldElement::from_bytes(&A_BYTES)
    }

    #[test]
    fn a_mul_a_vs_a_squared_constant() {
        let asq = FieldElement::from_bytes(&ASQ_BYTES);
        assert_eq!(a() * a(), asq);
        assert_eq!(a().square(), asq);
        assert_eq!(a().pow2k(1), asq);
        assert_eq!(a().square2(), FieldElement::from_bytes(&ASQ2_BYTES));
    }

    #[test]
    fn a_invert_vs_inverse_of_a_constant() {
        let ainv = FieldElement::from_bytes(&AINV_BYTES);
        assert_eq!(a().invert(), ainv);
        assert_eq!(a() * ainv, FieldElement::ONE);
    }

    #[test]
    fn a_pow22501_and_p58_constants() {
        let (t19, t3) = a().pow22501();
        assert_eq!(t19, FieldElement::from_bytes(&A22501_BYTES));
        assert_eq!(t3, FieldElement::from_bytes(&A11_BYTES));
        assert_eq!(a().pow_p58(), FieldElement::from_bytes(&AP58_BYTES));
    }

    #[test]
    fn invert_zero_is_zero() {
        assert_eq!(FieldElement::ZERO.invert(), FieldElement::ZERO);
    }

    #[test]
    #[cfg(feature = "alloc")]
    fn batch_invert_a_matches_nonbatched() {
        let a = a();
        let ap58 = FieldElement::from_bytes(&AP58_BYTES);
        let asq = FieldElement::from_bytes(&ASQ_BYTES);
        let ainv = FieldElement::from_bytes(&AINV_BYTES);
        let a2 = a + a;
        let a_list = [a, ap58, asq, ainv, a2];
        let mut ainv_list = a_list;
        FieldElement::batch_invert(&mut ainv_list);
        for (x, xinv) in a_list.iter().zip(ainv_list.iter()) {
            assert_eq!(x.invert(), *xinv);
        }
    }

    #[test]
    #[cfg(feature = "alloc")]
    fn batch_invert_empty() {
        FieldElement::batch_invert(&mut []);
    }

    #[test]
    #[cfg(feature = "alloc")]
    #[should_panic(expected = "batch_invert input contains zero")]
    fn batch_invert_rejects_zero() {
        let mut inputs = [FieldElement::ONE, FieldElement::ZERO, FieldElement::TWO];
        FieldElement::batch_invert(&mut inputs);
    }

    #[test]
    fn sqrt_ratio_behavior() {
        let zero = FieldElement::ZERO;
        let one = FieldElement::ONE;
        let i = FieldElement::SQRT_M1;
        let two = FieldElement::TWO;
        let four = two + two;

        // 0/0 should return (0, 1) since u is 0
        let (sqrt, choice) = FieldElement::sqrt_ratio_i(&zero, &zero);
        assert!(bool::from(choice));
        assert_eq!(sqrt, zero);

        // 1/0 should return (0, 0) since v is 0, u is nonzero
        let (sqrt, choice) = FieldElement::sqrt_ratio_i(&one, &zero);
        assert!(!bool::from(choice));
        assert_eq!(sqrt, zero);

        // 2/1 is nonsquare, so we expect (sqrt(i*2), 0)
        let (sqrt, choice) = FieldElement::sqrt_ratio_i(&two, &one);
        assert!(!bool::from(choice));
        assert_eq!(sqrt.square(), two * i);
        assert_eq!(
            sqrt.to_bytes(),
            hex!("3c5ff1b5d8e4113b871bd052f9e7bcd0582804c266ffb2d4f4203eb07fdb7c54")
        );
        assert!(!bool::from(sqrt.is_negative()));

        // 4/1 is square, so we expect (2, 1)
        let (sqrt, choice) = FieldElement::sqrt_ratio_i(&four, &one);
        assert!(bool::from(choice));
        assert_eq!(sqrt, two);

        // 1/4 is square, so we expect (-1/2, 1): +1/2 is odd
        let (sqrt, choice) = FieldElement::sqrt_ratio_i(&one, &four);
        assert!(bool::from(choice));
        assert_eq!(sqrt.square() * four, one);
        assert_eq!(sqrt * two, -one);
        assert!(bool::from(two.invert().is_negative()));
        assert_eq!(
            sqrt.to_bytes(),
            hex!("f6ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff3f")
        );
        assert!(!bool::from(sqrt.is_negative()));
    }

    #[test]
    fn inv_sqrt_of_four() {
        let four = FieldElement::TWO.square();
        let (r, ok) = four.inv_sqrt();
        assert!(bool::from(ok));
        assert_eq!(r.square() * four, FieldElement::ONE);
        assert_eq!(r * FieldElement::TWO, -FieldElement::ONE);
        assert!(!bool::from(r.is_negative()));

        let (r, ok) = FieldElement::ZERO.inv_sqrt();
        assert!(!bool::from(ok));
        assert_eq!(r, FieldElement::ZERO);
    }

    #[test]
    fn equality() {
        let ainv = FieldElement::from_bytes(&AINV_BYTES);
        assert!(a() == a());
        assert!(a() != ainv);
    }

    /// The last byte has the high bit set, which should be ignored.
    const B_BYTES: [u8; 32] = [
        113, 191, 169, 143, 91, 234, 121, 15, 241, 131, 217, 36, 230, 101, 92, 234, 8, 208, 170,
        251, 97, 127, 70, 210, 58, 23, 166, 87, 240, 169, 184, 178,
    ];

    #[test]
    fn from_bytes_highbit_is_ignored() {
        let mut cleared_bytes = B_BYTES;
        cleared_bytes[31] &= 127u8;
        assert_eq!(
            FieldElement::from_bytes(&B_BYTES),
            FieldElement::from_bytes(&cleared_bytes)
        );
    }

    #[test]
    fn conditional_negate() {
        let mut x = FieldElement::ONE;
        x.conditional_negate(Choice::from(1));
        assert_eq!(x, FieldElement::MINUS_ONE);
        x.conditional_negate(Choice::from(0));
        assert_eq!(x, FieldElement::MINUS_ONE);
        x.conditional_negate(Choice::from(1));
        assert_eq!(x, FieldElement::ONE);
    }

    #[test]
    fn conditional_select_and_swap() {
        let two = FieldElement::TWO;
        let one = FieldElement::ONE;
        assert_eq!(
            FieldElement::conditional_select(&one, &two, Choice::from(0)),
            one
        );
        assert_eq!(
            FieldElement::conditional_select(&one, &two, Choice::from(1)),
            two
        );

        let (mut x, mut y) = (one, two);
        FieldElement::conditional_swap(&mut x, &mut y, Choice::from(1));
        assert_eq!((x, y), (two, one));

        x.conditional_assign(&y, Choice::from(0));
        assert_eq!(x, two);
        x.conditional_assign(&y, Choice::from(1));
        assert_eq!(x, one);
    }

    #[test]
    fn encoding_is_canonical() {
        // Encode 1 wrongly as 1 + (2^255 - 19) = 2^255 - 18
        let one_encoded_wrongly_bytes =
            hex!("eeffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff7f");
        let one = FieldElement::from_bytes(&one_encoded_wrongly_bytes);
        assert_eq!(one, FieldElement::ONE);
        assert_eq!(one.to_bytes(), FieldElement::ONE.to_bytes());
        assert_eq!(one.to_bytes()[0], 1);
        assert!(one.to_bytes()[1..].iter().all(|byte| *byte == 0));
    }

    #[test]
    fn minus_one_is_p_minus_one() {
        assert_eq!(
            FieldElement::MINUS_ONE.to_bytes(),
            hex!("ecffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff7f")
        );
        assert_eq!(FieldElement::MINUS_ONE, -FieldElement::ONE);
        assert_eq!(FieldElement::TWO, FieldElement::ONE + FieldElement::ONE);
    }

    #[test]
    fn from_bytes_wide() {
        assert_eq!(
            FieldElement::from_bytes_wide(&[0xff; 64]).to_bytes(),
            hex!("a305000000000000000000000000000000000000000000000000000000000000")
        );

        let mut counting = [0u8; 64];
        for (i, byte) in counting.iter_mut().enumerate() {
            *byte = i as u8;
        }
        assert_eq!(
            FieldElement::from_bytes_wide(&counting).to_bytes(),
            hex!("29ed123a6188afd6fd244c739ac1e80f375e85acd3fa21497097bee50c345b02")
        );

        let mut narrow = [0u8; 64];
        narrow[..32].copy_from_slice(&A_BYTES);
        assert_eq!(FieldElement::from_bytes_wide(&narrow), a());
    }

    #[test]
    fn try_from_slice() {
        assert_eq!(FieldElement::try_from(&A_BYTES[..]), Ok(a()));
        assert_eq!(
            FieldElement::try_from(&A_BYTES[..31]),
            Err(Error::InvalidLength)
        );
        assert_eq!(
            FieldElement::try_from(&[0u8; 33][..]),
            Err(Error::InvalidLength)
        );
    }

    #[test]
    fn hex_formatting() {
        use std::format;

        assert_eq!(
            format!("{:?}", FieldElement::ONE),
            "FieldElement(0000000000000000000000000000000000000000000000000000000000000001)"
        );
        assert_eq!(
            format!("{}", FieldElement::MINUS_ONE),
            "7fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffec"
        );
        assert_eq!(
            format!("{:X}", FieldElement::MINUS_ONE),
            "7FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEC"
        );

        let mut be_bytes = a().to_bytes();
        be_bytes.reverse();
        assert_eq!(format!("{:x}", a()), hex::encode(be_bytes));
        assert_eq!(format!("{:X}", a()), hex::encode_upper(be_bytes));
    }

    #[test]
    fn sum_and_product() {
        let elements = [a(), FieldElement::TWO, FieldElement::MINUS_ONE];
        assert_eq!(
            elements.iter().sum::<FieldElement>(),
            a() + FieldElement::ONE
        );
        assert_eq!(elements.iter().product::<FieldElement>(), -(a() + a()));
        assert_eq!(
            core::iter::empty::<FieldElement>().product::<FieldElement>(),
            FieldElement::ONE
        );
        assert_eq!(
            core::iter::empty::<FieldElement>().sum::<FieldElement>(),
            FieldElement::ZERO
        );
    }

    #[test]
    fn zeroize() {
        use zeroize::Zeroize;

        let mut x = a();
        x.zeroize();
        assert_eq!(x, FieldElement::ZERO);
    }

    /// Hash to field test vectors from
    /// <https://www.rfc-editor.org/rfc/rfc9380.html#name-edwards25519_xmdsha-512_ell2_n>
    #[test]
    fn hash_to_field_nu() {
        const DST: &[u8] = b"QUUX-V01-CS02-with-edwards25519_XMD:SHA-512_ELL2_NU_";
        const MSGS: &[(&[u8], [u8; 32])] = &[
            (b"", hex!("7f3e7fb9428103ad7f52db32f9df32505d7b427d894c5093f7a0f0374a30641d")),
            (b"abc", hex!("09cfa30ad79bd59456594a0f5d3a76f6b71c6787b04de98be5cd201a556e253b")),
            (b"abcdef0123456789", hex!("475ccff99225ef90d78cc9338e9f6a6bb7b17607c0c4428937de75d33edba941")),
            (b"q128_qqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqq", hex!("049a1c8bd51bcb2aec339f387d1ff51428b88d0763a91bcdf6929814ac95d03d")),
            (b"a512_aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa", hex!("3cb0178a8137cefa5b79a3a57c858d7eeeaa787b2781be4a362a2f0750d24fa0")),
        ];

        for (msg, expected_u) in MSGS {
            let mut u = [FieldElement::ZERO];
            hash_to_field::<ExpandMsgXmd<Sha512>, U16, _>(&[msg], &[DST], &mut u).unwrap();

            let mut e_u = *expected_u;
            e_u.reverse();
            assert_eq!(u[0].to_bytes(), e_u);
        }
    }

    fn field_element() -> impl Strategy<Value = FieldElement> {
        any::<[u8; 32]>().prop_map(|bytes| FieldElement::from_bytes(&bytes))
    }

    proptest! {
        #[test]
        fn distributive(a in field_element(), b in field_element(), c in field_element()) {
            prop_assert_eq!(a * (b + c), a * b + a * c);
        }

        #[test]
        fn associative(a in field_element(), b in field_element(), c in field_element()) {
            prop_assert_eq!((a * b) * c, a * (b * c));
            prop_assert_eq!((a + b) + c, a + (b + c));
        }

        #[test]
        fn additive_inverse(a in field_element(), b in field_element()) {
            prop_assert_eq!(a + (-a), FieldElement::ZERO);
            prop_assert_eq!((a + b) - b, a);
            prop_assert_eq!(a - b, -(b - a));
        }

        #[test]
        fn multiplicative_inverse(a in field_element()) {
            prop_assume!(!bool::from(a.is_zero()));
            prop_assert_eq!(a * a.invert(), FieldElement::ONE);
        }

        #[test]
        fn squares(a in field_element(), k in 1u32..8) {
            prop_assert_eq!(a.square(), a * a);
            prop_assert_eq!(a.square2(), FieldElement::TWO * a * a);

            let mut expected = a;
            for _ in 0..k {
                expected = expected.square();
            }
            prop_assert_eq!(a.pow2k(k), expected);
        }

        #[test]
        fn codec_round_trip(bytes in any::<[u8; 32]>()) {
            let fe = FieldElement::from_bytes(&bytes);
            let encoded = fe.to_bytes();
            prop_assert_eq!(encoded[31] & 0x80, 0);
            prop_assert_eq!(FieldElement::from_bytes(&encoded), fe);

            let mut masked = bytes;
            masked[31] &= 0x7f;
            prop_assert_eq!(FieldElement::from_bytes(&masked), fe);
        }

        #[test]
        fn sqrt_ratio_i_relation(u in field_element(), v in field_element()) {
            prop_assume!(!bool::from(v.is_zero()));

            let (r, ok) = FieldElement::sqrt_ratio_i(&u, &v);
            prop_assert!(!bool::from(r.is_negative()));

            if bool::from(ok) {
                prop_assert_eq!(r.square() * v, u);
            } else {
                prop_assert_eq!(r.square() * v, FieldElement::SQRT_M1 * u);
            }
        }

        #[test]
        fn sqrt_ratio_i_of_squares(x in field_element(), v in field_element()) {
            prop_assume!(!bool::from(v.is_zero()));

            let (r, ok) = FieldElement::sqrt_ratio_i(&(x.square() * v), &v);
            prop_assert!(bool::from(ok));
            prop_assert!(r == x || r == -x);
        }
    }
}
