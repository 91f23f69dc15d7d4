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

//! Limb arithmetic on \\( \mathbb Z / (2\^{255} - 19)\\) with five
//! 51-bit limbs in `u64`s.
//!
//! Every operation returns limbs bounded by \\(2\^{51} + 2\^{15}\\), so any
//! output may be fed to `mul` or `pow2k` (which require \\(< 2\^{54}\\)) with
//! room for a single `square2` doubling.

use core::ops::{Add, Mul, Neg, Sub};

use subtle::{Choice, ConditionallySelectable};

const LOW_51_BITS: u64 = (1 << 51) - 1;

/// \\(16p\\) split into limbs, added before subtracting so no limb underflows.
const P_TIMES_16_LIMB_0: u64 = 36_028_797_018_963_664;
const P_TIMES_16_LIMBS_1_4: u64 = 36_028_797_018_963_952;

#[inline(always)]
const fn m(x: u64, y: u64) -> u128 {
    (x as u128) * (y as u128)
}

/// An element of the field in radix \\(2\^{51}\\).
///
/// The limb values are not canonical; only [`FieldElement51::to_bytes`]
/// yields the unique representative.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct FieldElement51(pub(crate) [u64; 5]);

impl FieldElement51 {
    pub(crate) const ZERO: Self = Self([0, 0, 0, 0, 0]);
    pub(crate) const ONE: Self = Self([1, 0, 0, 0, 0]);

    pub(crate) const fn from_limbs(limbs: [u64; 5]) -> Self {
        Self(limbs)
    }

    /// Carry every limb into the next one, folding the top carry back into
    /// limb 0 via \\(2\^{255} \equiv 19\\).
    #[inline(always)]
    const fn reduce(mut limbs: [u64; 5]) -> Self {
        let c0 = limbs[0] >> 51;
        let c1 = limbs[1] >> 51;
        let c2 = limbs[2] >> 51;
        let c3 = limbs[3] >> 51;
        let c4 = limbs[4] >> 51;

        limbs[0] &= LOW_51_BITS;
        limbs[1] &= LOW_51_BITS;
        limbs[2] &= LOW_51_BITS;
        limbs[3] &= LOW_51_BITS;
        limbs[4] &= LOW_51_BITS;

        limbs[0] += c4 * 19;
        limbs[1] += c0;
        limbs[2] += c1;
        limbs[3] += c2;
        limbs[4] += c3;

        Self(limbs)
    }

    /// Load from 32 little-endian bytes, ignoring the top bit.
    pub(crate) const fn from_bytes(bytes: &[u8; 32]) -> Self {
        const fn load8(input: &[u8; 32], at: usize) -> u64 {
            (input[at] as u64)
                | ((input[at + 1] as u64) << 8)
                | ((input[at + 2] as u64) << 16)
                | ((input[at + 3] as u64) << 24)
                | ((input[at + 4] as u64) << 32)
                | ((input[at + 5] as u64) << 40)
                | ((input[at + 6] as u64) << 48)
                | ((input[at + 7] as u64) << 56)
        }

        Self([
            load8(bytes, 0) & LOW_51_BITS,
            (load8(bytes, 6) >> 3) & LOW_51_BITS,
            (load8(bytes, 12) >> 6) & LOW_51_BITS,
            (load8(bytes, 19) >> 1) & LOW_51_BITS,
            (load8(bytes, 24) >> 12) & LOW_51_BITS,
        ])
    }

    /// Serialize to the canonical 32-byte little-endian encoding.
    pub(crate) fn to_bytes(self) -> [u8; 32] {
        let mut limbs = Self::reduce(self.0).0;

        // Now limbs < 2^51 + 2^13, so the value is below 2p. Compute
        // q = floor((value + 19) / 2^255), which is 1 iff value >= p.
        let mut q = (limbs[0] + 19) >> 51;
        q = (limbs[1] + q) >> 51;
        q = (limbs[2] + q) >> 51;
        q = (limbs[3] + q) >> 51;
        q = (limbs[4] + q) >> 51;

        // value - q*p = value + 19q - 2^255 q
        limbs[0] += 19 * q;

        limbs[1] += limbs[0] >> 51;
        limbs[0] &= LOW_51_BITS;
        limbs[2] += limbs[1] >> 51;
        limbs[1] &= LOW_51_BITS;
        limbs[3] += limbs[2] >> 51;
        limbs[2] &= LOW_51_BITS;
        limbs[4] += limbs[3] >> 51;
        limbs[3] &= LOW_51_BITS;
        // Dropping the carry out of limb 4 subtracts the 2^255 q.
        limbs[4] &= LOW_51_BITS;

        let mut s = [0u8; 32];
        s[0] = limbs[0] as u8;
        s[1] = (limbs[0] >> 8) as u8;
        s[2] = (limbs[0] >> 16) as u8;
        s[3] = (limbs[0] >> 24) as u8;
        s[4] = (limbs[0] >> 32) as u8;
        s[5] = (limbs[0] >> 40) as u8;
        s[6] = ((limbs[0] >> 48) | (limbs[1] << 3)) as u8;
        s[7] = (limbs[1] >> 5) as u8;
        s[8] = (limbs[1] >> 13) as u8;
        s[9] = (limbs[1] >> 21) as u8;
        s[10] = (limbs[1] >> 29) as u8;
        s[11] = (limbs[1] >> 37) as u8;
        s[12] = ((limbs[1] >> 45) | (limbs[2] << 6)) as u8;
        s[13] = (limbs[2] >> 2) as u8;
        s[14] = (limbs[2] >> 10) as u8;
        s[15] = (limbs[2] >> 18) as u8;
        s[16] = (limbs[2] >> 26) as u8;
        s[17] = (limbs[2] >> 34) as u8;
        s[18] = (limbs[2] >> 42) as u8;
        s[19] = ((limbs[2] >> 50) | (limbs[3] << 1)) as u8;
        s[20] = (limbs[3] >> 7) as u8;
        s[21] = (limbs[3] >> 15) as u8;
        s[22] = (limbs[3] >> 23) as u8;
        s[23] = (limbs[3] >> 31) as u8;
        s[24] = (limbs[3] >> 39) as u8;
        s[25] = ((limbs[3] >> 47) | (limbs[4] << 4)) as u8;
        s[26] = (limbs[4] >> 4) as u8;
        s[27] = (limbs[4] >> 12) as u8;
        s[28] = (limbs[4] >> 20) as u8;
        s[29] = (limbs[4] >> 28) as u8;
        s[30] = (limbs[4] >> 36) as u8;
        s[31] = (limbs[4] >> 44) as u8;

        debug_assert!((s[31] & 0b1000_0000) == 0);

        s
    }

    /// Carry the five 128-bit column sums of a product back into limbs.
    #[inline(always)]
    fn carry_columns(c0: u128, mut c1: u128, mut c2: u128, mut c3: u128, mut c4: u128) -> [u64; 5] {
        let mut out = [0u64; 5];

        c1 += ((c0 >> 51) as u64) as u128;
        out[0] = (c0 as u64) & LOW_51_BITS;

        c2 += ((c1 >> 51) as u64) as u128;
        out[1] = (c1 as u64) & LOW_51_BITS;

        c3 += ((c2 >> 51) as u64) as u128;
        out[2] = (c2 as u64) & LOW_51_BITS;

        c4 += ((c3 >> 51) as u64) as u128;
        out[3] = (c3 as u64) & LOW_51_BITS;

        let carry = (c4 >> 51) as u64;
        out[4] = (c4 as u64) & LOW_51_BITS;

        out[0] += carry * 19;
        out[1] += out[0] >> 51;
        out[0] &= LOW_51_BITS;

        out
    }

    /// Compute `self^(2^k)` by `k` successive squarings, `k >= 1`.
    pub(crate) fn pow2k(&self, mut k: u32) -> Self {
        debug_assert!(k > 0);

        let mut a = self.0;

        loop {
            debug_assert!(a.iter().all(|limb| *limb < (1 << 54)));

            let a3_19 = 19 * a[3];
            let a4_19 = 19 * a[4];

            let c0 = m(a[0], a[0]) + 2 * (m(a[1], a4_19) + m(a[2], a3_19));
            let c1 = m(a[3], a3_19) + 2 * (m(a[0], a[1]) + m(a[2], a4_19));
            let c2 = m(a[1], a[1]) + 2 * (m(a[0], a[2]) + m(a[4], a3_19));
            let c3 = m(a[4], a4_19) + 2 * (m(a[0], a[3]) + m(a[1], a[2]));
            let c4 = m(a[2], a[2]) + 2 * (m(a[0], a[4]) + m(a[1], a[3]));

            a = Self::carry_columns(c0, c1, c2, c3, c4);

            k -= 1;
            if k == 0 {
                break;
            }
        }

        Self(a)
    }

    pub(crate) fn square(&self) -> Self {
        self.pow2k(1)
    }

    /// Compute `2 * self^2`.
    pub(crate) fn square2(&self) -> Self {
        let mut square = self.pow2k(1);
        for limb in square.0.iter_mut() {
            *limb *= 2;
        }
        square
    }
}

impl Add<&FieldElement51> for &FieldElement51 {
    type Output = FieldElement51;

    fn add(self, rhs: &FieldElement51) -> FieldElement51 {
        FieldElement51::reduce([
            self.0[0] + rhs.0[0],
            self.0[1] + rhs.0[1],
            self.0[2] + rhs.0[2],
            self.0[3] + rhs.0[3],
            self.0[4] + rhs.0[4],
        ])
    }
}

impl Sub<&FieldElement51> for &FieldElement51 {
    type Output = FieldElement51;

    fn sub(self, rhs: &FieldElement51) -> FieldElement51 {
        // rhs limbs are below 2^54, 16p limbs are above 2^55
        FieldElement51::reduce([
            (self.0[0] + P_TIMES_16_LIMB_0) - rhs.0[0],
            (self.0[1] + P_TIMES_16_LIMBS_1_4) - rhs.0[1],
            (self.0[2] + P_TIMES_16_LIMBS_1_4) - rhs.0[2],
            (self.0[3] + P_TIMES_16_LIMBS_1_4) - rhs.0[3],
            (self.0[4] + P_TIMES_16_LIMBS_1_4) - rhs.0[4],
        ])
    }
}

impl Mul<&FieldElement51> for &FieldElement51 {
    type Output = FieldElement51;

    fn mul(self, rhs: &FieldElement51) -> FieldElement51 {
        let a = &self.0;
        let b = &rhs.0;

        debug_assert!(a.iter().all(|limb| *limb < (1 << 54)));
        debug_assert!(b.iter().all(|limb| *limb < (1 << 54)));

        // 2^255 = 19 mod p, so the upper columns fold in multiplied by 19
        let b1_19 = b[1] * 19;
        let b2_19 = b[2] * 19;
        let b3_19 = b[3] * 19;
        let b4_19 = b[4] * 19;

        let c0 = m(a[0], b[0]) + m(a[4], b1_19) + m(a[3], b2_19) + m(a[2], b3_19) + m(a[1], b4_19);
        let c1 = m(a[1], b[0]) + m(a[0], b[1]) + m(a[4], b2_19) + m(a[3], b3_19) + m(a[2], b4_19);
        let c2 = m(a[2], b[0]) + m(a[1], b[1]) + m(a[0], b[2]) + m(a[4], b3_19) + m(a[3], b4_19);
        let c3 = m(a[3], b[0]) + m(a[2], b[1]) + m(a[1], b[2]) + m(a[0], b[3]) + m(a[4], b4_19);
        let c4 = m(a[4], b[0]) + m(a[3], b[1]) + m(a[2], b[2]) + m(a[1], b[3]) + m(a[0], b[4]);

        FieldElement51(FieldElement51::carry_columns(c0, c1, c2, c3, c4))
    }
}

impl Neg for &FieldElement51 {
    type Output = FieldElement51;

    fn neg(self) -> FieldElement51 {
        &FieldElement51::ZERO - self
    }
}

impl ConditionallySelectable for FieldElement51 {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self([
            u64::conditional_select(&a.0[0], &b.0[0], choice),
            u64::conditional_select(&a.0[1], &b.0[1], choice),
            u64::conditional_select(&a.0[2], &b.0[2], choice),
            u64::conditional_select(&a.0[3], &b.0[3], choice),
            u64::conditional_select(&a.0[4], &b.0[4], choice),
        ])
    }

    fn conditional_swap(a: &mut Self, b: &mut Self, choice: Choice) {
        for (a, b) in a.0.iter_mut().zip(b.0.iter_mut()) {
            u64::conditional_swap(a, b, choice);
        }
    }

    fn conditional_assign(&mut self, other: &Self, choice: Choice) {
        for (limb, other) in self.0.iter_mut().zip(other.0.iter()) {
            limb.conditional_assign(other, choice);
        }
    }
}
