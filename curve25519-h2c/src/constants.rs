//! Curve constants for Curve25519 and edwards25519.

use crate::field::FieldElement;

impl FieldElement {
    /// The non-negative square root of -1.
    pub const SQRT_M1: Self = Self::from_limbs([
        1718705420411056,
        234908883556509,
        2233514472574048,
        2117202627021982,
        765476049583133,
    ]);
    /// The Montgomery curve constant `A = 486662`.
    pub const MONTGOMERY_A: Self = Self::from_limbs([486662, 0, 0, 0, 0]);
    /// `-A`
    pub const NEG_MONTGOMERY_A: Self = Self::from_limbs([
        2251799813198567,
        2251799813685247,
        2251799813685247,
        2251799813685247,
        2251799813685247,
    ]);
    /// `A^2`
    pub const MONTGOMERY_A_SQUARED: Self = Self::from_limbs([236839902244, 0, 0, 0, 0]);
    /// The non-negative square root of `-(A + 2)`, scaling the Montgomery
    /// `u / v` to the Edwards `x`.
    pub const SQRT_MINUS_A_PLUS_2: Self = Self::from_limbs([
        1693982333959686,
        608509411481997,
        2235573344831311,
        947681270984193,
        266558006233600,
    ]);
    /// `-2 * sqrt(-1)`, the Elligator non-square factor for `u`.
    pub const U_FACTOR: Self = Self::from_limbs([
        1066188786548365,
        1781982046572228,
        36570682222399,
        269194373326530,
        720847714518980,
    ]);
    /// `sqrt(U_FACTOR)`, the Elligator non-square factor for `v`.
    pub const V_FACTOR: Self = Self::from_limbs([
        533094393274174,
        2016890930128738,
        18285341111199,
        134597186663265,
        1486323764102114,
    ]);
    /// The edwards25519 curve constant `d = -121665 / 121666`.
    pub const EDWARDS_D: Self = Self::from_limbs([
        929955233495203,
        466365720129213,
        1662059464998953,
        2033849074728123,
        1442794654840575,
    ]);
}
