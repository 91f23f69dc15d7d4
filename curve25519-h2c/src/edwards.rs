//! Affine edwards25519 points.
//!
//! The group operations live in [`curve25519_dalek`]; [`AffinePoint`] only
//! carries `(x, y)` out of the field layer and across the compressed
//! encoding.

use crate::field::FieldElement;
use curve25519_dalek::edwards::{CompressedEdwardsY, EdwardsPoint};
use subtle::{Choice, ConditionallyNegatable, ConditionallySelectable, ConstantTimeEq, CtOption};

/// Affine point on edwards25519, `-x^2 + y^2 = 1 + d x^2 y^2`.
#[derive(Copy, Clone, Debug)]
pub struct AffinePoint {
    pub(crate) x: FieldElement,
    pub(crate) y: FieldElement,
}

impl AffinePoint {
    /// The identity point
    pub const IDENTITY: AffinePoint = AffinePoint {
        x: FieldElement::ZERO,
        y: FieldElement::ONE,
    };

    /// Build a point from its coordinates, if they satisfy the curve
    /// equation.
    pub fn from_coordinates(x: FieldElement, y: FieldElement) -> CtOption<Self> {
        let point = Self { x, y };
        CtOption::new(point, point.is_on_curve())
    }

    /// Standard compression; store Y and sign of X
    pub fn compress(&self) -> CompressedEdwardsY {
        let mut bytes = self.y.to_bytes();
        bytes[31] |= self.x.is_negative().unwrap_u8() << 7;
        CompressedEdwardsY(bytes)
    }

    /// Recover `x` from the compressed `y` and sign bit.
    ///
    /// Returns `None` if `y` is not the y-coordinate of a curve point.
    pub fn decompress(compressed: &CompressedEdwardsY) -> CtOption<Self> {
        let mut y_bytes = compressed.to_bytes();
        let sign = Choice::from(y_bytes[31] >> 7);
        y_bytes[31] &= 0x7f;

        // x^2 = (y^2 - 1) / (d y^2 + 1)
        let y = FieldElement::from_bytes(&y_bytes);
        let yy = y.square();
        let u = yy - FieldElement::ONE;
        let v = FieldElement::EDWARDS_D * yy + FieldElement::ONE;

        // sqrt_ratio_i returns the non-negative root
        let (mut x, is_valid) = FieldElement::sqrt_ratio_i(&u, &v);
        x.conditional_negate(sign);

        CtOption::new(Self { x, y }, is_valid)
    }

    /// Check if this point is on the curve
    pub fn is_on_curve(&self) -> Choice {
        // -X^2 + Y^2 == 1 + D * X^2 * Y^2
        let xx = self.x.square();
        let yy = self.y.square();
        let lhs = yy - xx;
        let rhs = FieldElement::ONE + FieldElement::EDWARDS_D * xx * yy;

        lhs.ct_eq(&rhs)
    }

    /// Convert to the extended representation used for group operations.
    pub fn to_edwards(&self) -> EdwardsPoint {
        // Every AffinePoint is constructed on the curve.
        self.compress()
            .decompress()
            .expect("affine point is on the curve")
    }

    /// Convert from the extended representation.
    pub fn from_edwards(point: &EdwardsPoint) -> Self {
        Self::decompress(&point.compress()).expect("edwards point is on the curve")
    }

    /// The X coordinate
    pub fn x(&self) -> [u8; 32] {
        self.x.to_bytes()
    }

    /// The Y coordinate
    pub fn y(&self) -> [u8; 32] {
        self.y.to_bytes()
    }
}

impl Default for AffinePoint {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl ConstantTimeEq for AffinePoint {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.x.ct_eq(&other.x) & self.y.ct_eq(&other.y)
    }
}

impl ConditionallySelectable for AffinePoint {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self {
            x: FieldElement::conditional_select(&a.x, &b.x, choice),
            y: FieldElement::conditional_select(&a.y, &b.y, choice),
        }
    }
}

impl PartialEq for AffinePoint {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for AffinePoint {}

impl From<AffinePoint> for EdwardsPoint {
    fn from(point: AffinePoint) -> Self {
        point.to_edwards()
    }
}

impl From<&EdwardsPoint> for AffinePoint {
    fn from(point: &EdwardsPoint) -> Self {
        Self::from_edwards(point)
    }
}
