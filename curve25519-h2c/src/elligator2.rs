//! The Elligator 2 map onto Curve25519 and, through the birational map,
//! onto edwards25519.
//!
//! See <https://www.rfc-editor.org/rfc/rfc9380.html#name-elligator-2-method> and
//! <https://elligator.org/map>.

use crate::edwards::AffinePoint;
use crate::field::FieldElement;
use curve25519_dalek::edwards::EdwardsPoint;
use subtle::{ConditionallyNegatable, ConditionallySelectable};

/// Map a representative `r` to a point `(u, v)` on the Montgomery curve
/// `v^2 = u^3 + A u^2 + u`.
///
/// `v` is negative exactly when the square branch was taken.
pub fn map_to_montgomery(r: &FieldElement) -> (FieldElement, FieldElement) {
    let a = &FieldElement::MONTGOMERY_A;

    // 1.    t1 = 2 r^2
    let r2 = r.square();
    let t1 = r.square2();
    // 2.     w = t1 + 1              # the denominator of u = -A / w
    let w = t1 + FieldElement::ONE;
    // 3.    t2 = w^2
    let t2 = w.square();
    // 4. numer = A (A^2 t1 - t2)     # -(A^2 + A w^2) scaled by w^2
    let numer = a * (FieldElement::MONTGOMERY_A_SQUARED * t1 - t2);
    // 5. denom = t2 w
    let denom = t2 * w;
    // 6. (q, is_sq) = inv_sqrt(denom numer)
    let (q, is_sq) = (denom * numer).inv_sqrt();

    // 7. (u', v') = is_sq ? (1, 1) : (U_FACTOR r^2, V_FACTOR r)
    let u_prime = FieldElement::conditional_select(
        &(r2 * FieldElement::U_FACTOR),
        &FieldElement::ONE,
        is_sq,
    );
    let v_prime =
        FieldElement::conditional_select(&(r * FieldElement::V_FACTOR), &FieldElement::ONE, is_sq);

    // 8.     v = v' numer q
    let mut v = v_prime * numer * q;
    // 9.    t3 = q^2
    let t3 = q.square();
    // 10.    u = u' (-A) numer t2 t3
    let u = u_prime * FieldElement::NEG_MONTGOMERY_A * numer * t2 * t3;
    // 11.    v = CMOV(v, -v, is_sq XOR sgn0(v))
    let flip = is_sq ^ v.is_negative();
    v.conditional_negate(flip);

    (u, v)
}

/// Birational map from Curve25519 to edwards25519:
/// `x = sqrt(-(A + 2)) u / v`, `y = (u - 1) / (u + 1)`.
///
/// Where a denominator vanishes the result is the identity `(0, 1)`.
pub fn montgomery_to_edwards(u: &FieldElement, v: &FieldElement) -> AffinePoint {
    let u_plus_one = u + FieldElement::ONE;
    let u_minus_one = u - FieldElement::ONE;

    // one inversion for both denominators
    let denominator = v * u_plus_one;
    let inv = denominator.invert();

    let point = AffinePoint {
        x: FieldElement::SQRT_MINUS_A_PLUS_2 * u * u_plus_one * inv,
        y: u_minus_one * v * inv,
    };

    AffinePoint::conditional_select(&point, &AffinePoint::IDENTITY, denominator.is_zero())
}

/// Map a field element to an edwards25519 point.
///
/// The result is not cofactor-cleared.
pub fn map_to_edwards(r: &FieldElement) -> EdwardsPoint {
    let (u, v) = map_to_montgomery(r);
    montgomery_to_edwards(&u, &v).to_edwards()
}

/// Map a 32-byte representative to an edwards25519 point. Only the top bit
/// of the last byte is ignored.
pub fn map_representative(bytes: &[u8; 32]) -> EdwardsPoint {
    map_to_edwards(&FieldElement::from_bytes(bytes))
}
