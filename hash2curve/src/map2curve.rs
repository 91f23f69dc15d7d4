//! Traits for mapping field elements to points on the curve.

use core::ops::Add;

use crate::FromOkm;

/// Trait for converting field elements into a point via a mapping method like
/// Simplified Shallue-van de Woestijne-Ulas or Elligator.
pub trait MapToCurve {
    /// The intermediate representation, an element of the curve's base field.
    type FieldElement: FromOkm + Default + Copy;
    /// The point type produced by the map.
    type Output: Add<Output = Self::Output> + Copy;

    /// Map a field element into a curve point.
    fn map_to_curve(element: Self::FieldElement) -> Self::Output;

    /// Map a point produced by [`MapToCurve::map_to_curve`] into the
    /// prime-order subgroup.
    ///
    /// <https://www.rfc-editor.org/rfc/rfc9380.html#name-clearing-the-cofactor>
    fn clear_cofactor(point: Self::Output) -> Self::Output;
}
