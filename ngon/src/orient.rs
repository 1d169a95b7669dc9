use nalgebra::{Point2, RealField};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::ngon::measure::triangle_signed_area;

/// Orientation of a triplet of points or of a planar polygon.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Orientation {
    /// Clockwise
    Clockwise,
    /// Counterclockwise
    Counterclockwise,
    /// Collinear
    Collinear,
}

impl Orientation {
    /// Determines orientation of a triplet of points.
    pub fn triplet<T: RealField + Copy>(p: &Point2<T>, q: &Point2<T>, r: &Point2<T>) -> Self {
        Self::from_signed_area(triangle_signed_area(p, q, r))
    }

    /// Orientation corresponding to the sign of a signed area.
    ///
    /// NaN is reported as collinear.
    pub fn from_signed_area<T: RealField>(area: T) -> Self {
        if area > T::zero() {
            Self::Counterclockwise
        } else if area < T::zero() {
            Self::Clockwise
        } else {
            Self::Collinear
        }
    }
}
