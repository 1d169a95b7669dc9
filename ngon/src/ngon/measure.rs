//! Area of N-gons.
//!
//! Both the signed area in 2d and the unsigned area in higher dimensions are computed by summing the areas of the fan
//! triangles `(v0, vi, vi+1)`. In 2d the signed contributions cancel out for any simple polygon, so the result is the
//! same as the shoelace formula. In higher dimensions there is no reference normal to define the sign of a triangle,
//! so only the unsigned area is available.

use nalgebra::{Point, Point2, RealField, SVector};

use super::Ngon;
use crate::orient::Orientation;
use crate::vertices::VertexBuffer;

fn two<T: RealField>() -> T {
    T::one() + T::one()
}

/// `z` component of the cross product of the first two coordinates of the vectors.
fn perp_dot<T: RealField + Copy, const D: usize>(u: &SVector<T, D>, v: &SVector<T, D>) -> T {
    u[0] * v[1] - u[1] * v[0]
}

/// Magnitude of the cross product of the vectors.
///
/// Outside of 3d the cross product is not defined, but the area of the parallelogram spanned by the vectors is. It is
/// given by the Lagrange identity `|u x v|^2 = |u|^2 |v|^2 - (u . v)^2`.
fn cross_norm<T: RealField + Copy, const D: usize>(u: &SVector<T, D>, v: &SVector<T, D>) -> T {
    if D == 3 {
        let x = u[1] * v[2] - u[2] * v[1];
        let y = u[2] * v[0] - u[0] * v[2];
        let z = u[0] * v[1] - u[1] * v[0];
        (x * x + y * y + z * z).sqrt()
    } else {
        let dot = u.dot(v);
        let norm_sq = u.norm_squared() * v.norm_squared() - dot * dot;
        // Rounding can make the difference slightly negative for nearly parallel vectors.
        norm_sq.max(T::zero()).sqrt()
    }
}

/// Signed area of the triangle `(a, b, c)`.
///
/// The area is positive if the points go counterclockwise and negative if they go clockwise.
pub fn triangle_signed_area<T: RealField + Copy>(a: &Point2<T>, b: &Point2<T>, c: &Point2<T>) -> T {
    perp_dot(&(b - a), &(c - a)) / two()
}

/// Area of the triangle `(a, b, c)` in a space of any dimension.
pub fn triangle_area<T: RealField + Copy, const D: usize>(
    a: &Point<T, D>,
    b: &Point<T, D>,
    c: &Point<T, D>,
) -> T {
    let u = b - a;
    let v = c - a;
    if D == 2 {
        (perp_dot(&u, &v) / two()).abs()
    } else {
        cross_norm(&u, &v) / two()
    }
}

impl<const N: usize, T, S> Ngon<N, S>
where
    T: RealField + Copy,
    S: VertexBuffer<Point = Point2<T>>,
{
    /// Signed area of a planar N-gon.
    ///
    /// Positive for counterclockwise vertex order, negative for clockwise.
    pub fn signed_area(&self) -> T {
        self.fan().fold(T::zero(), |area, [a, b, c]| {
            area + triangle_signed_area(a, b, c)
        })
    }

    /// Orientation of a planar N-gon, determined by the sign of its area.
    pub fn orientation(&self) -> Orientation {
        Orientation::from_signed_area(self.signed_area())
    }
}

impl<const N: usize, const D: usize, T, S> Ngon<N, S>
where
    T: RealField + Copy,
    S: VertexBuffer<Point = Point<T, D>>,
{
    /// Area of the N-gon. Never negative.
    ///
    /// In 2d this is the absolute value of [`Ngon::signed_area`]. In higher dimensions it is the sum of the areas of
    /// the fan triangles, which is exact for planar N-gons.
    pub fn measure(&self) -> T {
        if D == 2 {
            self.fan()
                .fold(T::zero(), |area, [a, b, c]| {
                    area + perp_dot(&(b - a), &(c - a)) / two()
                })
                .abs()
        } else {
            self.fan().fold(T::zero(), |area, [a, b, c]| area + triangle_area(a, b, c))
        }
    }

    /// Same as [`Ngon::measure`].
    pub fn area(&self) -> T {
        self.measure()
    }

    /// Total length of the sides of the N-gon.
    pub fn perimeter(&self) -> T {
        self.edges().fold(T::zero(), |length, edge| length + edge.length())
    }

    /// Arithmetic mean of the vertices.
    ///
    /// For triangles and regular polygons this is also the center of mass of the N-gon area.
    pub fn centroid(&self) -> Point<T, D> {
        let sum = self
            .vertices()
            .iter()
            .fold(SVector::<T, D>::zeros(), |sum, p| sum + p.coords);
        Point::from(sum / nalgebra::convert::<f64, T>(N as f64))
    }
}
