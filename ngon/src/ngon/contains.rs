//! Point in N-gon test.

use approx::AbsDiffEq;
use nalgebra::{Point, RealField, SVector};

use super::Ngon;
use crate::vertices::VertexBuffer;

fn is_unit<T: RealField>(lambda: &T) -> bool {
    *lambda >= T::zero() && *lambda <= T::one()
}

/// Solves for the barycentric coordinates of `w` projected onto the plane spanned by `u` and `v`.
///
/// Returns the coordinates along `u` and `v`, and the part of `w` that is orthogonal to the plane.
fn project_on_plane<T: RealField + Copy, const D: usize>(
    u: &SVector<T, D>,
    v: &SVector<T, D>,
    w: &SVector<T, D>,
) -> (T, T, SVector<T, D>) {
    let uu = u.norm_squared();
    let vv = v.norm_squared();
    let uv = u.dot(v);
    let wu = w.dot(u);
    let wv = w.dot(v);

    let det = uu * vv - uv * uv;
    let s = (vv * wu - uv * wv) / det;
    let t = (uu * wv - uv * wu) / det;

    (s, t, *w - *u * s - *v * t)
}

/// Barycentric coordinates `[λ1, λ2, λ3]` of the point `p` with respect to the triangle `(a, b, c)`.
///
/// In 2d the coordinates are calculated with Cramer's rule. In higher dimensions they are the coordinates of the
/// orthogonal projection of `p` onto the plane of the triangle. For degenerate triangles the coordinates are NaN.
pub fn barycentric<T: RealField + Copy, const D: usize>(
    a: &Point<T, D>,
    b: &Point<T, D>,
    c: &Point<T, D>,
    p: &Point<T, D>,
) -> [T; 3] {
    if D == 2 {
        let (x, y) = (p[0], p[1]);
        let (x1, y1) = (a[0], a[1]);
        let (x2, y2) = (b[0], b[1]);
        let (x3, y3) = (c[0], c[1]);

        let det = (y2 - y3) * (x1 - x3) + (x3 - x2) * (y1 - y3);
        let l1 = ((y2 - y3) * (x - x3) + (x3 - x2) * (y - y3)) / det;
        let l2 = ((y3 - y1) * (x - x3) + (x1 - x3) * (y - y3)) / det;

        [l1, l2, T::one() - l1 - l2]
    } else {
        let (s, t, _) = project_on_plane(&(b - a), &(c - a), &(p - a));
        [T::one() - s - t, s, t]
    }
}

/// Returns true if the point `p` lies inside the triangle `(a, b, c)` or on its boundary.
///
/// In more than 2 dimensions the point must also lie in the plane of the triangle. The distance to the plane is
/// compared to the size of the triangle with the relative tolerance of `T::default_epsilon()`.
pub fn triangle_contains<T: RealField + Copy, const D: usize>(
    a: &Point<T, D>,
    b: &Point<T, D>,
    c: &Point<T, D>,
    p: &Point<T, D>,
) -> bool {
    if D == 2 {
        return barycentric(a, b, c, p).iter().all(is_unit);
    }

    let u = b - a;
    let v = c - a;
    let (s, t, off_plane) = project_on_plane(&u, &v, &(p - a));
    let tolerance = <T as AbsDiffEq>::default_epsilon() * (u.norm_squared() + v.norm_squared());

    [T::one() - s - t, s, t].iter().all(is_unit) && off_plane.norm_squared() <= tolerance
}

impl<const N: usize, const D: usize, T, S> Ngon<N, S>
where
    T: RealField + Copy,
    S: VertexBuffer<Point = Point<T, D>>,
{
    /// Returns true if the `point` lies inside the N-gon or on its boundary.
    ///
    /// The N-gon is split into fan triangles from its first vertex and the point is checked against each of them. This
    /// is only correct for convex N-gons: for a non-convex one some fan triangles stick out of the polygon, and points
    /// there are reported as contained.
    ///
    /// Degenerate triangles (with all three vertices on one line) have NaN barycentric coordinates and never contain
    /// any points.
    pub fn contains_point(&self, point: &Point<T, D>) -> bool {
        self.fan().any(|[a, b, c]| triangle_contains(a, b, c, point))
    }
}
