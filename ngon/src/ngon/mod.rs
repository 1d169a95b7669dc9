//! Polygons with a number of vertices known at compile time.
//!
//! An [`Ngon`] is a thin wrapper around a [`VertexBuffer`]. The vertex count `N` is a const generic parameter, so
//! checking it costs nothing after construction and the vertices can be stored in a plain `[P; N]` array. The
//! vertices are expected to go around the polygon counterclockwise. This is not verified, but the sign of
//! [`Ngon::signed_area`] and the orientation of [`Ngon::edges`] rely on it.
//!
//! The more common vertex counts have named aliases: [`Triangle`], [`Quadrangle`], [`Pentagon`], [`Hexagon`],
//! [`Heptagon`], [`Octagon`], [`Nonagon`] and [`Decagon`].

mod contains;
mod edges;
pub(crate) mod measure;
#[cfg(feature = "serde")]
mod serialize;

pub use contains::{barycentric, triangle_contains};
pub use edges::Edges;
pub use measure::{triangle_area, triangle_signed_area};

use crate::chain::Chain;
use crate::error::NgonError;
use crate::vertices::VertexBuffer;

/// Polygon with exactly `N` vertices stored in `S`.
///
/// The N-gon never copies its vertices: constructing it from a slice of a larger buffer produces a view into that
/// buffer.
///
/// ```
/// use nalgebra::Point2;
/// use ngon::{Ngon, Quadrangle};
///
/// let points = vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(1.0, 0.0),
///     Point2::new(1.0, 1.0),
///     Point2::new(0.0, 1.0),
/// ];
///
/// let square: Quadrangle<&[Point2<f64>]> = Ngon::new(&points[..]).unwrap();
/// assert_eq!(square.measure(), 1.0);
/// assert!(square.contains_point(&Point2::new(0.5, 0.5)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ngon<const N: usize, S> {
    vertices: S,
}

/// Polygon with 3 vertices.
pub type Triangle<S> = Ngon<3, S>;
/// Polygon with 4 vertices.
pub type Quadrangle<S> = Ngon<4, S>;
/// Polygon with 5 vertices.
pub type Pentagon<S> = Ngon<5, S>;
/// Polygon with 6 vertices.
pub type Hexagon<S> = Ngon<6, S>;
/// Polygon with 7 vertices.
pub type Heptagon<S> = Ngon<7, S>;
/// Polygon with 8 vertices.
pub type Octagon<S> = Ngon<8, S>;
/// Polygon with 9 vertices.
pub type Nonagon<S> = Ngon<9, S>;
/// Polygon with 10 vertices.
pub type Decagon<S> = Ngon<10, S>;

impl<const N: usize, S> Ngon<N, S> {
    /// Number of vertices of the N-gon.
    pub const NVERTICES: usize = N;

    const VALID: () = assert!(N >= 3, "an N-gon must have at least 3 vertices");

    /// Number of vertices of the N-gon.
    pub const fn nvertices(&self) -> usize {
        N
    }

    /// Returns true if the N-gon is a simplex, i.e. a triangle.
    pub const fn is_simplex(&self) -> bool {
        N == 3
    }

    /// Returns true if the N-gon is known to be convex.
    ///
    /// Only triangles are known to be convex. Convexity of polygons with more vertices is not computed and `false` is
    /// returned for them regardless of their shape.
    pub const fn is_convex(&self) -> bool {
        N == 3
    }

    /// Consumes the N-gon and returns the underlying vertex storage.
    pub fn into_inner(self) -> S {
        self.vertices
    }
}

impl<const N: usize, S: VertexBuffer> Ngon<N, S> {
    /// Creates a new N-gon over the given vertices.
    ///
    /// Returns [`NgonError::DimensionMismatch`] if the storage does not contain exactly `N` points. The storage is
    /// kept as is, without copying.
    pub fn new(vertices: S) -> Result<Self, NgonError> {
        #[allow(clippy::let_unit_value)]
        let () = Self::VALID;

        let actual = vertices.len();
        if actual != N {
            log::debug!("Cannot create a {N}-gon from {actual} vertices");
            return Err(NgonError::DimensionMismatch {
                expected: N,
                actual,
            });
        }

        Ok(Self { vertices })
    }

    /// Vertices of the N-gon in counterclockwise order.
    pub fn vertices(&self) -> &[S::Point] {
        self.vertices.as_points()
    }

    /// Returns the vertex with the given index, or `None` if `index >= N`.
    pub fn vertex(&self, index: usize) -> Option<&S::Point> {
        self.vertices().get(index)
    }

    /// Iterates over the `N` sides of the N-gon.
    ///
    /// Side `i` goes from vertex `i` to vertex `(i + 1) % N`, so the segments follow the boundary counterclockwise
    /// starting at the first vertex. The iterator is lazy and can be cloned to traverse the boundary again.
    pub fn edges(&self) -> Edges<'_, S::Point> {
        Edges::new(self.vertices())
    }

    /// Boundary of the N-gon as a list of closed chains.
    ///
    /// An N-gon has no holes, so there is always exactly one chain. It contains all the vertices followed by the
    /// first vertex again.
    pub fn chains(&self) -> Vec<Chain<&S::Point>> {
        vec![Chain::closing(self.vertices())]
    }

    /// Fan triangulation of the N-gon from its first vertex, as vertex references.
    pub(crate) fn fan(&self) -> impl Iterator<Item = [&S::Point; 3]> + '_ {
        let vertices = self.vertices();
        let first = vertices.first();
        vertices
            .windows(2)
            .skip(1)
            .filter_map(move |pair| Some([first?, &pair[0], &pair[1]]))
    }

    /// Splits the N-gon into `N - 2` triangles sharing the first vertex.
    ///
    /// Triangle `i` consists of the vertices `0`, `i + 1` and `i + 2`. For convex N-gons the triangles cover the
    /// polygon exactly.
    pub fn triangulate(&self) -> impl Iterator<Item = Triangle<[S::Point; 3]>> + '_
    where
        S::Point: Clone,
    {
        self.fan().map(|vertices| Triangle::from(vertices.map(Clone::clone)))
    }
}

impl<'a, const N: usize, P> Ngon<N, &'a [P]> {
    /// Splits a vertex buffer into consecutive N-gons.
    ///
    /// Each N-gon is a view into the `buffer`, so no points are copied and nothing is allocated. Returns
    /// [`NgonError::DimensionMismatch`] if the length of the buffer is not a multiple of `N`.
    pub fn chunks(buffer: &'a [P]) -> Result<impl ExactSizeIterator<Item = Self> + 'a, NgonError> {
        #[allow(clippy::let_unit_value)]
        let () = Self::VALID;

        let remainder = buffer.len() % N;
        if remainder != 0 {
            log::debug!(
                "Cannot split {} vertices into {N}-gons, {remainder} vertices are left over",
                buffer.len()
            );
            return Err(NgonError::DimensionMismatch {
                expected: N,
                actual: remainder,
            });
        }

        Ok(buffer.chunks_exact(N).map(|vertices| Self { vertices }))
    }
}

impl<const N: usize, P> From<[P; N]> for Ngon<N, [P; N]> {
    fn from(vertices: [P; N]) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::VALID;

        Self { vertices }
    }
}

impl<'a, const N: usize, P> From<&'a [P; N]> for Ngon<N, &'a [P]> {
    fn from(vertices: &'a [P; N]) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::VALID;

        Self {
            vertices: vertices.as_slice(),
        }
    }
}

impl<'a, const N: usize, P> TryFrom<&'a [P]> for Ngon<N, &'a [P]> {
    type Error = NgonError;

    fn try_from(vertices: &'a [P]) -> Result<Self, Self::Error> {
        Self::new(vertices)
    }
}

impl<const N: usize, P> TryFrom<Vec<P>> for Ngon<N, Vec<P>> {
    type Error = NgonError;

    fn try_from(vertices: Vec<P>) -> Result<Self, Self::Error> {
        Self::new(vertices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use nalgebra::{Point2, Point3};
    use std::cell::Cell;
    use std::sync::Arc;

    fn unit_square() -> [Point2<f64>; 4] {
        [
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
        ]
    }

    /// Loses two points every time it is accessed.
    struct Shrinking {
        points: [Point2<f64>; 4],
        len: Cell<usize>,
    }

    impl VertexBuffer for Shrinking {
        type Point = Point2<f64>;

        fn as_points(&self) -> &[Point2<f64>] {
            let len = self.len.get();
            self.len.set(len.saturating_sub(2));
            &self.points[..len]
        }
    }

    #[test]
    fn new_checks_vertex_count() {
        let points = unit_square();

        let square = Quadrangle::new(&points[..]).expect("4 vertices");
        assert_eq!(square.nvertices(), 4);
        assert_eq!(Quadrangle::<&[Point2<f64>]>::NVERTICES, 4);

        assert_matches!(
            Quadrangle::new(&points[..3]),
            Err(NgonError::DimensionMismatch {
                expected: 4,
                actual: 3
            })
        );
        assert_matches!(
            Triangle::new(points.to_vec()),
            Err(NgonError::DimensionMismatch {
                expected: 3,
                actual: 4
            })
        );
    }

    #[test]
    fn new_does_not_copy() {
        let buffer: Vec<Point2<f64>> = (0..10).map(|i| Point2::new(i as f64, 0.0)).collect();
        let ngon = Pentagon::new(&buffer[3..8]).expect("5 vertices");

        assert!(std::ptr::eq(ngon.vertices(), &buffer[3..8]));
        assert_eq!(ngon.vertex(0), Some(&Point2::new(3.0, 0.0)));
        assert_eq!(ngon.vertex(5), None);
    }

    #[test]
    fn vertex_count_is_inferred_from_arrays() {
        let triangle = Ngon::from([[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]]);
        assert_eq!(triangle.nvertices(), 3);

        let points = unit_square();
        let square: Quadrangle<&[Point2<f64>]> = (&points).into();
        assert_eq!(square.nvertices(), 4);
        assert_eq!(square.into_inner(), &points[..]);
    }

    #[test]
    fn try_from() {
        let points = unit_square().to_vec();
        assert!(Quadrangle::<&[Point2<f64>]>::try_from(&points[..]).is_ok());
        assert!(Hexagon::<Vec<Point2<f64>>>::try_from(points).is_err());
    }

    #[test]
    fn shared_storage() {
        let points: Arc<[Point3<f64>]> = Arc::from(vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ]);
        let triangle = Triangle::new(points.clone()).expect("3 vertices");

        assert_eq!(Arc::strong_count(&points), 2);
        assert!(std::ptr::eq(triangle.vertices(), &points[..]));
    }

    #[test]
    fn topology() {
        let triangle = Ngon::from([[0, 0], [1, 0], [0, 1]]);
        assert!(triangle.is_simplex());
        assert!(triangle.is_convex());

        let square = Ngon::from(unit_square());
        assert!(!square.is_simplex());
        assert!(!square.is_convex());
    }

    #[test]
    fn edges() {
        let points = unit_square();
        let square = Ngon::from(points);

        let edges: Vec<_> = square.edges().collect();
        assert_eq!(edges.len(), 4);
        for (i, edge) in edges.iter().enumerate() {
            assert_eq!(edge.start(), &points[i]);
            assert_eq!(edge.end(), &points[(i + 1) % 4]);
        }

        let cycle: Vec<_> = square.edges().map(|e| *e.start()).collect();
        assert_eq!(cycle, points);
    }

    #[test]
    fn chains() {
        let points = unit_square();
        let square = Ngon::from(points);

        let chains = square.chains();
        assert_eq!(chains.len(), 1);

        let chain = &chains[0];
        assert_eq!(chain.len(), 5);
        assert!(chain.is_closed());
        assert_eq!(chain[0], &points[0]);
        assert_eq!(chain[4], &points[0]);
        assert_eq!(chain.iter_segments().count(), 4);
    }

    #[test]
    fn triangulate() {
        let hexagon = Ngon::from([
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(2.0, 1.0),
            Point2::new(1.0, 2.0),
            Point2::new(0.0, 2.0),
            Point2::new(-1.0, 1.0),
        ]);

        let triangles: Vec<_> = hexagon.triangulate().collect();
        assert_eq!(triangles.len(), 4);
        for (i, triangle) in triangles.iter().enumerate() {
            assert_eq!(triangle.vertex(0), hexagon.vertex(0));
            assert_eq!(triangle.vertex(1), hexagon.vertex(i + 1));
            assert_eq!(triangle.vertex(2), hexagon.vertex(i + 2));
        }

        assert_eq!(triangles[0].triangulate().count(), 1);
    }

    #[test]
    fn buffer_shrinking_after_construction() {
        let buffer = Shrinking {
            points: unit_square(),
            len: Cell::new(4),
        };
        let square = Quadrangle::new(buffer).expect("4 vertices");

        assert_eq!(square.fan().count(), 0);
        assert_eq!(square.measure(), 0.0);
        assert!(!square.contains_point(&Point2::new(0.5, 0.5)));
        assert_eq!(square.edges().count(), 0);
    }

    #[test]
    fn fan() {
        let hexagon = Ngon::from([0, 1, 2, 3, 4, 5]);
        let fan: Vec<_> = hexagon.fan().map(|[a, b, c]| [*a, *b, *c]).collect();
        assert_eq!(fan, vec![[0, 1, 2], [0, 2, 3], [0, 3, 4], [0, 4, 5]]);
    }

    #[test]
    fn chunks() {
        let buffer: Vec<Point2<f64>> = (0..12).map(|i| Point2::new(i as f64, 1.0)).collect();

        let quads: Vec<_> = Quadrangle::chunks(&buffer)
            .expect("multiple of 4")
            .collect();
        assert_eq!(quads.len(), 3);
        assert!(std::ptr::eq(quads[1].vertices(), &buffer[4..8]));

        let triangles = Triangle::chunks(&buffer).expect("multiple of 3");
        assert_eq!(triangles.len(), 4);

        assert_matches!(
            Pentagon::chunks(&buffer).err(),
            Some(NgonError::DimensionMismatch {
                expected: 5,
                actual: 2
            })
        );
    }
}
