use nalgebra::{Point, RealField};

use crate::chain::Chain;
use crate::ngon::Ngon;
use crate::segment::Segment;
use crate::vertices::VertexBuffer;

/// Polygon geometry.
///
/// A polygon is bounded by one outer chain and zero or more inner chains, which are the holes of the polygon. This
/// trait gives generic code access to the boundary, area and containment of a polygon without knowing how it is
/// represented.
pub trait Polygon {
    /// Type of the polygon vertices.
    type Point;
    /// Numeric type of the area.
    type Num;

    /// Returns true if the boundary of the polygon does not intersect itself.
    fn is_simple(&self) -> bool;

    /// Returns true if the polygon has at least one hole.
    fn has_holes(&self) -> bool;

    /// Area of the polygon.
    fn measure(&self) -> Self::Num;

    /// Iterates over all segments of the polygon boundary.
    fn edges(&self) -> impl Iterator<Item = Segment<'_, Self::Point>>;

    /// Boundary chains of the polygon, starting with the outer one. Every chain repeats its first point at the end.
    fn chains(&self) -> Vec<Chain<&'_ Self::Point>>;

    /// Returns true if the `point` lies inside the polygon or on its boundary.
    fn contains_point(&self, point: &Self::Point) -> bool;

    /// Removes duplicate vertices from the polygon boundary.
    fn unique(&mut self) -> &mut Self;
}

impl<const N: usize, const D: usize, T, S> Polygon for Ngon<N, S>
where
    T: RealField + Copy,
    S: VertexBuffer<Point = Point<T, D>>,
{
    type Point = Point<T, D>;
    type Num = T;

    /// Self-intersecting vertex sequences are not valid N-gons, so this is always true.
    fn is_simple(&self) -> bool {
        true
    }

    fn has_holes(&self) -> bool {
        false
    }

    fn measure(&self) -> T {
        Ngon::measure(self)
    }

    fn edges(&self) -> impl Iterator<Item = Segment<'_, Self::Point>> {
        Ngon::edges(self)
    }

    fn chains(&self) -> Vec<Chain<&'_ Self::Point>> {
        Ngon::chains(self)
    }

    fn contains_point(&self, point: &Self::Point) -> bool {
        Ngon::contains_point(self, point)
    }

    /// The number of vertices of an N-gon is fixed, so nothing is removed and the N-gon is returned unchanged.
    fn unique(&mut self) -> &mut Self {
        self
    }
}
