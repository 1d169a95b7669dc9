use nalgebra::{Point, RealField, SVector};

/// A straight line segment between two points.
///
/// The segment does not own its endpoints, it only references the vertices of the shape it was taken from.
#[derive(Debug, PartialEq)]
pub struct Segment<'a, P>(pub &'a P, pub &'a P);

impl<P> Clone for Segment<'_, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P> Copy for Segment<'_, P> {}

impl<'a, P> Segment<'a, P> {
    /// Start point of the segment.
    pub fn start(&self) -> &'a P {
        self.0
    }

    /// End point of the segment.
    pub fn end(&self) -> &'a P {
        self.1
    }

    /// Returns the same segment traversed in the opposite direction.
    pub fn reversed(&self) -> Self {
        Segment(self.1, self.0)
    }
}

impl<T: RealField + Copy, const D: usize> Segment<'_, Point<T, D>> {
    /// Vector from the start to the end of the segment.
    pub fn vector(&self) -> SVector<T, D> {
        self.1 - self.0
    }

    /// Euclidean length of the segment.
    pub fn length(&self) -> T {
        self.vector().norm()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::{Point2, Point3};

    #[test]
    fn length() {
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(3.0, 4.0);
        assert_eq!(Segment(&a, &b).length(), 5.0);

        let a = Point3::new(1.0, 1.0, 1.0);
        let b = Point3::new(1.0, 1.0, 3.0);
        assert_eq!(Segment(&a, &b).length(), 2.0);
    }

    #[test]
    fn reversed() {
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(1.0, 2.0);
        let segment = Segment(&a, &b);

        assert_eq!(segment.reversed(), Segment(&b, &a));
        assert_eq!(segment.reversed().vector(), -segment.vector());
        assert_eq!(segment.start(), &a);
        assert_eq!(segment.end(), &b);
    }
}
