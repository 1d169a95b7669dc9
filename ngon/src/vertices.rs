//! Storage of the N-gon vertices.
//!
//! An [`Ngon`](crate::Ngon) does not own a dedicated vertex container. Instead it wraps anything that can present its
//! points as a slice: a fixed array, a `Vec`, a shared `Arc<[P]>` or, most importantly, a borrowed view into a larger
//! vertex buffer. Wrapping never copies the points, so building many N-gons over one buffer does not allocate.

use std::borrow::Cow;
use std::rc::Rc;
use std::sync::Arc;

/// Ordered, indexable sequence of points an N-gon can be built on.
pub trait VertexBuffer {
    /// Type of the points in the buffer.
    type Point;

    /// Returns the points of the buffer in order.
    ///
    /// An N-gon checks the number of points once, when it is created. Implementations should return the same number of
    /// points on every call. If the buffer gets shorter, N-gon operations only see the points that are left and never
    /// panic, but their results are meaningless.
    fn as_points(&self) -> &[Self::Point];

    /// Number of points in the buffer.
    fn len(&self) -> usize {
        self.as_points().len()
    }

    /// Returns true if the buffer contains no points.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<P> VertexBuffer for &[P] {
    type Point = P;

    fn as_points(&self) -> &[P] {
        self
    }
}

impl<P> VertexBuffer for &mut [P] {
    type Point = P;

    fn as_points(&self) -> &[P] {
        self
    }
}

impl<P, const K: usize> VertexBuffer for [P; K] {
    type Point = P;

    fn as_points(&self) -> &[P] {
        self
    }
}

impl<P, const K: usize> VertexBuffer for &[P; K] {
    type Point = P;

    fn as_points(&self) -> &[P] {
        *self
    }
}

impl<P> VertexBuffer for Vec<P> {
    type Point = P;

    fn as_points(&self) -> &[P] {
        self
    }
}

impl<P> VertexBuffer for Box<[P]> {
    type Point = P;

    fn as_points(&self) -> &[P] {
        self
    }
}

impl<P> VertexBuffer for Rc<[P]> {
    type Point = P;

    fn as_points(&self) -> &[P] {
        self
    }
}

impl<P> VertexBuffer for Arc<[P]> {
    type Point = P;

    fn as_points(&self) -> &[P] {
        self
    }
}

impl<P: Clone> VertexBuffer for Cow<'_, [P]> {
    type Point = P;

    fn as_points(&self) -> &[P] {
        self
    }
}
