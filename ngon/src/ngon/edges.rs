use std::iter::FusedIterator;

use crate::segment::Segment;

/// Iterator over the sides of a closed ring of vertices.
///
/// Returned by [`Ngon::edges`](super::Ngon::edges).
#[derive(Debug)]
pub struct Edges<'a, P> {
    vertices: &'a [P],
    front: usize,
    back: usize,
}

impl<'a, P> Edges<'a, P> {
    pub(super) fn new(vertices: &'a [P]) -> Self {
        Self {
            vertices,
            front: 0,
            back: vertices.len(),
        }
    }

    fn segment(&self, index: usize) -> Segment<'a, P> {
        let next = if index + 1 == self.vertices.len() {
            0
        } else {
            index + 1
        };

        Segment(&self.vertices[index], &self.vertices[next])
    }
}

impl<P> Clone for Edges<'_, P> {
    fn clone(&self) -> Self {
        Self {
            vertices: self.vertices,
            front: self.front,
            back: self.back,
        }
    }
}

impl<'a, P> Iterator for Edges<'a, P> {
    type Item = Segment<'a, P>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }

        let segment = self.segment(self.front);
        self.front += 1;
        Some(segment)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.back - self.front;
        (len, Some(len))
    }
}

impl<P> DoubleEndedIterator for Edges<'_, P> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }

        self.back -= 1;
        Some(self.segment(self.back))
    }
}

impl<P> ExactSizeIterator for Edges<'_, P> {}

impl<P> FusedIterator for Edges<'_, P> {}
