//! Closed polyline.
//!
//! Unlike a contour that implicitly connects its last point back to the first one, a [`Chain`] stores the closing point
//! explicitly: the last point of a closed chain is the same as the first one.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::segment::Segment;

/// Ordered sequence of points describing one boundary ring of a shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Chain<P> {
    points: Vec<P>,
}

impl<P> std::ops::Deref for Chain<P> {
    type Target = [P];

    fn deref(&self) -> &Self::Target {
        &self.points
    }
}

impl<P> Chain<P> {
    /// Creates a new chain from the given points.
    pub fn new(points: Vec<P>) -> Self {
        Self { points }
    }

    /// Creates a closed chain by repeating the first of the given `points` at the end.
    pub fn closing(points: impl IntoIterator<Item = P>) -> Self
    where
        P: Clone,
    {
        let mut points: Vec<P> = points.into_iter().collect();
        if let Some(first) = points.first().cloned() {
            points.push(first);
        }

        Self { points }
    }

    /// Points of the chain, including the closing point.
    pub fn points(&self) -> &[P] {
        &self.points
    }

    /// Consumes the chain and returns its points.
    pub fn into_points(self) -> Vec<P> {
        self.points
    }

    /// Returns true if the first and the last points of the chain are the same.
    pub fn is_closed(&self) -> bool
    where
        P: PartialEq,
    {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => self.points.len() > 1 && first == last,
            _ => false,
        }
    }

    /// Iterates over the segments between consecutive points of the chain.
    pub fn iter_segments(&self) -> impl Iterator<Item = Segment<'_, P>> {
        self.points
            .windows(2)
            .map(|pair| Segment(&pair[0], &pair[1]))
    }
}

impl<P> From<Chain<P>> for Vec<P> {
    fn from(value: Chain<P>) -> Self {
        value.points
    }
}
