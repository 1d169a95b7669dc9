//! Polygons with a fixed number of vertices and the algorithms on them.
//!
//! The central type of the crate is [`Ngon`]: a polygon with exactly `N` vertices, where `N` is known at compile time.
//! The N-gon can be embedded in a space of any dimension and is built over a [`VertexBuffer`], which can be a borrowed
//! slice of a larger buffer. This makes it cheap to look at a big vertex array as a collection of triangles or
//! quadrangles:
//!
//! ```
//! use nalgebra::Point2;
//! use ngon::Triangle;
//!
//! let buffer = vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(1.0, 0.0),
//!     Point2::new(0.0, 1.0),
//!     Point2::new(1.0, 0.0),
//!     Point2::new(1.0, 1.0),
//!     Point2::new(0.0, 1.0),
//! ];
//!
//! let total_area: f64 = Triangle::chunks(&buffer)
//!     .expect("buffer contains whole triangles")
//!     .map(|triangle| triangle.measure())
//!     .sum();
//! assert_eq!(total_area, 1.0);
//! ```
//!
//! Supported operations are:
//! * area: [`Ngon::signed_area`] for planar N-gons, [`Ngon::measure`] in any dimension;
//! * boundary: [`Ngon::edges`] and [`Ngon::chains`];
//! * point containment: [`Ngon::contains_point`], based on the fan triangulation and valid for convex N-gons.
//!
//! Generic code that works with any polygon-like shape can use the [`Polygon`] trait instead.

pub mod error;
pub use error::NgonError;

mod chain;
pub use chain::Chain;

pub mod ngon;
pub use ngon::{Decagon, Heptagon, Hexagon, Ngon, Nonagon, Octagon, Pentagon, Quadrangle, Triangle};

mod orient;
pub use orient::Orientation;

mod polygon;
pub use polygon::Polygon;

mod segment;
pub use segment::Segment;

mod vertices;
pub use vertices::VertexBuffer;
