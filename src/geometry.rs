//! Geometric primitives for edge rendering.
//!
//! Provides the 2D point type and the discriminated edge geometry
//! representation. Whether an edge is a straight segment or a curved path is
//! decided once, at data-ingestion time, so no downstream code re-detects
//! geometry shape.

use crate::error::{Error, Result};

/// A 2D point with floating-point coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// X coordinate.
    pub x: f32,
    /// Y coordinate.
    pub y: f32,
}

impl Point {
    /// Origin point (0, 0).
    pub const ORIGIN: Self = Self::new(0.0, 0.0);

    /// Create a new point.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Calculate the distance to another point.
    #[must_use]
    pub fn distance(self, other: Self) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Linear interpolation between two points.
    #[must_use]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        Self::new(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
        )
    }
}

/// The drawable shape of an edge.
///
/// A `Segment` carries only its two endpoint coordinates; a `Curve` carries
/// the full ordered point sequence of an already-routed path (always three or
/// more points — two-point inputs are normalized to `Segment` at ingestion).
#[derive(Debug, Clone, PartialEq)]
pub enum EdgeGeometry {
    /// A straight two-point edge.
    Segment {
        /// Coordinates of the source endpoint.
        source: Point,
        /// Coordinates of the target endpoint.
        target: Point,
    },
    /// A curved path through three or more points.
    Curve(Vec<Point>),
}

impl EdgeGeometry {
    /// Build a geometry from an ordered point sequence.
    ///
    /// Two points become a [`EdgeGeometry::Segment`], more become a
    /// [`EdgeGeometry::Curve`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSampleCount`] for sequences of fewer than two
    /// points, which cannot be drawn.
    pub fn from_points(points: Vec<Point>) -> Result<Self> {
        match points.len() {
            n @ (0 | 1) => Err(Error::InvalidSampleCount(n)),
            2 => Ok(Self::Segment {
                source: points[0],
                target: points[1],
            }),
            _ => Ok(Self::Curve(points)),
        }
    }

    /// Whether this geometry is a straight two-point segment.
    #[must_use]
    pub const fn is_segment(&self) -> bool {
        matches!(self, Self::Segment { .. })
    }

    /// The coordinates of the first point.
    #[must_use]
    pub fn source(&self) -> Point {
        match self {
            Self::Segment { source, .. } => *source,
            Self::Curve(points) => points[0],
        }
    }

    /// The coordinates of the last point.
    #[must_use]
    pub fn target(&self) -> Point {
        match self {
            Self::Segment { target, .. } => *target,
            Self::Curve(points) => points[points.len() - 1],
        }
    }

    /// Number of points in the drawn path.
    #[must_use]
    pub fn point_count(&self) -> usize {
        match self {
            Self::Segment { .. } => 2,
            Self::Curve(points) => points.len(),
        }
    }

    /// Materialize the ordered point sequence of this geometry.
    #[must_use]
    pub fn to_points(&self) -> Vec<Point> {
        match self {
            Self::Segment { source, target } => vec![*source, *target],
            Self::Curve(points) => points.clone(),
        }
    }

    /// Resample a segment into `n` evenly spaced points by linear
    /// interpolation between its endpoints. Curved geometry passes through
    /// unchanged. `n` is clamped to at least 2.
    #[must_use]
    pub fn resample(&self, n: usize) -> Vec<Point> {
        match self {
            Self::Segment { source, target } => {
                let n = n.max(2);
                (0..n)
                    .map(|i| {
                        let t = i as f32 / (n - 1) as f32;
                        source.lerp(*target, t)
                    })
                    .collect()
            }
            Self::Curve(points) => points.clone(),
        }
    }
}
