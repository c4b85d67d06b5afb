//! Gradient-colored curve batches.
//!
//! A [`ColoredCurveCollection`] accumulates polylines and strokes each of
//! them with a color gradient running from a start color at the curve's
//! source to an end color at its target. The gradient position is measured
//! by arc length, so long and short segments shade consistently.
//!
//! Curves carry a weight recorded at accumulation time. Weights are exposed
//! through [`ColoredCurveCollection::total_weight`] but do not yet drive
//! stroke width or opacity; rendering treats every curve uniformly.

use crate::color::Rgba;
use crate::framebuffer::Framebuffer;
use crate::geometry::Point;
use crate::render::{stroke_polyline, LineStyle};

/// An accumulating batch of polylines drawn with a source→target gradient.
#[derive(Debug, Clone)]
pub struct ColoredCurveCollection {
    curves: Vec<Vec<Point>>,
    weights: Vec<f32>,
    source: Rgba,
    target: Rgba,
}

impl Default for ColoredCurveCollection {
    fn default() -> Self {
        Self::new()
    }
}

impl ColoredCurveCollection {
    /// Create an empty collection with blue→red default colors.
    #[must_use]
    pub fn new() -> Self {
        Self {
            curves: Vec::new(),
            weights: Vec::new(),
            source: Rgba::BLUE,
            target: Rgba::RED,
        }
    }

    /// Append a curve with an associated weight.
    pub fn add_curve(&mut self, points: Vec<Point>, weight: f32) {
        self.curves.push(points);
        self.weights.push(weight);
    }

    /// Set the gradient endpoint colors.
    pub fn set_colors(&mut self, source: Rgba, target: Rgba) {
        self.source = source;
        self.target = target;
    }

    /// Number of accumulated curves.
    #[must_use]
    pub fn len(&self) -> usize {
        self.curves.len()
    }

    /// Whether the collection holds no curves.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }

    /// Sum of the accumulated curve weights.
    #[must_use]
    pub fn total_weight(&self) -> f32 {
        self.weights.iter().sum()
    }

    /// The accumulated curves.
    #[must_use]
    pub fn curves(&self) -> &[Vec<Point>] {
        &self.curves
    }

    /// Stroke every curve using the stored gradient colors.
    ///
    /// Returns the number of curves stroked.
    pub fn render(&self, fb: &mut Framebuffer, style: &LineStyle) -> usize {
        self.stroke_with(fb, style, self.source, self.target)
    }

    /// Stroke every curve with explicit gradient colors.
    ///
    /// Each segment of a curve is stroked in the gradient color at its
    /// arc-length midpoint. Returns the number of curves stroked.
    pub fn stroke_with(
        &self,
        fb: &mut Framebuffer,
        style: &LineStyle,
        source: Rgba,
        target: Rgba,
    ) -> usize {
        for curve in &self.curves {
            stroke_gradient_curve(fb, curve, style, source, target);
        }
        self.curves.len()
    }
}

fn stroke_gradient_curve(
    fb: &mut Framebuffer,
    points: &[Point],
    style: &LineStyle,
    source: Rgba,
    target: Rgba,
) {
    if points.len() < 2 {
        return;
    }

    let lengths: Vec<f32> = points.windows(2).map(|p| p[0].distance(p[1])).collect();
    let total: f32 = lengths.iter().sum();

    if total < f32::EPSILON {
        return;
    }

    let mut walked = 0.0;
    for (pair, len) in points.windows(2).zip(lengths) {
        let t_mid = (walked + len / 2.0) / total;
        let color = source.lerp(target, t_mid);
        stroke_polyline(fb, pair, color, style);
        walked += len;
    }
}
