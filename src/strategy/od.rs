//! Origin/destination gradient edge rendering.
//!
//! Every edge is stroked with the same source→target gradient, so
//! directionality is encoded by gradient position rather than per-edge
//! category. Straight edges are resampled so the gradient has enough
//! points to shade along; curved edges already carry their own sampling.

use crate::color::Rgba;
use crate::curves::ColoredCurveCollection;
use crate::error::{Error, Result};
use crate::framebuffer::Framebuffer;
use crate::network::Network;
use crate::render::LineStyle;
use crate::strategy::{EdgeStrategy, GradientBatch};

/// Renders every edge with one origin→destination color gradient.
#[derive(Debug, Clone)]
pub struct OdGradient<'a> {
    network: &'a Network,
    n_points: usize,
    source_color: Rgba,
    target_color: Rgba,
    style: LineStyle,
}

impl<'a> OdGradient<'a> {
    /// Bind the strategy to a network with an interpolation sample count.
    ///
    /// `n_points` is the number of evenly spaced samples a straight edge is
    /// resampled into; it must be at least 2, validated at preparation time.
    #[must_use]
    pub fn new(network: &'a Network, n_points: usize) -> Self {
        Self {
            network,
            n_points,
            source_color: Rgba::BLUE,
            target_color: Rgba::RED,
            style: LineStyle::default(),
        }
    }

    /// Set the color of the origin end of every edge.
    #[must_use]
    pub fn source_color(mut self, color: Rgba) -> Self {
        self.source_color = color;
        self
    }

    /// Set the color of the destination end of every edge.
    #[must_use]
    pub fn target_color(mut self, color: Rgba) -> Self {
        self.target_color = color;
        self
    }

    /// Set the stroke style.
    #[must_use]
    pub fn style(mut self, style: LineStyle) -> Self {
        self.style = style;
        self
    }
}

/// Snapshot holding the shared curve collection for all edges.
#[derive(Debug, Clone)]
pub struct PreparedOd {
    curves: ColoredCurveCollection,
}

impl PreparedOd {
    /// Number of prepared curves.
    #[must_use]
    pub fn len(&self) -> usize {
        self.curves.len()
    }

    /// Whether the snapshot holds no curves.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }

    /// The shared curve collection.
    #[must_use]
    pub fn curves(&self) -> &ColoredCurveCollection {
        &self.curves
    }
}

impl EdgeStrategy for OdGradient<'_> {
    type Prepared = PreparedOd;
    type Handle = GradientBatch;

    fn name(&self) -> &'static str {
        "origin-destination"
    }

    fn prepare(&self) -> Result<Self::Prepared> {
        if self.n_points < 2 {
            return Err(Error::InvalidSampleCount(self.n_points));
        }
        if self.network.edge_count() == 0 {
            return Err(Error::EmptyNetwork);
        }

        let mut curves = ColoredCurveCollection::new();
        for edge in self.network.edges() {
            curves.add_curve(edge.geometry.resample(self.n_points), 1.0);
        }

        Ok(PreparedOd { curves })
    }

    fn render(&self, prepared: &Self::Prepared, fb: &mut Framebuffer) -> Result<Self::Handle> {
        let strokes =
            prepared
                .curves
                .stroke_with(fb, &self.style, self.source_color, self.target_color);

        Ok(GradientBatch {
            source: self.source_color,
            target: self.target_color,
            strokes,
        })
    }
}
