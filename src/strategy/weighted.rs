//! Weight-binned edge rendering.
//!
//! Edges are partitioned into `k` equal-width value bins by a per-edge
//! weight, and each bin is stroked as a separately colored batch.

use crate::color::Rgba;
use crate::error::{Error, Result};
use crate::framebuffer::Framebuffer;
use crate::geometry::Point;
use crate::network::{Network, BETWEENNESS};
use crate::palette::{dark_ramp, Palette};
use crate::render::{stroke_polyline, LineStyle};
use crate::strategy::{EdgeStrategy, LineBatch};

/// Where the per-edge weights come from.
#[derive(Debug, Clone, PartialEq)]
pub enum WeightSource {
    /// A named edge property of the network.
    ///
    /// A missing `"betweenness"` property triggers centrality computation as
    /// a fallback; any other missing name is an error.
    Property(String),
    /// An explicit weight array aligned 1:1 with the edge list.
    Values(Vec<f32>),
}

impl WeightSource {
    /// Shorthand for a named property source.
    #[must_use]
    pub fn property(name: impl Into<String>) -> Self {
        Self::Property(name.into())
    }
}

/// Renders edges colored by which weight bin they fall into.
#[derive(Debug, Clone)]
pub struct WeightedEdges<'a> {
    network: &'a Network,
    weights: WeightSource,
    k: usize,
    palette: Option<Palette>,
    base_color: Rgba,
    style: LineStyle,
}

impl<'a> WeightedEdges<'a> {
    /// Bind the strategy to a network with a weight source and bin count.
    #[must_use]
    pub fn new(network: &'a Network, weights: WeightSource, k: usize) -> Self {
        Self {
            network,
            weights,
            k,
            palette: None,
            base_color: Rgba::rgb(0xa7, 0xa7, 0xa7),
            style: LineStyle::default(),
        }
    }

    /// Use a named palette for the bin colors instead of the dark ramp.
    #[must_use]
    pub fn palette(mut self, palette: Palette) -> Self {
        self.palette = Some(palette);
        self
    }

    /// Set the base color the dark ramp blends toward.
    #[must_use]
    pub fn base_color(mut self, color: Rgba) -> Self {
        self.base_color = color;
        self
    }

    /// Set the stroke style shared by every bin.
    #[must_use]
    pub fn style(mut self, style: LineStyle) -> Self {
        self.style = style;
        self
    }

    /// The colors the bins will be stroked with, darkest tier first.
    #[must_use]
    pub fn bin_colors(&self) -> Vec<Rgba> {
        self.palette.map_or_else(
            || dark_ramp(self.base_color, self.k),
            |palette| palette.sample(self.k),
        )
    }

    fn resolve_weights(&self) -> Result<Vec<f32>> {
        let weights = match &self.weights {
            WeightSource::Property(name) => match self.network.edge_property(name) {
                Some(values) => values.to_vec(),
                None if name == BETWEENNESS => self.network.estimate_betweenness(),
                None => return Err(Error::UnknownEdgeProperty(name.clone())),
            },
            WeightSource::Values(values) => values.clone(),
        };

        if weights.len() != self.network.edge_count() {
            return Err(Error::WeightsLength {
                expected: self.network.edge_count(),
                got: weights.len(),
            });
        }

        Ok(weights)
    }
}

/// Snapshot of edge polylines with their bin assignment.
#[derive(Debug, Clone)]
pub struct PreparedBins {
    lines: Vec<Vec<Point>>,
    weights: Vec<f32>,
    bin_edges: Vec<f32>,
    bin_of: Vec<usize>,
    k: usize,
}

impl PreparedBins {
    /// Number of prepared polylines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the snapshot holds no polylines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Bin count used for the partition.
    #[must_use]
    pub fn bin_count(&self) -> usize {
        self.k
    }

    /// The `k + 1` non-decreasing bin boundaries.
    #[must_use]
    pub fn bin_edges(&self) -> &[f32] {
        &self.bin_edges
    }

    /// Bin index per edge, each in `[0, k)`.
    #[must_use]
    pub fn bin_assignments(&self) -> &[usize] {
        &self.bin_of
    }

    /// The resolved weight value per edge.
    #[must_use]
    pub fn weights(&self) -> &[f32] {
        &self.weights
    }
}

/// Partition values into `k` equal-width bins over their range.
///
/// Returns the `k + 1` bin boundaries and the bin index per value. A
/// zero-width range places every value in bin 0.
fn equal_width_bins(values: &[f32], k: usize) -> (Vec<f32>, Vec<usize>) {
    let min = values.iter().copied().fold(f32::INFINITY, f32::min);
    let max = values.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    let width = (max - min) / k as f32;

    let edges = (0..=k).map(|i| min + width * i as f32).collect();

    let assign = |v: f32| -> usize {
        if width <= 0.0 {
            return 0;
        }
        (((v - min) / width).floor() as usize).min(k - 1)
    };

    let bins = values.iter().map(|&v| assign(v)).collect();
    (edges, bins)
}

impl EdgeStrategy for WeightedEdges<'_> {
    type Prepared = PreparedBins;
    type Handle = Vec<LineBatch>;

    fn name(&self) -> &'static str {
        "weighted"
    }

    fn prepare(&self) -> Result<Self::Prepared> {
        if self.k == 0 {
            return Err(Error::InvalidBinCount(self.k));
        }
        if self.network.edge_count() == 0 {
            return Err(Error::EmptyNetwork);
        }

        let lines: Vec<Vec<Point>> = self
            .network
            .edges()
            .iter()
            .map(|edge| edge.geometry.to_points())
            .collect();

        let weights = self.resolve_weights()?;
        let (bin_edges, bin_of) = equal_width_bins(&weights, self.k);

        Ok(PreparedBins {
            lines,
            weights,
            bin_edges,
            bin_of,
            k: self.k,
        })
    }

    fn render(&self, prepared: &Self::Prepared, fb: &mut Framebuffer) -> Result<Self::Handle> {
        let colors = self.bin_colors();

        let mut batches = Vec::with_capacity(self.k);
        for (bin, &color) in colors.iter().enumerate() {
            let mut strokes = 0;
            for (line, &assigned) in prepared.lines.iter().zip(&prepared.bin_of) {
                if assigned == bin {
                    stroke_polyline(fb, line, color, &self.style);
                    strokes += 1;
                }
            }
            batches.push(LineBatch { color, strokes });
        }

        Ok(batches)
    }
}
