//! Uniform-style edge rendering.

use crate::error::{Error, Result};
use crate::framebuffer::Framebuffer;
use crate::geometry::Point;
use crate::network::Network;
use crate::render::{stroke_polyline, LineStyle};
use crate::strategy::{EdgeStrategy, LineBatch};

/// Renders every edge with one shared style.
#[derive(Debug, Clone)]
pub struct PlainEdges<'a> {
    network: &'a Network,
    style: LineStyle,
}

impl<'a> PlainEdges<'a> {
    /// Bind the strategy to a network.
    #[must_use]
    pub fn new(network: &'a Network) -> Self {
        Self {
            network,
            style: LineStyle::default(),
        }
    }

    /// Set the stroke style.
    #[must_use]
    pub fn style(mut self, style: LineStyle) -> Self {
        self.style = style;
        self
    }
}

/// Snapshot of every edge's polyline, aligned with the edge list.
#[derive(Debug, Clone)]
pub struct PreparedLines {
    lines: Vec<Vec<Point>>,
}

impl PreparedLines {
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

    /// The prepared polylines.
    #[must_use]
    pub fn lines(&self) -> &[Vec<Point>] {
        &self.lines
    }
}

impl EdgeStrategy for PlainEdges<'_> {
    type Prepared = PreparedLines;
    type Handle = LineBatch;

    fn name(&self) -> &'static str {
        "plain"
    }

    fn prepare(&self) -> Result<Self::Prepared> {
        if self.network.edge_count() == 0 {
            return Err(Error::EmptyNetwork);
        }

        let lines = self
            .network
            .edges()
            .iter()
            .map(|edge| edge.geometry.to_points())
            .collect();

        Ok(PreparedLines { lines })
    }

    fn render(&self, prepared: &Self::Prepared, fb: &mut Framebuffer) -> Result<Self::Handle> {
        for line in &prepared.lines {
            stroke_polyline(fb, line, self.style.color, &self.style);
        }

        Ok(LineBatch {
            color: self.style.color,
            strokes: prepared.lines.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba;

    fn line_network() -> Network {
        let mut net = Network::new(vec![
            Point::new(2.0, 2.0),
            Point::new(18.0, 2.0),
            Point::new(18.0, 18.0),
        ]);
        net.add_edge(0, 1).unwrap();
        net.add_edge(1, 2).unwrap();
        net
    }

    #[test]
    fn test_prepared_count_matches_edges() {
        let net = line_network();
        let prepared = PlainEdges::new(&net).prepare().unwrap();
        assert_eq!(prepared.len(), net.edge_count());
    }

    #[test]
    fn test_empty_network_errors() {
        let net = Network::new(vec![Point::ORIGIN]);
        assert!(matches!(
            PlainEdges::new(&net).prepare(),
            Err(Error::EmptyNetwork)
        ));
    }

    #[test]
    fn test_render_draws_and_reports() {
        let net = line_network();
        let strategy = PlainEdges::new(&net)
            .style(LineStyle::new().color(Rgba::BLACK).alpha(1.0).antialiased(false));

        let prepared = strategy.prepare().unwrap();
        let mut fb = Framebuffer::new(20, 20).unwrap();
        fb.clear(Rgba::WHITE);

        let batch = strategy.render(&prepared, &mut fb).unwrap();
        assert_eq!(batch.strokes, 2);
        assert_eq!(batch.color, Rgba::BLACK);
        assert_eq!(fb.get_pixel(10, 2), Some(Rgba::BLACK));
    }

    #[test]
    fn test_render_is_repeatable() {
        let net = line_network();
        let strategy = PlainEdges::new(&net);
        let prepared = strategy.prepare().unwrap();

        let mut fb1 = Framebuffer::new(20, 20).unwrap();
        let mut fb2 = Framebuffer::new(20, 20).unwrap();
        fb1.clear(Rgba::WHITE);
        fb2.clear(Rgba::WHITE);

        strategy.render(&prepared, &mut fb1).unwrap();
        strategy.render(&prepared, &mut fb2).unwrap();
        assert_eq!(fb1.pixels(), fb2.pixels());
    }

    #[test]
    fn test_name() {
        let net = line_network();
        assert_eq!(PlainEdges::new(&net).name(), "plain");
    }
}
