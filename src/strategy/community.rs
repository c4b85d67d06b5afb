//! Community-pair gradient edge rendering.
//!
//! Edges are grouped by the ordered pair (source community, target
//! community) and each group is stroked as gradient curves running from the
//! source community's color to the target community's color.

use std::collections::BTreeMap;

use crate::color::Rgba;
use crate::curves::ColoredCurveCollection;
use crate::error::{Error, Result};
use crate::framebuffer::Framebuffer;
use crate::network::Network;
use crate::palette::Palette;
use crate::render::LineStyle;
use crate::strategy::{EdgeStrategy, GradientBatch};

/// Ordered (source community, target community) pair.
///
/// `(a, b)` and `(b, a)` are distinct groups.
pub type CommunityPair = (u32, u32);

/// Renders edges colored by the communities of their endpoints.
#[derive(Debug, Clone)]
pub struct CommunityGradient<'a> {
    network: &'a Network,
    node_communities: Vec<u32>,
    community_ids: Vec<u32>,
    palette: Palette,
    style: LineStyle,
}

impl<'a> CommunityGradient<'a> {
    /// Bind the strategy to a network and a node-aligned community array.
    ///
    /// Distinct labels are sorted and deduplicated here; alignment with the
    /// node list is validated at preparation time.
    #[must_use]
    pub fn new(network: &'a Network, node_communities: Vec<u32>) -> Self {
        let mut community_ids = node_communities.clone();
        community_ids.sort_unstable();
        community_ids.dedup();

        Self {
            network,
            node_communities,
            community_ids,
            palette: Palette::Plasma,
            style: LineStyle::default(),
        }
    }

    /// Set the categorical palette the community colors are sampled from.
    #[must_use]
    pub fn palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Set the stroke style shared by every group.
    #[must_use]
    pub fn style(mut self, style: LineStyle) -> Self {
        self.style = style;
        self
    }

    /// The distinct community labels, sorted.
    #[must_use]
    pub fn community_ids(&self) -> &[u32] {
        &self.community_ids
    }

    /// Color assigned to each distinct community label.
    #[must_use]
    pub fn community_colors(&self) -> BTreeMap<u32, Rgba> {
        self.community_ids
            .iter()
            .copied()
            .zip(self.palette.sample(self.community_ids.len()))
            .collect()
    }
}

/// Snapshot of per-community-pair curve groups.
#[derive(Debug, Clone)]
pub struct PreparedCommunities {
    groups: BTreeMap<CommunityPair, ColoredCurveCollection>,
}

impl PreparedCommunities {
    /// The accumulated curve group per ordered community pair.
    #[must_use]
    pub fn groups(&self) -> &BTreeMap<CommunityPair, ColoredCurveCollection> {
        &self.groups
    }

    /// Total number of accumulated curves across all groups.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.values().map(ColoredCurveCollection::len).sum()
    }

    /// Whether no curves were accumulated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl EdgeStrategy for CommunityGradient<'_> {
    type Prepared = PreparedCommunities;
    type Handle = BTreeMap<CommunityPair, GradientBatch>;

    fn name(&self) -> &'static str {
        "community-gradient"
    }

    fn prepare(&self) -> Result<Self::Prepared> {
        if self.node_communities.len() != self.network.node_count() {
            return Err(Error::CommunityLength {
                expected: self.network.node_count(),
                got: self.node_communities.len(),
            });
        }
        if self.network.edge_count() == 0 {
            return Err(Error::EmptyNetwork);
        }

        let mut groups: BTreeMap<CommunityPair, ColoredCurveCollection> = BTreeMap::new();

        for edge in self.network.edges() {
            let pair = (
                self.node_communities[edge.source],
                self.node_communities[edge.target],
            );

            groups
                .entry(pair)
                .or_default()
                .add_curve(edge.geometry.to_points(), 1.0);
        }

        Ok(PreparedCommunities { groups })
    }

    fn render(&self, prepared: &Self::Prepared, fb: &mut Framebuffer) -> Result<Self::Handle> {
        let colors = self.community_colors();

        let mut handles = BTreeMap::new();
        for (&pair, curves) in &prepared.groups {
            // Every label in a prepared pair came from node_communities, so
            // the color lookup cannot miss.
            let source = colors.get(&pair.0).copied().unwrap_or_default();
            let target = colors.get(&pair.1).copied().unwrap_or_default();

            let strokes = curves.stroke_with(fb, &self.style, source, target);
            handles.insert(
                pair,
                GradientBatch {
                    source,
                    target,
                    strokes,
                },
            );
        }

        Ok(handles)
    }
}
