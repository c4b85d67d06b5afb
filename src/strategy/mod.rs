//! Edge rendering strategies.
//!
//! Each strategy binds to a [`Network`](crate::network::Network) at
//! construction, carries its own stroke styling, and follows a two-phase
//! contract: [`EdgeStrategy::prepare`] is a pure transformation of the edge
//! collection into an immutable render-ready snapshot, and
//! [`EdgeStrategy::render`] is a pure draw step against that snapshot.
//! Because `render` takes the snapshot by reference, calling it before
//! preparation is a type error rather than undefined output, and one
//! snapshot can be rendered any number of times onto different surfaces.

mod community;
mod od;
mod plain;
mod weighted;

pub use community::{CommunityGradient, CommunityPair, PreparedCommunities};
pub use od::{OdGradient, PreparedOd};
pub use plain::{PlainEdges, PreparedLines};
pub use weighted::{PreparedBins, WeightSource, WeightedEdges};

use crate::color::Rgba;
use crate::error::Result;
use crate::framebuffer::Framebuffer;

/// Two-phase edge rendering contract.
pub trait EdgeStrategy {
    /// Immutable render-ready snapshot produced by [`Self::prepare`].
    type Prepared;
    /// Legend-ready summary of what a render call drew.
    type Handle;

    /// Identifier of the strategy.
    fn name(&self) -> &'static str;

    /// Transform the bound network's edges into a render-ready snapshot.
    ///
    /// Performs no drawing. All input validation happens here, fail-fast,
    /// before any derived state is returned.
    fn prepare(&self) -> Result<Self::Prepared>;

    /// Draw a prepared snapshot onto a surface.
    ///
    /// Performs no data transformation and may be called repeatedly against
    /// the same snapshot.
    fn render(&self, prepared: &Self::Prepared, fb: &mut Framebuffer) -> Result<Self::Handle>;
}

/// Handle describing a uniformly colored batch of stroked lines.
///
/// Returned by strategies whose output is one or more single-color batches;
/// carries what a legend needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineBatch {
    /// Color the batch was stroked with.
    pub color: Rgba,
    /// Number of polylines stroked.
    pub strokes: usize,
}

/// Handle describing a gradient-colored batch of stroked curves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GradientBatch {
    /// Gradient color at the source end.
    pub source: Rgba,
    /// Gradient color at the target end.
    pub target: Rgba,
    /// Number of curves stroked.
    pub strokes: usize,
}
