//! # Arista-Viz
//!
//! Edge rendering strategies for network visualizations on a 2D pixel canvas.
//!
//! Arista-viz draws the edges of a network with several visual encodings:
//! a uniform style, weight-based color binning, community-membership
//! gradients, and origin/destination gradients. Each encoding is an
//! [`EdgeStrategy`](strategy::EdgeStrategy) following a two-phase contract:
//! `prepare()` turns the network's edges into an immutable render-ready
//! snapshot, and `render()` strokes that snapshot onto a
//! [`Framebuffer`](framebuffer::Framebuffer), returning legend-ready batch
//! handles.
//!
//! ## Quick Start
//!
//! ```rust
//! use arista_viz::prelude::*;
//!
//! # fn main() -> arista_viz::Result<()> {
//! // A small triangle network
//! let mut network = Network::new(vec![
//!     Point::new(20.0, 20.0),
//!     Point::new(180.0, 20.0),
//!     Point::new(100.0, 140.0),
//! ]);
//! network.add_edge(0, 1)?;
//! network.add_edge(1, 2)?;
//! network.add_edge(2, 0)?;
//!
//! // Bin edges into two weight tiers and draw them
//! let strategy = WeightedEdges::new(
//!     &network,
//!     WeightSource::Values(vec![1.0, 2.0, 3.0]),
//!     2,
//! );
//! let prepared = strategy.prepare()?;
//!
//! let mut fb = Framebuffer::new(200, 160)?;
//! fb.clear(Rgba::WHITE);
//! let batches = strategy.render(&prepared, &mut fb)?;
//! assert_eq!(batches.len(), 2);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in graphics/visualization code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]

// ============================================================================
// Core Modules
// ============================================================================

/// Color types and parsing.
pub mod color;

/// Core framebuffer for pixel rendering.
pub mod framebuffer;

/// Geometric primitives (points, edge geometry).
pub mod geometry;

/// Network data model (nodes, edges, edge properties).
pub mod network;

/// Color palettes for edge encodings.
pub mod palette;

// ============================================================================
// Rendering Modules
// ============================================================================

/// Gradient-colored curve batches.
pub mod curves;

/// Rasterization of edge geometry.
pub mod render;

/// Edge rendering strategies.
pub mod strategy;

/// Output encoders (PNG).
pub mod output;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for arista-viz operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and traits for convenient imports.
///
/// ```rust,ignore
/// use arista_viz::prelude::*;
/// ```
pub mod prelude {
    pub use crate::color::Rgba;
    pub use crate::curves::ColoredCurveCollection;
    pub use crate::error::{Error, Result};
    pub use crate::framebuffer::Framebuffer;
    pub use crate::geometry::{EdgeGeometry, Point};
    pub use crate::network::{Edge, Network};
    pub use crate::palette::{dark_ramp, Palette};
    pub use crate::render::{LinePattern, LineStyle};
    pub use crate::strategy::{
        CommunityGradient, EdgeStrategy, GradientBatch, LineBatch, OdGradient, PlainEdges,
        WeightSource, WeightedEdges,
    };
}

// ============================================================================
// Tests
// ============================================================================
