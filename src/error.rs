//! Error types for arista-viz operations.

use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in arista-viz operations.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error (file operations, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// PNG encoding error.
    #[error("PNG encoding error: {0}")]
    PngEncoding(#[from] png::EncodingError),

    /// Invalid dimensions for a framebuffer.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// Color parsing error.
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    /// An edge references a node index outside the network.
    #[error("Node index {index} out of range: network has {nodes} nodes")]
    NodeIndex {
        /// Offending node index.
        index: usize,
        /// Number of nodes in the network.
        nodes: usize,
    },

    /// Preparing a strategy against a network with no edges.
    #[error("Network has no edges")]
    EmptyNetwork,

    /// Named weight property absent and has no fallback computation.
    #[error("weights must be a valid edge property: no property named {0:?}")]
    UnknownEdgeProperty(String),

    /// Explicit weight array not aligned 1:1 with the edge list.
    #[error("weights must align with edges: expected {expected} values, got {got}")]
    WeightsLength {
        /// Edge count of the network.
        expected: usize,
        /// Length of the supplied weight array.
        got: usize,
    },

    /// Edge property array not aligned 1:1 with the edge list.
    #[error("edge property {name:?} must align with edges: expected {expected} values, got {got}")]
    PropertyLength {
        /// Property name.
        name: String,
        /// Edge count of the network.
        expected: usize,
        /// Length of the supplied value array.
        got: usize,
    },

    /// Community label array not aligned 1:1 with the node list.
    #[error("communities must align with nodes: expected {expected} labels, got {got}")]
    CommunityLength {
        /// Node count of the network.
        expected: usize,
        /// Length of the supplied label array.
        got: usize,
    },

    /// Weight bin count must be positive.
    #[error("bin count must be positive, got {0}")]
    InvalidBinCount(usize),

    /// Interpolation sample count must be at least two.
    #[error("sample count must be at least 2, got {0}")]
    InvalidSampleCount(usize),
}
