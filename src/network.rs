//! Network data model for edge rendering.
//!
//! A [`Network`] owns node positions, directed edges with ingestion-time
//! geometry, and named scalar edge properties. It exposes exactly the surface
//! the edge strategies consume: an edge slice, endpoint coordinates, and
//! property lookup with an on-demand betweenness fallback.

use std::collections::{HashMap, VecDeque};

use crate::error::{Error, Result};
use crate::geometry::{EdgeGeometry, Point};

/// Reserved property name whose absence triggers the centrality fallback.
pub const BETWEENNESS: &str = "betweenness";

/// A directed edge identified by an ordered pair of node indices.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    /// Index of the source node.
    pub source: usize,
    /// Index of the target node.
    pub target: usize,
    /// Drawable shape, fixed at ingestion time.
    pub geometry: EdgeGeometry,
}

/// A network of positioned nodes and directed edges.
#[derive(Debug, Clone, Default)]
pub struct Network {
    positions: Vec<Point>,
    edges: Vec<Edge>,
    edge_properties: HashMap<String, Vec<f32>>,
}

impl Network {
    /// Create a network from node positions.
    #[must_use]
    pub fn new(positions: Vec<Point>) -> Self {
        Self {
            positions,
            edges: Vec::new(),
            edge_properties: HashMap::new(),
        }
    }

    /// Number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// The edge collection, in insertion order.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Position of a node, if the index is in range.
    #[must_use]
    pub fn position(&self, node: usize) -> Option<Point> {
        self.positions.get(node).copied()
    }

    fn check_node(&self, index: usize) -> Result<Point> {
        self.position(index).ok_or(Error::NodeIndex {
            index,
            nodes: self.positions.len(),
        })
    }

    /// Add a straight edge between two nodes.
    ///
    /// The segment geometry is taken from the node positions at insertion
    /// time.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NodeIndex`] if either endpoint is out of range.
    pub fn add_edge(&mut self, source: usize, target: usize) -> Result<()> {
        let src = self.check_node(source)?;
        let dst = self.check_node(target)?;

        self.edges.push(Edge {
            source,
            target,
            geometry: EdgeGeometry::Segment {
                source: src,
                target: dst,
            },
        });
        Ok(())
    }

    /// Add an edge with an explicit routed path.
    ///
    /// Two-point paths are normalized to segment geometry; longer paths are
    /// stored as curves.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NodeIndex`] for out-of-range endpoints, or an error
    /// from [`EdgeGeometry::from_points`] for paths that cannot be drawn.
    pub fn add_curved_edge(
        &mut self,
        source: usize,
        target: usize,
        path: Vec<Point>,
    ) -> Result<()> {
        self.check_node(source)?;
        self.check_node(target)?;

        self.edges.push(Edge {
            source,
            target,
            geometry: EdgeGeometry::from_points(path)?,
        });
        Ok(())
    }

    /// Attach a named scalar property aligned 1:1 with the edge list.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PropertyLength`] when the value array does not match
    /// the edge count.
    pub fn set_edge_property(&mut self, name: impl Into<String>, values: Vec<f32>) -> Result<()> {
        let name = name.into();
        if values.len() != self.edges.len() {
            return Err(Error::PropertyLength {
                name,
                expected: self.edges.len(),
                got: values.len(),
            });
        }
        self.edge_properties.insert(name, values);
        Ok(())
    }

    /// Look up a named edge property.
    #[must_use]
    pub fn edge_property(&self, name: &str) -> Option<&[f32]> {
        self.edge_properties.get(name).map(Vec::as_slice)
    }

    /// Edge betweenness centrality over the unweighted directed graph.
    ///
    /// Brandes' accumulation: one BFS per source node, with dependencies
    /// pushed back along shortest-path predecessor edges. Parallel edges are
    /// counted as distinct shortest paths. The result is aligned 1:1 with the
    /// edge list.
    #[must_use]
    pub fn estimate_betweenness(&self) -> Vec<f32> {
        let n = self.positions.len();
        let mut centrality = vec![0.0_f32; self.edges.len()];

        // Adjacency with edge indices so parallel edges stay distinguishable.
        let mut adjacency: Vec<Vec<(usize, usize)>> = vec![Vec::new(); n];
        for (idx, edge) in self.edges.iter().enumerate() {
            adjacency[edge.source].push((edge.target, idx));
        }

        let mut sigma = vec![0.0_f64; n];
        let mut dist = vec![-1_i64; n];
        let mut delta = vec![0.0_f64; n];
        // Predecessor entries: (predecessor node, edge index) per node.
        let mut preds: Vec<Vec<(usize, usize)>> = vec![Vec::new(); n];

        for s in 0..n {
            sigma.fill(0.0);
            dist.fill(-1);
            delta.fill(0.0);
            for p in &mut preds {
                p.clear();
            }

            sigma[s] = 1.0;
            dist[s] = 0;

            let mut order = Vec::with_capacity(n);
            let mut queue = VecDeque::new();
            queue.push_back(s);

            while let Some(v) = queue.pop_front() {
                order.push(v);
                for &(w, edge_idx) in &adjacency[v] {
                    if dist[w] < 0 {
                        dist[w] = dist[v] + 1;
                        queue.push_back(w);
                    }
                    if dist[w] == dist[v] + 1 {
                        sigma[w] += sigma[v];
                        preds[w].push((v, edge_idx));
                    }
                }
            }

            for &w in order.iter().rev() {
                for &(v, edge_idx) in &preds[w] {
                    let c = sigma[v] / sigma[w] * (1.0 + delta[w]);
                    centrality[edge_idx] += c as f32;
                    delta[v] += c;
                }
            }
        }

        centrality
    }
}
