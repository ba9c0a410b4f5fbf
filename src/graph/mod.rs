//! An in-memory undirected graph with weighted adjacency lists.
//!
//! [`AdjacencyGraph`] owns the storage; algorithms are generic over the
//! [`Adjacencies`] trait, which exposes the unweighted view they traverse.

mod parser;
pub use parser::ParseError;

use thiserror::Error;

/// Errors raised while constructing a graph from an edge description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GraphError {
    /// An edge references a vertex outside `[0, num_nodes)`.
    #[error("vertex {vertex} out of bounds for a graph with {num_nodes} nodes")]
    VertexOutOfBounds { vertex: usize, num_nodes: usize },
}

/// Read-only access to the adjacency structure of a graph.
///
/// Visits and searches are generic over this trait rather than over
/// [`AdjacencyGraph`] so they can run on any vertex-indexed adjacency
/// representation. It is implemented for references, so borrowed graphs flow
/// through generic entry points unchanged.
pub trait Adjacencies {
    /// Returns the number of vertices.
    fn num_nodes(&self) -> usize;

    /// Returns the successors of `node` in stored order.
    ///
    /// # Panics
    /// Panics if `node` is not a vertex of the graph.
    fn successors(&self, node: usize) -> impl Iterator<Item = usize> + '_;
}

impl<G: Adjacencies> Adjacencies for &G {
    fn num_nodes(&self) -> usize {
        (**self).num_nodes()
    }

    fn successors(&self, node: usize) -> impl Iterator<Item = usize> + '_ {
        (**self).successors(node)
    }
}

/// An undirected graph with per-vertex `(neighbor, weight)` lists kept in
/// insertion order, immutable once constructed.
///
/// Adding edge `(u, v, w)` during construction records `(v, w)` in the list
/// of `u` and `(u, w)` in the list of `v`, so the two directions always carry
/// the same weight. Weights are stored for the caller; no algorithm in this
/// crate reads them. Self-loops and parallel edges are not rejected.
#[derive(Debug, Clone)]
pub struct AdjacencyGraph {
    succ: Vec<Vec<(usize, i64)>>,
    num_edges: usize,
}

impl AdjacencyGraph {
    fn new(num_nodes: usize) -> Self {
        Self {
            succ: vec![Vec::new(); num_nodes],
            num_edges: 0,
        }
    }

    fn add_edge(&mut self, u: usize, v: usize, w: i64) -> Result<(), GraphError> {
        let num_nodes = self.succ.len();
        for vertex in [u, v] {
            if vertex >= num_nodes {
                return Err(GraphError::VertexOutOfBounds { vertex, num_nodes });
            }
        }
        self.succ[u].push((v, w));
        self.succ[v].push((u, w));
        self.num_edges += 1;
        Ok(())
    }

    /// Builds a graph with `num_nodes` vertices from `(u, v, weight)` triples.
    ///
    /// Vertices that appear in no triple keep an empty neighbor list.
    pub fn from_edges(
        num_nodes: usize,
        edges: impl IntoIterator<Item = (usize, usize, i64)>,
    ) -> Result<Self, GraphError> {
        let mut graph = Self::new(num_nodes);
        for (u, v, w) in edges {
            graph.add_edge(u, v, w)?;
        }
        Ok(graph)
    }

    /// Returns the number of vertices.
    pub fn num_nodes(&self) -> usize {
        self.succ.len()
    }

    /// Returns the number of undirected edges added at construction.
    pub fn num_edges(&self) -> usize {
        self.num_edges
    }

    /// Returns the `(neighbor, weight)` list of `node` in insertion order.
    ///
    /// # Panics
    /// Panics if `node` is not a vertex of the graph.
    pub fn neighbors(&self, node: usize) -> &[(usize, i64)] {
        &self.succ[node]
    }
}

impl Adjacencies for AdjacencyGraph {
    fn num_nodes(&self) -> usize {
        self.succ.len()
    }

    fn successors(&self, node: usize) -> impl Iterator<Item = usize> + '_ {
        self.succ[node].iter().map(|&(succ, _)| succ)
    }
}
