//! A mutable, single-threaded directed graph stored as a mapping from vertex
//! to its set of successors.
//!
//! Vertices carry no payload; they are identifiers satisfying [`VertexId`].
//! Edges are unique and unordered within a vertex's successor set, so the
//! order in which neighbors come back out of [`DirectedGraph::get_neighbors`]
//! is unspecified.
//!
//! Both endpoints of an edge must be inserted with
//! [`DirectedGraph::add_vertex`] before [`DirectedGraph::add_edge`] will
//! accept them; referencing a vertex the graph has never seen is a hard
//! error, not a silent insert.

use std::collections::{HashMap, HashSet};
use std::fmt::Debug;

use proptest::prelude::*;
use thiserror::Error;

use crate::{Adjacency, VertexId};

/// Hard errors raised by graph construction and lookup.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum GraphError<V: Debug> {
    /// The referenced vertex was never added to the graph.
    #[error("there is no such vertex: {0:?}")]
    UnknownVertex(V),
    /// The vertex is already present.  Re-adding is rejected rather than
    /// silently clearing the existing successor set.
    #[error("vertex already exists: {0:?}")]
    DuplicateVertex(V),
}

#[derive(Clone, PartialEq, Eq, Default)]
pub struct DirectedGraph<V: VertexId> {
    vertices: HashMap<V, HashSet<V>>,
}

impl<V: VertexId> Debug for DirectedGraph<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let edges: Vec<(V, V)> = self.iter_edges().collect();
        write!(
            f,
            "DirectedGraph {{ vertices: {}, edges: {:?} }}",
            self.vertex_count(),
            edges
        )
    }
}

impl<V: VertexId> DirectedGraph<V> {
    /// Constructs an empty graph with no vertices and no edges.
    pub fn new() -> Self {
        Self {
            vertices: HashMap::new(),
        }
    }

    /// Adds `vertex` with an empty successor set.
    ///
    /// Re-adding an existing vertex fails with
    /// [`GraphError::DuplicateVertex`] and leaves its edges intact.
    pub fn add_vertex(&mut self, vertex: V) -> Result<(), GraphError<V>> {
        if self.vertices.contains_key(&vertex) {
            return Err(GraphError::DuplicateVertex(vertex));
        }
        self.vertices.insert(vertex, HashSet::new());
        Ok(())
    }

    /// Adds a directed edge from `v1` to `v2`.  Inserting an edge that is
    /// already present is a no-op.
    pub fn add_edge(&mut self, v1: V, v2: V) -> Result<(), GraphError<V>> {
        if !self.vertices.contains_key(&v2) {
            return Err(GraphError::UnknownVertex(v2));
        }
        match self.vertices.get_mut(&v1) {
            Some(successors) => {
                successors.insert(v2);
                Ok(())
            }
            None => Err(GraphError::UnknownVertex(v1)),
        }
    }

    /// Returns the successor set of `vertex`.
    pub fn get_neighbors(&self, vertex: V) -> Result<&HashSet<V>, GraphError<V>> {
        self.vertices
            .get(&vertex)
            .ok_or(GraphError::UnknownVertex(vertex))
    }

    pub fn contains_vertex(&self, vertex: V) -> bool {
        self.vertices.contains_key(&vertex)
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Iterates over all vertices in unspecified order.
    pub fn iter_vertices(&self) -> impl Iterator<Item = V> + '_ {
        self.vertices.keys().copied()
    }

    /// Iterates over all edges as `(from, to)` pairs in unspecified order.
    pub fn iter_edges(&self) -> impl Iterator<Item = (V, V)> + '_ {
        self.vertices
            .iter()
            .flat_map(|(u, successors)| successors.iter().map(move |v| (*u, *v)))
    }

    pub fn edge_count(&self) -> usize {
        self.vertices.values().map(HashSet::len).sum()
    }
}

impl<V: VertexId> Adjacency for DirectedGraph<V> {
    type Id = V;

    fn extend_with_neighbors(
        &self,
        u: V,
        neighbors: &mut Vec<V>,
    ) -> Result<(), GraphError<V>> {
        neighbors.extend(self.get_neighbors(u)?.iter().copied());
        Ok(())
    }
}

/// Generates an arbitrary [`DirectedGraph`] with up to `max_vertex_count`
/// vertices numbered from 0 and a random edge set, possibly including
/// self-loops and cycles.
pub fn arb_digraph(max_vertex_count: u32) -> BoxedStrategy<DirectedGraph<u32>> {
    assert!(max_vertex_count >= 2);
    (1..max_vertex_count)
        .prop_flat_map(|vertex_count| {
            let max_edges = (vertex_count as usize) * 3;
            proptest::collection::vec((0..vertex_count, 0..vertex_count), 0..=max_edges)
                .prop_map(move |pairs| {
                    let mut graph = DirectedGraph::new();
                    for vertex in 0..vertex_count {
                        graph.add_vertex(vertex).unwrap();
                    }
                    for (u, v) in pairs {
                        graph.add_edge(u, v).unwrap();
                    }
                    graph
                })
        })
        .boxed()
}
