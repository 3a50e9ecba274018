//! Directed graph traversal, social network pathfinding and ancestry search.
//!
//! Three related problems over one shared abstraction, a mapping from a node
//! to its out-neighbors:
//!
//! 1. [`DirectedGraph`] plus the operations in [`traversal`]: breadth- and
//!    depth-first full traversal (iterative and recursive) and breadth-/
//!    depth-first path search.
//! 1. [`SocialNetwork`]: randomly populated bidirectional friendship graphs
//!    and single-source shortest paths to every reachable user.
//! 1. [`earliest_ancestor`]: the most distant ancestor of a node in a
//!    (parent, child) edge list, ties broken by lowest ID.
//!
//! Traversal is generic over the [`Adjacency`] seam, so anything that can
//! enumerate the out-neighbors of a vertex can be walked, not just
//! [`DirectedGraph`].
//!
//! # Entry points
//!
//! See [`DirectedGraph::new`], [`SocialNetwork::new`], or
//! [`earliest_ancestor`].

use std::fmt::Debug;
use std::hash::Hash;

pub mod ancestor;
pub mod digraph;
pub mod frontier;
pub mod social;
pub mod traversal;

/// Bounds every vertex identifier has to satisfy.  Blanket-implemented;
/// `u32`, `i64`, `char` etc. all qualify.
pub trait VertexId: Copy + Eq + Hash + Debug {}

impl<T: Copy + Eq + Hash + Debug> VertexId for T {}

/// The seam between graph storage and the traversal operations: anything
/// that can enumerate the out-neighbors of a vertex.
///
/// Neighbor order is unspecified; callers must not depend on the order in
/// which siblings are visited.
pub trait Adjacency {
    type Id: VertexId;

    /// Appends the out-neighbors of `u` to `neighbors`.  Fails with
    /// [`GraphError::UnknownVertex`] when `u` is not a vertex.
    fn extend_with_neighbors(
        &self,
        u: Self::Id,
        neighbors: &mut Vec<Self::Id>,
    ) -> Result<(), GraphError<Self::Id>>;
}

pub use ancestor::{earliest_ancestor, NodeId, NO_ANCESTOR};
pub use digraph::{arb_digraph, DirectedGraph, GraphError};
pub use social::{SocialNetwork, User, UserId};
pub use traversal::{
    find_path_dfs, find_path_dfs_recursive, iter_vertices_bfs, iter_vertices_dfs,
    shortest_path_bfs, traverse_dfs_recursive,
};
