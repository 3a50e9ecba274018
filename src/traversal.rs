//! Traversal and path search over anything implementing [`Adjacency`].
//!
//! All operations share the visit-once contract: a vertex is processed (and
//! its neighbors expanded) only the first time it comes off the frontier,
//! even if it was pushed several times via different paths; later duplicates
//! are silently discarded when they surface.
//!
//! [`GraphError::UnknownVertex`] from a neighbor lookup aborts the operation
//! immediately; no partial result is returned.  The lazy iterators yield the
//! error once and then fuse.

use std::collections::HashSet;

use crate::frontier::{Queue, Stack};
use crate::{Adjacency, GraphError};

/// See [`iter_vertices_bfs`].
pub struct BfsVerticesIterator<'a, G: Adjacency> {
    graph: &'a G,
    visited: HashSet<G::Id>,
    to_visit: Queue<G::Id>,
    neighbors: Vec<G::Id>,
    done: bool,
}

impl<'a, G: Adjacency> Iterator for BfsVerticesIterator<'a, G> {
    type Item = Result<G::Id, GraphError<G::Id>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        while let Some(u) = self.to_visit.dequeue() {
            if self.visited.contains(&u) {
                continue;
            }
            self.neighbors.clear();
            if let Err(e) = self.graph.extend_with_neighbors(u, &mut self.neighbors) {
                self.done = true;
                return Some(Err(e));
            }
            self.visited.insert(u);
            self.to_visit.extend(self.neighbors.drain(..));
            return Some(Ok(u));
        }
        None
    }
}

/// Visits every vertex reachable from `start` in breadth-first (FIFO) order.
///
/// The iterator is lazy and non-restartable: one pass per call.  Sibling
/// visitation order is unspecified.
pub fn iter_vertices_bfs<G: Adjacency>(graph: &G, start: G::Id) -> BfsVerticesIterator<'_, G> {
    let mut to_visit = Queue::new();
    to_visit.enqueue(start);
    BfsVerticesIterator {
        graph,
        visited: HashSet::new(),
        to_visit,
        neighbors: Vec::new(),
        done: false,
    }
}

/// See [`iter_vertices_dfs`].
pub struct DfsVerticesIterator<'a, G: Adjacency> {
    graph: &'a G,
    visited: HashSet<G::Id>,
    to_visit: Stack<G::Id>,
    neighbors: Vec<G::Id>,
    done: bool,
}

impl<'a, G: Adjacency> Iterator for DfsVerticesIterator<'a, G> {
    type Item = Result<G::Id, GraphError<G::Id>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        while let Some(u) = self.to_visit.pop() {
            if self.visited.contains(&u) {
                continue;
            }
            self.neighbors.clear();
            if let Err(e) = self.graph.extend_with_neighbors(u, &mut self.neighbors) {
                self.done = true;
                return Some(Err(e));
            }
            self.visited.insert(u);
            self.to_visit.extend(self.neighbors.drain(..));
            return Some(Ok(u));
        }
        None
    }
}

/// Visits every vertex reachable from `start` in depth-first order using an
/// explicit stack.  Same contract as [`iter_vertices_bfs`] otherwise.
pub fn iter_vertices_dfs<G: Adjacency>(graph: &G, start: G::Id) -> DfsVerticesIterator<'_, G> {
    let mut to_visit = Stack::new();
    to_visit.push(start);
    DfsVerticesIterator {
        graph,
        visited: HashSet::new(),
        to_visit,
        neighbors: Vec::new(),
        done: false,
    }
}

/// Visits every vertex reachable from `start` in depth-first order via
/// recursive descent, returning the emission order.
///
/// Recursion depth equals the longest simple path explored; graphs with very
/// long chains can exhaust the call stack.  Known limitation; use
/// [`iter_vertices_dfs`] for such graphs.
pub fn traverse_dfs_recursive<G: Adjacency>(
    graph: &G,
    start: G::Id,
) -> Result<Vec<G::Id>, GraphError<G::Id>> {
    fn go<G: Adjacency>(
        graph: &G,
        u: G::Id,
        visited: &mut HashSet<G::Id>,
        order: &mut Vec<G::Id>,
    ) -> Result<(), GraphError<G::Id>> {
        if visited.contains(&u) {
            return Ok(());
        }
        let mut neighbors = Vec::new();
        graph.extend_with_neighbors(u, &mut neighbors)?;
        visited.insert(u);
        order.push(u);
        for v in neighbors {
            go(graph, v, visited, order)?;
        }
        Ok(())
    }

    let mut visited = HashSet::new();
    let mut order = Vec::new();
    go(graph, start, &mut visited, &mut order)?;
    Ok(order)
}

/// Returns the shortest path (fewest edges) from `start` to `goal` as the
/// ordered sequence of vertices walked, or `None` when `goal` is
/// unreachable.
///
/// The frontier holds whole paths rather than bare vertices; every expansion
/// clones the accumulated path before appending, so sibling branches never
/// share a buffer.  All edges cost the same, so the first path to reach
/// `goal` in FIFO order is shortest by construction.
pub fn shortest_path_bfs<G: Adjacency>(
    graph: &G,
    start: G::Id,
    goal: G::Id,
) -> Result<Option<Vec<G::Id>>, GraphError<G::Id>> {
    let mut visited: HashSet<G::Id> = HashSet::new();
    let mut neighbors: Vec<G::Id> = Vec::new();
    let mut paths: Queue<Vec<G::Id>> = Queue::new();
    paths.enqueue(vec![start]);

    while let Some(path) = paths.dequeue() {
        let u = *path.last().expect("paths on the frontier are never empty");
        if visited.contains(&u) {
            continue;
        }
        neighbors.clear();
        graph.extend_with_neighbors(u, &mut neighbors)?;
        visited.insert(u);
        if u == goal {
            return Ok(Some(path));
        }
        for &v in &neighbors {
            let mut extended = path.clone();
            extended.push(v);
            paths.enqueue(extended);
        }
    }
    Ok(None)
}

/// Returns *a* path (not necessarily shortest) from `start` to `goal`, found
/// by LIFO expansion, or `None` when `goal` is unreachable.
pub fn find_path_dfs<G: Adjacency>(
    graph: &G,
    start: G::Id,
    goal: G::Id,
) -> Result<Option<Vec<G::Id>>, GraphError<G::Id>> {
    let mut visited: HashSet<G::Id> = HashSet::new();
    let mut neighbors: Vec<G::Id> = Vec::new();
    let mut paths: Stack<Vec<G::Id>> = Stack::new();
    paths.push(vec![start]);

    while let Some(path) = paths.pop() {
        let u = *path.last().expect("paths on the frontier are never empty");
        if visited.contains(&u) {
            continue;
        }
        neighbors.clear();
        graph.extend_with_neighbors(u, &mut neighbors)?;
        visited.insert(u);
        if u == goal {
            return Ok(Some(path));
        }
        for &v in &neighbors {
            let mut extended = path.clone();
            extended.push(v);
            paths.push(extended);
        }
    }
    Ok(None)
}

/// Recursive variant of [`find_path_dfs`].
///
/// Short-circuits on the first successful branch: once a recursive call into
/// a neighbor yields a path, remaining siblings are not explored.  Recursion
/// depth equals path length, with the same stack caveat as
/// [`traverse_dfs_recursive`].
pub fn find_path_dfs_recursive<G: Adjacency>(
    graph: &G,
    start: G::Id,
    goal: G::Id,
) -> Result<Option<Vec<G::Id>>, GraphError<G::Id>> {
    fn go<G: Adjacency>(
        graph: &G,
        u: G::Id,
        goal: G::Id,
        visited: &mut HashSet<G::Id>,
        path: &[G::Id],
    ) -> Result<Option<Vec<G::Id>>, GraphError<G::Id>> {
        if visited.contains(&u) {
            return Ok(None);
        }
        let mut neighbors = Vec::new();
        graph.extend_with_neighbors(u, &mut neighbors)?;
        visited.insert(u);

        let mut extended = path.to_vec();
        extended.push(u);
        if u == goal {
            return Ok(Some(extended));
        }
        for v in neighbors {
            if let Some(found) = go(graph, v, goal, visited, &extended)? {
                return Ok(Some(found));
            }
        }
        Ok(None)
    }

    let mut visited = HashSet::new();
    go(graph, start, goal, &mut visited, &[])
}
