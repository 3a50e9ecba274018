//! Earliest-ancestor search over a (parent, child) edge list.
//!
//! The input is an ordered sequence of `(parent, child)` pairs describing a
//! genealogy.  Starting from a node, every maximal chain of parent edges is
//! enumerated by exhaustive depth-first descent (edges are walked
//! child→parent), and the most distant ancestor wins; ties between chains of
//! equal length go to the numerically smallest ancestor.
//!
//! The resolver does not enforce acyclicity; the domain guarantees it
//! (nobody is their own ancestor).

/// Node identifiers in the genealogy domain.  Totally ordered for the
/// tie-break.
pub type NodeId = i64;

/// Returned when the starting node has no recorded parents, including when
/// it appears nowhere in the edge list.
pub const NO_ANCESTOR: NodeId = -1;

/// All parents of `child`, in edge-list order.
fn parents_of(edges: &[(NodeId, NodeId)], child: NodeId) -> Vec<NodeId> {
    edges
        .iter()
        .filter(|(_, c)| *c == child)
        .map(|(parent, _)| *parent)
        .collect()
}

/// Extends `path` with `node` and recurses into every parent of `node`.  A
/// node without parents terminates its chain, which is then recorded in
/// `complete_chains`.
fn enumerate_chains(
    edges: &[(NodeId, NodeId)],
    node: NodeId,
    path: &[NodeId],
    complete_chains: &mut Vec<Vec<NodeId>>,
) {
    let mut chain = path.to_vec();
    chain.push(node);

    let parents = parents_of(edges, node);
    if parents.is_empty() {
        complete_chains.push(chain);
        return;
    }
    for parent in parents {
        enumerate_chains(edges, parent, &chain, complete_chains);
    }
}

/// Returns the most distant ancestor of `starting_node`, following
/// `(parent, child)` edges backward until a node with no recorded parent is
/// reached.
///
/// When several ancestors tie for the longest chain, the numerically
/// smallest one wins.  Returns [`NO_ANCESTOR`] when `starting_node` has no
/// parents at all, which also covers nodes absent from the edge list.
pub fn earliest_ancestor(edges: &[(NodeId, NodeId)], starting_node: NodeId) -> NodeId {
    let mut complete_chains: Vec<Vec<NodeId>> = Vec::new();
    enumerate_chains(edges, starting_node, &[], &mut complete_chains);

    let mut longest = 0;
    let mut earliest = NO_ANCESTOR;
    for chain in &complete_chains {
        let Some(&last) = chain.last() else { continue };
        if chain.len() > longest || (chain.len() == longest && last < earliest) {
            longest = chain.len();
            earliest = last;
        }
    }

    // The only complete chain is the trivial one: no ancestors.
    if longest <= 1 {
        return NO_ANCESTOR;
    }
    earliest
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The genealogy from the exercise sheet:
    ///
    /// ```text
    ///    10
    ///  /
    /// 1   2   4  11
    ///  \ /   / \ /
    ///   3   5   8
    ///    \ / \   \
    ///     6   7   9
    /// ```
    fn test_ancestors() -> Vec<(NodeId, NodeId)> {
        vec![
            (1, 3),
            (2, 3),
            (3, 6),
            (5, 6),
            (5, 7),
            (4, 5),
            (4, 8),
            (8, 9),
            (11, 8),
            (10, 1),
        ]
    }

    #[test]
    fn deepest_chain_wins() {
        // 6 <- 3 <- 1 <- 10 is longer than anything through 5.
        assert_eq!(earliest_ancestor(&test_ancestors(), 6), 10);
    }

    #[test]
    fn lowest_id_breaks_ties() {
        // 9 <- 8 <- 4 and 9 <- 8 <- 11 tie at length three.
        assert_eq!(earliest_ancestor(&test_ancestors(), 9), 4);
    }

    #[test]
    fn node_without_parents_has_no_ancestor() {
        assert_eq!(earliest_ancestor(&test_ancestors(), 11), NO_ANCESTOR);
    }

    #[test]
    fn unknown_node_has_no_ancestor() {
        assert_eq!(earliest_ancestor(&test_ancestors(), 200), NO_ANCESTOR);
    }

    #[test]
    fn every_parentless_node_resolves_to_the_sentinel() {
        let edges = test_ancestors();
        for node in [2, 4, 10, 11] {
            assert_eq!(earliest_ancestor(&edges, node), NO_ANCESTOR);
        }
    }

    #[test]
    fn single_edge_genealogy() {
        assert_eq!(earliest_ancestor(&[(5, 9)], 9), 5);
        assert_eq!(earliest_ancestor(&[(5, 9)], 5), NO_ANCESTOR);
    }

    #[test]
    fn empty_edge_list() {
        assert_eq!(earliest_ancestor(&[], 1), NO_ANCESTOR);
    }

    #[test]
    fn all_chains_are_explored_not_just_the_first_parent() {
        // 7's parents in edge order are (9, ..) last, so a resolver that
        // only followed the first parent would miss the deep chain.
        let edges = vec![(2, 7), (1, 2), (9, 7), (8, 9), (6, 8)];
        assert_eq!(earliest_ancestor(&edges, 7), 6);
    }
}
