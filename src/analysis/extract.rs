use crate::expr::ExprGraph;
use crate::store::NodeId;
use std::collections::HashSet;

/// The ancestor closure of one node: every node reachable through operand
/// back-references, plus the operand edges implied by the walk.
#[derive(Debug, Clone, Default)]
pub struct AncestorSet {
    /// Reachable nodes in discovery order, each exactly once.
    pub nodes: Vec<NodeId>,
    /// `(operand, node)` pairs, one entry per operand slot of every
    /// reachable node. A node used twice as an operand appears twice.
    pub edges: Vec<(NodeId, NodeId)>,
}

/// Walks backward from `root` and collects the full ancestor DAG.
///
/// Membership is keyed on node identity, never on value, so structurally
/// identical nodes stay distinct and diamonds are visited once. The
/// visited-set check also terminates the walk on any input, even if the
/// store's append-only invariant were somehow broken.
pub fn ancestors(graph: &ExprGraph, root: NodeId) -> AncestorSet {
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut out = AncestorSet::default();
    let mut stack = vec![root];

    while let Some(node) = stack.pop() {
        if !visited.insert(node) {
            continue;
        }
        out.nodes.push(node);
        for &operand in graph.operands(node) {
            out.edges.push((operand, node));
            stack.push(operand);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leaf_has_no_ancestors_and_no_edges() {
        let mut g = ExprGraph::new();
        let a = g.leaf(1.0);

        let set = ancestors(&g, a);
        assert_eq!(set.nodes, vec![a]);
        assert!(set.edges.is_empty());
    }

    #[test]
    fn test_diamond_operand_is_visited_once_but_contributes_two_edges() {
        let mut g = ExprGraph::new();
        let a = g.leaf(1.0);
        let b = g.add(a, a).unwrap();

        let set = ancestors(&g, b);
        assert_eq!(set.nodes.len(), 2);
        assert_eq!(set.edges, vec![(a, b), (a, b)]);
    }

    #[test]
    fn test_shared_ancestor_reached_by_two_paths_is_deduplicated() {
        // a feeds both b and c, which feed d.
        let mut g = ExprGraph::new();
        let a = g.leaf(2.0);
        let b = g.add(a, a).unwrap();
        let c = g.mul(a, a).unwrap();
        let d = g.add(b, c).unwrap();

        let set = ancestors(&g, d);
        assert_eq!(set.nodes.len(), 4);
        assert_eq!(set.nodes.iter().filter(|&&n| n == a).count(), 1);
        // d contributes 2 edges, b and c contribute 2 each.
        assert_eq!(set.edges.len(), 6);
    }

    #[test]
    fn test_collects_exactly_the_reachable_set() {
        let mut g = ExprGraph::new();
        let a = g.leaf(1.0);
        let b = g.leaf(2.0);
        let c = g.add(a, b).unwrap();
        // A second, disconnected expression in the same graph.
        let x = g.leaf(9.0);
        let y = g.mul(x, x).unwrap();

        let set = ancestors(&g, c);
        let reachable: HashSet<NodeId> = set.nodes.iter().copied().collect();
        assert_eq!(reachable, [a, b, c].into_iter().collect());
        assert!(!reachable.contains(&x));
        assert!(!reachable.contains(&y));
    }

    #[test]
    fn test_edges_point_from_operand_to_consumer() {
        let mut g = ExprGraph::new();
        let a = g.leaf(1.0);
        let b = g.leaf(2.0);
        let c = g.sub(a, b).unwrap();

        let set = ancestors(&g, c);
        assert!(set.edges.contains(&(a, c)));
        assert!(set.edges.contains(&(b, c)));
        assert_eq!(set.edges.len(), 2);
    }
}
