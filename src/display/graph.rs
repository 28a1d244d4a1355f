//! Materializes the ancestor DAG of a node into a renderable graph.

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::Direction;
use std::collections::HashMap;

use crate::analysis::extract;
use crate::expr::ExprGraph;
use crate::store::{NodeId, Operator};

/// Shape metadata consumed by the drawing backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VertexShape {
    Box,
    Circle,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Vertex {
    /// One expression node. Rendered as a box.
    Value { node: NodeId, value: f64, name: String },
    /// One applied operator, interposed between the operand vertices and
    /// the vertex of the node it produced. Rendered as a circle.
    Operator { node: NodeId, op: Operator },
}

impl Vertex {
    pub fn shape(&self) -> VertexShape {
        match self {
            Vertex::Value { .. } => VertexShape::Box,
            Vertex::Operator { .. } => VertexShape::Circle,
        }
    }

    pub fn label(&self) -> String {
        match self {
            Vertex::Value { value, name, .. } => {
                if name.is_empty() {
                    format!("{:.3}", value)
                } else {
                    format!("{} [{:.3}]", name, value)
                }
            }
            Vertex::Operator { op, .. } => op.symbol().to_string(),
        }
    }
}

/// The extracted graph handed to the drawing backend: value-vertices and
/// operator-vertices joined by "flows into" edges.
#[derive(Debug, Clone)]
pub struct RenderGraph {
    graph: DiGraph<Vertex, ()>,
    value_indices: HashMap<NodeId, NodeIndex>,
    operator_indices: HashMap<NodeId, NodeIndex>,
}

impl RenderGraph {
    /// Recovers the full ancestor DAG of `root` and materializes it.
    ///
    /// Each reachable node becomes one value-vertex. Each reachable formula
    /// node additionally becomes one operator-vertex receiving an edge per
    /// operand slot and emitting exactly one edge into its value-vertex.
    /// Never fails; a leaf root yields a single-vertex, zero-edge graph.
    pub fn extract(expr: &ExprGraph, root: NodeId) -> Self {
        let set = extract::ancestors(expr, root);

        let mut graph = DiGraph::new();
        let mut value_indices = HashMap::with_capacity(set.nodes.len());
        let mut operator_indices = HashMap::new();

        for &node in &set.nodes {
            let vertex = Vertex::Value {
                node,
                value: expr.value(node),
                name: expr.name(node).to_string(),
            };
            value_indices.insert(node, graph.add_node(vertex));
        }

        for &(operand, dest) in &set.edges {
            let op = match expr.operator(dest) {
                Some(op) => op,
                // Edges only originate from operand slots, and only
                // formula nodes have operand slots.
                None => continue,
            };
            let op_idx = match operator_indices.get(&dest) {
                Some(&idx) => idx,
                None => {
                    let idx = graph.add_node(Vertex::Operator { node: dest, op });
                    operator_indices.insert(dest, idx);
                    graph.add_edge(idx, value_indices[&dest], ());
                    idx
                }
            };
            graph.add_edge(value_indices[&operand], op_idx, ());
        }

        Self { graph, value_indices, operator_indices }
    }

    pub fn graph(&self) -> &DiGraph<Vertex, ()> {
        &self.graph
    }

    pub fn vertex_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn value_vertex_count(&self) -> usize {
        self.value_indices.len()
    }

    pub fn operator_vertex_count(&self) -> usize {
        self.operator_indices.len()
    }

    /// The value-vertex of `node`, if `node` was reachable from the root.
    pub fn value_index(&self, node: NodeId) -> Option<NodeIndex> {
        self.value_indices.get(&node).copied()
    }

    /// The operator-vertex of the operation that produced `node`.
    pub fn operator_index(&self, node: NodeId) -> Option<NodeIndex> {
        self.operator_indices.get(&node).copied()
    }

    pub fn in_degree(&self, idx: NodeIndex) -> usize {
        self.graph.edges_directed(idx, Direction::Incoming).count()
    }

    pub fn out_degree(&self, idx: NodeIndex) -> usize {
        self.graph.edges_directed(idx, Direction::Outgoing).count()
    }
}
