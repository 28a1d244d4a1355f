//! The public construction facade over the node store.

use serde::{Serialize, Deserialize};
use smallvec::SmallVec;

use crate::numeric::{self, NumericError};
use crate::store::{Exponent, NodeId, NodeKind, NodeMetadata, Operator, Registry};

/// An expression DAG under construction.
///
/// Every arithmetic call computes its value eagerly, appends one immutable
/// node recording the operator and operand back-references, and returns the
/// new node's id. Ids are only meaningful within the graph that minted them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExprGraph {
    pub(crate) store: Registry,
}

impl ExprGraph {
    pub fn new() -> Self { Self::default() }

    /// Creates an input node with no ancestors.
    pub fn leaf(&mut self, value: f64) -> NodeId {
        self.store.add_node(NodeKind::Leaf, value, &[], NodeMetadata::default())
    }

    /// Creates a named input node. The name only affects trace and DOT
    /// labels, never identity.
    pub fn leaf_named(&mut self, value: f64, name: &str) -> NodeId {
        self.store.add_node(NodeKind::Leaf, value, &[], NodeMetadata::named(name))
    }

    pub fn add(&mut self, lhs: NodeId, rhs: NodeId) -> Result<NodeId, NumericError> {
        self.binary(Operator::Add, lhs, rhs)
    }

    pub fn sub(&mut self, lhs: NodeId, rhs: NodeId) -> Result<NodeId, NumericError> {
        self.binary(Operator::Subtract, lhs, rhs)
    }

    pub fn mul(&mut self, lhs: NodeId, rhs: NodeId) -> Result<NodeId, NumericError> {
        self.binary(Operator::Multiply, lhs, rhs)
    }

    pub fn div(&mut self, lhs: NodeId, rhs: NodeId) -> Result<NodeId, NumericError> {
        self.binary(Operator::Divide, lhs, rhs)
    }

    /// Raises `base` to `exponent`.
    ///
    /// A node exponent becomes a second operand of the result; a scalar
    /// exponent is folded into the value and leaves no trace in the graph.
    pub fn pow(&mut self, base: NodeId, exponent: impl Into<Exponent>) -> Result<NodeId, NumericError> {
        let mut parents: SmallVec<[NodeId; 2]> = SmallVec::new();
        parents.push(base);
        let exp_value = match exponent.into() {
            Exponent::Node(e) => {
                parents.push(e);
                self.store.get_value(e)
            }
            Exponent::Scalar(s) => s,
        };
        let value = numeric::apply(Operator::Power, self.store.get_value(base), exp_value)?;
        Ok(self.store.add_node(NodeKind::Formula(Operator::Power), value, &parents, NodeMetadata::default()))
    }

    fn binary(&mut self, op: Operator, lhs: NodeId, rhs: NodeId) -> Result<NodeId, NumericError> {
        let value = numeric::apply(op, self.store.get_value(lhs), self.store.get_value(rhs))?;
        let parents: SmallVec<[NodeId; 2]> = SmallVec::from_slice(&[lhs, rhs]);
        Ok(self.store.add_node(NodeKind::Formula(op), value, &parents, NodeMetadata::default()))
    }

    // --- Accessors ---

    pub fn value(&self, id: NodeId) -> f64 {
        self.store.get_value(id)
    }

    pub fn operator(&self, id: NodeId) -> Option<Operator> {
        match self.store.get_kind(id) {
            NodeKind::Formula(op) => Some(op),
            NodeKind::Leaf => None,
        }
    }

    pub fn operands(&self, id: NodeId) -> &[NodeId] {
        self.store.get_parents(id)
    }

    pub fn name(&self, id: NodeId) -> &str {
        &self.store.get_meta(id).name
    }

    pub fn node_count(&self) -> usize {
        self.store.count()
    }
}
