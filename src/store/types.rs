use serde::{Serialize, Deserialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct NodeId(pub u32);

impl NodeId {
    #[inline(always)]
    pub fn index(&self) -> usize { self.0 as usize }
    pub fn new(idx: usize) -> Self { Self(idx as u32) }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
}

impl Operator {
    /// The display symbol used by the trace and DOT formatters.
    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "*",
            Operator::Divide => "/",
            Operator::Power => "**",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum NodeKind {
    /// An input value with no ancestors.
    Leaf,
    /// A value derived from its parents by one operator application.
    Formula(Operator),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeMetadata {
    pub name: String,
}

impl NodeMetadata {
    pub fn named(name: &str) -> Self {
        Self { name: name.to_string() }
    }
}

/// The exponent argument of a power operation.
///
/// A `Node` exponent becomes a full ancestor of the result; a `Scalar`
/// exponent is folded into the value and never appears in the graph.
/// The `From` impls below are the accepted scalar kinds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Exponent {
    Scalar(f64),
    Node(NodeId),
}

impl From<NodeId> for Exponent {
    fn from(id: NodeId) -> Self { Exponent::Node(id) }
}

impl From<f64> for Exponent {
    fn from(x: f64) -> Self { Exponent::Scalar(x) }
}

impl From<f32> for Exponent {
    fn from(x: f32) -> Self { Exponent::Scalar(x as f64) }
}

impl From<i64> for Exponent {
    fn from(x: i64) -> Self { Exponent::Scalar(x as f64) }
}

impl From<i32> for Exponent {
    fn from(x: i32) -> Self { Exponent::Scalar(x as f64) }
}

impl From<u32> for Exponent {
    fn from(x: u32) -> Self { Exponent::Scalar(x as f64) }
}
