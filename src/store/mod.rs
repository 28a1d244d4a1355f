//! The columnar node store: ids, operators, and the append-only registry.
pub mod registry;
pub mod types;

pub use registry::Registry;
pub use types::{Exponent, NodeId, NodeKind, NodeMetadata, Operator};
