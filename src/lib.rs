//! Scalar expression DAGs with implicit construction and visual extraction.
//!
//! Arithmetic calls on an [`ExprGraph`] build a DAG as a side effect of
//! computing: every operation appends one immutable node recording its
//! operator and operand back-references. From any node the full ancestor
//! graph can be recovered and materialized into a [`RenderGraph`] for a
//! drawing backend.
//!
//! ```
//! use exprdag_core::{display, ExprGraph, RenderGraph};
//!
//! let mut g = ExprGraph::new();
//! let a = g.leaf(1.0);
//! let b = g.leaf(2.0);
//! let b2 = g.pow(b, 2)?;
//! let c = g.add(a, b2)?;
//! assert_eq!(g.value(c), 5.0);
//!
//! let render = RenderGraph::extract(&g, c);
//! assert_eq!(render.value_vertex_count(), 4);
//! assert_eq!(render.operator_vertex_count(), 2);
//!
//! let dot = display::to_dot(&render);
//! assert!(dot.contains("shape=box"));
//! # Ok::<(), exprdag_core::NumericError>(())
//! ```

pub mod analysis;
pub mod display;
pub mod expr;
pub mod model;
pub mod numeric;
pub mod store;

// Re-export key types for convenient access
pub use display::RenderGraph;
pub use expr::ExprGraph;
pub use model::{load_model, Model, ModelError};
pub use numeric::NumericError;
pub use store::{Exponent, NodeId, Operator};
