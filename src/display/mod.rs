//! Render-graph materialization and the textual output formats.
pub mod dot;
pub mod graph;
pub mod trace;

pub use dot::to_dot;
pub use graph::{RenderGraph, Vertex, VertexShape};
pub use trace::format_trace;
