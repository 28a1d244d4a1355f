//! DOT emission for the drawing backend.
//!
//! The backend consumes plain Graphviz text; nothing here performs I/O or
//! layout, so the core stays testable without any display dependency.

use petgraph::dot::{Config, Dot};

use crate::display::graph::{RenderGraph, VertexShape};

/// Serializes the render graph to Graphviz DOT.
///
/// Value-vertices are emitted as boxes, operator-vertices as circles.
pub fn to_dot(render: &RenderGraph) -> String {
    format!(
        "{:?}",
        Dot::with_attr_getters(
            render.graph(),
            &[Config::EdgeNoLabel, Config::NodeNoLabel],
            &|_, _| String::new(),
            &|_, (_, vertex)| {
                let shape = match vertex.shape() {
                    VertexShape::Box => "box",
                    VertexShape::Circle => "circle",
                };
                format!("shape={} label=\"{}\"", shape, escape(&vertex.label()))
            },
        )
    )
}

fn escape(label: &str) -> String {
    label.replace('\\', "\\\\").replace('"', "\\\"")
}
