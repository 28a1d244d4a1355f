use crate::expr::ExprGraph;
use crate::store::{NodeId, NodeKind, Operator};
use std::collections::HashMap;
use std::fmt::Write;

/// Formats an indented ASCII tree of the expression rooted at `target`.
///
/// A node reached more than once is printed in full the first time and as
/// a level reference afterwards.
pub fn format_trace(graph: &ExprGraph, target: NodeId) -> String {
    let mut tracer = Tracer {
        graph,
        visited_at_level: HashMap::new(),
        output: String::new(),
    };

    if target.index() < graph.node_count() {
        let _ = writeln!(tracer.output, "EXPRESSION TRACE for node '{}':", tracer.display_name(target));
        let _ = writeln!(tracer.output, "--------------------------------------------------");
        tracer.trace_node(target, 1, "");
    } else {
        let _ = writeln!(tracer.output, "Error: Invalid Node ID {:?}", target);
    }
    tracer.output
}

struct Tracer<'a> {
    graph: &'a ExprGraph,
    visited_at_level: HashMap<NodeId, usize>,
    output: String,
}

impl<'a> Tracer<'a> {
    fn trace_node(&mut self, node_id: NodeId, level: usize, prefix: &str) {
        if let Some(&first_seen) = self.visited_at_level.get(&node_id) {
            let _ = writeln!(self.output, "{}-> (Ref to L{})", prefix, first_seen);
            return;
        }
        self.visited_at_level.insert(node_id, level);

        let line_header = format!(
            "[L{}] {}[{:.3}]",
            level,
            self.display_name(node_id),
            self.graph.value(node_id)
        );

        match self.graph.store.get_kind(node_id) {
            NodeKind::Leaf => {
                let _ = writeln!(self.output, "{}{} -> Input", prefix, line_header);
            }
            NodeKind::Formula(op) => {
                let operands = self.graph.operands(node_id);
                let formula_str = self.format_formula(op, operands);
                let _ = writeln!(self.output, "{}{} = {}", prefix, line_header, formula_str);
                self.recurse_operands(prefix, operands, level);
            }
        }
    }

    fn recurse_operands(&mut self, prefix: &str, operands: &[NodeId], level: usize) {
        let stem = build_child_stem(prefix);
        for (i, &child) in operands.iter().enumerate() {
            let connector = if i == operands.len() - 1 { "`--" } else { "|--" };
            let full_prefix = format!("{}{}", stem, connector);
            self.trace_node(child, level + 1, &full_prefix);
        }
    }

    fn format_formula(&self, op: Operator, operands: &[NodeId]) -> String {
        if operands.len() == 2 {
            let lhs = self.format_operand_ref(operands[0]);
            let rhs = self.format_operand_ref(operands[1]);
            format!("{} {} {}", lhs, op.symbol(), rhs)
        } else {
            // Power with an untracked scalar exponent has a single operand.
            op.symbol().to_string()
        }
    }

    fn format_operand_ref(&self, id: NodeId) -> String {
        format!("{}[{:.3}]", self.display_name(id), self.graph.value(id))
    }

    fn display_name(&self, id: NodeId) -> String {
        let name = self.graph.name(id);
        if name.is_empty() {
            format!("n{}", id.0)
        } else {
            name.to_string()
        }
    }
}

fn build_child_stem(current_prefix: &str) -> String {
    current_prefix.replace("`--", "   ").replace("|--", "|  ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trace_prints_every_level_once() {
        let mut g = ExprGraph::new();
        let a = g.leaf_named(1.0, "a");
        let b = g.leaf_named(2.0, "b");
        let c = g.add(a, b).unwrap();

        let out = format_trace(&g, c);
        assert!(out.contains("[L1]"));
        assert!(out.contains("a[1.000] + b[2.000]"));
        assert!(out.contains("a[1.000] -> Input"));
        assert!(out.contains("b[2.000] -> Input"));
    }

    #[test]
    fn test_trace_deduplicates_diamond_operands() {
        let mut g = ExprGraph::new();
        let a = g.leaf_named(1.0, "a");
        let b = g.add(a, a).unwrap();

        let out = format_trace(&g, b);
        assert_eq!(out.matches("-> Input").count(), 1);
        assert!(out.contains("(Ref to L2)"));
    }

    #[test]
    fn test_trace_of_invalid_id_reports_error() {
        let g = ExprGraph::new();
        let out = format_trace(&g, NodeId::new(7));
        assert!(out.contains("Invalid Node ID"));
    }

    #[test]
    fn test_trace_of_scalar_power_shows_single_operand() {
        let mut g = ExprGraph::new();
        let b = g.leaf_named(2.0, "b");
        let p = g.pow(b, 2).unwrap();

        let out = format_trace(&g, p);
        assert!(out.contains("= **"));
        assert!(out.contains("b[2.000] -> Input"));
    }
}
