//! Builds an expression graph from a JSON model document.
//!
//! The document lists named inputs and a sequence of formulas, each
//! referring to earlier names:
//!
//! ```json
//! {
//!   "inputs": [ { "name": "a", "value": 1.0 }, { "name": "b", "value": 2.0 } ],
//!   "formulas": [
//!     { "name": "b2", "op": "power", "base": "b", "exponent": 2 },
//!     { "name": "c",  "op": "add",   "args": ["a", "b2"] }
//!   ]
//! }
//! ```
//!
//! The exponent field is the one dynamically typed spot in the format: a
//! number is folded in as a scalar, a string names an earlier node, and
//! anything else is a type mismatch.

use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;

use super::error::ModelError;
use crate::expr::ExprGraph;
use crate::store::{Exponent, NodeId};

#[derive(Debug, Deserialize)]
struct ModelDoc {
    #[serde(default)]
    inputs: Vec<InputDecl>,
    #[serde(default)]
    formulas: Vec<FormulaDecl>,
}

#[derive(Debug, Deserialize)]
struct InputDecl {
    name: String,
    value: f64,
}

#[derive(Debug, Deserialize)]
struct FormulaDecl {
    name: String,
    op: String,
    #[serde(default)]
    args: Vec<String>,
    base: Option<String>,
    exponent: Option<Value>,
}

/// A loaded model: the built graph plus the name table of its nodes.
#[derive(Debug, Clone, Default)]
pub struct Model {
    graph: ExprGraph,
    names: HashMap<String, NodeId>,
}

impl Model {
    pub fn graph(&self) -> &ExprGraph {
        &self.graph
    }

    pub fn node(&self, name: &str) -> Option<NodeId> {
        self.names.get(name).copied()
    }
}

/// Parses and builds a model from JSON text.
///
/// Building is all-or-nothing: the first failing declaration aborts the
/// load and nothing of it is observable.
pub fn load_model(text: &str) -> Result<Model, ModelError> {
    let doc: ModelDoc = serde_json::from_str(text)?;
    let mut model = Model::default();

    for input in doc.inputs {
        let id = model.graph.leaf_named(input.value, &input.name);
        bind(&mut model.names, input.name, id)?;
    }

    for formula in doc.formulas {
        let id = build_formula(&mut model, &formula)?;
        bind(&mut model.names, formula.name, id)?;
    }

    Ok(model)
}

fn bind(names: &mut HashMap<String, NodeId>, name: String, id: NodeId) -> Result<(), ModelError> {
    if names.contains_key(&name) {
        return Err(ModelError::DuplicateName(name));
    }
    names.insert(name, id);
    Ok(())
}

fn build_formula(model: &mut Model, formula: &FormulaDecl) -> Result<NodeId, ModelError> {
    if formula.op == "power" {
        return build_power(model, formula);
    }

    if formula.args.len() != 2 {
        return Err(ModelError::Arity {
            op: formula.op.clone(),
            expected: 2,
            found: formula.args.len(),
        });
    }
    let lhs = lookup(&model.names, &formula.args[0])?;
    let rhs = lookup(&model.names, &formula.args[1])?;

    let id = match formula.op.as_str() {
        "add" => model.graph.add(lhs, rhs)?,
        "subtract" => model.graph.sub(lhs, rhs)?,
        "multiply" => model.graph.mul(lhs, rhs)?,
        "divide" => model.graph.div(lhs, rhs)?,
        other => return Err(ModelError::UnknownOperation(other.to_string())),
    };
    Ok(id)
}

fn build_power(model: &mut Model, formula: &FormulaDecl) -> Result<NodeId, ModelError> {
    let base_name = formula.base.as_ref().ok_or_else(|| ModelError::MissingField {
        name: formula.name.clone(),
        field: "base",
    })?;
    let base = lookup(&model.names, base_name)?;

    let exponent = match &formula.exponent {
        Some(Value::Number(n)) => match n.as_f64() {
            Some(x) => Exponent::Scalar(x),
            None => return Err(ModelError::TypeMismatch { found: n.to_string() }),
        },
        Some(Value::String(s)) => Exponent::Node(lookup(&model.names, s)?),
        Some(other) => {
            return Err(ModelError::TypeMismatch { found: json_kind(other).to_string() })
        }
        None => {
            return Err(ModelError::MissingField {
                name: formula.name.clone(),
                field: "exponent",
            })
        }
    };

    Ok(model.graph.pow(base, exponent)?)
}

fn lookup(names: &HashMap<String, NodeId>, name: &str) -> Result<NodeId, ModelError> {
    names
        .get(name)
        .copied()
        .ok_or_else(|| ModelError::UnknownName(name.to_string()))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
