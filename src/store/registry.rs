use super::types::*;
use serde::{Serialize, Deserialize};

/// The append-only node arena.
///
/// Every arithmetic operation appends exactly one node; the returned
/// `NodeId` is the allocation index and is the node's identity. Nodes are
/// never mutated after insertion, and a node can only reference ids that
/// existed before it, so the parent graph is acyclic by construction.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Registry {
    // Columnar Arrays
    pub kinds: Vec<NodeKind>,
    pub values: Vec<f64>,
    pub meta: Vec<NodeMetadata>,

    // Topology (CSR): parent back-references only. Forward edges are
    // derived during extraction, never stored.
    pub parents_flat: Vec<NodeId>,
    pub parents_ranges: Vec<(u32, u32)>, // (start, count)
}

impl Registry {
    pub fn new() -> Self { Self::default() }
    pub fn count(&self) -> usize { self.kinds.len() }

    pub fn add_node(&mut self, kind: NodeKind, value: f64, parents: &[NodeId], meta: NodeMetadata) -> NodeId {
        let id = NodeId(self.kinds.len() as u32);

        // 1. Register Parents
        let start = self.parents_flat.len() as u32;
        let count = parents.len() as u32;
        self.parents_flat.extend_from_slice(parents);
        self.parents_ranges.push((start, count));

        // 2. Payload + Metadata
        self.kinds.push(kind);
        self.values.push(value);
        self.meta.push(meta);

        id
    }

    #[inline(always)]
    pub fn get_parents(&self, id: NodeId) -> &[NodeId] {
        let (start, count) = self.parents_ranges[id.index()];
        &self.parents_flat[start as usize..(start + count) as usize]
    }

    #[inline(always)]
    pub fn get_value(&self, id: NodeId) -> f64 {
        self.values[id.index()]
    }

    pub fn get_kind(&self, id: NodeId) -> NodeKind {
        self.kinds[id.index()]
    }

    pub fn get_meta(&self, id: NodeId) -> &NodeMetadata {
        &self.meta[id.index()]
    }
}
