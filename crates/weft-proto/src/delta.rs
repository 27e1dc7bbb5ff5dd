//! Delta messages enqueued by a run.
//!
//! A run's output is an ordered sequence of deltas, each addressed by the
//! tree path of the container it targets. The display layer applies them in
//! order; tests inspect them directly.

use serde::{Deserialize, Serialize};

use crate::block::Block;
use crate::element::Element;

/// What a delta does to the tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DeltaOp {
    /// Appends a new leaf element.
    NewElement(Element),
    /// Appends a new block container.
    AddBlock(Block),
}

/// One enqueued change, addressed by the path of the node it creates.
///
/// The path's first component selects the root container (0 = main flow,
/// 1 = side panel); the remaining components are child indices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Delta {
    /// Tree address of the created node.
    pub path: Vec<u32>,
    /// The operation.
    pub op: DeltaOp,
}

impl Delta {
    /// Returns the element payload if this delta creates a leaf element.
    pub const fn element(&self) -> Option<&Element> {
        match &self.op {
            DeltaOp::NewElement(element) => Some(element),
            DeltaOp::AddBlock(_) => None,
        }
    }

    /// Returns the block descriptor if this delta creates a container.
    pub const fn block(&self) -> Option<&Block> {
        match &self.op {
            DeltaOp::AddBlock(block) => Some(block),
            DeltaOp::NewElement(_) => None,
        }
    }
}
