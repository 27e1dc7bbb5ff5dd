//! Block descriptors for container creation.

use serde::{Deserialize, Serialize};

/// The structural kind of a block container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockKind {
    /// A plain vertical grouping of children.
    Vertical,
    /// A horizontal row, e.g. the wrapper around a set of columns.
    Horizontal,
    /// A form's root block. Its `form_id` is stamped at creation.
    Form,
}

/// Descriptor for a new block container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    /// The structural kind.
    pub kind: BlockKind,
    /// For form blocks, the form's id; empty otherwise.
    pub form_id: String,
}

impl Block {
    /// A plain vertical block.
    pub const fn vertical() -> Self {
        Self {
            kind: BlockKind::Vertical,
            form_id: String::new(),
        }
    }

    /// A horizontal row block.
    pub const fn horizontal() -> Self {
        Self {
            kind: BlockKind::Horizontal,
            form_id: String::new(),
        }
    }

    /// A form root block stamped with the form's id.
    pub fn form(form_id: impl Into<String>) -> Self {
        Self {
            kind: BlockKind::Form,
            form_id: form_id.into(),
        }
    }
}
