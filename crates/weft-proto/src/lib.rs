//! # weft-proto
//!
//! Wire payload types for the weft framework: the element payloads widgets
//! marshal, the block descriptors containers are built from, and the delta
//! messages a run enqueues for the display layer.
//!
//! Everything in this crate is plain serializable data. Each widget payload
//! carries a `form_id` field naming the form the widget belongs to; the
//! empty string (never an absent value) means "not in a form".

pub mod block;
pub mod delta;
pub mod element;

pub use block::{Block, BlockKind};
pub use delta::{Delta, DeltaOp};
pub use element::{Button, Checkbox, Element, Slider, TextInput};
