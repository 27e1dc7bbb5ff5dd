//! # weft
//!
//! A script-driven reactive UI framework core for Rust.
//!
//! This is the meta-crate that re-exports all sub-crates for convenient
//! access. Depend on `weft` for the whole framework, or on individual
//! crates for finer-grained control.

/// Foundation types: errors, widget identity, settings, and logging.
pub use weft_core as core;

/// Wire payload types: elements, blocks, and run deltas.
#[cfg(feature = "proto")]
pub use weft_proto as proto;

/// Per-run state: containers, the ambient scope stack, and sessions.
#[cfg(feature = "runtime")]
pub use weft_runtime as runtime;

/// Element construction: forms, widgets, and layout blocks.
#[cfg(feature = "elements")]
pub use weft_elements as elements;

/// Test harness with delta-queue assertions.
#[cfg(feature = "testing")]
pub use weft_test as test;

/// The traits and types most scripts need.
#[cfg(feature = "elements")]
pub mod prelude {
    pub use weft_core::{WeftError, WeftResult};
    pub use weft_elements::{FormExt, LayoutExt, WidgetExt};
    pub use weft_runtime::{Container, RunContext, ScriptRun, Session};
}
